pub mod component;
pub mod graph;
pub mod record;

pub use component::Component;
pub use graph::{SceneGraph, TargetNode};
pub use record::{ArtifactKind, NodeRecord, SceneArtifact};
