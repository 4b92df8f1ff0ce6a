//! Studio node tree → target scene graph.

pub mod builder;
pub mod components;
pub mod containers;
pub mod context;
pub mod props;
pub mod refs;
pub mod types;
pub mod widget;

pub use builder::{ActionTagIndex, DocumentState, TaggedNode, build_tree, sanitize_name};
pub use context::{BuildHost, InitCtx};
pub use types::NodeType;
