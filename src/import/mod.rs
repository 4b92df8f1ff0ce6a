//! Import orchestration: documents, projects and where their artifacts go.

pub mod document;
pub mod opts;
pub mod paths;
pub mod project;

pub use document::{
    ConvertedDocument, ImportReport, ImportSession, PrefabCache, PrefabSource, SkippedDocument,
    instantiate_prefab,
};
pub use opts::ImportOpts;
pub use paths::ArtifactPaths;
pub use project::{StudioProject, import_project};
