//! sceneport converts Cocos Studio scene documents into Creator-style scene, prefab and
//! animation clip artifacts.
//!
//! # Pipeline overview
//!
//! 1. **Parse**: `.csd` bytes -> [`SourceDocument`] (generic attributed element tree)
//! 2. **Build**: `ObjectData` -> [`SceneGraph`] (depth-first, one initializer per node type,
//!    nested documents instantiated from their prefab)
//! 3. **Animate**: `Animation` timelines -> per-path tracks -> one [`AnimationClip`] per range
//! 4. **Write**: `.fire` / `.prefab` / `.anim` JSON, registered with the host asset database
//!
//! The asset database is only reached through [`AssetResolver`] and [`AssetImporter`];
//! [`AssetLibrary`] is an in-process implementation of both.
//!
//! Conversion is deterministic: artifact paths depend only on the source path and options,
//! and asset handles on the registered URL.
#![forbid(unsafe_code)]

pub mod animation;
pub mod assets;
pub mod convert;
pub mod document;
pub mod foundation;
pub mod import;
pub mod scene;

pub use animation::{ActionRange, AnimationClip, EasingSpec};
pub use assets::{AssetHandle, AssetImporter, AssetLibrary, AssetMetadata, AssetResolver};
pub use convert::{ActionTagIndex, BuildHost, DocumentState, NodeType};
pub use document::{DocumentKind, SourceDocument, SourceNode, parse_document};
pub use foundation::core::{Color, NodeId, Rotation, Transform};
pub use foundation::diag::{Diagnostic, Diagnostics};
pub use foundation::error::{ConvertError, ConvertResult};
pub use import::{
    ConvertedDocument, ImportOpts, ImportReport, ImportSession, StudioProject, import_project,
};
pub use scene::{ArtifactKind, Component, SceneArtifact, SceneGraph};
