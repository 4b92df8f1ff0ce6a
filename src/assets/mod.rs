//! Host asset database seams and an in-process implementation of them.

pub mod builtin;
pub mod library;
pub mod plist;
pub mod resolver;
pub mod url;

pub use library::AssetLibrary;
pub use resolver::{AssetHandle, AssetImporter, AssetMetadata, AssetResolver};
