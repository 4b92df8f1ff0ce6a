use std::path::PathBuf;

use crate::foundation::error::ConvertResult;

/// Opaque identifier of a registered asset.
///
/// Handles are only meaningful to the resolver that produced them.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct AssetHandle(pub String);

impl AssetHandle {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AssetHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Import metadata of an asset, e.g. sprite frame borders or font metrics.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AssetMetadata {
    /// URL the asset is registered under.
    pub url: String,
    /// Free-form metadata fields.
    #[serde(default)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

impl AssetMetadata {
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.fields.get(key).and_then(serde_json::Value::as_f64)
    }

    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.fields.get(key).and_then(|v| {
            v.as_i64()
                .or_else(|| v.as_f64().map(|f| f.round() as i64))
        })
    }

    pub fn set(&mut self, key: &str, value: impl Into<serde_json::Value>) {
        self.fields.insert(key.to_owned(), value.into());
    }
}

/// Path ↔ handle resolution and metadata access provided by the host asset database.
pub trait AssetResolver {
    /// Handle registered for `url`, if any.
    fn resolve_handle(&self, url: &str) -> Option<AssetHandle>;

    /// Whether the asset behind `handle` is still present.
    fn handle_exists(&self, handle: &AssetHandle) -> bool;

    fn read_metadata(&self, handle: &AssetHandle) -> Option<AssetMetadata>;

    fn write_metadata(&mut self, handle: &AssetHandle, meta: AssetMetadata) -> ConvertResult<()>;
}

/// Registration of files with the host asset database.
pub trait AssetImporter {
    /// Register `paths` (files or directories) under the container `target_url`.
    ///
    /// Returns once the registry is updated, with the URLs that were registered.
    fn import_paths_into(&mut self, paths: &[PathBuf], target_url: &str)
    -> ConvertResult<Vec<String>>;
}
