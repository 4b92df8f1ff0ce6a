use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use crate::assets::{builtin, plist};
use crate::assets::resolver::{AssetHandle, AssetImporter, AssetMetadata, AssetResolver};
use crate::assets::url::{basename, basename_no_ext, join_url};
use crate::foundation::error::{ConvertError, ConvertResult};

const IMAGE_EXTS: &[&str] = &["png", "jpg", "jpeg", "webp", "bmp"];

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
struct LibraryEntry {
    handle: AssetHandle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    file: Option<PathBuf>,
    #[serde(default)]
    meta: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
struct LibraryIndex {
    entries: BTreeMap<String, LibraryEntry>,
}

/// In-process asset registry implementing both host collaborator traits.
///
/// Handles are derived from the URL, so re-registering the same tree yields the same handles.
/// Registration never copies bytes; the entry remembers the backing file and the asset only
/// exists while that file does.
#[derive(Debug, Default)]
pub struct AssetLibrary {
    entries: BTreeMap<String, LibraryEntry>,
    urls_by_handle: HashMap<AssetHandle, String>,
}

impl AssetLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Library with the engine's built-in fallback assets pre-registered.
    pub fn with_builtin_assets() -> Self {
        let mut lib = Self::new();
        for url in builtin::ALL {
            lib.register(url, None);
        }
        lib
    }

    /// Deterministic handle for `url`, formatted like a UUID.
    pub fn handle_for_url(url: &str) -> AssetHandle {
        let h = xxhash_rust::xxh3::xxh3_128(url.as_bytes());
        let hex = format!("{h:032x}");
        AssetHandle(format!(
            "{}-{}-{}-{}-{}",
            &hex[0..8],
            &hex[8..12],
            &hex[12..16],
            &hex[16..20],
            &hex[20..32]
        ))
    }

    /// Register `url`, optionally backed by `file`. Re-registering keeps existing metadata.
    pub fn register(&mut self, url: &str, file: Option<PathBuf>) -> AssetHandle {
        let handle = Self::handle_for_url(url);
        let entry = self
            .entries
            .entry(url.to_owned())
            .or_insert_with(|| LibraryEntry {
                handle: handle.clone(),
                file: None,
                meta: serde_json::Map::new(),
            });
        if file.is_some() {
            entry.file = file;
        }
        self.urls_by_handle.insert(handle.clone(), url.to_owned());
        handle
    }

    /// URL a handle was registered under.
    pub fn url_of(&self, handle: &AssetHandle) -> Option<&str> {
        self.urls_by_handle.get(handle).map(String::as_str)
    }

    /// Backing file of a registered URL.
    pub fn file_of(&self, url: &str) -> Option<&Path> {
        self.entries.get(url).and_then(|e| e.file.as_deref())
    }

    /// Registered URLs in sorted order.
    pub fn urls(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Load a previously saved index.
    pub fn load(path: &Path) -> ConvertResult<Self> {
        let bytes = std::fs::read(path).map_err(|e| ConvertError::io(path, e))?;
        let index: LibraryIndex = serde_json::from_slice(&bytes)
            .map_err(|e| ConvertError::serde(format!("parse library index: {e}")))?;
        let urls_by_handle = index
            .entries
            .iter()
            .map(|(url, e)| (e.handle.clone(), url.clone()))
            .collect();
        Ok(Self {
            entries: index.entries,
            urls_by_handle,
        })
    }

    /// Persist the index as pretty JSON.
    pub fn save(&self, path: &Path) -> ConvertResult<()> {
        let index = LibraryIndex {
            entries: self.entries.clone(),
        };
        let json = serde_json::to_string_pretty(&index)
            .map_err(|e| ConvertError::serde(format!("serialize library index: {e}")))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConvertError::io(parent, e))?;
        }
        std::fs::write(path, json).map_err(|e| ConvertError::io(path, e))
    }

    fn register_file(&mut self, file: &Path, url: String, out: &mut Vec<String>) {
        let is_image = file
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| IMAGE_EXTS.contains(&e.to_ascii_lowercase().as_str()));

        self.register(&url, Some(file.to_path_buf()));
        out.push(url.clone());

        let ext = file
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("fnt") => self.record_font_metrics(file, &url),
            Some("plist") => self.register_atlas_frames(file, &url, out),
            _ => {}
        }

        if is_image {
            // Images expose a sprite frame sub-asset named after the file stem.
            let frame_url = join_url(&url, basename_no_ext(&url));
            let handle = self.register(&frame_url, Some(file.to_path_buf()));
            match image::image_dimensions(file) {
                Ok((w, h)) => {
                    if let Some(entry) = self.entries.get_mut(&frame_url) {
                        entry.meta.entry("rawWidth").or_insert(w.into());
                        entry.meta.entry("rawHeight").or_insert(h.into());
                    }
                }
                Err(e) => {
                    tracing::debug!(url = %frame_url, handle = %handle, "image size unavailable: {e}");
                }
            }
            out.push(frame_url);
        }
    }

    /// BMFont descriptors carry their nominal size and line height in the `info`/`common` lines.
    fn record_font_metrics(&mut self, file: &Path, url: &str) {
        let text = match std::fs::read_to_string(file) {
            Ok(text) => text,
            Err(e) => {
                tracing::debug!(url, "font descriptor unreadable: {e}");
                return;
            }
        };
        let Some(entry) = self.entries.get_mut(url) else {
            return;
        };
        let fields = [
            ("info", "size", "fontSize"),
            ("common", "lineHeight", "commonHeight"),
        ];
        for (line_tag, key, meta_key) in fields {
            if let Some(v) = fnt_line_value(&text, line_tag, key) {
                entry.meta.insert(meta_key.to_owned(), v.abs().into());
            }
        }
    }

    /// Sprite atlases expose one frame per entry, with path separators flattened to `-`.
    fn register_atlas_frames(&mut self, file: &Path, url: &str, out: &mut Vec<String>) {
        let names = std::fs::read_to_string(file)
            .map_err(|e| ConvertError::io(file, e))
            .and_then(|text| plist::frame_names(&text));
        match names {
            Ok(names) => {
                for name in names {
                    let frame_url = join_url(url, &name.replace(['/', '\\'], "-"));
                    self.register(&frame_url, Some(file.to_path_buf()));
                    out.push(frame_url);
                }
            }
            Err(e) => tracing::debug!(url, "not a readable property list: {e}"),
        }
    }

    fn register_dir(&mut self, dir: &Path, url: &str, out: &mut Vec<String>) -> ConvertResult<()> {
        let mut children = std::fs::read_dir(dir)
            .map_err(|e| ConvertError::io(dir, e))?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ConvertError::io(dir, e))?;
        children.sort();

        self.register(url, Some(dir.to_path_buf()));
        for child in children {
            let name = child
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let child_url = join_url(url, &name);
            if child.is_dir() {
                self.register_dir(&child, &child_url, out)?;
            } else {
                self.register_file(&child, child_url, out);
            }
        }
        Ok(())
    }
}

impl AssetResolver for AssetLibrary {
    fn resolve_handle(&self, url: &str) -> Option<AssetHandle> {
        self.entries.get(url).map(|e| e.handle.clone())
    }

    fn handle_exists(&self, handle: &AssetHandle) -> bool {
        let Some(url) = self.urls_by_handle.get(handle) else {
            return false;
        };
        match self.entries.get(url).and_then(|e| e.file.as_deref()) {
            Some(file) => file.exists(),
            None => self.entries.contains_key(url),
        }
    }

    fn read_metadata(&self, handle: &AssetHandle) -> Option<AssetMetadata> {
        let url = self.urls_by_handle.get(handle)?;
        let entry = self.entries.get(url)?;
        Some(AssetMetadata {
            url: url.clone(),
            fields: entry.meta.clone(),
        })
    }

    fn write_metadata(&mut self, handle: &AssetHandle, meta: AssetMetadata) -> ConvertResult<()> {
        let url = self
            .urls_by_handle
            .get(handle)
            .ok_or_else(|| ConvertError::asset(format!("unknown asset handle '{handle}'")))?;
        let entry = self
            .entries
            .get_mut(url)
            .ok_or_else(|| ConvertError::asset(format!("asset '{url}' is not registered")))?;
        entry.meta = meta.fields;
        Ok(())
    }
}

impl AssetImporter for AssetLibrary {
    fn import_paths_into(
        &mut self,
        paths: &[PathBuf],
        target_url: &str,
    ) -> ConvertResult<Vec<String>> {
        let mut out = Vec::new();
        for path in paths {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .ok_or_else(|| {
                    ConvertError::import(format!("'{}' has no file name", path.display()))
                })?;
            let url = join_url(target_url, &name);
            if path.is_dir() {
                self.register_dir(path, &url, &mut out)?;
            } else if path.is_file() {
                self.register_file(path, url, &mut out);
            } else {
                return Err(ConvertError::import(format!(
                    "'{}' does not exist",
                    path.display()
                )));
            }
        }
        tracing::debug!(target_url, count = out.len(), "registered assets");
        Ok(out)
    }
}

impl AssetLibrary {
    /// Convenience for callers holding a URL rather than a handle.
    pub fn metadata_for_url(&self, url: &str) -> Option<AssetMetadata> {
        let handle = self.resolve_handle(url)?;
        self.read_metadata(&handle)
    }

    /// Basename of the URL registered for `handle`.
    pub fn name_of(&self, handle: &AssetHandle) -> Option<&str> {
        self.url_of(handle).map(basename)
    }
}

/// Integer `key=value` pair from the first BMFont line starting with `line_tag`.
pub(crate) fn fnt_line_value(text: &str, line_tag: &str, key: &str) -> Option<i64> {
    let line = text
        .lines()
        .find(|l| l.split_whitespace().next() == Some(line_tag))?;
    line.split_whitespace().find_map(|item| {
        let (k, v) = item.split_once('=')?;
        (k == key).then(|| v.trim_matches('"').parse().ok()).flatten()
    })
}

#[cfg(test)]
#[path = "../../tests/unit/assets/library.rs"]
mod tests;
