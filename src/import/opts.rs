use std::path::{Path, PathBuf};

use crate::foundation::error::{ConvertError, ConvertResult};

/// Options for an import run.
///
/// Every field has a default, so a JSON config file only needs the keys it changes.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ImportOpts {
    /// Directory converted artifacts are written to.
    pub out_dir: PathBuf,
    /// URL of the host asset database root.
    pub assets_root_url: String,
    /// Sample rate of generated clips; keyframe times are `frame / fps`.
    pub fps: u32,
    /// Appended to a document's stem to name the folder holding its clips.
    pub action_folder_suffix: String,
    /// Callback name written into frame events.
    pub frame_event_func: String,
}

impl Default for ImportOpts {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("converted"),
            assets_root_url: "db://assets".to_owned(),
            fps: 60,
            action_folder_suffix: "_action".to_owned(),
            frame_event_func: "triggerAnimationEvent".to_owned(),
        }
    }
}

impl ImportOpts {
    /// Read options from a JSON file.
    pub fn load(path: &Path) -> ConvertResult<Self> {
        let bytes = std::fs::read(path).map_err(|e| ConvertError::io(path, e))?;
        serde_json::from_slice(&bytes)
            .map_err(|e| ConvertError::serde(format!("parse options '{}': {e}", path.display())))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/import/opts.rs"]
mod tests;
