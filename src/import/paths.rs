//! Where converted artifacts land on disk and in the asset database.
//!
//! Everything here is a pure function of the source path relative to the resource root, so a
//! repeated conversion writes the same files.

use std::path::{Path, PathBuf};

use crate::assets::url::{join_url, normalize_rel_path};
use crate::import::opts::ImportOpts;
use crate::scene::ArtifactKind;

/// Output locations of one source document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArtifactPaths {
    /// Directory of the source relative to the resource root, `/`-separated.
    pub rel_dir: String,
    pub stem: String,
    /// Output directory mirroring `rel_dir`.
    pub out_dir: PathBuf,
    /// Asset URL artifacts are registered under.
    pub target_url: String,
    action_folder_suffix: String,
}

impl ArtifactPaths {
    pub fn new(rel_source: &Path, opts: &ImportOpts, root_url: &str) -> Self {
        let rel_dir = rel_source
            .parent()
            .map(|p| normalize_rel_path(&p.to_string_lossy()))
            .unwrap_or_default();
        let stem = rel_source
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let out_dir = rel_dir
            .split('/')
            .filter(|s| !s.is_empty())
            .fold(opts.out_dir.clone(), |dir, seg| dir.join(seg));
        Self {
            target_url: join_url(root_url, &rel_dir),
            rel_dir,
            stem,
            out_dir,
            action_folder_suffix: opts.action_folder_suffix.clone(),
        }
    }

    pub fn artifact_file_name(&self, kind: ArtifactKind) -> String {
        format!("{}.{}", self.stem, kind.extension())
    }

    pub fn artifact_path(&self, kind: ArtifactKind) -> PathBuf {
        self.out_dir.join(self.artifact_file_name(kind))
    }

    pub fn artifact_url(&self, kind: ArtifactKind) -> String {
        join_url(&self.target_url, &self.artifact_file_name(kind))
    }

    pub fn action_folder_name(&self) -> String {
        format!("{}{}", self.stem, self.action_folder_suffix)
    }

    pub fn action_dir(&self) -> PathBuf {
        self.out_dir.join(self.action_folder_name())
    }

    pub fn clip_path(&self, range_name: &str) -> PathBuf {
        self.action_dir().join(format!("{range_name}.anim"))
    }

    pub fn clip_url(&self, range_name: &str) -> String {
        join_url(
            &join_url(&self.target_url, &self.action_folder_name()),
            &format!("{range_name}.anim"),
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/import/paths.rs"]
mod tests;
