//! Studio project files (`.ccs`): the document list and the resources a conversion needs.

use std::path::{Path, PathBuf};

use crate::assets::plist;
use crate::assets::resolver::{AssetImporter, AssetResolver};
use crate::assets::url::join_url;
use crate::foundation::diag::Diagnostics;
use crate::foundation::error::{ConvertError, ConvertResult};
use crate::import::document::{ImportReport, ImportSession};
use crate::import::opts::ImportOpts;

/// Folder next to the project file that holds every studio resource.
pub const RESOURCE_FOLDER: &str = "cocosstudio";

/// Parsed project file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StudioProject {
    pub name: String,
    pub version: Option<String>,
    /// `<project dir>/cocosstudio`.
    pub res_root: PathBuf,
    /// Documents relative to `res_root`, in declaration order.
    pub documents: Vec<PathBuf>,
    /// Resource files relative to `res_root`, including files they depend on.
    pub resources: Vec<PathBuf>,
}

impl StudioProject {
    /// Read and parse a project file. The resource folder must exist next to it.
    pub fn load(path: &Path) -> ConvertResult<Self> {
        let project_dir = path.parent().unwrap_or_else(|| Path::new("."));
        let res_root = project_dir.join(RESOURCE_FOLDER);
        if !res_root.is_dir() {
            return Err(ConvertError::import(format!(
                "resource directory '{}' does not exist",
                res_root.display()
            )));
        }
        let text = std::fs::read_to_string(path).map_err(|e| ConvertError::io(path, e))?;
        Self::parse(&text, res_root)
    }

    /// Parse project markup. Dependencies of fonts, particles and tile maps are read from
    /// `res_root` when present.
    pub fn parse(text: &str, res_root: PathBuf) -> ConvertResult<Self> {
        let doc = roxmltree::Document::parse(text)
            .map_err(|e| ConvertError::parse(format!("project file: {e}")))?;
        let root = doc.root_element();

        let group = root
            .descendants()
            .find(|n| n.has_tag_name("PropertyGroup"))
            .ok_or_else(|| ConvertError::parse("project file has no PropertyGroup"))?;
        let name = group
            .attribute("Name")
            .filter(|n| !n.is_empty())
            .ok_or_else(|| ConvertError::parse("project file has no Name"))?
            .to_owned();
        let version = group.attribute("Version").map(str::to_owned);

        let folder = root
            .descendants()
            .find(|n| n.has_tag_name("SolutionFolder"))
            .and_then(|n| n.descendants().find(|n| n.has_tag_name("Group")))
            .and_then(|n| n.descendants().find(|n| n.has_tag_name("RootFolder")))
            .ok_or_else(|| ConvertError::parse("project file has no RootFolder"))?;

        let mut walk = ResourceWalk {
            res_root: &res_root,
            documents: Vec::new(),
            resources: Vec::new(),
        };
        walk.folder(folder, Path::new(""));
        let ResourceWalk {
            documents,
            resources,
            ..
        } = walk;

        Ok(Self {
            name,
            version,
            res_root,
            documents,
            resources,
        })
    }

    /// Asset URL the project's resources and artifacts are registered under.
    pub fn root_url(&self, assets_root_url: &str) -> String {
        join_url(assets_root_url, &self.name)
    }
}

struct ResourceWalk<'a> {
    res_root: &'a Path,
    documents: Vec<PathBuf>,
    resources: Vec<PathBuf>,
}

impl ResourceWalk<'_> {
    fn folder(&mut self, folder: roxmltree::Node<'_, '_>, dir: &Path) {
        for child in folder.children().filter(|n| n.is_element()) {
            let path = dir.join(child.attribute("Name").unwrap_or_default());
            match child.tag_name().name() {
                "Folder" => self.folder(child, &path),
                "Project" => self.documents.push(path),
                "Image" | "TTF" | "Audio" => self.add(path),
                "PlistImageFolder" => {
                    for attr in ["PListFile", "Image"] {
                        if let Some(file) = child.attribute(attr).filter(|f| !f.is_empty()) {
                            self.add(dir.join(file));
                        }
                    }
                }
                "Fnt" => self.font(path),
                "PlistParticleFile" => self.particle(path),
                "TmxFile" => self.tile_map(path),
                other => tracing::trace!(element = other, "ignored project element"),
            }
        }
    }

    fn add(&mut self, path: PathBuf) {
        if !self.resources.contains(&path) {
            self.resources.push(path);
        }
    }

    fn read(&self, rel: &Path) -> Option<String> {
        std::fs::read_to_string(self.res_root.join(rel)).ok()
    }

    /// Bitmap fonts reference their page image on the `page` line.
    fn font(&mut self, path: PathBuf) {
        let page = self.read(&path).and_then(|text| fnt_page_file(&text));
        let dir = parent_of(&path);
        self.add(path);
        if let Some(file) = page {
            self.add(dir.join(file));
        }
    }

    fn particle(&mut self, path: PathBuf) {
        let texture = self
            .read(&path)
            .and_then(|text| plist::top_level_string(&text, "textureFileName").ok().flatten())
            .filter(|t| !t.is_empty());
        let dir = parent_of(&path);
        self.add(path);
        if let Some(texture) = texture {
            let image = dir.join(texture);
            if self.res_root.join(&image).exists() {
                self.add(image);
            }
        }
    }

    /// Tile maps pull in external tilesets and every tileset image.
    fn tile_map(&mut self, path: PathBuf) {
        let text = self.read(&path);
        let dir = parent_of(&path);
        self.add(path);
        let Some(text) = text else {
            return;
        };
        let Ok(doc) = roxmltree::Document::parse(&text) else {
            tracing::debug!("tile map is not well-formed");
            return;
        };
        for tileset in doc.descendants().filter(|n| n.has_tag_name("tileset")) {
            if let Some(tsx) = tileset.attribute("source").filter(|s| !s.is_empty()) {
                let tsx_path = dir.join(tsx);
                let tsx_text = self.read(&tsx_path);
                let tsx_dir = parent_of(&tsx_path);
                self.add(tsx_path);
                if let Some(tsx_text) = tsx_text
                    && let Ok(tsx_doc) = roxmltree::Document::parse(&tsx_text)
                {
                    self.tileset_images(tsx_doc.root_element(), &tsx_dir);
                }
            }
            self.tileset_images(tileset, &dir);
        }
    }

    fn tileset_images(&mut self, tileset: roxmltree::Node<'_, '_>, dir: &Path) {
        for image in tileset.descendants().filter(|n| n.has_tag_name("image")) {
            if let Some(source) = image.attribute("source").filter(|s| !s.is_empty()) {
                self.add(dir.join(source));
            }
        }
    }
}

fn parent_of(path: &Path) -> PathBuf {
    path.parent().map(Path::to_path_buf).unwrap_or_default()
}

/// Image file named by the `file=` item of a BMFont `page` line.
pub(crate) fn fnt_page_file(text: &str) -> Option<String> {
    let line = text
        .lines()
        .find(|l| l.split_whitespace().next() == Some("page"))?;
    line.split_whitespace().find_map(|item| {
        let (k, v) = item.split_once('=')?;
        (k == "file").then(|| v.trim_matches('"').to_owned())
    })
}

/// Import a whole project: register its resources, then convert every listed document.
#[tracing::instrument(skip(store, opts), fields(project = %project_file.display()))]
pub fn import_project<S: AssetResolver + AssetImporter>(
    store: S,
    opts: ImportOpts,
    project_file: &Path,
) -> ConvertResult<(S, ImportReport, Diagnostics)> {
    let project = StudioProject::load(project_file)?;
    tracing::info!(
        name = %project.name,
        version = project.version.as_deref().unwrap_or("unknown"),
        documents = project.documents.len(),
        "project loaded"
    );
    let root_url = project.root_url(&opts.assets_root_url);
    let mut session = ImportSession::new(store, opts, project.res_root.clone(), &root_url);
    session.import_resources(&project.resources)?;
    for document in &project.documents {
        session.convert_document(document)?;
    }
    Ok(session.finish())
}

#[cfg(test)]
#[path = "../../tests/unit/import/project.rs"]
mod tests;
