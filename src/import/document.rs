use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::{Path, PathBuf};

use crate::animation::{action_ranges, extract, has_timelines, segment};
use crate::assets::resolver::{AssetHandle, AssetImporter, AssetResolver};
use crate::assets::url::{basename_no_ext, join_url, normalize_rel_path};
use crate::convert::{BuildHost, DocumentState, InitCtx, build_tree};
use crate::document::{SourceDocument, parse_document};
use crate::foundation::core::{NodeId, Vec2};
use crate::foundation::diag::Diagnostics;
use crate::foundation::error::{ConvertError, ConvertResult};
use crate::import::opts::ImportOpts;
use crate::import::paths::ArtifactPaths;
use crate::scene::component::{AnimationComponent, ClipRef};
use crate::scene::{ArtifactKind, Component, SceneArtifact, SceneGraph};

/// Converted prefab graphs a nested document reference can be instantiated from.
pub trait PrefabSource {
    fn prefab(&self, handle: &AssetHandle) -> Option<(&SceneGraph, NodeId)>;
}

/// Prefabs converted during the current run, kept in memory by handle.
#[derive(Debug, Default)]
pub struct PrefabCache {
    entries: HashMap<AssetHandle, (SceneGraph, NodeId)>,
}

impl PrefabCache {
    pub fn insert(&mut self, handle: AssetHandle, graph: SceneGraph, root: NodeId) {
        self.entries.insert(handle, (graph, root));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PrefabSource for PrefabCache {
    fn prefab(&self, handle: &AssetHandle) -> Option<(&SceneGraph, NodeId)> {
        self.entries.get(handle).map(|(g, root)| (g, *root))
    }
}

/// Copy the prefab behind `handle` into `into` as a detached subtree linked to the prefab.
pub fn instantiate_prefab(
    source: &dyn PrefabSource,
    handle: &AssetHandle,
    into: &mut SceneGraph,
) -> Option<NodeId> {
    let (graph, root) = source.prefab(handle)?;
    let id = into.graft(graph, root);
    into.node_mut(id).prefab = Some(handle.clone());
    Some(id)
}

/// Outcome of one converted document.
#[derive(Clone, Debug, PartialEq)]
pub struct ConvertedDocument {
    pub source: PathBuf,
    pub kind: ArtifactKind,
    pub artifact: PathBuf,
    pub url: String,
    /// Handle the registry assigned to the artifact.
    pub handle: Option<AssetHandle>,
    pub clips: Vec<PathBuf>,
}

/// Document that could not be converted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedDocument {
    pub source: PathBuf,
    pub reason: String,
}

/// Summary of an import run.
#[derive(Clone, Debug, Default)]
pub struct ImportReport {
    /// Converted documents in completion order; nested documents precede their parents.
    pub converted: Vec<ConvertedDocument>,
    pub skipped: Vec<SkippedDocument>,
    /// Asset URLs registered for plain resources.
    pub resources: Vec<String>,
}

/// One import run over a resource root.
///
/// Owns the cross-document state: documents already converted, documents currently being
/// converted (re-entering one is a cycle) and the prefabs produced so far.
pub struct ImportSession<S> {
    store: S,
    opts: ImportOpts,
    res_root: PathBuf,
    root_url: String,
    diag: Diagnostics,
    imported: HashMap<PathBuf, ConvertedDocument>,
    in_progress: HashSet<PathBuf>,
    prefabs: PrefabCache,
    report: ImportReport,
}

impl<S: AssetResolver + AssetImporter> ImportSession<S> {
    /// `res_root` is the directory studio paths are relative to; it maps to `root_url`.
    pub fn new(store: S, opts: ImportOpts, res_root: impl Into<PathBuf>, root_url: &str) -> Self {
        Self {
            store,
            opts,
            res_root: res_root.into(),
            root_url: root_url.trim_end_matches('/').to_owned(),
            diag: Diagnostics::new(),
            imported: HashMap::new(),
            in_progress: HashSet::new(),
            prefabs: PrefabCache::default(),
            report: ImportReport::default(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diag
    }

    pub fn report(&self) -> &ImportReport {
        &self.report
    }

    pub fn root_url(&self) -> &str {
        &self.root_url
    }

    pub fn res_root(&self) -> &Path {
        &self.res_root
    }

    pub fn finish(self) -> (S, ImportReport, Diagnostics) {
        (self.store, self.report, self.diag)
    }

    /// Register resource files given relative to the resource root, each under the URL of its
    /// directory. Missing files are reported and skipped.
    pub fn import_resources(&mut self, rel_paths: &[PathBuf]) -> ConvertResult<usize> {
        let mut by_dir: BTreeMap<String, Vec<PathBuf>> = BTreeMap::new();
        for rel in rel_paths {
            let abs = self.res_root.join(rel);
            if !abs.exists() {
                self.diag.warn(
                    "",
                    &rel.to_string_lossy(),
                    format!("resource '{}' not found", abs.display()),
                );
                continue;
            }
            let dir = rel
                .parent()
                .map(|p| normalize_rel_path(&p.to_string_lossy()))
                .unwrap_or_default();
            let files = by_dir.entry(dir).or_default();
            if !files.contains(&abs) {
                files.push(abs);
            }
        }

        let mut count = 0;
        for (dir, files) in by_dir {
            let target = join_url(&self.root_url, &dir);
            let urls = self.store.import_paths_into(&files, &target)?;
            count += urls.len();
            self.report.resources.extend(urls);
        }
        tracing::info!(count, root_url = %self.root_url, "resources registered");
        Ok(count)
    }

    /// Register every entry of the resource root except studio documents.
    pub fn import_resource_dir(&mut self) -> ConvertResult<usize> {
        let mut entries = std::fs::read_dir(&self.res_root)
            .map_err(|e| ConvertError::io(&self.res_root, e))?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ConvertError::io(&self.res_root, e))?;
        entries.sort();
        let out_dir = comparable_path(&self.opts.out_dir);
        let rel: Vec<PathBuf> = entries
            .iter()
            .filter(|p| !is_studio_document(p) && !comparable_path(p).starts_with(&out_dir))
            .filter_map(|p| p.file_name().map(PathBuf::from))
            .collect();
        self.import_resources(&rel)
    }

    /// Convert one document, given absolute or relative to the resource root.
    ///
    /// Documents that cannot be parsed are skipped and reported; `Ok(None)` is returned for them.
    /// Only output and registry failures are errors.
    #[tracing::instrument(skip(self, source), fields(source = %source.display()))]
    pub fn convert_document(&mut self, source: &Path) -> ConvertResult<Option<ConvertedDocument>> {
        let abs = if source.is_absolute() {
            source.to_path_buf()
        } else {
            self.res_root.join(source)
        };
        match self.convert_tracked(abs.clone()) {
            Ok(done) => Ok(Some(done)),
            Err(e) if e.is_document_fatal() => {
                tracing::warn!(source = %abs.display(), "skipping document: {e}");
                self.report.skipped.push(SkippedDocument {
                    source: abs,
                    reason: e.to_string(),
                });
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    fn relative(&self, abs: &Path) -> PathBuf {
        match abs.strip_prefix(&self.res_root) {
            Ok(rel) => rel.to_path_buf(),
            Err(_) => abs.file_name().map(PathBuf::from).unwrap_or_default(),
        }
    }

    fn convert_tracked(&mut self, abs: PathBuf) -> ConvertResult<ConvertedDocument> {
        if let Some(done) = self.imported.get(&abs) {
            return Ok(done.clone());
        }
        if self.in_progress.contains(&abs) {
            return Err(ConvertError::Cycle(abs));
        }

        let bytes = std::fs::read(&abs)
            .map_err(|e| ConvertError::parse(format!("cannot read '{}': {e}", abs.display())))?;
        let doc = parse_document(&bytes)?;
        let rel = self.relative(&abs);

        self.in_progress.insert(abs.clone());
        let previous = self.diag.enter_document(rel.to_string_lossy());
        let result = self.convert_parsed(&abs, &rel, &doc);
        self.diag.leave_document(previous);
        self.in_progress.remove(&abs);

        let done = result?;
        tracing::info!(
            source = %rel.display(),
            artifact = %done.artifact.display(),
            clips = done.clips.len(),
            "document converted"
        );
        self.imported.insert(abs, done.clone());
        self.report.converted.push(done.clone());
        Ok(done)
    }

    fn convert_parsed(
        &mut self,
        abs: &Path,
        rel: &Path,
        doc: &SourceDocument,
    ) -> ConvertResult<ConvertedDocument> {
        let paths = ArtifactPaths::new(rel, &self.opts, &self.root_url);
        let kind = if doc.kind.is_scene() {
            ArtifactKind::Scene
        } else {
            ArtifactKind::Prefab
        };
        let object_data = doc
            .object_data()
            .ok_or_else(|| ConvertError::parse("document has no ObjectData"))?;

        let mut state = DocumentState::new();
        let root = match kind {
            ArtifactKind::Scene => scene_root(&mut state.graph)?,
            ArtifactKind::Prefab => state.graph.create(paths.stem.as_str()),
        };
        build_tree(self, &mut state, root, object_data)?;
        let clips = self.write_clips(doc, &paths, &mut state, root)?;

        let artifact = SceneArtifact::from_graph(kind, &paths.stem, &state.graph, root);
        let artifact_path = paths.artifact_path(kind);
        write_file(&artifact_path, &artifact.to_json_pretty()?)?;
        self.store
            .import_paths_into(std::slice::from_ref(&artifact_path), &paths.target_url)?;

        let url = paths.artifact_url(kind);
        let handle = self.store.resolve_handle(&url);
        match (&handle, kind) {
            (Some(h), ArtifactKind::Prefab) => self.prefabs.insert(h.clone(), state.graph, root),
            (None, _) => tracing::warn!(url = %url, "artifact was not registered"),
            _ => {}
        }

        Ok(ConvertedDocument {
            source: abs.to_path_buf(),
            kind,
            artifact: artifact_path,
            url,
            handle,
            clips,
        })
    }

    /// Write one clip per action range and give the root an animation component listing the
    /// clips the registry resolved. Documents without timelines get neither.
    fn write_clips(
        &mut self,
        doc: &SourceDocument,
        paths: &ArtifactPaths,
        state: &mut DocumentState,
        root: NodeId,
    ) -> ConvertResult<Vec<PathBuf>> {
        let Some(animation) = doc.animation() else {
            return Ok(Vec::new());
        };
        if !has_timelines(animation) {
            return Ok(Vec::new());
        }

        let duration = animation.int_or("Duration", 0);
        let speed = animation.float_or("Speed", 0.0);
        let fps = self.opts.fps;
        let event_func = self.opts.frame_event_func.clone();
        let ranges = action_ranges(&paths.stem, duration, doc.animation_list());
        let data = extract(
            animation,
            &state.tags,
            &state.graph,
            &mut self.init_ctx(),
            &event_func,
        );

        let action_dir = paths.action_dir();
        std::fs::create_dir_all(&action_dir).map_err(|e| ConvertError::io(&action_dir, e))?;
        let mut written = Vec::with_capacity(ranges.len());
        for range in &ranges {
            let clip = segment(&data, range, fps, speed);
            let path = paths.clip_path(&range.name);
            write_file(&path, &clip.to_json_pretty()?)?;
            tracing::debug!(clip = %range.name, keyframes = clip.keyframe_count(), "clip written");
            written.push(path);
        }
        self.store
            .import_paths_into(std::slice::from_ref(&action_dir), &paths.target_url)?;

        let clips = ranges
            .iter()
            .filter_map(|range| {
                let url = paths.clip_url(&range.name);
                let handle = self.store.resolve_handle(&url)?;
                Some(ClipRef {
                    name: basename_no_ext(&url).to_owned(),
                    handle,
                })
            })
            .collect();
        let component = Component::Animation(AnimationComponent { clips });
        if let Err(e) = state.graph.add_component(root, component) {
            let name = state.graph.node(root).name.clone();
            self.diag.warn(&name, "cc.Animation", e.to_string());
        }
        Ok(written)
    }
}

impl<S: AssetResolver + AssetImporter> BuildHost for ImportSession<S> {
    fn init_ctx(&mut self) -> InitCtx<'_> {
        InitCtx {
            resolver: &mut self.store,
            diag: &mut self.diag,
            root_url: &self.root_url,
        }
    }

    fn instantiate_nested(
        &mut self,
        source_path: &str,
        into: &mut SceneGraph,
    ) -> ConvertResult<Option<NodeId>> {
        let abs = self.res_root.join(normalize_rel_path(source_path));
        let done = self.convert_tracked(abs)?;
        if done.kind != ArtifactKind::Prefab {
            return Ok(None);
        }
        let Some(handle) = done.handle else {
            return Ok(None);
        };
        Ok(instantiate_prefab(&self.prefabs, &handle, into))
    }
}

/// `Scene` root (anchored at the origin) holding a `Canvas` with the `Main Camera`.
fn scene_root(graph: &mut SceneGraph) -> ConvertResult<NodeId> {
    let root = graph.create("Scene");
    graph.node_mut(root).transform.anchor = Vec2::ZERO;

    let canvas = graph.create("Canvas");
    graph.add_component(canvas, Component::Canvas)?;
    graph.add_child(root, canvas)?;

    let camera = graph.create("Main Camera");
    graph.add_component(camera, Component::Camera)?;
    graph.add_child(canvas, camera)?;
    Ok(root)
}

/// Form of `path` that compares equal however it was spelled (`./out`, `out`, absolute).
fn comparable_path(path: &Path) -> PathBuf {
    std::fs::canonicalize(path)
        .or_else(|_| std::path::absolute(path))
        .unwrap_or_else(|_| path.to_path_buf())
}

fn is_studio_document(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csd") || e.eq_ignore_ascii_case("ccs"))
}

fn write_file(path: &Path, contents: &str) -> ConvertResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConvertError::io(parent, e))?;
    }
    std::fs::write(path, contents).map_err(|e| ConvertError::io(path, e))
}

#[cfg(test)]
#[path = "../../tests/unit/import/document.rs"]
mod tests;
