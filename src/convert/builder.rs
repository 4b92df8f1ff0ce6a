use std::collections::HashMap;

use crate::convert::components::{attach, init_component};
use crate::convert::containers::create_scroll_view;
use crate::convert::context::BuildHost;
use crate::convert::props::{apply_base_properties, relocate};
use crate::convert::types::{Creator, NodeType};
use crate::convert::widget::derive_widget;
use crate::document::SourceNode;
use crate::foundation::core::NodeId;
use crate::foundation::diag::Diagnostics;
use crate::foundation::error::ConvertResult;
use crate::scene::{Component, SceneGraph};

/// Node an action tag was recorded for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaggedNode {
    /// Slash-joined sanitized names from the conversion root, without the root itself.
    pub path: String,
    pub node: NodeId,
}

/// Action tag → node lookup filled while the graph is built.
#[derive(Clone, Debug, Default)]
pub struct ActionTagIndex {
    entries: HashMap<String, TaggedNode>,
}

impl ActionTagIndex {
    pub fn insert(&mut self, tag: &str, path: String, node: NodeId) {
        self.entries
            .insert(tag.to_owned(), TaggedNode { path, node });
    }

    pub fn get(&self, tag: &str) -> Option<&TaggedNode> {
        self.entries.get(tag)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// State owned by a single document conversion.
#[derive(Debug, Default)]
pub struct DocumentState {
    pub graph: SceneGraph,
    pub tags: ActionTagIndex,
}

impl DocumentState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Replace path separators, which would break animation path lookup.
pub fn sanitize_name(name: &str, diag: &mut Diagnostics) -> String {
    let clean = name.replace(['\\', '/'], "_");
    if clean != name {
        diag.warn(
            name,
            "Name",
            format!("node name contains path separators, renamed to '{clean}'"),
        );
    }
    clean
}

/// Build the tree below `object_data` into the existing node `root`.
///
/// The root itself is initialized from `object_data` but never indexed by action tag.
pub fn build_tree(
    host: &mut dyn BuildHost,
    state: &mut DocumentState,
    root: NodeId,
    object_data: &SourceNode,
) -> ConvertResult<()> {
    let node_type = NodeType::from_tag(object_data.type_tag());
    let name = sanitize_name(object_data.name(), host.init_ctx().diag);
    init_node(host, state, root, object_data, &node_type, &name);
    build_children(host, state, root, object_data, "")
}

fn build_node(
    host: &mut dyn BuildHost,
    state: &mut DocumentState,
    data: &SourceNode,
    parent_path: &str,
) -> ConvertResult<NodeId> {
    let node_type = NodeType::from_tag(data.type_tag());
    if let NodeType::Unrecognized(tag) = &node_type {
        tracing::debug!(tag = %tag, name = data.name(), "no initializer for node type");
    }
    let name = sanitize_name(data.name(), host.init_ctx().diag);
    let path = if parent_path.is_empty() {
        name.clone()
    } else {
        format!("{parent_path}/{name}")
    };

    let (facing, child_attach) = match node_type.creator() {
        Creator::Default => {
            let id = state.graph.create(name.as_str());
            (id, id)
        }
        Creator::ProjectNode => {
            let id = create_project_node(host, state, data, &name)?;
            (id, id)
        }
        // Layout and touch blocking go on the scroll node the parent sees, not on `content`
        // as the studio runtime does.
        Creator::ScrollView => {
            create_scroll_view(&mut host.init_ctx(), &mut state.graph, data, &name)
        }
    };

    let tag = data.str_or("ActionTag", "");
    if !tag.is_empty() {
        state.tags.insert(tag, path.clone(), facing);
    }

    init_node(host, state, facing, data, &node_type, &name);
    build_children(host, state, child_attach, data, &path)?;
    Ok(facing)
}

fn init_node(
    host: &mut dyn BuildHost,
    state: &mut DocumentState,
    id: NodeId,
    data: &SourceNode,
    node_type: &NodeType,
    name: &str,
) {
    let graph = &mut state.graph;
    if node_type.creator() != Creator::ScrollView {
        apply_base_properties(graph, id, data, node_type, name);
    }
    graph.node_mut(id).active = data.bool_or("VisibleForFrame", true);

    let mut cx = host.init_ctx();
    let anchor = graph.node(id).transform.anchor;
    if let Some(widget) = derive_widget(data, anchor) {
        attach(&mut cx, graph, id, Component::Widget(widget));
    }
    if data.bool_or("TouchEnable", false) {
        attach(&mut cx, graph, id, Component::BlockInputEvents);
    }
    if node_type.has_initializer() {
        init_component(&mut cx, graph, id, node_type, data);
    }
}

fn build_children(
    host: &mut dyn BuildHost,
    state: &mut DocumentState,
    parent: NodeId,
    data: &SourceNode,
    path: &str,
) -> ConvertResult<()> {
    let Some(children) = data.child("Children") else {
        return Ok(());
    };
    for child_data in &children.children {
        let child = build_node(host, state, child_data, path)?;
        match state.graph.add_child(parent, child) {
            Ok(()) => relocate(&mut state.graph, child),
            Err(e) => host
                .init_ctx()
                .diag
                .warn(child_data.name(), "Children", e.to_string()),
        }
    }
    Ok(())
}

/// Instance of the referenced document's prefab, or an empty node when it cannot be produced.
fn create_project_node(
    host: &mut dyn BuildHost,
    state: &mut DocumentState,
    data: &SourceNode,
    name: &str,
) -> ConvertResult<NodeId> {
    let source = data.child_str_or("FileData", "Path", "");
    if source.is_empty() {
        host.init_ctx()
            .diag
            .warn(name, "FileData", "nested document reference has no path");
        return Ok(state.graph.create(name));
    }
    match host.instantiate_nested(source, &mut state.graph) {
        Ok(Some(id)) => Ok(id),
        Ok(None) => {
            host.init_ctx().diag.warn(
                name,
                "FileData",
                format!("nested document '{source}' produced no prefab"),
            );
            Ok(state.graph.create(name))
        }
        Err(e) if e.is_document_fatal() => {
            host.init_ctx()
                .diag
                .warn(name, "FileData", format!("nested document '{source}': {e}"));
            Ok(state.graph.create(name))
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/convert/builder.rs"]
mod tests;
