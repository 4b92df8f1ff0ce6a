use std::collections::HashMap;

use crate::assets::resolver::AssetHandle;
use crate::foundation::core::{Color, NodeId, Transform};
use crate::foundation::error::{ConvertError, ConvertResult};
use crate::scene::component::Component;
use crate::scene::graph::SceneGraph;

/// Which artifact a converted document becomes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    Scene,
    Prefab,
}

impl ArtifactKind {
    /// File extension of the serialized artifact.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Scene => "fire",
            Self::Prefab => "prefab",
        }
    }
}

/// Serialized node. `id` is the node's index in [`SceneArtifact::nodes`], and all node
/// references (parent, children, component links) use the same numbering.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NodeRecord {
    pub id: NodeId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<NodeId>,
    #[serde(default)]
    pub children: Vec<NodeId>,
    pub transform: Transform,
    pub active: bool,
    pub color: Color,
    pub opacity: u8,
    #[serde(default)]
    pub components: Vec<Component>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefab: Option<AssetHandle>,
}

/// A scene or prefab as written to disk: the root's subtree flattened in pre-order.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneArtifact {
    pub kind: ArtifactKind,
    pub name: String,
    pub nodes: Vec<NodeRecord>,
}

impl SceneArtifact {
    /// Flatten the subtree of `graph` rooted at `root`.
    pub fn from_graph(kind: ArtifactKind, name: &str, graph: &SceneGraph, root: NodeId) -> Self {
        let ids = graph.subtree_ids(root);
        let index: HashMap<NodeId, NodeId> = ids
            .iter()
            .enumerate()
            .map(|(i, id)| (*id, NodeId(i as u32)))
            .collect();
        let remap = |id: NodeId| index.get(&id).copied();

        let nodes = ids
            .iter()
            .map(|id| {
                let node = graph.node(*id);
                let mut components = node.components.clone();
                for c in &mut components {
                    c.remap_nodes(remap);
                }
                NodeRecord {
                    id: index[id],
                    name: node.name.clone(),
                    parent: if *id == root {
                        None
                    } else {
                        node.parent.and_then(remap)
                    },
                    children: node.children.iter().filter_map(|c| remap(*c)).collect(),
                    transform: node.transform,
                    active: node.active,
                    color: node.color,
                    opacity: node.opacity,
                    components,
                    prefab: node.prefab.clone(),
                }
            })
            .collect();

        Self {
            kind,
            name: name.to_owned(),
            nodes,
        }
    }

    pub fn root(&self) -> Option<&NodeRecord> {
        self.nodes.first()
    }

    /// First node with the given name, in pre-order.
    pub fn find(&self, name: &str) -> Option<&NodeRecord> {
        self.nodes.iter().find(|n| n.name == name)
    }

    pub fn to_json_pretty(&self) -> ConvertResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ConvertError::serde(format!("serialize {}: {e}", self.name)))
    }

    pub fn from_json(s: &str) -> ConvertResult<Self> {
        serde_json::from_str(s).map_err(|e| ConvertError::serde(format!("parse artifact: {e}")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/record.rs"]
mod tests;
