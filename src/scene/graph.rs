use std::collections::HashMap;

use crate::assets::resolver::AssetHandle;
use crate::foundation::core::{Color, NodeId, Transform};
use crate::foundation::error::{ConvertError, ConvertResult};
use crate::scene::component::{Component, Sprite};

/// One node of the target scene graph.
#[derive(Clone, Debug, PartialEq)]
pub struct TargetNode {
    pub name: String,
    pub transform: Transform,
    pub active: bool,
    pub color: Color,
    pub opacity: u8,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub components: Vec<Component>,
    /// Prefab this node was instantiated from.
    pub prefab: Option<AssetHandle>,
}

impl TargetNode {
    fn new(name: String) -> Self {
        Self {
            name,
            transform: Transform::default(),
            active: true,
            color: Color::WHITE,
            opacity: 255,
            parent: None,
            children: Vec::new(),
            components: Vec::new(),
            prefab: None,
        }
    }

    /// Component with the given engine type name.
    pub fn component(&self, type_name: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.type_name() == type_name)
    }

    pub fn component_mut(&mut self, type_name: &str) -> Option<&mut Component> {
        self.components
            .iter_mut()
            .find(|c| c.type_name() == type_name)
    }

    pub fn has_component(&self, type_name: &str) -> bool {
        self.component(type_name).is_some()
    }

    pub fn sprite(&self) -> Option<&Sprite> {
        self.components.iter().find_map(|c| match c {
            Component::Sprite(s) => Some(s),
            _ => None,
        })
    }

    pub fn sprite_mut(&mut self) -> Option<&mut Sprite> {
        self.components.iter_mut().find_map(|c| match c {
            Component::Sprite(s) => Some(s),
            _ => None,
        })
    }
}

/// Arena of target nodes addressed by [`NodeId`].
///
/// Nodes are never removed; detached subtrees simply have no parent. Parent and child links are
/// kept consistent by [`SceneGraph::add_child`] and [`SceneGraph::detach`].
#[derive(Clone, Debug, Default)]
pub struct SceneGraph {
    nodes: Vec<TargetNode>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detached node.
    pub fn create(&mut self, name: impl Into<String>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(TargetNode::new(name.into()));
        id
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    pub fn node(&self, id: NodeId) -> &TargetNode {
        &self.nodes[id.index()]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut TargetNode {
        &mut self.nodes[id.index()]
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    /// Remove `child` from its parent's child list, if it has one.
    pub fn detach(&mut self, child: NodeId) {
        if let Some(parent) = self.nodes[child.index()].parent.take() {
            self.nodes[parent.index()].children.retain(|c| *c != child);
        }
    }

    /// Append `child` to `parent`, detaching it from any previous parent first.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> ConvertResult<()> {
        if parent == child || self.is_ancestor(child, parent) {
            return Err(ConvertError::component(format!(
                "cannot attach node '{}' below itself",
                self.node(child).name
            )));
        }
        self.detach(child);
        self.nodes[child.index()].parent = Some(parent);
        self.nodes[parent.index()].children.push(child);
        Ok(())
    }

    /// `true` when `ancestor` is on the parent chain of `id`.
    pub fn is_ancestor(&self, ancestor: NodeId, id: NodeId) -> bool {
        let mut cur = self.parent(id);
        while let Some(p) = cur {
            if p == ancestor {
                return true;
            }
            cur = self.parent(p);
        }
        false
    }

    /// Attach a component, enforcing one component per kind and one renderer per node.
    pub fn add_component(&mut self, id: NodeId, component: Component) -> ConvertResult<()> {
        let node = &mut self.nodes[id.index()];
        let type_name = component.type_name();
        if node.has_component(type_name) {
            return Err(ConvertError::component(format!(
                "node '{}' already has a {type_name}",
                node.name
            )));
        }
        if component.is_renderer()
            && let Some(existing) = node.components.iter().find(|c| c.is_renderer())
        {
            return Err(ConvertError::component(format!(
                "node '{}' already renders with {}, cannot add {type_name}",
                node.name,
                existing.type_name()
            )));
        }
        node.components.push(component);
        Ok(())
    }

    /// `root` and all its descendants in pre-order.
    pub fn subtree_ids(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.children(id).iter().rev().copied());
        }
        out
    }

    /// Deep-copy the subtree of `src` rooted at `src_root` into this graph.
    ///
    /// The copy is detached; node references inside components are rewritten to the copies,
    /// references leaving the subtree are cleared.
    pub fn graft(&mut self, src: &SceneGraph, src_root: NodeId) -> NodeId {
        let ids = src.subtree_ids(src_root);
        let base = self.nodes.len() as u32;
        let map: HashMap<NodeId, NodeId> = ids
            .iter()
            .enumerate()
            .map(|(i, id)| (*id, NodeId(base + i as u32)))
            .collect();

        for id in &ids {
            let mut node = src.node(*id).clone();
            node.parent = if *id == src_root {
                None
            } else {
                node.parent.and_then(|p| map.get(&p).copied())
            };
            node.children = node
                .children
                .iter()
                .filter_map(|c| map.get(c).copied())
                .collect();
            for c in &mut node.components {
                c.remap_nodes(|n| map.get(&n).copied());
            }
            self.nodes.push(node);
        }
        NodeId(base)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/graph.rs"]
mod tests;
