//! Base node properties and the parent-anchor coordinate conversion.
//!
//! Authored positions are relative to the parent's bottom-left corner; target positions are
//! relative to the parent's anchor point.

use crate::convert::types::NodeType;
use crate::document::SourceNode;
use crate::foundation::core::{Color, NodeId, Rotation, Size, Vec2};
use crate::scene::SceneGraph;

/// Move an authored position into the space of a parent with the given size and anchor.
pub fn to_parent_space(authored: Vec2, parent_size: Size, parent_anchor: Vec2) -> Vec2 {
    Vec2::new(
        authored.x - parent_size.width * parent_anchor.x,
        authored.y - parent_size.height * parent_anchor.y,
    )
}

/// Inverse of [`to_parent_space`].
pub fn from_parent_space(converted: Vec2, parent_size: Size, parent_anchor: Vec2) -> Vec2 {
    Vec2::new(
        converted.x + parent_size.width * parent_anchor.x,
        converted.y + parent_size.height * parent_anchor.y,
    )
}

/// Convert `authored` against the current parent of `id`; identity for detached nodes.
pub fn convert_position(graph: &SceneGraph, id: NodeId, authored: Vec2) -> Vec2 {
    match graph.parent(id) {
        Some(parent) => {
            let t = &graph.node(parent).transform;
            to_parent_space(authored, t.size, t.anchor)
        }
        None => authored,
    }
}

/// Re-run the conversion on the node's own position, after it was attached.
pub fn relocate(graph: &mut SceneGraph, id: NodeId) {
    let pos = graph.node(id).transform.position;
    let converted = convert_position(graph, id, pos);
    graph.node_mut(id).transform.position = converted;
}

/// Rotation from the authored skew angles.
pub fn rotation_from_skew(x: f64, y: f64) -> Rotation {
    if x == y {
        Rotation::Angle(x)
    } else {
        Rotation::Euler([x, y, 0.0])
    }
}

/// Apply name, size and, where the type allows, transform, visibility and tint.
pub fn apply_base_properties(
    graph: &mut SceneGraph,
    id: NodeId,
    data: &SourceNode,
    node_type: &NodeType,
    name: &str,
) {
    let node = graph.node_mut(id);
    node.name = name.to_owned();
    node.transform.size = Size::new(
        data.child_float_or("Size", "X", 0.0),
        data.child_float_or("Size", "Y", 0.0),
    );

    if *node_type == NodeType::GameLayer {
        node.transform.anchor = Vec2::ZERO;
    }
    if !node_type.applies_transform() {
        return;
    }

    node.active = data.bool_or("VisibleForFrame", true);
    node.transform.anchor = Vec2::new(
        data.child_float_or("AnchorPoint", "ScaleX", 0.0),
        data.child_float_or("AnchorPoint", "ScaleY", 0.0),
    );
    node.transform.position = Vec2::new(
        data.child_float_or("Position", "X", 0.0),
        data.child_float_or("Position", "Y", 0.0),
    );

    let mut scale = Vec2::new(
        data.child_float_or("Scale", "ScaleX", 1.0),
        data.child_float_or("Scale", "ScaleY", 1.0),
    );
    if data.bool_or("FlipX", false) {
        scale.x = -scale.x;
    }
    if data.bool_or("FlipY", false) {
        scale.y = -scale.y;
    }
    node.transform.scale = scale;
    node.transform.rotation = rotation_from_skew(
        data.float_or("RotationSkewX", 0.0),
        data.float_or("RotationSkewY", 0.0),
    );

    if node_type.applies_tint() {
        node.color = Color::from_ints(
            data.child_int_or("CColor", "R", 255),
            data.child_int_or("CColor", "G", 255),
            data.child_int_or("CColor", "B", 255),
            255,
        );
        node.opacity = data.int_or("Alpha", 255).clamp(0, 255) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/convert/props.rs"]
mod tests;
