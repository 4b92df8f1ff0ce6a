//! Docking constraints derived from the authoring tool's edge and percentage layout flags.

use crate::document::SourceNode;
use crate::foundation::core::Vec2;
use crate::scene::component::{EdgeConstraint, Widget};

/// Layout inputs of one axis. "Near" is left or bottom, "far" is right or top.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AxisLayout {
    pub edge: Edge,
    pub percent_size: bool,
    pub percent_position: bool,
    pub size_percent: f64,
    pub position_percent: f64,
    pub near_margin: f64,
    pub far_margin: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Edge {
    #[default]
    None,
    Near,
    Far,
    Both,
}

/// Constraints resolved for one axis, `(near, far)`.
pub type AxisConstraints = (Option<EdgeConstraint>, Option<EdgeConstraint>);

impl AxisLayout {
    fn is_active(&self) -> bool {
        self.edge != Edge::None || self.percent_size || self.percent_position
    }

    /// Apply the edge / percentage decision table. `anchor` is the node anchor on this axis.
    pub fn resolve(&self, anchor: f64) -> AxisConstraints {
        let near_pct = self.position_percent - self.size_percent * anchor;
        let far_pct = 1.0 - self.position_percent - self.size_percent * (1.0 - anchor);
        let near = |absolute: bool| {
            Some(if absolute {
                EdgeConstraint::absolute(self.near_margin)
            } else {
                EdgeConstraint::percent(near_pct)
            })
        };
        let far = |absolute: bool| {
            Some(if absolute {
                EdgeConstraint::absolute(self.far_margin)
            } else {
                EdgeConstraint::percent(far_pct)
            })
        };

        match self.edge {
            Edge::Near => (
                near(!self.percent_position),
                if self.percent_size { far(false) } else { None },
            ),
            Edge::Far => (
                if self.percent_size { near(false) } else { None },
                far(!self.percent_position),
            ),
            Edge::Both => {
                let absolute = !self.percent_size && !self.percent_position;
                (near(absolute), far(absolute))
            }
            Edge::None if self.percent_size => (near(false), far(false)),
            Edge::None if self.percent_position => (near(false), None),
            Edge::None => (None, None),
        }
    }
}

fn edge_from(value: &str, near: &str, far: &str) -> Edge {
    if value.contains(near) {
        Edge::Near
    } else if value.contains(far) {
        Edge::Far
    } else if value.contains("Both") {
        Edge::Both
    } else {
        Edge::None
    }
}

/// Read both axes from a node's layout attributes.
pub fn read_layout(data: &SourceNode) -> (AxisLayout, AxisLayout) {
    let pos_x = data.child_float_or("PrePosition", "X", 0.0);
    let pos_y = data.child_float_or("PrePosition", "Y", 0.0);

    let horizontal = AxisLayout {
        edge: edge_from(data.str_or("HorizontalEdge", ""), "Left", "Right"),
        percent_size: data.bool_or("PercentWidthEnable", false)
            || data.bool_or("PercentWidthEnabled", false)
            || data.bool_or("StretchWidthEnable", false),
        percent_position: data.bool_or("PositionPercentXEnabled", false) && pos_x != 0.0,
        size_percent: data.child_float_or("PreSize", "X", 0.0),
        position_percent: pos_x,
        near_margin: data.float_or("LeftMargin", 0.0),
        far_margin: data.float_or("RightMargin", 0.0),
    };
    let vertical = AxisLayout {
        edge: edge_from(data.str_or("VerticalEdge", ""), "Bottom", "Top"),
        percent_size: data.bool_or("PercentHeightEnable", false)
            || data.bool_or("PercentHeightEnabled", false)
            || data.bool_or("StretchHeightEnable", false),
        percent_position: data.bool_or("PositionPercentYEnabled", false) && pos_y != 0.0,
        size_percent: data.child_float_or("PreSize", "Y", 0.0),
        position_percent: pos_y,
        near_margin: data.float_or("BottomMargin", 0.0),
        far_margin: data.float_or("TopMargin", 0.0),
    };
    (horizontal, vertical)
}

/// Widget for a node with the given anchor, or `None` when no layout flag is set.
pub fn derive_widget(data: &SourceNode, anchor: Vec2) -> Option<Widget> {
    let (h, v) = read_layout(data);
    if !h.is_active() && !v.is_active() {
        return None;
    }
    let (left, right) = h.resolve(anchor.x);
    let (bottom, top) = v.resolve(anchor.y);
    Some(Widget {
        left,
        right,
        top,
        bottom,
        horizontal_center: false,
        vertical_center: false,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/convert/widget.rs"]
mod tests;
