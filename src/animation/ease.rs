use crate::document::SourceNode;

const FAMILIES: [&str; 10] = [
    "sine", "quad", "cubic", "quart", "quint", "expo", "circ", "elastic", "back", "bounce",
];
const PHASES: [&str; 3] = ["In", "Out", "InOut"];

/// Interpolation curve attached to a keyframe.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum EasingSpec {
    /// Named easing such as `quadInOut`.
    Named(String),
    /// Cubic bezier control points `[x1, y1, x2, y2]`.
    Bezier([f64; 4]),
}

/// Named easing for a studio easing code. Code 0 and negative codes have no name.
pub fn easing_from_code(code: i64) -> Option<EasingSpec> {
    if code <= 0 {
        return None;
    }
    let index = (code - 1) as usize;
    let family = FAMILIES.get(index / 3)?;
    Some(EasingSpec::Named(format!("{family}{}", PHASES[index % 3])))
}

/// Easing of a keyframe element, from its `EasingData` child.
pub fn resolve_easing(frame: &SourceNode) -> Option<EasingSpec> {
    let data = frame.child("EasingData")?;
    match data.int_or("Type", 0) {
        -1 => {
            let points: Vec<&SourceNode> = data
                .child("Points")
                .map(|p| p.children_named("PointF").collect())
                .unwrap_or_default();
            let coord = |i: usize, axis: &str| points.get(i).map_or(0.0, |p| p.float_or(axis, 0.0));
            Some(EasingSpec::Bezier([
                coord(1, "X"),
                coord(1, "Y"),
                coord(2, "X"),
                coord(2, "Y"),
            ]))
        }
        code => easing_from_code(code),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
