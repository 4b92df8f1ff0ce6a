//! Per-property keyframe tracks collected from a document's `Animation` section.

use crate::animation::ease::resolve_easing;
use crate::animation::track::{CurveAccumulator, FrameEvent, KeyValue, Keyframe, Track};
use crate::convert::builder::{ActionTagIndex, TaggedNode};
use crate::convert::context::InitCtx;
use crate::convert::props::convert_position;
use crate::convert::refs::resolve_sprite_frame;
use crate::document::SourceNode;
use crate::foundation::core::{Color, Vec2};
use crate::scene::SceneGraph;

/// Name of the sprite component as it appears in component tracks.
pub const SPRITE_COMPONENT: &str = "cc.Sprite";

/// Animated property named by `Timeline@Property`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TrackProperty {
    AnchorPoint,
    Position,
    RotationSkew,
    Scale,
    CColor,
    Alpha,
    VisibleForFrame,
    FrameEvent,
    FileData,
    /// No property given; the timeline carries nothing.
    Empty,
    Unsupported(String),
}

impl TrackProperty {
    pub fn from_attr(value: &str) -> Self {
        match value {
            "AnchorPoint" => Self::AnchorPoint,
            "Position" => Self::Position,
            "RotationSkew" => Self::RotationSkew,
            "Scale" => Self::Scale,
            "CColor" => Self::CColor,
            "Alpha" => Self::Alpha,
            "VisibleForFrame" => Self::VisibleForFrame,
            "FrameEvent" => Self::FrameEvent,
            "FileData" => Self::FileData,
            "" => Self::Empty,
            other => Self::Unsupported(other.to_owned()),
        }
    }
}

/// Everything extracted from one document's timelines.
#[derive(Clone, Debug, Default)]
pub struct TimelineData {
    pub curves: CurveAccumulator,
    /// Frame events of all `FrameEvent` timelines, in document order.
    pub events: Vec<FrameEvent<i64>>,
}

/// Whether the section holds at least one timeline.
pub fn has_timelines(animation: &SourceNode) -> bool {
    animation.children_named("Timeline").next().is_some()
}

/// Walk every `Timeline` of `animation`. Timelines whose action tag is not in `tags` are
/// dropped without a diagnostic.
#[tracing::instrument(skip_all, fields(timelines = animation.children.len()))]
pub fn extract(
    animation: &SourceNode,
    tags: &ActionTagIndex,
    graph: &SceneGraph,
    cx: &mut InitCtx<'_>,
    event_func: &str,
) -> TimelineData {
    let mut data = TimelineData::default();
    for timeline in animation.children_named("Timeline") {
        let Some(target) = tags.get(timeline.str_or("ActionTag", "")) else {
            continue;
        };
        if target.path.is_empty() {
            continue;
        }
        let property = TrackProperty::from_attr(timeline.str_or("Property", ""));
        match property {
            TrackProperty::FrameEvent => {
                data.events
                    .extend(timeline.children.iter().map(|f| frame_event(f, event_func)));
            }
            TrackProperty::Empty => {}
            TrackProperty::Unsupported(name) => {
                cx.diag.warn(
                    &target.path,
                    &name,
                    format!("animated property '{name}' is not supported"),
                );
            }
            other => extract_track(&mut data.curves, &other, timeline, target, graph, cx),
        }
    }
    tracing::debug!(paths = data.curves.len(), events = data.events.len(), "timelines extracted");
    data
}

fn extract_track(
    curves: &mut CurveAccumulator,
    property: &TrackProperty,
    timeline: &SourceNode,
    target: &TaggedNode,
    graph: &SceneGraph,
    cx: &mut InitCtx<'_>,
) {
    let path = target.path.as_str();
    let frames = &timeline.children;
    match property {
        TrackProperty::AnchorPoint => {
            let (x, y) = split_xy(frames);
            curves.set_prop(path, "anchorX", x);
            curves.set_prop(path, "anchorY", y);
        }
        TrackProperty::Scale => {
            let (x, y) = split_xy(frames);
            curves.set_prop(path, "scaleX", x);
            curves.set_prop(path, "scaleY", y);
        }
        TrackProperty::Position => {
            let track = collect(frames, |f| {
                let authored = Vec2::new(f.float_or("X", 0.0), f.float_or("Y", 0.0));
                let p = convert_position(graph, target.node, authored);
                KeyValue::Vec2([p.x, p.y])
            });
            curves.set_prop(path, "position", track);
        }
        TrackProperty::RotationSkew => {
            let track = collect(frames, |f| KeyValue::Number(f.float_or("X", 0.0)));
            curves.set_prop(path, "rotation", track);
        }
        TrackProperty::CColor => {
            let track = collect(frames, |f| {
                KeyValue::Color(Color::from_ints(
                    f.child_int_or("Color", "R", 255),
                    f.child_int_or("Color", "G", 255),
                    f.child_int_or("Color", "B", 255),
                    255,
                ))
            });
            curves.set_prop(path, "color", track);
        }
        TrackProperty::Alpha => {
            let track = collect(frames, |f| KeyValue::Number(f.int_or("Value", 255) as f64));
            curves.set_prop(path, "opacity", track);
        }
        TrackProperty::VisibleForFrame => {
            let track = frames
                .iter()
                .map(|f| {
                    Keyframe::new(
                        f.int_or("FrameIndex", 0),
                        KeyValue::Bool(f.bool_or("Value", true)),
                        None,
                    )
                })
                .collect();
            curves.set_prop(path, "active", track);
        }
        TrackProperty::FileData => {
            if graph.node(target.node).sprite().is_none() {
                return;
            }
            let track = frames
                .iter()
                .filter_map(|f| {
                    let handle =
                        resolve_sprite_frame(cx, f.child("TextureFile"), "", path, "FileData")?;
                    Some(Keyframe::new(
                        f.int_or("FrameIndex", 0),
                        KeyValue::Asset(handle),
                        None,
                    ))
                })
                .collect();
            curves.set_comp(path, SPRITE_COMPONENT, "spriteFrame", track);
        }
        TrackProperty::FrameEvent | TrackProperty::Empty | TrackProperty::Unsupported(_) => {}
    }
}

fn collect(frames: &[SourceNode], value: impl Fn(&SourceNode) -> KeyValue) -> Track<i64> {
    frames
        .iter()
        .map(|f| Keyframe::new(f.int_or("FrameIndex", 0), value(f), resolve_easing(f)))
        .collect()
}

fn split_xy(frames: &[SourceNode]) -> (Track<i64>, Track<i64>) {
    let x = collect(frames, |f| KeyValue::Number(f.float_or("X", 0.0)));
    let y = collect(frames, |f| KeyValue::Number(f.float_or("Y", 0.0)));
    (x, y)
}

fn frame_event(frame: &SourceNode, func: &str) -> FrameEvent<i64> {
    let param = frame.str_or("Value", "");
    FrameEvent {
        frame: frame.int_or("FrameIndex", 0),
        func: func.to_owned(),
        params: if param.is_empty() {
            Vec::new()
        } else {
            vec![param.to_owned()]
        },
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timeline.rs"]
mod tests;
