use std::collections::BTreeMap;

use crate::animation::ease::EasingSpec;
use crate::assets::resolver::AssetHandle;
use crate::foundation::core::Color;

/// Value of a keyframe.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum KeyValue {
    Number(f64),
    Vec2([f64; 2]),
    Color(Color),
    Bool(bool),
    Asset(AssetHandle),
}

/// A keyframe positioned at `frame`: a frame index while extracting, seconds inside a clip.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Keyframe<P> {
    pub frame: P,
    pub value: KeyValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curve: Option<EasingSpec>,
}

impl Keyframe<i64> {
    pub fn new(frame: i64, value: KeyValue, curve: Option<EasingSpec>) -> Self {
        Self { frame, value, curve }
    }
}

/// Callback fired when playback crosses `frame`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FrameEvent<P> {
    pub frame: P,
    pub func: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<String>,
}

/// Keyframes of one animated property, in authoring order.
pub type Track<P> = Vec<Keyframe<P>>;

/// Tracks of one node: node properties and component properties.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NodeCurves<P> {
    #[serde(default)]
    pub props: BTreeMap<String, Track<P>>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub comps: BTreeMap<String, BTreeMap<String, Track<P>>>,
}

impl<P> Default for NodeCurves<P> {
    fn default() -> Self {
        Self {
            props: BTreeMap::new(),
            comps: BTreeMap::new(),
        }
    }
}

/// Whole-document tracks keyed by node path.
#[derive(Clone, Debug, Default)]
pub struct CurveAccumulator {
    paths: BTreeMap<String, NodeCurves<i64>>,
}

impl CurveAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a node property track, replacing an earlier one for the same property.
    pub fn set_prop(&mut self, path: &str, prop: &str, track: Track<i64>) {
        self.node(path).props.insert(prop.to_owned(), track);
    }

    /// Store a component property track, replacing an earlier one.
    pub fn set_comp(&mut self, path: &str, component: &str, prop: &str, track: Track<i64>) {
        self.node(path)
            .comps
            .entry(component.to_owned())
            .or_default()
            .insert(prop.to_owned(), track);
    }

    pub fn get(&self, path: &str) -> Option<&NodeCurves<i64>> {
        self.paths.get(path)
    }

    pub fn paths(&self) -> impl Iterator<Item = (&str, &NodeCurves<i64>)> {
        self.paths.iter().map(|(p, c)| (p.as_str(), c))
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    fn node(&mut self, path: &str) -> &mut NodeCurves<i64> {
        self.paths.entry(path.to_owned()).or_default()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/track.rs"]
mod tests;
