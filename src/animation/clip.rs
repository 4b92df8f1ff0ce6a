//! Named frame ranges and the clips cut from them.

use std::collections::BTreeMap;

use crate::animation::timeline::TimelineData;
use crate::animation::track::{FrameEvent, Keyframe, NodeCurves};
use crate::document::SourceNode;
use crate::foundation::error::{ConvertError, ConvertResult};

/// Inclusive frame range that becomes one clip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionRange {
    pub name: String,
    pub start: i64,
    pub end: i64,
}

/// Ranges of a document: the whole timeline named after `stem`, then every named
/// `AnimationInfo` of `animation_list` in order.
///
/// When a declared range takes the default name (case-insensitively), the default range is
/// renamed `stem1`, `stem2`, ... until no declared range uses its name.
pub fn action_ranges(
    stem: &str,
    duration: i64,
    animation_list: Option<&SourceNode>,
) -> Vec<ActionRange> {
    let mut ranges = vec![ActionRange {
        name: stem.to_owned(),
        start: 0,
        end: duration,
    }];
    let Some(list) = animation_list else {
        return ranges;
    };

    let mut next_suffix = 1;
    for info in list.children_named("AnimationInfo") {
        let name = info.str_or("Name", "");
        if name.is_empty() {
            continue;
        }
        if name.eq_ignore_ascii_case(&ranges[0].name) {
            ranges[0].name = format!("{stem}{next_suffix}");
            next_suffix += 1;
        }
        ranges.push(ActionRange {
            name: name.to_owned(),
            start: info.int_or("StartIndex", 0),
            end: info.int_or("EndIndex", duration),
        });
    }

    while ranges[1..]
        .iter()
        .any(|r| r.name.eq_ignore_ascii_case(&ranges[0].name))
    {
        ranges[0].name = format!("{stem}{next_suffix}");
        next_suffix += 1;
    }
    ranges
}

/// Curve data of a clip, keyed by node path.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CurveData {
    pub paths: BTreeMap<String, NodeCurves<f64>>,
}

/// Serialized animation clip. Keyframe and event positions are in seconds from the range start.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnimationClip {
    pub name: String,
    /// Frames per second the clip was sampled at.
    pub sample: u32,
    pub speed: f64,
    /// Length in seconds.
    pub duration: f64,
    pub curve_data: CurveData,
    #[serde(default)]
    pub events: Vec<FrameEvent<f64>>,
}

impl AnimationClip {
    pub fn to_json_pretty(&self) -> ConvertResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ConvertError::serde(format!("serialize clip {}: {e}", self.name)))
    }

    pub fn from_json(s: &str) -> ConvertResult<Self> {
        serde_json::from_str(s).map_err(|e| ConvertError::serde(format!("parse clip: {e}")))
    }

    /// Number of keyframes over all tracks.
    pub fn keyframe_count(&self) -> usize {
        self.curve_data
            .paths
            .values()
            .map(|c| {
                c.props.values().map(Vec::len).sum::<usize>()
                    + c.comps
                        .values()
                        .flat_map(|props| props.values())
                        .map(Vec::len)
                        .sum::<usize>()
            })
            .sum()
    }
}

/// Cut the clip for `range` out of the document's timelines.
///
/// Every node path keeps its property map even when nothing falls in range; component tracks
/// and components without keyframes in range are left out.
pub fn segment(data: &TimelineData, range: &ActionRange, fps: u32, speed: f64) -> AnimationClip {
    let fps_f = f64::from(fps.max(1));
    // Indices may span all of i64; subtract in f64.
    let rebase = |frame: i64| (frame as f64 - range.start as f64) / fps_f;
    let in_range = |frame: i64| range.start <= frame && frame <= range.end;

    let cut = |track: &[Keyframe<i64>]| -> Vec<Keyframe<f64>> {
        track
            .iter()
            .filter(|k| in_range(k.frame))
            .map(|k| Keyframe {
                frame: rebase(k.frame),
                value: k.value.clone(),
                curve: k.curve.clone(),
            })
            .collect()
    };

    let paths = data
        .curves
        .paths()
        .map(|(path, curves)| {
            let props = curves
                .props
                .iter()
                .map(|(prop, track)| (prop.clone(), cut(track.as_slice())))
                .collect();
            let comps = curves
                .comps
                .iter()
                .filter_map(|(comp, tracks)| {
                    let kept: BTreeMap<_, _> = tracks
                        .iter()
                        .map(|(prop, track)| (prop.clone(), cut(track.as_slice())))
                        .filter(|(_, keys)| !keys.is_empty())
                        .collect();
                    (!kept.is_empty()).then(|| (comp.clone(), kept))
                })
                .collect();
            (path.to_owned(), NodeCurves { props, comps })
        })
        .collect();

    let events = data
        .events
        .iter()
        .filter(|e| in_range(e.frame))
        .map(|e| FrameEvent {
            frame: rebase(e.frame),
            func: e.func.clone(),
            params: e.params.clone(),
        })
        .collect();

    AnimationClip {
        name: range.name.clone(),
        sample: fps,
        speed,
        duration: rebase(range.end),
        curve_data: CurveData { paths },
        events,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/clip.rs"]
mod tests;
