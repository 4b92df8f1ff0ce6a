//! Timeline extraction and clip segmentation.

pub mod clip;
pub mod ease;
pub mod timeline;
pub mod track;

pub use clip::{ActionRange, AnimationClip, action_ranges, segment};
pub use ease::{EasingSpec, easing_from_code, resolve_easing};
pub use timeline::{TimelineData, TrackProperty, extract, has_timelines};
pub use track::{CurveAccumulator, FrameEvent, KeyValue, Keyframe};
