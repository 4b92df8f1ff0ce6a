use super::*;
use crate::animation::track::{CurveAccumulator, KeyValue};
use crate::document::parse_markup;

fn list(xml: &str) -> SourceNode {
    parse_markup(xml.as_bytes()).unwrap()
}

fn names(ranges: &[ActionRange]) -> Vec<&str> {
    ranges.iter().map(|r| r.name.as_str()).collect()
}

#[test]
fn default_range_covers_the_whole_timeline() {
    let ranges = action_ranges("hero", 90, None);
    assert_eq!(
        ranges,
        vec![ActionRange {
            name: "hero".into(),
            start: 0,
            end: 90
        }]
    );
}

#[test]
fn declared_ranges_follow_in_order() {
    let l = list(
        r#"<AnimationList>
             <AnimationInfo Name="walk" StartIndex="0" EndIndex="30" />
             <AnimationInfo StartIndex="5" EndIndex="6" />
             <AnimationInfo Name="run" StartIndex="31" />
           </AnimationList>"#,
    );
    let ranges = action_ranges("hero", 90, Some(&l));
    assert_eq!(names(&ranges), vec!["hero", "walk", "run"]);
    assert_eq!(ranges[2].start, 31);
    assert_eq!(ranges[2].end, 90);
}

#[test]
fn default_range_is_renamed_on_collision() {
    let l = list(
        r#"<AnimationList>
             <AnimationInfo Name="HERO" StartIndex="0" EndIndex="10" />
             <AnimationInfo Name="hero1" StartIndex="10" EndIndex="20" />
           </AnimationList>"#,
    );
    let ranges = action_ranges("hero", 20, Some(&l));
    assert_eq!(names(&ranges), vec!["hero2", "HERO", "hero1"]);
    let first = &ranges[0].name;
    assert!(ranges[1..].iter().all(|r| !r.name.eq_ignore_ascii_case(first)));
}

fn timeline_with(frames: &[i64]) -> TimelineData {
    let mut curves = CurveAccumulator::new();
    let track = frames
        .iter()
        .map(|f| Keyframe::new(*f, KeyValue::Number(*f as f64), None))
        .collect();
    curves.set_prop("hero", "opacity", track);
    curves.set_comp("hero", "cc.Sprite", "spriteFrame", vec![Keyframe::new(
        0,
        KeyValue::Number(0.0),
        None,
    )]);
    TimelineData {
        curves,
        events: vec![
            FrameEvent {
                frame: 45,
                func: "triggerAnimationEvent".into(),
                params: vec!["mid".into()],
            },
            FrameEvent {
                frame: 90,
                func: "triggerAnimationEvent".into(),
                params: Vec::new(),
            },
        ],
    }
}

#[test]
fn segment_keeps_inclusive_range_and_rebases_time() {
    let data = timeline_with(&[0, 30, 60, 90]);
    let range = ActionRange {
        name: "mid".into(),
        start: 30,
        end: 60,
    };
    let clip = segment(&data, &range, 60, 1.0);

    let opacity = &clip.curve_data.paths["hero"].props["opacity"];
    let times: Vec<f64> = opacity.iter().map(|k| k.frame).collect();
    assert_eq!(times, vec![0.0, 0.5]);
    assert_eq!(opacity[0].value, KeyValue::Number(30.0));
    assert_eq!(opacity[1].value, KeyValue::Number(60.0));

    assert!(clip.curve_data.paths["hero"].comps.is_empty());
    assert_eq!(clip.events.len(), 1);
    assert_eq!(clip.events[0].frame, 0.25);
    assert_eq!(clip.sample, 60);
    assert_eq!(clip.duration, 0.5);
}

#[test]
fn empty_ranges_still_produce_clips_with_node_props() {
    let data = timeline_with(&[0]);
    let range = ActionRange {
        name: "late".into(),
        start: 200,
        end: 300,
    };
    let clip = segment(&data, &range, 60, 0.0);
    let hero = &clip.curve_data.paths["hero"];
    assert!(hero.props["opacity"].is_empty());
    assert!(hero.comps.is_empty());
    assert!(clip.events.is_empty());
    assert_eq!(clip.keyframe_count(), 0);
}

#[test]
fn component_tracks_survive_when_in_range() {
    let data = timeline_with(&[0]);
    let range = ActionRange {
        name: "all".into(),
        start: 0,
        end: 90,
    };
    let clip = segment(&data, &range, 60, 1.0);
    assert_eq!(clip.curve_data.paths["hero"].comps["cc.Sprite"]["spriteFrame"].len(), 1);
    assert_eq!(clip.keyframe_count(), 2);

    let json = clip.to_json_pretty().unwrap();
    assert_eq!(AnimationClip::from_json(&json).unwrap(), clip);
}

#[test]
fn extreme_frame_indices_do_not_overflow() {
    let l = list(
        r#"<AnimationList>
             <AnimationInfo Name="huge" StartIndex="-9223372036854775807" EndIndex="9223372036854775807" />
           </AnimationList>"#,
    );
    let ranges = action_ranges("hero", 90, Some(&l));
    assert_eq!(ranges[1].start, -i64::MAX);
    assert_eq!(ranges[1].end, i64::MAX);

    let clip = segment(&timeline_with(&[0, 90]), &ranges[1], 60, 1.0);
    assert!(clip.duration.is_finite() && clip.duration > 0.0);
    let opacity = &clip.curve_data.paths["hero"].props["opacity"];
    assert_eq!(opacity.len(), 2);
    assert!(opacity.iter().all(|k| k.frame.is_finite()));
    assert_eq!(clip.events.len(), 2);
}
