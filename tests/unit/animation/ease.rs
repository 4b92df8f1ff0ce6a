use super::*;
use crate::document::parse_markup;

fn named(s: &str) -> Option<EasingSpec> {
    Some(EasingSpec::Named(s.to_owned()))
}

#[test]
fn codes_map_to_family_and_phase() {
    assert_eq!(easing_from_code(1), named("sineIn"));
    assert_eq!(easing_from_code(2), named("sineOut"));
    assert_eq!(easing_from_code(6), named("quadInOut"));
    assert_eq!(easing_from_code(28), named("bounceIn"));
    assert_eq!(easing_from_code(30), named("bounceInOut"));
}

#[test]
fn zero_negative_and_out_of_range_codes_have_no_easing() {
    assert_eq!(easing_from_code(0), None);
    assert_eq!(easing_from_code(-2), None);
    assert_eq!(easing_from_code(31), None);
}

#[test]
fn bezier_uses_inner_control_points() {
    let frame = parse_markup(
        br#"<PointFrame FrameIndex="0">
              <EasingData Type="-1">
                <Points>
                  <PointF />
                  <PointF X="0.2" Y="0.1" />
                  <PointF X="0.8" Y="0.9" />
                  <PointF X="1" Y="1" />
                </Points>
              </EasingData>
            </PointFrame>"#,
    )
    .unwrap();
    assert_eq!(
        resolve_easing(&frame),
        Some(EasingSpec::Bezier([0.2, 0.1, 0.8, 0.9]))
    );
}

#[test]
fn missing_easing_data_is_linear() {
    let frame = parse_markup(br#"<IntFrame FrameIndex="3" Value="1" />"#).unwrap();
    assert_eq!(resolve_easing(&frame), None);

    let frame = parse_markup(br#"<IntFrame><EasingData Type="4" /></IntFrame>"#).unwrap();
    assert_eq!(resolve_easing(&frame), named("quadIn"));
}

#[test]
fn bezier_serializes_as_plain_array() {
    let json = serde_json::to_string(&EasingSpec::Bezier([0.0, 0.5, 0.5, 1.0])).unwrap();
    assert_eq!(json, "[0.0,0.5,0.5,1.0]");
}
