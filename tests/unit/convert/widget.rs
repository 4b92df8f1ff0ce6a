use super::*;
use crate::document::parse_markup;

fn widget_for(xml: &str, anchor: Vec2) -> Option<Widget> {
    derive_widget(&parse_markup(xml.as_bytes()).unwrap(), anchor)
}

#[test]
fn no_flags_means_no_widget() {
    assert_eq!(widget_for(r#"<N Name="a" />"#, Vec2::ZERO), None);
    assert_eq!(
        widget_for(
            r#"<N PositionPercentXEnabled="True"><PrePosition X="0" /></N>"#,
            Vec2::ZERO
        ),
        None
    );
}

#[test]
fn left_edge_with_margin_is_absolute() {
    let w = widget_for(r#"<N HorizontalEdge="LeftEdge" LeftMargin="10" />"#, Vec2::ZERO).unwrap();
    assert_eq!(w.left, Some(EdgeConstraint::absolute(10.0)));
    assert_eq!(w.right, None);
    assert_eq!(w.top, None);
    assert_eq!(w.bottom, None);
}

#[test]
fn near_edge_with_percent_size_adds_far_percent() {
    let w = widget_for(
        r#"<N HorizontalEdge="LeftEdge" LeftMargin="4" PercentWidthEnable="True">
             <PreSize X="0.5" />
             <PrePosition X="0.25" />
           </N>"#,
        Vec2::new(0.5, 0.5),
    )
    .unwrap();
    assert_eq!(w.left, Some(EdgeConstraint::absolute(4.0)));
    // 1 - 0.25 - 0.5 * 0.5
    assert_eq!(w.right, Some(EdgeConstraint::percent(0.5)));
}

#[test]
fn both_edges_follow_percent_flags() {
    let abs = widget_for(
        r#"<N VerticalEdge="BothEdge" TopMargin="3" BottomMargin="7" />"#,
        Vec2::ZERO,
    )
    .unwrap();
    assert_eq!(abs.bottom, Some(EdgeConstraint::absolute(7.0)));
    assert_eq!(abs.top, Some(EdgeConstraint::absolute(3.0)));

    let pct = widget_for(
        r#"<N HorizontalEdge="BothEdge" StretchWidthEnable="True"><PreSize X="1" /></N>"#,
        Vec2::ZERO,
    )
    .unwrap();
    assert_eq!(pct.left, Some(EdgeConstraint::percent(0.0)));
    assert_eq!(pct.right, Some(EdgeConstraint::percent(0.0)));
}

#[test]
fn far_edge_with_percent_position() {
    let w = widget_for(
        r#"<N HorizontalEdge="RightEdge" PositionPercentXEnabled="True" RightMargin="9">
             <PrePosition X="0.75" />
           </N>"#,
        Vec2::ZERO,
    )
    .unwrap();
    assert_eq!(w.left, None);
    assert_eq!(w.right, Some(EdgeConstraint::percent(0.25)));
}

#[test]
fn percent_size_without_edge_docks_both_sides_on_both_axes() {
    let w = widget_for(
        r#"<N PercentHeightEnabled="True"><PreSize Y="0.5" /><PrePosition Y="0.5" /></N>"#,
        Vec2::new(0.5, 0.5),
    )
    .unwrap();
    assert_eq!(w.bottom, Some(EdgeConstraint::percent(0.25)));
    assert_eq!(w.top, Some(EdgeConstraint::percent(0.25)));
    assert_eq!(w.left, None);
}

#[test]
fn percent_position_alone_docks_near_edge() {
    let w = widget_for(
        r#"<N PositionPercentYEnabled="True"><PrePosition Y="0.2" /></N>"#,
        Vec2::ZERO,
    )
    .unwrap();
    assert_eq!(w.bottom, Some(EdgeConstraint::percent(0.2)));
    assert_eq!(w.top, None);
}
