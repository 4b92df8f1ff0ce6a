use super::*;
use crate::document::parse_markup;

fn node(xml: &str) -> SourceNode {
    parse_markup(xml.as_bytes()).unwrap()
}

#[test]
fn conversion_round_trips() {
    let sizes = [Size::ZERO, Size::new(100.0, 50.0), Size::new(960.0, 640.0)];
    let anchors = [
        Vec2::ZERO,
        Vec2::new(0.5, 0.5),
        Vec2::new(1.0, 0.25),
        Vec2::new(0.0, 1.0),
    ];
    let p = Vec2::new(12.5, -40.0);
    for size in sizes {
        for anchor in anchors {
            let back = from_parent_space(to_parent_space(p, size, anchor), size, anchor);
            assert!((back - p).hypot() < 1e-9);
        }
    }
}

#[test]
fn detached_nodes_keep_authored_position() {
    let mut g = SceneGraph::new();
    let n = g.create("n");
    let p = Vec2::new(3.0, 4.0);
    assert_eq!(convert_position(&g, n, p), p);

    let parent = g.create("parent");
    g.node_mut(parent).transform.size = Size::new(200.0, 100.0);
    g.node_mut(parent).transform.anchor = Vec2::new(0.5, 0.5);
    g.add_child(parent, n).unwrap();
    assert_eq!(convert_position(&g, n, p), Vec2::new(-97.0, -46.0));
}

#[test]
fn base_properties_fold_flips_and_skew() {
    let data = node(
        r#"<AbstractNodeData Name="hero" RotationSkewX="30" RotationSkewY="45" FlipX="True" Alpha="128" ctype="SpriteObjectData">
             <Size X="10" Y="20" />
             <AnchorPoint ScaleX="0.5" />
             <Position X="100" Y="200" />
             <Scale ScaleX="2" ScaleY="3" />
             <CColor R="10" G="20" B="30" />
           </AbstractNodeData>"#,
    );
    let mut g = SceneGraph::new();
    let id = g.create("");
    apply_base_properties(&mut g, id, &data, &NodeType::Sprite, "hero");

    let n = g.node(id);
    assert_eq!(n.name, "hero");
    assert_eq!(n.transform.size, Size::new(10.0, 20.0));
    assert_eq!(n.transform.anchor, Vec2::new(0.5, 0.0));
    assert_eq!(n.transform.position, Vec2::new(100.0, 200.0));
    assert_eq!(n.transform.scale, Vec2::new(-2.0, 3.0));
    assert_eq!(n.transform.rotation, Rotation::Euler([30.0, 45.0, 0.0]));
    assert_eq!(n.color, Color::rgb(10, 20, 30));
    assert_eq!(n.opacity, 128);
}

#[test]
fn root_containers_only_take_name_and_size() {
    let data = node(
        r#"<ObjectData Name="Layer" ctype="GameLayerObjectData">
             <Size X="960" Y="640" />
             <Position X="5" Y="5" />
           </ObjectData>"#,
    );
    let mut g = SceneGraph::new();
    let id = g.create("");
    apply_base_properties(&mut g, id, &data, &NodeType::GameLayer, "Layer");
    let n = g.node(id);
    assert_eq!(n.transform.anchor, Vec2::ZERO);
    assert_eq!(n.transform.position, Vec2::ZERO);
    assert_eq!(n.transform.size, Size::new(960.0, 640.0));
}

#[test]
fn text_fields_keep_default_tint() {
    let data = node(r#"<N Alpha="10"><CColor R="0" G="0" B="0" /></N>"#);
    let mut g = SceneGraph::new();
    let id = g.create("");
    apply_base_properties(&mut g, id, &data, &NodeType::TextField, "field");
    assert_eq!(g.node(id).color, Color::WHITE);
    assert_eq!(g.node(id).opacity, 255);
    assert_eq!(rotation_from_skew(15.0, 15.0), Rotation::Angle(15.0));
}
