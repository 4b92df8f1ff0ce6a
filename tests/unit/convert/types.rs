use super::*;

#[test]
fn tags_round_trip() {
    for tag in [
        "SpriteObjectData",
        "ButtonObjectData",
        "ScrollViewObjectData",
        "ProjectNodeObjectData",
        "GameLayerObjectData",
    ] {
        assert_eq!(NodeType::from_tag(tag).tag(), tag);
    }
}

#[test]
fn unknown_tags_are_structural() {
    let t = NodeType::from_tag("ArmatureNodeObjectData");
    assert_eq!(t, NodeType::Unrecognized("ArmatureNodeObjectData".to_owned()));
    assert_eq!(t.tag(), "ArmatureNodeObjectData");
    assert_eq!(t.creator(), Creator::Default);
    assert!(!t.has_initializer());
    assert!(t.applies_transform());
}

#[test]
fn creators_and_property_rules() {
    assert_eq!(NodeType::ScrollView.creator(), Creator::ScrollView);
    assert_eq!(NodeType::ProjectNode.creator(), Creator::ProjectNode);
    assert!(!NodeType::GameNode.applies_transform());
    assert!(!NodeType::TextField.applies_tint());
    assert!(NodeType::Sprite.applies_tint());
    assert!(NodeType::Panel.has_initializer());
}
