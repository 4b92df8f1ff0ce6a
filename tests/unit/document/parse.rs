use super::*;

const MINIMAL: &str = r#"<GameFile>
  <PropertyGroup Name="MainScene" Type="Scene" ID="a2ee0952" Version="3.10.0.0" />
  <Content ctype="GameProjectContent">
    <Content>
      <!-- node tree -->
      <Animation Duration="0" Speed="1.0000" />
      <ObjectData Name="Scene" ctype="GameNodeObjectData">
        <Size X="960.0000" Y="640.0000" />
      </ObjectData>
    </Content>
  </Content>
</GameFile>"#;

#[test]
fn parses_required_sections() {
    let doc = parse_document(MINIMAL.as_bytes()).unwrap();
    assert_eq!(doc.kind, DocumentKind::Scene);
    assert_eq!(doc.name.as_deref(), Some("MainScene"));
    assert_eq!(doc.version.as_deref(), Some("3.10.0.0"));
    let obj = doc.object_data().unwrap();
    assert_eq!(obj.attributes.get("ctype").unwrap(), "GameNodeObjectData");
    assert_eq!(obj.children.len(), 1);
    assert!(doc.animation().is_some());
    assert!(doc.animation_list().is_none());
}

#[test]
fn comments_and_text_are_dropped() {
    let doc = parse_document(MINIMAL.as_bytes()).unwrap();
    assert!(doc.content.children.iter().all(|c| !c.tag.is_empty()));
    assert_eq!(doc.content.children.len(), 2);
}

#[test]
fn malformed_markup_is_a_parse_error() {
    let err = parse_document(b"<GameFile><PropertyGroup Type=\"Scene\"></GameFile>").unwrap_err();
    assert!(matches!(err, ConvertError::Parse(_)));
}

#[test]
fn missing_content_is_a_parse_error() {
    let err = parse_document(br#"<GameFile><PropertyGroup Type="Node" /></GameFile>"#).unwrap_err();
    assert!(matches!(err, ConvertError::Parse(_)));
}

#[test]
fn missing_property_group_is_a_parse_error() {
    let err = parse_document(b"<GameFile><Content><Content/></Content></GameFile>").unwrap_err();
    assert!(matches!(err, ConvertError::Parse(_)));
}

#[test]
fn unknown_kind_is_reported() {
    let xml = r#"<GameFile><PropertyGroup Type="Skeleton" /><Content><Content/></Content></GameFile>"#;
    let err = parse_document(xml.as_bytes()).unwrap_err();
    assert!(matches!(err, ConvertError::UnknownDocumentKind(k) if k == "Skeleton"));
}

#[test]
fn layer_and_node_kinds_are_prefabs() {
    assert!(!DocumentKind::from_type_attr("Layer").unwrap().is_scene());
    assert!(!DocumentKind::from_type_attr("Node").unwrap().is_scene());
    assert!(DocumentKind::from_type_attr("Scene").unwrap().is_scene());
}
