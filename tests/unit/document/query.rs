use crate::document::parse::parse_markup;

use super::*;

fn node(xml: &str) -> SourceNode {
    parse_markup(xml.as_bytes()).unwrap()
}

#[test]
fn empty_attributes_fall_back_to_default() {
    let n = node(r#"<N Name="" Tag="5" />"#);
    assert_eq!(n.attr("Name"), None);
    assert_eq!(n.str_or("Name", "fallback"), "fallback");
    assert_eq!(n.int_or("Tag", 0), 5);
    assert_eq!(n.int_or("Missing", 7), 7);
}

#[test]
fn numbers_parse_leniently() {
    assert_eq!(parse_int_prefix("12.5"), Some(12));
    assert_eq!(parse_int_prefix("-3"), Some(-3));
    assert_eq!(parse_int_prefix("abc"), None);
    assert_eq!(parse_float_prefix("0.2500"), Some(0.25));
    assert_eq!(parse_float_prefix("-1e2"), Some(-100.0));
    assert_eq!(parse_float_prefix("12px"), Some(12.0));
    assert_eq!(parse_float_prefix("-"), None);
}

#[test]
fn booleans_are_case_insensitive() {
    let n = node(r#"<N A="True" B="false" C="yes" />"#);
    assert!(n.bool_or("A", false));
    assert!(!n.bool_or("B", true));
    assert!(!n.bool_or("C", true));
    assert!(n.bool_or("D", true));
}

#[test]
fn child_lookups_use_defaults_when_child_missing() {
    let n = node(r#"<N><Size X="10" Y="" /></N>"#);
    assert_eq!(n.child_float_or("Size", "X", 0.0), 10.0);
    assert_eq!(n.child_float_or("Size", "Y", 3.0), 3.0);
    assert_eq!(n.child_float_or("Position", "X", 4.0), 4.0);
    assert_eq!(n.child_str_or("FileData", "Type", "Default"), "Default");
}

#[test]
fn descendants_are_found_in_document_order() {
    let n = node(r#"<Root><A><Target Id="1"/></A><Target Id="2"/></Root>"#);
    assert_eq!(n.find_descendant("Target").unwrap().attr("Id"), Some("1"));
    assert_eq!(n.children_named("Target").count(), 1);
}
