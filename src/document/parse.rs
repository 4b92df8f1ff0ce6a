use std::collections::BTreeMap;

use crate::foundation::error::{ConvertError, ConvertResult};

/// Element of a parsed studio document.
///
/// Only elements survive parsing; text, comments and CDATA are dropped.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SourceNode {
    /// Element name, e.g. `AbstractNodeData` or `Position`.
    pub tag: String,
    /// Attributes in name order.
    pub attributes: BTreeMap<String, String>,
    /// Child elements in document order.
    pub children: Vec<SourceNode>,
}

/// Declared kind of a `.csd` document (`PropertyGroup@Type`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum DocumentKind {
    /// Converted to a scene (`.fire`).
    Scene,
    /// Converted to a prefab.
    Node,
    /// Converted to a prefab.
    Layer,
}

impl DocumentKind {
    pub fn from_type_attr(value: &str) -> ConvertResult<Self> {
        match value {
            "Scene" => Ok(Self::Scene),
            "Node" => Ok(Self::Node),
            "Layer" => Ok(Self::Layer),
            other => Err(ConvertError::unknown_kind(other)),
        }
    }

    pub fn is_scene(self) -> bool {
        matches!(self, Self::Scene)
    }
}

/// Parsed `.csd` document.
#[derive(Clone, Debug)]
pub struct SourceDocument {
    pub kind: DocumentKind,
    /// `PropertyGroup@Name`, when authored.
    pub name: Option<String>,
    /// `PropertyGroup@Version`, when authored.
    pub version: Option<String>,
    /// Inner `Content` element holding `ObjectData`, `Animation` and `AnimationList`.
    pub content: SourceNode,
}

impl SourceDocument {
    /// Root of the node tree.
    pub fn object_data(&self) -> Option<&SourceNode> {
        self.content.child("ObjectData")
    }

    /// Timeline section.
    pub fn animation(&self) -> Option<&SourceNode> {
        self.content.child("Animation")
    }

    /// Named action ranges.
    pub fn animation_list(&self) -> Option<&SourceNode> {
        self.content.child("AnimationList")
    }
}

/// Parse raw bytes into a generic element tree rooted at the document element.
pub fn parse_markup(bytes: &[u8]) -> ConvertResult<SourceNode> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| ConvertError::parse(format!("document is not valid UTF-8: {e}")))?;
    let text = text.trim_start_matches('\u{feff}');
    let doc = roxmltree::Document::parse(text)
        .map_err(|e| ConvertError::parse(format!("malformed markup: {e}")))?;
    Ok(convert_element(doc.root_element()))
}

/// Parse a `.csd` document and validate its required sections.
pub fn parse_document(bytes: &[u8]) -> ConvertResult<SourceDocument> {
    let root = parse_markup(bytes)?;

    let property_group = root
        .find_descendant("PropertyGroup")
        .ok_or_else(|| ConvertError::parse("missing PropertyGroup section"))?;
    let kind_attr = property_group
        .attr("Type")
        .ok_or_else(|| ConvertError::parse("PropertyGroup has no Type"))?;
    let kind = DocumentKind::from_type_attr(kind_attr)?;

    let content = root
        .find_descendant("Content")
        .and_then(|outer| outer.child("Content"))
        .ok_or_else(|| ConvertError::parse("missing Content section"))?
        .clone();

    Ok(SourceDocument {
        kind,
        name: property_group.attr("Name").map(str::to_owned),
        version: property_group.attr("Version").map(str::to_owned),
        content,
    })
}

fn convert_element(node: roxmltree::Node<'_, '_>) -> SourceNode {
    SourceNode {
        tag: node.tag_name().name().to_owned(),
        attributes: node
            .attributes()
            .map(|a| (a.name().to_owned(), a.value().to_owned()))
            .collect(),
        children: node
            .children()
            .filter(|c| c.is_element())
            .map(convert_element)
            .collect(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/document/parse.rs"]
mod tests;
