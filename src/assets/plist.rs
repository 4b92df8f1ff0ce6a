//! Minimal property-list reading: just enough for sprite atlases and particle descriptors.

use crate::foundation::error::{ConvertError, ConvertResult};

fn top_dict<'a, 'i>(doc: &'a roxmltree::Document<'i>) -> Option<roxmltree::Node<'a, 'i>> {
    doc.root_element()
        .children()
        .find(|n| n.is_element() && n.has_tag_name("dict"))
}

/// `(key, value)` element pairs of a `<dict>`.
fn entries<'a, 'i>(
    dict: roxmltree::Node<'a, 'i>,
) -> impl Iterator<Item = (&'a str, roxmltree::Node<'a, 'i>)> {
    let elems: Vec<_> = dict.children().filter(|n| n.is_element()).collect();
    elems
        .chunks(2)
        .filter_map(|pair| match pair {
            [k, v] if k.has_tag_name("key") => Some((k.text().unwrap_or(""), *v)),
            _ => None,
        })
        .collect::<Vec<_>>()
        .into_iter()
}

fn parse(text: &str) -> ConvertResult<roxmltree::Document<'_>> {
    roxmltree::Document::parse(text).map_err(|e| ConvertError::parse(format!("plist: {e}")))
}

/// String value stored under `key` in the top-level dictionary.
pub fn top_level_string(text: &str, key: &str) -> ConvertResult<Option<String>> {
    let doc = parse(text)?;
    let Some(dict) = top_dict(&doc) else {
        return Ok(None);
    };
    Ok(entries(dict)
        .find(|(k, v)| *k == key && v.has_tag_name("string"))
        .and_then(|(_, v)| v.text().map(str::to_owned)))
}

/// Names of the frames of a sprite atlas, in file order. Empty for other property lists.
pub fn frame_names(text: &str) -> ConvertResult<Vec<String>> {
    let doc = parse(text)?;
    let Some(dict) = top_dict(&doc) else {
        return Ok(Vec::new());
    };
    let Some((_, frames)) = entries(dict).find(|(k, v)| *k == "frames" && v.has_tag_name("dict"))
    else {
        return Ok(Vec::new());
    };
    Ok(entries(frames).map(|(k, _)| k.to_owned()).collect())
}

#[cfg(test)]
#[path = "../../tests/unit/assets/plist.rs"]
mod tests;
