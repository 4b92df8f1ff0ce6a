//! Attribute lookups with the studio format's defaulting rules.
//!
//! An attribute that is missing or empty yields the default. Numbers parse leniently
//! (`"12.5"` read as an integer is `12`), and a boolean is `true` only when the value
//! lower-cases to `"true"`.

use super::parse::SourceNode;

impl SourceNode {
    /// Non-empty attribute value.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    pub fn str_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.attr(name).unwrap_or(default)
    }

    pub fn int_or(&self, name: &str, default: i64) -> i64 {
        self.attr(name).and_then(parse_int_prefix).unwrap_or(default)
    }

    pub fn float_or(&self, name: &str, default: f64) -> f64 {
        self.attr(name)
            .and_then(parse_float_prefix)
            .unwrap_or(default)
    }

    pub fn bool_or(&self, name: &str, default: bool) -> bool {
        self.attr(name)
            .map(|v| v.eq_ignore_ascii_case("true"))
            .unwrap_or(default)
    }

    /// Type tag (`ctype`), empty when absent.
    pub fn type_tag(&self) -> &str {
        self.str_or("ctype", "")
    }

    /// Authored node name, empty when absent.
    pub fn name(&self) -> &str {
        self.str_or("Name", "")
    }

    /// First direct child element with the given tag.
    pub fn child(&self, tag: &str) -> Option<&SourceNode> {
        self.children.iter().find(|c| c.tag == tag)
    }

    /// Direct child elements with the given tag, in document order.
    pub fn children_named<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a SourceNode> + 'a {
        self.children.iter().filter(move |c| c.tag == tag)
    }

    /// First element with the given tag in depth-first document order, including `self`.
    pub fn find_descendant(&self, tag: &str) -> Option<&SourceNode> {
        if self.tag == tag {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find_descendant(tag))
    }

    pub fn child_str_or<'a>(&'a self, child: &str, name: &str, default: &'a str) -> &'a str {
        self.child(child)
            .map(|c| c.str_or(name, default))
            .unwrap_or(default)
    }

    pub fn child_int_or(&self, child: &str, name: &str, default: i64) -> i64 {
        self.child(child)
            .map(|c| c.int_or(name, default))
            .unwrap_or(default)
    }

    pub fn child_float_or(&self, child: &str, name: &str, default: f64) -> f64 {
        self.child(child)
            .map(|c| c.float_or(name, default))
            .unwrap_or(default)
    }
}

/// Parse the leading integer of `s` (`"42px"` → 42, `"1.0"` → 1).
pub fn parse_int_prefix(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let end = numeric_prefix_len(s, false);
    s[..end].parse().ok()
}

/// Parse the leading float of `s` (`"0.5"`, `"-3e2"`, `"12abc"` → 12).
pub fn parse_float_prefix(s: &str) -> Option<f64> {
    let s = s.trim_start();
    if let Ok(v) = s.trim_end().parse::<f64>() {
        return Some(v);
    }
    let end = numeric_prefix_len(s, true);
    s[..end].parse().ok()
}

fn numeric_prefix_len(s: &str, allow_fraction: bool) -> usize {
    let bytes = s.as_bytes();
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }
    let digits_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if allow_fraction && i < bytes.len() && bytes[i] == b'.' {
        let mut j = i + 1;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > i + 1 || i > digits_start {
            i = j;
        }
    }
    if i == digits_start { 0 } else { i }
}

#[cfg(test)]
#[path = "../../tests/unit/document/query.rs"]
mod tests;
