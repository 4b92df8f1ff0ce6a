//! Studio markup decoded into an owned, attributed element tree.

pub mod parse;
pub mod query;

pub use parse::{DocumentKind, SourceDocument, SourceNode, parse_document, parse_markup};
