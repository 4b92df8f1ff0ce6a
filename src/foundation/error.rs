use std::path::PathBuf;

/// Crate-wide result alias.
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Errors produced while converting studio documents.
///
/// `Parse`, `UnknownDocumentKind` and `Cycle` only abort the document being converted. `Io` and
/// `Import` abort the whole run because partially written output is unsafe to hand to the host.
#[derive(thiserror::Error, Debug)]
pub enum ConvertError {
    #[error("parse error: {0}")]
    Parse(String),

    #[error("unknown document kind: {0}")]
    UnknownDocumentKind(String),

    #[error("reference cycle: {}", .0.display())]
    Cycle(PathBuf),

    #[error("asset error: {0}")]
    Asset(String),

    #[error("component error: {0}")]
    Component(String),

    #[error("import error: {0}")]
    Import(String),

    #[error("io error at '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ConvertError {
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    pub fn unknown_kind(kind: impl Into<String>) -> Self {
        Self::UnknownDocumentKind(kind.into())
    }

    pub fn asset(msg: impl Into<String>) -> Self {
        Self::Asset(msg.into())
    }

    pub fn component(msg: impl Into<String>) -> Self {
        Self::Component(msg.into())
    }

    pub fn import(msg: impl Into<String>) -> Self {
        Self::Import(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// `true` for failures that only invalidate the current document.
    pub fn is_document_fatal(&self) -> bool {
        matches!(
            self,
            Self::Parse(_) | Self::UnknownDocumentKind(_) | Self::Cycle(_)
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
