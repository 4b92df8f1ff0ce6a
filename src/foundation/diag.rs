/// A recoverable problem found while converting a document.
///
/// Diagnostics never stop sibling processing; they exist so a batch import can be audited
/// afterwards.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Diagnostic {
    /// Source document the problem was found in.
    pub document: String,
    /// Node name or node path, empty for document-level problems.
    pub node: String,
    /// Attribute, property or component the problem concerns.
    pub field: String,
    /// Human-readable description.
    pub message: String,
}

/// Append-only diagnostic sink scoped to one import run.
#[derive(Clone, Debug, Default)]
pub struct Diagnostics {
    document: String,
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the document subsequent diagnostics are attributed to. Returns the previous one so
    /// nested conversions can restore it.
    pub fn enter_document(&mut self, document: impl Into<String>) -> String {
        std::mem::replace(&mut self.document, document.into())
    }

    /// Restore the document returned by [`Self::enter_document`].
    pub fn leave_document(&mut self, previous: String) {
        self.document = previous;
    }

    pub fn current_document(&self) -> &str {
        &self.document
    }

    /// Record a diagnostic and emit it as a structured `warn` event.
    pub fn warn(&mut self, node: &str, field: &str, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(
            document = %self.document,
            node = %node,
            field = %field,
            "{message}"
        );
        self.entries.push(Diagnostic {
            document: self.document.clone(),
            node: node.to_owned(),
            field: field.to_owned(),
            message,
        });
    }

    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Diagnostics concerning a given field.
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a Diagnostic> + 'a {
        self.entries.iter().filter(move |d| d.field == field)
    }
}
