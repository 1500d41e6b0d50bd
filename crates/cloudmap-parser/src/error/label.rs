//! Labeled source spans for diagnostic messages.

use crate::span::Span;

/// A span in the source document with a short note on what is there.
#[derive(Debug, Clone)]
pub struct Label {
    span: Span,
    message: String,
}

impl Label {
    /// Create a label pointing at `span`.
    pub fn new(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
        }
    }

    /// Get the span this label applies to.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Get the label message.
    pub fn message(&self) -> &str {
        &self.message
    }
}
