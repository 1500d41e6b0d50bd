//! Rendering of [`CloudmapError`] through miette.
//!
//! Reader failures carry one diagnostic with labels into the document, so
//! they render with a source snippet. Every other failure renders as a plain
//! message under a `cloudmap::*` code.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceCode, SourceSpan};

use cloudmap::CloudmapError;
use cloudmap_parser::{Span, error::Diagnostic};

/// A [`CloudmapError`] viewed as a miette diagnostic.
pub struct Report<'a> {
    err: &'a CloudmapError,
}

impl<'a> Report<'a> {
    /// Wrap `err` for rendering.
    pub fn new(err: &'a CloudmapError) -> Self {
        Self { err }
    }

    /// The reader diagnostic and document text, for parse failures.
    fn parse_diagnostic(&self) -> Option<(&'a Diagnostic, &'a str)> {
        match self.err {
            CloudmapError::Parse { err, src } => Some((err.diagnostic(), src.as_str())),
            _ => None,
        }
    }
}

impl fmt::Debug for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Report").field("err", self.err).finish()
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.parse_diagnostic() {
            Some((diag, _)) => f.write_str(diag.message()),
            None => fmt::Display::fmt(self.err, f),
        }
    }
}

impl std::error::Error for Report<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.err {
            CloudmapError::Io(err) => Some(err),
            CloudmapError::Export(err) => Some(err),
            CloudmapError::Parse { .. } | CloudmapError::Config(_) => None,
        }
    }
}

impl MietteDiagnostic for Report<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code: Box<dyn fmt::Display> = match self.err {
            CloudmapError::Parse { err, .. } => Box::new(err.diagnostic().code()?),
            CloudmapError::Io(_) => Box::new("cloudmap::io"),
            CloudmapError::Config(_) => Box::new("cloudmap::config"),
            CloudmapError::Export(_) => Box::new("cloudmap::export"),
        };
        Some(code)
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self.err {
            CloudmapError::Parse { err, .. } => err
                .diagnostic()
                .help()
                .map(|help| Box::new(help) as Box<dyn fmt::Display>),
            CloudmapError::Config(_) => Some(Box::new(
                "see `[import]` and `[style]` in the configuration reference",
            )),
            _ => None,
        }
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        match self.err {
            CloudmapError::Parse { src, .. } => Some(src as &dyn SourceCode),
            _ => None,
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let (diag, src) = self.parse_diagnostic()?;
        if diag.labels().is_empty() {
            return None;
        }

        Some(Box::new(diag.labels().iter().map(move |label| {
            LabeledSpan::new_primary_with_span(
                Some(label.message().to_string()),
                clamp_span(label.span(), src.len()),
            )
        })))
    }
}

/// Convert a reader [`Span`] to a miette [`SourceSpan`] inside the document.
///
/// Truncated XML reports a position at or past the last byte; clamping keeps
/// such a label renderable.
fn clamp_span(span: Span, src_len: usize) -> SourceSpan {
    let start = span.start().min(src_len);
    let len = span.len().min(src_len - start);
    SourceSpan::new(start.into(), len)
}
