//! Error types for Cloudmap operations.
//!
//! This module provides the main error type [`CloudmapError`] which wraps
//! the error conditions that can occur while importing a diagram.

use std::io;

use thiserror::Error;

use cloudmap_parser::error::ParseError;

/// The main error type for Cloudmap operations.
///
/// Resolution itself never fails; these are the failures of the stages
/// around it.
///
/// # Diagnostic Variants
///
/// The `Parse` variant carries the source text alongside the parser's
/// diagnostics so they can be rendered with snippets.
#[derive(Debug, Error)]
pub enum CloudmapError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(#[from] crate::export::Error),
}

impl CloudmapError {
    /// Create a new `Parse` error with the associated source text.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
