//! Error and diagnostic system for the Cloudmap diagram reader.
//!
//! This module provides an error handling system with:
//! - Error codes for documentation and searchability
//! - Labeled spans pointing into the source document
//! - Help text for the usual fix
//!
//! # Overview
//!
//! The error system is built around the [`Diagnostic`] type, which represents
//! a single error message with optional error code, source locations, and
//! help text. A diagnostic is wrapped in [`ParseError`]
//! for returning from [`parse`](crate::parse).
//!
//! # Example
//!
//! ```
//! # use cloudmap_parser::error::{Diagnostic, ErrorCode};
//! # use cloudmap_parser::Span;
//!
//! let diag = Diagnostic::error("document is not a Dia diagram")
//!     .with_code(ErrorCode::E100)
//!     .with_label(Span::new(39..51), "expected `dia:diagram`")
//!     .with_help("save the diagram from Dia as uncompressed XML");
//! ```

mod diagnostic;
mod error_code;
mod label;
mod parse_error;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
