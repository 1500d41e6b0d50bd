//! Error codes for the Cloudmap diagnostic system.
//!
//! Error codes are organized by phase:
//! - `E0xx` - Document decoding errors
//! - `E1xx` - Dia structure errors

use std::fmt;

/// Error codes for categorizing diagnostic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Decoding Errors (E0xx)
    // =========================================================================
    /// Malformed XML.
    ///
    /// The XML reader rejected the document.
    E001,

    /// Compressed input.
    ///
    /// The document is gzip-compressed, which is how Dia saves by default.
    E002,

    /// Invalid UTF-8.
    ///
    /// The document bytes are not valid UTF-8 text.
    E003,

    // =========================================================================
    // Structure Errors (E1xx)
    // =========================================================================
    /// Not a Dia document.
    ///
    /// The root element is not `dia:diagram` in the Dia namespace.
    E100,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}
