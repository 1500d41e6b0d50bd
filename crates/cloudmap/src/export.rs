//! Export of resolved models.
//!
//! This module provides the [`Exporter`] trait, the last stage of an import:
//!
//! ```text
//! Dia document
//!     ↓ parse
//! Primitives
//!     ↓ resolve
//! Model
//!     ↓ export (this module)
//! Output
//! ```
//!
//! # Available Backends
//!
//! - [`json`] — the Cloudmap JSON model via [`json::JsonExporter`]
//!
//! Export errors are reported as [`Error`], which converts into
//! [`CloudmapError::Export`](crate::CloudmapError::Export).

/// JSON export backend.
pub mod json;

use thiserror::Error;

use cloudmap_core::model::Model;

/// Abstraction for model export backends.
pub trait Exporter {
    /// Renders `model` into the backend's output format.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the model cannot be encoded.
    fn export_model(&self, model: &Model) -> Result<String, Error>;
}

/// Errors that can occur during export.
#[derive(Debug, Error)]
pub enum Error {
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
