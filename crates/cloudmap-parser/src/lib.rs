//! # Cloudmap Parser
//!
//! Reader for Dia diagram documents. This crate turns the XML of an
//! uncompressed `.dia` file into the ordered list of
//! [`Primitive`](cloudmap_core::primitive::Primitive)s the resolution engine
//! works on.
//!
//! ## Usage
//!
//! ```
//! # use cloudmap_parser::{parse, error::ParseError};
//!
//! fn main() -> Result<(), ParseError> {
//!     let source = r#"<?xml version="1.0" encoding="UTF-8"?>
//!         <dia:diagram xmlns:dia="http://www.lysator.liu.se/~alla/dia/">
//!           <dia:layer name="Background">
//!             <dia:object type="Standard - Ellipse" id="O0">
//!               <dia:attribute name="elem_corner"><dia:point val="0,0"/></dia:attribute>
//!               <dia:attribute name="elem_width"><dia:real val="4"/></dia:attribute>
//!               <dia:attribute name="elem_height"><dia:real val="2"/></dia:attribute>
//!             </dia:object>
//!           </dia:layer>
//!         </dia:diagram>"#;
//!
//!     let primitives = parse(source)?;
//!     assert_eq!(primitives.len(), 1);
//!     Ok(())
//! }
//! ```

pub mod error;

mod object;
mod span;
mod text;

pub use object::{DIA_NAMESPACE, parse_point, shape_kind};
pub use span::Span;
pub use text::decode_string;

use log::{debug, info};
use roxmltree::Document;

use cloudmap_core::primitive::Primitive;

use error::{Diagnostic, ErrorCode, ParseError};
use object::DiaObject;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Read a Dia document from raw file bytes.
///
/// Checks that the bytes are uncompressed UTF-8 text and then hands over to
/// [`parse`].
///
/// # Errors
///
/// Returns [`ParseError`] if the input is gzip-compressed, is not valid
/// UTF-8, or fails [`parse`].
pub fn parse_bytes(bytes: &[u8]) -> Result<Vec<Primitive>, ParseError> {
    if bytes.starts_with(&GZIP_MAGIC) {
        return Err(Diagnostic::error("input is a compressed Dia file")
            .with_code(ErrorCode::E002)
            .with_help("decompress it first, e.g. `gunzip -c diagram.dia > diagram.xml`, or save it from Dia without compression")
            .into());
    }

    let source = std::str::from_utf8(bytes).map_err(|err| {
        let at = err.valid_up_to();
        Diagnostic::error(format!("input is not valid UTF-8: {err}"))
            .with_code(ErrorCode::E003)
            .with_label(Span::new(at..at + 1), "invalid byte sequence")
    })?;

    parse(source)
}

/// Read a Dia document into primitives in document order.
///
/// Every `dia:object` element anywhere under the root becomes one primitive,
/// including objects the engine ignores.
///
/// # Errors
///
/// Returns [`ParseError`] if the text is not well-formed XML or its root is
/// not a `dia:diagram` element in the Dia namespace.
pub fn parse(source: &str) -> Result<Vec<Primitive>, ParseError> {
    info!(bytes = source.len(); "Reading Dia document");

    let doc = Document::parse(source).map_err(|err| {
        let pos = err.pos();
        Diagnostic::error(format!("malformed XML: {err}"))
            .with_code(ErrorCode::E001)
            .with_label(
                Span::at_position(source, pos.row, pos.col),
                "XML reader stopped here",
            )
    })?;

    let root = doc.root_element();
    if !root.has_tag_name((DIA_NAMESPACE, "diagram")) {
        let found = root.tag_name().name();
        let range = root.range();
        return Err(Diagnostic::error("document is not a Dia diagram")
            .with_code(ErrorCode::E100)
            .with_label(
                Span::new(range.start..range.start + found.len() + 1),
                format!("expected `dia:diagram`, found `{found}`"),
            )
            .with_help(format!("the root element must be `diagram` in the `{DIA_NAMESPACE}` namespace"))
            .into());
    }

    let primitives: Vec<Primitive> = doc
        .descendants()
        .filter_map(DiaObject::new)
        .map(|object| object.to_primitive())
        .collect();

    debug!(objects = primitives.len(); "Dia document read");
    Ok(primitives)
}
