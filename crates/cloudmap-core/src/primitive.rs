//! Raw diagram primitives as handed over by a diagram reader.
//!
//! A [`Primitive`] is one shape, text or connector record from the source
//! diagram, before any semantic classification. Every field except the kind
//! and the source identifier is optional; the resolution engine skips
//! primitives whose required fields are missing instead of rejecting them.

use std::{borrow::Borrow, fmt};

use crate::{
    color::Color,
    geometry::{Point, Size},
};

/// Identifier of an object in the source diagram (for example `O12` in Dia).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SourceId(String);

impl SourceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SourceId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for SourceId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for SourceId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// The kind of a primitive, as far as the resolution engine cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// A cloud shape. Becomes an area when filled white, a node otherwise.
    Cloud,
    /// An ellipse-like shape that always becomes a node.
    Ellipse,
    /// A free-floating text label.
    Text,
    /// A straight connector between two endpoints.
    Line,
    /// A connector drawn as a circular arc.
    Arc,
    /// A connector made of straight segments.
    PolyLine,
    /// A connector made of bezier segments.
    BezierLine,
    /// Anything the engine ignores.
    Other,
}

impl ShapeKind {
    /// Returns true for the kinds that may be classified into a node or area.
    pub fn is_region(self) -> bool {
        matches!(self, ShapeKind::Cloud | ShapeKind::Ellipse)
    }

    /// Returns true for the connector kinds.
    pub fn is_connector(self) -> bool {
        matches!(
            self,
            ShapeKind::Line | ShapeKind::Arc | ShapeKind::PolyLine | ShapeKind::BezierLine
        )
    }
}

/// Dash pattern of a connector.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineStyle {
    /// Solid continuous line (default)
    #[default]
    Solid,
    /// Any dashed or dotted pattern
    Dashed,
}

impl LineStyle {
    /// Returns the model-format name of the style.
    pub fn as_str(self) -> &'static str {
        match self {
            LineStyle::Solid => "solid",
            LineStyle::Dashed => "dashed",
        }
    }
}

impl fmt::Display for LineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Explicit endpoint references of a connector.
///
/// Handle `0` is the start of the connector and handle `1` its end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Handles {
    from: Option<SourceId>,
    to: Option<SourceId>,
}

impl Handles {
    pub fn new(from: Option<SourceId>, to: Option<SourceId>) -> Self {
        Self { from, to }
    }

    /// Source id attached to handle `0`, if any.
    pub fn from(&self) -> Option<&SourceId> {
        self.from.as_ref()
    }

    /// Source id attached to handle `1`, if any.
    pub fn to(&self) -> Option<&SourceId> {
        self.to.as_ref()
    }
}

/// One raw shape, text or connector record from the source diagram.
#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    kind: ShapeKind,
    source_id: SourceId,
    corner: Option<Point>,
    width: Option<f64>,
    height: Option<f64>,
    points: Vec<Point>,
    fill_color: Option<Color>,
    line_color: Option<Color>,
    arc_color: Option<Color>,
    line_width: Option<f64>,
    line_style: Option<LineStyle>,
    curve_distance: Option<f64>,
    text: Option<String>,
    text_anchor: Option<Point>,
    handles: Handles,
}

impl Primitive {
    /// Creates a primitive with no geometry, colors or text.
    pub fn new(kind: ShapeKind, source_id: impl Into<SourceId>) -> Self {
        Self {
            kind,
            source_id: source_id.into(),
            corner: None,
            width: None,
            height: None,
            points: Vec::new(),
            fill_color: None,
            line_color: None,
            arc_color: None,
            line_width: None,
            line_style: None,
            curve_distance: None,
            text: None,
            text_anchor: None,
            handles: Handles::default(),
        }
    }

    pub fn with_corner(mut self, corner: Point) -> Self {
        self.corner = Some(corner);
        self
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.width = Some(size.width());
        self.height = Some(size.height());
        self
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    pub fn with_points(mut self, points: Vec<Point>) -> Self {
        self.points = points;
        self
    }

    pub fn with_fill_color(mut self, color: impl Into<Color>) -> Self {
        self.fill_color = Some(color.into());
        self
    }

    pub fn with_line_color(mut self, color: impl Into<Color>) -> Self {
        self.line_color = Some(color.into());
        self
    }

    pub fn with_arc_color(mut self, color: impl Into<Color>) -> Self {
        self.arc_color = Some(color.into());
        self
    }

    pub fn with_line_width(mut self, width: f64) -> Self {
        self.line_width = Some(width);
        self
    }

    pub fn with_line_style(mut self, style: LineStyle) -> Self {
        self.line_style = Some(style);
        self
    }

    pub fn with_curve_distance(mut self, distance: f64) -> Self {
        self.curve_distance = Some(distance);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_text_anchor(mut self, anchor: Point) -> Self {
        self.text_anchor = Some(anchor);
        self
    }

    pub fn with_handles(mut self, handles: Handles) -> Self {
        self.handles = handles;
        self
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn source_id(&self) -> &SourceId {
        &self.source_id
    }

    /// Top-left corner of the shape's bounding box.
    pub fn corner(&self) -> Option<Point> {
        self.corner
    }

    /// Bounding box size, present only when both width and height are known.
    pub fn size(&self) -> Option<Size> {
        Some(Size::new(self.width?, self.height?))
    }

    /// Raw polyline, arc endpoints or bezier control points.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn fill_color(&self) -> Option<&Color> {
        self.fill_color.as_ref()
    }

    pub fn line_color(&self) -> Option<&Color> {
        self.line_color.as_ref()
    }

    pub fn arc_color(&self) -> Option<&Color> {
        self.arc_color.as_ref()
    }

    pub fn line_width(&self) -> Option<f64> {
        self.line_width
    }

    pub fn line_style(&self) -> Option<LineStyle> {
        self.line_style
    }

    pub fn curve_distance(&self) -> Option<f64> {
        self.curve_distance
    }

    /// Embedded label text.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Where a text primitive is anchored.
    pub fn text_anchor(&self) -> Option<Point> {
        self.text_anchor
    }

    pub fn handles(&self) -> &Handles {
        &self.handles
    }

    /// Returns a copy with every coordinate and size multiplied by `factor`.
    ///
    /// Points, corner, text anchor, width, height and curve distance are
    /// scaled. Line widths are left alone; they have their own scale.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            corner: self.corner.map(|p| p.scale(factor)),
            width: self.width.map(|w| w * factor),
            height: self.height.map(|h| h * factor),
            points: self.points.iter().map(|p| p.scale(factor)).collect(),
            curve_distance: self.curve_distance.map(|d| d * factor),
            text_anchor: self.text_anchor.map(|p| p.scale(factor)),
            ..self.clone()
        }
    }
}
