//! Field extraction from a single `dia:object` element.
//!
//! Dia stores every object property as a `dia:attribute` child named after the
//! property, holding one typed value element (`dia:point`, `dia:real`,
//! `dia:color`, `dia:enum`, `dia:string` or a `dia:composite`). Lookups only
//! ever descend through direct children, so nested group contents never leak
//! into the enclosing object's fields.
//!
//! Every getter is lenient: a missing attribute or a value that does not parse
//! is reported as absent rather than as an error.

use log::trace;
use roxmltree::Node;

use cloudmap_core::{
    color::Color,
    geometry::Point,
    primitive::{Handles, LineStyle, Primitive, ShapeKind, SourceId},
};

use crate::text::decode_string;

/// XML namespace of Dia documents.
pub const DIA_NAMESPACE: &str = "http://www.lysator.liu.se/~alla/dia/";

/// Maps a Dia object `type` attribute to the kind the engine understands.
pub fn shape_kind(type_name: &str) -> ShapeKind {
    match type_name {
        "Network - Cloud" => ShapeKind::Cloud,
        "Flowchart - Ellipse" | "Standard - Ellipse" => ShapeKind::Ellipse,
        "Standard - Text" => ShapeKind::Text,
        "Standard - Line" => ShapeKind::Line,
        "Standard - Arc" => ShapeKind::Arc,
        "Standard - PolyLine" => ShapeKind::PolyLine,
        "Standard - BezierLine" => ShapeKind::BezierLine,
        _ => ShapeKind::Other,
    }
}

/// Parses a Dia point value of the form `"x,y"`.
pub fn parse_point(value: &str) -> Option<Point> {
    let (x, y) = value.split_once(',')?;
    if y.contains(',') {
        return None;
    }
    Some(Point::new(parse_real(x)?, parse_real(y)?))
}

fn parse_real(value: &str) -> Option<f64> {
    value.trim().parse().ok()
}

/// A borrowed view of one `dia:object` element.
#[derive(Debug, Clone, Copy)]
pub struct DiaObject<'a, 'input> {
    node: Node<'a, 'input>,
}

impl<'a, 'input> DiaObject<'a, 'input> {
    /// Wraps `node` if it is a `dia:object` element.
    pub fn new(node: Node<'a, 'input>) -> Option<Self> {
        node.has_tag_name((DIA_NAMESPACE, "object"))
            .then_some(Self { node })
    }

    /// The object's `type` attribute, e.g. `Standard - Line`.
    pub fn type_name(&self) -> &'a str {
        self.node.attribute("type").unwrap_or_default()
    }

    /// The object's `id` attribute, e.g. `O7`.
    pub fn id(&self) -> &'a str {
        self.node.attribute("id").unwrap_or_default()
    }

    /// Converts the object into a primitive carrying every field it defines.
    pub fn to_primitive(&self) -> Primitive {
        let kind = shape_kind(self.type_name());
        if kind == ShapeKind::Other {
            trace!(id = self.id(), type_name = self.type_name(); "Object type ignored by the engine");
        }

        let mut primitive = Primitive::new(kind, SourceId::new(self.id()))
            .with_points(self.points(kind))
            .with_handles(self.handles());

        if let Some(corner) = self.point("elem_corner").or_else(|| self.point("obj_pos")) {
            primitive = primitive.with_corner(corner);
        }
        if let Some(width) = self.real("elem_width") {
            primitive = primitive.with_width(width);
        }
        if let Some(height) = self.real("elem_height") {
            primitive = primitive.with_height(height);
        }
        if let Some(fill) = self.color("fill_colour") {
            primitive = primitive.with_fill_color(fill);
        }
        if let Some(line) = self.color("line_color") {
            primitive = primitive.with_line_color(line);
        }
        if let Some(arc) = self.color("arc_color") {
            primitive = primitive.with_arc_color(arc);
        }
        if let Some(width) = self.real("line_width") {
            primitive = primitive.with_line_width(width);
        }
        if let Some(style) = self.line_style() {
            primitive = primitive.with_line_style(style);
        }
        if let Some(distance) = self.real("curve_distance") {
            primitive = primitive.with_curve_distance(distance);
        }
        let text = self.text();
        if !text.is_empty() {
            primitive = primitive.with_text(text);
        }
        if let Some(anchor) = self.text_anchor() {
            primitive = primitive.with_text_anchor(anchor);
        }

        primitive
    }

    /// The `dia:attribute` child with the given `name`.
    fn attribute(&self, name: &str) -> Option<Node<'a, 'input>> {
        find_attribute(self.node, name)
    }

    fn point(&self, name: &str) -> Option<Point> {
        let value = child_element(self.attribute(name)?, "point")?;
        parse_point(value.attribute("val")?)
    }

    fn real(&self, name: &str) -> Option<f64> {
        let value = child_element(self.attribute(name)?, "real")?;
        parse_real(value.attribute("val")?)
    }

    fn color(&self, name: &str) -> Option<Color> {
        let value = child_element(self.attribute(name)?, "color")?;
        value.attribute("val").map(Color::new)
    }

    fn line_style(&self) -> Option<LineStyle> {
        let value = child_element(self.attribute("line_style")?, "enum")?;
        let style: i64 = value.attribute("val")?.trim().parse().ok()?;
        Some(if style == 0 {
            LineStyle::Solid
        } else {
            LineStyle::Dashed
        })
    }

    /// Raw geometry points of a connector, read from the attribute its kind uses.
    fn points(&self, kind: ShapeKind) -> Vec<Point> {
        let name = match kind {
            ShapeKind::Line | ShapeKind::Arc => "conn_endpoints",
            ShapeKind::PolyLine => "poly_points",
            ShapeKind::BezierLine => "bez_points",
            _ => return Vec::new(),
        };
        let Some(attribute) = self.attribute(name) else {
            return Vec::new();
        };
        attribute
            .children()
            .filter(|node| node.has_tag_name((DIA_NAMESPACE, "point")))
            .filter_map(|node| parse_point(node.attribute("val")?))
            .collect()
    }

    /// The `text` composite of the object, if it has one.
    fn text_composite(&self) -> Option<Node<'a, 'input>> {
        self.attribute("text")?
            .children()
            .find(|node| {
                node.has_tag_name((DIA_NAMESPACE, "composite"))
                    && node.attribute("type") == Some("text")
            })
    }

    /// The decoded label text, empty when the object carries none.
    fn text(&self) -> String {
        let raw = self
            .text_composite()
            .and_then(|composite| find_attribute(composite, "string"))
            .and_then(|attribute| child_element(attribute, "string"))
            .and_then(|string| string.text());
        decode_string(raw)
    }

    /// The text position, falling back to the object position.
    fn text_anchor(&self) -> Option<Point> {
        let composite_pos = self
            .text_composite()
            .and_then(|composite| find_attribute(composite, "pos"))
            .and_then(|attribute| child_element(attribute, "point"))
            .and_then(|point| parse_point(point.attribute("val")?));
        composite_pos.or_else(|| self.point("obj_pos"))
    }

    /// Explicit endpoint references from `dia:connections`.
    ///
    /// Handle `0` is the start and handle `1` the end. If a handle is listed
    /// more than once the last entry wins.
    fn handles(&self) -> Handles {
        let Some(connections) = child_element(self.node, "connections") else {
            return Handles::default();
        };

        let mut from = None;
        let mut to = None;
        for connection in connections
            .children()
            .filter(|node| node.has_tag_name((DIA_NAMESPACE, "connection")))
        {
            let target = connection.attribute("to").map(SourceId::new);
            match connection.attribute("handle") {
                Some("0") => from = target,
                Some("1") => to = target,
                _ => {}
            }
        }
        Handles::new(from, to)
    }
}

fn find_attribute<'a, 'input>(parent: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    parent.children().find(|node| {
        node.has_tag_name((DIA_NAMESPACE, "attribute")) && node.attribute("name") == Some(name)
    })
}

fn child_element<'a, 'input>(parent: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    parent
        .children()
        .find(|node| node.has_tag_name((DIA_NAMESPACE, tag)))
}
