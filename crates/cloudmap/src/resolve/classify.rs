//! Shape classification: raw primitives into nodes and areas.

use indexmap::IndexMap;
use log::trace;

use cloudmap_core::{
    geometry::Ellipse,
    model::{Area, AreaId, Node, NodeId},
    primitive::{Primitive, ShapeKind, SourceId},
};

/// The semantic role a region-like primitive takes on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Node,
    Area,
}

/// Decides whether `primitive` becomes a node or an area, and where it sits.
///
/// Ellipse-like shapes are always nodes. Clouds are areas when their fill is
/// exactly white and nodes otherwise. Returns `None` for every other kind and
/// for shapes that lack a corner, a width or a height.
pub fn classify(primitive: &Primitive) -> Option<(EntityKind, Ellipse)> {
    let kind = match primitive.kind() {
        ShapeKind::Ellipse => EntityKind::Node,
        ShapeKind::Cloud if primitive.fill_color().is_some_and(|fill| fill.is_white()) => {
            EntityKind::Area
        }
        ShapeKind::Cloud => EntityKind::Node,
        _ => return None,
    };
    let ellipse = Ellipse::from_corner(primitive.corner()?, primitive.size()?);
    Some((kind, ellipse))
}

/// Node and area tables under construction, with their source-id lookups.
///
/// The lookups map a diagram object id to the entity created from it. They
/// are plain keyed mappings; entities never point back at primitives.
#[derive(Debug, Default)]
pub struct Entities {
    nodes: Vec<Node>,
    areas: Vec<Area>,
    node_by_source: IndexMap<SourceId, NodeId>,
    area_by_source: IndexMap<SourceId, AreaId>,
}

impl Entities {
    /// Classifies every primitive in order.
    ///
    /// Ids are handed out in encounter order, separately for nodes and areas.
    pub fn classify_all(primitives: &[Primitive]) -> Self {
        let mut entities = Self::default();
        for primitive in primitives {
            match classify(primitive) {
                Some((kind, ellipse)) => entities.add(kind, primitive, ellipse),
                None if primitive.kind().is_region() => {
                    trace!(source_id = primitive.source_id().as_str(); "Shape without geometry skipped");
                }
                None => {}
            }
        }
        entities
    }

    fn add(&mut self, kind: EntityKind, primitive: &Primitive, ellipse: Ellipse) {
        let source_id = primitive.source_id().clone();
        let name = primitive.text().unwrap_or_default();
        match kind {
            EntityKind::Node => {
                let id = NodeId::from_index(self.nodes.len());
                self.node_by_source.insert(source_id.clone(), id);
                self.nodes.push(Node::new(id, source_id, ellipse, name));
            }
            EntityKind::Area => {
                let id = AreaId::from_index(self.areas.len());
                self.area_by_source.insert(source_id.clone(), id);
                self.areas.push(Area::new(id, source_id, ellipse, name));
            }
        }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn areas(&self) -> &[Area] {
        &self.areas
    }

    /// Mutable access to both tables at once.
    pub fn tables_mut(&mut self) -> (&mut [Node], &mut [Area]) {
        (self.nodes.as_mut_slice(), self.areas.as_mut_slice())
    }

    /// The node created from the diagram object `source_id`, if any.
    pub fn node_for_source(&self, source_id: &str) -> Option<NodeId> {
        self.node_by_source.get(source_id).copied()
    }

    /// The area created from the diagram object `source_id`, if any.
    pub fn area_for_source(&self, source_id: &str) -> Option<AreaId> {
        self.area_by_source.get(source_id).copied()
    }

    pub fn into_tables(self) -> (Vec<Node>, Vec<Area>) {
        (self.nodes, self.areas)
    }
}
