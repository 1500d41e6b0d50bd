//! Turning connector primitives into connections between nodes.
//!
//! Each endpoint is resolved by trying a short list of [`EndpointStrategy`]
//! implementations in order: the explicit handle reference first, then the
//! node nearest the connector's own geometry. Connectors that end up with a
//! missing endpoint, or with both ends on the same node, are dropped.

use indexmap::{IndexMap, map::Entry};
use log::trace;

use cloudmap_core::{
    color::Color,
    geometry::{self, thickness_from_line_width},
    model::{
        Connection, ConnectionCategory, ConnectionId, ConnectionType, ConnectionTypeId, Node,
        NodeId,
    },
    primitive::{Primitive, ShapeKind},
};

use super::classify::Entities;

/// Which end of a connector is being resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    From,
    To,
}

/// One way of finding the node at an end of a connector.
pub trait EndpointStrategy {
    /// Returns the node for `endpoint` of `connector`, or `None` to defer to
    /// the next strategy.
    fn resolve(&self, connector: &Primitive, endpoint: Endpoint) -> Option<NodeId>;
}

/// Follows the connector's handle reference through the source-id lookup.
pub struct HandleReference<'a> {
    entities: &'a Entities,
}

impl<'a> HandleReference<'a> {
    pub fn new(entities: &'a Entities) -> Self {
        Self { entities }
    }
}

impl EndpointStrategy for HandleReference<'_> {
    fn resolve(&self, connector: &Primitive, endpoint: Endpoint) -> Option<NodeId> {
        let handles = connector.handles();
        let source_id = match endpoint {
            Endpoint::From => handles.from(),
            Endpoint::To => handles.to(),
        }?;
        let node = self.entities.node_for_source(source_id.as_str());
        if node.is_none() {
            if let Some(area) = self.entities.area_for_source(source_id.as_str()) {
                trace!(
                    connector = connector.source_id().as_str(),
                    area = area.to_string();
                    "Handle attached to an area, not a node"
                );
            }
        }
        node
    }
}

/// Picks the node whose center is nearest to the connector's first point
/// (for `From`) or last point (for `To`).
///
/// Needs at least two points; every node is a candidate.
pub struct NearestPoint<'a> {
    nodes: &'a [Node],
}

impl<'a> NearestPoint<'a> {
    pub fn new(nodes: &'a [Node]) -> Self {
        Self { nodes }
    }
}

impl EndpointStrategy for NearestPoint<'_> {
    fn resolve(&self, connector: &Primitive, endpoint: Endpoint) -> Option<NodeId> {
        let points = connector.points();
        if points.len() < 2 {
            return None;
        }
        let point = match endpoint {
            Endpoint::From => points.first(),
            Endpoint::To => points.last(),
        }?;
        geometry::nearest(*point, self.nodes, |node| Some(node.center())).map(Node::id)
    }
}

/// Tries each strategy in turn and returns the first answer.
pub fn resolve_endpoint(
    strategies: &[&dyn EndpointStrategy],
    connector: &Primitive,
    endpoint: Endpoint,
) -> Option<NodeId> {
    strategies
        .iter()
        .find_map(|strategy| strategy.resolve(connector, endpoint))
}

/// Curvature of a connector by kind.
///
/// Straight and arc kinds report their curve distance (0 when absent); point
/// lists are measured with [`geometry::curvature`].
pub fn connector_curvature(connector: &Primitive) -> f64 {
    match connector.kind() {
        ShapeKind::PolyLine | ShapeKind::BezierLine => geometry::curvature(connector.points()),
        _ => connector.curve_distance().unwrap_or(0.0),
    }
}

/// Connection types keyed by (color, thickness), in creation order.
#[derive(Debug)]
pub struct ConnectionTypeTable {
    category: ConnectionCategory,
    default_color: Color,
    line_scale: f64,
    types: IndexMap<(Color, u32), ConnectionType>,
}

impl ConnectionTypeTable {
    pub fn new(category: ConnectionCategory, default_color: Color, line_scale: f64) -> Self {
        Self {
            category,
            default_color,
            line_scale,
            types: IndexMap::new(),
        }
    }

    /// The (color, thickness) key a connector falls under.
    ///
    /// Color comes from the line color, then the arc color, then the
    /// configured fallback.
    pub fn key_for(&self, connector: &Primitive) -> (Color, u32) {
        let color = connector
            .line_color()
            .or(connector.arc_color())
            .unwrap_or(&self.default_color)
            .clone();
        let thickness = thickness_from_line_width(connector.line_width(), self.line_scale);
        (color, thickness)
    }

    /// Returns the type id for `connector`, creating the type on first use.
    pub fn type_for(&mut self, connector: &Primitive) -> ConnectionTypeId {
        let key = self.key_for(connector);
        match self.types.entry(key) {
            Entry::Occupied(entry) => entry.get().id(),
            Entry::Vacant(entry) => {
                let id = ConnectionTypeId::from_index(entry.index());
                let (color, thickness) = entry.key().clone();
                let line_style = connector.line_style().unwrap_or_default();
                trace!(id = id.to_string(), color = color.as_str(), thickness; "New connection type");
                entry.insert(ConnectionType::new(
                    id,
                    self.category,
                    color,
                    thickness,
                    line_style,
                ));
                id
            }
        }
    }

    pub fn into_types(self) -> Vec<ConnectionType> {
        self.types.into_values().collect()
    }
}

/// Output of the connector pass.
#[derive(Debug, Default)]
pub struct ResolvedConnections {
    pub connections: Vec<Connection>,
    pub connection_types: Vec<ConnectionType>,
    pub dropped: usize,
}

/// Resolves every connector primitive against the classified nodes.
///
/// Connection ids follow encounter order. A connection type is only created
/// for connectors that survive endpoint resolution.
pub fn resolve_connectors(
    primitives: &[Primitive],
    entities: &Entities,
    types: ConnectionTypeTable,
) -> ResolvedConnections {
    let handles = HandleReference::new(entities);
    let nearest = NearestPoint::new(entities.nodes());
    let strategies: [&dyn EndpointStrategy; 2] = [&handles, &nearest];

    let mut types = types;
    let mut connections = Vec::new();
    let mut dropped = 0;

    for connector in primitives.iter().filter(|p| p.kind().is_connector()) {
        let source_id = connector.source_id().as_str();
        let from = resolve_endpoint(&strategies, connector, Endpoint::From);
        let to = resolve_endpoint(&strategies, connector, Endpoint::To);

        let (from_id, to_id) = match (from, to) {
            (Some(from_id), Some(to_id)) if from_id != to_id => (from_id, to_id),
            (Some(node_id), Some(_)) => {
                trace!(source_id, node = node_id.to_string(); "Connector dropped: self-loop");
                dropped += 1;
                continue;
            }
            _ => {
                trace!(source_id, from = from.is_some(), to = to.is_some(); "Connector dropped: unresolved endpoint");
                dropped += 1;
                continue;
            }
        };

        let type_id = types.type_for(connector);
        let id = ConnectionId::from_index(connections.len());
        connections.push(Connection::new(
            id,
            from_id,
            to_id,
            connector_curvature(connector),
            type_id,
        ));
    }

    ResolvedConnections {
        connections,
        connection_types: types.into_types(),
        dropped,
    }
}
