//! The normalized network model produced by the resolution engine.
//!
//! The model holds four entity tables:
//!
//! - [`Node`]: an access point with a position, a name and an optional owning area.
//! - [`Area`]: a grouping region listing the nodes it contains.
//! - [`Connection`]: a directed link between two distinct nodes.
//! - [`ConnectionType`]: a style record shared by every connection with the
//!   same color and thickness.
//!
//! Entities refer to each other only through typed ids. Ids are 1-based and
//! numbered in the order the entities were created, which is the document
//! order of their source primitives.

use std::fmt;

use serde::Deserialize;

use crate::{
    color::Color,
    geometry::{Ellipse, Point},
    primitive::{LineStyle, SourceId},
};

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(usize);

        impl $name {
            /// Id of the entity stored at `index` (0-based) in its table.
            pub fn from_index(index: usize) -> Self {
                Self(index + 1)
            }

            /// Position of the entity in its table (0-based).
            pub fn index(self) -> usize {
                self.0 - 1
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "-{}"), self.0)
            }
        }
    };
}

entity_id!(
    /// Id of a [`Node`], rendered as `ap-N`.
    NodeId,
    "ap"
);
entity_id!(
    /// Id of an [`Area`], rendered as `area-N`.
    AreaId,
    "area"
);
entity_id!(
    /// Id of a [`Connection`], rendered as `conn-N`.
    ConnectionId,
    "conn"
);
entity_id!(
    /// Id of a [`ConnectionType`], rendered as `type-N`.
    ConnectionTypeId,
    "type"
);

/// A classified point of interest ("access point").
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    id: NodeId,
    source_id: SourceId,
    ellipse: Ellipse,
    name: String,
    area_id: Option<AreaId>,
}

impl Node {
    /// Creates a node. Surrounding whitespace of `name` is dropped; an empty
    /// result means the node is still unnamed.
    pub fn new(id: NodeId, source_id: SourceId, ellipse: Ellipse, name: &str) -> Self {
        Self {
            id,
            source_id,
            ellipse,
            name: name.trim().to_string(),
            area_id: None,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn source_id(&self) -> &SourceId {
        &self.source_id
    }

    pub fn ellipse(&self) -> Ellipse {
        self.ellipse
    }

    pub fn center(&self) -> Point {
        self.ellipse.center()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true once a non-blank name has been assigned.
    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn area_id(&self) -> Option<AreaId> {
        self.area_id
    }

    /// Records the owning area.
    ///
    /// Returns false and leaves the node untouched if an area was already set.
    pub fn set_area(&mut self, area_id: AreaId) -> bool {
        if self.area_id.is_some() {
            return false;
        }
        self.area_id = Some(area_id);
        true
    }
}

/// A classified grouping region.
#[derive(Debug, Clone, PartialEq)]
pub struct Area {
    id: AreaId,
    source_id: SourceId,
    ellipse: Ellipse,
    name: String,
    node_ids: Vec<NodeId>,
}

impl Area {
    /// Creates an area with no contained nodes. Surrounding whitespace of
    /// `name` is dropped; an empty result means the area is still unnamed.
    pub fn new(id: AreaId, source_id: SourceId, ellipse: Ellipse, name: &str) -> Self {
        Self {
            id,
            source_id,
            ellipse,
            name: name.trim().to_string(),
            node_ids: Vec::new(),
        }
    }

    pub fn id(&self) -> AreaId {
        self.id
    }

    pub fn source_id(&self) -> &SourceId {
        &self.source_id
    }

    pub fn ellipse(&self) -> Ellipse {
        self.ellipse
    }

    pub fn center(&self) -> Point {
        self.ellipse.center()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true once a non-blank name has been assigned.
    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Contained nodes in the order they were added.
    pub fn node_ids(&self) -> &[NodeId] {
        &self.node_ids
    }

    /// Appends a node to the contained list, ignoring duplicates.
    pub fn add_node(&mut self, node_id: NodeId) {
        if !self.node_ids.contains(&node_id) {
            self.node_ids.push(node_id);
        }
    }
}

/// The kind of physical link a connection type stands for.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionCategory {
    Wireless,
    /// Copper cabling. The spelling is part of the model format.
    #[default]
    Metalic,
    Fiber,
}

impl ConnectionCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            ConnectionCategory::Wireless => "wireless",
            ConnectionCategory::Metalic => "metalic",
            ConnectionCategory::Fiber => "fiber",
        }
    }
}

impl fmt::Display for ConnectionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A deduplicated connection style.
///
/// `(color, thickness)` identifies a connection type: no two records in one
/// model share that pair.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionType {
    id: ConnectionTypeId,
    name: String,
    category: ConnectionCategory,
    speed: String,
    color: Color,
    thickness: u32,
    line_style: LineStyle,
}

impl ConnectionType {
    /// Creates a connection type named after its color and thickness.
    pub fn new(
        id: ConnectionTypeId,
        category: ConnectionCategory,
        color: Color,
        thickness: u32,
        line_style: LineStyle,
    ) -> Self {
        Self {
            id,
            name: format!("Imported {color} {thickness}px"),
            category,
            speed: String::new(),
            color,
            thickness,
            line_style,
        }
    }

    pub fn id(&self) -> ConnectionTypeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> ConnectionCategory {
        self.category
    }

    pub fn speed(&self) -> &str {
        &self.speed
    }

    pub fn color(&self) -> &Color {
        &self.color
    }

    pub fn thickness(&self) -> u32 {
        self.thickness
    }

    pub fn line_style(&self) -> LineStyle {
        self.line_style
    }
}

/// A resolved link between two distinct nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    id: ConnectionId,
    from_id: NodeId,
    to_id: NodeId,
    curvature: f64,
    description: String,
    type_id: ConnectionTypeId,
}

impl Connection {
    pub fn new(
        id: ConnectionId,
        from_id: NodeId,
        to_id: NodeId,
        curvature: f64,
        type_id: ConnectionTypeId,
    ) -> Self {
        Self {
            id,
            from_id,
            to_id,
            curvature,
            description: String::new(),
            type_id,
        }
    }

    pub fn id(&self) -> ConnectionId {
        self.id
    }

    pub fn from_id(&self) -> NodeId {
        self.from_id
    }

    pub fn to_id(&self) -> NodeId {
        self.to_id
    }

    /// Signed bulge of the connector; 0 means straight.
    pub fn curvature(&self) -> f64 {
        self.curvature
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn type_id(&self) -> ConnectionTypeId {
        self.type_id
    }
}

/// The assembled network model.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Model {
    connection_types: Vec<ConnectionType>,
    nodes: Vec<Node>,
    areas: Vec<Area>,
    connections: Vec<Connection>,
}

impl Model {
    pub fn new(
        connection_types: Vec<ConnectionType>,
        nodes: Vec<Node>,
        areas: Vec<Area>,
        connections: Vec<Connection>,
    ) -> Self {
        Self {
            connection_types,
            nodes,
            areas,
            connections,
        }
    }

    pub fn connection_types(&self) -> &[ConnectionType] {
        &self.connection_types
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn areas(&self) -> &[Area] {
        &self.areas
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    pub fn area(&self, id: AreaId) -> Option<&Area> {
        self.areas.get(id.index())
    }

    pub fn connection_type(&self, id: ConnectionTypeId) -> Option<&ConnectionType> {
        self.connection_types.get(id.index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ellipse() -> Ellipse {
        Ellipse::new(Point::new(0.0, 0.0), 1.0, 1.0)
    }

    #[test]
    fn test_ids_display_with_prefix() {
        assert_eq!(NodeId::from_index(0).to_string(), "ap-1");
        assert_eq!(AreaId::from_index(2).to_string(), "area-3");
        assert_eq!(ConnectionId::from_index(9).to_string(), "conn-10");
        assert_eq!(ConnectionTypeId::from_index(0).to_string(), "type-1");
        assert_eq!(NodeId::from_index(4).index(), 4);
    }

    #[test]
    fn test_node_name_is_trimmed() {
        let node = Node::new(NodeId::from_index(0), "O1".into(), ellipse(), "  Router  ");
        assert_eq!(node.name(), "Router");
        assert!(node.has_name());

        let blank = Node::new(NodeId::from_index(1), "O2".into(), ellipse(), " \n ");
        assert!(!blank.has_name());
    }

    #[test]
    fn test_node_area_set_once() {
        let mut node = Node::new(NodeId::from_index(0), "O1".into(), ellipse(), "");
        assert!(node.set_area(AreaId::from_index(1)));
        assert!(!node.set_area(AreaId::from_index(0)));
        assert_eq!(node.area_id(), Some(AreaId::from_index(1)));
    }

    #[test]
    fn test_area_add_node_ignores_duplicates() {
        let mut area = Area::new(AreaId::from_index(0), "O9".into(), ellipse(), "North");
        area.add_node(NodeId::from_index(2));
        area.add_node(NodeId::from_index(0));
        area.add_node(NodeId::from_index(2));
        assert_eq!(
            area.node_ids(),
            &[NodeId::from_index(2), NodeId::from_index(0)]
        );
    }

    #[test]
    fn test_connection_type_name() {
        let ty = ConnectionType::new(
            ConnectionTypeId::from_index(0),
            ConnectionCategory::default(),
            Color::new("#112233"),
            4,
            LineStyle::Solid,
        );
        assert_eq!(ty.name(), "Imported #112233 4px");
        assert_eq!(ty.category().as_str(), "metalic");
        assert_eq!(ty.speed(), "");
    }

    #[test]
    fn test_model_lookups() {
        let node = Node::new(NodeId::from_index(0), "O1".into(), ellipse(), "Gate");
        let model = Model::new(Vec::new(), vec![node], Vec::new(), Vec::new());
        assert_eq!(model.node(NodeId::from_index(0)).map(Node::name), Some("Gate"));
        assert!(model.node(NodeId::from_index(1)).is_none());
        assert!(model.area(AreaId::from_index(0)).is_none());
    }
}
