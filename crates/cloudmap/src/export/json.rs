//! The Cloudmap JSON model writer.
//!
//! The document has four top-level arrays in a fixed order:
//! `connectionTypes`, `accessPoints`, `areas` and `connections`. Field names
//! are camelCase and entity ids are written as `ap-N`, `area-N`, `conn-N`
//! and `type-N`.

use serde::Serialize;

use cloudmap_core::model::{Area, Connection, ConnectionType, Model, Node};

use super::{Error, Exporter};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Document<'a> {
    connection_types: Vec<ConnectionTypeRecord<'a>>,
    access_points: Vec<AccessPointRecord<'a>>,
    areas: Vec<AreaRecord<'a>>,
    connections: Vec<ConnectionRecord<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ConnectionTypeRecord<'a> {
    id: String,
    name: &'a str,
    #[serde(rename = "type")]
    category: &'static str,
    speed: &'a str,
    color: &'a str,
    thickness: u32,
    line_style: &'static str,
}

impl<'a> From<&'a ConnectionType> for ConnectionTypeRecord<'a> {
    fn from(connection_type: &'a ConnectionType) -> Self {
        Self {
            id: connection_type.id().to_string(),
            name: connection_type.name(),
            category: connection_type.category().as_str(),
            speed: connection_type.speed(),
            color: connection_type.color().as_str(),
            thickness: connection_type.thickness(),
            line_style: connection_type.line_style().as_str(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AccessPointRecord<'a> {
    id: String,
    name: &'a str,
    x: f64,
    y: f64,
    area_id: Option<String>,
    routers: Vec<&'a str>,
}

impl<'a> From<&'a Node> for AccessPointRecord<'a> {
    fn from(node: &'a Node) -> Self {
        Self {
            id: node.id().to_string(),
            name: node.name(),
            x: node.center().x(),
            y: node.center().y(),
            area_id: node.area_id().map(|id| id.to_string()),
            routers: Vec::new(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AreaRecord<'a> {
    id: String,
    name: &'a str,
    x: f64,
    y: f64,
    rx: f64,
    ry: f64,
    jitter: f64,
    point_ids: Vec<String>,
}

impl<'a> AreaRecord<'a> {
    fn new(area: &'a Area, jitter: f64) -> Self {
        let ellipse = area.ellipse();
        Self {
            id: area.id().to_string(),
            name: area.name(),
            x: ellipse.center().x(),
            y: ellipse.center().y(),
            rx: ellipse.rx(),
            ry: ellipse.ry(),
            jitter,
            point_ids: area.node_ids().iter().map(ToString::to_string).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ConnectionRecord<'a> {
    id: String,
    from_id: String,
    to_id: String,
    curvature: f64,
    description: &'a str,
    type_id: String,
}

impl<'a> From<&'a Connection> for ConnectionRecord<'a> {
    fn from(connection: &'a Connection) -> Self {
        Self {
            id: connection.id().to_string(),
            from_id: connection.from_id().to_string(),
            to_id: connection.to_id().to_string(),
            curvature: connection.curvature(),
            description: connection.description(),
            type_id: connection.type_id().to_string(),
        }
    }
}

/// Writes a [`Model`] as pretty-printed Cloudmap JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonExporter {
    jitter: f64,
}

impl JsonExporter {
    /// Creates an exporter that writes `jitter` for every area.
    pub fn new(jitter: f64) -> Self {
        Self { jitter }
    }
}

impl Exporter for JsonExporter {
    fn export_model(&self, model: &Model) -> Result<String, Error> {
        let document = Document {
            connection_types: model.connection_types().iter().map(Into::into).collect(),
            access_points: model.nodes().iter().map(Into::into).collect(),
            areas: model
                .areas()
                .iter()
                .map(|area| AreaRecord::new(area, self.jitter))
                .collect(),
            connections: model.connections().iter().map(Into::into).collect(),
        };
        Ok(serde_json::to_string_pretty(&document)?)
    }
}
