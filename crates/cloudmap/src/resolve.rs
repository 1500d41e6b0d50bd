//! The resolution pipeline.
//!
//! Turns the ordered primitive list of one diagram into a [`Model`]. Passes
//! run in a fixed order and each one only adds to what the previous passes
//! produced:
//!
//! ```text
//! Primitives
//!     ↓ scale coordinates
//!     ↓ classify         (nodes, areas, source-id lookups)
//!     ↓ labels           (names, generated fallbacks)
//!     ↓ hierarchy        (node → smallest containing area)
//!     ↓ connectors       (connections, deduplicated connection types)
//! Model
//! ```
//!
//! Resolution never fails. Incomplete input degrades to generated names,
//! unassigned nodes or dropped connectors.

pub mod classify;
pub mod connectors;
pub mod hierarchy;
pub mod labels;

use std::fmt;

use log::{debug, trace};

use cloudmap_core::{
    color::Color,
    model::{ConnectionCategory, Model},
    primitive::Primitive,
};

use crate::config::AppConfig;

use classify::Entities;
use connectors::ConnectionTypeTable;

/// The numeric and style settings the pipeline reads.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolveOptions {
    coord_scale: f64,
    line_scale: f64,
    connection_color: Color,
    connection_category: ConnectionCategory,
}

impl ResolveOptions {
    pub fn new(
        coord_scale: f64,
        line_scale: f64,
        connection_color: Color,
        connection_category: ConnectionCategory,
    ) -> Self {
        Self {
            coord_scale,
            line_scale,
            connection_color,
            connection_category,
        }
    }

    /// Multiplier applied to every coordinate and size before classification.
    pub fn coord_scale(&self) -> f64 {
        self.coord_scale
    }

    /// Multiplier applied to raw line widths when computing thickness.
    pub fn line_scale(&self) -> f64 {
        self.line_scale
    }

    /// Color used for connectors that carry neither a line nor an arc color.
    pub fn connection_color(&self) -> &Color {
        &self.connection_color
    }

    pub fn connection_category(&self) -> ConnectionCategory {
        self.connection_category
    }
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self::from(&AppConfig::default())
    }
}

impl From<&AppConfig> for ResolveOptions {
    fn from(config: &AppConfig) -> Self {
        Self::new(
            config.import().coord_scale(),
            config.import().line_scale(),
            config.style().connection_color().clone(),
            config.style().connection_category(),
        )
    }
}

/// Counts describing one resolution run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveSummary {
    pub nodes: usize,
    pub areas: usize,
    pub connections: usize,
    pub connection_types: usize,
    pub dropped_connectors: usize,
    pub unmatched_labels: usize,
}

impl fmt::Display for ResolveSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} access points, {} areas, {} connections, {} connection types",
            self.nodes, self.areas, self.connections, self.connection_types
        )?;
        if self.dropped_connectors > 0 {
            write!(f, ", {} connectors dropped", self.dropped_connectors)?;
        }
        if self.unmatched_labels > 0 {
            write!(f, ", {} labels unmatched", self.unmatched_labels)?;
        }
        Ok(())
    }
}

/// A resolved model together with its run summary.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub model: Model,
    pub summary: ResolveSummary,
}

/// Runs every pass over `primitives` and assembles the model.
pub fn resolve(primitives: &[Primitive], options: &ResolveOptions) -> Resolution {
    let scaled: Vec<Primitive> = primitives
        .iter()
        .map(|primitive| primitive.scaled(options.coord_scale))
        .collect();
    trace!(coord_scale = options.coord_scale; "Coordinates scaled");

    let mut entities = Entities::classify_all(&scaled);
    debug!(
        nodes = entities.nodes().len(),
        areas = entities.areas().len();
        "Shapes classified"
    );

    let mut text_labels = labels::collect_labels(&scaled);
    let (nodes, areas) = entities.tables_mut();
    let unmatched_labels = labels::resolve_labels(&mut text_labels, nodes, areas);
    debug!(labels = text_labels.len(), unmatched = unmatched_labels; "Labels resolved");

    let placed = hierarchy::resolve_hierarchy(nodes, areas);
    debug!(placed; "Hierarchy resolved");

    let types = ConnectionTypeTable::new(
        options.connection_category,
        options.connection_color.clone(),
        options.line_scale,
    );
    let resolved = connectors::resolve_connectors(&scaled, &entities, types);
    debug!(
        connections = resolved.connections.len(),
        dropped = resolved.dropped;
        "Connectors resolved"
    );

    let (nodes, areas) = entities.into_tables();
    let summary = ResolveSummary {
        nodes: nodes.len(),
        areas: areas.len(),
        connections: resolved.connections.len(),
        connection_types: resolved.connection_types.len(),
        dropped_connectors: resolved.dropped,
        unmatched_labels,
    };
    let model = Model::new(resolved.connection_types, nodes, areas, resolved.connections);

    Resolution { model, summary }
}
