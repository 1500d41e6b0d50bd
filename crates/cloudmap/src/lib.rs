//! Cloudmap - resolve Dia network diagrams into an access-point model.
//!
//! A diagram drawn with clouds, ellipses, free text and connector lines is
//! read into primitives, resolved into access points, areas, connections and
//! connection types, and written out as the Cloudmap JSON model.

pub mod config;
pub mod export;
pub mod resolve;

mod error;

pub use cloudmap_core::{color, geometry, model, primitive};

pub use error::CloudmapError;

use log::{debug, info, trace};

use cloudmap_core::{model::Model, primitive::Primitive};

use config::AppConfig;
use export::{Exporter, json::JsonExporter};
use resolve::{Resolution, ResolveOptions};

/// Builder for importing Dia diagrams.
///
/// This provides an API for processing diagrams through parsing,
/// resolution and export stages.
///
/// # Examples
///
/// ```rust
/// use cloudmap::{ImportBuilder, config::AppConfig};
///
/// let source = r#"<dia:diagram xmlns:dia="http://www.lysator.liu.se/~alla/dia/"/>"#;
///
/// // With custom config
/// let config = AppConfig::default().with_coord_scale(10.0);
/// let builder = ImportBuilder::new(config);
///
/// // Parse and resolve into the model
/// let model = builder.import(source)
///     .expect("Failed to import");
///
/// // Render the model as JSON
/// let json = builder.render_json(&model)
///     .expect("Failed to render");
///
/// // Or use default config
/// let builder = ImportBuilder::default();
/// ```
#[derive(Debug, Default)]
pub struct ImportBuilder {
    config: AppConfig,
}

impl ImportBuilder {
    /// Create a new import builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including scale and style settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this builder runs with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse a Dia document into primitives.
    ///
    /// # Arguments
    ///
    /// * `source` - The uncompressed Dia XML text
    ///
    /// # Errors
    ///
    /// Returns `CloudmapError::Parse` if the text is not a readable Dia
    /// document.
    pub fn parse(&self, source: &str) -> Result<Vec<Primitive>, CloudmapError> {
        info!("Parsing diagram");

        let primitives = cloudmap_parser::parse(source)
            .map_err(|err| CloudmapError::new_parse_error(err, source))?;

        debug!(primitives = primitives.len(); "Diagram parsed successfully");
        Ok(primitives)
    }

    /// Parse raw file bytes into primitives.
    ///
    /// Compressed and non-UTF-8 input is rejected with a diagnostic. The
    /// error carries the bytes decoded lossily so diagnostics can still point
    /// into them.
    ///
    /// # Errors
    ///
    /// Returns `CloudmapError::Parse` if the bytes are not a readable Dia
    /// document.
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<Vec<Primitive>, CloudmapError> {
        info!(bytes = bytes.len(); "Parsing diagram");

        let primitives = cloudmap_parser::parse_bytes(bytes).map_err(|err| {
            CloudmapError::new_parse_error(err, String::from_utf8_lossy(bytes))
        })?;

        debug!(primitives = primitives.len(); "Diagram parsed successfully");
        Ok(primitives)
    }

    /// Resolve primitives into the network model.
    ///
    /// Resolution cannot fail: incomplete shapes are skipped, unnamed
    /// entities get generated names and connectors that cannot be tied to
    /// two distinct access points are dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cloudmap::{
    ///     ImportBuilder,
    ///     geometry::{Point, Size},
    ///     primitive::{Primitive, ShapeKind},
    /// };
    ///
    /// let primitives = vec![
    ///     Primitive::new(ShapeKind::Ellipse, "O0")
    ///         .with_corner(Point::new(0.0, 0.0))
    ///         .with_size(Size::new(4.0, 4.0)),
    /// ];
    ///
    /// let model = ImportBuilder::default().resolve(&primitives);
    /// assert_eq!(model.nodes()[0].name(), "AP-01");
    /// ```
    pub fn resolve(&self, primitives: &[Primitive]) -> Model {
        let Resolution { model, summary } =
            resolve::resolve(primitives, &ResolveOptions::from(&self.config));

        info!(
            access_points = summary.nodes,
            areas = summary.areas,
            connections = summary.connections,
            connection_types = summary.connection_types,
            dropped_connectors = summary.dropped_connectors,
            unmatched_labels = summary.unmatched_labels;
            "Diagram resolved"
        );
        trace!(model:?; "Resolved model");

        model
    }

    /// Parse and resolve a Dia document in one step.
    ///
    /// # Errors
    ///
    /// Returns `CloudmapError::Parse` if the document cannot be read.
    pub fn import(&self, source: &str) -> Result<Model, CloudmapError> {
        let primitives = self.parse(source)?;
        Ok(self.resolve(&primitives))
    }

    /// Render a model as pretty-printed Cloudmap JSON.
    ///
    /// The returned text has no trailing newline.
    ///
    /// # Errors
    ///
    /// Returns `CloudmapError::Export` if serialization fails.
    pub fn render_json(&self, model: &Model) -> Result<String, CloudmapError> {
        let exporter = JsonExporter::new(self.config.style().area_jitter());
        let json = exporter.export_model(model)?;

        debug!(bytes = json.len(); "Model rendered");
        Ok(json)
    }
}
