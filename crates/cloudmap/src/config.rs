//! Configuration types for Cloudmap imports.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from a
//! TOML file. Every field has a default, so an empty file is a valid
//! configuration.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining import and style settings.
//! - [`ImportConfig`] - Scale factors applied while reading the diagram.
//! - [`StyleConfig`] - Defaults for values the diagram does not carry.
//!
//! # Example
//!
//! ```
//! # use cloudmap::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.import().line_scale(), 20.0);
//! assert!(config.validate().is_ok());
//! ```

use serde::Deserialize;

use cloudmap_core::{color::Color, model::ConnectionCategory};

const DEFAULT_COORD_SCALE: f64 = 1.0;
const DEFAULT_LINE_SCALE: f64 = 20.0;
const DEFAULT_AREA_JITTER: f64 = 0.12;

/// Top-level application configuration.
///
/// Groups [`ImportConfig`] and [`StyleConfig`] into a single configuration
/// root.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Import configuration section.
    #[serde(default)]
    import: ImportConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    ///
    /// # Arguments
    ///
    /// * `import` - Scale factors for coordinates and line widths.
    /// * `style` - Fallback colors, category and jitter.
    pub fn new(import: ImportConfig, style: StyleConfig) -> Self {
        Self { import, style }
    }

    /// Returns the import configuration.
    pub fn import(&self) -> &ImportConfig {
        &self.import
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Replaces the coordinate scale.
    pub fn with_coord_scale(mut self, coord_scale: f64) -> Self {
        self.import.coord_scale = coord_scale;
        self
    }

    /// Replaces the line-width scale.
    pub fn with_line_scale(mut self, line_scale: f64) -> Self {
        self.import.line_scale = line_scale;
        self
    }

    /// Checks that the numeric settings are usable.
    ///
    /// # Errors
    ///
    /// Returns a message naming the first offending setting when a scale is
    /// not finite or the jitter is negative. Zero and negative scales are
    /// accepted: a negative coordinate scale mirrors the diagram.
    pub fn validate(&self) -> Result<(), String> {
        check_scale("import.coord_scale", self.import.coord_scale)?;
        check_scale("import.line_scale", self.import.line_scale)?;

        let jitter = self.style.area_jitter;
        if !jitter.is_finite() || jitter < 0.0 {
            return Err(format!(
                "style.area_jitter must be a finite number >= 0, got {jitter}"
            ));
        }
        Ok(())
    }
}

fn check_scale(name: &str, value: f64) -> Result<(), String> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(format!("{name} must be a finite number, got {value}"))
    }
}

/// Scale factors applied while importing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImportConfig {
    /// Multiplier for every coordinate and size in the diagram.
    coord_scale: f64,

    /// Multiplier turning raw line widths into thickness units.
    line_scale: f64,
}

impl ImportConfig {
    /// Creates a new [`ImportConfig`].
    ///
    /// # Arguments
    ///
    /// * `coord_scale` - Multiplier for coordinates and sizes.
    /// * `line_scale` - Multiplier for line widths.
    pub fn new(coord_scale: f64, line_scale: f64) -> Self {
        Self {
            coord_scale,
            line_scale,
        }
    }

    pub fn coord_scale(&self) -> f64 {
        self.coord_scale
    }

    pub fn line_scale(&self) -> f64 {
        self.line_scale
    }
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self::new(DEFAULT_COORD_SCALE, DEFAULT_LINE_SCALE)
    }
}

/// Defaults for the parts of the model a diagram does not describe.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleConfig {
    /// Color for connectors that carry no color of their own.
    connection_color: Color,

    /// Category given to every imported connection type.
    connection_category: ConnectionCategory,

    /// Display jitter written for every area.
    area_jitter: f64,
}

impl StyleConfig {
    /// Creates a new [`StyleConfig`].
    ///
    /// # Arguments
    ///
    /// * `connection_color` - Fallback connector color.
    /// * `connection_category` - Category for imported connection types.
    /// * `area_jitter` - Jitter written for every area.
    pub fn new(
        connection_color: Color,
        connection_category: ConnectionCategory,
        area_jitter: f64,
    ) -> Self {
        Self {
            connection_color,
            connection_category,
            area_jitter,
        }
    }

    pub fn connection_color(&self) -> &Color {
        &self.connection_color
    }

    pub fn connection_category(&self) -> ConnectionCategory {
        self.connection_category
    }

    pub fn area_jitter(&self) -> f64 {
        self.area_jitter
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self::new(
            Color::default(),
            ConnectionCategory::default(),
            DEFAULT_AREA_JITTER,
        )
    }
}
