use std::fmt;

use serde::{Deserialize, Serialize};

/// Color written when a connector carries neither a line nor an arc color.
pub const DEFAULT_CONNECTION_COLOR: &str = "#3f4a3a";

/// The literal spellings of white that mark a cloud as a grouping area.
const WHITE_FORMS: [&str; 3] = ["#ffffff", "#fff", "#ffffffff"];

/// A color value as written in the source diagram.
///
/// Colors are kept exactly as written. They are part of the connection-type
/// dedup key and are written back unchanged.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    /// Create a new `Color` from a color string such as `"#ff0000"`.
    pub fn new(value: &str) -> Self {
        Self(value.to_string())
    }

    /// Returns the color string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if this is exactly white, compared case-insensitively
    /// against `#ffffff`, `#fff` and `#ffffffff` after trimming.
    pub fn is_white(&self) -> bool {
        let value = self.0.trim();
        WHITE_FORMS
            .iter()
            .any(|form| value.eq_ignore_ascii_case(form))
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new(DEFAULT_CONNECTION_COLOR)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Color {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
