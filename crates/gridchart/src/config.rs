//! Configuration types for chart layout and rendering.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from a
//! TOML configuration file; every field is optional and falls back to its
//! default.
//!
//! - [`AppConfig`] - Top-level configuration combining grid and style settings.
//! - [`GridConfig`] - Spacing of the layout grid, see [`crate::grid`].
//! - [`StyleConfig`] - Visual options of the SVG output.
//!
//! # Example
//!
//! ```
//! # use gridchart::config::AppConfig;
//! let config: AppConfig = toml::from_str(
//!     r##"
//!     [grid]
//!     node_width = 120
//!
//!     [style]
//!     background_color = "#f8f8f8"
//!     "##,
//! )
//! .unwrap();
//!
//! assert_eq!(config.grid().node_width(), 120.0);
//! assert!(config.style().background_color().unwrap().is_some());
//! ```

use serde::Deserialize;

use gridchart_core::color::Color;

use crate::grid::GridConfig;

/// Top-level configuration combining grid and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Grid configuration section.
    #[serde(default)]
    grid: GridConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified grid and style configurations.
    pub fn new(grid: GridConfig, style: StyleConfig) -> Self {
        Self { grid, style }
    }

    /// Returns the grid configuration.
    pub fn grid(&self) -> &GridConfig {
        &self.grid
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Visual styling configuration for rendered charts.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Canvas background as a color string; white when unset.
    background_color: Option<String>,

    /// Font family of every label.
    font_family: String,

    /// Stroke width of edges and outlines, in pixels.
    stroke_width: f32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_color: None,
            font_family: "Arial".to_string(),
            stroke_width: 2.0,
        }
    }
}

impl StyleConfig {
    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    pub fn with_font_family(mut self, font_family: impl Into<String>) -> Self {
        self.font_family = font_family.into();
        self
    }

    pub fn with_stroke_width(mut self, stroke_width: f32) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_defaults() {
        let style = StyleConfig::default();
        assert_eq!(style.background_color(), Ok(None));
        assert_eq!(style.font_family(), "Arial");
        assert_eq!(style.stroke_width(), 2.0);
    }

    #[test]
    fn test_invalid_background_color() {
        let style = StyleConfig::default().with_background_color("nope");
        let err = style.background_color().unwrap_err();
        assert!(err.contains("Invalid background color"));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.grid(), &GridConfig::default());
        assert_eq!(config.style(), &StyleConfig::default());
    }

    #[test]
    fn test_partial_style_section() {
        let config: AppConfig = toml::from_str(
            r#"
            [style]
            font_family = "Helvetica"
            "#,
        )
        .unwrap();

        assert_eq!(config.style().font_family(), "Helvetica");
        assert_eq!(config.style().stroke_width(), 2.0);
    }

    #[test]
    fn test_unknown_edge_ordering_is_rejected() {
        let result: Result<AppConfig, _> = toml::from_str(
            r#"
            [grid]
            edge_ordering = "random"
            "#,
        );
        assert!(result.is_err());
    }
}
