//! Grid spacing and the grid-to-pixel transform.
//!
//! Every node and waypoint sits on a (column, row) grid coordinate, which may
//! be fractional. [`GridConfig`] turns those coordinates into pixels:
//!
//! ```text
//! pixel_x = col * (node_width + horizontal_node_space)
//! pixel_y = row * (node_height + vertical_node_space)
//! ```
//!
//! # Example
//!
//! ```
//! # use gridchart::grid::GridConfig;
//! let grid = GridConfig::default();
//! let center = grid.to_pixel(2.0, 1.0);
//! assert_eq!(center.x(), 400.0);
//! assert_eq!(center.y(), 70.0);
//! ```

use serde::Deserialize;

use gridchart_core::geometry::{Insets, Point, Size};

use crate::error::ChartError;

/// How edges without an explicit position or rank are ordered along a
/// shared border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeOrdering {
    /// Registration order on the border
    #[default]
    Insertion,
    /// Direction of the opposite endpoint, so that edges fan out without
    /// crossing near the border
    Angle,
}

/// Spacing configuration shared by every element of a chart.
///
/// Immutable once a [`Chart`](crate::Chart) has been created from it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    font_size: f32,
    node_width: f32,
    node_height: f32,
    horizontal_node_space: f32,
    vertical_node_space: f32,
    cluster_margin: f32,
    edge_ordering: EdgeOrdering,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            font_size: 20.0,
            node_width: 150.0,
            node_height: 40.0,
            horizontal_node_space: 50.0,
            vertical_node_space: 30.0,
            cluster_margin: 15.0,
            edge_ordering: EdgeOrdering::default(),
        }
    }
}

impl GridConfig {
    /// Creates a grid configuration with insertion ordering.
    pub fn new(
        font_size: f32,
        node_width: f32,
        node_height: f32,
        horizontal_node_space: f32,
        vertical_node_space: f32,
        cluster_margin: f32,
    ) -> Self {
        Self {
            font_size,
            node_width,
            node_height,
            horizontal_node_space,
            vertical_node_space,
            cluster_margin,
            edge_ordering: EdgeOrdering::default(),
        }
    }

    pub fn with_edge_ordering(mut self, edge_ordering: EdgeOrdering) -> Self {
        self.edge_ordering = edge_ordering;
        self
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn node_width(&self) -> f32 {
        self.node_width
    }

    pub fn node_height(&self) -> f32 {
        self.node_height
    }

    pub fn horizontal_node_space(&self) -> f32 {
        self.horizontal_node_space
    }

    pub fn vertical_node_space(&self) -> f32 {
        self.vertical_node_space
    }

    pub fn cluster_margin(&self) -> f32 {
        self.cluster_margin
    }

    pub fn edge_ordering(&self) -> EdgeOrdering {
        self.edge_ordering
    }

    /// Pixel distance between two adjacent columns
    pub fn horizontal_step(&self) -> f32 {
        self.node_width + self.horizontal_node_space
    }

    /// Pixel distance between two adjacent rows
    pub fn vertical_step(&self) -> f32 {
        self.node_height + self.vertical_node_space
    }

    /// Pixel position of a grid coordinate.
    pub fn to_pixel(&self, col: f32, row: f32) -> Point {
        Point::new(col * self.horizontal_step(), row * self.vertical_step())
    }

    /// Footprint of a node
    pub fn node_size(&self) -> Size {
        Size::new(self.node_width, self.node_height)
    }

    /// Margin added around the whole chart
    pub fn chart_margin(&self) -> Insets {
        Insets::symmetric(self.horizontal_node_space, self.vertical_node_space)
    }

    /// Checks that every spacing value is a finite, strictly positive number.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::Configuration`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ChartError> {
        let fields = [
            ("font_size", self.font_size),
            ("node_width", self.node_width),
            ("node_height", self.node_height),
            ("horizontal_node_space", self.horizontal_node_space),
            ("vertical_node_space", self.vertical_node_space),
            ("cluster_margin", self.cluster_margin),
        ];

        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::Configuration(format!(
                    "grid `{name}` must be a positive number, got {value}"
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_default_steps() {
        let grid = GridConfig::default();
        assert_approx_eq!(f32, grid.horizontal_step(), 200.0);
        assert_approx_eq!(f32, grid.vertical_step(), 70.0);
        assert_eq!(grid.edge_ordering(), EdgeOrdering::Insertion);
    }

    #[test]
    fn test_to_pixel_fractional() {
        let grid = GridConfig::default();
        let point = grid.to_pixel(0.5, 2.5);
        assert_approx_eq!(f32, point.x(), 100.0);
        assert_approx_eq!(f32, point.y(), 175.0);
    }

    #[test]
    fn test_validate_rejects_non_positive() {
        assert!(GridConfig::default().validate().is_ok());

        let grid = GridConfig::new(20.0, 0.0, 40.0, 50.0, 30.0, 15.0);
        let err = grid.validate().unwrap_err();
        assert!(err.to_string().contains("node_width"));

        let grid = GridConfig::new(20.0, 150.0, 40.0, f32::NAN, 30.0, 15.0);
        assert!(grid.validate().is_err());

        let grid = GridConfig::new(20.0, 150.0, 40.0, 50.0, 30.0, -1.0);
        assert!(grid.validate().is_err());
    }

    #[test]
    fn test_deserialize_partial() {
        let grid: GridConfig = toml::from_str(
            r#"
            node_width = 120
            edge_ordering = "angle"
            "#,
        )
        .unwrap();

        assert_approx_eq!(f32, grid.node_width(), 120.0);
        assert_approx_eq!(f32, grid.node_height(), 40.0);
        assert_eq!(grid.edge_ordering(), EdgeOrdering::Angle);
    }
}
