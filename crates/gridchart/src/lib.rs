//! Gridchart - Diagrams as code on a fixed grid.
//!
//! Nodes sit on (column, row) grid coordinates and are connected by edges
//! whose endpoints are spread along node borders. Clusters group elements
//! into labeled panels. A [`Chart`] owns every element and resolves the
//! geometry; the [`export`] module renders it to SVG.
//!
//! Charts can be declared in code or loaded from a TOML
//! [diagram document](document).
//!
//! # Examples
//!
//! ```rust
//! use gridchart::{Chart, edge::{EdgeLayout, EdgeSpec}, grid::GridConfig, node::Node};
//!
//! let mut chart = Chart::new(GridConfig::default())?;
//! let api = chart.add_node(Node::new(0.0, 0.0).with_text("API"));
//! let db = chart.add_node(Node::new(0.0, 2.0).with_text("Database"));
//! chart.add_edge(api, db, EdgeSpec::new("->").with_text("reads"))?;
//! chart.add_edge(db, api, EdgeSpec::new("-->").with_layout(EdgeLayout::RightRight))?;
//!
//! let svg = chart.render_svg(&Default::default())?;
//! assert!(svg.contains("<svg"));
//! # Ok::<(), gridchart::ChartError>(())
//! ```

pub mod allocator;
pub mod cluster;
pub mod config;
pub mod document;
pub mod edge;
pub mod element;
pub mod export;
pub mod grid;
pub mod node;

mod chart;
mod error;

pub use gridchart_core::{anchor, color, draw, geometry};

pub use chart::Chart;
pub use error::ChartError;

use std::path::Path;

use log::{debug, info};

use config::AppConfig;

/// Builder for loading and rendering diagram documents.
///
/// # Examples
///
/// ```rust
/// use gridchart::{DiagramBuilder, config::AppConfig};
///
/// let source = r#"
///     [[node]]
///     id = "app"
///     col = 0
///     row = 0
///     text = "App"
/// "#;
///
/// let builder = DiagramBuilder::new(AppConfig::default());
/// let chart = builder.build(source)?;
/// let svg = builder.render_svg(&chart)?;
/// assert!(svg.contains("App"));
/// # Ok::<(), gridchart::ChartError>(())
/// ```
#[derive(Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Parse a TOML diagram document into a chart.
    ///
    /// The document's `[grid]` section, if any, takes precedence over the
    /// configured grid.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::Document`] for malformed documents or unknown
    /// ids, [`ChartError::Parse`] for malformed anchor strings and
    /// [`ChartError::Configuration`] for invalid grids or edges.
    pub fn build(&self, source: &str) -> Result<Chart, ChartError> {
        let chart = document::load(source, self.config.grid())?;

        debug!(
            nodes = chart.nodes().count(),
            edges = chart.edges().count(),
            clusters = chart.clusters().count();
            "Diagram built successfully"
        );
        Ok(chart)
    }

    /// Render a chart to an SVG string with the configured style.
    pub fn render_svg(&self, chart: &Chart) -> Result<String, ChartError> {
        let svg = chart.render_svg(self.config.style())?;
        info!(bytes = svg.len(); "SVG rendered successfully");
        Ok(svg)
    }

    /// Write a chart to an SVG file with the configured style.
    pub fn export_svg(&self, chart: Chart, path: impl AsRef<Path>) -> Result<(), ChartError> {
        chart.export_svg(self.config.style(), path)
    }
}
