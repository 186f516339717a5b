//! TOML diagram documents.
//!
//! A document declares a chart as four arrays of tables. Entries may carry
//! an `id`; edges reference their endpoints and clusters their children by
//! id. Sections are processed in the order nodes, points, edges, clusters,
//! and clusters in file order, so a cluster can only reference clusters
//! declared before it.
//!
//! ```toml
//! [grid]              # optional, overrides the configured grid
//! node_width = 120
//!
//! [[node]]
//! id = "api"
//! col = 0
//! row = 0
//! text = "API"
//! shape = "rounded"
//!
//! [[node]]
//! id = "db"
//! col = 0
//! row = 2
//! text = "Database"
//! fill = "#bcd7ff"
//!
//! [[point]]
//! id = "corner"
//! col = 2
//! row = 1
//!
//! [[edge]]
//! from = "api"
//! to = "db"
//! anchor = "b->t"
//! text = "reads"
//! layout = "top-bottom"
//!
//! [[cluster]]
//! children = ["api", "db"]
//! text = "Backend"
//! rounded = true
//! ```

use std::str::FromStr;

use indexmap::IndexMap;
use log::{debug, info};
use serde::Deserialize;

use gridchart_core::color::Color;

use crate::{
    Chart, ChartError,
    cluster::Cluster,
    edge::{EdgeLayout, EdgeSpec},
    element::{ElementId, Endpoint},
    grid::GridConfig,
    node::{Node, NodeShape, Waypoint},
};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct NodeEntry {
    id: Option<String>,
    col: f32,
    row: f32,
    #[serde(default)]
    text: String,
    fill: Option<Color>,
    #[serde(default)]
    shape: NodeShape,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct PointEntry {
    id: Option<String>,
    col: f32,
    row: f32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct EdgeEntry {
    id: Option<String>,
    from: String,
    to: String,
    #[serde(default = "default_anchor")]
    anchor: String,
    #[serde(default)]
    text: String,
    color: Option<Color>,
    #[serde(default)]
    layout: EdgeLayout,
    from_order: Option<f32>,
    to_order: Option<f32>,
}

fn default_anchor() -> String {
    "-".to_string()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct ClusterEntry {
    id: Option<String>,
    children: Vec<String>,
    #[serde(default)]
    text: String,
    fill: Option<Color>,
    #[serde(default)]
    rounded: bool,
}

/// A parsed diagram document, not yet turned into a [`Chart`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DiagramDocument {
    grid: Option<GridConfig>,
    #[serde(default, rename = "node")]
    nodes: Vec<NodeEntry>,
    #[serde(default, rename = "point")]
    points: Vec<PointEntry>,
    #[serde(default, rename = "edge")]
    edges: Vec<EdgeEntry>,
    #[serde(default, rename = "cluster")]
    clusters: Vec<ClusterEntry>,
}

impl FromStr for DiagramDocument {
    type Err = ChartError;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        toml::from_str(source).map_err(|err| ChartError::Document(err.to_string()))
    }
}

impl DiagramDocument {
    /// Grid section of the document, if any
    pub fn grid(&self) -> Option<&GridConfig> {
        self.grid.as_ref()
    }

    /// Builds the chart, using the document's own grid section when present
    /// and `grid` otherwise.
    ///
    /// # Errors
    ///
    /// - [`ChartError::Document`] for duplicate ids, unknown references or
    ///   an edge endpoint that is not a node or point.
    /// - Any error of the [`Chart`] declaration calls.
    pub fn into_chart(self, grid: &GridConfig) -> Result<Chart, ChartError> {
        let grid = self.grid.unwrap_or_else(|| grid.clone());
        let mut chart = Chart::new(grid)?;
        let mut ids = Ids::default();

        for entry in self.nodes {
            let mut node = Node::new(entry.col, entry.row)
                .with_text(entry.text)
                .with_shape(entry.shape);
            if let Some(fill) = entry.fill {
                node = node.with_fill(fill);
            }
            let id = chart.add_node(node);
            ids.insert(entry.id, id.into())?;
        }

        for entry in self.points {
            let id = chart.add_waypoint(Waypoint::new(entry.col, entry.row));
            ids.insert(entry.id, id.into())?;
        }

        for entry in self.edges {
            let from = ids.endpoint(&entry.from)?;
            let to = ids.endpoint(&entry.to)?;

            let mut spec = EdgeSpec::new(entry.anchor)
                .with_text(entry.text)
                .with_layout(entry.layout);
            if let Some(color) = entry.color {
                spec = spec.with_color(color);
            }
            if let Some(order) = entry.from_order {
                spec = spec.with_origin_order(order);
            }
            if let Some(order) = entry.to_order {
                spec = spec.with_destination_order(order);
            }

            let id = chart.add_edge(from, to, spec)?;
            ids.insert(entry.id, id.into())?;
        }

        for entry in self.clusters {
            let children = entry
                .children
                .iter()
                .map(|child| ids.get(child))
                .collect::<Result<Vec<_>, _>>()?;

            let mut cluster = Cluster::new(children)
                .with_text(entry.text)
                .with_rounded(entry.rounded);
            if let Some(fill) = entry.fill {
                cluster = cluster.with_fill(fill);
            }

            let id = chart.add_cluster(cluster)?;
            ids.insert(entry.id, id.into())?;
        }

        debug!(ids = ids.len(); "Document resolved");
        Ok(chart)
    }
}

/// Document ids in declaration order.
#[derive(Debug, Default)]
struct Ids {
    elements: IndexMap<String, ElementId>,
}

impl Ids {
    fn insert(&mut self, name: Option<String>, element: ElementId) -> Result<(), ChartError> {
        let Some(name) = name else {
            return Ok(());
        };

        if let Some(existing) = self.elements.get(&name) {
            return Err(ChartError::Document(format!(
                "duplicate id `{name}`, already used by {existing}"
            )));
        }

        self.elements.insert(name, element);
        Ok(())
    }

    fn get(&self, name: &str) -> Result<ElementId, ChartError> {
        self.elements
            .get(name)
            .copied()
            .ok_or_else(|| ChartError::Document(format!("unknown id `{name}`")))
    }

    fn endpoint(&self, name: &str) -> Result<Endpoint, ChartError> {
        match self.get(name)? {
            ElementId::Node(id) => Ok(id.into()),
            ElementId::Waypoint(id) => Ok(id.into()),
            other => Err(ChartError::Document(format!(
                "edge endpoint `{name}` must be a node or point, found {other}"
            ))),
        }
    }

    fn len(&self) -> usize {
        self.elements.len()
    }
}

/// Parses a document and builds its chart.
pub fn load(source: &str, grid: &GridConfig) -> Result<Chart, ChartError> {
    info!(bytes = source.len(); "Loading diagram document");
    source.parse::<DiagramDocument>()?.into_chart(grid)
}
