//! Clusters: labeled panels grouping other elements.
//!
//! A cluster is a visual grouping only. Its bounds are recomputed on every
//! query from the bounds of its children (nodes, waypoints, edges and other
//! clusters), padded by the cluster margin with an extra label band on top.

use gridchart_core::color::Color;

use crate::element::ElementId;

/// Declaration of a cluster, passed to
/// [`Chart::add_cluster`](crate::Chart::add_cluster).
///
/// Children must already be registered in the chart, which rules out
/// cycles between clusters.
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    children: Vec<ElementId>,
    text: String,
    fill: Option<Color>,
    rounded: bool,
}

impl Cluster {
    /// Creates an unlabeled, transparent, square-cornered cluster.
    pub fn new(children: impl IntoIterator<Item = impl Into<ElementId>>) -> Self {
        Self {
            children: children.into_iter().map(Into::into).collect(),
            text: String::new(),
            fill: None,
            rounded: false,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn with_rounded(mut self, rounded: bool) -> Self {
        self.rounded = rounded;
        self
    }

    pub fn children(&self) -> &[ElementId] {
        &self.children
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Panel fill; `None` leaves the panel transparent
    pub fn fill(&self) -> Option<Color> {
        self.fill
    }

    pub fn is_rounded(&self) -> bool {
        self.rounded
    }
}
