//! Layer-based paint order for SVG output.
//!
//! Charts are painted clusters first, then edges, then nodes, so cluster
//! panels act as backgrounds and nodes occlude the ends of their own edges.
//! Each drawable tags the SVG elements it produces with a [`RenderLayer`];
//! [`LayeredOutput::render`] then emits them layer by layer.
//!
//! ```
//! # use gridchart_core::draw::{RenderLayer, LayeredOutput};
//! # use svg::node::element::Rectangle;
//! let mut output = LayeredOutput::new();
//! output.add_to_layer(RenderLayer::Node, Box::new(Rectangle::new()));
//! output.add_to_layer(RenderLayer::Cluster, Box::new(Rectangle::new()));
//!
//! // Cluster group first, node group second
//! let groups = output.render();
//! assert_eq!(groups.len(), 2);
//! ```

use log::trace;
use svg::node::element as svg_element;

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// Rendering layers, bottom to top in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Canvas background
    Background,
    /// Cluster panels and their labels
    Cluster,
    /// Edge lines and paths
    Edge,
    /// Edge labels with their halo
    EdgeText,
    /// Node shapes
    Node,
    /// Node labels
    NodeText,
}

impl RenderLayer {
    /// Returns a human-readable name for this layer.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Cluster => "cluster",
            Self::Edge => "edge",
            Self::EdgeText => "edge-text",
            Self::Node => "node",
            Self::NodeText => "node-text",
        }
    }
}

/// SVG nodes tagged with the layer they belong to.
#[derive(Debug, Default)]
pub struct LayeredOutput {
    items: Vec<(RenderLayer, SvgNode)>,
}

impl LayeredOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node to `layer`; nodes keep their insertion order within a layer.
    pub fn add_to_layer(&mut self, layer: RenderLayer, node: SvgNode) {
        self.items.push((layer, node));
    }

    /// Appends every node of `other`.
    pub fn merge(&mut self, other: LayeredOutput) {
        self.items.extend(other.items);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Renders all layers to SVG groups, consuming the output.
    ///
    /// Each non-empty layer becomes a `<g data-layer="...">` element. The
    /// sort is stable, so insertion order survives within a layer.
    pub fn render(mut self) -> Vec<SvgNode> {
        if self.is_empty() {
            return Vec::new();
        }

        self.items.sort_by_key(|(layer, _)| *layer);

        let mut result = Vec::new();
        let mut current_layer = self.items[0].0;
        let mut current_group = svg_element::Group::new().set("data-layer", current_layer.name());
        let mut count = 0usize;

        for (layer, node) in self.items {
            if layer != current_layer {
                trace!(layer = current_layer.name(), count = count; "Layer rendered");
                result.push(Box::new(current_group) as SvgNode);

                current_layer = layer;
                current_group = svg_element::Group::new().set("data-layer", layer.name());
                count = 0;
            }

            current_group = current_group.add(node);
            count += 1;
        }

        trace!(layer = current_layer.name(), count = count; "Layer rendered");
        result.push(Box::new(current_group) as SvgNode);

        result
    }
}

#[cfg(test)]
mod tests {
    use svg::node::element::Rectangle;

    use super::*;

    fn render_to_string(output: LayeredOutput) -> String {
        output.render().iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_layered_output_new() {
        let output = LayeredOutput::new();
        assert!(output.is_empty());
        assert!(output.render().is_empty());
    }

    #[test]
    fn test_layered_output_merge() {
        let mut output1 = LayeredOutput::new();
        output1.add_to_layer(RenderLayer::Node, Box::new(Rectangle::new()));

        let mut output2 = LayeredOutput::new();
        output2.add_to_layer(RenderLayer::Edge, Box::new(Rectangle::new()));

        output1.merge(output2);
        assert_eq!(output1.len(), 2);
        assert_eq!(output1.render().len(), 2);
    }

    #[test]
    fn test_layers_render_clusters_edges_nodes() {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::NodeText, Box::new(Rectangle::new()));
        output.add_to_layer(RenderLayer::Node, Box::new(Rectangle::new()));
        output.add_to_layer(RenderLayer::Edge, Box::new(Rectangle::new()));
        output.add_to_layer(RenderLayer::Cluster, Box::new(Rectangle::new()));

        let svg = render_to_string(output);

        let cluster = svg.find("data-layer=\"cluster\"").unwrap();
        let edge = svg.find("data-layer=\"edge\"").unwrap();
        let node = svg.find("data-layer=\"node\"").unwrap();
        let node_text = svg.find("data-layer=\"node-text\"").unwrap();
        assert!(cluster < edge && edge < node && node < node_text);
    }

    #[test]
    fn test_same_layer_is_grouped() {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Edge, Box::new(Rectangle::new()));
        output.add_to_layer(RenderLayer::Edge, Box::new(Rectangle::new()));

        assert_eq!(output.render().len(), 1);
    }
}
