//! SVG rendering of clusters, edges and nodes.

use svg::node::{Text as SvgText, element as svg_element};

use gridchart_core::{
    apply_stroke,
    color::Color,
    draw::{LayeredOutput, RenderLayer, StrokeDefinition},
    geometry::Point,
};

use super::Svg;
use crate::{
    Chart, ChartError,
    element::{ClusterId, EdgeId, NodeId},
    node::NodeShape,
};

/// Width of the white halo behind edge labels
const HALO_WIDTH: f32 = 4.0;

impl Svg {
    pub(super) fn render_cluster(
        &self,
        chart: &Chart,
        id: ClusterId,
    ) -> Result<LayeredOutput, ChartError> {
        let cluster = chart.cluster(id)?;
        let bounds = chart.cluster_bounds(id)?;
        let mut output = LayeredOutput::new();

        let stroke = StrokeDefinition::new(Color::default(), self.stroke_width);
        let mut panel = svg_element::Rectangle::new()
            .set("x", bounds.min_x())
            .set("y", bounds.min_y())
            .set("width", bounds.width())
            .set("height", bounds.height());

        panel = match cluster.fill() {
            Some(fill) => panel
                .set("fill", &fill)
                .set("fill-opacity", fill.alpha()),
            None => panel.set("fill", "none"),
        };
        if cluster.is_rounded() {
            // same rounding as rounded nodes
            panel = panel.set("rx", NodeShape::RoundedRectangle.corner_radius(chart.grid()));
        }
        output.add_to_layer(RenderLayer::Cluster, Box::new(apply_stroke!(panel, &stroke)));

        if !cluster.text().is_empty() {
            // Bottom of the text sits on the top of the label band
            let margin = chart.grid().cluster_margin();
            let label = svg_element::Text::new("")
                .set("x", bounds.min_x() + margin)
                .set("y", bounds.min_y() + margin + chart.grid().font_size())
                .set("dominant-baseline", "text-after-edge")
                .set("font-family", self.font_family.as_str())
                .set("font-size", chart.grid().font_size())
                .set("font-weight", "bold")
                .add(SvgText::new(cluster.text()));
            output.add_to_layer(RenderLayer::Cluster, Box::new(label));
        }

        Ok(output)
    }

    pub(super) fn render_edge(
        &mut self,
        chart: &Chart,
        id: EdgeId,
    ) -> Result<LayeredOutput, ChartError> {
        let edge = chart.edge(id)?;
        let route = chart.route(id)?;
        let mut output = LayeredOutput::new();

        let stroke = if edge.is_dashed() {
            StrokeDefinition::dashed(edge.color(), self.stroke_width)
        } else {
            StrokeDefinition::solid(edge.color(), self.stroke_width)
        };

        let start_marker = edge
            .first()
            .has_arrow()
            .then(|| self.markers.reference(edge.color()));
        let end_marker = edge
            .second()
            .has_arrow()
            .then(|| self.markers.reference(edge.color()));

        let mut path = match route.control() {
            None => {
                let (start, end) = (route.start(), route.end());
                let line = svg_element::Line::new()
                    .set("x1", start.x())
                    .set("y1", start.y())
                    .set("x2", end.x())
                    .set("y2", end.y());
                EdgeShape::Line(line)
            }
            Some(_) => EdgeShape::Path(
                svg_element::Path::new()
                    .set("d", route.to_path_data())
                    .set("fill", "none"),
            ),
        };

        if let Some(marker) = start_marker {
            path = path.set("marker-start", marker);
        }
        if let Some(marker) = end_marker {
            path = path.set("marker-end", marker);
        }
        output.add_to_layer(RenderLayer::Edge, path.with_stroke(&stroke));

        if !edge.text().is_empty() {
            let label = self
                .centered_text(route.center(), edge.text(), chart.grid().font_size())
                .set("stroke", "white")
                .set("stroke-width", HALO_WIDTH)
                .set("paint-order", "stroke");
            output.add_to_layer(RenderLayer::EdgeText, Box::new(label));
        }

        Ok(output)
    }

    pub(super) fn render_node(&self, chart: &Chart, id: NodeId) -> Result<LayeredOutput, ChartError> {
        let node = chart.node(id)?;
        let grid = chart.grid();
        let mut output = LayeredOutput::new();

        let stroke = StrokeDefinition::new(Color::default(), self.stroke_width);
        let fill = node.fill();

        let shape: Box<dyn svg::Node> = match node.shape() {
            NodeShape::Diamond => {
                let center = node.center(grid);
                let c = grid.node_height() / 2.0;
                let points = [
                    (center.x(), center.y() - c),
                    (center.x() + c, center.y()),
                    (center.x(), center.y() + c),
                    (center.x() - c, center.y()),
                ]
                .iter()
                .map(|(x, y)| format!("{x},{y}"))
                .collect::<Vec<_>>()
                .join(" ");

                let polygon = svg_element::Polygon::new()
                    .set("points", points)
                    .set("fill", &fill)
                    .set("fill-opacity", fill.alpha());
                Box::new(apply_stroke!(polygon, &stroke))
            }
            shape @ (NodeShape::Rectangle | NodeShape::RoundedRectangle) => {
                let bounds = node.bounds(grid);
                let mut rect = svg_element::Rectangle::new()
                    .set("x", bounds.min_x())
                    .set("y", bounds.min_y())
                    .set("width", bounds.width())
                    .set("height", bounds.height())
                    .set("fill", &fill)
                    .set("fill-opacity", fill.alpha());

                let radius = shape.corner_radius(grid);
                if radius > 0.0 {
                    rect = rect.set("rx", radius);
                }
                Box::new(apply_stroke!(rect, &stroke))
            }
        };
        output.add_to_layer(RenderLayer::Node, shape);

        if !node.text().is_empty() {
            let label = self.centered_text(node.center(grid), node.text(), grid.font_size());
            output.add_to_layer(RenderLayer::NodeText, Box::new(label));
        }

        Ok(output)
    }

    fn centered_text(&self, position: Point, text: &str, font_size: f32) -> svg_element::Text {
        svg_element::Text::new("")
            .set("x", position.x())
            .set("y", position.y())
            .set("text-anchor", "middle")
            .set("dominant-baseline", "central")
            .set("font-family", self.font_family.as_str())
            .set("font-size", font_size)
            .add(SvgText::new(text))
    }
}

/// A straight edge is a `<line>`, a curved one a `<path>`.
enum EdgeShape {
    Line(svg_element::Line),
    Path(svg_element::Path),
}

impl EdgeShape {
    fn set(self, name: &str, value: String) -> Self {
        match self {
            Self::Line(line) => Self::Line(line.set(name, value)),
            Self::Path(path) => Self::Path(path.set(name, value)),
        }
    }

    fn with_stroke(self, stroke: &StrokeDefinition) -> Box<dyn svg::Node> {
        match self {
            Self::Line(line) => Box::new(apply_stroke!(line, stroke)),
            Self::Path(path) => Box::new(apply_stroke!(path, stroke)),
        }
    }
}
