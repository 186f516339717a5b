//! SVG export backend.
//!
//! [`SvgBuilder`] collects the output path and style, [`Svg`] renders a
//! [`Chart`] into an [`svg::Document`] and writes it out. The document's
//! `viewBox` starts at the chart's global bounds, so grid coordinates can be
//! negative without any translation.

mod element;
mod marker;

use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use log::{debug, error, info};
use svg::{Document, node::element as svg_element};

use gridchart_core::{
    color::Color,
    draw::{LayeredOutput, RenderLayer},
    geometry::Bounds,
};

use crate::{Chart, config::StyleConfig, element::ElementId, export};

use marker::ArrowMarkers;

/// Builder for [`Svg`] exporters.
///
/// Without a path the exporter can only render in memory with
/// [`Svg::render_chart`].
#[derive(Debug, Default)]
pub struct SvgBuilder {
    file_name: Option<PathBuf>,
    style: StyleConfig,
}

impl SvgBuilder {
    pub fn new(file_name: impl AsRef<Path>) -> Self {
        Self {
            file_name: Some(file_name.as_ref().to_path_buf()),
            style: StyleConfig::default(),
        }
    }

    pub fn with_style(mut self, style: &StyleConfig) -> Self {
        self.style = style.clone();
        self
    }

    /// Validates the style and creates the exporter.
    ///
    /// # Errors
    ///
    /// Returns [`export::Error::Render`] for an unparsable background color
    /// or a stroke width that is not a positive number.
    pub fn build(self) -> Result<Svg, export::Error> {
        let background = self
            .style
            .background_color()
            .map_err(export::Error::Render)?
            .unwrap_or_else(Color::white);

        let stroke_width = self.style.stroke_width();
        if !stroke_width.is_finite() || stroke_width <= 0.0 {
            return Err(export::Error::Render(format!(
                "stroke width must be a positive number, got {stroke_width}"
            )));
        }

        Ok(Svg {
            file_name: self.file_name,
            background,
            font_family: self.style.font_family().to_string(),
            stroke_width,
            markers: ArrowMarkers::default(),
        })
    }
}

/// SVG exporter for charts.
#[derive(Debug)]
pub struct Svg {
    file_name: Option<PathBuf>,
    background: Color,
    font_family: String,
    stroke_width: f32,
    markers: ArrowMarkers,
}

impl Svg {
    /// Renders a chart to an SVG document.
    ///
    /// Elements are emitted in paint order: background, clusters, edges,
    /// edge labels, nodes, node labels.
    pub fn render_chart(&mut self, chart: &Chart) -> Result<Document, export::Error> {
        let bounds = chart.bounds().map_err(render_error)?;
        let bounds = if bounds.is_empty() {
            Bounds::new(0.0, 0.0, 0.0, 0.0)
        } else {
            bounds
        };

        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Background, self.render_background(bounds));

        for element in chart.paint_order() {
            let element_output = match element {
                ElementId::Cluster(id) => self.render_cluster(chart, id),
                ElementId::Edge(id) => self.render_edge(chart, id),
                ElementId::Node(id) => self.render_node(chart, id),
                // Waypoints draw nothing
                ElementId::Waypoint(_) => continue,
            }
            .map_err(render_error)?;
            output.merge(element_output);
        }
        debug!(elements = output.len(); "Chart elements rendered");

        let mut doc = Document::new()
            .set(
                "viewBox",
                format!(
                    "{} {} {} {}",
                    bounds.min_x(),
                    bounds.min_y(),
                    bounds.width(),
                    bounds.height()
                ),
            )
            .set("width", bounds.width())
            .set("height", bounds.height());

        if !self.markers.is_empty() {
            doc = doc.add(self.markers.draw_marker_definitions());
        }

        Ok(output
            .render()
            .into_iter()
            .fold(doc, |doc, group| doc.add(group)))
    }

    fn render_background(&self, bounds: Bounds) -> Box<dyn svg::Node> {
        let background = svg_element::Rectangle::new()
            .set("x", bounds.min_x())
            .set("y", bounds.min_y())
            .set("width", bounds.width())
            .set("height", bounds.height())
            .set("fill", &self.background)
            .set("fill-opacity", self.background.alpha());
        Box::new(background)
    }

    /// Writes an SVG document to the configured file
    fn write_document(&self, doc: Document) -> Result<(), export::Error> {
        let Some(file_name) = &self.file_name else {
            return Err(export::Error::Render(
                "no output file configured for the SVG exporter".to_string(),
            ));
        };
        info!(file_name:? = file_name; "Creating SVG file");

        let mut f = File::create(file_name).map_err(|err| {
            error!(file_name:? = file_name, err:err; "Failed to create SVG file");
            export::Error::Io(err)
        })?;

        write!(f, "{doc}").map_err(|err| {
            error!(file_name:? = file_name, err:err; "Failed to write SVG content");
            export::Error::Io(err)
        })
    }
}

impl export::Exporter for Svg {
    fn export_chart(&mut self, chart: &Chart) -> Result<(), export::Error> {
        let doc = self.render_chart(chart)?;
        debug!("SVG document rendered");

        self.write_document(doc)
    }
}

fn render_error(err: crate::ChartError) -> export::Error {
    export::Error::Render(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        cluster::Cluster,
        edge::{EdgeLayout, EdgeSpec},
        export::Exporter,
        grid::GridConfig,
        node::{Node, NodeShape, Waypoint},
    };

    fn render(chart: &Chart) -> String {
        let mut svg = SvgBuilder::default().build().unwrap();
        svg.render_chart(chart).unwrap().to_string()
    }

    #[test]
    fn test_empty_chart_renders_empty_canvas() {
        let chart = Chart::new(GridConfig::default()).unwrap();
        let output = render(&chart);

        assert!(output.contains(r#"viewBox="0 0 0 0""#));
        assert!(!output.contains("<marker"));
    }

    #[test]
    fn test_view_box_starts_at_bounds() {
        let mut chart = Chart::new(GridConfig::default()).unwrap();
        chart.add_node(Node::new(0.0, 0.0));

        let output = render(&chart);
        assert!(output.contains(r#"viewBox="-125 -50 250 100""#));
    }

    #[test]
    fn test_dashed_edge_with_arrow_marker() {
        let mut chart = Chart::new(GridConfig::default()).unwrap();
        let a = chart.add_node(Node::new(0.0, 0.0));
        let b = chart.add_node(Node::new(2.0, 0.0));
        chart.add_edge(a, b, EdgeSpec::new("-->")).unwrap();

        let output = render(&chart);
        assert!(output.contains(r#"stroke-dasharray="7,4""#));
        assert!(output.contains(r#"orient="auto-start-reverse""#));
        assert!(output.contains("marker-end=\"url(#arrow-black)\""));
        assert!(!output.contains("marker-start"));
    }

    #[test]
    fn test_one_marker_per_color() {
        let mut chart = Chart::new(GridConfig::default()).unwrap();
        let a = chart.add_node(Node::new(0.0, 0.0));
        let b = chart.add_node(Node::new(2.0, 0.0));
        let red = Color::new("red").unwrap();
        chart.add_edge(a, b, EdgeSpec::new("<->").with_color(red)).unwrap();
        chart.add_edge(a, b, EdgeSpec::new("->").with_color(red)).unwrap();
        chart.add_edge(a, b, EdgeSpec::new("->")).unwrap();

        let output = render(&chart);
        assert_eq!(output.matches("<marker").count(), 2);
        assert!(output.contains("marker-start=\"url(#arrow-red)\""));
    }

    #[test]
    fn test_curved_edge_renders_path() {
        let mut chart = Chart::new(GridConfig::default()).unwrap();
        let a = chart.add_node(Node::new(0.0, 0.0));
        let b = chart.add_node(Node::new(2.0, 0.0));
        chart
            .add_edge(a, b, EdgeSpec::new("-").with_layout(EdgeLayout::TopTop))
            .unwrap();

        let output = render(&chart);
        assert!(output.contains("<path"));
        assert!(output.contains(" Q "));
    }

    #[test]
    fn test_rounded_cluster_follows_node_height() {
        let grid = GridConfig::default();
        let radius = grid.node_height() / 2.0;
        let mut chart = Chart::new(grid).unwrap();
        let a = chart.add_node(Node::new(0.0, 0.0));
        chart
            .add_cluster(Cluster::new([a]).with_rounded(true))
            .unwrap();

        let output = render(&chart);
        assert!(output.contains(&format!(r#"rx="{radius}""#)));
    }

    #[test]
    fn test_paint_order_in_document() {
        let mut chart = Chart::new(GridConfig::default()).unwrap();
        let a = chart.add_node(Node::new(0.0, 0.0).with_text("A"));
        let b = chart.add_node(Node::new(2.0, 0.0).with_shape(NodeShape::Diamond));
        chart.add_edge(a, b, EdgeSpec::new("->").with_text("calls")).unwrap();
        chart
            .add_cluster(Cluster::new([a, b]).with_text("Group"))
            .unwrap();
        chart.add_waypoint(Waypoint::new(3.0, 1.0));

        let output = render(&chart);
        let background = output.find(r#"data-layer="background""#).unwrap();
        let cluster = output.find(r#"data-layer="cluster""#).unwrap();
        let edge = output.find(r#"data-layer="edge""#).unwrap();
        let node = output.find(r#"data-layer="node""#).unwrap();
        assert!(background < cluster && cluster < edge && edge < node);

        assert!(output.contains("<polygon"));
        assert!(output.contains(r#"font-weight="bold""#));
        assert!(output.contains(r#"paint-order="stroke""#));
    }

    #[test]
    fn test_invalid_style_is_rejected() {
        let style = StyleConfig::default().with_background_color("not-a-color");
        assert!(SvgBuilder::default().with_style(&style).build().is_err());

        let style = StyleConfig::default().with_stroke_width(0.0);
        assert!(SvgBuilder::default().with_style(&style).build().is_err());
    }

    #[test]
    fn test_export_without_path_fails() {
        let chart = Chart::new(GridConfig::default()).unwrap();
        let mut svg = SvgBuilder::default().build().unwrap();
        assert!(matches!(
            svg.export_chart(&chart),
            Err(export::Error::Render(_))
        ));
    }

    #[test]
    fn test_export_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.svg");

        let mut chart = Chart::new(GridConfig::default()).unwrap();
        chart.add_node(Node::new(0.0, 0.0).with_text("A"));

        let mut svg = SvgBuilder::new(&path).build().unwrap();
        svg.export_chart(&chart).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("<svg"));
        assert!(content.contains("<text"));
    }
}
