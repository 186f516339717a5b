//! Integration tests for the DiagramBuilder API
//!
//! These tests verify that documents load, render and export through the
//! public API.

use gridchart::{
    ChartError, DiagramBuilder,
    config::{AppConfig, StyleConfig},
    grid::GridConfig,
};

const TWO_NODES: &str = r#"
    [[node]]
    id = "app"
    col = 0
    row = 0
    text = "App"

    [[node]]
    id = "db"
    col = 2
    row = 0
    text = "Db"

    [[edge]]
    from = "app"
    to = "db"
    anchor = "->"
"#;

#[test]
fn test_builder_api_exists() {
    let _builder = DiagramBuilder::default();
}

#[test]
fn test_render_simple_document() {
    let builder = DiagramBuilder::default();
    let chart = builder.build(TWO_NODES).expect("Failed to build chart");
    let svg = builder.render_svg(&chart).expect("Failed to render chart");

    assert!(svg.contains("<svg"), "Output should contain SVG tag");
    assert!(svg.contains("</svg>"), "Output should be complete SVG");
    assert!(svg.contains("App"));
}

#[test]
fn test_builder_with_style_config() {
    let style = StyleConfig::default()
        .with_background_color("#fafafa")
        .with_font_family("Helvetica");
    let builder = DiagramBuilder::new(AppConfig::new(GridConfig::default(), style));

    let chart = builder.build(TWO_NODES).unwrap();
    let svg = builder.render_svg(&chart).unwrap();
    assert!(svg.contains("Helvetica"));
}

#[test]
fn test_invalid_document_returns_error() {
    let builder = DiagramBuilder::default();
    let result = builder.build("this is not a diagram document!!!");
    assert!(matches!(result, Err(ChartError::Document(_))));
}

#[test]
fn test_invalid_grid_returns_configuration_error() {
    let builder = DiagramBuilder::default();
    let result = builder.build("[grid]\nnode_height = -5\n");
    assert!(matches!(result, Err(ChartError::Configuration(_))));
}

#[test]
fn test_invalid_style_returns_export_error() {
    let style = StyleConfig::default().with_background_color("no-such-color");
    let builder = DiagramBuilder::new(AppConfig::new(GridConfig::default(), style));

    let chart = builder.build(TWO_NODES).unwrap();
    assert!(matches!(builder.render_svg(&chart), Err(ChartError::Export(_))));
}

#[test]
fn test_export_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.svg");

    let builder = DiagramBuilder::default();
    let chart = builder.build(TWO_NODES).unwrap();
    builder.export_svg(chart, &path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("marker-end"));
}

#[test]
fn test_builder_reusability() {
    let builder = DiagramBuilder::default();

    let chart1 = builder.build(TWO_NODES).expect("Failed to build chart1");
    let svg1 = builder.render_svg(&chart1).expect("Failed to render chart1");

    let chart2 = builder
        .build("[[point]]\ncol = 1\nrow = 1\n")
        .expect("Failed to build chart2");
    let svg2 = builder.render_svg(&chart2).expect("Failed to render chart2");

    assert!(svg1.contains("<svg"), "First SVG should be valid");
    assert!(svg2.contains("<svg"), "Second SVG should be valid");
}
