//! CLI logic for the gridchart diagram tool.
//!
//! Reads a TOML diagram document, lays it out on the grid and writes the
//! resulting SVG.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use gridchart::{ChartError, DiagramBuilder};

/// Run the gridchart CLI application
///
/// This function processes the input document through the gridchart
/// pipeline and writes the resulting SVG to the output file.
///
/// # Errors
///
/// Returns `ChartError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Document and anchor string errors
/// - Layout errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), ChartError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing diagram"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;

    let builder = DiagramBuilder::new(app_config);
    let chart = builder.build(&source)?;
    builder.export_svg(chart, &args.output)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
