//! Export functionality for charts.
//!
//! This module provides the [`Exporter`] trait that defines the interface for
//! converting a fully declared [`Chart`] into an output format. It is the
//! final stage of the pipeline.
//!
//! # Pipeline Position
//!
//! ```text
//! Diagram document / builder calls
//!     ↓ declare
//! Chart (nodes, waypoints, edges, clusters)
//!     ↓ resolve (anchors, routes, bounds)
//!     ↓ export (this module)
//! Output File
//! ```
//!
//! # Available Backends
//!
//! - [`svg`]: SVG output via [`svg::SvgBuilder`] and [`svg::Svg`]
//!
//! # Error Handling
//!
//! Export operations return [`Error`], covering rendering failures and I/O
//! errors. [`Error`] converts into [`ChartError::Export`] at the crate
//! boundary.
//!
//! [`ChartError::Export`]: crate::ChartError::Export

/// SVG export backend.
pub mod svg;

use crate::Chart;

/// Abstraction for chart export backends.
///
/// See the [`svg`] module for the built-in SVG implementation.
pub trait Exporter {
    /// Exports a chart to the backend's output format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the chart cannot be converted to the
    /// target format, or [`Error::Io`] if writing the output fails.
    fn export_chart(&mut self, chart: &Chart) -> Result<(), Error>;
}

/// Errors that can occur during chart export.
///
/// This type is converted into [`ChartError::Export`] at the crate
/// boundary via the [`From`] implementation in [`crate::error`].
///
/// [`ChartError::Export`]: crate::ChartError::Export
#[derive(Debug)]
pub enum Error {
    /// A rendering or conversion failure described by `message`.
    Render(String),
    /// An I/O error encountered while writing output.
    Io(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}
