//! Drawing primitives shared by the SVG exporter.
//!
//! - [`StrokeDefinition`] and [`StrokeStyle`] describe lines and outlines
//! - [`RenderLayer`] and [`LayeredOutput`] fix the paint order

mod layer;
mod stroke;

pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use stroke::{StrokeDefinition, StrokeStyle};
