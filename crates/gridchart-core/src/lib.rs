//! gridchart core types.
//!
//! This crate provides the foundational types shared by the gridchart
//! crates:
//!
//! - **Geometry**: pixel-space points, sizes and bounds ([`geometry`] module)
//! - **Colors**: CSS color handling ([`color::Color`])
//! - **Anchors**: borders and edge anchor descriptors ([`anchor`] module)
//! - **Draw**: strokes and paint-order layers for SVG output ([`draw`] module)

pub mod anchor;
pub mod color;
pub mod draw;
pub mod geometry;
