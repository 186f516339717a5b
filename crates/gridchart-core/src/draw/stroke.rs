//! Stroke definitions for edges, node outlines and cluster frames.
//!
//! - [`StrokeDefinition`]: color, width and dash style of a line
//! - [`StrokeStyle`]: solid or patterned lines
//! - [`apply_stroke!`](crate::apply_stroke!): applies a stroke to an SVG element
//!
//! | Rust Property | SVG Attribute |
//! |--------------|---------------|
//! | `color` | `stroke`, `stroke-opacity` |
//! | `width` | `stroke-width` |
//! | `style` | `stroke-dasharray` |

use crate::color::Color;

/// Dash pattern of a stroke.
///
/// - `Solid`: no dasharray attribute
/// - `Dashed`: `"7,4"`, the pattern of dashed edges
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokeStyle {
    #[default]
    Solid,
    Dashed,
}

impl StrokeStyle {
    /// Returns the SVG dasharray value for this style, or None for solid lines
    pub fn to_svg_value(self) -> Option<&'static str> {
        match self {
            Self::Solid => None,
            Self::Dashed => Some("7,4"),
        }
    }
}

/// A stroke used to render lines and outlines.
///
/// ```
/// use gridchart_core::draw::{StrokeDefinition, StrokeStyle};
/// use gridchart_core::color::Color;
///
/// let stroke = StrokeDefinition::dashed(Color::new("#d00000").unwrap(), 2.0);
/// assert_eq!(stroke.style(), StrokeStyle::Dashed);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
    style: StrokeStyle,
}

impl StrokeDefinition {
    /// Creates a solid stroke with the given color and width
    pub fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            style: StrokeStyle::Solid,
        }
    }

    /// Alias of [`StrokeDefinition::new`]
    pub fn solid(color: Color, width: f32) -> Self {
        Self::new(color, width)
    }

    /// Creates a dashed stroke
    pub fn dashed(color: Color, width: f32) -> Self {
        Self {
            style: StrokeStyle::Dashed,
            ..Self::new(color, width)
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn style(&self) -> StrokeStyle {
        self.style
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self::new(Color::default(), 2.0)
    }
}

/// Apply all stroke attributes to an SVG element.
///
/// ```
/// use gridchart_core::draw::StrokeDefinition;
/// use gridchart_core::color::Color;
/// use svg::node::element as svg_element;
///
/// let stroke = StrokeDefinition::solid(Color::new("black").unwrap(), 2.0);
/// let line = svg_element::Line::new()
///     .set("x1", 0)
///     .set("y1", 0)
///     .set("x2", 100)
///     .set("y2", 0);
///
/// let line = gridchart_core::apply_stroke!(line, &stroke);
/// ```
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        let mut elem = $element
            .set("stroke", $stroke.color().to_string())
            .set("stroke-opacity", $stroke.color().alpha())
            .set("stroke-width", $stroke.width());

        if let Some(dasharray) = $stroke.style().to_svg_value() {
            elem = elem.set("stroke-dasharray", dasharray);
        }

        elem
    }};
}

#[cfg(test)]
mod tests {
    use svg::node::element::Line;

    use super::*;

    #[test]
    fn test_stroke_default() {
        let stroke = StrokeDefinition::default();
        assert_eq!(stroke.width(), 2.0);
        assert_eq!(stroke.color().to_string(), "black");
        assert_eq!(stroke.style(), StrokeStyle::Solid);
    }

    #[test]
    fn test_stroke_constructors() {
        let color = Color::new("red").unwrap();

        assert_eq!(StrokeDefinition::solid(color, 2.0).style(), StrokeStyle::Solid);
        assert_eq!(StrokeDefinition::dashed(color, 1.5).style(), StrokeStyle::Dashed);
    }

    #[test]
    fn test_stroke_style_svg_values() {
        assert_eq!(StrokeStyle::Solid.to_svg_value(), None);
        assert_eq!(StrokeStyle::Dashed.to_svg_value(), Some("7,4"));
    }

    #[test]
    fn test_apply_stroke_sets_dasharray_only_when_patterned() {
        let solid = StrokeDefinition::default();
        let line = crate::apply_stroke!(Line::new(), &solid);
        assert!(!line.to_string().contains("stroke-dasharray"));

        let dashed = StrokeDefinition::dashed(Color::default(), 2.0);
        let line = crate::apply_stroke!(Line::new(), &dashed);
        assert!(line.to_string().contains("stroke-dasharray=\"7,4\""));
    }
}
