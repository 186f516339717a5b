//! Arrowhead markers.
//!
//! One marker is defined per edge color and referenced from both ends of a
//! path: `orient="auto-start-reverse"` flips it at the start.

use std::collections::HashMap;

use svg::node::element as svg_element;

use gridchart_core::color::Color;

use crate::edge::STUB_LENGTH;

/// Collects the colors of arrowed edges and emits their marker definitions.
#[derive(Debug, Default)]
pub(super) struct ArrowMarkers {
    markers: HashMap<String, Color>,
}

impl ArrowMarkers {
    /// Registers `color` and returns the `url(#...)` reference of its marker.
    pub fn reference(&mut self, color: Color) -> String {
        let id = Self::marker_id(color);
        let reference = format!("url(#{id})");
        self.markers.entry(id).or_insert(color);
        reference
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Generates SVG marker definitions for all collected colors
    pub fn draw_marker_definitions(&self) -> svg_element::Definitions {
        // Sorted for a deterministic document
        let mut markers: Vec<(&String, &Color)> = self.markers.iter().collect();
        markers.sort_by(|a, b| a.0.cmp(b.0));

        markers
            .into_iter()
            .fold(svg_element::Definitions::new(), |defs, (id, color)| {
                defs.add(Self::create_arrow(id, *color))
            })
    }

    fn marker_id(color: Color) -> String {
        format!("arrow-{}", color.to_id_safe_string())
    }

    /// An arrowhead as long as the edge stub, tip on the anchor.
    fn create_arrow(id: &str, color: Color) -> svg_element::Marker {
        svg_element::Marker::new()
            .set("id", id)
            .set("viewBox", "0 0 10 10")
            .set("refX", 10)
            .set("refY", 5)
            .set("markerUnits", "userSpaceOnUse")
            .set("markerWidth", STUB_LENGTH)
            .set("markerHeight", STUB_LENGTH)
            .set("orient", "auto-start-reverse")
            .add(
                svg_element::Path::new()
                    .set("d", "M 0 0 L 10 5 L 0 10 z")
                    .set("fill", color.to_string())
                    .set("fill-opacity", color.alpha()),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_is_shared_per_color() {
        let mut markers = ArrowMarkers::default();
        let red = Color::new("red").unwrap();

        let first = markers.reference(red);
        let second = markers.reference(red);
        assert_eq!(first, second);
        assert_eq!(first, "url(#arrow-red)");
        assert_eq!(markers.markers.len(), 1);
    }

    #[test]
    fn test_definitions_contain_every_color() {
        let mut markers = ArrowMarkers::default();
        markers.reference(Color::default());
        markers.reference(Color::new("#ff8000").unwrap());

        let defs = markers.draw_marker_definitions().to_string();
        assert_eq!(defs.matches("<marker").count(), 2);
        assert!(defs.contains("arrow-black"));
    }
}
