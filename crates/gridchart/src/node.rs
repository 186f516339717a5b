//! Positioned elements: nodes and waypoints.
//!
//! A [`Node`] is a box drawn at a grid coordinate; edges attach to its four
//! borders. A [`Waypoint`] is a zero-size marker that draws nothing. It can
//! terminate an edge to steer routing or simply enlarge the canvas.
//!
//! Border geometry depends on the node shape. Rectangles and rounded
//! rectangles expose the full sides of their footprint; a diamond exposes
//! only its four vertices, each at `node_height / 2` from the centre.

use serde::Deserialize;

use gridchart_core::{
    anchor::Border,
    color::Color,
    geometry::{Bounds, Point, Size},
};

use crate::grid::GridConfig;

/// Outline of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeShape {
    #[default]
    Rectangle,
    #[serde(alias = "rounded")]
    RoundedRectangle,
    Diamond,
}

impl NodeShape {
    /// Corner radius used when drawing the footprint
    pub fn corner_radius(self, grid: &GridConfig) -> f32 {
        match self {
            Self::RoundedRectangle => grid.node_height() / 2.0,
            Self::Rectangle | Self::Diamond => 0.0,
        }
    }

    /// The attachable segment of `border` for a node centred on `center`.
    ///
    /// The segment runs left to right for TOP and BOTTOM, top to bottom for
    /// LEFT and RIGHT. For a diamond both ends are the same vertex.
    fn border_segment(self, center: Point, border: Border, grid: &GridConfig) -> (Point, Point) {
        match self {
            Self::Diamond => {
                let c = grid.node_height() / 2.0;
                let (nx, ny) = border.outward_normal();
                let vertex = Point::new(center.x() + nx * c, center.y() + ny * c);
                (vertex, vertex)
            }
            Self::Rectangle | Self::RoundedRectangle => {
                let half_w = grid.node_width() / 2.0;
                let half_h = grid.node_height() / 2.0;
                let (x, y) = (center.x(), center.y());
                match border {
                    Border::Left => (Point::new(x - half_w, y - half_h), Point::new(x - half_w, y + half_h)),
                    Border::Right => (Point::new(x + half_w, y - half_h), Point::new(x + half_w, y + half_h)),
                    Border::Top => (Point::new(x - half_w, y - half_h), Point::new(x + half_w, y - half_h)),
                    Border::Bottom => (Point::new(x - half_w, y + half_h), Point::new(x + half_w, y + half_h)),
                }
            }
        }
    }
}

/// A labeled box at a grid coordinate.
///
/// ```
/// use gridchart::node::{Node, NodeShape};
/// use gridchart::grid::GridConfig;
/// use gridchart_core::anchor::Border;
///
/// let grid = GridConfig::default();
/// let node = Node::new(1.0, 0.0).with_text("API").with_shape(NodeShape::RoundedRectangle);
///
/// let right = node.border_center(Border::Right, &grid);
/// assert_eq!(right.x(), 275.0);
/// assert_eq!(right.y(), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    col: f32,
    row: f32,
    text: String,
    fill: Color,
    shape: NodeShape,
}

impl Node {
    /// Creates an unlabeled white rectangle.
    pub fn new(col: f32, row: f32) -> Self {
        Self {
            col,
            row,
            text: String::new(),
            fill: Color::white(),
            shape: NodeShape::default(),
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = fill;
        self
    }

    pub fn with_shape(mut self, shape: NodeShape) -> Self {
        self.shape = shape;
        self
    }

    pub fn col(&self) -> f32 {
        self.col
    }

    pub fn row(&self) -> f32 {
        self.row
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn fill(&self) -> Color {
        self.fill
    }

    pub fn shape(&self) -> NodeShape {
        self.shape
    }

    /// Pixel centre of the node
    pub fn center(&self, grid: &GridConfig) -> Point {
        grid.to_pixel(self.col, self.row)
    }

    /// The configured footprint, whatever the shape.
    pub fn bounds(&self, grid: &GridConfig) -> Bounds {
        Bounds::new_from_center(self.center(grid), grid.node_size())
    }

    /// Midpoint of a border; for a diamond, the vertex on that side.
    pub fn border_center(&self, border: Border, grid: &GridConfig) -> Point {
        let (start, end) = self.border_segment(border, grid);
        start.midpoint(end)
    }

    /// The border segment as `(start, end)`, in the direction positions are
    /// measured along.
    pub fn border_segment(&self, border: Border, grid: &GridConfig) -> (Point, Point) {
        self.shape.border_segment(self.center(grid), border, grid)
    }

    /// The point at relative `position` along a border, 0 being the start of
    /// the segment and 1 its end.
    pub fn point_on_border(&self, border: Border, position: f32, grid: &GridConfig) -> Point {
        let (start, end) = self.border_segment(border, grid);
        start.lerp(end, position)
    }
}

/// A zero-size marker at a grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Waypoint {
    col: f32,
    row: f32,
}

impl Waypoint {
    pub fn new(col: f32, row: f32) -> Self {
        Self { col, row }
    }

    pub fn col(&self) -> f32 {
        self.col
    }

    pub fn row(&self) -> f32 {
        self.row
    }

    pub fn center(&self, grid: &GridConfig) -> Point {
        grid.to_pixel(self.col, self.row)
    }

    /// A degenerate rectangle at the waypoint's position
    pub fn bounds(&self, grid: &GridConfig) -> Bounds {
        self.center(grid).to_bounds(Size::default())
    }
}
