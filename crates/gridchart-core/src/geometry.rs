//! Geometric primitives for chart layout.
//!
//! - [`Point`] - a pixel coordinate
//! - [`Size`] - width and height
//! - [`Bounds`] - an axis-aligned bounding box
//! - [`Insets`] - per-side margins used to inflate bounds
//!
//! # Coordinate System
//!
//! Pixel coordinates follow SVG conventions:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! Grid coordinates are mapped onto this space by the chart's grid
//! configuration; the geometry types know nothing about the grid.

/// A 2D point in pixel space.
///
/// # Examples
///
/// ```
/// # use gridchart_core::geometry::Point;
/// let a = Point::new(10.0, 20.0);
/// let b = Point::new(30.0, 40.0);
///
/// let mid = a.midpoint(b);
/// assert_eq!(mid, Point::new(20.0, 30.0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Returns a copy of this point with a different x-coordinate
    pub fn with_x(mut self, x: f32) -> Self {
        self.x = x;
        self
    }

    /// Returns a copy of this point with a different y-coordinate
    pub fn with_y(mut self, y: f32) -> Self {
        self.y = y;
        self
    }

    /// Subtracts another point component-wise
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Midpoint between this point and `other`
    pub fn midpoint(self, other: Point) -> Self {
        self.lerp(other, 0.5)
    }

    /// Linear interpolation towards `other`.
    ///
    /// `t = 0` yields `self`, `t = 1` yields `other`.
    ///
    /// ```
    /// # use gridchart_core::geometry::Point;
    /// let start = Point::new(0.0, 10.0);
    /// let end = Point::new(100.0, 10.0);
    /// assert_eq!(start.lerp(end, 0.25), Point::new(25.0, 10.0));
    /// ```
    pub fn lerp(self, other: Point, t: f32) -> Self {
        Self {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }

    /// Converts a center point and a size into bounds
    pub fn to_bounds(self, size: Size) -> Bounds {
        Bounds::new_from_center(self, size)
    }
}

/// Width and height of an element
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn width(self) -> f32 {
        self.width
    }

    pub fn height(self) -> f32 {
        self.height
    }

}

/// An axis-aligned rectangle stored as minimum and maximum coordinates.
///
/// [`Bounds::empty`] is the identity of [`Bounds::merge`]: its minimums are
/// `+inf` and its maximums are `-inf`, so merging it with any real bounds
/// yields exactly the other operand. Folding a sequence of bounds therefore
/// starts from `Bounds::empty()`.
///
/// ```
/// # use gridchart_core::geometry::{Bounds, Point, Size};
/// let node = Bounds::new_from_center(Point::new(0.0, 0.0), Size::new(150.0, 40.0));
/// assert_eq!(Bounds::empty().merge(&node), node);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates bounds from explicit extremes.
    ///
    /// Callers are expected to pass `min <= max` on both axes.
    pub fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        debug_assert!(min_x <= max_x && min_y <= max_y);
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// The canonical empty bounds `(+inf, -inf, +inf, -inf)`.
    pub fn empty() -> Self {
        Self {
            min_x: f32::INFINITY,
            min_y: f32::INFINITY,
            max_x: f32::NEG_INFINITY,
            max_y: f32::NEG_INFINITY,
        }
    }

    /// Creates bounds from a center point and a size
    pub fn new_from_center(center: Point, size: Size) -> Self {
        let half_width = size.width / 2.0;
        let half_height = size.height / 2.0;
        Self {
            min_x: center.x - half_width,
            min_y: center.y - half_height,
            max_x: center.x + half_width,
            max_y: center.y + half_height,
        }
    }

    /// Smallest bounds containing every point of the iterator.
    ///
    /// Returns [`Bounds::empty`] for an empty iterator.
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Self {
        points
            .into_iter()
            .fold(Self::empty(), |acc, point| acc.merge(&point.to_bounds(Size::default())))
    }

    pub fn min_x(self) -> f32 {
        self.min_x
    }

    pub fn min_y(self) -> f32 {
        self.min_y
    }

    pub fn max_x(self) -> f32 {
        self.max_x
    }

    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns true for bounds that enclose nothing (see [`Bounds::empty`])
    pub fn is_empty(self) -> bool {
        self.min_x > self.max_x || self.min_y > self.max_y
    }

    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Returns true if `other` lies entirely within these bounds (edges inclusive)
    pub fn contains(self, other: Bounds) -> bool {
        self.min_x <= other.min_x
            && self.min_y <= other.min_y
            && self.max_x >= other.max_x
            && self.max_y >= other.max_y
    }

    /// Returns true if `point` lies within these bounds (edges inclusive)
    pub fn contains_point(self, point: Point) -> bool {
        self.min_x <= point.x
            && point.x <= self.max_x
            && self.min_y <= point.y
            && point.y <= self.max_y
    }

    /// Union box of two bounds (component-wise min of minimums, max of maximums).
    ///
    /// ```
    /// # use gridchart_core::geometry::Bounds;
    /// let a = Bounds::new(0.0, 0.0, 100.0, 30.0);
    /// let b = Bounds::new(10.0, 40.0, 130.0, 120.0);
    ///
    /// let union = a.merge(&b);
    /// assert_eq!(union.width(), 130.0);
    /// assert_eq!(union.height(), 120.0);
    /// ```
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Grows the bounds outward by the given insets.
    ///
    /// Left/top insets decrease the minimums, right/bottom insets increase
    /// the maximums.
    pub fn add_padding(&self, insets: Insets) -> Self {
        Self {
            min_x: self.min_x - insets.left(),
            min_y: self.min_y - insets.top(),
            max_x: self.max_x + insets.right(),
            max_y: self.max_y + insets.bottom(),
        }
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::empty()
    }
}

/// Spacing around an element, one value per side
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Insets {
    top: f32,
    right: f32,
    bottom: f32,
    left: f32,
}

impl Insets {
    /// Creates new insets with specified values for each side
    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Same value left/right and another top/bottom
    pub fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    pub fn top(self) -> f32 {
        self.top
    }

    pub fn right(self) -> f32 {
        self.right
    }

    pub fn bottom(self) -> f32 {
        self.bottom
    }

    pub fn left(self) -> f32 {
        self.left
    }

}
