//! Anchor descriptors: where and how an edge attaches to its endpoints.
//!
//! An [`AnchorDescriptor`] is the structured form of an edge specification
//! string such as `"b0.4->t"`. It is produced by the `gridchart-parser`
//! crate and consumed by the layout engine, which turns it into pixel
//! anchor points on node borders.

use std::fmt;

use thiserror::Error;

/// Default relative position on a border when none is given: the midpoint.
pub const DEFAULT_POSITION: f32 = 0.5;

/// Side of a node an edge attaches to.
///
/// Declaration order (LEFT, TOP, RIGHT, BOTTOM) is also the storage order of
/// a node's per-border edge lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Border {
    Left,
    Top,
    Right,
    Bottom,
}

/// Returned when a character does not name a border.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown border `{0}`, expected one of l, t, r, b")]
pub struct UnknownBorder(pub String);

impl Border {
    /// All borders in storage order
    pub const ALL: [Border; 4] = [Border::Left, Border::Top, Border::Right, Border::Bottom];

    /// Index of this border in [`Border::ALL`]
    pub fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Top => 1,
            Self::Right => 2,
            Self::Bottom => 3,
        }
    }

    /// True for LEFT and RIGHT, whose segments run vertically
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    /// Unit vector pointing away from the node through this border
    pub fn outward_normal(self) -> (f32, f32) {
        match self {
            Self::Left => (-1.0, 0.0),
            Self::Top => (0.0, -1.0),
            Self::Right => (1.0, 0.0),
            Self::Bottom => (0.0, 1.0),
        }
    }

}

impl TryFrom<char> for Border {
    type Error = UnknownBorder;

    /// Border letters are case-insensitive.
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_lowercase() {
            'l' => Ok(Self::Left),
            't' => Ok(Self::Top),
            'r' => Ok(Self::Right),
            'b' => Ok(Self::Bottom),
            _ => Err(UnknownBorder(c.to_string())),
        }
    }
}

impl fmt::Display for Border {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Left => "LEFT",
            Self::Top => "TOP",
            Self::Right => "RIGHT",
            Self::Bottom => "BOTTOM",
        };
        f.write_str(name)
    }
}

/// How one end of an edge attaches to its endpoint.
///
/// Both the border and the position are optional: a missing border is
/// derived from the edge layout, a missing position lets the allocator
/// spread the edge evenly among the other automatically placed edges of the
/// same border.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EndpointAnchor {
    arrow: bool,
    border: Option<Border>,
    position: Option<f32>,
}

impl EndpointAnchor {
    pub fn new(arrow: bool, border: Option<Border>, position: Option<f32>) -> Self {
        Self {
            arrow,
            border,
            position,
        }
    }

    /// Whether an arrowhead is drawn at this end
    pub fn has_arrow(&self) -> bool {
        self.arrow
    }

    /// The explicitly requested border, if any
    pub fn border(&self) -> Option<Border> {
        self.border
    }

    /// Relative position on the border; 0.5 when unspecified
    pub fn position(&self) -> f32 {
        self.position.unwrap_or(DEFAULT_POSITION)
    }

    /// Relative position only when the caller gave one
    pub fn explicit_position(&self) -> Option<f32> {
        self.position
    }
}

/// Structured form of an edge specification string.
///
/// ```
/// use gridchart_core::anchor::{AnchorDescriptor, Border, EndpointAnchor};
///
/// let descriptor = AnchorDescriptor::new(
///     false,
///     EndpointAnchor::new(false, Some(Border::Bottom), Some(0.4)),
///     EndpointAnchor::new(true, Some(Border::Top), None),
/// );
/// assert_eq!(descriptor.destination().position(), 0.5);
/// assert!(descriptor.destination().has_arrow());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnchorDescriptor {
    dashed: bool,
    origin: EndpointAnchor,
    destination: EndpointAnchor,
}

impl AnchorDescriptor {
    pub fn new(dashed: bool, origin: EndpointAnchor, destination: EndpointAnchor) -> Self {
        Self {
            dashed,
            origin,
            destination,
        }
    }

    /// Whether the edge is drawn with a dash pattern
    pub fn is_dashed(&self) -> bool {
        self.dashed
    }

    /// Anchor of the first endpoint passed to the edge
    pub fn origin(&self) -> &EndpointAnchor {
        &self.origin
    }

    /// Anchor of the second endpoint passed to the edge
    pub fn destination(&self) -> &EndpointAnchor {
        &self.destination
    }
}
