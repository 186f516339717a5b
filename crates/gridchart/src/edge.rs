//! Edges: connections between two endpoints.
//!
//! An edge is declared with an [`EdgeSpec`]: the anchor string, label,
//! color, layout kind and optional border ranks. When the chart registers
//! it, the layout kind is resolved and each end is assigned a border:
//!
//! | Layout | First end (left/top) | Second end (right/bottom) | Path |
//! |--------|----------------------|---------------------------|------|
//! | `straight-horizontal` | RIGHT | LEFT | line |
//! | `straight-vertical` | BOTTOM | TOP | line |
//! | `left-right` | RIGHT | LEFT | curve through the midpoint |
//! | `top-bottom` | BOTTOM | TOP | curve through the midpoint |
//! | `left-left` | LEFT | LEFT | loop bulging left |
//! | `right-right` | RIGHT | RIGHT | loop bulging right |
//! | `top-top` | TOP | TOP | loop bulging up |
//! | `bottom-bottom` | BOTTOM | BOTTOM | loop bulging down |
//!
//! A border letter in the anchor string overrides the table for that end.
//! Once anchors are resolved, [`Route`] holds the pixel geometry of the
//! edge: its anchors, the control point of curved kinds and the path.

use std::fmt::Write as _;

use serde::Deserialize;

use gridchart_core::{
    anchor::{AnchorDescriptor, Border},
    color::Color,
    geometry::{Bounds, Point},
};

use crate::element::Endpoint;

/// Length of the straight stub leaving a node border before a curve starts.
///
/// Matches the arrowhead length so markers sit on a straight segment.
pub const STUB_LENGTH: f32 = 8.0;

/// Which of the two endpoints passed to the edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeEnd {
    /// The first endpoint, left of the dash in the anchor string
    Origin,
    /// The second endpoint, right of the dash
    Destination,
}

/// Routing kind of an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EdgeLayout {
    /// Horizontal when both endpoints share a row, vertical otherwise
    #[default]
    Auto,
    #[serde(alias = "vertical")]
    StraightVertical,
    #[serde(alias = "horizontal")]
    StraightHorizontal,
    TopBottom,
    LeftRight,
    TopTop,
    BottomBottom,
    LeftLeft,
    RightRight,
}

impl EdgeLayout {
    /// Resolves `Auto` from the endpoints' rows; other kinds are kept.
    pub fn resolve(self, same_row: bool) -> Self {
        match self {
            Self::Auto if same_row => Self::StraightHorizontal,
            Self::Auto => Self::StraightVertical,
            layout => layout,
        }
    }

    pub fn is_curved(self) -> bool {
        !matches!(
            self,
            Self::Auto | Self::StraightVertical | Self::StraightHorizontal
        )
    }

    /// True for kinds whose ends are ordered by column rather than row.
    pub fn is_horizontal(self) -> bool {
        matches!(
            self,
            Self::StraightHorizontal | Self::LeftRight | Self::LeftLeft | Self::RightRight
        )
    }

    /// Default borders of the (left/top, right/bottom) ends.
    ///
    /// `Auto` must be resolved first; it is treated as straight vertical.
    pub fn borders(self) -> (Border, Border) {
        match self {
            Self::StraightHorizontal | Self::LeftRight => (Border::Right, Border::Left),
            Self::Auto | Self::StraightVertical | Self::TopBottom => (Border::Bottom, Border::Top),
            Self::LeftLeft => (Border::Left, Border::Left),
            Self::RightRight => (Border::Right, Border::Right),
            Self::TopTop => (Border::Top, Border::Top),
            Self::BottomBottom => (Border::Bottom, Border::Bottom),
        }
    }

    /// Whether the ends must sit in different columns (horizontal crossing)
    /// or different rows (vertical crossing) for the kind to be drawable.
    pub(crate) fn requires_distinct_axis(self) -> bool {
        matches!(
            self,
            Self::StraightHorizontal
                | Self::StraightVertical
                | Self::LeftRight
                | Self::TopBottom
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::StraightVertical => "straight-vertical",
            Self::StraightHorizontal => "straight-horizontal",
            Self::TopBottom => "top-bottom",
            Self::LeftRight => "left-right",
            Self::TopTop => "top-top",
            Self::BottomBottom => "bottom-bottom",
            Self::LeftLeft => "left-left",
            Self::RightRight => "right-right",
        }
    }
}

/// Declaration of an edge, passed to [`Chart::add_edge`](crate::Chart::add_edge).
///
/// ```
/// use gridchart::edge::{EdgeLayout, EdgeSpec};
///
/// let spec = EdgeSpec::new("b0.4->t")
///     .with_text("calls")
///     .with_layout(EdgeLayout::TopBottom)
///     .with_origin_order(2.0);
/// assert_eq!(spec.anchor(), "b0.4->t");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeSpec {
    anchor: String,
    text: String,
    color: Color,
    layout: EdgeLayout,
    origin_order: Option<f32>,
    destination_order: Option<f32>,
}

impl Default for EdgeSpec {
    fn default() -> Self {
        Self::new("-")
    }
}

impl EdgeSpec {
    /// Creates a black, unlabeled, automatically laid out edge.
    pub fn new(anchor: impl Into<String>) -> Self {
        Self {
            anchor: anchor.into(),
            text: String::new(),
            color: Color::default(),
            layout: EdgeLayout::default(),
            origin_order: None,
            destination_order: None,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_layout(mut self, layout: EdgeLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Rank of the origin end among the edges sharing its border; lower
    /// ranks are placed left or top.
    pub fn with_origin_order(mut self, order: f32) -> Self {
        self.origin_order = Some(order);
        self
    }

    /// Rank of the destination end among the edges sharing its border.
    pub fn with_destination_order(mut self, order: f32) -> Self {
        self.destination_order = Some(order);
        self
    }

    pub fn anchor(&self) -> &str {
        &self.anchor
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn layout(&self) -> EdgeLayout {
        self.layout
    }

    pub fn order(&self, end: EdgeEnd) -> Option<f32> {
        match end {
            EdgeEnd::Origin => self.origin_order,
            EdgeEnd::Destination => self.destination_order,
        }
    }
}

/// One end of a registered edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeAttachment {
    endpoint: Endpoint,
    end: EdgeEnd,
    border: Border,
    arrow: bool,
}

impl EdgeAttachment {
    pub(crate) fn new(endpoint: Endpoint, end: EdgeEnd, border: Border, arrow: bool) -> Self {
        Self {
            endpoint,
            end,
            border,
            arrow,
        }
    }

    pub fn endpoint(&self) -> Endpoint {
        self.endpoint
    }

    /// Which endpoint of the declaration this is
    pub fn end(&self) -> EdgeEnd {
        self.end
    }

    pub fn border(&self) -> Border {
        self.border
    }

    pub fn has_arrow(&self) -> bool {
        self.arrow
    }
}

/// A registered edge.
///
/// Ends are stored in layout order: `first` is the left (horizontal kinds)
/// or top (vertical kinds) end.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    descriptor: AnchorDescriptor,
    text: String,
    color: Color,
    layout: EdgeLayout,
    first: EdgeAttachment,
    second: EdgeAttachment,
}

impl Edge {
    pub(crate) fn new(
        descriptor: AnchorDescriptor,
        spec: &EdgeSpec,
        layout: EdgeLayout,
        first: EdgeAttachment,
        second: EdgeAttachment,
    ) -> Self {
        Self {
            descriptor,
            text: spec.text.clone(),
            color: spec.color,
            layout,
            first,
            second,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// The resolved layout kind, never `Auto`
    pub fn layout(&self) -> EdgeLayout {
        self.layout
    }

    pub fn is_dashed(&self) -> bool {
        self.descriptor.is_dashed()
    }

    /// Left or top end
    pub fn first(&self) -> &EdgeAttachment {
        &self.first
    }

    /// Right or bottom end
    pub fn second(&self) -> &EdgeAttachment {
        &self.second
    }

    /// The end declared as `end`
    pub fn attachment(&self, end: EdgeEnd) -> &EdgeAttachment {
        if self.first.end == end {
            &self.first
        } else {
            &self.second
        }
    }
}

/// An SVG path command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    QuadTo { control: Point, to: Point },
}

/// A resolved anchor: pixel position plus the border it sits on, if the
/// endpoint is a node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteEnd {
    point: Point,
    border: Option<Border>,
}

impl RouteEnd {
    pub fn new(point: Point, border: Option<Border>) -> Self {
        Self { point, border }
    }

    pub fn point(&self) -> Point {
        self.point
    }

    pub fn border(&self) -> Option<Border> {
        self.border
    }

    /// End of the straight stub leaving the border; the anchor itself for
    /// waypoints.
    fn stub(&self) -> Point {
        match self.border {
            Some(border) => {
                let (nx, ny) = border.outward_normal();
                Point::new(
                    self.point.x() + nx * STUB_LENGTH,
                    self.point.y() + ny * STUB_LENGTH,
                )
            }
            None => self.point,
        }
    }
}

/// Pixel geometry of an edge after anchor allocation.
///
/// ```
/// use gridchart::edge::{EdgeLayout, Route, RouteEnd};
/// use gridchart_core::{anchor::Border, geometry::Point};
///
/// let route = Route::new(
///     EdgeLayout::LeftLeft,
///     RouteEnd::new(Point::new(-75.0, 0.0), Some(Border::Left)),
///     RouteEnd::new(Point::new(-75.0, 140.0), Some(Border::Left)),
/// );
///
/// let control = route.control().unwrap();
/// assert_eq!(control.x(), -145.0);
/// assert_eq!(control.y(), 70.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Route {
    layout: EdgeLayout,
    start: RouteEnd,
    end: RouteEnd,
    control: Option<Point>,
}

impl Route {
    /// Builds the route between the first and second resolved anchors.
    pub fn new(layout: EdgeLayout, start: RouteEnd, end: RouteEnd) -> Self {
        let control = layout
            .is_curved()
            .then(|| Self::control_point(layout, start.point, end.point));

        Self {
            layout,
            start,
            end,
            control,
        }
    }

    /// Control point of a curved kind.
    ///
    /// Between kinds use the true midpoint (a symmetric S-curve). Loop-back
    /// kinds push the midpoint past the outermost anchor by half the span
    /// of the anchors along the other axis.
    fn control_point(layout: EdgeLayout, a: Point, b: Point) -> Point {
        let mid = a.midpoint(b);
        let dx = (a.x() - b.x()).abs();
        let dy = (a.y() - b.y()).abs();

        match layout {
            EdgeLayout::LeftLeft => mid.with_x(a.x().min(b.x()) - dy / 2.0),
            EdgeLayout::RightRight => mid.with_x(a.x().max(b.x()) + dy / 2.0),
            EdgeLayout::TopTop => mid.with_y(a.y().min(b.y()) - dx / 2.0),
            EdgeLayout::BottomBottom => mid.with_y(a.y().max(b.y()) + dx / 2.0),
            _ => mid,
        }
    }

    pub fn layout(&self) -> EdgeLayout {
        self.layout
    }

    /// Anchor on the first (left/top) end
    pub fn start(&self) -> Point {
        self.start.point
    }

    /// Anchor on the second (right/bottom) end
    pub fn end(&self) -> Point {
        self.end.point
    }

    /// Curve control point; `None` for straight kinds
    pub fn control(&self) -> Option<Point> {
        self.control
    }

    /// Label position: the midpoint of the resolved anchors.
    pub fn center(&self) -> Point {
        self.start.point.midpoint(self.end.point)
    }

    /// Box around the anchors and the control point.
    pub fn bounds(&self) -> Bounds {
        Bounds::from_points(
            [self.start.point, self.end.point]
                .into_iter()
                .chain(self.control),
        )
    }

    /// Path commands from the first anchor to the second.
    ///
    /// Straight kinds are a single segment. Curved kinds leave each border
    /// on a short stub, then join the stubs with two quadratic curves
    /// meeting at the control point.
    pub fn commands(&self) -> Vec<PathCommand> {
        let Some(control) = self.control else {
            return vec![
                PathCommand::MoveTo(self.start.point),
                PathCommand::LineTo(self.end.point),
            ];
        };

        let stub_start = self.start.stub();
        let stub_end = self.end.stub();

        let (first_control, second_control) = if self.layout.is_horizontal() {
            (
                Point::new(control.x(), stub_start.y()),
                Point::new(control.x(), stub_end.y()),
            )
        } else {
            (
                Point::new(stub_start.x(), control.y()),
                Point::new(stub_end.x(), control.y()),
            )
        };

        vec![
            PathCommand::MoveTo(self.start.point),
            PathCommand::LineTo(stub_start),
            PathCommand::QuadTo {
                control: first_control,
                to: control,
            },
            PathCommand::QuadTo {
                control: second_control,
                to: stub_end,
            },
            PathCommand::LineTo(self.end.point),
        ]
    }

    /// SVG path data for [`Route::commands`].
    pub fn to_path_data(&self) -> String {
        let mut data = String::new();
        for command in self.commands() {
            if !data.is_empty() {
                data.push(' ');
            }
            // Writing to a String cannot fail
            let _ = match command {
                PathCommand::MoveTo(p) => write!(data, "M {} {}", p.x(), p.y()),
                PathCommand::LineTo(p) => write!(data, "L {} {}", p.x(), p.y()),
                PathCommand::QuadTo { control, to } => write!(
                    data,
                    "Q {} {} {} {}",
                    control.x(),
                    control.y(),
                    to.x(),
                    to.y()
                ),
            };
        }
        data
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    fn node_end(x: f32, y: f32, border: Border) -> RouteEnd {
        RouteEnd::new(Point::new(x, y), Some(border))
    }

    #[test]
    fn test_auto_layout_resolution() {
        assert_eq!(EdgeLayout::Auto.resolve(true), EdgeLayout::StraightHorizontal);
        assert_eq!(EdgeLayout::Auto.resolve(false), EdgeLayout::StraightVertical);
        assert_eq!(EdgeLayout::TopTop.resolve(true), EdgeLayout::TopTop);
    }

    #[test]
    fn test_layout_borders() {
        assert_eq!(EdgeLayout::StraightHorizontal.borders(), (Border::Right, Border::Left));
        assert_eq!(EdgeLayout::TopBottom.borders(), (Border::Bottom, Border::Top));
        assert_eq!(EdgeLayout::RightRight.borders(), (Border::Right, Border::Right));
        assert!(EdgeLayout::LeftLeft.is_horizontal());
        assert!(!EdgeLayout::BottomBottom.is_horizontal());
    }

    #[test]
    fn test_layout_deserialize_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            layout: EdgeLayout,
        }

        let parsed: Wrapper = toml::from_str(r#"layout = "bottom-bottom""#).unwrap();
        assert_eq!(parsed.layout, EdgeLayout::BottomBottom);

        let parsed: Wrapper = toml::from_str(r#"layout = "horizontal""#).unwrap();
        assert_eq!(parsed.layout, EdgeLayout::StraightHorizontal);

        assert!(toml::from_str::<Wrapper>(r#"layout = "diagonal""#).is_err());
    }

    #[test]
    fn test_straight_route() {
        let route = Route::new(
            EdgeLayout::StraightHorizontal,
            node_end(75.0, 0.0, Border::Right),
            node_end(325.0, 0.0, Border::Left),
        );

        assert_eq!(route.control(), None);
        assert_eq!(route.to_path_data(), "M 75 0 L 325 0");
        assert_approx_eq!(f32, route.center().x(), 200.0);
    }

    #[test]
    fn test_between_control_is_midpoint() {
        let route = Route::new(
            EdgeLayout::TopBottom,
            node_end(0.0, 20.0, Border::Bottom),
            node_end(200.0, 120.0, Border::Top),
        );

        let control = route.control().unwrap();
        assert_approx_eq!(f32, control.x(), 100.0);
        assert_approx_eq!(f32, control.y(), 70.0);
    }

    #[test]
    fn test_loop_back_controls() {
        let a = Point::new(0.0, -20.0);
        let b = Point::new(400.0, -20.0);

        let top = Route::new(
            EdgeLayout::TopTop,
            RouteEnd::new(a, Some(Border::Top)),
            RouteEnd::new(b, Some(Border::Top)),
        );
        let control = top.control().unwrap();
        assert_approx_eq!(f32, control.x(), 200.0);
        assert_approx_eq!(f32, control.y(), -220.0);

        let right = Route::new(
            EdgeLayout::RightRight,
            node_end(75.0, 0.0, Border::Right),
            node_end(275.0, 140.0, Border::Right),
        );
        let control = right.control().unwrap();
        assert_approx_eq!(f32, control.x(), 345.0);
        assert_approx_eq!(f32, control.y(), 70.0);
    }

    #[test]
    fn test_curved_commands_use_stubs() {
        let route = Route::new(
            EdgeLayout::LeftLeft,
            node_end(-75.0, 0.0, Border::Left),
            node_end(-75.0, 140.0, Border::Left),
        );

        let commands = route.commands();
        assert_eq!(commands.len(), 5);
        assert_eq!(commands[1], PathCommand::LineTo(Point::new(-83.0, 0.0)));
        assert_eq!(
            commands[2],
            PathCommand::QuadTo {
                control: Point::new(-145.0, 0.0),
                to: Point::new(-145.0, 70.0),
            }
        );
        assert_eq!(
            commands[3],
            PathCommand::QuadTo {
                control: Point::new(-145.0, 140.0),
                to: Point::new(-83.0, 140.0),
            }
        );
        assert_eq!(commands[4], PathCommand::LineTo(Point::new(-75.0, 140.0)));
    }

    #[test]
    fn test_waypoint_end_has_no_stub() {
        let route = Route::new(
            EdgeLayout::TopBottom,
            node_end(0.0, 20.0, Border::Bottom),
            RouteEnd::new(Point::new(100.0, 140.0), None),
        );

        let commands = route.commands();
        assert_eq!(
            commands[3],
            PathCommand::QuadTo {
                control: Point::new(100.0, 80.0),
                to: Point::new(100.0, 140.0),
            }
        );
    }

    #[test]
    fn test_route_bounds_include_control() {
        let route = Route::new(
            EdgeLayout::BottomBottom,
            node_end(0.0, 20.0, Border::Bottom),
            node_end(200.0, 20.0, Border::Bottom),
        );

        let bounds = route.bounds();
        assert_approx_eq!(f32, bounds.min_y(), 20.0);
        assert_approx_eq!(f32, bounds.max_y(), 120.0);
        assert_approx_eq!(f32, bounds.width(), 200.0);
    }

    #[test]
    fn test_edge_spec_defaults() {
        let spec = EdgeSpec::default();
        assert_eq!(spec.anchor(), "-");
        assert_eq!(spec.layout(), EdgeLayout::Auto);
        assert_eq!(spec.order(EdgeEnd::Origin), None);
        assert_eq!(spec.color(), Color::default());
    }
}
