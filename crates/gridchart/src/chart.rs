//! The chart arena.
//!
//! A [`Chart`] owns every element of a diagram and hands out stable handles
//! ([`NodeId`], [`WaypointId`], [`EdgeId`], [`ClusterId`]). Construction and
//! querying are two phases: elements are added first, then geometry is
//! queried. Registering an edge records anchor requests on the allocators
//! of its endpoint nodes; the per-border ordering is resolved lazily on the
//! first geometry query.
//!
//! ```
//! use gridchart::{Chart, grid::GridConfig, node::Node, edge::EdgeSpec, edge::EdgeEnd};
//!
//! let mut chart = Chart::new(GridConfig::default())?;
//! let a = chart.add_node(Node::new(0.0, 0.0).with_text("A"));
//! let b = chart.add_node(Node::new(2.0, 0.0).with_text("B"));
//! let edge = chart.add_edge(a, b, EdgeSpec::new("->"))?;
//!
//! // a lone edge attaches to the middle of the facing borders
//! let start = chart.anchor_point(edge, EdgeEnd::Origin)?;
//! assert_eq!((start.x(), start.y()), (75.0, 0.0));
//! # Ok::<(), gridchart::ChartError>(())
//! ```

use std::path::Path;

use log::{debug, info, trace};

use gridchart_core::{
    anchor::Border,
    geometry::{Bounds, Insets, Point},
};

use crate::{
    allocator::{AnchorAllocator, AnchorKey, OrderKey},
    cluster::Cluster,
    config::StyleConfig,
    edge::{Edge, EdgeAttachment, EdgeEnd, EdgeSpec, Route, RouteEnd},
    element::{ClusterId, EdgeId, ElementId, Endpoint, NodeId, WaypointId},
    error::ChartError,
    export::{Exporter, svg::SvgBuilder},
    grid::{EdgeOrdering, GridConfig},
    node::{Node, Waypoint},
};

/// Registry of every element of a diagram.
#[derive(Debug)]
pub struct Chart {
    grid: GridConfig,
    waypoints: Vec<Waypoint>,
    nodes: Vec<Node>,
    allocators: Vec<AnchorAllocator>,
    edges: Vec<Edge>,
    clusters: Vec<Cluster>,
}

impl Chart {
    /// Creates an empty chart.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::Configuration`] if a spacing value of `grid` is
    /// not a finite, strictly positive number.
    pub fn new(grid: GridConfig) -> Result<Self, ChartError> {
        grid.validate()?;
        info!(grid:? = grid; "Chart created");

        Ok(Self {
            grid,
            waypoints: Vec::new(),
            nodes: Vec::new(),
            allocators: Vec::new(),
            edges: Vec::new(),
            clusters: Vec::new(),
        })
    }

    pub fn grid(&self) -> &GridConfig {
        &self.grid
    }

    pub fn add_waypoint(&mut self, waypoint: Waypoint) -> WaypointId {
        let id = WaypointId::new(self.waypoints.len());
        debug!(id:% = id, col = waypoint.col(), row = waypoint.row(); "Waypoint added");
        self.waypoints.push(waypoint);
        id
    }

    pub fn add_node(&mut self, node: Node) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        debug!(id:% = id, col = node.col(), row = node.row(), text = node.text(); "Node added");
        self.nodes.push(node);
        self.allocators.push(AnchorAllocator::new());
        id
    }

    /// Connects two endpoints.
    ///
    /// The anchor string is parsed, the layout kind resolved, and each end
    /// registered on the border it attaches to.
    ///
    /// # Errors
    ///
    /// - [`ChartError::Parse`] if the anchor string is malformed.
    /// - [`ChartError::Configuration`] if an endpoint is not part of this
    ///   chart, or if the layout needs the endpoints in different columns
    ///   (`straight-horizontal`, `left-right`) or rows (`straight-vertical`,
    ///   `top-bottom`) and they are not.
    pub fn add_edge(
        &mut self,
        origin: impl Into<Endpoint>,
        destination: impl Into<Endpoint>,
        spec: EdgeSpec,
    ) -> Result<EdgeId, ChartError> {
        let origin = origin.into();
        let destination = destination.into();

        let (origin_col, origin_row) = self.grid_position(origin)?;
        let (destination_col, destination_row) = self.grid_position(destination)?;

        let descriptor = gridchart_parser::parse_anchor_spec(spec.anchor())
            .map_err(|err| ChartError::new_parse_error(err, spec.anchor()))?;

        let layout = spec.layout().resolve(origin_row == destination_row);
        let horizontal = layout.is_horizontal();

        if layout.requires_distinct_axis() {
            if horizontal && origin_col == destination_col {
                return Err(ChartError::Configuration(format!(
                    "{} edge between {origin} and {destination} needs different columns, both are in column {origin_col}",
                    layout.name()
                )));
            }
            if !horizontal && origin_row == destination_row {
                return Err(ChartError::Configuration(format!(
                    "{} edge between {origin} and {destination} needs different rows, both are in row {origin_row}",
                    layout.name()
                )));
            }
        }

        // Left (or top) end first; on a tie the destination comes first
        let origin_first = if horizontal {
            origin_col < destination_col
        } else {
            origin_row < destination_row
        };

        let (first_border, second_border) = layout.borders();
        let attach = |endpoint: Endpoint, end: EdgeEnd, layout_border: Border| {
            let anchor = match end {
                EdgeEnd::Origin => descriptor.origin(),
                EdgeEnd::Destination => descriptor.destination(),
            };
            EdgeAttachment::new(
                endpoint,
                end,
                anchor.border().unwrap_or(layout_border),
                anchor.has_arrow(),
            )
        };

        let (first, second) = if origin_first {
            (
                attach(origin, EdgeEnd::Origin, first_border),
                attach(destination, EdgeEnd::Destination, second_border),
            )
        } else {
            (
                attach(destination, EdgeEnd::Destination, first_border),
                attach(origin, EdgeEnd::Origin, second_border),
            )
        };

        let id = EdgeId::new(self.edges.len());
        for (attachment, other) in [(first, second.endpoint()), (second, first.endpoint())] {
            let Endpoint::Node(node) = attachment.endpoint() else {
                continue;
            };

            let anchor = match attachment.end() {
                EdgeEnd::Origin => descriptor.origin(),
                EdgeEnd::Destination => descriptor.destination(),
            };
            let order = match spec.order(attachment.end()) {
                Some(rank) => OrderKey::Rank(rank),
                None => self.ordering_key(node, attachment.border(), other)?,
            };

            self.allocators[node.index()].register(
                attachment.border(),
                AnchorKey::new(id, attachment.end()),
                order,
                anchor.explicit_position(),
            );
        }

        debug!(
            id:% = id,
            origin:% = origin,
            destination:% = destination,
            anchor = spec.anchor(),
            layout = layout.name();
            "Edge added"
        );

        self.edges
            .push(Edge::new(descriptor, &spec, layout, first, second));
        Ok(id)
    }

    /// Groups existing elements.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::Configuration`] if the cluster has no children
    /// or a child is not part of this chart.
    pub fn add_cluster(&mut self, cluster: Cluster) -> Result<ClusterId, ChartError> {
        if cluster.children().is_empty() {
            return Err(ChartError::Configuration(format!(
                "cluster `{}` has no children",
                cluster.text()
            )));
        }

        for child in cluster.children() {
            self.check_element(*child)?;
        }

        let id = ClusterId::new(self.clusters.len());
        debug!(id:% = id, children = cluster.children().len(), text = cluster.text(); "Cluster added");
        self.clusters.push(cluster);
        Ok(id)
    }

    pub fn node(&self, id: NodeId) -> Result<&Node, ChartError> {
        self.nodes.get(id.index()).ok_or_else(|| unknown(id))
    }

    pub fn waypoint(&self, id: WaypointId) -> Result<&Waypoint, ChartError> {
        self.waypoints.get(id.index()).ok_or_else(|| unknown(id))
    }

    pub fn edge(&self, id: EdgeId) -> Result<&Edge, ChartError> {
        self.edges.get(id.index()).ok_or_else(|| unknown(id))
    }

    pub fn cluster(&self, id: ClusterId) -> Result<&Cluster, ChartError> {
        self.clusters.get(id.index()).ok_or_else(|| unknown(id))
    }

    /// Nodes in creation order
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeId::new(i), node))
    }

    /// Waypoints in creation order
    pub fn waypoints(&self) -> impl Iterator<Item = (WaypointId, &Waypoint)> {
        self.waypoints
            .iter()
            .enumerate()
            .map(|(i, waypoint)| (WaypointId::new(i), waypoint))
    }

    /// Edges in creation order
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &Edge)> {
        self.edges
            .iter()
            .enumerate()
            .map(|(i, edge)| (EdgeId::new(i), edge))
    }

    /// Clusters in creation order
    pub fn clusters(&self) -> impl Iterator<Item = (ClusterId, &Cluster)> {
        self.clusters
            .iter()
            .enumerate()
            .map(|(i, cluster)| (ClusterId::new(i), cluster))
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
            && self.waypoints.is_empty()
            && self.edges.is_empty()
            && self.clusters.is_empty()
    }

    /// Pixel centre of an endpoint.
    pub fn endpoint_center(&self, endpoint: Endpoint) -> Result<Point, ChartError> {
        match endpoint {
            Endpoint::Node(id) => Ok(self.node(id)?.center(&self.grid)),
            Endpoint::Waypoint(id) => Ok(self.waypoint(id)?.center(&self.grid)),
        }
    }

    /// Midpoint of a node border; a waypoint's only point for waypoints.
    pub fn border_center(&self, endpoint: Endpoint, border: Border) -> Result<Point, ChartError> {
        match endpoint {
            Endpoint::Node(id) => Ok(self.node(id)?.border_center(border, &self.grid)),
            Endpoint::Waypoint(id) => Ok(self.waypoint(id)?.center(&self.grid)),
        }
    }

    /// Edge ends attached to a node border, in placement order.
    pub fn border_edges(&self, node: NodeId, border: Border) -> Result<Vec<AnchorKey>, ChartError> {
        self.node(node)?;
        Ok(self.allocators[node.index()].ordered(border))
    }

    /// Exact pixel position where one end of an edge touches its endpoint.
    ///
    /// An explicit position from the anchor string is interpolated along
    /// the border; otherwise the end is spread by its place among all ends
    /// registered on that border.
    pub fn anchor_point(&self, edge_id: EdgeId, end: EdgeEnd) -> Result<Point, ChartError> {
        let edge = self.edge(edge_id)?;
        let attachment = edge.attachment(end);

        match attachment.endpoint() {
            Endpoint::Waypoint(id) => Ok(self.waypoint(id)?.center(&self.grid)),
            Endpoint::Node(id) => {
                let node = self.node(id)?;
                let fraction = self.allocators[id.index()]
                    .fraction(attachment.border(), AnchorKey::new(edge_id, end))
                    .ok_or_else(|| {
                        ChartError::Configuration(format!(
                            "{edge_id} is not attached to the {} border of {id}",
                            attachment.border()
                        ))
                    })?;

                let point = node.point_on_border(attachment.border(), fraction, &self.grid);
                trace!(edge:% = edge_id, end:? = end, fraction = fraction, point:? = point; "Anchor resolved");
                Ok(point)
            }
        }
    }

    /// Resolved geometry of an edge.
    pub fn route(&self, edge_id: EdgeId) -> Result<Route, ChartError> {
        let edge = self.edge(edge_id)?;

        let route_end = |attachment: &EdgeAttachment| -> Result<RouteEnd, ChartError> {
            let point = self.anchor_point(edge_id, attachment.end())?;
            let border = match attachment.endpoint() {
                Endpoint::Node(_) => Some(attachment.border()),
                Endpoint::Waypoint(_) => None,
            };
            Ok(RouteEnd::new(point, border))
        };

        let route = Route::new(
            edge.layout(),
            route_end(edge.first())?,
            route_end(edge.second())?,
        );
        trace!(edge:% = edge_id, route:? = route; "Route resolved");
        Ok(route)
    }

    /// Bounds of any element.
    ///
    /// Nodes return their footprint, waypoints a degenerate box, edges the
    /// box around their anchors and control point, clusters the padded
    /// union of their children.
    pub fn element_bounds(&self, element: ElementId) -> Result<Bounds, ChartError> {
        match element {
            ElementId::Node(id) => Ok(self.node(id)?.bounds(&self.grid)),
            ElementId::Waypoint(id) => Ok(self.waypoint(id)?.bounds(&self.grid)),
            ElementId::Edge(id) => Ok(self.route(id)?.bounds()),
            ElementId::Cluster(id) => self.cluster_bounds(id),
        }
    }

    /// Union of the children's bounds, padded by the cluster margin, with
    /// a band of `font_size` added on top for a label.
    ///
    /// Children always predate their cluster, so the recursion terminates.
    pub fn cluster_bounds(&self, id: ClusterId) -> Result<Bounds, ChartError> {
        let cluster = self.cluster(id)?;

        let mut bounds = Bounds::empty();
        for child in cluster.children() {
            bounds = bounds.merge(&self.element_bounds(*child)?);
        }

        let margin = self.grid.cluster_margin();
        let top = if cluster.text().is_empty() {
            margin
        } else {
            margin + self.grid.font_size()
        };

        Ok(bounds.add_padding(Insets::new(top, margin, margin, margin)))
    }

    /// Bounds of the whole canvas: every element, padded by the node
    /// spacing. [`Bounds::empty`] for an empty chart.
    pub fn bounds(&self) -> Result<Bounds, ChartError> {
        if self.is_empty() {
            return Ok(Bounds::empty());
        }

        let elements = self
            .clusters()
            .map(|(id, _)| ElementId::from(id))
            .chain(self.edges().map(|(id, _)| ElementId::from(id)))
            .chain(self.nodes().map(|(id, _)| ElementId::from(id)))
            .chain(self.waypoints().map(|(id, _)| ElementId::from(id)));

        let mut bounds = Bounds::empty();
        for element in elements {
            bounds = bounds.merge(&self.element_bounds(element)?);
        }

        Ok(bounds.add_padding(self.grid.chart_margin()))
    }

    /// Elements in paint order: clusters, then edges, then nodes, each in
    /// creation order. Waypoints draw nothing.
    pub fn paint_order(&self) -> Vec<ElementId> {
        self.clusters()
            .map(|(id, _)| ElementId::from(id))
            .chain(self.edges().map(|(id, _)| ElementId::from(id)))
            .chain(self.nodes().map(|(id, _)| ElementId::from(id)))
            .collect()
    }

    /// Renders the chart to an SVG string.
    pub fn render_svg(&self, style: &StyleConfig) -> Result<String, ChartError> {
        let mut svg = SvgBuilder::default().with_style(style).build()?;
        let document = svg.render_chart(self)?;
        Ok(document.to_string())
    }

    /// Writes the chart to an SVG file, consuming it.
    pub fn export_svg(self, style: &StyleConfig, path: impl AsRef<Path>) -> Result<(), ChartError> {
        let path = path.as_ref();
        info!(path:? = path; "Exporting chart");

        let mut svg = SvgBuilder::new(path).with_style(style).build()?;
        svg.export_chart(&self)?;
        Ok(())
    }

    fn grid_position(&self, endpoint: Endpoint) -> Result<(f32, f32), ChartError> {
        match endpoint {
            Endpoint::Node(id) => {
                let node = self.node(id)?;
                Ok((node.col(), node.row()))
            }
            Endpoint::Waypoint(id) => {
                let waypoint = self.waypoint(id)?;
                Ok((waypoint.col(), waypoint.row()))
            }
        }
    }

    fn check_element(&self, element: ElementId) -> Result<(), ChartError> {
        match element {
            ElementId::Node(id) => self.node(id).map(|_| ()),
            ElementId::Waypoint(id) => self.waypoint(id).map(|_| ()),
            ElementId::Edge(id) => self.edge(id).map(|_| ()),
            ElementId::Cluster(id) => self.cluster(id).map(|_| ()),
        }
    }

    /// Order key of an edge end without an explicit rank.
    ///
    /// The registration sequence under insertion ordering; under angle
    /// ordering, the signed
    /// angle from the border's outward normal to the direction of the
    /// other endpoint, growing left to right along TOP and BOTTOM and top
    /// to bottom along LEFT and RIGHT.
    fn ordering_key(
        &self,
        node: NodeId,
        border: Border,
        other: Endpoint,
    ) -> Result<OrderKey, ChartError> {
        match self.grid.edge_ordering() {
            EdgeOrdering::Insertion => Ok(OrderKey::Sequence),
            EdgeOrdering::Angle => {
                let from = self.node(node)?.center(&self.grid);
                let to = self.endpoint_center(other)?;
                let direction = to.sub_point(from);

                let (nx, ny) = border.outward_normal();
                let along_normal = direction.x() * nx + direction.y() * ny;
                let along_border = if border.is_vertical() {
                    direction.y()
                } else {
                    direction.x()
                };

                Ok(OrderKey::Angle(along_border.atan2(along_normal)))
            }
        }
    }
}

fn unknown(id: impl std::fmt::Display) -> ChartError {
    ChartError::Configuration(format!("{id} is not part of this chart"))
}
