//! Stable handles to the elements stored in a [`Chart`](crate::Chart).
//!
//! Handles are plain indices into the chart's registries. Edges and clusters
//! refer to other elements only through handles, never by reference, so the
//! chart is the single owner of every element.

use std::fmt;

macro_rules! element_handle {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(usize);

        impl $name {
            pub(crate) fn new(index: usize) -> Self {
                Self(index)
            }

            /// Position in the chart registry, which is also creation order
            pub fn index(self) -> usize {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "#{}"), self.0)
            }
        }
    };
}

element_handle!(
    /// Handle to a [`Node`](crate::node::Node).
    NodeId,
    "node"
);
element_handle!(
    /// Handle to a [`Waypoint`](crate::node::Waypoint).
    WaypointId,
    "point"
);
element_handle!(
    /// Handle to an [`Edge`](crate::edge::Edge).
    EdgeId,
    "edge"
);
element_handle!(
    /// Handle to a [`Cluster`](crate::cluster::Cluster).
    ClusterId,
    "cluster"
);

/// Something an edge can connect to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Node(NodeId),
    Waypoint(WaypointId),
}

impl From<NodeId> for Endpoint {
    fn from(id: NodeId) -> Self {
        Self::Node(id)
    }
}

impl From<WaypointId> for Endpoint {
    fn from(id: WaypointId) -> Self {
        Self::Waypoint(id)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Node(id) => id.fmt(f),
            Self::Waypoint(id) => id.fmt(f),
        }
    }
}

/// Any chart element; the child type of a cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementId {
    Node(NodeId),
    Waypoint(WaypointId),
    Edge(EdgeId),
    Cluster(ClusterId),
}

impl From<NodeId> for ElementId {
    fn from(id: NodeId) -> Self {
        Self::Node(id)
    }
}

impl From<WaypointId> for ElementId {
    fn from(id: WaypointId) -> Self {
        Self::Waypoint(id)
    }
}

impl From<EdgeId> for ElementId {
    fn from(id: EdgeId) -> Self {
        Self::Edge(id)
    }
}

impl From<ClusterId> for ElementId {
    fn from(id: ClusterId) -> Self {
        Self::Cluster(id)
    }
}

impl From<Endpoint> for ElementId {
    fn from(endpoint: Endpoint) -> Self {
        match endpoint {
            Endpoint::Node(id) => Self::Node(id),
            Endpoint::Waypoint(id) => Self::Waypoint(id),
        }
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Node(id) => id.fmt(f),
            Self::Waypoint(id) => id.fmt(f),
            Self::Edge(id) => id.fmt(f),
            Self::Cluster(id) => id.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_display() {
        assert_eq!(NodeId::new(3).to_string(), "node#3");
        assert_eq!(ElementId::from(ClusterId::new(0)).to_string(), "cluster#0");
        assert_eq!(Endpoint::from(WaypointId::new(1)).to_string(), "point#1");
    }

    #[test]
    fn test_endpoint_into_element() {
        let endpoint = Endpoint::from(NodeId::new(2));
        assert_eq!(ElementId::from(endpoint), ElementId::Node(NodeId::new(2)));
    }
}
