//! Per-node anchor allocation.
//!
//! Every node owns an [`AnchorAllocator`]: four ordered lists, one per
//! border, of the edge ends attached to that border. An edge end either
//! carries an explicit relative position, or is spread along the border by
//! its place in the border's resolved order:
//!
//! ```text
//! fraction = (index + 1) / (N + 1)
//! ```
//!
//! where `N` counts every end registered on the border and `index` is this
//! end's place among them. No two automatic anchors coincide, and a lone
//! edge lands exactly on the border midpoint.
//!
//! The resolved order sorts by [`OrderKey`]: explicit ranks first, then
//! angles, then registration sequence. Equal keys keep registration order.
//! Sorting is deferred to the first query and cached until the next
//! registration.

use std::{cell::OnceCell, cmp::Ordering};

use log::trace;

use gridchart_core::anchor::Border;

use crate::{edge::EdgeEnd, element::EdgeId};

/// Identifies one end of one edge.
///
/// A self-loop registers both of its ends on the same node, so the edge
/// alone is not enough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnchorKey {
    edge: EdgeId,
    end: EdgeEnd,
}

impl AnchorKey {
    pub fn new(edge: EdgeId, end: EdgeEnd) -> Self {
        Self { edge, end }
    }

    pub fn edge(&self) -> EdgeId {
        self.edge
    }

    pub fn end(&self) -> EdgeEnd {
        self.end
    }
}

/// Sort key of an edge end along its border.
///
/// Keys of different kinds never share a scale: every ranked end comes
/// before every angled one, which come before ends ordered by sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OrderKey {
    /// Caller-given rank
    Rank(f32),
    /// Angle in radians toward the opposite endpoint
    Angle(f32),
    /// Registration sequence on the border
    Sequence,
}

impl OrderKey {
    fn tier(self) -> (u8, f32) {
        match self {
            Self::Rank(rank) => (0, rank),
            Self::Angle(angle) => (1, angle),
            Self::Sequence => (2, 0.0),
        }
    }

    fn compare(self, other: Self) -> Ordering {
        let (tier, value) = self.tier();
        let (other_tier, other_value) = other.tier();
        tier.cmp(&other_tier)
            .then_with(|| value.total_cmp(&other_value))
    }
}

#[derive(Debug, Clone)]
struct Registration {
    key: AnchorKey,
    order: OrderKey,
    position: Option<f32>,
}

/// Edge ends attached to a single border.
#[derive(Debug, Default)]
struct BorderSlots {
    registrations: Vec<Registration>,
    /// Indices into `registrations`, in resolved order
    resolved: OnceCell<Vec<usize>>,
}

impl BorderSlots {
    fn resolved(&self) -> &[usize] {
        self.resolved.get_or_init(|| {
            let mut order: Vec<usize> = (0..self.registrations.len()).collect();
            // Stable sort, so equal keys keep registration order
            order.sort_by(|&a, &b| {
                self.registrations[a]
                    .order
                    .compare(self.registrations[b].order)
            });
            order
        })
    }

    fn find(&self, key: AnchorKey) -> Option<usize> {
        self.registrations
            .iter()
            .position(|registration| registration.key == key)
    }
}

/// Ordered edge lists for the four borders of a node.
#[derive(Debug, Default)]
pub struct AnchorAllocator {
    borders: [BorderSlots; 4],
}

impl AnchorAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches an edge end to `border`.
    ///
    /// An explicit `position` pins the end; it still counts towards `N` and
    /// keeps its place in the resolved order.
    pub fn register(
        &mut self,
        border: Border,
        key: AnchorKey,
        order: OrderKey,
        position: Option<f32>,
    ) {
        let slots = &mut self.borders[border.index()];

        trace!(border:% = border, edge:% = key.edge(), order:? = order, position:? = position; "Anchor registered");

        slots.registrations.push(Registration {
            key,
            order,
            position,
        });
        slots.resolved.take();
    }

    /// Relative position of an edge end along its border, or `None` if the
    /// end is not attached to `border`.
    pub fn fraction(&self, border: Border, key: AnchorKey) -> Option<f32> {
        let slots = &self.borders[border.index()];
        let index = slots.find(key)?;

        if let Some(position) = slots.registrations[index].position {
            return Some(position);
        }

        let resolved = slots.resolved();
        let rank = resolved.iter().position(|&i| i == index)?;
        Some((rank + 1) as f32 / (resolved.len() + 1) as f32)
    }

    /// Edge ends of `border` in resolved order.
    pub fn ordered(&self, border: Border) -> Vec<AnchorKey> {
        let slots = &self.borders[border.index()];
        slots
            .resolved()
            .iter()
            .map(|&index| slots.registrations[index].key)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use proptest::prelude::*;

    use super::*;

    fn key(index: usize) -> AnchorKey {
        AnchorKey::new(EdgeId::new(index), EdgeEnd::Origin)
    }

    #[test]
    fn test_single_edge_is_centered() {
        let mut allocator = AnchorAllocator::new();
        allocator.register(Border::Top, key(0), OrderKey::Sequence, None);

        assert_approx_eq!(f32, allocator.fraction(Border::Top, key(0)).unwrap(), 0.5);
        assert_eq!(allocator.fraction(Border::Bottom, key(0)), None);
    }

    #[test]
    fn test_even_distribution_in_insertion_order() {
        let mut allocator = AnchorAllocator::new();
        for i in 0..3 {
            allocator.register(Border::Bottom, key(i), OrderKey::Sequence, None);
        }

        assert_approx_eq!(f32, allocator.fraction(Border::Bottom, key(0)).unwrap(), 0.25);
        assert_approx_eq!(f32, allocator.fraction(Border::Bottom, key(1)).unwrap(), 0.5);
        assert_approx_eq!(f32, allocator.fraction(Border::Bottom, key(2)).unwrap(), 0.75);
    }

    #[test]
    fn test_explicit_order_overrides_insertion() {
        let mut allocator = AnchorAllocator::new();
        allocator.register(Border::Left, key(0), OrderKey::Rank(5.0), None);
        allocator.register(Border::Left, key(1), OrderKey::Rank(1.0), None);

        assert_eq!(allocator.ordered(Border::Left), vec![key(1), key(0)]);
        assert_approx_eq!(f32, allocator.fraction(Border::Left, key(1)).unwrap(), 1.0 / 3.0);
    }

    #[test]
    fn test_equal_keys_keep_registration_order() {
        let mut allocator = AnchorAllocator::new();
        allocator.register(Border::Right, key(0), OrderKey::Rank(0.0), None);
        allocator.register(Border::Right, key(1), OrderKey::Rank(0.0), None);
        allocator.register(Border::Right, key(2), OrderKey::Rank(0.0), None);

        assert_eq!(allocator.ordered(Border::Right), vec![key(0), key(1), key(2)]);
    }

    #[test]
    fn test_explicit_position_counts_towards_distribution() {
        let mut allocator = AnchorAllocator::new();
        allocator.register(Border::Bottom, key(0), OrderKey::Sequence, Some(0.1));
        allocator.register(Border::Bottom, key(1), OrderKey::Sequence, None);
        allocator.register(Border::Bottom, key(2), OrderKey::Sequence, None);

        assert_approx_eq!(f32, allocator.fraction(Border::Bottom, key(0)).unwrap(), 0.1);
        assert_approx_eq!(f32, allocator.fraction(Border::Bottom, key(1)).unwrap(), 0.5);
        assert_approx_eq!(f32, allocator.fraction(Border::Bottom, key(2)).unwrap(), 0.75);
        assert_eq!(
            allocator.ordered(Border::Bottom),
            vec![key(0), key(1), key(2)]
        );
    }

    #[test]
    fn test_ranks_precede_angles() {
        let mut allocator = AnchorAllocator::new();
        allocator.register(Border::Top, key(0), OrderKey::Angle(-1.2), None);
        allocator.register(Border::Top, key(1), OrderKey::Rank(1.0), None);
        allocator.register(Border::Top, key(2), OrderKey::Angle(0.3), None);
        allocator.register(Border::Top, key(3), OrderKey::Rank(-4.0), None);

        assert_eq!(
            allocator.ordered(Border::Top),
            vec![key(3), key(1), key(0), key(2)]
        );
    }

    #[test]
    fn test_registration_invalidates_cached_order() {
        let mut allocator = AnchorAllocator::new();
        allocator.register(Border::Top, key(0), OrderKey::Sequence, None);
        assert_approx_eq!(f32, allocator.fraction(Border::Top, key(0)).unwrap(), 0.5);

        allocator.register(Border::Top, key(1), OrderKey::Sequence, None);
        assert_approx_eq!(f32, allocator.fraction(Border::Top, key(0)).unwrap(), 1.0 / 3.0);
    }

    #[test]
    fn test_self_loop_ends_are_distinct() {
        let mut allocator = AnchorAllocator::new();
        let origin = AnchorKey::new(EdgeId::new(0), EdgeEnd::Origin);
        let destination = AnchorKey::new(EdgeId::new(0), EdgeEnd::Destination);
        allocator.register(Border::Right, origin, OrderKey::Sequence, None);
        allocator.register(Border::Right, destination, OrderKey::Sequence, None);

        assert_approx_eq!(f32, allocator.fraction(Border::Right, origin).unwrap(), 1.0 / 3.0);
        assert_approx_eq!(f32, allocator.fraction(Border::Right, destination).unwrap(), 2.0 / 3.0);
    }

    proptest! {
        /// Automatic anchors are strictly increasing and symmetric about the
        /// border midpoint.
        #[test]
        fn prop_distribution_is_monotonic_and_symmetric(
            orders in prop::collection::vec(prop::option::of(-100.0f32..100.0), 1..12),
        ) {
            let mut allocator = AnchorAllocator::new();
            for (i, order) in orders.iter().enumerate() {
                allocator.register(
                    Border::Bottom,
                    key(i),
                    order.map_or(OrderKey::Sequence, OrderKey::Rank),
                    None,
                );
            }

            let fractions: Vec<f32> = allocator
                .ordered(Border::Bottom)
                .into_iter()
                .map(|k| allocator.fraction(Border::Bottom, k).unwrap())
                .collect();

            prop_assert_eq!(fractions.len(), orders.len());
            for pair in fractions.windows(2) {
                prop_assert!(pair[0] < pair[1]);
            }
            for (a, b) in fractions.iter().zip(fractions.iter().rev()) {
                prop_assert!((a + b - 1.0).abs() < 1e-5);
            }
        }
    }
}
