use hexgrid_core::{HexCoords, Hexside};

use crate::traits::CostBoard;

/// Sentinel value meaning "unreachable" in distance maps.
pub const UNREACHABLE: i32 = i32::MAX;

/// Which way a search travels relative to the real direction of movement.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Out from the start, following edges as they are travelled.
    Forward,
    /// Out from the goal, following edges against their travel direction.
    Backward,
}

impl Direction {
    /// The opposite search direction.
    #[inline]
    pub const fn partner(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        match self {
            Direction::Forward => 0,
            Direction::Backward => 1,
        }
    }
}

/// The hex across `side` from `here` and the cost of the edge between them,
/// taken in the search's direction of travel. `None` for off-board or
/// impassable edges.
///
/// Backward searches walk edges the wrong way round, so the cost is that of
/// moving from the neighbour back into `here`.
#[inline]
pub(crate) fn directed_edge<B: CostBoard>(
    board: &B,
    here: HexCoords,
    side: Hexside,
    direction: Direction,
) -> Option<(HexCoords, i32)> {
    let n = board.neighbour(here, side)?;
    let cost = match direction {
        Direction::Forward => board.edge_cost(here, side),
        Direction::Backward => board.edge_cost(n, side.reversed()),
    };
    (cost >= 0).then_some((n, cost))
}

// ---------------------------------------------------------------------------
// Internal node for priority-queue searches
// ---------------------------------------------------------------------------

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Status {
    Unseen,
    Open,
    Closed,
}

#[derive(Clone, Debug)]
pub(crate) struct Node {
    pub(crate) g: i32,
    /// Hexside leading back towards the search origin.
    pub(crate) parent: Option<Hexside>,
    pub(crate) status: Status,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: UNREACHABLE,
            parent: None,
            status: Status::Unseen,
        }
    }
}

/// Reference into the node array, ordered by `f` for use in `BinaryHeap`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: i32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first.
        other.f.cmp(&self.f).then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
