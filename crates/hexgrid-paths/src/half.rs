//! One directional leg of the bidirectional search.

use std::collections::BinaryHeap;

use hexgrid_core::{HexCoords, HexSize, Hexside};

use crate::node::{Direction, Node, NodeRef, Status, directed_edge};
use crate::path::DirectedPath;
use crate::step::PathStep;
use crate::traits::{CostBoard, Heuristic};

/// A new best-known complete path, found where the two halves meet.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BestSoFar {
    /// Hex closed by both halves.
    pub meeting: HexCoords,
    /// Total cost of the path through `meeting`.
    pub cost: i32,
}

/// What a single [`HalfSearch::step`] did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum StepOutcome {
    /// The frontier was empty.
    Exhausted,
    /// The popped entry was out of date and was dropped.
    Stale,
    /// A hex was closed, and expanded unless `pruned`.
    Closed {
        meeting: Option<BestSoFar>,
        pruned: bool,
    },
}

/// A best-first search from one endpoint towards the other.
///
/// The forward half grows out of the start along edges as they are
/// travelled; the backward half grows out of the goal against them. The
/// coordinator owns both and passes each one its partner for every step.
#[derive(Debug)]
pub(crate) struct HalfSearch {
    direction: Direction,
    /// Endpoint this half grows from.
    origin: HexCoords,
    /// Endpoint this half grows towards.
    target: HexCoords,
    size: HexSize,
    nodes: Vec<Node>,
    open: BinaryHeap<NodeRef>,
    closed: usize,
}

impl HalfSearch {
    /// A half with its frontier seeded by `origin` at cost 0.
    pub(crate) fn new<B: CostBoard, H: Heuristic>(
        board: &B,
        heuristic: &H,
        direction: Direction,
        origin: HexCoords,
        target: HexCoords,
    ) -> Self {
        let size = board.size();
        let mut half = Self {
            direction,
            origin,
            target,
            size,
            nodes: vec![Node::default(); size.len()],
            open: BinaryHeap::new(),
            closed: 0,
        };
        if let Some(idx) = size.index_of(origin) {
            let node = &mut half.nodes[idx];
            node.g = 0;
            node.status = Status::Open;
            let f = half.estimate(heuristic, origin);
            half.open.push(NodeRef { idx, f });
        }
        half
    }

    /// Number of hexes closed so far.
    #[inline]
    pub(crate) fn closed_count(&self) -> usize {
        self.closed
    }

    /// Heuristic distance left from `c` to this half's target, measured in
    /// the direction of travel.
    #[inline]
    fn estimate<H: Heuristic>(&self, heuristic: &H, c: HexCoords) -> i32 {
        match self.direction {
            Direction::Forward => heuristic.estimate(c, self.target),
            Direction::Backward => heuristic.estimate(self.target, c),
        }
    }

    /// Smallest `f` on the frontier; a lower bound on any path this half
    /// has yet to close.
    #[inline]
    pub(crate) fn frontier_minimum(&self) -> Option<i32> {
        self.open.peek().map(|r| r.f)
    }

    /// Whether stepping this half can no longer improve on `best`.
    #[inline]
    pub(crate) fn is_finished(&self, best: i32) -> bool {
        match self.frontier_minimum() {
            None => true,
            Some(f) => f >= best,
        }
    }

    /// Final `g` of `c` if this half has closed it.
    #[inline]
    pub(crate) fn closed_cost(&self, c: HexCoords) -> Option<i32> {
        let node = &self.nodes[self.size.index_of(c)?];
        (node.status == Status::Closed).then_some(node.g)
    }

    /// Pop and process one frontier entry.
    pub(crate) fn step<B: CostBoard, H: Heuristic>(
        &mut self,
        board: &B,
        heuristic: &H,
        partner: &HalfSearch,
        best: i32,
    ) -> StepOutcome {
        let Some(current) = self.open.pop() else {
            return StepOutcome::Exhausted;
        };
        let ci = current.idx;

        // Skip stale entries.
        if self.nodes[ci].status != Status::Open {
            return StepOutcome::Stale;
        }

        self.nodes[ci].status = Status::Closed;
        self.closed += 1;
        let g = self.nodes[ci].g;
        let here = self.size.coords_of(ci);

        let partner_g = partner.closed_cost(here);
        let meeting = partner_g
            .map(|partner_g| BestSoFar {
                meeting: here,
                cost: g + partner_g,
            })
            .filter(|m| m.cost < best);
        let bound = meeting.map_or(best, |m| m.cost);

        // The partner has already searched everything beyond a shared hex.
        if partner_g.is_some() || self.prune(heuristic, partner, here, g, bound) {
            return StepOutcome::Closed {
                meeting,
                pruned: true,
            };
        }

        for side in Hexside::ALL {
            let Some((n, cost)) = directed_edge(board, here, side, self.direction) else {
                continue;
            };
            let Some(ni) = self.size.index_of(n) else {
                continue;
            };
            let tentative_g = g + cost;
            let node = &self.nodes[ni];
            match node.status {
                Status::Closed => continue,
                Status::Open if tentative_g >= node.g => continue,
                _ => {}
            }
            let f = tentative_g + self.estimate(heuristic, n);
            let node = &mut self.nodes[ni];
            node.g = tentative_g;
            node.parent = Some(side.reversed());
            node.status = Status::Open;
            self.open.push(NodeRef { idx: ni, f });
        }

        StepOutcome::Closed {
            meeting,
            pruned: false,
        }
    }

    /// Whether expanding `here` at cost `g` cannot lead to a path cheaper
    /// than `bound`, judged from this half's own estimate or from how far
    /// the partner's frontier still is from `here`.
    fn prune<H: Heuristic>(
        &self,
        heuristic: &H,
        partner: &HalfSearch,
        here: HexCoords,
        g: i32,
        bound: i32,
    ) -> bool {
        if g.saturating_add(self.estimate(heuristic, here)) >= bound {
            return true;
        }
        match partner.frontier_minimum() {
            Some(f) => g.saturating_add(f) - partner.estimate(heuristic, here) >= bound,
            None => false,
        }
    }

    /// The chain of steps from this half's origin to `c`, read in the order
    /// the two are joined by [`DirectedPath::merge_at`]: origin first, `c`
    /// last. `None` if `c` was never reached.
    pub(crate) fn chain_to(&self, c: HexCoords) -> Option<DirectedPath> {
        let mut idx = self.size.index_of(c)?;
        if self.nodes[idx].status == Status::Unseen {
            return None;
        }
        let mut path = DirectedPath::new(c);
        let mut cur = c;
        while let Some(back) = self.nodes[idx].parent {
            let prev = cur.neighbour(back);
            let prev_idx = self.size.index_of(prev)?;
            let hop = self.nodes[idx].g - self.nodes[prev_idx].g;
            path = path.prepend(PathStep::new(prev, back.reversed()), hop);
            cur = prev;
            idx = prev_idx;
        }
        debug_assert_eq!(cur, self.origin);
        Some(path)
    }
}
