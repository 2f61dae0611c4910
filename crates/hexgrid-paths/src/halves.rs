//! The coordinator that drives a forward and a backward [`HalfSearch`] in
//! turn and joins their chains where they meet.

use std::fmt;

use hexgrid_core::HexCoords;

use crate::error::SearchError;
use crate::half::{BestSoFar, HalfSearch, StepOutcome};
use crate::node::Direction;
use crate::path::DirectedPath;
use crate::traits::{CostBoard, Heuristic};

/// Counters gathered while a search runs.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct SearchStats {
    /// Half-search steps taken, stale pops included.
    pub(crate) steps: usize,
    /// Steps that only discarded an out-of-date frontier entry.
    pub(crate) stale: usize,
    /// Hexes closed by the forward and backward halves.
    pub(crate) closed: [usize; 2],
    /// Times the best-so-far bound went down.
    pub(crate) improvements: usize,
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} steps ({} stale), closed {} forward / {} backward, {} improvements",
            self.steps, self.stale, self.closed[0], self.closed[1], self.improvements
        )
    }
}

/// Both halves of one start-to-goal query plus the shared bound.
///
/// The halves are stepped strictly in turn, forward first. A half whose
/// frontier can no longer beat the bound is skipped; the search is over once
/// both are skipped.
pub(crate) struct PathHalves<'a, B, H> {
    board: &'a B,
    heuristic: &'a H,
    start: HexCoords,
    goal: HexCoords,
    /// Indexed by [`Direction::index`].
    halves: [HalfSearch; 2],
    best_so_far: i32,
    meeting: Option<HexCoords>,
    stats: SearchStats,
}

impl<'a, B: CostBoard, H: Heuristic> PathHalves<'a, B, H> {
    pub(crate) fn new(board: &'a B, heuristic: &'a H, start: HexCoords, goal: HexCoords) -> Self {
        let fwd = HalfSearch::new(board, heuristic, Direction::Forward, start, goal);
        let bwd = HalfSearch::new(board, heuristic, Direction::Backward, goal, start);
        Self {
            board,
            heuristic,
            start,
            goal,
            halves: [fwd, bwd],
            best_so_far: i32::MAX,
            meeting: None,
            stats: SearchStats::default(),
        }
    }

    /// Cost of the best complete path found so far.
    #[inline]
    pub(crate) fn best_so_far(&self) -> Option<i32> {
        self.meeting.map(|_| self.best_so_far)
    }

    pub(crate) fn stats(&self) -> SearchStats {
        let mut stats = self.stats;
        stats.closed = [self.halves[0].closed_count(), self.halves[1].closed_count()];
        stats
    }

    /// Whether neither half can improve the bound any more.
    pub(crate) fn is_finished(&self) -> bool {
        self.halves.iter().all(|h| h.is_finished(self.best_so_far))
    }

    /// Alternate the halves until both are finished, calling `hook` on each
    /// improvement of the bound.
    ///
    /// With a `step_limit`, the budget is checked before every step and the
    /// search is abandoned once it is spent.
    pub(crate) fn run<F>(
        &mut self,
        step_limit: Option<usize>,
        mut hook: F,
    ) -> Result<(), SearchError>
    where
        F: FnMut(BestSoFar),
    {
        while !self.is_finished() {
            for direction in [Direction::Forward, Direction::Backward] {
                if self.halves[direction.index()].is_finished(self.best_so_far) {
                    continue;
                }
                if step_limit.is_some_and(|limit| self.stats.steps >= limit) {
                    return Err(SearchError::StepLimitExceeded {
                        steps: self.stats.steps,
                        best_so_far: self.best_so_far(),
                    });
                }
                self.step(direction, &mut hook);
            }
        }
        Ok(())
    }

    fn step<F: FnMut(BestSoFar)>(&mut self, direction: Direction, hook: &mut F) {
        let [fwd, bwd] = &mut self.halves;
        let (this, partner) = match direction {
            Direction::Forward => (fwd, &*bwd),
            Direction::Backward => (bwd, &*fwd),
        };
        let outcome = this.step(self.board, self.heuristic, partner, self.best_so_far);
        self.stats.steps += 1;
        match outcome {
            StepOutcome::Stale => self.stats.stale += 1,
            StepOutcome::Closed {
                meeting: Some(found),
                ..
            } => {
                debug_assert!(found.cost < self.best_so_far);
                log::trace!(
                    "{:?} half met at {} for cost {} ({} -> {})",
                    direction,
                    found.meeting,
                    found.cost,
                    self.start,
                    self.goal
                );
                self.best_so_far = found.cost;
                self.meeting = Some(found.meeting);
                self.stats.improvements += 1;
                hook(found);
            }
            StepOutcome::Closed { meeting: None, .. } | StepOutcome::Exhausted => {}
        }
    }

    /// The best path found: the forward chain to the meeting hex followed by
    /// the backward chain from it. `None` if the halves never met.
    pub(crate) fn into_path(self) -> Option<DirectedPath> {
        let meeting = self.meeting?;
        let [fwd, bwd] = &self.halves;
        let head = fwd.chain_to(meeting)?;
        let tail = bwd.chain_to(meeting)?;
        let path = head.merge_at(&tail)?;
        debug_assert_eq!(path.total_cost(), self.best_so_far);
        Some(path)
    }
}
