use hexgrid_core::HexCoords;

use crate::error::SearchError;
use crate::half::BestSoFar;
use crate::halves::PathHalves;
use crate::path::DirectedPath;
use crate::traits::{CostBoard, Heuristic};

/// Tuning knobs for [`Pathfinder`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PathfinderConfig {
    /// Maximum number of half-search steps per query; `None` for no limit.
    pub step_limit: Option<usize>,
}

/// Bidirectional shortest-path search over a [`CostBoard`].
///
/// Each query runs a forward search out of the start and a backward search
/// out of the goal, stepping them in turn until neither can improve on the
/// best path through a hex both have closed.
///
/// ```
/// use hexgrid_core::{BoardStorage, HexCoords, HexSize};
/// use hexgrid_paths::{HexDistance, Pathfinder};
///
/// let board = BoardStorage::from_fn(HexSize::new(4, 4), |_| 1);
/// let heuristic = HexDistance { min_step_cost: 1 };
/// let path = Pathfinder::new(&board, &heuristic)
///     .search(HexCoords::new(0, 0), HexCoords::new(3, 1))
///     .unwrap()
///     .unwrap();
/// assert_eq!(path.total_cost(), 3);
/// ```
#[derive(Debug)]
pub struct Pathfinder<'a, B, H> {
    board: &'a B,
    heuristic: &'a H,
    config: PathfinderConfig,
}

impl<'a, B: CostBoard, H: Heuristic> Pathfinder<'a, B, H> {
    pub fn new(board: &'a B, heuristic: &'a H) -> Self {
        Self {
            board,
            heuristic,
            config: PathfinderConfig::default(),
        }
    }

    pub fn with_config(mut self, config: PathfinderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &PathfinderConfig {
        &self.config
    }

    /// Find the cheapest path from `start` to `goal`.
    ///
    /// `Ok(None)` means no path exists, including when either endpoint is
    /// off the board. Fails only when the configured step limit runs out.
    pub fn search(
        &self,
        start: HexCoords,
        goal: HexCoords,
    ) -> Result<Option<DirectedPath>, SearchError> {
        self.search_traced(start, goal, |_| {})
    }

    /// Like [`search`](Self::search), calling `hook` every time a cheaper
    /// complete path is found.
    pub fn search_traced<F>(
        &self,
        start: HexCoords,
        goal: HexCoords,
        hook: F,
    ) -> Result<Option<DirectedPath>, SearchError>
    where
        F: FnMut(BestSoFar),
    {
        if !self.board.in_bounds(start) || !self.board.in_bounds(goal) {
            log::debug!("no path {start} -> {goal}: endpoint off the board");
            return Ok(None);
        }
        if start == goal {
            return Ok(Some(DirectedPath::new(start)));
        }

        let mut halves = PathHalves::new(self.board, self.heuristic, start, goal);
        let result = halves.run(self.config.step_limit, hook);
        let stats = halves.stats();
        if let Err(e) = result {
            log::debug!("search {start} -> {goal} abandoned: {e}; {stats}");
            return Err(e);
        }
        match halves.into_path() {
            Some(path) => {
                log::debug!("found {start} -> {goal} at cost {}; {stats}", path.total_cost());
                Ok(Some(path))
            }
            None => {
                log::debug!("no path {start} -> {goal}; {stats}");
                Ok(None)
            }
        }
    }
}

/// Find the cheapest path from `start` to `goal` with no step limit.
///
/// Returns `None` if either endpoint is off the board or the goal cannot be
/// reached. `start == goal` gives a single-step path of cost 0.
pub fn find_path<B: CostBoard, H: Heuristic>(
    board: &B,
    heuristic: &H,
    start: HexCoords,
    goal: HexCoords,
) -> Option<DirectedPath> {
    Pathfinder::new(board, heuristic).search(start, goal).ok().flatten()
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_round_trip() {
        let cfg = PathfinderConfig { step_limit: Some(64) };
        let json = serde_json::to_string(&cfg).unwrap();
        assert_eq!(json, r#"{"step_limit":64}"#);
        let back: PathfinderConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
        let empty: PathfinderConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, PathfinderConfig::default());
    }
}
