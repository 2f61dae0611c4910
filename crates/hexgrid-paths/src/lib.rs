//! Shortest paths over hex boards with direction-dependent step costs.
//!
//! The main engine is a bidirectional best-first search ([`Pathfinder`],
//! [`find_path`]): a forward half grows from the start, a backward half from
//! the goal, and the two are stepped in turn until neither can beat the
//! cheapest path found through a hex they have both closed. Pair it with a
//! [`LandmarkBoard`] for a tight heuristic on boards with rivers and roads.
//!
//! Also provided:
//!
//! - **A\*** in one direction ([`StandardPathfinder`]), a simple reference
//! - **Dijkstra** distance maps towards or away from a hex
//!   ([`dijkstra::distance_map`])
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Topology`] | board extent and neighbours |
//! | [`CostBoard`] : [`Topology`] | every search |
//! | [`Heuristic`] | A* and the bidirectional search |
//!
//! [`BoardStorage`](hexgrid_core::BoardStorage) is a [`CostBoard`] whenever
//! its payload implements [`HexCost`].

mod astar;
pub mod dijkstra;
mod error;
mod half;
mod halves;
mod landmark;
mod node;
mod path;
mod pathfinder;
mod step;
mod traits;

pub use astar::StandardPathfinder;
pub use error::SearchError;
pub use half::BestSoFar;
pub use landmark::LandmarkBoard;
pub use node::{Direction, UNREACHABLE};
pub use path::DirectedPath;
pub use pathfinder::{Pathfinder, PathfinderConfig, find_path};
pub use step::PathStep;
pub use traits::{CostBoard, HexCost, HexDistance, Heuristic, Topology, ZeroHeuristic};
