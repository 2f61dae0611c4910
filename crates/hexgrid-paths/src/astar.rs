use std::collections::BinaryHeap;

use hexgrid_core::{HexCoords, Hexside};

use crate::node::{Direction, Node, NodeRef, Status, directed_edge};
use crate::path::DirectedPath;
use crate::step::PathStep;
use crate::traits::{CostBoard, Heuristic};

/// Plain one-directional A* over a [`CostBoard`].
///
/// Slower than [`Pathfinder`](crate::Pathfinder) on long queries but simple
/// enough to trust; it returns the same optimal costs.
#[derive(Debug)]
pub struct StandardPathfinder<'a, B, H> {
    board: &'a B,
    heuristic: &'a H,
}

impl<'a, B: CostBoard, H: Heuristic> StandardPathfinder<'a, B, H> {
    pub fn new(board: &'a B, heuristic: &'a H) -> Self {
        Self { board, heuristic }
    }

    /// Compute the cheapest path from `start` to `goal`.
    ///
    /// Returns `None` if either endpoint is off the board or no path exists.
    pub fn find_path(&self, start: HexCoords, goal: HexCoords) -> Option<DirectedPath> {
        let size = self.board.size();
        let start_idx = size.index_of(start)?;
        let goal_idx = size.index_of(goal)?;

        if start_idx == goal_idx {
            return Some(DirectedPath::new(start));
        }

        let mut nodes = vec![Node::default(); size.len()];
        nodes[start_idx].g = 0;
        nodes[start_idx].status = Status::Open;

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        open.push(NodeRef {
            idx: start_idx,
            f: self.heuristic.estimate(start, goal),
        });

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };
            let ci = current.idx;

            // Skip stale entries.
            if nodes[ci].status != Status::Open {
                continue;
            }
            if ci == goal_idx {
                break 'search true;
            }

            nodes[ci].status = Status::Closed;
            let current_g = nodes[ci].g;
            let here = size.coords_of(ci);

            for side in Hexside::ALL {
                let Some((n, cost)) = directed_edge(self.board, here, side, Direction::Forward)
                else {
                    continue;
                };
                let Some(ni) = size.index_of(n) else {
                    continue;
                };
                let tentative_g = current_g + cost;
                let node = &mut nodes[ni];
                if node.status == Status::Closed || tentative_g >= node.g {
                    continue;
                }
                node.g = tentative_g;
                node.parent = Some(side.reversed());
                node.status = Status::Open;
                open.push(NodeRef {
                    idx: ni,
                    f: tentative_g + self.heuristic.estimate(n, goal),
                });
            }
        };

        if !found {
            return None;
        }

        // Reconstruct path.
        let mut path = DirectedPath::new(goal);
        let mut ci = goal_idx;
        while let Some(back) = nodes[ci].parent {
            let prev = size.coords_of(ci).neighbour(back);
            let pi = size.index_of(prev)?;
            path = path.prepend(PathStep::new(prev, back.reversed()), nodes[ci].g - nodes[pi].g);
            ci = pi;
        }
        Some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{HexDistance, ZeroHeuristic};
    use hexgrid_core::{BoardStorage, HexSize, Terrain};

    #[test]
    fn straight_line() {
        let b = BoardStorage::from_fn(HexSize::new(5, 5), |_| 1);
        let h = HexDistance { min_step_cost: 1 };
        let astar = StandardPathfinder::new(&b, &h);
        let p = astar.find_path(HexCoords::ZERO, HexCoords::new(4, 4)).unwrap();
        assert_eq!(p.total_cost(), 4);
        assert_eq!(p.total_steps(), 4);
        assert_eq!(p.coords()[2], HexCoords::new(2, 2));
    }

    #[test]
    fn goes_around_the_river() {
        let mut b = BoardStorage::from_fn(HexSize::new(4, 4), |_| Terrain::Clear);
        for y in 0..3 {
            b.set(HexCoords::new(1, y), Terrain::River);
        }
        let astar = StandardPathfinder::new(&b, &ZeroHeuristic);
        let p = astar.find_path(HexCoords::ZERO, HexCoords::new(2, 0)).unwrap();
        assert!(p.iter().all(|s| !b.at(s.coords()).is_impassable()));
        let summed: i32 = p.hops().map(|(s, _)| b.at(s.next_coords()).step_cost(s.entry())).sum();
        assert_eq!(p.total_cost(), summed);
    }

    #[test]
    fn same_start_and_goal() {
        let b = BoardStorage::from_fn(HexSize::new(2, 2), |_| 1);
        let astar = StandardPathfinder::new(&b, &ZeroHeuristic);
        let p = astar.find_path(HexCoords::new(1, 1), HexCoords::new(1, 1)).unwrap();
        assert_eq!(p.total_cost(), 0);
        assert_eq!(p.total_steps(), 0);
    }

    #[test]
    fn no_path() {
        let mut b = BoardStorage::from_fn(HexSize::new(3, 1), |_| 1);
        b.set(HexCoords::new(1, 0), -1);
        let astar = StandardPathfinder::new(&b, &ZeroHeuristic);
        assert!(astar.find_path(HexCoords::ZERO, HexCoords::new(2, 0)).is_none());
        assert!(astar.find_path(HexCoords::ZERO, HexCoords::new(3, 0)).is_none());
    }
}
