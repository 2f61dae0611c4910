use std::collections::BinaryHeap;

use hexgrid_core::{BoardStorage, HexCoords, Hexside};

use crate::node::{Direction, NodeRef, UNREACHABLE, directed_edge};
use crate::traits::CostBoard;

/// Compute a single-source Dijkstra distance map.
///
/// With [`Direction::Forward`] each cell holds the cost of travelling from
/// `source` to it; with [`Direction::Backward`] the cost of travelling from
/// it to `source`. Cells that cannot be reached hold [`UNREACHABLE`], as does
/// every cell when `source` is off the board.
pub fn distance_map<B: CostBoard>(
    board: &B,
    source: HexCoords,
    direction: Direction,
) -> BoardStorage<i32> {
    let size = board.size();
    let mut dist = BoardStorage::from_fn(size, |_| UNREACHABLE);
    let Some(si) = size.index_of(source) else {
        return dist;
    };
    let mut closed = vec![false; size.len()];

    let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
    dist.set(source, 0);
    open.push(NodeRef { idx: si, f: 0 });

    while let Some(current) = open.pop() {
        let ci = current.idx;
        if closed[ci] {
            continue;
        }
        closed[ci] = true;
        let here = size.coords_of(ci);
        let current_g = current.f;

        for side in Hexside::ALL {
            let Some((n, cost)) = directed_edge(board, here, side, direction) else {
                continue;
            };
            let Some(ni) = size.index_of(n) else {
                continue;
            };
            if closed[ni] {
                continue;
            }
            let tentative = current_g + cost;
            if tentative >= dist.at(n) {
                continue;
            }
            dist.set(n, tentative);
            open.push(NodeRef {
                idx: ni,
                f: tentative,
            });
        }
    }

    dist
}
