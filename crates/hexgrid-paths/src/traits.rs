use hexgrid_core::{BoardStorage, HexCoords, HexSize, Hexside, IMPASSABLE, Terrain, hex_distance};

/// Board shape: which hexes exist.
pub trait Topology {
    /// Extent of the board.
    fn size(&self) -> HexSize;

    /// Whether `c` is on the board.
    #[inline]
    fn in_bounds(&self, c: HexCoords) -> bool {
        self.size().is_on_board(c)
    }

    /// The on-board hex across `side` from `c`.
    #[inline]
    fn neighbour(&self, c: HexCoords, side: Hexside) -> Option<HexCoords> {
        let n = c.checked_neighbour(side)?;
        self.in_bounds(n).then_some(n)
    }
}

/// Topology with direction-dependent traversal costs.
pub trait CostBoard: Topology {
    /// Cost of leaving `from` across `side` into the neighbouring hex.
    ///
    /// Any negative value means the hexside cannot be crossed; such edges
    /// are never expanded nor summed into a path cost.
    fn edge_cost(&self, from: HexCoords, side: Hexside) -> i32;
}

/// Lower-bound estimate of the travel cost between two hexes.
pub trait Heuristic {
    /// Estimate of the cost of travelling from `from` to `to`.
    /// Must be admissible and consistent.
    fn estimate(&self, from: HexCoords, to: HexCoords) -> i32;
}

/// Per-hex payloads that know what it costs to enter them.
pub trait HexCost {
    /// Cost of entering this hex through its `entry` hexside.
    fn entry_cost(&self, entry: Hexside) -> i32;
}

impl HexCost for i32 {
    #[inline]
    fn entry_cost(&self, _entry: Hexside) -> i32 {
        *self
    }
}

impl HexCost for Terrain {
    #[inline]
    fn entry_cost(&self, entry: Hexside) -> i32 {
        self.step_cost(entry)
    }
}

impl<T> Topology for BoardStorage<T> {
    #[inline]
    fn size(&self) -> HexSize {
        BoardStorage::size(self)
    }
}

impl<T: HexCost> CostBoard for BoardStorage<T> {
    fn edge_cost(&self, from: HexCoords, side: Hexside) -> i32 {
        if !self.contains(from) {
            return IMPASSABLE;
        }
        match BoardStorage::neighbour(self, from, side) {
            Some(t) => t.entry_cost(side.reversed()),
            None => IMPASSABLE,
        }
    }
}

/// The trivial heuristic; turns any best-first search into Dijkstra.
#[derive(Copy, Clone, Debug, Default)]
pub struct ZeroHeuristic;

impl Heuristic for ZeroHeuristic {
    #[inline]
    fn estimate(&self, _from: HexCoords, _to: HexCoords) -> i32 {
        0
    }
}

/// Hex distance scaled by the cheapest step on the board.
///
/// Admissible only while no passable edge costs less than `min_step_cost`.
#[derive(Copy, Clone, Debug)]
pub struct HexDistance {
    pub min_step_cost: i32,
}

impl Heuristic for HexDistance {
    #[inline]
    fn estimate(&self, from: HexCoords, to: HexCoords) -> i32 {
        self.min_step_cost * hex_distance(from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_cost_is_entry_cost_of_neighbour() {
        let mut b = BoardStorage::from_fn(HexSize::new(3, 3), |_| Terrain::Clear);
        b.set(HexCoords::new(1, 0), Terrain::Pike);
        b.set(HexCoords::new(0, 1), Terrain::River);
        let o = HexCoords::ZERO;
        assert_eq!(b.edge_cost(o, Hexside::NorthEast), 2);
        assert_eq!(b.edge_cost(o, Hexside::SouthEast), 4);
        assert!(b.edge_cost(o, Hexside::South) < 0);
        assert!(b.edge_cost(o, Hexside::North) < 0);
        assert!(b.edge_cost(HexCoords::new(-1, 0), Hexside::NorthEast) < 0);
    }

    #[test]
    fn neighbour_respects_bounds() {
        let b: BoardStorage<i32> = BoardStorage::new(HexSize::new(2, 2));
        let o = HexCoords::ZERO;
        assert_eq!(Topology::neighbour(&b, o, Hexside::SouthEast), Some(HexCoords::new(1, 1)));
        assert_eq!(Topology::neighbour(&b, o, Hexside::SouthWest), None);
        assert!(b.in_bounds(HexCoords::new(1, 1)));
        assert!(!b.in_bounds(HexCoords::new(2, 1)));
        let far = HexCoords::new(i32::MAX, i32::MIN);
        for side in Hexside::ALL {
            assert_eq!(Topology::neighbour(&b, far, side), None);
            assert!(b.edge_cost(far, side) < 0);
        }
    }

    #[test]
    fn hex_distance_heuristic_scales() {
        let h = HexDistance { min_step_cost: 2 };
        assert_eq!(h.estimate(HexCoords::ZERO, HexCoords::new(2, 2)), 4);
        assert_eq!(ZeroHeuristic.estimate(HexCoords::ZERO, HexCoords::new(9, 9)), 0);
    }
}
