use std::fmt;
use std::hash::{Hash, Hasher};

use hexgrid_core::{HexCoords, Hexside};

/// A hex on a path together with the hexside through which the path leaves
/// it.
///
/// Equality and hashing look at the coordinates only: two visits to the same
/// hex are the same step however they were reached.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathStep {
    coords: HexCoords,
    exit: Hexside,
}

impl PathStep {
    /// A step at `coords` leaving through `exit`.
    #[inline]
    pub const fn new(coords: HexCoords, exit: Hexside) -> Self {
        Self { coords, exit }
    }

    /// A step at `coords` leaving through [`Hexside::North`]; used for the
    /// last step of a path, which leaves nowhere.
    #[inline]
    pub const fn at(coords: HexCoords) -> Self {
        Self::new(coords, Hexside::North)
    }

    #[inline]
    pub const fn coords(self) -> HexCoords {
        self.coords
    }

    /// Hexside of this hex through which the path leaves.
    #[inline]
    pub const fn exit(self) -> Hexside {
        self.exit
    }

    /// Hexside of the next hex through which the path enters it.
    #[inline]
    pub const fn entry(self) -> Hexside {
        self.exit.reversed()
    }

    /// The hex the path moves to after this step.
    #[inline]
    pub const fn next_coords(self) -> HexCoords {
        self.coords.neighbour(self.exit)
    }
}

impl PartialEq for PathStep {
    fn eq(&self, other: &Self) -> bool {
        self.coords == other.coords
    }
}

impl Eq for PathStep {}

impl Hash for PathStep {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.coords.hash(state);
    }
}

impl fmt::Display for PathStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} enters from {}", self.coords, self.entry())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn entry_is_reverse_of_exit() {
        for side in Hexside::ALL {
            let s = PathStep::new(HexCoords::new(2, 3), side);
            assert_eq!(s.entry(), side.reversed());
            assert_eq!(s.next_coords().neighbour(s.entry()), s.coords());
        }
    }

    #[test]
    fn equality_ignores_direction() {
        let c = HexCoords::new(4, 1);
        let a = PathStep::new(c, Hexside::North);
        let b = PathStep::new(c, Hexside::SouthWest);
        assert_eq!(a, b);
        let set: HashSet<_> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
        assert_ne!(a, PathStep::at(HexCoords::new(4, 2)));
    }

    #[test]
    fn display() {
        let s = PathStep::new(HexCoords::new(1, 2), Hexside::NorthEast);
        assert_eq!(s.to_string(), "(1, 2) enters from SW");
    }
}
