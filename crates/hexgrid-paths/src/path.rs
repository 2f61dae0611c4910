//! [`DirectedPath`], an ordered chain of [`PathStep`]s that accumulates cost.
//!
//! A path is read from its *front* to its *end*. Every step leaves through
//! the hexside facing the next step; the end step leaves through
//! [`Hexside::North`](hexgrid_core::Hexside::North). Each link between
//! consecutive steps carries the cost of that hop in the direction the
//! path was actually travelled, so reversing a path changes its reading
//! order but never its costs.

use std::fmt;

use hexgrid_core::HexCoords;

use crate::step::PathStep;

#[derive(Copy, Clone, Debug)]
struct Link {
    step: PathStep,
    /// Cost of the hop from this step to the next one in reading order.
    cost: i32,
}

impl PartialEq for Link {
    fn eq(&self, other: &Self) -> bool {
        self.step.coords() == other.step.coords()
            && self.step.exit() == other.step.exit()
            && self.cost == other.cost
    }
}

/// An ordered chain of steps with its total cost.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectedPath {
    /// Stored end-first, so that prepending is a push.
    links: Vec<Link>,
    total_cost: i32,
}

impl DirectedPath {
    /// A single-step path at `coords` with zero cost.
    pub fn new(coords: HexCoords) -> Self {
        Self {
            links: vec![Link {
                step: PathStep::at(coords),
                cost: 0,
            }],
            total_cost: 0,
        }
    }

    /// Add `step` before the current front. `step` must leave towards the
    /// current front, and `step_cost` is the cost of that hop.
    pub fn prepend(mut self, step: PathStep, step_cost: i32) -> Self {
        debug_assert!(step_cost >= 0, "negative step cost {step_cost}");
        debug_assert_eq!(step.next_coords(), self.front().coords());
        self.links.push(Link {
            step,
            cost: step_cost,
        });
        self.total_cost += step_cost;
        self
    }

    /// The first step in reading order.
    #[inline]
    pub fn front(&self) -> PathStep {
        self.links[self.links.len() - 1].step
    }

    /// The last step in reading order.
    #[inline]
    pub fn end(&self) -> PathStep {
        self.links[0].step
    }

    /// Sum of all hop costs.
    #[inline]
    pub fn total_cost(&self) -> i32 {
        self.total_cost
    }

    /// Number of hops, one less than the number of steps.
    #[inline]
    pub fn total_steps(&self) -> usize {
        self.links.len() - 1
    }

    /// Steps in reading order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = PathStep> + ExactSizeIterator + '_ {
        self.links.iter().rev().map(|l| l.step)
    }

    /// Each step except the end, with the cost of the hop it starts.
    pub fn hops(&self) -> impl Iterator<Item = (PathStep, i32)> + '_ {
        self.links[1..].iter().rev().map(|l| (l.step, l.cost))
    }

    /// Coordinates in reading order.
    pub fn coords(&self) -> Vec<HexCoords> {
        self.iter().map(PathStep::coords).collect()
    }

    /// Whether the path visits `c`.
    pub fn contains(&self, c: HexCoords) -> bool {
        self.links.iter().any(|l| l.step.coords() == c)
    }

    /// The same hexes read in the opposite order.
    ///
    /// Exits are re-derived so each step still faces its successor; hop
    /// costs stay attached to the hop they describe.
    pub fn reverse(&self) -> Self {
        let mut links = Vec::with_capacity(self.links.len());
        let mut iter = self.links.iter().rev();
        let Some(&first) = iter.next() else {
            return self.clone();
        };
        links.push(Link {
            step: PathStep::at(first.step.coords()),
            cost: 0,
        });
        let mut prev = first;
        for &link in iter {
            links.push(Link {
                step: PathStep::new(link.step.coords(), prev.step.exit().reversed()),
                cost: prev.cost,
            });
            prev = link;
        }
        Self {
            links,
            total_cost: self.total_cost,
        }
    }

    /// Join two paths that end at the same hex.
    ///
    /// `self` reads X → M and `other` reads Y → M; the result reads
    /// X → M → Y with the meeting step kept once. Returns `None` when the
    /// two paths do not end at the same hex.
    pub fn merge_at(&self, other: &DirectedPath) -> Option<DirectedPath> {
        if self.end().coords() != other.end().coords() {
            return None;
        }
        let mut merged = other.reverse();
        merged.links.extend_from_slice(&self.links[1..]);
        merged.total_cost += self.total_cost;
        Some(merged)
    }
}

impl fmt::Display for DirectedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (step, _) in self.hops() {
            write!(f, "{} {} -> ", step.coords(), step.exit())?;
        }
        write!(f, "{} [cost {}]", self.end().coords(), self.total_cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexgrid_core::Hexside;

    /// (0,0) -NE-> (1,0) -SE-> (2,1) -S-> (2,2), costs 2, 3, 5.
    fn sample() -> DirectedPath {
        DirectedPath::new(HexCoords::new(2, 2))
            .prepend(PathStep::new(HexCoords::new(2, 1), Hexside::South), 5)
            .prepend(PathStep::new(HexCoords::new(1, 0), Hexside::SouthEast), 3)
            .prepend(PathStep::new(HexCoords::new(0, 0), Hexside::NorthEast), 2)
    }

    #[test]
    fn prepend_accumulates() {
        let p = sample();
        assert_eq!(p.total_cost(), 10);
        assert_eq!(p.total_steps(), 3);
        assert_eq!(p.front().coords(), HexCoords::new(0, 0));
        assert_eq!(p.end().coords(), HexCoords::new(2, 2));
        assert_eq!(p.end().exit(), Hexside::North);
        assert_eq!(
            p.coords(),
            vec![
                HexCoords::new(0, 0),
                HexCoords::new(1, 0),
                HexCoords::new(2, 1),
                HexCoords::new(2, 2)
            ]
        );
        let costs: Vec<_> = p.hops().map(|(_, c)| c).collect();
        assert_eq!(costs, vec![2, 3, 5]);
    }

    #[test]
    fn steps_face_their_successor() {
        let p = sample();
        let steps: Vec<_> = p.iter().collect();
        for w in steps.windows(2) {
            assert_eq!(w[0].next_coords(), w[1].coords());
        }
    }

    #[test]
    fn reverse_flips_order_and_keeps_costs() {
        let p = sample();
        let r = p.reverse();
        assert_eq!(r.total_cost(), 10);
        let mut fwd = p.coords();
        fwd.reverse();
        assert_eq!(r.coords(), fwd);
        let costs: Vec<_> = r.hops().map(|(_, c)| c).collect();
        assert_eq!(costs, vec![5, 3, 2]);
        let steps: Vec<_> = r.iter().collect();
        for w in steps.windows(2) {
            assert_eq!(w[0].next_coords(), w[1].coords());
        }
        assert_eq!(r.end().exit(), Hexside::North);
    }

    #[test]
    fn reverse_round_trips() {
        let p = sample();
        assert_eq!(p.reverse().reverse(), p);
        let single = DirectedPath::new(HexCoords::new(5, 5));
        assert_eq!(single.reverse(), single);
    }

    #[test]
    fn merge_with_reversed_tail_rebuilds_path() {
        let p = sample();
        // Split at (1,0): head (0,0) -> (1,0), tail (1,0) -> (2,2).
        let head = DirectedPath::new(HexCoords::new(1, 0))
            .prepend(PathStep::new(HexCoords::new(0, 0), Hexside::NorthEast), 2);
        let tail = DirectedPath::new(HexCoords::new(2, 2))
            .prepend(PathStep::new(HexCoords::new(2, 1), Hexside::South), 5)
            .prepend(PathStep::new(HexCoords::new(1, 0), Hexside::SouthEast), 3);
        let merged = head.merge_at(&tail.reverse()).unwrap();
        assert_eq!(merged, p);
        assert_eq!(merged.total_cost(), 10);
    }

    #[test]
    fn merge_with_trivial_halves() {
        let p = sample();
        let at_end = DirectedPath::new(p.end().coords());
        assert_eq!(p.merge_at(&at_end), Some(p.clone()));
        let at_front = DirectedPath::new(p.front().coords());
        assert_eq!(at_front.merge_at(&p.reverse()), Some(p));
    }

    #[test]
    fn merge_requires_shared_end() {
        let a = DirectedPath::new(HexCoords::new(0, 0));
        let b = DirectedPath::new(HexCoords::new(1, 0));
        assert_eq!(a.merge_at(&b), None);
    }

    #[test]
    fn display() {
        let p = DirectedPath::new(HexCoords::new(1, 0))
            .prepend(PathStep::new(HexCoords::new(0, 0), Hexside::NorthEast), 4);
        assert_eq!(p.to_string(), "(0, 0) NE -> (1, 0) [cost 4]");
    }
}
