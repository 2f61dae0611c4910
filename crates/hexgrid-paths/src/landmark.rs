//! Landmark ("ALT") distance tables and the heuristic built on them.
//!
//! For every landmark `L` the board stores the exact cost of travelling
//! from `L` to each hex and from each hex to `L`. By the triangle
//! inequality both `d(L, to) - d(L, from)` and `d(from, L) - d(to, L)` are
//! lower bounds on `d(from, to)`, so their maximum over all landmarks is an
//! admissible estimate, and a much tighter one than hex distance on boards
//! with rivers, mountains and roads.

use hexgrid_core::{BoardStorage, HexCoords, HexSize};
use rayon::prelude::*;

use crate::dijkstra::distance_map;
use crate::node::{Direction, UNREACHABLE};
use crate::traits::{CostBoard, Heuristic};

/// Precomputed landmark distances for one board.
#[derive(Clone, Debug)]
pub struct LandmarkBoard {
    size: HexSize,
    landmarks: Vec<HexCoords>,
    /// `from_landmark[i]` holds `d(landmarks[i], x)`.
    from_landmark: Vec<BoardStorage<i32>>,
    /// `to_landmark[i]` holds `d(x, landmarks[i])`.
    to_landmark: Vec<BoardStorage<i32>>,
}

impl LandmarkBoard {
    /// Build the distance tables for `landmarks`, one landmark per rayon
    /// task. Off-board landmarks are dropped; duplicates are kept once.
    pub fn new<B: CostBoard + Sync>(board: &B, landmarks: &[HexCoords]) -> Self {
        let size = board.size();
        let mut kept: Vec<HexCoords> = Vec::with_capacity(landmarks.len());
        for &l in landmarks {
            if !size.is_on_board(l) {
                log::warn!("dropping landmark {l}: not on a {size} board");
                continue;
            }
            if !kept.contains(&l) {
                kept.push(l);
            }
        }

        let tables: Vec<(BoardStorage<i32>, BoardStorage<i32>)> = kept
            .par_iter()
            .map(|&l| {
                (
                    distance_map(board, l, Direction::Forward),
                    distance_map(board, l, Direction::Backward),
                )
            })
            .collect();
        let (from_landmark, to_landmark): (Vec<_>, Vec<_>) = tables.into_iter().unzip();

        log::debug!("built {} landmark tables for a {size} board", kept.len());
        Self {
            size,
            landmarks: kept,
            from_landmark,
            to_landmark,
        }
    }

    /// Landmarks at the four corners and the midpoints of the four edges.
    pub fn with_default_landmarks<B: CostBoard + Sync>(board: &B) -> Self {
        Self::new(board, &default_landmarks(board.size()))
    }

    /// The landmarks in table order.
    #[inline]
    pub fn landmarks(&self) -> &[HexCoords] {
        &self.landmarks
    }

    /// Extent of the board the tables were built for.
    #[inline]
    pub fn size(&self) -> HexSize {
        self.size
    }

    /// Cost of travelling from landmark `index` to `c`, or [`UNREACHABLE`].
    pub fn distance_from(&self, index: usize, c: HexCoords) -> i32 {
        lookup(&self.from_landmark, index, c)
    }

    /// Cost of travelling from `c` to landmark `index`, or [`UNREACHABLE`].
    pub fn distance_to(&self, index: usize, c: HexCoords) -> i32 {
        lookup(&self.to_landmark, index, c)
    }
}

fn lookup(tables: &[BoardStorage<i32>], index: usize, c: HexCoords) -> i32 {
    tables
        .get(index)
        .and_then(|t| t.get(c))
        .copied()
        .unwrap_or(UNREACHABLE)
}

fn default_landmarks(size: HexSize) -> Vec<HexCoords> {
    if size.is_empty() {
        return Vec::new();
    }
    let (xr, yb) = (size.width() - 1, size.height() - 1);
    let (xm, ym) = (xr / 2, yb / 2);
    let mut out = Vec::with_capacity(8);
    for c in [
        HexCoords::new(0, 0),
        HexCoords::new(xr, 0),
        HexCoords::new(0, yb),
        HexCoords::new(xr, yb),
        HexCoords::new(xm, 0),
        HexCoords::new(xm, yb),
        HexCoords::new(0, ym),
        HexCoords::new(xr, ym),
    ] {
        if !out.contains(&c) {
            out.push(c);
        }
    }
    out
}

impl Heuristic for LandmarkBoard {
    fn estimate(&self, from: HexCoords, to: HexCoords) -> i32 {
        let mut best = 0;
        for (fwd, bwd) in self.from_landmark.iter().zip(&self.to_landmark) {
            let (Some(&lf), Some(&lt)) = (fwd.get(from), fwd.get(to)) else {
                return 0;
            };
            if lf != UNREACHABLE && lt != UNREACHABLE {
                best = best.max(lt - lf);
            }
            let (Some(&fl), Some(&tl)) = (bwd.get(from), bwd.get(to)) else {
                return 0;
            };
            if fl != UNREACHABLE && tl != UNREACHABLE {
                best = best.max(fl - tl);
            }
        }
        best
    }
}
