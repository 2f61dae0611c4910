//! Hex geometry primitives: [`HexCoords`], [`Hexside`] and [`HexSize`].
//!
//! Hexes are flat-topped and addressed by *canonical* coordinates, in which
//! the six neighbours of `(x, y)` sit at fixed offsets (see
//! [`Hexside::offset`]). A board of `width × height` canonical cells is a
//! parallelogram.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Hexside
// ---------------------------------------------------------------------------

/// One of the six sides of a flat-topped hex, i.e. a direction of travel.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Hexside {
    #[default]
    North,
    NorthEast,
    SouthEast,
    South,
    SouthWest,
    NorthWest,
}

impl Hexside {
    /// All six hexsides, clockwise from north.
    pub const ALL: [Hexside; 6] = [
        Hexside::North,
        Hexside::NorthEast,
        Hexside::SouthEast,
        Hexside::South,
        Hexside::SouthWest,
        Hexside::NorthWest,
    ];

    /// Position of this hexside in [`Hexside::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The opposite hexside. `side.reversed().reversed() == side`.
    #[inline]
    pub const fn reversed(self) -> Self {
        match self {
            Hexside::North => Hexside::South,
            Hexside::NorthEast => Hexside::SouthWest,
            Hexside::SouthEast => Hexside::NorthWest,
            Hexside::South => Hexside::North,
            Hexside::SouthWest => Hexside::NorthEast,
            Hexside::NorthWest => Hexside::SouthEast,
        }
    }

    /// Canonical-coordinate offset of the neighbour across this hexside.
    #[inline]
    pub const fn offset(self) -> HexCoords {
        match self {
            Hexside::North => HexCoords::new(0, -1),
            Hexside::NorthEast => HexCoords::new(1, 0),
            Hexside::SouthEast => HexCoords::new(1, 1),
            Hexside::South => HexCoords::new(0, 1),
            Hexside::SouthWest => HexCoords::new(-1, 0),
            Hexside::NorthWest => HexCoords::new(-1, -1),
        }
    }

    /// Short compass label, e.g. `"NE"`.
    pub const fn abbrev(self) -> &'static str {
        match self {
            Hexside::North => "N",
            Hexside::NorthEast => "NE",
            Hexside::SouthEast => "SE",
            Hexside::South => "S",
            Hexside::SouthWest => "SW",
            Hexside::NorthWest => "NW",
        }
    }
}

impl fmt::Display for Hexside {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbrev())
    }
}

// ---------------------------------------------------------------------------
// HexCoords
// ---------------------------------------------------------------------------

/// Canonical coordinates of a hex.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HexCoords {
    pub x: i32,
    pub y: i32,
}

impl HexCoords {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create new coordinates.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The hex across `side`. May be off any particular board.
    ///
    /// Overflows at the edges of the `i32` range; use
    /// [`checked_neighbour`](Self::checked_neighbour) for untrusted input.
    #[inline]
    pub const fn neighbour(self, side: Hexside) -> Self {
        let d = side.offset();
        Self::new(self.x + d.x, self.y + d.y)
    }

    /// The hex across `side`, or `None` if it is not representable.
    #[inline]
    pub const fn checked_neighbour(self, side: Hexside) -> Option<Self> {
        let d = side.offset();
        match (self.x.checked_add(d.x), self.y.checked_add(d.y)) {
            (Some(x), Some(y)) => Some(Self::new(x, y)),
            _ => None,
        }
    }

    /// All six neighbours paired with the hexside crossed to reach them.
    pub fn neighbours(self) -> [(Hexside, HexCoords); 6] {
        Hexside::ALL.map(|side| (side, self.neighbour(side)))
    }

    /// The hexside crossed to reach `other`, if it is adjacent.
    pub fn hexside_to(self, other: HexCoords) -> Option<Hexside> {
        Hexside::ALL
            .into_iter()
            .find(|&side| self.checked_neighbour(side) == Some(other))
    }

    /// Number of hexsides crossed between `self` and `other` on an empty
    /// board.
    #[inline]
    pub fn distance(self, other: HexCoords) -> i32 {
        hex_distance(self, other)
    }
}

/// Hex distance between two canonical coordinates:
/// `max(|dx|, |dy|, |dx - dy|)`.
#[inline]
pub fn hex_distance(a: HexCoords, b: HexCoords) -> i32 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    dx.abs().max(dy.abs()).max((dx - dy).abs())
}

impl PartialOrd for HexCoords {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HexCoords {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for HexCoords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for HexCoords {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for HexCoords {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

// ---------------------------------------------------------------------------
// HexSize
// ---------------------------------------------------------------------------

/// Extent of a board in hexes. Negative dimensions are clamped to zero.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HexSize {
    width: i32,
    height: i32,
}

impl HexSize {
    /// Create a new extent.
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self {
            width: if width > 0 { width } else { 0 },
            height: if height > 0 { height } else { 0 },
        }
    }

    #[inline]
    pub const fn width(self) -> i32 {
        self.width
    }

    #[inline]
    pub const fn height(self) -> i32 {
        self.height
    }

    /// Total number of hexes.
    #[inline]
    pub const fn len(self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Whether `c` lies on a board of this extent.
    #[inline]
    pub const fn is_on_board(self, c: HexCoords) -> bool {
        c.x >= 0 && c.x < self.width && c.y >= 0 && c.y < self.height
    }

    /// Row-major flat index of `c`, or `None` when off-board.
    #[inline]
    pub const fn index_of(self, c: HexCoords) -> Option<usize> {
        if self.is_on_board(c) {
            Some((c.y as usize) * (self.width as usize) + (c.x as usize))
        } else {
            None
        }
    }

    /// Inverse of [`index_of`](Self::index_of). `idx` must be `< len()`.
    #[inline]
    pub const fn coords_of(self, idx: usize) -> HexCoords {
        let w = self.width as usize;
        HexCoords::new((idx % w) as i32, (idx / w) as i32)
    }

    /// Row-major iterator over every hex of the board.
    #[inline]
    pub fn iter(self) -> HexSizeIter {
        HexSizeIter {
            size: self,
            cur: HexCoords::ZERO,
        }
    }
}

impl IntoIterator for HexSize {
    type Item = HexCoords;
    type IntoIter = HexSizeIter;
    #[inline]
    fn into_iter(self) -> HexSizeIter {
        self.iter()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for HexSize {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Raw {
            width: i32,
            height: i32,
        }
        let raw = Raw::deserialize(deserializer)?;
        Ok(HexSize::new(raw.width, raw.height))
    }
}

impl fmt::Display for HexSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Row-major iterator over the hexes of a [`HexSize`].
#[derive(Clone, Debug)]
pub struct HexSizeIter {
    size: HexSize,
    cur: HexCoords,
}

impl Iterator for HexSizeIter {
    type Item = HexCoords;

    #[inline]
    fn next(&mut self) -> Option<HexCoords> {
        if self.cur.y >= self.size.height || self.size.is_empty() {
            return None;
        }
        let c = self.cur;
        self.cur.x += 1;
        if self.cur.x >= self.size.width {
            self.cur.x = 0;
            self.cur.y += 1;
        }
        Some(c)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.size.is_empty() || self.cur.y >= self.size.height {
            return (0, Some(0));
        }
        let w = self.size.width as usize;
        let remaining_in_row = (self.size.width - self.cur.x) as usize;
        let remaining_rows = (self.size.height - self.cur.y - 1) as usize;
        let total = remaining_in_row + remaining_rows * w;
        (total, Some(total))
    }
}

impl ExactSizeIterator for HexSizeIter {}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn coords_round_trip() {
        let c = HexCoords::new(3, -7);
        let json = serde_json::to_string(&c).unwrap();
        let back: HexCoords = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }

    #[test]
    fn hexside_round_trip() {
        let json = serde_json::to_string(&Hexside::SouthWest).unwrap();
        let back: Hexside = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Hexside::SouthWest);
    }

    #[test]
    fn size_clamps_negative_dimensions_on_load() {
        let s: HexSize = serde_json::from_str(r#"{"width":-3,"height":4}"#).unwrap();
        assert_eq!(s, HexSize::new(0, 4));
        assert!(s.is_empty());
        let json = serde_json::to_string(&HexSize::new(5, 2)).unwrap();
        assert_eq!(serde_json::from_str::<HexSize>(&json).unwrap(), HexSize::new(5, 2));
    }
}
