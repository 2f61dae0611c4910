//! Terrain kinds: [`Terrain`], its [`TerrainData`] record and [`Color`].

use crate::geom::Hexside;

/// Cost sentinel meaning "this hexside cannot be crossed".
///
/// Any negative step cost is impassable; this is the canonical value.
pub const IMPASSABLE: i32 = -1;

/// An RGB colour packed into a `u32` (0x00RRGGBB).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color(pub u32);

impl Color {
    /// Fully transparent / unset.
    pub const NONE: Self = Self(0);

    /// Construct from individual RGB components.
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    #[inline]
    pub const fn r(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    #[inline]
    pub const fn g(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 & 0xFF) as u8
    }
}

/// The kinds of terrain a hex may hold.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terrain {
    #[default]
    Clear,
    Ford,
    River,
    Pike,
    Road,
    Hill,
    Mountain,
    Woods,
}

/// Static description of a terrain kind.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TerrainData {
    /// Cost of entering the hex, indexed by the entry hexside.
    pub costs: [i32; 6],
    /// Fill colour used when the hex is drawn.
    pub fill: Color,
    /// Ground elevation in levels.
    pub elevation: i32,
    /// Extra height of whatever stands on the ground (trees).
    pub height_above_ground: i32,
}

impl TerrainData {
    const fn uniform(cost: i32, fill: Color, elevation: i32) -> Self {
        Self {
            costs: [cost; 6],
            fill,
            elevation,
            height_above_ground: 0,
        }
    }
}

impl Terrain {
    pub const ALL: [Terrain; 8] = [
        Terrain::Clear,
        Terrain::Ford,
        Terrain::River,
        Terrain::Pike,
        Terrain::Road,
        Terrain::Hill,
        Terrain::Mountain,
        Terrain::Woods,
    ];

    /// The data record for this terrain kind.
    pub const fn data(self) -> TerrainData {
        match self {
            Terrain::Clear => TerrainData::uniform(4, Color::NONE, 0),
            Terrain::Ford => TerrainData::uniform(5, Color::from_rgb(0xA5, 0x2A, 0x2A), 0),
            Terrain::River => {
                TerrainData::uniform(IMPASSABLE, Color::from_rgb(0x00, 0x00, 0x8B), 0)
            }
            Terrain::Pike => TerrainData::uniform(2, Color::from_rgb(0xA9, 0xA9, 0xA9), 0),
            Terrain::Road => TerrainData::uniform(3, Color::from_rgb(0x8B, 0x45, 0x13), 0),
            Terrain::Hill => TerrainData::uniform(5, Color::from_rgb(0xF0, 0xE6, 0x8C), 1),
            Terrain::Mountain => TerrainData::uniform(6, Color::from_rgb(0xBD, 0xB7, 0x6B), 2),
            Terrain::Woods => TerrainData {
                height_above_ground: 7,
                ..TerrainData::uniform(8, Color::from_rgb(0x00, 0x80, 0x00), 0)
            },
        }
    }

    /// Cost of entering a hex of this terrain through `entry`.
    #[inline]
    pub const fn step_cost(self, entry: Hexside) -> i32 {
        self.data().costs[entry.index()]
    }

    /// Whether no hexside of this terrain can be entered.
    pub fn is_impassable(self) -> bool {
        self.data().costs.iter().all(|&c| c < 0)
    }

    /// Ground elevation plus anything standing on it.
    pub const fn height(self) -> i32 {
        let d = self.data();
        d.elevation + d.height_above_ground
    }

    /// Parse a single-character map symbol, as used in text board layouts.
    pub fn from_symbol(ch: char) -> Option<Self> {
        Some(match ch {
            '.' => Terrain::Clear,
            'F' => Terrain::Ford,
            'R' => Terrain::River,
            '=' => Terrain::Pike,
            '-' => Terrain::Road,
            'H' => Terrain::Hill,
            'M' => Terrain::Mountain,
            'W' => Terrain::Woods,
            _ => return None,
        })
    }

    /// The map symbol of this terrain kind.
    pub const fn symbol(self) -> char {
        match self {
            Terrain::Clear => '.',
            Terrain::Ford => 'F',
            Terrain::River => 'R',
            Terrain::Pike => '=',
            Terrain::Road => '-',
            Terrain::Hill => 'H',
            Terrain::Mountain => 'M',
            Terrain::Woods => 'W',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_costs() {
        assert_eq!(Terrain::Clear.step_cost(Hexside::North), 4);
        assert_eq!(Terrain::Pike.step_cost(Hexside::SouthWest), 2);
        assert_eq!(Terrain::Woods.step_cost(Hexside::NorthEast), 8);
        assert!(Terrain::River.step_cost(Hexside::South) < 0);
    }

    #[test]
    fn only_river_is_impassable() {
        for t in Terrain::ALL {
            assert_eq!(t.is_impassable(), t == Terrain::River, "{t:?}");
        }
    }

    #[test]
    fn heights() {
        assert_eq!(Terrain::Clear.height(), 0);
        assert_eq!(Terrain::Mountain.height(), 2);
        assert_eq!(Terrain::Woods.height(), 7);
        assert_eq!(Terrain::Woods.data().fill.g(), 0x80);
    }

    #[test]
    fn symbols_round_trip() {
        for t in Terrain::ALL {
            assert_eq!(Terrain::from_symbol(t.symbol()), Some(t));
        }
        assert_eq!(Terrain::from_symbol('?'), None);
    }
}
