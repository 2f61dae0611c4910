//! Hex-grid core types.
//!
//! Geometry primitives for flat-topped hex boards, dense per-hex payload
//! storage, and the terrain kinds boards are usually built from.

pub mod geom;
pub mod storage;
pub mod terrain;

pub use geom::{HexCoords, HexSize, HexSizeIter, Hexside, hex_distance};
pub use storage::{BoardStorage, Disposable};
pub use terrain::{Color, IMPASSABLE, Terrain, TerrainData};
