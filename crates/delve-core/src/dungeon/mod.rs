//! Dungeon map: tile alphabet, grid storage, and the level loader.

use serde::{Deserialize, Serialize};

pub mod grid;
pub mod loader;
pub mod tile;

pub use grid::Grid;
pub use loader::{LoadedLevel, load_level, parse_level};
pub use tile::Tile;

/// A map coordinate.
///
/// Signed so that off-grid candidates (row -1 and friends) are
/// representable before the bounds check rejects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

impl core::fmt::Display for Position {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}
