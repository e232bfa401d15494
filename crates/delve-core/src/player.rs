//! Player state

use serde::{Deserialize, Serialize};

use crate::dungeon::Position;

/// The adventurer: position on the current grid plus collected loot.
///
/// Invariant kept by the movement resolver and the monster advance:
/// the grid holds exactly one player tile, and its coordinates equal
/// `pos`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Position,
    pub treasure: u32,
}

impl Player {
    /// A freshly placed player with no treasure.
    pub const fn new(pos: Position) -> Self {
        Self { pos, treasure: 0 }
    }
}
