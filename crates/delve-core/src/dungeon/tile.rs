//! Tile types

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

use crate::consts::{
    S_AMULET, S_DOOR, S_EXIT, S_MONSTER, S_OPEN, S_PILLAR, S_PLAYER, S_TREASURE,
};

/// What a single dungeon cell holds.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum Tile {
    #[default]
    Open = 0,
    Pillar = 1,
    Player = 2,
    Monster = 3,
    Treasure = 4,
    Amulet = 5,
    Door = 6,
    Exit = 7,
}

impl Tile {
    /// Get the display character for this tile
    pub const fn symbol(&self) -> char {
        match self {
            Tile::Open => S_OPEN,
            Tile::Pillar => S_PILLAR,
            Tile::Player => S_PLAYER,
            Tile::Monster => S_MONSTER,
            Tile::Treasure => S_TREASURE,
            Tile::Amulet => S_AMULET,
            Tile::Door => S_DOOR,
            Tile::Exit => S_EXIT,
        }
    }

    /// Parse a display character back into a tile.
    ///
    /// Returns `None` for characters outside the alphabet; the level
    /// loader turns that into an explicit load failure.
    pub fn from_symbol(c: char) -> Option<Self> {
        Tile::iter().find(|t| t.symbol() == c)
    }

    /// Check if the player is blocked from stepping here
    pub const fn blocks_movement(&self) -> bool {
        matches!(self, Tile::Pillar | Tile::Monster)
    }

    /// Check if this tile cuts a line-of-sight ray.
    ///
    /// Only pillars block sight; a monster on the ray does not hide
    /// monsters behind it.
    pub const fn blocks_sight(&self) -> bool {
        matches!(self, Tile::Pillar)
    }
}
