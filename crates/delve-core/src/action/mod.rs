//! Player actions: direction mapping and the movement resolver.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::consts::{KEY_DOWN, KEY_LEFT, KEY_RIGHT, KEY_UP};
use crate::dungeon::Position;

pub mod movement;

pub use movement::{MoveStatus, do_player_move, step};

/// Movement directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Map a keypress to a direction.
    ///
    /// Unrecognized keys are `None`; the caller treats that as a no-op
    /// turn, not an error.
    pub const fn from_key(key: char) -> Option<Self> {
        match key {
            KEY_UP => Some(Direction::Up),
            KEY_DOWN => Some(Direction::Down),
            KEY_LEFT => Some(Direction::Left),
            KEY_RIGHT => Some(Direction::Right),
            _ => None,
        }
    }

    /// Get the (row, col) unit delta for this direction
    pub const fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// The cell one step from `pos` in this direction.
    pub const fn offset(&self, pos: Position) -> Position {
        let (dr, dc) = self.delta();
        Position::new(pos.row + dr, pos.col + dc)
    }
}
