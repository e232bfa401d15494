//! Session state and the per-turn state machine.
//!
//! Front ends own the input/render loop; this module owns everything
//! in between: map a key, resolve the move, hand the turn to the
//! monsters when it was an ordinary step, and surface the outcome.

use serde::{Deserialize, Serialize};

use crate::action::{Direction, MoveStatus, movement};
use crate::dungeon::{Grid, LoadedLevel};
use crate::errors::GridError;
use crate::monster::advance_monsters;
use crate::player::Player;

/// Result of one game turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameLoopResult {
    /// Keep playing.
    Continue,
    /// The key mapped to no direction; nothing happened.
    NoTurn,
    /// The player picked up the amulet.
    AmuletFound,
    /// The player left through a door.
    LeftDungeon,
    /// The player escaped through the exit with treasure.
    Escaped,
    /// A monster reached the player.
    Captured,
}

/// A running dungeon session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub grid: Grid,
    pub player: Player,
    pub turn_count: u64,
    messages: Vec<String>,
}

impl GameState {
    /// Start a session from a loaded level.
    pub fn from_level(level: LoadedLevel) -> Self {
        Self {
            grid: level.grid,
            player: level.player,
            turn_count: 0,
            messages: Vec::new(),
        }
    }

    /// Append a message for the front end to display.
    pub fn message(&mut self, msg: impl Into<String>) {
        self.messages.push(msg.into());
    }

    /// Messages accumulated since the last drain.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Hand the accumulated messages to the front end.
    pub fn take_messages(&mut self) -> Vec<String> {
        core::mem::take(&mut self.messages)
    }

    /// Play one turn from a raw keypress.
    ///
    /// Unknown keys are a no-op. Otherwise the move is resolved, and
    /// when it was an ordinary step or a treasure pickup the monsters
    /// advance; every other status surfaces to the caller before any
    /// monster moves.
    pub fn advance(&mut self, key: char) -> GameLoopResult {
        let Some(direction) = Direction::from_key(key) else {
            return GameLoopResult::NoTurn;
        };
        self.turn_count += 1;

        let status = movement::step(&mut self.grid, &mut self.player, direction);
        match status {
            MoveStatus::PickedUpTreasure => self.message("You pick up a treasure."),
            MoveStatus::ReachedAmulet => self.message("You grasp the amulet!"),
            MoveStatus::ReachedDoor => self.message("You slip through the door."),
            MoveStatus::Escaped => self.message("You escape the dungeon!"),
            MoveStatus::Stayed | MoveStatus::Moved => {}
        }

        if status.triggers_monster_turn() && advance_monsters(&mut self.grid, &self.player) {
            self.message("A monster catches you!");
            return GameLoopResult::Captured;
        }

        match status {
            MoveStatus::ReachedAmulet => GameLoopResult::AmuletFound,
            MoveStatus::ReachedDoor => GameLoopResult::LeftDungeon,
            MoveStatus::Escaped => GameLoopResult::Escaped,
            MoveStatus::Stayed | MoveStatus::Moved | MoveStatus::PickedUpTreasure => {
                GameLoopResult::Continue
            }
        }
    }

    /// Double the dungeon in both dimensions, keeping the player where
    /// it stands. On failure the session is untouched.
    pub fn expand(&mut self) -> Result<(), GridError> {
        self.grid = self.grid.doubled()?;
        self.message("The dungeon rumbles and grows.");
        Ok(())
    }

    /// Glyph dump of the map, one row per line.
    pub fn render_map(&self) -> String {
        let mut out = String::with_capacity(self.grid.rows() * (self.grid.cols() + 1));
        for r in 0..self.grid.rows() {
            for tile in self.grid.row(r) {
                out.push(tile.symbol());
            }
            out.push('\n');
        }
        out
    }
}
