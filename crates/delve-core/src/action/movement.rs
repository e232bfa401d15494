//! Movement resolver
//!
//! Validates a candidate player move, applies it to the grid and the
//! player in place, and classifies the outcome.

use serde::{Deserialize, Serialize};
use strum::Display;

use super::Direction;
use crate::consts::EXIT_TREASURE_REQUIRED;
use crate::dungeon::{Grid, Position, Tile};
use crate::player::Player;

/// Outcome of a single move attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum MoveStatus {
    /// Blocked or out of bounds; the player did not move.
    Stayed,
    /// Stepped onto an open tile.
    Moved,
    /// Stepped onto a treasure tile; the count went up by one.
    PickedUpTreasure,
    /// Stepped onto the amulet.
    ReachedAmulet,
    /// Stepped onto a door.
    ReachedDoor,
    /// Stepped onto the exit carrying treasure.
    Escaped,
}

impl MoveStatus {
    /// Whether monsters get their advance after this outcome.
    ///
    /// Only an ordinary step or a treasure pickup hands the turn over;
    /// terminal outcomes and blocked moves surface to the caller first.
    pub const fn triggers_monster_turn(&self) -> bool {
        matches!(self, MoveStatus::Moved | MoveStatus::PickedUpTreasure)
    }
}

/// Resolve a move toward `candidate`, mutating `grid` and `player`.
///
/// Rules, first match wins:
/// 1. Out of bounds, pillar, or monster: snap back, [`MoveStatus::Stayed`].
/// 2. Treasure: pick it up.
/// 3. Amulet, door: step on, report the marker.
/// 4. Exit: only with at least one treasure, otherwise snap back.
/// 5. Open: a plain step.
///
/// The prior cell always becomes open and the final cell becomes the
/// player tile, so markers are consumed by stepping onto them and the
/// single-player invariant holds afterwards.
pub fn do_player_move(grid: &mut Grid, player: &mut Player, candidate: Position) -> MoveStatus {
    let mut dest = candidate;

    let status = if !grid.in_bounds(candidate) || grid.tile(candidate).blocks_movement() {
        dest = player.pos;
        MoveStatus::Stayed
    } else {
        match grid.tile(candidate) {
            Tile::Treasure => {
                player.treasure += 1;
                MoveStatus::PickedUpTreasure
            }
            Tile::Amulet => MoveStatus::ReachedAmulet,
            Tile::Door => MoveStatus::ReachedDoor,
            Tile::Exit => {
                if player.treasure >= EXIT_TREASURE_REQUIRED {
                    MoveStatus::Escaped
                } else {
                    dest = player.pos;
                    MoveStatus::Stayed
                }
            }
            _ => MoveStatus::Moved,
        }
    };

    grid.set(player.pos, Tile::Open);
    grid.set(dest, Tile::Player);
    player.pos = dest;
    status
}

/// Resolve one step in `direction` from the player's current cell.
pub fn step(grid: &mut Grid, player: &mut Player, direction: Direction) -> MoveStatus {
    do_player_move(grid, player, direction.offset(player.pos))
}
