//! delve-core: core game logic for a turn-based dungeon crawler
//!
//! This crate contains the whole grid-and-rules engine with no
//! rendering or input dependencies: the tile grid, the level loader,
//! player movement, and the line-of-sight monster advance. A front
//! end drives it one keypress at a time through [`GameState`] (or
//! calls the pieces directly) and decides what to do with the
//! resulting statuses.
//!
//! It is designed to be pure and testable: everything after the
//! one-time level load is deterministic and synchronous.

pub mod action;
pub mod dungeon;
pub mod errors;
pub mod monster;
pub mod player;

mod consts;
mod gameloop;

pub use action::{Direction, MoveStatus, do_player_move, step};
pub use consts::*;
pub use dungeon::{Grid, LoadedLevel, Position, Tile, load_level, parse_level};
pub use errors::{GridError, LoadError};
pub use gameloop::{GameLoopResult, GameState};
pub use monster::advance_monsters;
pub use player::Player;
