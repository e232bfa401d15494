//! Monster advance
//!
//! Monsters react to the player along straight lines of sight: each
//! turn, every monster the player could see along a cardinal ray takes
//! one step toward the player.

use crate::action::Direction;
use crate::dungeon::{Grid, Position, Tile};
use crate::player::Player;

/// Advance monsters one step along the four cardinal rays from the
/// player, and report whether one of them reached the player's cell.
///
/// Each ray is scanned outward from the player (the player's own cell
/// excluded). A pillar ends the ray: nothing behind it has line of
/// sight this turn. A monster seen before that moves one cell toward
/// the player; since the scan only moves outward, a monster that just
/// advanced is not advanced again by the same ray. Rays are processed
/// Up, Down, Left, Right in that order.
///
/// The player's position is never modified here; on capture the
/// player's cell holds the monster tile and the caller decides the
/// loss.
pub fn advance_monsters(grid: &mut Grid, player: &Player) -> bool {
    for dir in [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ] {
        advance_along_ray(grid, player.pos, dir);
    }
    grid.tile(player.pos) == Tile::Monster
}

fn advance_along_ray(grid: &mut Grid, origin: Position, dir: Direction) {
    let (dr, dc) = dir.delta();
    let mut pos = dir.offset(origin);

    while grid.in_bounds(pos) {
        let tile = grid.tile(pos);
        if tile.blocks_sight() {
            break;
        }
        if tile == Tile::Monster {
            // One step back toward the ray's origin.
            let closer = Position::new(pos.row - dr, pos.col - dc);
            grid.set(pos, Tile::Open);
            grid.set(closer, Tile::Monster);
        }
        pos = dir.offset(pos);
    }
}
