//! Level loader
//!
//! Parses a whitespace-delimited level description:
//!
//! ```text
//! <rows> <cols>
//! <playerRow> <playerCol>
//! rows x cols tile glyphs, row-major
//! ```
//!
//! The glyph at the declared player coordinates is overwritten with the
//! player tile, so a level source does not have to mark the start cell.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{Grid, Position, Tile};
use crate::errors::LoadError;
use crate::player::Player;

/// A freshly loaded level: the grid plus the player's starting state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadedLevel {
    pub grid: Grid,
    pub player: Player,
}

/// Open a level file and parse it.
pub fn load_level(path: impl AsRef<Path>) -> Result<LoadedLevel, LoadError> {
    let file = File::open(path)?;
    parse_level(BufReader::new(file))
}

/// Parse a level description from any reader.
///
/// Failure leaves no partial state behind; the reader may have been
/// partially consumed on the early-error paths.
pub fn parse_level<R: BufRead>(mut reader: R) -> Result<LoadedLevel, LoadError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    let mut tokens = text.split_whitespace();

    let rows = parse_number(&mut tokens, "row count")?;
    let cols = parse_number(&mut tokens, "column count")?;
    if rows <= 0 || cols <= 0 {
        return Err(LoadError::NonPositiveDimensions { rows, cols });
    }
    let (height, width) = (rows as usize, cols as usize);

    let player_row = parse_number(&mut tokens, "player row")?;
    let player_col = parse_number(&mut tokens, "player column")?;
    if player_row < 0 || player_row >= rows || player_col < 0 || player_col >= cols {
        return Err(LoadError::PlayerOutOfBounds {
            row: player_row,
            col: player_col,
            rows: height,
            cols: width,
        });
    }

    let mut grid = Grid::open(height, width);
    let mut glyphs = tokens.flat_map(|t| t.chars());
    for r in 0..height {
        for c in 0..width {
            let glyph = glyphs.next().ok_or(LoadError::MissingToken {
                expected: "tile glyph",
            })?;
            let tile = Tile::from_symbol(glyph).ok_or(LoadError::UnknownTile(glyph))?;
            grid.set(Position::new(r as i32, c as i32), tile);
        }
    }

    let start = Position::new(player_row as i32, player_col as i32);
    grid.set(start, Tile::Player);

    Ok(LoadedLevel {
        grid,
        player: Player::new(start),
    })
}

fn parse_number<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    field: &'static str,
) -> Result<i64, LoadError> {
    let token = tokens.next().ok_or(LoadError::MissingToken { expected: field })?;
    token.parse().map_err(|_| LoadError::BadNumber {
        field,
        token: token.to_string(),
    })
}
