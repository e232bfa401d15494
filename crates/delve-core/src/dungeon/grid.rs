//! Grid storage
//!
//! A rectangular tile buffer that owns its dimensions: a single flat
//! row-major `Vec<Tile>` rather than a vec-of-vecs, so every row has
//! the same length by construction.

use serde::{Deserialize, Serialize};

use super::{Position, Tile};
use crate::errors::GridError;

/// The dungeon map: `rows x cols` tiles, row-major.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    tiles: Vec<Tile>,
}

impl Grid {
    /// Allocate a grid with every cell set to [`Tile::Open`].
    pub fn open(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            tiles: vec![Tile::Open; rows * cols],
        }
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// A released (or never-allocated) grid has zero extent.
    pub const fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Check if a position lies on the grid
    pub const fn in_bounds(&self, pos: Position) -> bool {
        pos.row >= 0
            && pos.col >= 0
            && (pos.row as usize) < self.rows
            && (pos.col as usize) < self.cols
    }

    fn index(&self, pos: Position) -> usize {
        debug_assert!(self.in_bounds(pos), "position {pos} out of bounds");
        pos.row as usize * self.cols + pos.col as usize
    }

    /// Get the tile at an in-bounds position
    pub fn tile(&self, pos: Position) -> Tile {
        self.tiles[self.index(pos)]
    }

    /// Overwrite the tile at an in-bounds position
    pub fn set(&mut self, pos: Position, tile: Tile) {
        let idx = self.index(pos);
        self.tiles[idx] = tile;
    }

    /// One row of tiles, for callers that draw the map line by line.
    pub fn row(&self, row: usize) -> &[Tile] {
        let start = row * self.cols;
        &self.tiles[start..start + self.cols]
    }

    /// Free the tile buffer and zero the dimensions.
    ///
    /// Calling this on an already-released grid is a no-op.
    pub fn release(&mut self) {
        self.tiles = Vec::new();
        self.rows = 0;
        self.cols = 0;
    }

    /// Locate the player's tile, if the grid has one.
    pub fn find_player(&self) -> Option<Position> {
        self.tiles
            .iter()
            .position(|&t| t == Tile::Player)
            .map(|i| Position::new((i / self.cols) as i32, (i % self.cols) as i32))
    }

    /// Produce a grid with doubled dimensions, tiling the current
    /// pattern into all four quadrants.
    ///
    /// The player's cell is the one exception to the tiling: it is
    /// written exactly once, at its original (un-shifted) coordinates,
    /// and its three mirror positions stay open. Fails on a released
    /// grid; on failure `self` is untouched and remains usable.
    ///
    /// The caller replaces its handle (`grid = grid.doubled()?`), so
    /// the old buffer is dropped by the assignment.
    pub fn doubled(&self) -> Result<Grid, GridError> {
        if self.is_empty() {
            return Err(GridError::Empty);
        }

        let (rows, cols) = (self.rows, self.cols);
        let mut out = Grid::open(rows * 2, cols * 2);
        let mut player = None;

        for i in 0..rows {
            for j in 0..cols {
                let tile = self.tiles[i * cols + j];
                if tile == Tile::Player {
                    player = Some((i, j));
                    continue;
                }
                for (di, dj) in [(0, 0), (0, cols), (rows, 0), (rows, cols)] {
                    out.tiles[(i + di) * cols * 2 + (j + dj)] = tile;
                }
            }
        }

        if let Some((i, j)) = player {
            out.tiles[i * cols * 2 + j] = Tile::Player;
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_open_grid_all_open() {
        let grid = Grid::open(3, 4);
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 4);
        for r in 0..3 {
            for c in 0..4 {
                assert_eq!(grid.tile(Position::new(r, c)), Tile::Open);
            }
        }
    }

    #[test]
    fn test_release_is_idempotent() {
        let mut grid = Grid::open(2, 2);
        grid.release();
        assert!(grid.is_empty());
        assert_eq!(grid.rows(), 0);

        // Second release on the empty grid is a safe no-op.
        grid.release();
        assert!(grid.is_empty());
    }

    #[test]
    fn test_in_bounds_rejects_negative_and_past_edge() {
        let grid = Grid::open(3, 3);
        assert!(grid.in_bounds(Position::new(0, 0)));
        assert!(grid.in_bounds(Position::new(2, 2)));
        assert!(!grid.in_bounds(Position::new(-1, 0)));
        assert!(!grid.in_bounds(Position::new(0, -1)));
        assert!(!grid.in_bounds(Position::new(3, 0)));
        assert!(!grid.in_bounds(Position::new(0, 3)));
    }

    #[test]
    fn test_doubled_empty_grid_fails() {
        let mut grid = Grid::open(2, 2);
        grid.release();
        assert_eq!(grid.doubled(), Err(GridError::Empty));
    }

    #[test]
    fn test_doubled_failure_leaves_original_usable() {
        let grid = Grid::default();
        assert!(grid.doubled().is_err());
        // Still a valid (empty) handle.
        assert!(grid.is_empty());
    }

    #[test]
    fn test_doubled_tiles_quadrants() {
        // [[Open, Pillar], [Treasure, Player]]
        let mut grid = Grid::open(2, 2);
        grid.set(Position::new(0, 1), Tile::Pillar);
        grid.set(Position::new(1, 0), Tile::Treasure);
        grid.set(Position::new(1, 1), Tile::Player);

        let big = grid.doubled().unwrap();
        assert_eq!(big.rows(), 4);
        assert_eq!(big.cols(), 4);

        // Non-player cells appear in all four quadrants.
        for (dr, dc) in [(0, 0), (0, 2), (2, 0), (2, 2)] {
            assert_eq!(big.tile(Position::new(dr, dc + 1)), Tile::Pillar);
            assert_eq!(big.tile(Position::new(dr + 1, dc)), Tile::Treasure);
            assert_eq!(big.tile(Position::new(dr, dc)), Tile::Open);
        }

        // Exactly one player, at the original un-shifted coordinates.
        assert_eq!(big.tile(Position::new(1, 1)), Tile::Player);
        assert_eq!(big.tile(Position::new(1, 3)), Tile::Open);
        assert_eq!(big.tile(Position::new(3, 1)), Tile::Open);
        assert_eq!(big.tile(Position::new(3, 3)), Tile::Open);
        assert_eq!(big.find_player(), Some(Position::new(1, 1)));
    }

    #[test]
    fn test_find_player() {
        let mut grid = Grid::open(3, 3);
        assert_eq!(grid.find_player(), None);
        grid.set(Position::new(2, 1), Tile::Player);
        assert_eq!(grid.find_player(), Some(Position::new(2, 1)));
    }

    /// Strategy: a small grid of non-player terrain plus one player cell.
    fn grid_with_player() -> impl Strategy<Value = Grid> {
        (1usize..6, 1usize..6)
            .prop_flat_map(|(rows, cols)| {
                let terrain = prop::sample::select(vec![
                    Tile::Open,
                    Tile::Pillar,
                    Tile::Monster,
                    Tile::Treasure,
                    Tile::Amulet,
                    Tile::Door,
                    Tile::Exit,
                ]);
                (
                    Just(rows),
                    Just(cols),
                    prop::collection::vec(terrain, rows * cols),
                    0..rows,
                    0..cols,
                )
            })
            .prop_map(|(rows, cols, tiles, pr, pc)| {
                let mut grid = Grid::open(rows, cols);
                for r in 0..rows {
                    for c in 0..cols {
                        grid.set(Position::new(r as i32, c as i32), tiles[r * cols + c]);
                    }
                }
                grid.set(Position::new(pr as i32, pc as i32), Tile::Player);
                grid
            })
    }

    proptest! {
        #[test]
        fn doubled_preserves_pattern_and_single_player(grid in grid_with_player()) {
            let player = grid.find_player().unwrap();
            let big = grid.doubled().unwrap();
            prop_assert_eq!(big.rows(), grid.rows() * 2);
            prop_assert_eq!(big.cols(), grid.cols() * 2);

            let (r, c) = (grid.rows() as i32, grid.cols() as i32);
            let mut players = 0;
            for i in 0..r {
                for j in 0..c {
                    let orig = grid.tile(Position::new(i, j));
                    let expected = if orig == Tile::Player { Tile::Open } else { orig };
                    for (di, dj) in [(0, 0), (0, c), (r, 0), (r, c)] {
                        let got = big.tile(Position::new(i + di, j + dj));
                        if got == Tile::Player {
                            players += 1;
                        } else {
                            prop_assert_eq!(got, expected);
                        }
                    }
                }
            }
            prop_assert_eq!(players, 1);
            prop_assert_eq!(big.find_player(), Some(player));
        }
    }
}
