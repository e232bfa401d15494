//! Error types for level loading and grid operations.

use thiserror::Error;

/// Errors raised while loading a level description
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("could not read level source: {0}")]
    Io(#[from] std::io::Error),

    #[error("level dimensions must be positive, got {rows}x{cols}")]
    NonPositiveDimensions { rows: i64, cols: i64 },

    #[error("player start ({row},{col}) is outside a {rows}x{cols} level")]
    PlayerOutOfBounds {
        row: i64,
        col: i64,
        rows: usize,
        cols: usize,
    },

    #[error("level source ended early: expected {expected}")]
    MissingToken { expected: &'static str },

    #[error("expected a number for {field}, got '{token}'")]
    BadNumber { field: &'static str, token: String },

    #[error("unknown tile glyph '{0}'")]
    UnknownTile(char),
}

/// Errors raised by grid operations
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// The grid has been released (zero extent); it cannot be resized.
    #[error("grid is empty")]
    Empty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_error_display() {
        let err = LoadError::NonPositiveDimensions { rows: 0, cols: 5 };
        assert!(err.to_string().contains("0x5"));

        let err = LoadError::UnknownTile('z');
        assert!(err.to_string().contains('z'));

        let err = LoadError::PlayerOutOfBounds {
            row: 7,
            col: 1,
            rows: 3,
            cols: 3,
        };
        assert!(err.to_string().contains("(7,1)"));
    }

    #[test]
    fn test_grid_error_display() {
        assert_eq!(GridError::Empty.to_string(), "grid is empty");
    }
}
