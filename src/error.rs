//! Error types for the teacher crate

use thiserror::Error;

use crate::tictactoe::Coord;

/// Main error type for the teacher crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("no legal move: the board has no empty cells")]
    NoLegalMove,

    #[error("invalid move: cell {coord} is occupied or off the board")]
    InvalidMove { coord: Coord },

    #[error("skill level {value} must be a finite number in [0, 1]")]
    InvalidSkillLevel { value: f64 },

    #[error("board size {size} is not supported (must be at least 2)")]
    InvalidBoardSize { size: usize },

    #[error("board is {got}x{got} but the teacher was configured for {expected}x{expected}")]
    BoardSizeMismatch { expected: usize, got: usize },

    #[error("board string has wrong length: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid player '{player}' (expected 'X' or 'O')")]
    InvalidPlayerString { player: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
