//! Error types for the tic-tac-toe crate

use thiserror::Error;

/// Main error type for the crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("position ({row}, {col}) is out of bounds (row and column must be 0-2)")]
    OutOfBounds { row: usize, col: usize },

    #[error("invalid move: cell ({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },

    #[error("cannot place an empty mark")]
    EmptyMark,

    #[error("no legal moves available")]
    NoLegalMoves,

    #[error("game already over")]
    GameOver,

    #[error("wrong turn: expected {expected}, but the game is in state '{state}'")]
    WrongTurn { expected: &'static str, state: String },

    #[error("unknown difficulty '{input}' (expected easy, medium or hard)")]
    UnknownDifficulty { input: String },

    #[error("invalid move input '{input}': {reason}")]
    InvalidMoveInput { input: String, reason: &'static str },

    #[error("board string has the wrong size: expected {expected} cells, got {got} in '{context}'")]
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

    #[error("input closed while waiting for the player")]
    InputClosed,

    #[error("failed to {operation}: {source}")]
    Io {
        operation: &'static str,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Wraps an I/O error with a short description of what was being attempted.
    pub fn io(operation: &'static str) -> impl FnOnce(std::io::Error) -> Error {
        move |source| Error::Io { operation, source }
    }
}
