//! Tic-tac-toe against a computer opponent with three difficulty levels.
//!
//! The engine is a set of pure functions over a 3x3 [`Board`]: win and draw
//! detection, legal move enumeration, and one move-selection policy per
//! [`Difficulty`]. The hard level runs an exhaustive minimax search and never loses.
//! A small state machine ([`Game`]) and a text front end ([`console`]) turn those
//! into a playable game.
//!
//! # Example
//!
//! ```rust
//! use tictactoe_bot::{Board, Bot, Difficulty, Mark, Move};
//! use tictactoe_bot::rules::is_winning_for;
//!
//! // X has two in the top row, O has two in the middle row
//! let board: Board = "XX./OO./...".parse().unwrap();
//!
//! // The hard bot completes its own line rather than blocking
//! let mut bot = Bot::from_difficulty(Difficulty::Hard);
//! let best_move = bot.select_move(&board).unwrap();
//! assert_eq!(best_move, Move::new(1, 2).unwrap());
//!
//! let mut board = board;
//! board.place(best_move, Mark::O).unwrap();
//! assert!(is_winning_for(&board, Mark::O));
//! ```

/// The board, its cells and moves.
pub mod board;
/// Configuration for a console game.
pub mod config;
/// Prompts, input validation and announcements for playing in a terminal.
pub mod console;
/// Error types shared by the whole crate.
pub mod error;
/// Turn order and game-over detection.
pub mod game;
/// Move selection for each difficulty level.
pub mod policy;
/// Traits and implementations for random number generation.
pub mod random;
/// Win and draw detection, legal moves.
pub mod rules;

pub use board::{Board, Mark, Move};
pub use error::{Error, Result};
pub use game::{Game, GameOutcome, GameState};
pub use policy::{Bot, BotBuilder, Difficulty};
