//! Move selection for the computer opponent.
//!
//! Each difficulty level maps to one policy:
//!
//! | Difficulty | Policy                                         |
//! |------------|------------------------------------------------|
//! | `Easy`     | [`random`]: any legal move                     |
//! | `Medium`   | [`greedy`]: win now, else block, else random   |
//! | `Hard`     | [`minimax`]: exhaustive search, never loses    |

pub mod greedy;
pub mod minimax;
pub mod random;

use crate::board::{Board, Mark, Move};
use crate::error::{Error, Result};
use crate::random::{RandomGenerator, StandardRandomGenerator};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// How strong the computer opponent plays.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, Default)]
pub enum Difficulty {
    /// Uniformly random legal moves.
    #[default]
    Easy,
    /// Takes a winning move or blocks an immediate threat, otherwise random.
    Medium,
    /// Perfect play.
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl FromStr for Difficulty {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase();
        Difficulty::ALL
            .into_iter()
            .find(|d| d.as_str() == normalized)
            .ok_or_else(|| Error::UnknownDifficulty {
                input: s.trim().to_string(),
            })
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The computer opponent: a difficulty level, the mark it plays and its source of randomness.
#[derive(Debug, Clone)]
pub struct Bot<K: RandomGenerator = StandardRandomGenerator> {
    difficulty: Difficulty,
    mark: Mark,
    random: K,
}

/// A builder for creating instances of `Bot`.
pub struct BotBuilder<K: RandomGenerator> {
    difficulty: Difficulty,
    random_generator: K,
}

impl<K: RandomGenerator> BotBuilder<K> {
    /// Creates a new builder with a default random generator.
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            random_generator: K::default(),
        }
    }

    /// Sets the random number generator used by the easy and medium levels.
    pub fn with_random_generator(mut self, rg: K) -> Self {
        self.random_generator = rg;
        self
    }

    pub fn build(self) -> Bot<K> {
        Bot {
            difficulty: self.difficulty,
            mark: Mark::BOT,
            random: self.random_generator,
        }
    }
}

impl<K: RandomGenerator> Bot<K> {
    /// Returns a new builder for `Bot`.
    pub fn builder(difficulty: Difficulty) -> BotBuilder<K> {
        BotBuilder::new(difficulty)
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Chooses the bot's next move without touching `board`.
    ///
    /// Fails with [`Error::NoLegalMoves`] on a full board.
    pub fn select_move(&mut self, board: &Board) -> Result<Move> {
        let mv = match self.difficulty {
            Difficulty::Easy => random::select_move(board, &mut self.random)?,
            Difficulty::Medium => greedy::select_move(board, self.mark, &mut self.random)?,
            Difficulty::Hard => minimax::select_move(board, self.mark)?,
        };
        debug!(difficulty = %self.difficulty, %mv, "bot selected move");
        Ok(mv)
    }
}

impl Bot<StandardRandomGenerator> {
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        BotBuilder::new(difficulty).build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::CustomNumberGenerator;
    use crate::rules::{is_winning_for, legal_moves};

    #[test]
    fn parses_difficulty_case_insensitively() {
        assert_eq!("easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!("MEDIUM".parse::<Difficulty>().unwrap(), Difficulty::Medium);
        assert_eq!("  Hard\n".parse::<Difficulty>().unwrap(), Difficulty::Hard);
    }

    #[test]
    fn rejects_unknown_difficulty() {
        let err = "impossible".parse::<Difficulty>().unwrap_err();
        assert!(matches!(err, Error::UnknownDifficulty { ref input } if input == "impossible"));
    }

    #[test]
    fn difficulty_display_round_trips() {
        for d in Difficulty::ALL {
            assert_eq!(d.to_string().parse::<Difficulty>().unwrap(), d);
        }
    }

    #[test]
    fn every_level_takes_only_empty_cells() {
        let board: Board = "XO./.X./...".parse().unwrap();
        for difficulty in Difficulty::ALL {
            // arrange
            let mut bot = Bot::builder(difficulty)
                .with_random_generator(CustomNumberGenerator::new(5))
                .build();
            let before = board;

            // act
            let mv = bot.select_move(&board).unwrap();

            // assert
            assert_eq!(board, before);
            assert!(legal_moves(&board).contains(&mv));
        }
    }

    #[test]
    fn medium_and_hard_finish_a_won_position() {
        let board: Board = "XX./OO./...".parse().unwrap();
        for difficulty in [Difficulty::Medium, Difficulty::Hard] {
            let mut bot: Bot<CustomNumberGenerator> = Bot::builder(difficulty).build();
            let mv = bot.select_move(&board).unwrap();
            assert_eq!(mv, Move::new(1, 2).unwrap());
            assert!(is_winning_for(&board.with(mv, bot.mark()), Mark::O));
        }
    }

    #[test]
    fn full_board_is_an_error_at_every_level() {
        let board: Board = "XOX/XOO/OXX".parse().unwrap();
        for difficulty in Difficulty::ALL {
            let mut bot: Bot<CustomNumberGenerator> = Bot::builder(difficulty).build();
            assert!(matches!(bot.select_move(&board), Err(Error::NoLegalMoves)));
        }
    }

    #[test]
    fn bot_always_plays_o() {
        let bot = Bot::from_difficulty(Difficulty::Hard);
        assert_eq!(bot.mark(), Mark::O);
        assert_eq!(bot.difficulty(), Difficulty::Hard);
    }
}
