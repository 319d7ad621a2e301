//! Configuration for a console game.

use crate::policy::{Bot, Difficulty};
use crate::random::ConfiguredGenerator;

/// Settings chosen before the game starts.
///
/// # Examples
///
/// ```
/// use tictactoe_bot::config::GameConfig;
///
/// let config = GameConfig::new().with_difficulty("hard").with_seed(42);
/// assert_eq!(config.difficulty.as_deref(), Some("hard"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameConfig {
    /// Difficulty as typed by the user. `None` means ask at startup.
    pub difficulty: Option<String>,
    /// Seed for the random generator. `None` means OS randomness.
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the difficulty. The value is validated when the game starts.
    pub fn with_difficulty(mut self, difficulty: impl Into<String>) -> Self {
        self.difficulty = Some(difficulty.into());
        self
    }

    /// Set the random seed for reproducible easy and medium games.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the opponent for `difficulty` with the configured random source.
    pub fn bot(&self, difficulty: Difficulty) -> Bot<ConfiguredGenerator> {
        Bot::builder(difficulty)
            .with_random_generator(ConfiguredGenerator::from_seed(self.seed))
            .build()
    }
}
