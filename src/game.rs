//! Turn order and termination for a single human-versus-bot game.

use crate::board::{Board, Mark, Move};
use crate::error::{Error, Result};
use crate::policy::Bot;
use crate::random::{RandomGenerator, StandardRandomGenerator};
use crate::rules::{is_draw, is_winning_for};
use std::fmt;
use tracing::info;

/// Result of the game as read off the board.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum GameOutcome {
    /// Nobody has won and there are empty cells left.
    Ongoing,
    /// The human completed a line.
    PlayerWin,
    /// The bot completed a line.
    BotWin,
    /// The board is full and nobody won.
    Draw,
}

impl GameOutcome {
    /// Derives the outcome from the board. Wins are checked before a full board.
    pub fn of(board: &Board) -> Self {
        if is_winning_for(board, Mark::HUMAN) {
            GameOutcome::PlayerWin
        } else if is_winning_for(board, Mark::BOT) {
            GameOutcome::BotWin
        } else if is_draw(board) {
            GameOutcome::Draw
        } else {
            GameOutcome::Ongoing
        }
    }
}

/// Where the game is in its turn cycle.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum GameState {
    Setup,
    PlayerTurn,
    BotTurn,
    PlayerWon,
    BotWon,
    Draw,
}

impl GameState {
    pub fn name(&self) -> &'static str {
        match self {
            GameState::Setup => "setup",
            GameState::PlayerTurn => "player turn",
            GameState::BotTurn => "bot turn",
            GameState::PlayerWon => "player won",
            GameState::BotWon => "bot won",
            GameState::Draw => "draw",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, GameState::PlayerWon | GameState::BotWon | GameState::Draw)
    }

    /// The terminal state after `mover` has just played, or the other side's turn.
    fn after_move(board: &Board, mover: Mark) -> Self {
        if is_winning_for(board, mover) {
            if mover == Mark::HUMAN {
                GameState::PlayerWon
            } else {
                GameState::BotWon
            }
        } else if is_draw(board) {
            GameState::Draw
        } else if mover == Mark::HUMAN {
            GameState::BotTurn
        } else {
            GameState::PlayerTurn
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A game in progress. Owns the board; the human always moves first as X.
#[derive(Debug, Clone)]
pub struct Game<K: RandomGenerator = StandardRandomGenerator> {
    board: Board,
    bot: Bot<K>,
    state: GameState,
}

impl<K: RandomGenerator> Game<K> {
    pub fn new(bot: Bot<K>) -> Self {
        Self {
            board: Board::new(),
            bot,
            state: GameState::Setup,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Recomputed from the board on every call.
    pub fn outcome(&self) -> GameOutcome {
        GameOutcome::of(&self.board)
    }

    /// Leaves setup and hands the first turn to the player.
    pub fn start(&mut self) -> Result<GameState> {
        if self.state != GameState::Setup {
            return Err(self.wrong_turn("setup"));
        }
        info!(difficulty = %self.bot.difficulty(), "game started");
        self.state = GameState::PlayerTurn;
        Ok(self.state)
    }

    /// Plays the human's move. On an invalid move the state is unchanged.
    pub fn play_human(&mut self, mv: Move) -> Result<GameState> {
        self.expect_turn(GameState::PlayerTurn)?;
        self.board.place(mv, Mark::HUMAN)?;
        self.advance(Mark::HUMAN);
        Ok(self.state)
    }

    /// Lets the bot choose and play its move.
    pub fn play_bot(&mut self) -> Result<(Move, GameState)> {
        self.expect_turn(GameState::BotTurn)?;
        let mv = self.bot.select_move(&self.board)?;
        self.board.place(mv, self.bot.mark())?;
        self.advance(self.bot.mark());
        Ok((mv, self.state))
    }

    fn advance(&mut self, mover: Mark) {
        self.state = GameState::after_move(&self.board, mover);
        if self.state.is_terminal() {
            info!(state = %self.state, moves = self.board.moves_played(), "game over");
        }
    }

    fn expect_turn(&self, expected: GameState) -> Result<()> {
        if self.state.is_terminal() {
            return Err(Error::GameOver);
        }
        if self.state != expected {
            return Err(self.wrong_turn(expected.name()));
        }
        Ok(())
    }

    fn wrong_turn(&self, expected: &'static str) -> Error {
        Error::WrongTurn {
            expected,
            state: self.state.to_string(),
        }
    }
}
