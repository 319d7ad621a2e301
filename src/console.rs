//! Text front end: prompts, input validation and announcements.
//!
//! Everything is generic over `BufRead`/`Write` so the whole game can be driven
//! from in-memory buffers.

use crate::board::{Board, Move};
use crate::config::GameConfig;
use crate::error::{Error, Result};
use crate::game::{Game, GameOutcome, GameState};
use crate::policy::Difficulty;
use crate::random::RandomGenerator;
use std::io::{BufRead, Write};
use std::num::IntErrorKind;
use tracing::{debug, warn};

pub const WELCOME: &str = "Welcome to Tic-Tac-Toe!";
pub const DIFFICULTY_PROMPT: &str = "Choose difficulty (easy, medium, hard): ";
pub const DIFFICULTY_FALLBACK: &str = "Invalid difficulty. Defaulting to easy.";
pub const MOVE_PROMPT: &str = "Enter your move (row and column, e.g., 1 1): ";
pub const INVALID_INPUT: &str = "Invalid input! Enter row and column numbers between 1 and 3.";
pub const INVALID_MOVE: &str = "Invalid move! Try again.";
pub const BOT_THINKING: &str = "Bot is making a move...";
pub const PLAYER_WON: &str = "Congratulations, you win!";
pub const BOT_WON: &str = "Bot wins! Better luck next time.";
pub const DRAW: &str = "It's a draw!";

/// Parses a line of the form `"row col"` with 1-based coordinates.
///
/// Tokens after the second are ignored. Any integer counts as a number, so
/// `"1 -1"` or `"1 99999999999999999999"` is out of bounds rather than
/// malformed. Whether the cell is free is up to the caller.
pub fn parse_move(line: &str) -> Result<Move> {
    let mut tokens = line.split_whitespace();
    let (Some(row), Some(col)) = (tokens.next(), tokens.next()) else {
        return Err(Error::InvalidMoveInput {
            input: line.trim().to_string(),
            reason: "expected a row and a column",
        });
    };

    let parse = |token: &str| match token.parse::<i64>() {
        Ok(value) => Ok(value),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(Error::InvalidMoveInput {
                input: line.trim().to_string(),
                reason: "row and column must be numbers",
            }),
        },
    };
    let (row, col) = (parse(row)?, parse(col)?);
    // Negative coordinates are out of range just like zero.
    let one_based = |value: i64| usize::try_from(value).unwrap_or(0);
    Move::from_one_based(one_based(row), one_based(col))
}

/// Maps a typed difficulty to a level, falling back to easy with a warning.
pub fn resolve_difficulty<W: Write>(raw: &str, output: &mut W) -> Result<Difficulty> {
    match raw.parse::<Difficulty>() {
        Ok(difficulty) => Ok(difficulty),
        Err(err) => {
            warn!(%err, "falling back to easy difficulty");
            writeln!(output, "{DIFFICULTY_FALLBACK}").map_err(Error::io("write warning"))?;
            Ok(Difficulty::Easy)
        }
    }
}

/// Asks for a difficulty level.
pub fn prompt_difficulty<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<Difficulty> {
    let answer = prompt(input, output, DIFFICULTY_PROMPT)?;
    resolve_difficulty(&answer, output)
}

/// Asks for the player's move until a free cell is named.
pub fn prompt_move<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    board: &Board,
) -> Result<Move> {
    loop {
        let line = prompt(input, output, MOVE_PROMPT)?;
        let message = match parse_move(&line) {
            Ok(mv) if board.is_empty_at(mv) => return Ok(mv),
            Ok(_) | Err(Error::OutOfBounds { .. }) => INVALID_MOVE,
            Err(Error::InvalidMoveInput { .. }) => INVALID_INPUT,
            Err(err) => return Err(err),
        };
        debug!(input = line.trim(), "rejected move input");
        writeln!(output, "{message}").map_err(Error::io("write message"))?;
    }
}

/// Writes the board followed by a blank line.
pub fn render<W: Write>(output: &mut W, board: &Board) -> Result<()> {
    writeln!(output, "{board}").map_err(Error::io("render board"))
}

/// Writes the closing line for a finished game. Nothing is written while it is ongoing.
pub fn announce<W: Write>(output: &mut W, outcome: GameOutcome) -> Result<()> {
    let message = match outcome {
        GameOutcome::PlayerWin => PLAYER_WON,
        GameOutcome::BotWin => BOT_WON,
        GameOutcome::Draw => DRAW,
        GameOutcome::Ongoing => return Ok(()),
    };
    writeln!(output, "{message}").map_err(Error::io("announce result"))
}

/// Plays `game` to the end, reading the player's moves from `input`.
pub fn play<R: BufRead, W: Write, K: RandomGenerator>(
    game: &mut Game<K>,
    input: &mut R,
    output: &mut W,
) -> Result<GameOutcome> {
    if game.state() == GameState::Setup {
        game.start()?;
    }
    render(output, game.board())?;

    while !game.state().is_terminal() {
        match game.state() {
            GameState::PlayerTurn => {
                let mv = prompt_move(input, output, game.board())?;
                game.play_human(mv)?;
            }
            GameState::BotTurn => {
                writeln!(output, "{BOT_THINKING}").map_err(Error::io("write message"))?;
                let (mv, _) = game.play_bot()?;
                writeln!(output, "Bot plays {mv}.").map_err(Error::io("write message"))?;
            }
            state => {
                return Err(Error::WrongTurn {
                    expected: "player turn or bot turn",
                    state: state.to_string(),
                });
            }
        }
        render(output, game.board())?;
    }

    let outcome = game.outcome();
    announce(output, outcome)?;
    Ok(outcome)
}

/// Runs a whole session: greeting, difficulty selection and one game.
pub fn run<R: BufRead, W: Write>(
    config: &GameConfig,
    input: &mut R,
    output: &mut W,
) -> Result<GameOutcome> {
    writeln!(output, "{WELCOME}").map_err(Error::io("write greeting"))?;
    let difficulty = match &config.difficulty {
        Some(raw) => resolve_difficulty(raw, output)?,
        None => prompt_difficulty(input, output)?,
    };

    let mut game = Game::new(config.bot(difficulty));
    play(&mut game, input, output)
}

fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, text: &str) -> Result<String> {
    write!(output, "{text}").map_err(Error::io("write prompt"))?;
    output.flush().map_err(Error::io("flush output"))?;

    // Bytes that are not UTF-8 become replacement characters and fail parsing later.
    let mut line = Vec::new();
    let read = input
        .read_until(b'\n', &mut line)
        .map_err(Error::io("read input"))?;
    if read == 0 {
        return Err(Error::InputClosed);
    }
    Ok(String::from_utf8_lossy(&line).trim().to_string())
}
