//! Full sessions driven through the console front end with scripted input

use std::io::Cursor;
use tictactoe_bot::config::GameConfig;
use tictactoe_bot::console::{self, BOT_WON, DIFFICULTY_FALLBACK, DIFFICULTY_PROMPT, DRAW, WELCOME};
use tictactoe_bot::{Error, GameOutcome};

fn run(config: &GameConfig, script: &str) -> (Result<GameOutcome, Error>, String) {
    let mut input = Cursor::new(script.to_string());
    let mut output = Vec::new();
    let result = console::run(config, &mut input, &mut output);
    (result, String::from_utf8(output).unwrap())
}

#[test]
fn prompts_for_difficulty_then_plays_hard() {
    // arrange
    let config = GameConfig::new();

    // act
    let (result, text) = run(&config, "HARD\n1 1\n1 2\n3 3\n");

    // assert
    assert_eq!(result.unwrap(), GameOutcome::BotWin);
    assert!(text.starts_with(&format!("{WELCOME}\n{DIFFICULTY_PROMPT}")));
    assert!(text.ends_with(&format!("{BOT_WON}\n")));
}

#[test]
fn preconfigured_difficulty_skips_the_prompt() {
    let config = GameConfig::new().with_difficulty("hard");
    // centre opening, then blocking every threat, ends with a full board
    let (result, text) = run(&config, "2 2\n1 3\n2 1\n3 2\n3 3\n");

    assert!(!text.contains(DIFFICULTY_PROMPT));
    assert_eq!(result.unwrap(), GameOutcome::Draw);
    assert!(text.ends_with(&format!("{DRAW}\n")));
}

#[test]
fn unknown_difficulty_plays_easy_with_a_warning() {
    let config = GameConfig::new().with_difficulty("legendary").with_seed(7);
    let script = "1 1\n1 2\n1 3\n2 1\n2 2\n2 3\n3 1\n3 2\n3 3\n".to_string();
    let (result, text) = run(&config, &script);

    assert!(text.contains(DIFFICULTY_FALLBACK));
    assert!(result.unwrap() != GameOutcome::Ongoing);
}

#[test]
fn seeded_sessions_are_reproducible() {
    let config = GameConfig::new().with_difficulty("medium").with_seed(99);
    let script = "1 1\n1 2\n1 3\n2 1\n2 2\n2 3\n3 1\n3 2\n3 3\n".to_string();
    let (first, first_text) = run(&config, &script);
    let (second, second_text) = run(&config, &script);

    assert_eq!(first.unwrap(), second.unwrap());
    assert_eq!(first_text, second_text);
}

#[test]
fn closed_input_aborts_the_session() {
    let config = GameConfig::new().with_difficulty("easy");
    let (result, _) = run(&config, "1 1\n");
    assert!(matches!(result, Err(Error::InputClosed)));
}
