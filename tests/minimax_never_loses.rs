//! The hard bot never loses, whatever the human plays.
//!
//! Walks every legal sequence of X moves (X moves first) with the hard bot replying
//! through the same `Game` state machine the console uses.

use tictactoe_bot::random::CustomNumberGenerator;
use tictactoe_bot::rules::legal_moves;
use tictactoe_bot::{Bot, Difficulty, Game, GameOutcome, GameState, Move};

#[derive(Debug, Default)]
struct Tally {
    bot_wins: usize,
    draws: usize,
}

fn new_game() -> Game<CustomNumberGenerator> {
    let mut game = Game::new(Bot::builder(Difficulty::Hard).build());
    game.start().unwrap();
    game
}

/// Branches over every X move from `game`, letting the bot reply on each branch.
fn explore(game: &Game<CustomNumberGenerator>, history: &mut Vec<Move>, tally: &mut Tally) {
    for mv in legal_moves(game.board()) {
        history.push(mv);
        let mut branch = game.clone();
        let mut state = branch.play_human(mv).unwrap();
        if state == GameState::BotTurn {
            state = branch.play_bot().unwrap().1;
        }

        match state {
            GameState::PlayerWon => panic!("hard bot lost after X moves {history:?}"),
            GameState::BotWon => tally.bot_wins += 1,
            GameState::Draw => tally.draws += 1,
            GameState::PlayerTurn => explore(&branch, history, tally),
            other => panic!("unexpected state {other} after {history:?}"),
        }
        assert_ne!(branch.outcome(), GameOutcome::PlayerWin);
        history.pop();
    }
}

#[test]
fn hard_bot_never_loses() {
    let mut tally = Tally::default();
    explore(&new_game(), &mut Vec::new(), &mut tally);

    assert!(tally.draws > 0);
    assert!(tally.bot_wins > 0);
}

#[test]
fn hard_bot_against_itself_is_a_draw() {
    use tictactoe_bot::policy::minimax;
    use tictactoe_bot::{Board, Mark};

    let mut board = Board::new();
    let mut to_move = Mark::X;
    while GameOutcome::of(&board) == GameOutcome::Ongoing {
        let mv = minimax::select_move(&board, to_move).unwrap();
        board.place(mv, to_move).unwrap();
        to_move = to_move.opponent();
    }
    assert_eq!(GameOutcome::of(&board), GameOutcome::Draw);
}
