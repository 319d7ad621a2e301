//! Shared helpers for integration tests

#![allow(dead_code)]

use std::collections::HashSet;
use tictactoe_bot::rules::{is_draw, is_winning_for, legal_moves};
use tictactoe_bot::{Board, Mark, Move};

pub fn board(s: &str) -> Board {
    s.parse().expect("test board should parse")
}

pub fn mv(row: usize, col: usize) -> Move {
    Move::new(row, col).expect("test move should be in range")
}

pub fn is_terminal(board: &Board) -> bool {
    is_winning_for(board, Mark::X) || is_winning_for(board, Mark::O) || is_draw(board)
}

/// Every non-terminal position reachable in an X-first game where O is to move.
pub fn positions_with_o_to_move() -> HashSet<Board> {
    fn visit(board: Board, to_move: Mark, seen: &mut HashSet<Board>, out: &mut HashSet<Board>) {
        if !seen.insert(board) || is_terminal(&board) {
            return;
        }
        if to_move == Mark::O {
            out.insert(board);
        }
        for mv in legal_moves(&board) {
            visit(board.with(mv, to_move), to_move.opponent(), seen, out);
        }
    }

    let mut seen = HashSet::new();
    let mut out = HashSet::new();
    visit(Board::new(), Mark::X, &mut seen, &mut out);
    out
}
