use crate::board::{Board, Mark, Move};
use crate::error::{Error, Result};
use crate::rules::{is_draw, is_winning_for, legal_moves};
use tracing::{debug, trace};

/// Score of a win found at depth 0. Each extra ply costs one point, so quicker wins
/// and slower losses score better.
pub const WIN_SCORE: i32 = 10;

/// Chooses the move with the best full-depth minimax score for `mark`.
///
/// Ties are broken in favour of the earliest move in row-major order.
pub fn select_move(board: &Board, mark: Mark) -> Result<Move> {
    let mut best: Option<(Move, i32)> = None;
    for (mv, score) in evaluate_moves(board, mark) {
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((mv, score));
        }
    }

    let (mv, score) = best.ok_or(Error::NoLegalMoves)?;
    debug!(%mv, score, "minimax: best move");
    Ok(mv)
}

/// Scores every legal move for `mark`, in row-major order.
///
/// The score is the value of the position after the move with the opponent to
/// reply, searched to the end of the game.
pub fn evaluate_moves(board: &Board, mark: Mark) -> Vec<(Move, i32)> {
    legal_moves(board)
        .into_iter()
        .map(|mv| {
            let score = minimax(&board.with(mv, mark), mark, 0, false);
            trace!(%mv, score, "minimax: candidate");
            (mv, score)
        })
        .collect()
}

fn minimax(board: &Board, me: Mark, depth: i32, maximizing: bool) -> i32 {
    if is_winning_for(board, me) {
        return WIN_SCORE - depth;
    }
    if is_winning_for(board, me.opponent()) {
        return depth - WIN_SCORE;
    }
    if is_draw(board) {
        return 0;
    }

    let children = legal_moves(board).into_iter();
    if maximizing {
        children
            .map(|mv| minimax(&board.with(mv, me), me, depth + 1, false))
            .max()
            .unwrap_or(0)
    } else {
        children
            .map(|mv| minimax(&board.with(mv, me.opponent()), me, depth + 1, true))
            .min()
            .unwrap_or(0)
    }
}
