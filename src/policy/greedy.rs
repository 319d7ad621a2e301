use crate::board::{Board, Mark, Move};
use crate::error::{Error, Result};
use crate::random::RandomGenerator;
use crate::rules::{is_winning_for, legal_moves};
use tracing::debug;

/// Wins if it can, blocks if it must, otherwise plays randomly.
///
/// Candidates are tried in row-major order and the first hit is taken, so when
/// several moves win (or several threats exist) the earliest cell is chosen.
pub fn select_move<K: RandomGenerator>(board: &Board, mark: Mark, random: &mut K) -> Result<Move> {
    let moves = legal_moves(board);
    if moves.is_empty() {
        return Err(Error::NoLegalMoves);
    }

    if let Some(mv) = first_completing(board, &moves, mark) {
        debug!(%mv, "greedy: winning move");
        return Ok(mv);
    }

    if let Some(mv) = first_completing(board, &moves, mark.opponent()) {
        debug!(%mv, "greedy: blocking move");
        return Ok(mv);
    }

    let mv = super::random::select_move(board, random)?;
    debug!(%mv, "greedy: no threats, random move");
    Ok(mv)
}

/// First move in `moves` that would give `mark` three in a row.
fn first_completing(board: &Board, moves: &[Move], mark: Mark) -> Option<Move> {
    moves
        .iter()
        .copied()
        .find(|&mv| is_winning_for(&board.with(mv, mark), mark))
}
