use crate::board::{Board, Move};
use crate::error::{Error, Result};
use crate::random::RandomGenerator;
use crate::rules::legal_moves;

/// Picks any legal move uniformly at random.
pub fn select_move<K: RandomGenerator>(board: &Board, random: &mut K) -> Result<Move> {
    let moves = legal_moves(board);
    random.choose(&moves).copied().ok_or(Error::NoLegalMoves)
}
