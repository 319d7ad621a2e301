//! Terminal-state evaluation and move enumeration.

use crate::board::{Board, Mark, Move, SIZE};

/// The eight winning lines as `(row, col)` triples: rows, columns, then both diagonals.
pub const WINNING_LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Returns true if `mark` fills any row, column or diagonal.
///
/// Never true for [`Mark::Empty`].
pub fn is_winning_for(board: &Board, mark: Mark) -> bool {
    if mark == Mark::Empty {
        return false;
    }
    WINNING_LINES.iter().any(|line| {
        line.iter()
            .all(|&(row, col)| board.get(Move::at(row, col)) == mark)
    })
}

/// Returns true if every cell is taken.
///
/// This says nothing about a winner: a full board with three in a row is a win, so
/// callers check [`is_winning_for`] first.
pub fn is_draw(board: &Board) -> bool {
    board.rows().iter().flatten().all(|&cell| cell != Mark::Empty)
}

/// All empty cells in row-major order.
pub fn legal_moves(board: &Board) -> Vec<Move> {
    (0..SIZE)
        .flat_map(|row| (0..SIZE).map(move |col| Move::at(row, col)))
        .filter(|&mv| board.is_empty_at(mv))
        .collect()
}
