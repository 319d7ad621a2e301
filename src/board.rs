use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Width and height of the grid.
pub const SIZE: usize = 3;

/// The contents of a single cell, and the marks the two sides play with.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, Default)]
pub enum Mark {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// The human player's mark.
    X,
    /// The computer opponent's mark.
    O,
}

impl Mark {
    /// The human always plays X.
    pub const HUMAN: Mark = Mark::X;
    /// The bot always plays O.
    pub const BOT: Mark = Mark::O;

    /// Returns the mark of the other side. `Empty` has no opponent and maps to itself.
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
            Mark::Empty => Mark::Empty,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Mark::Empty => ' ',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Mark> {
        match c {
            '.' | '_' | ' ' => Some(Mark::Empty),
            'X' | 'x' => Some(Mark::X),
            'O' | 'o' => Some(Mark::O),
            _ => None,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A zero-based `(row, column)` position on the board.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub struct Move {
    row: usize,
    col: usize,
}

impl Move {
    /// Creates a move, rejecting coordinates outside the 3x3 grid.
    pub fn new(row: usize, col: usize) -> Result<Self> {
        if row >= SIZE || col >= SIZE {
            return Err(Error::OutOfBounds { row, col });
        }
        Ok(Self { row, col })
    }

    /// Creates a move from the 1-based coordinates a player types in.
    pub fn from_one_based(row: usize, col: usize) -> Result<Self> {
        match (row.checked_sub(1), col.checked_sub(1)) {
            (Some(r), Some(c)) => Move::new(r, c),
            _ => Err(Error::OutOfBounds { row, col }),
        }
    }

    /// Internal constructor for positions produced by iterating the grid itself.
    pub(crate) const fn at(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }
}

/// Displays the 1-based form shown to the player.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row + 1, self.col + 1)
    }
}

/// The 3x3 grid.
///
/// A board is 9 bytes and implements `Copy`, so hypothetical moves are explored on
/// copies made with [`Board::with`] and the original is never touched.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, Default)]
pub struct Board {
    cells: [[Mark; SIZE]; SIZE],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the mark at the given position.
    pub fn get(&self, mv: Move) -> Mark {
        self.cells[mv.row][mv.col]
    }

    pub fn is_empty_at(&self, mv: Move) -> bool {
        self.get(mv) == Mark::Empty
    }

    /// Number of marks placed so far.
    pub fn moves_played(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != Mark::Empty)
            .count()
    }

    /// Rows of the grid, top to bottom.
    pub fn rows(&self) -> &[[Mark; SIZE]; SIZE] {
        &self.cells
    }

    /// Commits `mark` at `mv`. Marks are permanent, so the target cell must be empty.
    pub fn place(&mut self, mv: Move, mark: Mark) -> Result<()> {
        if mark == Mark::Empty {
            return Err(Error::EmptyMark);
        }
        if !self.is_empty_at(mv) {
            return Err(Error::CellOccupied {
                row: mv.row,
                col: mv.col,
            });
        }
        self.cells[mv.row][mv.col] = mark;
        Ok(())
    }

    /// Returns a copy of the board with `mark` written at `mv`.
    ///
    /// Used for look-ahead: the receiver stays as it was.
    pub fn with(&self, mv: Move, mark: Mark) -> Board {
        let mut copy = *self;
        copy.cells[mv.row][mv.col] = mark;
        copy
    }
}

impl FromStr for Board {
    type Err = Error;

    /// Parses 9 cells in row-major order, e.g. `"XX./OO./..."`.
    ///
    /// `.`, `_` and a space inside a row stand for an empty cell. Row separators
    /// (`/`, `|`, newlines) are ignored.
    fn from_str(s: &str) -> Result<Self> {
        let chars: Vec<char> = s
            .lines()
            .flat_map(|line| line.chars())
            .filter(|&c| c != '/' && c != '|' && c != '\r')
            .collect();
        if chars.len() != SIZE * SIZE {
            return Err(Error::InvalidBoardLength {
                expected: SIZE * SIZE,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut board = Board::new();
        for (i, &c) in chars.iter().enumerate() {
            let mark = Mark::from_char(c).ok_or_else(|| Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
            board.cells[i / SIZE][i % SIZE] = mark;
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f, "---------")?;
            }
            writeln!(f, "{} | {} | {}", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}
