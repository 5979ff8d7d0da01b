//! The playing grid and its placement rules

use anyhow::{anyhow, Result};

use crate::{lines, WIN_LENGTH};

/// A placed tile belonging to one of the two sides
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Piece {
    PlayerOne,
    PlayerTwo,
}

impl Piece {
    /// Returns the piece of the opposing side
    pub fn opponent(self) -> Self {
        match self {
            Piece::PlayerOne => Piece::PlayerTwo,
            Piece::PlayerTwo => Piece::PlayerOne,
        }
    }
}

/// A single grid slot, empty or holding a piece
pub type Cell = Option<Piece>;

/// A contiguous 4-cell slice of the grid along one scan orientation,
/// the unit of heuristic scoring
pub type Window = [Cell; WIN_LENGTH];

/// A fixed-size playing grid
///
/// Row 0 is the top of the grid; gravity fills each column from row
/// `H - 1` upwards, so non-empty cells always form a contiguous run at
/// the bottom of their column.
///
/// Boards are plain values: the search copies one before every
/// hypothetical move so sibling branches never observe each other's
/// speculative placements.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Board<const W: usize, const H: usize> {
    cells: [[Cell; W]; H],
}

impl<const W: usize, const H: usize> Board<W, H> {
    /// Creates an empty board
    pub fn new() -> Self {
        Self {
            cells: [[None; W]; H],
        }
    }

    /// Builds a position from a string of 1-indexed column moves,
    /// alternating sides starting with player one
    pub fn from_moves<S: AsRef<str>>(moves: S) -> Result<Self> {
        let mut board = Self::new();
        let mut piece = Piece::PlayerOne;

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column) if (1..=W).contains(&column) => {
                    let column = column - 1;
                    match board.landing_row(column) {
                        Some(row) => board.place(row, column, piece),
                        None => {
                            return Err(anyhow!("Invalid move, column {} full", column + 1));
                        }
                    }
                    // abort if the position is won at any point
                    if lines::has_four_in_a_row(&board, piece) {
                        return Err(anyhow!("Invalid position, game is over"));
                    }
                    piece = piece.opponent();
                }
                _ => return Err(anyhow!("could not parse '{}' as a valid move", column_char)),
            }
        }
        Ok(board)
    }

    /// Returns the contents of a single slot
    pub fn cell(&self, row: usize, column: usize) -> Cell {
        self.cells[row][column]
    }

    /// True iff the top slot of `column` is still open
    pub fn playable(&self, column: usize) -> bool {
        self.cells[0][column].is_none()
    }

    /// The lowest open row of `column`, scanning from the bottom upwards,
    /// or `None` when the column is full
    pub fn landing_row(&self, column: usize) -> Option<usize> {
        (0..H).rev().find(|&row| self.cells[row][column].is_none())
    }

    /// Writes `piece` into a slot directly
    ///
    /// `row` must come from [`landing_row`] on this same board state,
    /// otherwise the gravity invariant is broken.
    ///
    /// [`landing_row`]: #method.landing_row
    pub fn place(&mut self, row: usize, column: usize, piece: Piece) {
        self.cells[row][column] = Some(piece);
    }

    /// Drops `piece` into `column`, returning the row it landed in,
    /// or `None` when the column is full
    pub fn drop_piece(&mut self, column: usize, piece: Piece) -> Option<usize> {
        let row = self.landing_row(column)?;
        self.place(row, column, piece);
        Some(row)
    }

    /// Columns that can still receive a piece, in ascending index order
    ///
    /// An empty result is the "no moves left" terminal signal.
    pub fn playable_columns(&self) -> Vec<usize> {
        (0..W).filter(|&column| self.playable(column)).collect()
    }
}

impl<const W: usize, const H: usize> Default for Board<W, H> {
    fn default() -> Self {
        Self::new()
    }
}
