//! Depth-limited minimax search with alpha-beta pruning

use crate::board::{Board, Piece};
use crate::{evaluation, lines};

/// Score of a position the searching side has won; losses score the
/// negation and draws score zero
pub const WIN_SCORE: i64 = 1_000_000_000_000;

/// Number of plies explored below the root by default
pub const DEFAULT_SEARCH_DEPTH: u32 = 4;

/// An agent that picks moves for one side by game tree search
///
/// The searcher holds its side's piece identity and the depth bound as
/// explicit configuration, so the same board can be searched for either
/// player and tests can vary the horizon.
///
/// # Notes
/// The search is heuristic, not exhaustive: positions at the depth
/// horizon are valued by [`evaluation::score_board`] rather than played
/// out. Each recursion level copies the board once per candidate column,
/// so sibling branches never observe each other's speculative moves.
#[derive(Copy, Clone, Debug)]
pub struct Searcher {
    engine_piece: Piece,
    depth: u32,
}

impl Searcher {
    /// Creates a searcher playing `engine_piece` at the default depth
    pub fn new(engine_piece: Piece) -> Self {
        Self {
            engine_piece,
            depth: DEFAULT_SEARCH_DEPTH,
        }
    }

    /// Overrides the search depth of an existing searcher
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Picks a column for the searching side
    ///
    /// The board must have at least one playable column; calling this on
    /// a full board is a caller error.
    pub fn choose_move<const W: usize, const H: usize>(&self, board: &Board<W, H>) -> usize {
        let (column, _score) = self.search(board);
        column.expect("no playable column at the search root")
    }

    /// Performs the full search, returning the chosen column and the
    /// score of the position from the searching side's perspective
    ///
    /// The column is `None` only for terminal positions (a decided game
    /// or a full board).
    pub fn search<const W: usize, const H: usize>(
        &self,
        board: &Board<W, H>,
    ) -> (Option<usize>, i64) {
        self.minimax(board, self.depth, i64::MIN, i64::MAX, true)
    }

    fn minimax<const W: usize, const H: usize>(
        &self,
        board: &Board<W, H>,
        depth: u32,
        mut alpha: i64,
        mut beta: i64,
        maximizing: bool,
    ) -> (Option<usize>, i64) {
        // terminal positions short-circuit regardless of remaining depth
        if lines::has_four_in_a_row(board, self.engine_piece) {
            return (None, WIN_SCORE);
        }
        if lines::has_four_in_a_row(board, self.engine_piece.opponent()) {
            return (None, -WIN_SCORE);
        }
        let columns = board.playable_columns();
        if columns.is_empty() {
            // no winner and nowhere to play: a draw
            return (None, 0);
        }
        if depth == 0 {
            return (None, evaluation::score_board(board, self.engine_piece));
        }

        if maximizing {
            let mut best_column = columns[0];
            let mut best_value = i64::MIN;
            for &column in &columns {
                let mut child = *board;
                let row = child
                    .landing_row(column)
                    .expect("playable column has an open row");
                child.place(row, column, self.engine_piece);

                let (_, value) = self.minimax(&child, depth - 1, alpha, beta, false);
                // strict comparison keeps the lowest-index column among ties
                if value > best_value {
                    best_value = value;
                    best_column = column;
                }
                alpha = alpha.max(best_value);
                if alpha >= beta {
                    break;
                }
            }
            (Some(best_column), best_value)
        } else {
            let mut best_column = columns[0];
            let mut best_value = i64::MAX;
            for &column in &columns {
                let mut child = *board;
                let row = child
                    .landing_row(column)
                    .expect("playable column has an open row");
                child.place(row, column, self.engine_piece.opponent());

                let (_, value) = self.minimax(&child, depth - 1, alpha, beta, true);
                if value < best_value {
                    best_value = value;
                    best_column = column;
                }
                beta = beta.min(best_value);
                if alpha >= beta {
                    break;
                }
            }
            (Some(best_column), best_value)
        }
    }
}
