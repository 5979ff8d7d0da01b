//! Heuristic scoring of non-terminal positions
//!
//! The score is a sum of local 4-cell window patterns plus a flat bonus
//! for tiles in the centre column. It is a desirability estimate for
//! search leaves, not a guarantee of game value.

use std::array;

use crate::board::{Board, Cell, Piece, Window};
use crate::WIN_LENGTH;

/// Scores a single 4-cell window from the perspective of `piece`
///
/// The own-piece patterns are mutually exclusive; the penalty for an
/// opponent three with an open slot applies independently on top.
pub fn score_window(window: &Window, piece: Piece) -> i64 {
    let own = count(window, Some(piece));
    let opponent = count(window, Some(piece.opponent()));
    let empty = count(window, None);

    let mut score = 0;
    if own == 4 {
        score += 100;
    } else if own == 3 && empty == 1 {
        score += 5;
    } else if own == 2 && empty == 2 {
        score += 2;
    }
    if opponent == 3 && empty == 1 {
        score -= 4;
    }
    score
}

/// Scores a whole board for `piece` by sliding a window along every row,
/// column and diagonal, plus the centre-column bonus
pub fn score_board<const W: usize, const H: usize>(board: &Board<W, H>, piece: Piece) -> i64 {
    let mut score = 0;
    let across = W.saturating_sub(WIN_LENGTH - 1);
    let down = H.saturating_sub(WIN_LENGTH - 1);

    // tiles in the centre column take part in the most alignments
    let centre = W / 2;
    for row in 0..H {
        if board.cell(row, centre) == Some(piece) {
            score += 3;
        }
    }

    // horizontal windows
    for row in 0..H {
        for column in 0..across {
            let window: Window = array::from_fn(|i| board.cell(row, column + i));
            score += score_window(&window, piece);
        }
    }
    // vertical windows
    for column in 0..W {
        for row in 0..down {
            let window: Window = array::from_fn(|i| board.cell(row + i, column));
            score += score_window(&window, piece);
        }
    }
    // descending diagonal windows
    for row in 0..down {
        for column in 0..across {
            let window: Window = array::from_fn(|i| board.cell(row + i, column + i));
            score += score_window(&window, piece);
        }
    }
    // ascending diagonal windows
    for row in (WIN_LENGTH - 1)..H {
        for column in 0..across {
            let window: Window = array::from_fn(|i| board.cell(row - i, column + i));
            score += score_window(&window, piece);
        }
    }

    score
}

fn count(window: &Window, cell: Cell) -> usize {
    window.iter().filter(|&&c| c == cell).count()
}
