//! Detection of winning four-in-a-row alignments

use crate::board::{Board, Piece};
use crate::WIN_LENGTH;

/// True iff `piece` has a run of four aligned tiles anywhere on the board
///
/// All four orientations are scanned: horizontal, vertical, descending
/// diagonal (row and column both increasing) and ascending diagonal
/// (row decreasing, column increasing).
pub fn has_four_in_a_row<const W: usize, const H: usize>(
    board: &Board<W, H>,
    piece: Piece,
) -> bool {
    let target = Some(piece);
    let across = W.saturating_sub(WIN_LENGTH - 1);
    let down = H.saturating_sub(WIN_LENGTH - 1);

    // horizontal
    for row in 0..H {
        for column in 0..across {
            if (0..WIN_LENGTH).all(|i| board.cell(row, column + i) == target) {
                return true;
            }
        }
    }
    // vertical
    for column in 0..W {
        for row in 0..down {
            if (0..WIN_LENGTH).all(|i| board.cell(row + i, column) == target) {
                return true;
            }
        }
    }
    // descending diagonal
    for row in 0..down {
        for column in 0..across {
            if (0..WIN_LENGTH).all(|i| board.cell(row + i, column + i) == target) {
                return true;
            }
        }
    }
    // ascending diagonal
    for row in (WIN_LENGTH - 1)..H {
        for column in 0..across {
            if (0..WIN_LENGTH).all(|i| board.cell(row - i, column + i) == target) {
                return true;
            }
        }
    }

    false
}
