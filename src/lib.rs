//! A heuristic agent for playing the board game 'Connect 4'
//!
//! This agent explores the game tree to a bounded depth with alpha-beta
//! pruning, scoring non-terminal positions with a pattern-based heuristic
//! to pick a move for the automated side.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_engine::{Piece, Searcher, StandardBoard};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let board = StandardBoard::from_moves("475465")?;
//! let searcher = Searcher::new(Piece::PlayerOne);
//!
//! // player one completes four-in-a-row by playing the third column
//! assert_eq!(searcher.choose_move(&board), 2);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod lines;

pub mod evaluation;

pub mod search;

mod test;

pub use board::{Board, Cell, Piece, Window};
pub use search::Searcher;

/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The number of aligned tiles that wins the game
pub const WIN_LENGTH: usize = 4;

/// The standard 7x6 game board
pub type StandardBoard = Board<WIDTH, HEIGHT>;

// ensure that a winning run fits on the standard board in every orientation
const_assert!(WIN_LENGTH <= WIDTH);
const_assert!(WIN_LENGTH <= HEIGHT);
