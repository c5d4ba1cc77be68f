#![warn(missing_docs)]
//! A brute force sudoku solver
//!
//! ## Overview
//!
//! This crate solves standard 9x9 sudokus by exhaustive backtracking
//! search: find the first empty cell, try the digits 1 through 9 against
//! the row, column and box constraints, recurse and undo on failure.
//! There are no solving strategies and no heuristics. It either finds a
//! solution or proves that none exists.
//!
//! ## Example
//!
//! ```
//! use sudoku_backtrack::Sudoku;
//!
//! // Any non-digit characters are skipped, '0' marks an empty cell.
//! let line = "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
//!
//! let mut sudoku = Sudoku::from_str_permissive(line);
//! assert!(sudoku.solve());
//! assert!(sudoku.is_solved());
//!
//! println!("{}", sudoku);
//! let cell_contents: [u8; 81] = sudoku.to_bytes();
//! ```

mod board;
mod consts;
mod errors;
mod solver;
mod sudoku;

pub use crate::board::{Cell, Digit};
pub use crate::errors::{FromBytesError, FromBytesSliceError};
pub use crate::sudoku::Sudoku;
