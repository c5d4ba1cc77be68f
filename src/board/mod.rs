//! Types for cells and digits on a sudoku board
mod digit;
mod positions;

pub(crate) use self::positions::cell_at;

pub use self::{digit::Digit, positions::Cell};
