//! Constants for the standard 9x9 sudoku grid.

/// Number of rows and columns.
pub(crate) const N: u8 = 9;

/// Total number of cells.
pub(crate) const N_CELLS: usize = 81;
