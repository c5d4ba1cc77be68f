use crate::consts::N;

// The 2D <-> 1D mapping lives here and nowhere else.
// All other code goes through these three functions or through `Cell`.
#[inline(always)]
pub(crate) fn row(cell: u8) -> u8 {
    cell / N
}

#[inline(always)]
pub(crate) fn col(cell: u8) -> u8 {
    cell % N
}

#[inline(always)]
pub(crate) fn cell_at(row: u8, col: u8) -> u8 {
    row * N + col
}

/// A cell of the sudoku grid, numbered from `0..=80` going from
/// left to right, top to bottom.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell(u8);

impl Cell {
    /// Constructs a new cell.
    ///
    /// # Panics
    ///
    /// panics if `cell >= 81`
    #[inline]
    pub fn new(cell: u8) -> Cell {
        assert!(cell < 81);
        Cell(cell)
    }

    /// Constructs the cell at the given row and column intersection.
    ///
    /// # Panics
    ///
    /// panics if `row >= 9` or `col >= 9`
    #[inline]
    pub fn from_row_col(row: u8, col: u8) -> Cell {
        assert!(row < 9);
        assert!(col < 9);
        Cell(cell_at(row, col))
    }

    /// Row index from 0..=8, topmost row is 0
    #[inline]
    pub fn row(self) -> u8 {
        row(self.0)
    }

    /// Column index from 0..=8, leftmost col is 0
    #[inline]
    pub fn col(self) -> u8 {
        col(self.0)
    }

    /// (row, col) of the top left cell of the containing 3x3 box
    #[inline]
    pub fn block_corner(self) -> (u8, u8) {
        let (row, col) = (self.row(), self.col());
        (row - row % 3, col - col % 3)
    }

    /// Returns the cell number as `usize` for indexing
    #[inline]
    pub fn as_index(self) -> usize {
        self.0 as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_col_roundtrip() {
        for row in 0..9 {
            for col in 0..9 {
                let cell = Cell::from_row_col(row, col);
                assert_eq!(cell.row(), row);
                assert_eq!(cell.col(), col);
                assert_eq!(cell.as_index(), (row * 9 + col) as usize);
            }
        }
    }

    #[test]
    fn block_corners() {
        assert_eq!(Cell::new(0).block_corner(), (0, 0));
        assert_eq!(Cell::new(5).block_corner(), (0, 3));
        assert_eq!(Cell::new(40).block_corner(), (3, 3));
        assert_eq!(Cell::new(80).block_corner(), (6, 6));
    }
}
