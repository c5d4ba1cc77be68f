/*

Implements the brute force backtracking search over a grid of cell values.

The steps are the following:
1- Find the first empty cell in row-major order
2- Try the digits 1 through 9 in ascending order
    If a digit passes the row, column and box constraints, write it
    tentatively and recurse into the next empty cell
    If the recursion fails, erase the digit again and try the next one
3- If no empty cell is left, every placement was validated on the way
   in and the grid is solved
4- If all nine digits fail for some cell, the grid is unsolvable from
   the current state and the caller has to backtrack

*/

use crate::board::{cell_at, Cell, Digit};
use crate::consts::{N, N_CELLS};

pub(crate) type Grid = [u8; N_CELLS];

// mask with one bit set for each of the digits 1..=9
const ALL_DIGITS: u16 = 0b11_1111_1110;

/// Fills every empty cell of the grid, recursively. Returns false and
/// leaves the grid untouched if no valid completion exists.
pub(crate) fn solve(grid: &mut Grid) -> bool {
    let cell = match find_next_empty(grid) {
        Some(cell) => cell,
        // no empty cell left, every earlier placement was already validated
        None => return true,
    };

    for digit in Digit::all() {
        if is_valid(grid, cell, digit) {
            grid[cell.as_index()] = digit.get();

            if solve(grid) {
                return true;
            }

            // undo the tentative placement before trying the next digit
            grid[cell.as_index()] = 0;
        }
    }

    false
}

/// Returns the first empty cell in row-major order, `None` if the grid is full.
pub(crate) fn find_next_empty(grid: &Grid) -> Option<Cell> {
    grid.iter()
        .position(|&val| val == 0)
        .map(|idx| Cell::new(idx as u8))
}

/// Checks whether the digit can be placed in the cell without clashing
/// with its row, column or 3x3 box.
pub(crate) fn is_valid(grid: &Grid, cell: Cell, digit: Digit) -> bool {
    let (corner_row, corner_col) = cell.block_corner();

    !in_row(grid, cell.row(), digit)
        && !in_col(grid, cell.col(), digit)
        && !in_block(grid, corner_row, corner_col, digit)
}

fn in_row(grid: &Grid, row: u8, digit: Digit) -> bool {
    (0..N).any(|col| grid[cell_at(row, col) as usize] == digit.get())
}

fn in_col(grid: &Grid, col: u8, digit: Digit) -> bool {
    (0..N).any(|row| grid[cell_at(row, col) as usize] == digit.get())
}

fn in_block(grid: &Grid, corner_row: u8, corner_col: u8, digit: Digit) -> bool {
    (corner_row..corner_row + 3).any(|row| {
        (corner_col..corner_col + 3).any(|col| grid[cell_at(row, col) as usize] == digit.get())
    })
}

/// Checks that no given clue is repeated within its row, column or box.
///
/// The search itself only validates the digits it places, so a grid
/// seeded with contradictory clues could otherwise complete into a
/// "solution" that inherits the contradiction.
pub(crate) fn clues_are_consistent(grid: &mut Grid) -> bool {
    for idx in 0..N_CELLS {
        let digit = match Digit::new_checked(grid[idx]) {
            Some(digit) => digit,
            None => continue,
        };

        // take the clue out so it doesn't clash with itself
        grid[idx] = 0;
        let valid = is_valid(grid, Cell::new(idx as u8), digit);
        grid[idx] = digit.get();

        if !valid {
            return false;
        }
    }
    true
}

/// Checks whether every row, column and box holds a permutation of 1..=9.
pub(crate) fn is_solved(grid: &Grid) -> bool {
    let rows = (0..N).all(|row| house_mask(grid, (0..N).map(|col| cell_at(row, col))) == ALL_DIGITS);
    let cols = (0..N).all(|col| house_mask(grid, (0..N).map(|row| cell_at(row, col))) == ALL_DIGITS);
    let blocks = (0..N).all(|block| {
        let (corner_row, corner_col) = (block / 3 * 3, block % 3 * 3);
        let cells = (corner_row..corner_row + 3)
            .flat_map(move |row| (corner_col..corner_col + 3).map(move |col| cell_at(row, col)));
        house_mask(grid, cells) == ALL_DIGITS
    });

    rows && cols && blocks
}

// every cell value sets one bit; an empty cell sets bit 0,
// which never counts towards ALL_DIGITS
fn house_mask(grid: &Grid, cells: impl Iterator<Item = u8>) -> u16 {
    cells.fold(0, |mask, cell| mask | 1 << grid[cell as usize])
}
