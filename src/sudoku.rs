use std::io::{self, Read};
use std::{fmt, iter, slice};

use crate::board::{cell_at, Cell, Digit};
use crate::consts::{N, N_CELLS};
use crate::errors::{FromBytesError, FromBytesSliceError};
use crate::solver;

/// The main structure exposing all the functionality of the library
///
/// A `Sudoku` is a 9x9 grid of cells, stored row by row. Every cell
/// holds a value in `0..=9` where `0` marks an empty cell.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Sudoku([u8; N_CELLS]);

/// Iterator over the cells of a [`Sudoku`], `None` for empty cells.
pub type Iter<'a> = iter::Map<slice::Iter<'a, u8>, fn(&u8) -> Option<u8>>;

impl Sudoku {
    /// Creates a sudoku from a byte array. All numbers must be below 10.
    pub fn from_bytes(bytes: [u8; N_CELLS]) -> Result<Sudoku, FromBytesError> {
        match bytes.iter().all(|&byte| byte <= 9) {
            true => Ok(Sudoku(bytes)),
            false => Err(FromBytesError(())),
        }
    }

    /// Creates a sudoku from a byte slice. The slice must have length 81
    /// and all numbers must be below 10.
    pub fn from_bytes_slice(bytes: &[u8]) -> Result<Sudoku, FromBytesSliceError> {
        if bytes.len() != N_CELLS {
            return Err(FromBytesSliceError::WrongLength(bytes.len()));
        }
        let mut grid = [0; N_CELLS];
        grid.copy_from_slice(bytes);
        Sudoku::from_bytes(grid).map_err(FromBytesSliceError::FromBytesError)
    }

    /// Reads a sudoku from a stream of characters.
    ///
    /// The first 81 digit characters fill the grid from left to right,
    /// top to bottom, with `'0'` marking an empty cell. Everything else,
    /// including whitespace, separators and placeholders like `'.'`, is
    /// skipped. If the stream ends early, the remaining cells stay empty.
    pub fn from_reader<R: Read>(reader: R) -> io::Result<Sudoku> {
        let mut grid = [0; N_CELLS];
        let mut n_cells = 0;

        for byte in reader.bytes() {
            let byte = byte?;
            if byte.is_ascii_digit() {
                grid[n_cells] = byte - b'0';
                n_cells += 1;
                if n_cells == N_CELLS {
                    break;
                }
            }
        }
        Ok(Sudoku(grid))
    }

    /// Reads a sudoku from a string, with the same rules as
    /// [`Sudoku::from_reader`]. Cannot fail, excess characters are ignored.
    pub fn from_str_permissive(s: &str) -> Sudoku {
        let mut grid = [0; N_CELLS];
        let digits = s.chars().filter_map(|ch| ch.to_digit(10));
        for (cell, digit) in grid.iter_mut().zip(digits) {
            *cell = digit as u8;
        }
        Sudoku(grid)
    }

    /// Try to find a solution to the sudoku and fill it in. Return true if a solution was found.
    ///
    /// Solving happens by plain backtracking: empty cells are visited in
    /// row-major order and the digits 1 to 9 are tried in ascending order,
    /// so the solution is deterministic. On failure the grid is left
    /// exactly as it was. Grids whose clues already contradict each other
    /// are reported as unsolvable without searching.
    pub fn solve(&mut self) -> bool {
        solver::clues_are_consistent(&mut self.0) && solver::solve(&mut self.0)
    }

    /// Find a solution to the sudoku. If multiple solutions exist, it will just stop at the first.
    /// Return `None` if no solution exists.
    pub fn solve_one(mut self) -> Option<Sudoku> {
        match self.solve() {
            true => Some(self),
            false => None,
        }
    }

    /// Check whether the sudoku is solved, i.e. every row, column and box
    /// holds each of the digits 1 to 9 exactly once.
    pub fn is_solved(&self) -> bool {
        solver::is_solved(&self.0)
    }

    /// Returns the digit in the given cell, `None` if the cell is empty.
    pub fn get(&self, cell: Cell) -> Option<Digit> {
        Digit::new_checked(self.0[cell.as_index()])
    }

    /// Returns the number of filled cells.
    pub fn n_clues(&self) -> u8 {
        self.0.iter().filter(|&&num| num != 0).count() as u8
    }

    /// Returns an Iterator over sudoku, going from left to right, top to bottom
    pub fn iter(&self) -> Iter {
        self.0.iter().map(num_to_opt)
    }

    /// Returns a byte array with the cell values of the sudoku, `0` for empty cells.
    pub fn to_bytes(self) -> [u8; N_CELLS] {
        self.0
    }

    /// Returns the sudoku as an 81-character line, `'.'` for empty cells.
    pub fn to_line_string(&self) -> String {
        self.0
            .iter()
            .map(|&num| match num {
                0 => '.',
                num => (num + b'0') as char,
            })
            .collect()
    }
}

fn num_to_opt(num: &u8) -> Option<u8> {
    if *num == 0 {
        None
    } else {
        Some(*num)
    }
}

impl fmt::Display for Sudoku {
    /// Renders the grid with a separator line between the box bands:
    ///
    /// ```text
    ///  -------------------------
    ///  | 5 3 . | . 7 . | . . . |
    ///  | 6 . . | 1 9 5 | . . . |
    ///  ...
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..N {
            if row % 3 == 0 {
                f.write_str(" -------------------------\n")?;
            }
            for col in 0..N {
                f.write_str(if col % 3 == 0 { " | " } else { " " })?;
                match self.0[cell_at(row, col) as usize] {
                    0 => f.write_str(".")?,
                    num => write!(f, "{}", num)?,
                }
            }
            f.write_str(" |\n")?;
        }
        f.write_str(" -------------------------\n")
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use std::fmt;

    use serde::de::{self, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::Sudoku;
    use crate::consts::N_CELLS;

    impl Serialize for Sudoku {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(&self.to_line_string())
        }
    }

    struct LineVisitor;

    impl<'de> Visitor<'de> for LineVisitor {
        type Value = Sudoku;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a line of 81 cells, digits or '.'/'_'/'0' for empty cells")
        }

        fn visit_str<E: de::Error>(self, line: &str) -> Result<Sudoku, E> {
            let mut grid = [0; N_CELLS];
            let mut n_cells = 0;

            for ch in line.chars() {
                let entry = match ch {
                    '.' | '_' => 0,
                    '0'..='9' => ch as u8 - b'0',
                    ch => return Err(E::custom(format_args!("invalid cell character '{}'", ch))),
                };
                if n_cells == N_CELLS {
                    return Err(E::custom("line contains more than 81 cells"));
                }
                grid[n_cells] = entry;
                n_cells += 1;
            }

            if n_cells < N_CELLS {
                return Err(E::custom(format_args!(
                    "line contains {} cells instead of 81",
                    n_cells
                )));
            }
            Ok(Sudoku(grid))
        }
    }

    impl<'de> Deserialize<'de> for Sudoku {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Sudoku, D::Error> {
            deserializer.deserialize_str(LineVisitor)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_bytes_rejects_entries_over_9() {
        let mut bytes = [0; N_CELLS];
        bytes[17] = 10;
        assert!(Sudoku::from_bytes(bytes).is_err());
    }

    #[test]
    fn from_bytes_slice_checks_length() {
        assert!(matches!(
            Sudoku::from_bytes_slice(&[0; 80]),
            Err(FromBytesSliceError::WrongLength(80))
        ));
        assert!(Sudoku::from_bytes_slice(&[0; N_CELLS]).is_ok());
    }

    #[test]
    fn display_marks_empty_cells_and_bands() {
        let sudoku = Sudoku::from_str_permissive("123456789");
        let rendered = sudoku.to_string();
        let mut lines = rendered.lines();

        assert_eq!(lines.next(), Some(" -------------------------"));
        assert_eq!(lines.next(), Some(" | 1 2 3 | 4 5 6 | 7 8 9 |"));
        assert_eq!(lines.next(), Some(" | . . . | . . . | . . . |"));
        // separator lines above rows 0, 3, 6 plus the closing one
        assert_eq!(
            rendered
                .lines()
                .filter(|line| *line == " -------------------------")
                .count(),
            4
        );
    }

    #[test]
    fn line_string_roundtrip() {
        let line = "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";
        let sudoku = Sudoku::from_str_permissive(line);
        // '.' is skipped by the permissive scan, so only the digits land
        // in the grid; a line with '0' placeholders maps cell for cell
        let zeroes = line.replace('.', "0");
        assert_eq!(Sudoku::from_str_permissive(&zeroes).to_line_string(), line);
        assert_ne!(sudoku.to_line_string(), line);
    }
}
