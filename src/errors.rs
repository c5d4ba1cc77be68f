#[cfg(doc)]
use crate::Sudoku;

/// Error for [`Sudoku::from_bytes`]
#[derive(Debug, thiserror::Error)]
#[error("byte array contains cell values >9")]
pub struct FromBytesError(pub(crate) ());

/// Error for [`Sudoku::from_bytes_slice`]
#[derive(Debug, thiserror::Error)]
pub enum FromBytesSliceError {
    /// The slice does not contain exactly 81 cells
    #[error("byte slice should have length 81, found {0}")]
    WrongLength(usize),
    /// The slice contains cell values outside of `0..=9`
    #[error(transparent)]
    FromBytesError(FromBytesError),
}
