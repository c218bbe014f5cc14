//! Error types for maze construction

use thiserror::Error;

/// Raised when a maze layout does not describe a rectangular grid of known cells.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("maze has no cells")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown cell marker {ch:?} at row {row}, column {col}")]
    UnknownCell { row: usize, col: usize, ch: char },
}

pub type Result<T> = std::result::Result<T, MazeError>;
