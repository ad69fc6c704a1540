//! # Maze errors.
//!
//! A `MazeError` is returned when a maze can't be read, or when its text is not
//! a valid maze. Not finding a path through a valid maze is not an error.

use crate::error::TreeError;
use thiserror::Error;

/// Maze error
#[derive(Error, Debug)]
pub enum MazeError {
    #[error("invalid character {found:?} in maze at row {row}, column {column}")]
    InvalidCharacter {
        row: usize,
        column: usize,
        found: char,
    },
    #[error("no start found in maze")]
    MissingStart,
    #[error("multiple starts found in maze")]
    MultipleStarts,
    #[error("no finish found in maze")]
    MissingFinish,
    #[error("multiple finishes found in maze")]
    MultipleFinishes,
    #[error("start declared outside of maze")]
    StartOutside,
    #[error("finish declared outside of maze")]
    FinishOutside,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Tree(#[from] TreeError),
}
