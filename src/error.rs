//! Errors returned by the tree.
//!
//! Looking up an element that isn't there is not an error: the lookup functions
//! return [`None`] for that.

use thiserror::Error;
use void::Void;

/// Error returned by the mutating operations of [`crate::avl::AVLTree`].
///
/// `C` is the error type of a caller-supplied comparator. The plain operations
/// compare with [`Ord`], which can't fail, so for them `C` is [`Void`].
///
/// Whenever an operation returns an error, the tree is left exactly as it was.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum TreeError<C = Void> {
    #[error("element already in tree")]
    DuplicateKey,
    #[error("element not in tree")]
    KeyNotFound,
    #[error("tree is empty")]
    EmptyTree,
    #[error("comparison failed: {0}")]
    Compare(C),
}

impl TreeError<Void> {
    /// Converts an error of an infallible comparison into an error of any other
    /// comparator error type.
    pub fn widen<C>(self) -> TreeError<C> {
        match self {
            TreeError::DuplicateKey => TreeError::DuplicateKey,
            TreeError::KeyNotFound => TreeError::KeyNotFound,
            TreeError::EmptyTree => TreeError::EmptyTree,
            TreeError::Compare(void) => match void {},
        }
    }
}

/// The reason a structural verification failed.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum VerifyError {
    #[error("number of nodes ({counted}) is not the same as size ({expected})")]
    CountMismatch { counted: usize, expected: usize },
    #[error("invalid height")]
    InvalidHeight,
    #[error("left node out of order")]
    LeftOutOfOrder,
    #[error("right node out of order")]
    RightOutOfOrder,
}
