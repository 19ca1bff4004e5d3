//! The error type for this crate.

use thiserror::Error;

/// Errors raised by [`BinaryTree`][crate::BinaryTree] operations.
///
/// Lookups and removals never fail; a miss is reported as `None`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The value handed to [`try_add`][crate::BinaryTree::try_add] was not a node wrapping a key.
    #[error("Invalid argument: expected a node holding an integer key, got {kind}")]
    InvalidArgument {
        /// The kind of value that was rejected.
        kind: String,
    },
}

/// A `Result` with this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
