//! Error types for the pair list
//!
//! This module defines every failure a [`PairList`](crate::PairList) operation
//! can report. We use `thiserror` for automatic `Display` and `Error` trait
//! implementations.
//!
//! A lookup-miss is not an error: index and find operations return `None`.
//! Only the `find_value_*` family and `update_by_predicate` turn a miss into
//! [`Error::NotFound`].

use thiserror::Error;

/// Result type alias for pair list operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the pair list
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A required key, value or argument was absent
    #[error("Null argument: {0}")]
    NullArgument(&'static str),

    /// A size, count or capacity parameter violates a precondition
    #[error("Invalid argument {name}: {reason}")]
    InvalidArgument {
        /// Name of the offending parameter
        name: &'static str,
        /// Why it was rejected
        reason: String,
    },

    /// Positional access outside the valid range
    #[error("Index out of range: {index} (length {len})")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Length of the collection at the time of the call
        len: usize,
    },

    /// A record with the same (id, name) pair already exists
    #[error("Duplicate key: a record with the same id and name already exists")]
    DuplicateKey,

    /// The collection changed structurally while a cursor was in flight
    #[error("Collection was modified during enumeration: expected version {expected}, got {actual}")]
    ConcurrentModification {
        /// Version captured when the cursor was created
        expected: u64,
        /// Version observed at the failing advance
        actual: u64,
    },

    /// A cursor was advanced over a list that did not create it
    #[error("Cursor belongs to a different list")]
    ForeignCursor,

    /// A value lookup found no matching record
    #[error("No matching record: {0}")]
    NotFound(&'static str),
}

impl Error {
    pub(crate) fn index_out_of_range(index: usize, len: usize) -> Self {
        Error::IndexOutOfRange { index, len }
    }

    pub(crate) fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    /// True for positional failures and for lookup misses surfaced as errors
    ///
    /// `find_value_by_id` and friends report a miss as [`Error::NotFound`],
    /// which callers usually treat like an out-of-range index.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Error::IndexOutOfRange { .. } | Error::NotFound(_))
    }
}
