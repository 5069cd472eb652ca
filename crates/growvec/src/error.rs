//! Array-specific error types.

use std::error::Error;
use std::fmt;

/// Errors reported by checked [`GrowableArray`](crate::GrowableArray)
/// operations.
///
/// A failed operation leaves the array untouched: size, capacity and
/// contents are identical before and after.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// A positional accessor or mutator was given an index outside its
    /// documented bound.
    IndexOutOfRange {
        /// The index as supplied by the caller, possibly negative.
        index: i128,
        /// Logical size of the array at the time of the call.
        len: usize,
    },
    /// `front`, `back` or `pop_back` was called on an array with no elements.
    ContainerEmpty,
}

impl ArrayError {
    /// Whether this is an [`ArrayError::IndexOutOfRange`].
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }

    /// Whether this is an [`ArrayError::ContainerEmpty`].
    pub fn is_empty_container(&self) -> bool {
        matches!(self, Self::ContainerEmpty)
    }
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index out of range: index {index}, len {len}")
            }
            Self::ContainerEmpty => write!(f, "container is empty"),
        }
    }
}

impl Error for ArrayError {}
