//! Error types for dynamic array operations.

use std::error::Error;
use std::fmt;

/// Errors that can occur while building, growing, or indexing a
/// [`DynamicArray`](crate::DynamicArray).
///
/// Every fallible operation leaves the array in the state it had before
/// the call when it returns one of these.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// The allocator refused a buffer request, or the request size
    /// overflowed.
    AllocationFailed {
        /// Number of element slots requested.
        requested: usize,
    },
    /// An index outside `[0, len)`.
    OutOfBounds {
        /// The offending index.
        index: usize,
        /// Logical length at the time of access.
        len: usize,
    },
    /// `resize` was asked for a length smaller than the current one.
    UnsupportedShrink {
        /// The requested length.
        requested: usize,
        /// Logical length at the time of the call.
        len: usize,
    },
    /// A [`GrowthPolicy`](crate::GrowthPolicy) failed validation.
    InvalidPolicy {
        /// Description of which rule was violated.
        reason: String,
    },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed { requested } => {
                write!(f, "allocation failed: requested {requested} slots")
            }
            Self::OutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for length {len}")
            }
            Self::UnsupportedShrink { requested, len } => {
                write!(
                    f,
                    "cannot shrink from length {len} to {requested}: resize only grows"
                )
            }
            Self::InvalidPolicy { reason } => write!(f, "invalid growth policy: {reason}"),
        }
    }
}

impl Error for ArrayError {}
