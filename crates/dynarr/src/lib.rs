//! A growable, single-owner array of `f64` values.
//!
//! [`DynamicArray`] owns one contiguous heap block and tracks how many of
//! its slots are in use. It makes the ownership rules of a hand-managed
//! buffer explicit:
//!
//! - **Duplication** ([`DynamicArray::try_clone`], [`Clone`],
//!   [`DynamicArray::assign_from`]) always allocates a separate block.
//! - **Transfer** ([`DynamicArray::take`], [`DynamicArray::transfer_from`],
//!   or a plain move) hands the block over and leaves the source empty.
//! - **Growth** ([`DynamicArray::reserve`], [`DynamicArray::resize`],
//!   [`DynamicArray::push_back`]) allocates the replacement before
//!   releasing the original, so allocation failure is reported as
//!   [`ArrayError::AllocationFailed`] with the array untouched.
//!
//! Appends grow by a [`GrowthPolicy`] (initial capacity 8, doubling by
//! default); each array counts its reallocations in [`GrowthMetrics`].
//!
//! ```
//! use dynarr::dynarr;
//!
//! let mut a = dynarr![1.0, 5.0, 3.0];
//! let b = a.clone();
//! a.push_back(400.0).unwrap();
//!
//! assert_eq!(a, [1.0, 5.0, 3.0, 400.0]);
//! assert_eq!(a.capacity(), 6);
//! assert_eq!(b, [1.0, 5.0, 3.0]);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
mod buffer;
pub mod config;
pub mod error;
pub mod metrics;

// Public re-exports for the primary API surface.
pub use array::DynamicArray;
pub use config::GrowthPolicy;
pub use error::ArrayError;
pub use metrics::GrowthMetrics;

/// Build a [`DynamicArray`] from a literal list of values.
///
/// Integer literals are accepted and converted to `f64`. The result has
/// `len() == capacity()`.
///
/// ```
/// let a = dynarr::dynarr![1, 2.5, 3];
/// assert_eq!(a, [1.0, 2.5, 3.0]);
/// assert!(dynarr::dynarr![].is_empty());
/// ```
#[macro_export]
macro_rules! dynarr {
    () => {
        $crate::DynamicArray::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::DynamicArray::from([$($value as f64),+])
    };
}
