//! Reallocation counters for a single array.
//!
//! [`GrowthMetrics`] records how often an array replaced its buffer and
//! how many elements those replacements copied. Appends are amortized
//! O(1) exactly when both counters stay small relative to the number of
//! appends.

/// Cumulative reallocation statistics for one [`DynamicArray`](crate::DynamicArray).
///
/// The counters travel with the buffer on transfer and start from zero
/// on duplication.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GrowthMetrics {
    /// Number of times the backing buffer was replaced by a larger one.
    pub reallocations: u64,
    /// Total elements copied from old buffers into new ones.
    pub elements_copied: u64,
}

impl GrowthMetrics {
    pub(crate) fn record_reallocation(&mut self, copied: usize) {
        self.reallocations += 1;
        self.elements_copied += copied as u64;
    }
}
