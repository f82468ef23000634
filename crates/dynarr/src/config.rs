//! Growth policy configuration.

use crate::error::ArrayError;

/// Controls how [`push_back`](crate::DynamicArray::push_back) grows a full
/// array.
///
/// `reserve` and `resize` ignore the policy and grow to exactly the
/// requested size; only appends need the amortization heuristic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GrowthPolicy {
    /// Capacity reserved by the first append into an empty, unallocated
    /// array. Default: 8. Must be at least 1.
    pub initial_capacity: usize,

    /// Multiplier applied to the capacity when an append finds the array
    /// full. Default: 2. Must be at least 2, otherwise appends are no
    /// longer amortized O(1).
    pub growth_factor: usize,
}

impl GrowthPolicy {
    /// Default capacity of the first allocation made by an append.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 8;

    /// Default growth multiplier.
    pub const DEFAULT_GROWTH_FACTOR: usize = 2;

    /// Check that the policy keeps appends amortized O(1).
    pub fn validate(&self) -> Result<(), ArrayError> {
        if self.initial_capacity == 0 {
            return Err(ArrayError::InvalidPolicy {
                reason: "initial_capacity must be at least 1".to_string(),
            });
        }
        if self.growth_factor < 2 {
            return Err(ArrayError::InvalidPolicy {
                reason: format!("growth_factor must be at least 2, got {}", self.growth_factor),
            });
        }
        Ok(())
    }

    /// Capacity an append grows to from `current`.
    ///
    /// Returns `None` if the multiplication overflows `usize`.
    pub fn next_capacity(&self, current: usize) -> Option<usize> {
        if current == 0 {
            Some(self.initial_capacity)
        } else {
            current.checked_mul(self.growth_factor)
        }
    }
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self {
            initial_capacity: Self::DEFAULT_INITIAL_CAPACITY,
            growth_factor: Self::DEFAULT_GROWTH_FACTOR,
        }
    }
}
