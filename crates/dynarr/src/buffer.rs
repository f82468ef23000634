//! Owned, fixed-capacity element storage.
//!
//! A [`Buffer`] is the handle that owns an array's heap block and the
//! initialised prefix of it. Its capacity never changes: growing an array
//! means allocating a second buffer, copying the live prefix into it and
//! dropping the first. The block is released exactly once, when the
//! owning `Buffer` is dropped.
//!
//! Spare slots are reserved but never written, so a new buffer costs
//! O(live elements) to populate regardless of its capacity.

use crate::error::ArrayError;

/// Exclusively owned block of `capacity` `f64` slots, of which the first
/// `len()` are initialised.
///
/// A zero-capacity buffer holds no allocation.
#[derive(Default)]
pub(crate) struct Buffer {
    /// Live elements. `data.capacity() >= capacity` always.
    data: Vec<f64>,
    /// Slots reserved for this buffer.
    capacity: usize,
}

impl Buffer {
    /// Reserve `capacity` slots without initialising any, reporting
    /// allocator refusal instead of aborting.
    pub(crate) fn allocate(capacity: usize) -> Result<Self, ArrayError> {
        if capacity == 0 {
            return Ok(Self::default());
        }
        let mut data = Vec::new();
        if data.try_reserve_exact(capacity).is_err() {
            tracing::debug!(requested = capacity, "buffer allocation refused");
            return Err(ArrayError::AllocationFailed {
                requested: capacity,
            });
        }
        Ok(Self { data, capacity })
    }

    /// Reserve exactly `values.len()` slots holding a copy of `values`.
    pub(crate) fn try_copy_of(values: &[f64]) -> Result<Self, ArrayError> {
        let mut buffer = Self::allocate(values.len())?;
        buffer.data.extend_from_slice(values);
        Ok(buffer)
    }

    /// Infallible copy; aborts on allocation failure like `Vec::clone`.
    pub(crate) fn copy_of(values: &[f64]) -> Self {
        Self {
            data: values.to_vec(),
            capacity: values.len(),
        }
    }

    /// Reserve `capacity` slots and copy the live prefix of `self` into
    /// them. `self` is left untouched, so a failed grow loses nothing.
    pub(crate) fn grow_to(&self, capacity: usize) -> Result<Self, ArrayError> {
        debug_assert!(capacity >= self.len());
        let mut next = Self::allocate(capacity)?;
        next.data.extend_from_slice(&self.data);
        Ok(next)
    }

    /// Append into a spare slot. Never reallocates.
    pub(crate) fn push(&mut self, value: f64) {
        debug_assert!(self.len() < self.capacity);
        self.data.push(value);
    }

    /// Initialise spare slots up to `new_len` with zero.
    pub(crate) fn extend_zeroed(&mut self, new_len: usize) {
        debug_assert!(new_len <= self.capacity);
        self.data.resize(new_len, 0.0);
    }

    /// Number of initialised slots.
    pub(crate) fn len(&self) -> usize {
        self.data.len()
    }

    /// Number of reserved slots.
    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    pub(crate) fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }
}

impl From<Vec<f64>> for Buffer {
    fn from(mut values: Vec<f64>) -> Self {
        values.shrink_to_fit();
        let capacity = values.len();
        Self {
            data: values,
            capacity,
        }
    }
}
