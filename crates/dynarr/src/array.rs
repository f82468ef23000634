//! The growable, single-owner `f64` array.
//!
//! [`DynamicArray`] owns one `Buffer`, which holds the live elements and
//! reserves spare slots without initialising them. Growth always allocates the replacement buffer and copies into it
//! before the old buffer is dropped, so a failed allocation leaves the
//! array exactly as it was.

use std::fmt;
use std::mem;
use std::ops::{Index, IndexMut};

use crate::buffer::Buffer;
use crate::config::GrowthPolicy;
use crate::error::ArrayError;
use crate::metrics::GrowthMetrics;

/// A contiguous, growable sequence of `f64` values.
///
/// Invariants:
/// - `len() <= capacity()` in every reachable state.
/// - `capacity() == 0` means no heap block is held.
/// - Exactly one `DynamicArray` owns a given block. Duplication
///   ([`try_clone`](Self::try_clone), [`Clone`]) allocates a fresh block;
///   transfer ([`take`](Self::take), [`transfer_from`](Self::transfer_from))
///   hands the block over and leaves the source empty.
///
/// Slots past `len()` are unspecified to callers.
pub struct DynamicArray {
    buffer: Buffer,
    policy: GrowthPolicy,
    metrics: GrowthMetrics,
}

impl DynamicArray {
    /// Create an empty array. Does not allocate.
    pub fn new() -> Self {
        Self {
            buffer: Buffer::default(),
            policy: GrowthPolicy::default(),
            metrics: GrowthMetrics::default(),
        }
    }

    /// Create an empty array with exactly `capacity` slots reserved.
    pub fn with_capacity(capacity: usize) -> Result<Self, ArrayError> {
        Ok(Self {
            buffer: Buffer::allocate(capacity)?,
            ..Self::new()
        })
    }

    /// Create an empty array whose appends follow `policy`.
    pub fn with_policy(policy: GrowthPolicy) -> Result<Self, ArrayError> {
        policy.validate()?;
        Ok(Self {
            policy,
            ..Self::new()
        })
    }

    /// Build an array holding a copy of `values`, with
    /// `len() == capacity() == values.len()`.
    pub fn from_slice(values: &[f64]) -> Result<Self, ArrayError> {
        Ok(Self {
            buffer: Buffer::try_copy_of(values)?,
            ..Self::new()
        })
    }

    // ── Duplication ────────────────────────────────────────────────

    /// Duplicate into an independent array.
    ///
    /// The duplicate's capacity equals its length; spare capacity of
    /// `self` is not carried over. The growth policy is, the metrics are
    /// not.
    pub fn try_clone(&self) -> Result<Self, ArrayError> {
        Ok(Self {
            buffer: Buffer::try_copy_of(self.as_slice())?,
            policy: self.policy,
            metrics: GrowthMetrics::default(),
        })
    }

    /// Replace the contents of `self` with a duplicate of `source`.
    ///
    /// The replacement buffer is populated before the current one is
    /// released. On error `self` is unchanged.
    pub fn assign_from(&mut self, source: &Self) -> Result<(), ArrayError> {
        let replacement = Buffer::try_copy_of(source.as_slice())?;
        self.buffer = replacement;
        self.policy = source.policy;
        self.metrics = GrowthMetrics::default();
        Ok(())
    }

    // ── Transfer ───────────────────────────────────────────────────

    /// Move the buffer out into a new array, leaving `self` empty
    /// (`len() == 0`, `capacity() == 0`, default policy, zeroed metrics).
    ///
    /// No elements are copied.
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Drop the current buffer of `self` and adopt the buffer of
    /// `source`, which is left empty.
    pub fn transfer_from(&mut self, source: &mut Self) {
        *self = source.take();
    }

    // ── Access ─────────────────────────────────────────────────────

    /// Read-only access to the element at `index`.
    pub fn get(&self, index: usize) -> Result<&f64, ArrayError> {
        self.as_slice().get(index).ok_or(ArrayError::OutOfBounds {
            index,
            len: self.len(),
        })
    }

    /// Read-write access to the element at `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut f64, ArrayError> {
        let len = self.len();
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(ArrayError::OutOfBounds { index, len })
    }

    /// The live elements `[0, len)`.
    pub fn as_slice(&self) -> &[f64] {
        self.buffer.as_slice()
    }

    /// The live elements `[0, len)`, writable.
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        self.buffer.as_mut_slice()
    }

    // ── Growth ─────────────────────────────────────────────────────

    /// Ensure at least `requested` slots are allocated.
    ///
    /// Grows to exactly `requested` when that exceeds the current
    /// capacity; never shrinks. `len()` is unchanged and the live
    /// elements keep their order and values.
    pub fn reserve(&mut self, requested: usize) -> Result<(), ArrayError> {
        let old_capacity = self.capacity();
        if requested <= old_capacity {
            return Ok(());
        }
        let grown = self.buffer.grow_to(requested)?;
        self.buffer = grown;
        self.metrics.record_reallocation(self.len());
        tracing::trace!(
            old_capacity,
            new_capacity = requested,
            len = self.len(),
            "dynamic array reallocated"
        );
        Ok(())
    }

    /// Grow the logical length to `new_len`, zero-filling the new slots.
    ///
    /// Reserves exactly `new_len` slots if needed. Shrinking is not
    /// supported and returns [`ArrayError::UnsupportedShrink`].
    pub fn resize(&mut self, new_len: usize) -> Result<(), ArrayError> {
        if new_len < self.len() {
            return Err(ArrayError::UnsupportedShrink {
                requested: new_len,
                len: self.len(),
            });
        }
        self.reserve(new_len)?;
        self.buffer.extend_zeroed(new_len);
        Ok(())
    }

    /// Append `value`, growing by the growth policy when full.
    ///
    /// An unallocated array reserves `policy.initial_capacity`; a full
    /// one reserves `capacity * policy.growth_factor`.
    pub fn push_back(&mut self, value: f64) -> Result<(), ArrayError> {
        let capacity = self.capacity();
        if self.len() == capacity {
            let target = self
                .policy
                .next_capacity(capacity)
                .ok_or(ArrayError::AllocationFailed {
                    requested: usize::MAX,
                })?;
            self.reserve(target)?;
        }
        self.buffer.push(value);
        Ok(())
    }

    // ── Introspection ──────────────────────────────────────────────

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Whether there are no live elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of allocated slots.
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Slots available before the next append reallocates.
    pub fn remaining(&self) -> usize {
        self.capacity() - self.len()
    }

    /// Size of the backing block in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.capacity() * mem::size_of::<f64>()
    }

    /// The policy appends grow by.
    pub fn policy(&self) -> &GrowthPolicy {
        &self.policy
    }

    /// Reallocation counters accumulated by this buffer.
    pub fn metrics(&self) -> &GrowthMetrics {
        &self.metrics
    }

    /// Space-separated rendering of the live elements, for diagnostics.
    pub fn dump(&self) -> String {
        self.as_slice()
            .iter()
            .map(f64::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for DynamicArray {
    fn default() -> Self {
        Self::new()
    }
}

/// Duplicates with capacity equal to length.
///
/// `clone_from` also allocates an exact-size buffer and drops the spare
/// capacity of the destination; unlike `Vec`, it never reuses the
/// existing block. Aborts on allocation failure, like the standard
/// collections. Use [`DynamicArray::try_clone`] and
/// [`DynamicArray::assign_from`] to observe the failure instead.
impl Clone for DynamicArray {
    fn clone(&self) -> Self {
        Self {
            buffer: Buffer::copy_of(self.as_slice()),
            policy: self.policy,
            metrics: GrowthMetrics::default(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.buffer = Buffer::copy_of(source.as_slice());
        self.policy = source.policy;
        self.metrics = GrowthMetrics::default();
    }
}

impl fmt::Debug for DynamicArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicArray")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .field("elements", &self.as_slice())
            .finish()
    }
}

/// Panics with the [`ArrayError::OutOfBounds`] message on a bad index.
impl Index<usize> for DynamicArray {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        match self.get(index) {
            Ok(value) => value,
            Err(e) => panic!("{e}"),
        }
    }
}

/// Panics with the [`ArrayError::OutOfBounds`] message on a bad index.
impl IndexMut<usize> for DynamicArray {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(e) => panic!("{e}"),
        }
    }
}

impl From<&[f64]> for DynamicArray {
    fn from(values: &[f64]) -> Self {
        Self {
            buffer: Buffer::copy_of(values),
            ..Self::new()
        }
    }
}

impl<const N: usize> From<[f64; N]> for DynamicArray {
    fn from(values: [f64; N]) -> Self {
        Self::from(&values[..])
    }
}

impl From<Vec<f64>> for DynamicArray {
    fn from(values: Vec<f64>) -> Self {
        Self {
            buffer: Buffer::from(values),
            ..Self::new()
        }
    }
}

/// Compares live elements only; capacity, policy and metrics are ignored.
impl PartialEq for DynamicArray {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl PartialEq<[f64]> for DynamicArray {
    fn eq(&self, other: &[f64]) -> bool {
        self.as_slice() == other
    }
}

impl PartialEq<&[f64]> for DynamicArray {
    fn eq(&self, other: &&[f64]) -> bool {
        self.as_slice() == *other
    }
}

impl<const N: usize> PartialEq<[f64; N]> for DynamicArray {
    fn eq(&self, other: &[f64; N]) -> bool {
        self.as_slice() == other
    }
}
