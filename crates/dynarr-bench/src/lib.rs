//! Workload helpers for the dynarr benchmarks.
//!
//! - [`APPEND_SIZES`]: element counts exercised by the append benchmarks
//! - [`append_all`]: build an array by repeated `push_back`
//! - [`append_all_vec`]: the same workload on `Vec<f64>` for comparison

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use dynarr::{ArrayError, DynamicArray};

/// Element counts for the append benchmarks, small to large.
pub const APPEND_SIZES: [usize; 4] = [8, 1_000, 100_000, 1_000_000];

/// Append `0.0..n` one element at a time to a fresh array.
pub fn append_all(n: usize) -> Result<DynamicArray, ArrayError> {
    let mut arr = DynamicArray::new();
    for i in 0..n {
        arr.push_back(i as f64)?;
    }
    Ok(arr)
}

/// Append `0.0..n` one element at a time to a fresh `Vec`.
pub fn append_all_vec(n: usize) -> Vec<f64> {
    let mut v = Vec::new();
    for i in 0..n {
        v.push(i as f64);
    }
    v
}
