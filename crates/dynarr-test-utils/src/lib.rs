//! Test fixtures and invariant checks for dynarr development.
//!
//! Provides builders for arrays in known states ([`ascending`],
//! [`pushed`]) and [`assert_invariants`], which checks the structural
//! rules every reachable [`DynamicArray`] must satisfy.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use dynarr::DynamicArray;

/// `[0.0, 1.0, .., (n - 1) as f64]`, built with exact capacity.
pub fn ascending(n: usize) -> DynamicArray {
    let values: Vec<f64> = (0..n).map(|i| i as f64).collect();
    DynamicArray::from(values)
}

/// An array built by appending `values` one at a time to an empty array,
/// so its capacity follows the default growth policy.
pub fn pushed(values: &[f64]) -> DynamicArray {
    let mut arr = DynamicArray::new();
    for &v in values {
        arr.push_back(v)
            .unwrap_or_else(|e| panic!("push_back failed while building fixture: {e}"));
    }
    arr
}

/// Capacity the default policy reaches after `n` appends from empty.
pub fn default_capacity_after(n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    let mut cap = 8;
    while cap < n {
        cap *= 2;
    }
    cap
}

/// Panic unless `arr` satisfies the structural invariants:
/// length within capacity, reported byte size consistent with capacity,
/// every live index readable and the first index past the end rejected.
pub fn assert_invariants(arr: &DynamicArray) {
    assert!(
        arr.len() <= arr.capacity(),
        "len {} exceeds capacity {}",
        arr.len(),
        arr.capacity()
    );
    assert_eq!(arr.remaining(), arr.capacity() - arr.len());
    assert_eq!(arr.memory_bytes(), arr.capacity() * std::mem::size_of::<f64>());
    assert_eq!(arr.as_slice().len(), arr.len());
    for i in 0..arr.len() {
        assert!(arr.get(i).is_ok(), "live index {i} not readable");
    }
    assert!(
        arr.get(arr.len()).is_err(),
        "index {} past the end was readable",
        arr.len()
    );
}

/// Panic unless `arr` is in the empty, unallocated state left behind by
/// a transfer.
pub fn assert_moved_from(arr: &DynamicArray) {
    assert_eq!(arr.len(), 0, "moved-from array still has elements");
    assert_eq!(arr.capacity(), 0, "moved-from array still holds a buffer");
    assert_invariants(arr);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascending_has_exact_capacity() {
        let arr = ascending(5);
        assert_eq!(arr, [0.0, 1.0, 2.0, 3.0, 4.0]);
        assert_eq!(arr.capacity(), 5);
        assert_invariants(&arr);
    }

    #[test]
    fn pushed_follows_default_policy() {
        let arr = pushed(&[1.0; 9]);
        assert_eq!(arr.capacity(), default_capacity_after(9));
        assert_eq!(arr.capacity(), 16);
    }

    #[test]
    fn default_capacity_table() {
        assert_eq!(default_capacity_after(0), 0);
        assert_eq!(default_capacity_after(1), 8);
        assert_eq!(default_capacity_after(8), 8);
        assert_eq!(default_capacity_after(1000), 1024);
    }

    #[test]
    fn empty_array_is_moved_from_shape() {
        assert_moved_from(&DynamicArray::new());
    }
}
