//! Append growth stays amortized O(1).

use dynarr::{DynamicArray, GrowthPolicy};
use dynarr_test_utils::{assert_invariants, default_capacity_after};

#[test]
fn thousand_appends_reallocate_logarithmically() {
    let mut arr = DynamicArray::new();
    for i in 0..1000 {
        arr.push_back(i as f64).unwrap();
    }

    assert_eq!(arr.len(), 1000);
    assert_eq!(arr.capacity(), 1024);
    // 8, 16, 32, 64, 128, 256, 512, 1024
    assert_eq!(arr.metrics().reallocations, 8);
    // 8 + 16 + .. + 512: under two copies per element.
    assert_eq!(arr.metrics().elements_copied, 1016);
    assert!(arr.metrics().elements_copied < 2 * 1000);
    assert_invariants(&arr);
}

#[test]
fn reallocations_bounded_by_log2_for_many_sizes() {
    for n in [1usize, 7, 8, 9, 100, 1000, 4096, 10_000] {
        let mut arr = DynamicArray::new();
        for i in 0..n {
            arr.push_back(i as f64).unwrap();
        }
        let bound = 1 + (n as f64 / 8.0).log2().ceil().max(0.0) as u64;
        assert_eq!(arr.len(), n);
        assert_eq!(arr.capacity(), default_capacity_after(n));
        assert!(
            arr.metrics().reallocations <= bound,
            "n={n}: {} reallocations, bound {bound}",
            arr.metrics().reallocations
        );
    }
}

#[test]
fn growth_preserves_order_across_every_reallocation() {
    let mut arr = DynamicArray::new();
    let mut last_capacity = arr.capacity();
    for i in 0..500 {
        arr.push_back(i as f64).unwrap();
        if arr.capacity() != last_capacity {
            let expected: Vec<f64> = (0..=i).map(|v| v as f64).collect();
            assert_eq!(arr.as_slice(), expected.as_slice());
            last_capacity = arr.capacity();
        }
    }
}

#[test]
fn explicit_reserve_does_not_double() {
    let mut arr = DynamicArray::from([1.0, 2.0, 3.0]);
    arr.reserve(7).unwrap();
    assert_eq!(arr.capacity(), 7);
    arr.resize(9).unwrap();
    assert_eq!(arr.capacity(), 9);
}

#[test]
fn presized_array_never_reallocates() {
    let mut arr = DynamicArray::with_capacity(256).unwrap();
    for i in 0..256 {
        arr.push_back(i as f64).unwrap();
    }
    assert_eq!(arr.metrics().reallocations, 0);
    assert_eq!(arr.remaining(), 0);
}

#[test]
fn custom_policy_changes_growth_curve() {
    let policy = GrowthPolicy {
        initial_capacity: 1,
        growth_factor: 4,
    };
    let mut arr = DynamicArray::with_policy(policy).unwrap();
    for i in 0..100 {
        arr.push_back(i as f64).unwrap();
    }
    // 1, 4, 16, 64, 256
    assert_eq!(arr.capacity(), 256);
    assert_eq!(arr.metrics().reallocations, 5);
}
