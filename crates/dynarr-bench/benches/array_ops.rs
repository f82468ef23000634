//! Criterion micro-benchmarks for append, duplication, reserve and access.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use dynarr::DynamicArray;
use dynarr_bench::{append_all, append_all_vec, APPEND_SIZES};
use dynarr_test_utils::ascending;

/// Benchmark: N appends from empty, against `Vec<f64>::push`.
fn bench_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("append");
    for &n in &APPEND_SIZES {
        group.bench_with_input(BenchmarkId::new("dynamic_array", n), &n, |b, &n| {
            b.iter(|| black_box(append_all(n).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("vec", n), &n, |b, &n| {
            b.iter(|| black_box(append_all_vec(n)));
        });
    }
    group.finish();
}

/// Benchmark: duplicate a 100K-element array by clone and by assign_from.
fn bench_duplicate_100k(c: &mut Criterion) {
    let source = ascending(100_000);
    c.bench_function("clone_100k", |b| {
        b.iter(|| black_box(source.clone()));
    });

    let mut dest = DynamicArray::new();
    c.bench_function("assign_from_100k", |b| {
        b.iter(|| {
            dest.assign_from(&source).unwrap();
            black_box(dest.len());
        });
    });
}

/// Benchmark: transfer a 100K-element array back and forth.
fn bench_transfer_100k(c: &mut Criterion) {
    let mut a = ascending(100_000);
    let mut b_arr = DynamicArray::new();
    c.bench_function("transfer_100k", |b| {
        b.iter(|| {
            b_arr.transfer_from(&mut a);
            a.transfer_from(&mut b_arr);
            black_box(a.len());
        });
    });
}

/// Benchmark: single reserve from 1K to 100K slots.
fn bench_reserve_100k(c: &mut Criterion) {
    c.bench_function("reserve_1k_to_100k", |b| {
        b.iter(|| {
            let mut arr = ascending(1_000);
            arr.reserve(100_000).unwrap();
            black_box(arr.capacity());
        });
    });
}

/// Benchmark: bounds-checked read and write of every element.
fn bench_indexed_access_100k(c: &mut Criterion) {
    let mut arr = ascending(100_000);
    c.bench_function("get_mut_100k", |b| {
        b.iter(|| {
            for i in 0..arr.len() {
                *arr.get_mut(i).unwrap() += 1.0;
            }
            black_box(*arr.get(0).unwrap());
        });
    });
}

criterion_group!(
    benches,
    bench_append,
    bench_duplicate_100k,
    bench_transfer_100k,
    bench_reserve_100k,
    bench_indexed_access_100k
);
criterion_main!(benches);
