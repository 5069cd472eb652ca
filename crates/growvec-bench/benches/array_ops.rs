//! Criterion micro-benchmarks for growth, shifting mutations and mixed use.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use growvec::GrowableArray;
use growvec_bench::{filled, mixed_ops, positions};
use growvec_test_utils::model;

/// Benchmark: 10K appends starting from an empty, unallocated array.
fn bench_push_back_10k(c: &mut Criterion) {
    c.bench_function("push_back_10k", |b| {
        b.iter(|| {
            let mut array = GrowableArray::new();
            for v in 0..10_000u64 {
                array.push_back(v);
            }
            black_box(array.len());
        });
    });
}

/// Benchmark: 10K appends after a single up-front reserve.
fn bench_push_back_reserved_10k(c: &mut Criterion) {
    c.bench_function("push_back_reserved_10k", |b| {
        b.iter(|| {
            let mut array = GrowableArray::new();
            array.reserve(10_000);
            for v in 0..10_000u64 {
                array.push_back(v);
            }
            black_box(array.capacity());
        });
    });
}

/// Benchmark: 1K inserts at index 0 (worst-case right shift).
fn bench_insert_front_1k(c: &mut Criterion) {
    c.bench_function("insert_front_1k", |b| {
        b.iter(|| {
            let mut array = GrowableArray::new();
            for v in 0..1_000u64 {
                array.insert(0, v).unwrap();
            }
            black_box(array.front().copied());
        });
    });
}

/// Benchmark: 1K inserts at deterministic random positions into 1K elements.
fn bench_insert_random_1k(c: &mut Criterion) {
    let at = positions(0xC0FFEE, 1_000, 1_000);
    c.bench_function("insert_random_1k", |b| {
        b.iter(|| {
            let mut array = filled(1_000);
            for &p in &at {
                array.insert(p, 0).unwrap();
            }
            black_box(array.len());
        });
    });
}

/// Benchmark: erase from the front until a 1K array is empty (worst-case left shift).
fn bench_erase_front_1k(c: &mut Criterion) {
    c.bench_function("erase_front_1k", |b| {
        b.iter(|| {
            let mut array = filled(1_000);
            while let Ok(v) = array.erase(0) {
                black_box(v);
            }
        });
    });
}

/// Benchmark: clear + refill reusing retained capacity.
fn bench_clear_reuse_10k(c: &mut Criterion) {
    let mut array = filled(10_000);
    c.bench_function("clear_reuse_10k", |b| {
        b.iter(|| {
            array.clear();
            array.resize(10_000, 1);
            black_box(array.capacity());
        });
    });
}

/// Benchmark: replay a 5K-step mixed operation sequence.
fn bench_mixed_ops_5k(c: &mut Criterion) {
    let ops = mixed_ops(42, 5_000);
    c.bench_function("mixed_ops_5k", |b| {
        b.iter(|| {
            let mut array = GrowableArray::new();
            for op in &ops {
                black_box(model::apply(&mut array, op));
            }
            black_box(array.len());
        });
    });
}

criterion_group!(
    benches,
    bench_push_back_10k,
    bench_push_back_reserved_10k,
    bench_insert_front_1k,
    bench_insert_random_1k,
    bench_erase_front_1k,
    bench_clear_reuse_10k,
    bench_mixed_ops_5k,
);
criterion_main!(benches);
