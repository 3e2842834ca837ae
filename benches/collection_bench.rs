//! Benchmark for OrderedCollection vs standard Vec.
//!
//! Compares the performance of funcol's OrderedCollection against Rust's
//! standard Vec for common operations.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use funcol::collection::OrderedCollection;
use std::hint::black_box;

// =============================================================================
// from_iter Benchmark (Construction)
// =============================================================================

fn benchmark_from_iter(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("from_iter");

    for size in [100, 1000, 10000] {
        // OrderedCollection from_iter
        group.bench_with_input(
            BenchmarkId::new("OrderedCollection", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let collection: OrderedCollection<i32> = (0..size).collect();
                    black_box(collection)
                });
            },
        );

        // Standard Vec from_iter
        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let vector: Vec<i32> = (0..size).collect();
                black_box(vector)
            });
        });
    }

    group.finish();
}

// =============================================================================
// get Benchmark (Signed Index Access)
// =============================================================================

fn benchmark_get(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("get");

    for size in [100, 1000, 10000] {
        // Prepare data
        let collection: OrderedCollection<i32> = (0..size).collect();
        let standard_vector: Vec<i32> = (0..size).collect();

        // OrderedCollection get, alternating plain and negative indexes
        group.bench_with_input(
            BenchmarkId::new("OrderedCollection", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut sum = 0;
                    for index in 0..size as isize {
                        if let Ok(&value) = collection.get(black_box(-index - 1)) {
                            sum += value;
                        }
                    }
                    black_box(sum)
                });
            },
        );

        // Standard Vec get
        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut sum = 0;
                for index in 0..size as usize {
                    if let Some(&value) = standard_vector.get(black_box(index)) {
                        sum += value;
                    }
                }
                black_box(sum)
            });
        });
    }

    group.finish();
}

// =============================================================================
// slice Benchmark (Wraparound vs Vec Rotation)
// =============================================================================

fn benchmark_slice(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("slice");

    for size in [100, 1000, 10000] {
        let collection: OrderedCollection<i32> = (0..size).collect();
        let standard_vector: Vec<i32> = (0..size).collect();
        let split = (size / 2) as isize;

        // OrderedCollection wraparound slice, equivalent to a rotation
        group.bench_with_input(
            BenchmarkId::new("OrderedCollection_wrap", size),
            &size,
            |bencher, _| {
                bencher.iter(|| {
                    let rotated = collection.slice(black_box(&[split, split - 1]));
                    black_box(rotated)
                });
            },
        );

        // OrderedCollection strided slice over the whole range
        group.bench_with_input(
            BenchmarkId::new("OrderedCollection_stride", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let strided = collection.slice(black_box(&[0, size as isize - 1, 2]));
                    black_box(strided)
                });
            },
        );

        // Standard Vec clone + rotate_left
        group.bench_with_input(
            BenchmarkId::new("Vec_rotate", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut rotated = standard_vector.clone();
                    rotated.rotate_left(black_box((size / 2) as usize));
                    black_box(rotated)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// filter Benchmark
// =============================================================================

fn benchmark_filter(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("filter");

    for size in [100, 1000, 10000] {
        let collection: OrderedCollection<i32> = (0..size).collect();
        let standard_vector: Vec<i32> = (0..size).collect();

        // OrderedCollection filter
        group.bench_with_input(
            BenchmarkId::new("OrderedCollection", size),
            &size,
            |bencher, _| {
                bencher.iter(|| {
                    let evens = collection.filter(|element| black_box(element % 2 == 0));
                    black_box(evens)
                });
            },
        );

        // Standard iterator filter + collect
        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |bencher, _| {
            bencher.iter(|| {
                let evens: Vec<i32> = standard_vector
                    .iter()
                    .copied()
                    .filter(|element| black_box(element % 2 == 0))
                    .collect();
                black_box(evens)
            });
        });
    }

    group.finish();
}

// =============================================================================
// sort Benchmark
// =============================================================================

fn benchmark_sort(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("sort");

    for size in [100, 1000, 10000] {
        // Reversed input so every sort does real work
        let collection: OrderedCollection<i32> = (0..size).rev().collect();
        let standard_vector: Vec<i32> = (0..size).rev().collect();

        // OrderedCollection sort, ascending copy
        group.bench_with_input(
            BenchmarkId::new("OrderedCollection", size),
            &size,
            |bencher, _| {
                bencher.iter(|| {
                    let sorted = collection.sort(black_box(false));
                    black_box(sorted)
                });
            },
        );

        // Standard Vec clone + sort
        group.bench_with_input(BenchmarkId::new("Vec_clone", size), &size, |bencher, _| {
            bencher.iter(|| {
                let mut sorted = standard_vector.clone();
                sorted.sort();
                black_box(sorted)
            });
        });
    }

    group.finish();
}

// =============================================================================
// uniques Benchmark (Quadratic vs Hashed Deduplication)
// =============================================================================

fn benchmark_uniques(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("uniques");

    for size in [100, 1000] {
        // 16 distinct values spread across the whole collection
        let collection: OrderedCollection<i32> = (0..size).map(|index| index % 16).collect();

        // PartialEq-only path, O(n^2)
        group.bench_with_input(
            BenchmarkId::new("OrderedCollection_uniques", size),
            &size,
            |bencher, _| {
                bencher.iter(|| {
                    let distinct = collection.uniques();
                    black_box(distinct)
                });
            },
        );

        // Hashed path, O(n)
        group.bench_with_input(
            BenchmarkId::new("OrderedCollection_uniques_hashed", size),
            &size,
            |bencher, _| {
                bencher.iter(|| {
                    let distinct = collection.uniques_hashed();
                    black_box(distinct)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// reduce Benchmark
// =============================================================================

fn benchmark_reduce(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("reduce");

    for size in [100, 1000, 10000] {
        let collection: OrderedCollection<i32> = (0..size).collect();
        let standard_vector: Vec<i32> = (0..size).collect();

        // OrderedCollection reduce
        group.bench_with_input(
            BenchmarkId::new("OrderedCollection", size),
            &size,
            |bencher, _| {
                bencher.iter(|| {
                    let sum = collection.reduce(0_i64, |sum, element| sum + i64::from(*element));
                    black_box(sum)
                });
            },
        );

        // Standard iterator sum
        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |bencher, _| {
            bencher.iter(|| {
                let sum: i64 = standard_vector.iter().map(|&element| i64::from(element)).sum();
                black_box(sum)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Criterion Group and Main
// =============================================================================

criterion_group!(
    benches,
    benchmark_from_iter,
    benchmark_get,
    benchmark_slice,
    benchmark_filter,
    benchmark_sort,
    benchmark_uniques,
    benchmark_reduce
);

criterion_main!(benches);
