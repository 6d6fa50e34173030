//! Benchmarks for flatten, uniq and sorted_index.
//!
//! `uniq` is compared with a sort-and-dedup baseline that does not keep
//! first-seen order, `sorted_index` with a linear scan.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use seqkit::sequence::{Nested, flatten, sorted_index, uniq};
use std::hint::black_box;

const SIZES: [usize; 3] = [100, 1000, 10000];

/// Builds `size` leaves spread over nested groups of eight.
fn nested_input(size: usize) -> Vec<Nested<usize>> {
    (0..size)
        .collect::<Vec<_>>()
        .chunks(8)
        .map(|group| {
            Nested::sequence(vec![
                Nested::leaf(group[0]),
                Nested::from_leaves(group[1..].iter().copied()),
            ])
        })
        .collect()
}

// =============================================================================
// flatten Benchmark
// =============================================================================

fn benchmark_flatten(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("flatten");

    for size in SIZES {
        let input = nested_input(size);
        group.bench_with_input(BenchmarkId::new("deep", size), &input, |bencher, input| {
            bencher.iter(|| black_box(flatten(black_box(input))));
        });
    }

    group.finish();
}

// =============================================================================
// uniq Benchmark
// =============================================================================

fn benchmark_uniq(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("uniq");

    for size in SIZES {
        let input: Vec<usize> = (0..size).map(|index| index % (size / 4 + 1)).collect();

        group.bench_with_input(BenchmarkId::new("uniq", size), &input, |bencher, input| {
            bencher.iter(|| black_box(uniq(black_box(input))));
        });

        group.bench_with_input(
            BenchmarkId::new("sort_dedup", size),
            &input,
            |bencher, input| {
                bencher.iter(|| {
                    let mut sorted = black_box(input).clone();
                    sorted.sort_unstable();
                    sorted.dedup();
                    black_box(sorted)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// sorted_index Benchmark
// =============================================================================

fn benchmark_sorted_index(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("sorted_index");

    for size in SIZES {
        let input: Vec<usize> = (0..size).map(|index| index * 2).collect();
        let probe = size + 1;

        group.bench_with_input(
            BenchmarkId::new("binary", size),
            &input,
            |bencher, input| {
                bencher.iter(|| black_box(sorted_index(black_box(input), black_box(&probe))));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("linear", size),
            &input,
            |bencher, input| {
                bencher.iter(|| {
                    black_box(
                        black_box(input)
                            .iter()
                            .position(|element| *element >= probe),
                    )
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_flatten,
    benchmark_uniq,
    benchmark_sorted_index
);
criterion_main!(benches);
