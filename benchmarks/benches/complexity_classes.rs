//! Complexity Class Benchmarks
//!
//! Each demo operation measured across growing sequence lengths, so the
//! criterion reports show the expected growth curve per class:
//! - O(1) first_element
//! - O(log N) binary search (iterative and recursive)
//! - O(N) linear sum and doubling copy
//! - O(N log N) std sort and merge sort
//! - O(N^2) bubble sort and matrix allocation
//!
//! Run with: cargo bench --bench complexity_classes

use complexity_core::time_demo::bubble_sort_in_place;
use complexity_core::{merge_sort, Element, SpaceComplexityDemo, TimeComplexityDemo};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::time::Duration;

/// Sequence lengths for the cheap classes
const SIZES: &[usize] = &[100, 1_000, 10_000, 100_000];

/// Sequence lengths for the quadratic classes
const QUADRATIC_SIZES: &[usize] = &[100, 500, 1_000, 2_000];

/// Shuffled `[0, n)` so sorts do real work
fn shuffled(n: usize) -> Vec<Element> {
    let mut rng = StdRng::seed_from_u64(42);
    let mut values: Vec<Element> = (0..n as Element).collect();
    values.shuffle(&mut rng);
    values
}

fn bench_constant(c: &mut Criterion) {
    let mut group = c.benchmark_group("constant");

    for &n in SIZES {
        let demo = TimeComplexityDemo::new(n);
        group.bench_with_input(BenchmarkId::new("first_element", n), &n, |b, _| {
            b.iter(|| black_box(demo.first_element()));
        });
    }

    group.finish();
}

fn bench_logarithmic(c: &mut Criterion) {
    let mut group = c.benchmark_group("logarithmic");

    for &n in SIZES {
        let time = TimeComplexityDemo::new(n);
        let space = SpaceComplexityDemo::new(n);
        let target = n as Element - 1;

        group.bench_with_input(BenchmarkId::new("binary_search", n), &target, |b, &t| {
            b.iter(|| black_box(time.binary_search(black_box(t))));
        });
        group.bench_with_input(BenchmarkId::new("recursive_search", n), &target, |b, &t| {
            b.iter(|| black_box(space.log_n_space_operation(black_box(t))));
        });
    }

    group.finish();
}

fn bench_linear(c: &mut Criterion) {
    let mut group = c.benchmark_group("linear");

    for &n in SIZES {
        let time = TimeComplexityDemo::new(n);
        let space = SpaceComplexityDemo::new(n);

        group.bench_with_input(BenchmarkId::new("linear_sum", n), &n, |b, _| {
            b.iter(|| black_box(time.linear_sum()));
        });
        group.bench_with_input(BenchmarkId::new("doubling_copy", n), &n, |b, _| {
            b.iter(|| black_box(space.linear_space_operation()));
        });
    }

    group.finish();
}

fn bench_linearithmic(c: &mut Criterion) {
    let mut group = c.benchmark_group("linearithmic");
    group.measurement_time(Duration::from_secs(5));

    for &n in SIZES {
        let input = shuffled(n);

        group.bench_with_input(BenchmarkId::new("std_sort", n), &input, |b, input| {
            b.iter(|| {
                let mut copy = input.clone();
                copy.sort();
                black_box(copy)
            });
        });
        group.bench_with_input(BenchmarkId::new("merge_sort", n), &input, |b, input| {
            b.iter(|| black_box(merge_sort(black_box(input))));
        });
    }

    group.finish();
}

fn bench_quadratic(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadratic");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(5));

    for &n in QUADRATIC_SIZES {
        let mut reversed: Vec<Element> = (0..n as Element).collect();
        reversed.reverse();

        group.bench_with_input(
            BenchmarkId::new("bubble_sort_reversed", n),
            &reversed,
            |b, input| {
                b.iter(|| {
                    let mut copy = input.clone();
                    bubble_sort_in_place(&mut copy);
                    black_box(copy)
                });
            },
        );

        let space = SpaceComplexityDemo::new(n);
        group.bench_with_input(BenchmarkId::new("zero_matrix", n), &n, |b, _| {
            b.iter(|| black_box(space.quadratic_space_operation()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_constant,
    bench_logarithmic,
    bench_linear,
    bench_linearithmic,
    bench_quadratic
);
criterion_main!(benches);
