//! Performance measurement for both walk algorithms across grid sizes

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use kolamgen::algorithm::bias::SeededBias;
use kolamgen::algorithm::generator::{Algorithm, PatternRequest, generate};
use std::hint::black_box;

/// Measures single-stroke walk cost as the grid dimension grows
fn bench_single_stroke(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_stroke");

    for nd in &[4_usize, 8, 14, 20] {
        group.bench_with_input(BenchmarkId::from_parameter(nd), nd, |b, &nd| {
            let request = PatternRequest {
                grid_size: nd,
                complexity: 0.5,
                algorithm: Algorithm::SingleStroke,
            };
            b.iter(|| {
                let mut bias = SeededBias::new(42);
                black_box(generate(black_box(&request), &mut bias, None))
            });
        });
    }

    group.finish();
}

/// Measures multi-stroke coverage cost as the grid dimension grows
fn bench_multi_stroke(c: &mut Criterion) {
    let mut group = c.benchmark_group("multi_stroke");

    for nd in &[4_usize, 8, 14, 20] {
        group.bench_with_input(BenchmarkId::from_parameter(nd), nd, |b, &nd| {
            let request = PatternRequest {
                grid_size: nd,
                complexity: 0.5,
                algorithm: Algorithm::MultiStroke,
            };
            b.iter(|| {
                let mut bias = SeededBias::new(42);
                black_box(generate(black_box(&request), &mut bias, None))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single_stroke, bench_multi_stroke);
criterion_main!(benches);
