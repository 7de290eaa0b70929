//! Benchmark for the collector strategies.
//!
//! Measures all-or-nothing and any-or-last over inputs of increasing size,
//! and (with the `rayon` feature) the fork-join driver against the
//! sequential one.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use twofold::collect::{AllOrNothing, AnyOrLast, collect_with};
use twofold::{Maybe, Outcome, err, none, ok, some};

fn outcomes(size: usize) -> Vec<Outcome<u64, String>> {
    (0..size as u64)
        .map(|n| if n % 97 == 96 { err(format!("rejected {n}")) } else { ok(n) })
        .collect()
}

fn maybes(size: usize) -> Vec<Maybe<u64>> {
    (0..size as u64)
        .map(|n| if n % 3 == 0 { none() } else { some(n) })
        .collect()
}

// =============================================================================
// Sequential Benchmarks
// =============================================================================

fn benchmark_sequential(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("collect_sequential");

    for size in [100, 1_000, 10_000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("all_or_nothing", size), &size, |bencher, &size| {
            let input = outcomes(size);
            bencher.iter(|| black_box(collect_with(input.clone(), &AllOrNothing::new())));
        });

        group.bench_with_input(BenchmarkId::new("any_or_last", size), &size, |bencher, &size| {
            let input = maybes(size);
            bencher.iter(|| black_box(collect_with(input.clone(), &AnyOrLast::new())));
        });

        group.bench_with_input(BenchmarkId::new("std_result_collect", size), &size, |bencher, &size| {
            let input: Vec<Result<u64, String>> = outcomes(size).into_iter().map(Outcome::into_result).collect();
            bencher.iter(|| black_box(input.clone().into_iter().collect::<Result<Vec<u64>, String>>()));
        });
    }

    group.finish();
}

// =============================================================================
// Parallel Benchmarks
// =============================================================================

#[cfg(feature = "rayon")]
fn benchmark_parallel(criterion: &mut Criterion) {
    use twofold::collect::par_collect_with;

    let mut group = criterion.benchmark_group("collect_parallel");

    for size in [10_000, 100_000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("sequential", size), &size, |bencher, &size| {
            let input = maybes(size);
            bencher.iter(|| black_box(collect_with(input.clone(), &AnyOrLast::new())));
        });

        group.bench_with_input(BenchmarkId::new("parallel", size), &size, |bencher, &size| {
            let input = maybes(size);
            bencher.iter(|| black_box(par_collect_with(input.clone(), &AnyOrLast::new())));
        });
    }

    group.finish();
}

#[cfg(not(feature = "rayon"))]
fn benchmark_parallel(_criterion: &mut Criterion) {}

criterion_group!(benches, benchmark_sequential, benchmark_parallel);
criterion_main!(benches);
