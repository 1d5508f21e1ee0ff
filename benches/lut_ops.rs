//! Truth-table operation benchmarks.
//!
//! Run with:
//! ```bash
//! cargo bench --bench lut_ops
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lut_rs::prelude::*;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

const ARITIES: [usize; 4] = [4, 6, 8, 10];

/// Build `count` random tables of the given arity.
fn random_luts(input_count: usize, count: usize, seed: u64) -> Vec<Lut> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let mut lut = Lut::new(input_count);
            for w in lut.words_mut() {
                *w = rng.random();
            }
            lut
        })
        .collect()
}

// ============================================================================
// Benchmark: pseudo-representative
// ============================================================================

fn bench_pseudo_representant(c: &mut Criterion) {
    let mut group = c.benchmark_group("lut/pseudo_representant");

    for n in ARITIES {
        let luts = random_luts(n, 64, 42);
        group.throughput(Throughput::Elements(luts.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &luts, |b, luts| {
            b.iter(|| luts.iter().map(|f| f.pseudo_representant()).collect::<Vec<_>>());
        });
    }

    group.finish();
}

// ============================================================================
// Benchmark: input swaps
// ============================================================================

fn bench_swap_inputs(c: &mut Criterion) {
    let mut group = c.benchmark_group("lut/swap_inputs");

    for n in ARITIES {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let pairs: Vec<(usize, usize)> = (0..256)
            .map(|_| (rng.random_range(0..n), rng.random_range(0..n)))
            .collect();
        let mut lut = random_luts(n, 1, 7).remove(0);
        group.throughput(Throughput::Elements(pairs.len() as u64));
        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter(|| {
                for &(i, j) in &pairs {
                    lut.swap_inputs(i, j).unwrap();
                }
            });
        });
    }

    group.finish();
}

// ============================================================================
// Benchmark: cofactors
// ============================================================================

fn bench_cofactors(c: &mut Criterion) {
    let mut group = c.benchmark_group("lut/cofactors");

    for n in ARITIES {
        let lut = random_luts(n, 1, 11).remove(0);
        group.bench_with_input(BenchmarkId::new("shannon", n), &lut, |b, lut| {
            b.iter(|| {
                for k in 0..n {
                    let neg = lut.cofactor(k, false).unwrap();
                    let pos = lut.cofactor(k, true).unwrap();
                    Lut::from_cofactors(&neg, &pos, k).unwrap();
                }
            });
        });
        group.bench_with_input(BenchmarkId::new("compact", n), &lut, |b, lut| {
            b.iter(|| {
                for k in 0..n {
                    let neg = lut.compact_cofactor(k, false).unwrap();
                    let pos = lut.compact_cofactor(k, true).unwrap();
                    Lut::from_compact_cofactors(&neg, &pos, k).unwrap();
                }
            });
        });
    }

    group.finish();
}

// ============================================================================
// Benchmark: classification scans
// ============================================================================

fn bench_factorization(c: &mut Criterion) {
    let mut group = c.benchmark_group("lut/factorization");
    group.sample_size(20);

    for n in ARITIES {
        let luts = random_luts(n, 16, 3);
        group.bench_with_input(BenchmarkId::from_parameter(n), &luts, |b, luts| {
            b.iter(|| {
                luts.iter()
                    .filter(|f| f.has_single_input_factorization() || f.has_two_input_factorization())
                    .count()
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_pseudo_representant,
    bench_swap_inputs,
    bench_cofactors,
    bench_factorization
);
criterion_main!(benches);
