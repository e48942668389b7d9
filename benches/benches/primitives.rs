//! Primitive Throughput Benchmark
//!
//! Statistically rigorous measurements of the XOR combiners, the keyed round
//! functions, and the constant-time comparator on whatever backend the
//! dispatcher selects.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use aez_core::{aes10, aes4, ct_equal, xor2, xor3, xor4, Block, KeyMaterial, BLOCK_SIZE};
use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use rand::prelude::*;
use std::hint::black_box;

fn random_block() -> Block {
    let mut block = [0u8; BLOCK_SIZE];
    rand::rng().fill(&mut block[..]);
    block
}

// =============================================================================
// BENCHMARK 1: XOR COMBINERS
// =============================================================================

/// Per-block cost of the two, three, and four way combiners.
fn bench_xor(c: &mut Criterion) {
    let mut group = c.benchmark_group("1-XOR-Combiners");
    group.throughput(Throughput::Bytes(BLOCK_SIZE as u64));

    let a = random_block();
    let b = random_block();
    let third = random_block();
    let fourth = random_block();

    group.bench_function("xor2", |bench| {
        bench.iter(|| xor2(black_box(&a), black_box(&b)))
    });
    group.bench_function("xor3", |bench| {
        bench.iter(|| xor3(black_box(&a), black_box(&b), black_box(&third)))
    });
    group.bench_function("xor4", |bench| {
        bench.iter(|| {
            xor4(
                black_box(&a),
                black_box(&b),
                black_box(&third),
                black_box(&fourth),
            )
        })
    });
    group.finish();
}

// =============================================================================
// BENCHMARK 2: ROUND FUNCTIONS
// =============================================================================

/// Per-block latency of the four and ten round keyed permutations.
fn bench_rounds(c: &mut Criterion) {
    let mut group = c.benchmark_group("2-Round-Functions");
    group.throughput(Throughput::Bytes(BLOCK_SIZE as u64));

    let state = random_block();
    let mut keys: KeyMaterial = [0u8; 48];
    rand::rng().fill(&mut keys[..]);

    group.bench_function("aes4", |bench| {
        bench.iter(|| {
            let mut s = black_box(state);
            aes4(&mut s, black_box(&keys));
            s
        })
    });
    group.bench_function("aes10", |bench| {
        bench.iter(|| {
            let mut s = black_box(state);
            aes10(&mut s, black_box(&keys));
            s
        })
    });
    group.finish();
}

// =============================================================================
// BENCHMARK 3: CONSTANT-TIME COMPARE
// =============================================================================

/// Comparator latency across typical operand sizes.
fn bench_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("3-Constant-Time-Compare");

    let sizes = [(16, "16B"), (48, "48B"), (1024, "1KB")];

    for (size, name) in sizes {
        let mut lhs = vec![0u8; size];
        rand::rng().fill(&mut lhs[..]);
        let rhs = lhs.clone();
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(name),
            &(lhs, rhs),
            |bench, (l, r)| bench.iter(|| ct_equal(black_box(l), black_box(r))),
        );
    }
    group.finish();
}

// =============================================================================
// MAIN
// =============================================================================

criterion_group!(benches, bench_xor, bench_rounds, bench_compare);
criterion_main!(benches);
