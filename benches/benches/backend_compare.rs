//! Backend Comparison Benchmark
//!
//! Compares the runtime dispatcher against the explicit AES-NI and portable
//! kernels, with the RustCrypto `aes` round function as an external
//! yardstick. Validates the cost of dispatch and of the fallback path.

#![allow(missing_docs)]
#![allow(unsafe_code)]
#![allow(clippy::unwrap_used)]

use aez_core::kernels;
use aez_core::{Block, KeyMaterial, BLOCK_SIZE};
use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use rand::prelude::*;
use std::hint::black_box;

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_round_backends(c: &mut Criterion) {
    let mut group = c.benchmark_group("Round Backends");
    group.throughput(Throughput::Bytes(BLOCK_SIZE as u64));

    let mut state: Block = [0u8; 16];
    rand::rng().fill(&mut state[..]);
    let mut keys: KeyMaterial = [0u8; 48];
    rand::rng().fill(&mut keys[..]);

    // 1. Dispatched (Production Path)
    // Measures runtime dispatch plus the fastest available kernel
    group.bench_function("Dispatched aes4", |bench| {
        bench.iter(|| {
            let mut s = black_box(state);
            aez_core::aes4(&mut s, black_box(&keys));
            s
        })
    });
    group.bench_function("Dispatched aes10", |bench| {
        bench.iter(|| {
            let mut s = black_box(state);
            aez_core::aes10(&mut s, black_box(&keys));
            s
        })
    });

    // 2. AES-NI - Explicit kernel (bypasses dispatcher)
    #[cfg(target_arch = "x86_64")]
    if aez_core::require_accel().is_ok() {
        group.bench_function("AES-NI Native aes4", |bench| {
            bench.iter(|| {
                let mut s = black_box(state);
                unsafe { kernels::aesni::aes4(&mut s, black_box(&keys)) };
                s
            })
        });
        group.bench_function("AES-NI Native aes10", |bench| {
            bench.iter(|| {
                let mut s = black_box(state);
                unsafe { kernels::aesni::aes10(&mut s, black_box(&keys)) };
                s
            })
        });
    }

    // 3. Portable - Pure Rust, no SIMD
    // Baseline to quantify the speedup from hardware acceleration
    group.bench_function("Portable aes4", |bench| {
        bench.iter(|| {
            let mut s = black_box(state);
            kernels::portable::aes4(&mut s, black_box(&keys));
            s
        })
    });
    group.bench_function("Portable aes10", |bench| {
        bench.iter(|| {
            let mut s = black_box(state);
            kernels::portable::aes10(&mut s, black_box(&keys));
            s
        })
    });

    // 4. RustCrypto - Same round primitive from the `aes` crate
    {
        use aes::hazmat::cipher_round;
        use aes::Block as RefBlock;

        let round_key = RefBlock::clone_from_slice(&keys[0..16]);

        group.bench_function("RustCrypto 4 rounds", |bench| {
            bench.iter(|| {
                let mut s = RefBlock::clone_from_slice(black_box(&state));
                for _ in 0..4 {
                    cipher_round(&mut s, &round_key);
                }
                s
            })
        });
        group.bench_function("RustCrypto 10 rounds", |bench| {
            bench.iter(|| {
                let mut s = RefBlock::clone_from_slice(black_box(&state));
                for _ in 0..10 {
                    cipher_round(&mut s, &round_key);
                }
                s
            })
        });
    }

    group.finish();
}

fn bench_xor_backends(c: &mut Criterion) {
    let mut group = c.benchmark_group("XOR Backends");
    group.throughput(Throughput::Bytes(BLOCK_SIZE as u64));

    let mut blocks = [[0u8; 16]; 4];
    for block in &mut blocks {
        rand::rng().fill(&mut block[..]);
    }
    let [a, b, c_in, d] = blocks;

    group.bench_function("Dispatched xor4", |bench| {
        bench.iter(|| {
            aez_core::xor4(
                black_box(&a),
                black_box(&b),
                black_box(&c_in),
                black_box(&d),
            )
        })
    });

    #[cfg(target_arch = "x86_64")]
    if aez_core::require_accel().is_ok() {
        group.bench_function("AES-NI Native xor4", |bench| {
            bench.iter(|| unsafe {
                kernels::aesni::xor4(
                    black_box(&a),
                    black_box(&b),
                    black_box(&c_in),
                    black_box(&d),
                )
            })
        });
    }

    group.bench_function("Portable xor4", |bench| {
        bench.iter(|| {
            kernels::portable::xor4(
                black_box(&a),
                black_box(&b),
                black_box(&c_in),
                black_box(&d),
            )
        })
    });

    group.finish();
}

criterion_group!(benches, bench_round_backends, bench_xor_backends);
criterion_main!(benches);
