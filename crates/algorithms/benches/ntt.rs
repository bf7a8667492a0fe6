//! Benchmarks for the ring arithmetic
//!
//! This benchmark suite measures the performance of:
//! - Forward and inverse NTT
//! - NTT-based polynomial multiplication
//! - Montgomery arithmetic operations
//! - Uniform and Gaussian sampling

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use sparrow_algorithms::poly::prelude::*;
use sparrow_algorithms::poly::sampling::matrix_header;

fn random_poly(rng: &mut ChaCha20Rng) -> Poly {
    let mut p = Poly::zero();
    for x in p.coeffs_mut().iter_mut() {
        *x = rng.gen_range(0..Q);
    }
    p
}

/// Benchmark forward and inverse transforms
fn bench_transforms(c: &mut Criterion) {
    let mut group = c.benchmark_group("ntt");
    let mut rng = ChaCha20Rng::seed_from_u64(42);
    let poly = random_poly(&mut rng);
    let ntt = poly.forward();

    group.bench_function("forward", |b| b.iter(|| black_box(&poly).forward()));
    group.bench_function("inverse", |b| b.iter(|| black_box(&ntt).inverse()));
    group.bench_function("roundtrip", |b| {
        b.iter(|| black_box(&poly).forward().inverse().from_montgomery())
    });

    group.finish();
}

/// Benchmark full polynomial multiplication, one product and a row of seven
fn bench_multiplication(c: &mut Criterion) {
    let mut group = c.benchmark_group("ntt_multiplication");
    let mut rng = ChaCha20Rng::seed_from_u64(42);

    for terms in [1usize, 7] {
        let a: Vec<NttPoly> = (0..terms).map(|_| random_poly(&mut rng).forward()).collect();
        let b: Vec<NttPoly> = (0..terms).map(|_| random_poly(&mut rng).forward()).collect();

        group.bench_with_input(BenchmarkId::new("inner_product", terms), &terms, |bench, _| {
            bench.iter(|| {
                let mut acc = NttProduct::zero();
                for (x, y) in a.iter().zip(b.iter()) {
                    acc.mul_acc(x, y);
                }
                black_box(acc.inverse())
            })
        });
    }

    group.finish();
}

/// Benchmark Montgomery arithmetic operations
fn bench_montgomery_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("montgomery");

    group.bench_function("mulq", |b| {
        b.iter(|| mulq(black_box(123_456), black_box(234_567)))
    });
    group.bench_function("redc", |b| {
        b.iter(|| redc(black_box(123_456_789_012_345i128)))
    });
    group.bench_function("addq", |b| {
        b.iter(|| addq(black_box(-1_234), black_box(Q - 1)))
    });

    group.finish();
}

/// Benchmark the samplers
fn bench_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampling");
    let mut rng = ChaCha20Rng::seed_from_u64(42);
    let mut noise = [0i64; N];

    group.bench_function("uniform", |b| {
        b.iter(|| sample_uniform(black_box(&matrix_header(3, 4))))
    });
    group.bench_function("expand_a", |b| b.iter(|| expand_a(black_box(3), black_box(4))));
    group.bench_function("gaussian_small", |b| {
        b.iter(|| sample_small(&mut rng, black_box(&mut noise)))
    });
    group.bench_function("gaussian_large", |b| {
        b.iter(|| sample_large(&mut rng, black_box(&mut noise)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_transforms,
    bench_multiplication,
    bench_montgomery_operations,
    bench_sampling
);
criterion_main!(benches);
