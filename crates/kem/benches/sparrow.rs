// crates/kem/benches/sparrow.rs

//! Benchmarks for the Sparrow Key Encapsulation Mechanism

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use sparrow_api::Kem;
use sparrow_kem::sparrow::{crypto_decaps, crypto_encaps, Sparrow128, CIPHERTEXT_BYTES};

/// Benchmark Sparrow-128-1 operations through the `Kem` trait
fn bench_sparrow128(c: &mut Criterion) {
    let mut group = c.benchmark_group("Sparrow128");
    let mut rng = ChaChaRng::seed_from_u64(42);

    group.bench_function("keygen", |b| {
        b.iter(|| {
            let _keypair = Sparrow128::keypair(&mut rng, false).unwrap();
        });
    });

    let (pk_a, sk_a) = Sparrow128::keypair(&mut rng, false).unwrap();
    let (pk_b, sk_b) = Sparrow128::keypair(&mut rng, true).unwrap();

    group.bench_function("encapsulate", |b| {
        b.iter(|| {
            let (_ct, _ss) =
                Sparrow128::encapsulate(&mut rng, black_box(&pk_a), black_box(&sk_b)).unwrap();
        });
    });

    let (ct, _) = Sparrow128::encapsulate(&mut rng, &pk_a, &sk_b).unwrap();

    group.bench_function("decapsulate", |b| {
        b.iter(|| {
            let _ss = Sparrow128::decapsulate(
                &mut rng,
                black_box(&pk_b),
                black_box(&sk_a),
                black_box(&ct),
            )
            .unwrap();
        });
    });

    group.bench_function("full_workflow", |b| {
        b.iter(|| {
            let (pk_a, sk_a) = Sparrow128::keypair(&mut rng, false).unwrap();
            let (pk_b, sk_b) = Sparrow128::keypair(&mut rng, true).unwrap();
            let (ct, ss1) = Sparrow128::encapsulate(&mut rng, &pk_a, &sk_b).unwrap();
            let ss2 = Sparrow128::decapsulate(&mut rng, &pk_b, &sk_a, &ct).unwrap();
            (ss1, ss2)
        });
    });

    group.finish();
}

/// Benchmark the byte-level entry points, which decode keys on every call
fn bench_byte_api(c: &mut Criterion) {
    let mut group = c.benchmark_group("Sparrow128 bytes");
    let mut rng = ChaChaRng::seed_from_u64(7);

    let (pk_a, sk_a) = Sparrow128::keypair(&mut rng, false).unwrap();
    let (pk_b, sk_b) = Sparrow128::keypair(&mut rng, true).unwrap();
    let mut ss = [0u8; 32];
    let mut ct = [0u8; CIPHERTEXT_BYTES];
    crypto_encaps(&mut rng, &mut ss, &mut ct, pk_a.as_ref(), sk_b.as_ref()).unwrap();

    group.bench_function("crypto_encaps", |b| {
        b.iter(|| {
            let mut ss = [0u8; 32];
            let mut ct = [0u8; CIPHERTEXT_BYTES];
            crypto_encaps(&mut rng, &mut ss, &mut ct, pk_a.as_ref(), sk_b.as_ref()).unwrap();
        });
    });

    group.bench_function("crypto_decaps", |b| {
        b.iter(|| {
            let mut out = [0u8; 32];
            crypto_decaps(&mut rng, &mut out, pk_b.as_ref(), black_box(&ct), sk_a.as_ref())
                .unwrap();
        });
    });

    group.finish();
}

criterion_group!(benches, bench_sparrow128, bench_byte_api);
criterion_main!(benches);
