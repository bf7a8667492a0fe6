// tests/constant_time/kem_tests.rs
// Decapsulation must take the same time whether or not the tag verifies

use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use sparrow_api::{Kem, Serialize};
use sparrow_kem::sparrow::{Sparrow128, SparrowCiphertext};
use sparrow_tests::suites::constant_time::{TestConfig, TimingTester};

use super::report;

#[test]
#[ignore]
fn test_sparrow_decapsulation_constant_time() {
    let config = TestConfig::for_decapsulation();
    let mut rng = ChaChaRng::seed_from_u64(42);

    let (pk_a, sk_a) = Sparrow128::keypair(&mut rng, false).unwrap();
    let (pk_b, sk_b) = Sparrow128::keypair(&mut rng, true).unwrap();
    let (valid, _) = Sparrow128::encapsulate(&mut rng, &pk_a, &sk_b).unwrap();

    let mut bytes = valid.to_bytes();
    bytes[40] ^= 0x01;
    let invalid = SparrowCiphertext::from_bytes(&bytes).unwrap();

    // Warm-up
    for _ in 0..config.num_warmup {
        let _ = Sparrow128::decapsulate(&mut rng, &pk_b, &sk_a, &valid);
        let _ = Sparrow128::decapsulate(&mut rng, &pk_b, &sk_a, &invalid);
    }

    let tester = TimingTester::from_config(&config);
    let mut rng_a = ChaChaRng::seed_from_u64(1);
    let mut rng_b = ChaChaRng::seed_from_u64(2);
    let (t_valid, t_invalid) = tester.measure_pair(
        || {
            let _ = Sparrow128::decapsulate(&mut rng_a, &pk_b, &sk_a, &valid);
        },
        || {
            let _ = Sparrow128::decapsulate(&mut rng_b, &pk_b, &sk_a, &invalid);
        },
    );

    let analysis = match tester.analyze_constant_time(&t_valid, &t_invalid, &config) {
        Ok(result) => result,
        Err(e) => panic!("Analysis error: {}", e),
    };
    report("Sparrow-128-1 decapsulation", &analysis, &config);
}
