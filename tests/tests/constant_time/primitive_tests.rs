// tests/constant_time/primitive_tests.rs
// Timing of the building blocks that handle secret values

use rand::{CryptoRng, Error, RngCore, SeedableRng};
use rand_chacha::ChaChaRng;
use sparrow_algorithms::poly::prelude::*;
use sparrow_internal::constant_time::ct_eq;
use sparrow_kem::sparrow::rec::{help_recvec, rec_vec};
use sparrow_tests::suites::constant_time::{TestConfig, TimingTester};

use super::report;

/// Returns the same byte forever; drives the sampler to a fixed table position
struct FixedRng(u8);

impl RngCore for FixedRng {
    fn next_u32(&mut self) -> u32 {
        u32::from_le_bytes([self.0; 4])
    }

    fn next_u64(&mut self) -> u64 {
        u64::from_le_bytes([self.0; 8])
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(self.0);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl CryptoRng for FixedRng {}

#[test]
#[ignore]
fn test_gaussian_sampler_constant_time() {
    let config = TestConfig::for_sampler();
    let mut out = [0i64; N];

    // 0x00 hits the deepest tail, 0xFF returns zero after the full scan
    let mut tail = FixedRng(0x00);
    let mut centre = FixedRng(0xFF);
    for _ in 0..config.num_warmup {
        sample_large(&mut tail, &mut out);
        sample_large(&mut centre, &mut out);
    }

    let tester = TimingTester::from_config(&config);
    let mut out_b = [0i64; N];
    let (t_tail, t_centre) = tester.measure_pair(
        || sample_large(&mut tail, &mut out),
        || sample_large(&mut centre, &mut out_b),
    );

    let analysis = tester
        .analyze_constant_time(&t_tail, &t_centre, &config)
        .unwrap_or_else(|e| panic!("Analysis error: {}", e));
    report("Gaussian sampler", &analysis, &config);
}

#[test]
#[ignore]
fn test_reconciliation_constant_time() {
    let config = TestConfig::for_reconciliation();
    let mut rng = ChaChaRng::seed_from_u64(7);

    // all coordinates on a bucket edge vs all in a bucket centre
    let edge = Poly::from_coeffs([Q / 4; N]);
    let centre = Poly::from_coeffs([Q / 8; N]);
    let mut hints_edge = [0u8; 128];
    let mut hints_centre = [0u8; 128];
    help_recvec(&mut rng, &edge, &mut hints_edge);
    help_recvec(&mut rng, &centre, &mut hints_centre);

    let mut key = [0u8; 32];
    let tester = TimingTester::from_config(&config);
    let mut key_b = [0u8; 32];
    let (t_edge, t_centre) = tester.measure_pair(
        || rec_vec(&mut key, &edge, &hints_edge),
        || rec_vec(&mut key_b, &centre, &hints_centre),
    );

    let analysis = tester
        .analyze_constant_time(&t_edge, &t_centre, &config)
        .unwrap_or_else(|e| panic!("Analysis error: {}", e));
    report("Reconciliation", &analysis, &config);
}

#[test]
#[ignore]
fn test_tag_compare_constant_time() {
    let config = TestConfig::for_compare();
    let tag = [0x5Au8; 32];
    let mut early = tag;
    early[0] ^= 1;
    let mut late = tag;
    late[31] ^= 1;

    let tester = TimingTester::from_config(&config);
    let (t_early, t_late) = tester.measure_pair(
        || {
            std::hint::black_box(ct_eq(std::hint::black_box(&tag), std::hint::black_box(&early)));
        },
        || {
            std::hint::black_box(ct_eq(std::hint::black_box(&tag), std::hint::black_box(&late)));
        },
    );

    let analysis = tester
        .analyze_constant_time(&t_early, &t_late, &config)
        .unwrap_or_else(|e| panic!("Analysis error: {}", e));
    report("Tag comparison", &analysis, &config);
}
