// tests/kat_tests.rs
use sparrow_tests::suites::kat::{loader, runner, KatError, ShakeRng};

use sparrow_api::{Kem, Serialize};
use sparrow_kem::sparrow::{Sparrow128, SparrowCiphertext};

#[test]
fn test_sparrow128_kat() {
    let file = loader::load_sparrow128().expect("Failed to load Sparrow-128-1 vectors");
    println!(
        "Running {} known-answer vectors for {}",
        file.vectors.len(),
        file.algorithm
    );
    let passed = runner::check_file(&file).expect("known-answer test failed");
    assert_eq!(passed, file.vectors.len());
}

#[test]
fn test_kat_is_reproducible() {
    let seed: Vec<u8> = (0u8..48).collect();
    let a = runner::run_exchange(&seed).unwrap();
    let b = runner::run_exchange(&seed).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.ss_sender, a.ss_receiver);
}

#[test]
fn test_kat_detects_mismatch() {
    let mut file = loader::load_sparrow128().unwrap();
    file.vectors[0].ss[0] ^= 1;
    match runner::check_vector(&file.vectors[0]) {
        Err(KatError::Mismatch { field, .. }) => assert_eq!(field, "ss (sender)"),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_kat_tampered_tag() {
    let file = loader::load_sparrow128().unwrap();
    let v = &file.vectors[0];

    // replay the keys, then feed a modified ciphertext to A
    let mut rng = ShakeRng::new(&v.seed);
    let (_, sk_a) = Sparrow128::keypair(&mut rng, false).unwrap();
    let (pk_b, _) = Sparrow128::keypair(&mut rng, true).unwrap();

    let mut ct = v.ct.clone();
    ct[47] ^= 0x80;
    let ct = SparrowCiphertext::from_bytes(&ct).unwrap();
    let err = Sparrow128::decapsulate(&mut rng, &pk_b, &sk_a, &ct).unwrap_err();
    assert!(err.is_decapsulation_failure());
}
