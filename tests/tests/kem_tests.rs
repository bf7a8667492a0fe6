//! Integration tests for the Sparrow KEM through the public interfaces

use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;
use sparrow_api::{Kem, Serialize, SerializeSecret};
use sparrow_kem::sparrow::{
    crypto_decaps, crypto_encaps, crypto_keypair, Sparrow128, SparrowCiphertext,
    SparrowPublicKey, SparrowSecretKey, CIPHERTEXT_BYTES, PUBLIC_KEY_BYTES, SECRET_KEY_BYTES,
    SHARED_SECRET_BYTES,
};
use zeroize::Zeroize;

#[test]
fn test_sparrow_round_trip_1000() {
    let mut rng = ChaChaRng::seed_from_u64(0x5ba7_7011);
    let mut failures = 0;

    for i in 0..1000 {
        let flip = i % 2 == 1;
        let (pk_a, sk_a) = Sparrow128::keypair(&mut rng, flip).unwrap();
        let (pk_b, sk_b) = Sparrow128::keypair(&mut rng, !flip).unwrap();

        let (ct, ss1) = Sparrow128::encapsulate(&mut rng, &pk_a, &sk_b).unwrap();
        match Sparrow128::decapsulate(&mut rng, &pk_b, &sk_a, &ct) {
            Ok(ss2) if ss2 == ss1 => {}
            _ => failures += 1,
        }
    }

    println!("Sparrow-128-1: {} failures in 1000 exchanges", failures);
    assert_eq!(failures, 0);
}

#[test]
fn test_serialized_keys_interoperate() {
    let mut rng = ChaChaRng::seed_from_u64(1);
    let (pk_a, sk_a) = Sparrow128::keypair(&mut rng, false).unwrap();
    let (pk_b, sk_b) = Sparrow128::keypair(&mut rng, true).unwrap();

    // store and reload every artifact
    let pk_a = SparrowPublicKey::from_bytes(&pk_a.to_bytes()).unwrap();
    let sk_a = SparrowSecretKey::from_bytes(&sk_a.to_bytes_zeroizing()).unwrap();
    let pk_b = SparrowPublicKey::from_bytes(&pk_b.to_bytes()).unwrap();
    let sk_b = SparrowSecretKey::from_bytes(&sk_b.to_bytes_zeroizing()).unwrap();

    let (ct, ss1) = Sparrow128::encapsulate(&mut rng, &pk_a, &sk_b).unwrap();
    let ct = SparrowCiphertext::from_bytes(&ct.to_bytes()).unwrap();
    let ss2 = Sparrow128::decapsulate(&mut rng, &pk_b, &sk_a, &ct).unwrap();
    assert_eq!(ss1, ss2);
}

#[test]
fn test_byte_functions_match_trait() {
    let mut rng = ChaChaRng::seed_from_u64(2);
    let mut pk_a = vec![0u8; PUBLIC_KEY_BYTES];
    let mut sk_a = vec![0u8; SECRET_KEY_BYTES];
    crypto_keypair(&mut rng, &mut pk_a, &mut sk_a, false).unwrap();
    let (pk_b, sk_b) = Sparrow128::keypair(&mut rng, true).unwrap();

    // byte-level encapsulation, trait-level decapsulation
    let mut ss1 = [0u8; SHARED_SECRET_BYTES];
    let mut ct = [0u8; CIPHERTEXT_BYTES];
    crypto_encaps(&mut rng, &mut ss1, &mut ct, &pk_a, sk_b.as_ref()).unwrap();

    let ss2 = Sparrow128::decapsulate(
        &mut rng,
        &pk_b,
        &SparrowSecretKey::from_bytes(&sk_a).unwrap(),
        &SparrowCiphertext::from_bytes(&ct).unwrap(),
    )
    .unwrap();
    assert_eq!(&ss1[..], ss2.as_ref());

    let mut ss3 = [0u8; SHARED_SECRET_BYTES];
    crypto_decaps(&mut rng, &mut ss3, pk_b.as_ref(), &ct, &sk_a).unwrap();
    assert_eq!(ss1, ss3);
}

#[test]
fn test_random_ciphertexts_rejected() {
    let mut rng = ChaChaRng::seed_from_u64(3);
    let (pk_a, sk_a) = Sparrow128::keypair(&mut rng, false).unwrap();
    let (pk_b, _) = Sparrow128::keypair(&mut rng, true).unwrap();

    for _ in 0..50 {
        let mut bytes = [0u8; CIPHERTEXT_BYTES];
        rng.fill(&mut bytes[..]);
        let ct = SparrowCiphertext::from_bytes(&bytes).unwrap();
        let err = Sparrow128::decapsulate(&mut rng, &pk_b, &sk_a, &ct).unwrap_err();
        assert!(err.is_decapsulation_failure());
    }
}

#[test]
fn test_malformed_inputs_rejected() {
    let mut rng = ChaChaRng::seed_from_u64(4);
    let (pk, sk) = Sparrow128::keypair(&mut rng, false).unwrap();

    // a coefficient of 0x3FFFF is not below Q
    let mut bad = pk.to_bytes();
    bad[0] = 0xFF;
    bad[1] = 0xFF;
    bad[2] |= 0x03;
    assert!(SparrowPublicKey::from_bytes(&bad).is_err());

    let mut bad = sk.to_bytes_zeroizing();
    bad[PUBLIC_KEY_BYTES] = 0xFF;
    bad[PUBLIC_KEY_BYTES + 1] = 0xFF;
    bad[PUBLIC_KEY_BYTES + 2] |= 0x03;
    assert!(SparrowSecretKey::from_bytes(&bad).is_err());

    for len in [0usize, 47, 49, 79, 81] {
        let err = SparrowCiphertext::from_bytes(&vec![0u8; len]).unwrap_err();
        assert!(err.is_length_mismatch(), "length {}", len);
    }
}

#[test]
fn test_secrets_zeroize() {
    let mut rng = ChaChaRng::seed_from_u64(77);
    let (pk_a, mut sk_a) = Sparrow128::keypair(&mut rng, false).unwrap();
    let (_, sk_b) = Sparrow128::keypair(&mut rng, true).unwrap();

    let (_, mut ss) = Sparrow128::encapsulate(&mut rng, &pk_a, &sk_b).unwrap();
    assert!(ss.as_ref().iter().any(|&b| b != 0));
    ss.zeroize();
    assert_eq!(ss.as_ref(), &[0u8; SHARED_SECRET_BYTES][..]);

    // the byte buffer is wiped and released
    sk_a.zeroize();
    assert!(sk_a.as_ref().is_empty());
}
