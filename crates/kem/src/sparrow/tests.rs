// kem/src/sparrow/tests.rs

use super::protocol::{decapsulate, encapsulate, keygen};
use super::*;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use sparrow_api::{Kem, Serialize, SerializeSecret};

type Pair = (SparrowPublicKey, SparrowSecretKey);

fn pairs(rng: &mut ChaChaRng) -> (Pair, Pair) {
    let a = Sparrow128::keypair(rng, false).unwrap();
    let b = Sparrow128::keypair(rng, true).unwrap();
    (a, b)
}

#[test]
fn test_sparrow128_keygen() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let result = Sparrow128::keypair(&mut rng, false);
    assert!(result.is_ok());

    let (pk, sk) = result.unwrap();
    assert_eq!(pk.as_ref().len(), 2016);
    assert_eq!(sk.as_ref().len(), 4032);
    // the secret key starts with its own public key
    assert_eq!(&sk.as_ref()[..2016], pk.as_ref());
    assert_eq!(Sparrow128::name(), "Sparrow-128-1");
}

#[test]
fn test_sparrow128_matches_its_parameter_set() {
    assert_eq!(Sparrow128::name(), Sparrow128Params::NAME);
    assert_eq!(PUBLIC_KEY_BYTES, Sparrow128Params::PUBLIC_KEY_BYTES);
    assert_eq!(SECRET_KEY_BYTES, Sparrow128Params::SECRET_KEY_BYTES);
    assert_eq!(CIPHERTEXT_BYTES, Sparrow128Params::CIPHERTEXT_BYTES);
    assert_eq!(SHARED_SECRET_BYTES, Sparrow128Params::SHARED_SECRET_BYTES);
}

#[test]
fn test_sparrow128_encaps_decaps() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let ((pk_a, sk_a), (pk_b, sk_b)) = pairs(&mut rng);

    for _ in 0..20 {
        // B encapsulates towards A
        let (ct, ss1) = Sparrow128::encapsulate(&mut rng, &pk_a, &sk_b).unwrap();
        assert_eq!(ct.as_ref().len(), 48);
        assert_eq!(ss1.as_ref().len(), 32);

        // A decapsulates
        let ss2 = Sparrow128::decapsulate(&mut rng, &pk_b, &sk_a, &ct).unwrap();
        assert_eq!(ss1, ss2);
    }
}

#[test]
fn test_either_side_can_encapsulate() {
    let mut rng = ChaChaRng::seed_from_u64(7);
    let ((pk_a, sk_a), (pk_b, sk_b)) = pairs(&mut rng);

    let (ct, ss1) = Sparrow128::encapsulate(&mut rng, &pk_b, &sk_a).unwrap();
    let ss2 = Sparrow128::decapsulate(&mut rng, &pk_a, &sk_b, &ct).unwrap();
    assert_eq!(ss1, ss2);
}

#[test]
fn test_fresh_secret_per_encapsulation() {
    let mut rng = ChaChaRng::seed_from_u64(8);
    let ((pk_a, _), (_, sk_b)) = pairs(&mut rng);

    let (ct1, ss1) = Sparrow128::encapsulate(&mut rng, &pk_a, &sk_b).unwrap();
    let (ct2, ss2) = Sparrow128::encapsulate(&mut rng, &pk_a, &sk_b).unwrap();
    assert_ne!(ct1, ct2);
    assert_ne!(ss1, ss2);
}

#[test]
fn test_tampered_tag_rejected() {
    let mut rng = ChaChaRng::seed_from_u64(9);
    let ((pk_a, sk_a), (pk_b, sk_b)) = pairs(&mut rng);
    let (ct, _) = Sparrow128::encapsulate(&mut rng, &pk_a, &sk_b).unwrap();

    for pos in [16usize, 30, 47] {
        let mut bytes = ct.to_bytes();
        bytes[pos] ^= 0x01;
        let bad = SparrowCiphertext::from_bytes(&bytes).unwrap();
        let err = Sparrow128::decapsulate(&mut rng, &pk_b, &sk_a, &bad).unwrap_err();
        assert!(err.is_decapsulation_failure(), "position {}", pos);
    }
}

#[test]
fn test_tampered_hints_rejected() {
    let mut rng = ChaChaRng::seed_from_u64(10);
    let ((pk_a, sk_a), (pk_b, sk_b)) = pairs(&mut rng);
    let (ct, _) = Sparrow128::encapsulate(&mut rng, &pk_a, &sk_b).unwrap();

    let mut bytes = ct.to_bytes();
    bytes[3] ^= 0x10;
    let bad = SparrowCiphertext::from_bytes(&bytes).unwrap();
    let err = Sparrow128::decapsulate(&mut rng, &pk_b, &sk_a, &bad).unwrap_err();
    assert!(err.is_decapsulation_failure());
}

#[test]
fn test_wrong_peer_rejected() {
    let mut rng = ChaChaRng::seed_from_u64(11);
    let ((pk_a, sk_a), (_, sk_b)) = pairs(&mut rng);
    let (pk_c, _) = Sparrow128::keypair(&mut rng, true).unwrap();

    let (ct, _) = Sparrow128::encapsulate(&mut rng, &pk_a, &sk_b).unwrap();
    let err = Sparrow128::decapsulate(&mut rng, &pk_c, &sk_a, &ct).unwrap_err();
    assert!(err.is_decapsulation_failure());
}

#[test]
fn test_wrapper_deserialization() {
    let mut rng = ChaChaRng::seed_from_u64(12);
    let ((pk_a, sk_a), _) = pairs(&mut rng);

    let pk = SparrowPublicKey::from_bytes(&pk_a.to_bytes()).unwrap();
    assert_eq!(pk, pk_a);
    let sk = SparrowSecretKey::from_bytes(&sk_a.to_bytes_zeroizing()).unwrap();
    assert_eq!(sk.as_ref(), sk_a.as_ref());

    let err = SparrowPublicKey::from_bytes(&pk_a.to_bytes()[..2000]).unwrap_err();
    assert!(err.is_length_mismatch());
    assert!(SparrowSecretKey::from_bytes(&[0u8; 100]).is_err());
    assert!(SparrowSharedSecret::from_bytes(&[0u8; 31]).is_err());
    assert_eq!(format!("{:?}", sk), "SparrowSecretKey[REDACTED]");
}

#[test]
fn test_full_ciphertext_accepted() {
    let mut rng = ChaChaRng::seed_from_u64(13);
    let ((pk_a, sk_a), (pk_b, sk_b)) = pairs(&mut rng);

    let a = serialize::decode_pk(pk_a.as_ref()).unwrap();
    let b = serialize::decode_sk(sk_b.as_ref()).unwrap();
    let (ct, ss1) = encapsulate(&mut rng, &a, &b).unwrap();

    let full = serialize::encode_ct_full(&ct).unwrap();
    let wrapped = SparrowCiphertext::from_bytes(&full).unwrap();
    assert_eq!(wrapped.as_ref().len(), 48);

    let ss2 = Sparrow128::decapsulate(&mut rng, &pk_b, &sk_a, &wrapped).unwrap();
    assert_eq!(ss2.as_ref(), &ss1[..]);
}

#[test]
fn test_typed_keygen() {
    let mut rng = ChaChaRng::seed_from_u64(14);
    let (pk, sk) = keygen(&mut rng, false).unwrap();

    assert!(pk.rows().iter().all(|t| t.is_canonical()));
    assert_eq!(sk.public_key(), &pk);
    assert!(sk
        .s
        .iter()
        .all(|s| s.coeffs().iter().all(|&c| (0..sparrow_algorithms::poly::params::Q).contains(&c))));

    // the orientation changes the rows
    let mut rng = ChaChaRng::seed_from_u64(14);
    let (pk_t, _) = keygen(&mut rng, true).unwrap();
    assert_ne!(pk_t.rows(), pk.rows());
}

#[test]
fn test_typed_decaps_failure_is_explicit() {
    let mut rng = ChaChaRng::seed_from_u64(15);
    let (pk_a, sk_a) = keygen(&mut rng, false).unwrap();
    let (pk_b, sk_b) = keygen(&mut rng, true).unwrap();

    let (mut ct, _) = encapsulate(&mut rng, &pk_a, &sk_b).unwrap();
    ct.tag[0] ^= 0x80;
    let err = decapsulate(&mut rng, &pk_b, &sk_a, &ct).unwrap_err();
    assert!(err.is_decapsulation_failure());
}

#[test]
fn test_byte_level_functions() {
    let mut rng = ChaChaRng::seed_from_u64(16);
    let mut pk_a = [0u8; PUBLIC_KEY_BYTES];
    let mut sk_a = [0u8; SECRET_KEY_BYTES];
    let mut pk_b = [0u8; PUBLIC_KEY_BYTES];
    let mut sk_b = [0u8; SECRET_KEY_BYTES];
    crypto_keypair(&mut rng, &mut pk_a, &mut sk_a, false).unwrap();
    crypto_keypair(&mut rng, &mut pk_b, &mut sk_b, true).unwrap();

    let mut ss1 = [0u8; SHARED_SECRET_BYTES];
    let mut ct = [0u8; CIPHERTEXT_BYTES];
    crypto_encaps(&mut rng, &mut ss1, &mut ct, &pk_a, &sk_b).unwrap();

    let mut ss2 = [0u8; SHARED_SECRET_BYTES];
    crypto_decaps(&mut rng, &mut ss2, &pk_b, &ct, &sk_a).unwrap();
    assert_eq!(ss1, ss2);

    // a failed check leaves the output alone
    ct[20] ^= 0x04;
    let mut ss3 = [0xAAu8; SHARED_SECRET_BYTES];
    assert!(crypto_decaps(&mut rng, &mut ss3, &pk_b, &ct, &sk_a).is_err());
    assert_eq!(ss3, [0xAAu8; SHARED_SECRET_BYTES]);

    // wrong-size outputs are refused before any work
    let mut short = [0u8; 31];
    assert!(crypto_encaps(&mut rng, &mut short, &mut ct, &pk_a, &sk_b).is_err());
    assert!(crypto_keypair(&mut rng, &mut pk_a[..100], &mut sk_a, false).is_err());
}
