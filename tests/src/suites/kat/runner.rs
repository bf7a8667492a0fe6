// tests/src/suites/kat/runner.rs
//! Replays a vector through the `Kem` interface

use sparrow_algorithms::xof::shake256;
use sparrow_api::{Kem, Serialize};
use sparrow_kem::sparrow::Sparrow128;

use super::error::{KatError, Result};
use super::model::{KatFile, KatVector};
use super::rng::ShakeRng;

/// Everything one exchange produced, in vector form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub pk_a_digest: Vec<u8>,
    pub sk_a_digest: Vec<u8>,
    pub pk_b_digest: Vec<u8>,
    pub sk_b_digest: Vec<u8>,
    pub ct: Vec<u8>,
    pub ss_sender: Vec<u8>,
    pub ss_receiver: Vec<u8>,
    pub rng_bytes: u64,
}

fn digest(bytes: &[u8]) -> Vec<u8> {
    let mut out = vec![0u8; 32];
    shake256(&mut out, bytes);
    out
}

/// Runs keypair A, keypair B, encapsulation by B and decapsulation by A
pub fn run_exchange(seed: &[u8]) -> Result<Outcome> {
    let mut rng = ShakeRng::new(seed);

    let (pk_a, sk_a) = Sparrow128::keypair(&mut rng, false)?;
    let (pk_b, sk_b) = Sparrow128::keypair(&mut rng, true)?;
    let (ct, ss_sender) = Sparrow128::encapsulate(&mut rng, &pk_a, &sk_b)?;
    let ss_receiver = Sparrow128::decapsulate(&mut rng, &pk_b, &sk_a, &ct)?;

    Ok(Outcome {
        pk_a_digest: digest(pk_a.as_ref()),
        sk_a_digest: digest(sk_a.as_ref()),
        pk_b_digest: digest(pk_b.as_ref()),
        sk_b_digest: digest(sk_b.as_ref()),
        ct: ct.to_bytes(),
        ss_sender: ss_sender.as_ref().to_vec(),
        ss_receiver: ss_receiver.as_ref().to_vec(),
        rng_bytes: rng.bytes_drawn(),
    })
}

fn expect_eq(count: u32, field: &'static str, expected: &[u8], actual: &[u8]) -> Result<()> {
    if expected != actual {
        return Err(KatError::Mismatch {
            count,
            field,
            expected: hex::encode(expected),
            actual: hex::encode(actual),
        });
    }
    Ok(())
}

/// Checks one vector
pub fn check_vector(v: &KatVector) -> Result<()> {
    let got = run_exchange(&v.seed)?;

    expect_eq(v.count, "pk_a_digest", &v.pk_a_digest, &got.pk_a_digest)?;
    expect_eq(v.count, "sk_a_digest", &v.sk_a_digest, &got.sk_a_digest)?;
    expect_eq(v.count, "pk_b_digest", &v.pk_b_digest, &got.pk_b_digest)?;
    expect_eq(v.count, "sk_b_digest", &v.sk_b_digest, &got.sk_b_digest)?;
    expect_eq(v.count, "ct", &v.ct, &got.ct)?;
    expect_eq(v.count, "ss (sender)", &v.ss, &got.ss_sender)?;
    expect_eq(v.count, "ss (receiver)", &v.ss, &got.ss_receiver)?;

    if v.rng_bytes != got.rng_bytes {
        return Err(KatError::Mismatch {
            count: v.count,
            field: "rng_bytes",
            expected: v.rng_bytes.to_string(),
            actual: got.rng_bytes.to_string(),
        });
    }
    Ok(())
}

/// Checks every vector, returning how many passed
pub fn check_file(file: &KatFile) -> Result<usize> {
    for v in &file.vectors {
        check_vector(v)?;
    }
    Ok(file.vectors.len())
}
