// tests/src/suites/kat/model.rs
//! Data model of the vector file; byte fields are lowercase hex

use serde::{Deserialize, Serialize};

/// Seed length of one vector
pub const SEED_BYTES: usize = 48;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct KatFile {
    pub algorithm: String,
    #[serde(default)]
    pub description: Option<String>,
    pub vectors: Vec<KatVector>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct KatVector {
    pub count: u32,
    #[serde(with = "hex::serde")]
    pub seed: Vec<u8>,
    /// SHAKE256-256 of the encoded public key of A
    #[serde(with = "hex::serde")]
    pub pk_a_digest: Vec<u8>,
    #[serde(with = "hex::serde")]
    pub sk_a_digest: Vec<u8>,
    #[serde(with = "hex::serde")]
    pub pk_b_digest: Vec<u8>,
    #[serde(with = "hex::serde")]
    pub sk_b_digest: Vec<u8>,
    /// 48-byte ciphertext sent by B
    #[serde(with = "hex::serde")]
    pub ct: Vec<u8>,
    #[serde(with = "hex::serde")]
    pub ss: Vec<u8>,
    /// Bytes drawn from the seeded stream over the whole exchange
    pub rng_bytes: u64,
}
