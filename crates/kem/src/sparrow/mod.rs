// kem/src/sparrow/mod.rs

//! Sparrow Key Encapsulation Mechanism (KEM).
//!
//! Sparrow is a lattice-based non-interactive key exchange over the ring
//! Z_q[x]/(x^128 + 1), q = 260609. Both parties hold static keypairs; the
//! encapsulating party sends 128 reconciliation hint bits and a
//! confirmation tag, and both end up with the same 32-byte secret.

// Modules defining the Sparrow KEM logic and parameters.
mod params;
pub mod rec;        // Reconciliation of noisy coordinates into key bits
mod protocol;       // KeyGen / Encaps / Decaps over typed ring elements
pub mod serialize;  // Byte layouts of keys and ciphertexts
mod kem;            // Wrapper types and the api::Kem implementation

// Re-export the KEM and its byte-level types.
pub use self::kem::{
    crypto_decaps, crypto_encaps, crypto_keypair, Sparrow128, SparrowCiphertext, SparrowPublicKey,
    SparrowSecretKey, SparrowSharedSecret, CIPHERTEXT_BYTES, PUBLIC_KEY_BYTES,
    SECRET_KEY_BYTES, SHARED_SECRET_BYTES,
};

// Typed keys for callers that work below the byte level.
pub use self::params::{Sparrow128Params, SparrowParameters};
pub use self::protocol::{Ciphertext, PublicKey, SecretKey, KEY_DOMAIN, TAG_DOMAIN};

#[cfg(test)]
mod tests;
