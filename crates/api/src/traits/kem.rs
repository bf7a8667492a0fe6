// File: crates/api/src/traits/kem.rs

//! Trait definition for authenticated Key Encapsulation Mechanisms
//!
//! Unlike a classic KEM, both directions take the caller's own long-term secret
//! key as well as the peer's public key. The shared secret is bound to both
//! parties' public keys, so the same pair of keypairs always agrees on one key
//! per ciphertext regardless of which side encapsulated.

use super::serialize::{Serialize, SerializeSecret};
use crate::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Trait for an authenticated Key Encapsulation Mechanism.
///
/// # Security Design
///
/// This trait enforces strong type safety and clear contracts for serialization,
/// preventing common security vulnerabilities.
pub trait Kem {
    /// Public key type with appropriate constraints.
    ///
    /// # Security Note
    /// Implements `Serialize` to guarantee safe `from_bytes` and `to_bytes` methods.
    type PublicKey: Clone + Serialize;

    /// Secret key type with security guarantees.
    ///
    /// # Security Note
    /// - Implements `Zeroize` for secure memory cleanup.
    /// - Implements `SerializeSecret` to guarantee safe `from_bytes` and `to_bytes_zeroizing` methods.
    type SecretKey: Zeroize + Clone + SerializeSecret;

    /// Shared secret type with security guarantees.
    ///
    /// # Security Note
    /// - Implements `Zeroize` for secure memory cleanup.
    /// - Implements `SerializeSecret` for secure serialization.
    /// - Should be converted to application keys immediately after generation.
    type SharedSecret: Zeroize + Clone + SerializeSecret;

    /// Ciphertext type for the encapsulated key.
    type Ciphertext: Clone + Serialize;

    /// Keypair type for efficient storage of related keys.
    type KeyPair: Clone;

    /// Returns the KEM algorithm name.
    fn name() -> &'static str;

    /// Generate a new keypair.
    ///
    /// The two parties of an exchange must use opposite orientations of the
    /// shared public matrix: one calls this with `transpose = false`, the
    /// other with `transpose = true`.
    fn keypair<R: CryptoRng + RngCore>(rng: &mut R, transpose: bool) -> Result<Self::KeyPair>;

    /// Extract public key from keypair.
    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey;

    /// Extract secret key from keypair.
    ///
    /// # Security Note
    /// The returned secret key should be protected and zeroized after use.
    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey;

    /// Encapsulate a shared secret towards `peer_public_key`, authenticated
    /// with the caller's own secret key.
    fn encapsulate<R: CryptoRng + RngCore>(
        rng: &mut R,
        peer_public_key: &Self::PublicKey,
        own_secret_key: &Self::SecretKey,
    ) -> Result<(Self::Ciphertext, Self::SharedSecret)>;

    /// Recover the shared secret from `ciphertext`.
    ///
    /// # Security Requirements
    /// - The confirmation tag must be compared in constant time.
    /// - A failed comparison returns an error and never a key.
    fn decapsulate<R: CryptoRng + RngCore>(
        rng: &mut R,
        peer_public_key: &Self::PublicKey,
        own_secret_key: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
    ) -> Result<Self::SharedSecret>;
}
