//! Key Encapsulation Mechanisms (KEM) and Key Exchange
//!
//! This crate implements the Sparrow lattice-based key encapsulation
//! mechanism: reconciliation, key generation, encapsulation and
//! decapsulation, and the byte encodings of its keys and ciphertexts.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod error;
pub mod sparrow;

// Re-exports
pub use error::{Error, Result};
pub use sparrow::{
    Sparrow128, SparrowCiphertext, SparrowPublicKey, SparrowSecretKey, SparrowSharedSecret,
};
