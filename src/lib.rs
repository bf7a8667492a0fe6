//! # sparrow
//!
//! A lattice-based non-interactive key exchange / key encapsulation scheme
//! over the ring Z_q[x]/(x^128 + 1), q = 260609.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! sparrow = "0.3"
//! ```
//!
//! ## Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand_chacha::ChaChaRng;
//! use sparrow::prelude::*;
//!
//! let mut rng = ChaChaRng::seed_from_u64(7);
//!
//! // the two parties use opposite orientations of the public matrix
//! let (pk_a, sk_a) = Sparrow128::keypair(&mut rng, false)?;
//! let (pk_b, sk_b) = Sparrow128::keypair(&mut rng, true)?;
//!
//! let (ct, ss_b) = Sparrow128::encapsulate(&mut rng, &pk_a, &sk_b)?;
//! let ss_a = Sparrow128::decapsulate(&mut rng, &pk_b, &sk_a, &ct)?;
//! assert_eq!(ss_a, ss_b);
//! # Ok::<(), sparrow::api::Error>(())
//! ```
//!
//! ## Features
//!
//! - `kem` (default): the Sparrow KEM
//! - `algorithms`: ring arithmetic, NTT, samplers and SHAKE256
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`sparrow-api`]: Error type and public traits
//! - [`sparrow-params`]: Parameter set constants
//! - [`sparrow-algorithms`]: Ring arithmetic and samplers
//! - [`sparrow-kem`]: Key generation, encapsulation and decapsulation

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use sparrow_api as api;
pub use sparrow_internal as internal;
pub use sparrow_params as params;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use sparrow_algorithms as algorithms;

#[cfg(feature = "kem")]
pub use sparrow_kem as kem;

/// Common imports for sparrow users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{Kem, Serialize, SerializeSecret, SecretBytes};

    #[cfg(feature = "kem")]
    pub use crate::kem::sparrow::{
        Sparrow128, SparrowCiphertext, SparrowPublicKey, SparrowSecretKey, SparrowSharedSecret,
    };
}
