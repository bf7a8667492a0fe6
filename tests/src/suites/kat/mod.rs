// tests/src/suites/kat/mod.rs
//! Known-answer vectors for Sparrow-128-1
//!
//! A vector fixes a 48-byte seed. All randomness of one exchange (keypair A,
//! keypair B, encapsulation by B, decapsulation by A) is read in that order
//! from a single SHAKE256 stream over the seed.

pub mod error;
pub mod loader;
pub mod model;
pub mod rng;
pub mod runner;

pub use error::{KatError, Result};
pub use model::{KatFile, KatVector};
pub use rng::ShakeRng;
