//! Trait definitions for the sparrow public API

pub mod kem;
pub mod serialize;

pub use kem::Kem;
pub use serialize::{Serialize, SerializeSecret};
