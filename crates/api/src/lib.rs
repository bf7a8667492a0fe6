//! Public API traits and types for the sparrow library
//!
//! This crate provides the public API surface for the sparrow workspace, including
//! trait definitions, error types, and common types used throughout the library.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod traits;
pub mod error;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use types::*;

// Re-export all traits from the traits module
pub use traits::{Kem, Serialize, SerializeSecret};

// Re-export trait modules for direct access
pub use traits::{kem, serialize};
