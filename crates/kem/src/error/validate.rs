//! Validation utilities for KEM operations

use super::{Error, Result};

/// Validate decapsulation parameters
pub fn decapsulation(condition: bool, algorithm: &'static str, details: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::Decapsulation { algorithm, details });
    }
    Ok(())
}

/// Validate key format
pub fn key(condition: bool, key_type: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidKey { key_type, reason });
    }
    Ok(())
}

/// Validate ciphertext format
pub fn ciphertext(condition: bool, algorithm: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidCiphertext { algorithm, reason });
    }
    Ok(())
}

// Re-export the primitive length check
pub use sparrow_algorithms::error::validate::length;
