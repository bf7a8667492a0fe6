//! Core types with security guarantees for the sparrow library
//!
//! This module provides fundamental type definitions that enforce
//! compile-time and runtime guarantees for cryptographic operations.

use alloc::vec::Vec;
use core::fmt;
use core::ops::{Deref, DerefMut};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};
use crate::error::validate;
use crate::{Result, SerializeSecret};
use sparrow_internal::constant_time::ct_eq;

/// A fixed-size array of bytes that is securely zeroed when dropped
///
/// This type provides:
/// - Compile-time size guarantees via const generics
/// - Secure zeroing when dropped
/// - Constant-time equality comparison
/// - Debug implementation that hides the actual bytes
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretBytes<const N: usize> {
    data: [u8; N],
}

impl<const N: usize> SecretBytes<N> {
    /// Create a new instance from an existing array
    pub fn new(data: [u8; N]) -> Self {
        Self { data }
    }

    /// Create from a slice, if it has the correct length
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        validate::length("SecretBytes::from_slice", slice.len(), N)?;

        let mut data = [0u8; N];
        data.copy_from_slice(slice);

        Ok(Self { data })
    }

    /// Create an instance filled with zeros
    pub fn zeroed() -> Self {
        Self { data: [0u8; N] }
    }

    /// Generate a random instance
    pub fn random<R: rand::RngCore + rand::CryptoRng>(rng: &mut R) -> Self {
        let mut data = [0u8; N];
        rng.fill_bytes(&mut data);
        Self { data }
    }

    /// Get the length of the contained data
    pub fn len(&self) -> usize {
        N
    }

    /// Check if the container is empty
    pub fn is_empty(&self) -> bool {
        N == 0
    }
}

impl<const N: usize> AsRef<[u8]> for SecretBytes<N> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl<const N: usize> AsMut<[u8]> for SecretBytes<N> {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

impl<const N: usize> Deref for SecretBytes<N> {
    type Target = [u8; N];

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<const N: usize> DerefMut for SecretBytes<N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

impl<const N: usize> PartialEq for SecretBytes<N> {
    fn eq(&self, other: &Self) -> bool {
        ct_eq(self.data, other.data)
    }
}

impl<const N: usize> Eq for SecretBytes<N> {}

impl<const N: usize> fmt::Debug for SecretBytes<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretBytes<{}>[REDACTED]", N)
    }
}

impl<const N: usize> SerializeSecret for SecretBytes<N> {
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_slice(bytes)
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.data.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use rand::SeedableRng;
    use rand_chacha::ChaChaRng;

    #[test]
    fn test_from_slice_rejects_wrong_length() {
        let err = SecretBytes::<32>::from_slice(&[0u8; 31]).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidLength {
                context: "SecretBytes::from_slice",
                expected: 32,
                actual: 31,
            }
        );
    }

    #[test]
    fn test_equality_and_redacted_debug() {
        let mut rng = ChaChaRng::seed_from_u64(42);
        let a = SecretBytes::<32>::random(&mut rng);
        let b = SecretBytes::<32>::from_slice(a.as_ref()).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, SecretBytes::<32>::zeroed());
        assert_eq!(format!("{:?}", a), "SecretBytes<32>[REDACTED]");
    }

    #[test]
    fn test_zeroizing_serialization() {
        let secret = SecretBytes::new([7u8; 16]);
        let bytes = secret.to_bytes_zeroizing();
        assert_eq!(&bytes[..], &[7u8; 16]);
    }
}
