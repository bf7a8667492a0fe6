//! Extendable Output Functions (XOF)
//!
//! The sponge here backs every hash in the scheme: matrix expansion, the
//! reconciliation coin stream, the public-key digest and the 'K'/'t'
//! derivations.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use crate::error::{Error, Result};
#[cfg(feature = "alloc")]
use crate::error::validate;

pub mod shake;

pub use shake::{shake256, Shake256};

/// Trait for extendable output functions
///
/// The life cycle is absorb* -> pad -> squeeze*. Squeezing without an
/// explicit `pad` pads implicitly; absorbing after padding is an error.
pub trait ExtendableOutputFunction {
    /// Creates a new instance of the XOF
    fn new() -> Self;

    /// Absorbs input into the sponge
    fn absorb(&mut self, data: &[u8]) -> Result<()>;

    /// Applies the domain padding and switches to the squeezing phase
    fn pad(&mut self) -> Result<()>;

    /// Squeezes output bytes into the provided buffer
    fn squeeze(&mut self, output: &mut [u8]) -> Result<()>;

    /// Squeezes the specified number of output bytes into a new vector
    #[cfg(feature = "alloc")]
    fn squeeze_into_vec(&mut self, len: usize) -> Result<Vec<u8>>;

    /// Resets the XOF state
    fn reset(&mut self);

    /// Returns the security level in bits
    fn security_level() -> usize;

    /// Convenience method to generate output in a single call
    #[cfg(feature = "alloc")]
    fn generate(data: &[u8], len: usize) -> Result<Vec<u8>>
    where
        Self: Sized,
    {
        validate::parameter(
            len > 0,
            "output_length",
            "XOF output length must be greater than 0"
        )?;

        let mut xof = Self::new();
        xof.absorb(data)?;
        xof.squeeze_into_vec(len)
    }
}

// Error conversion helpers for XOF-specific errors
impl Error {
    /// Create an XOF absorb-after-pad error
    pub(crate) fn xof_padded() -> Self {
        Error::Processing {
            operation: "XOF",
            details: "Cannot absorb after padding",
        }
    }
}
