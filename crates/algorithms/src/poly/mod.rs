//! Polynomial engine for Z_Q[x]/(x^N + 1)
//!
//! Montgomery arithmetic, the negacyclic NTT, the representation-tagged
//! ring element types, and the samplers that produce them.

pub mod gaussian;
pub mod mont;
pub mod ntt;
pub mod params;
pub mod polynomial;
pub mod sampling;
pub mod serialize;

/// Prelude for easy importing of common polynomial types and functions.
pub mod prelude {
    pub use super::gaussian::{sample_large, sample_small, GaussianTier};
    pub use super::mont::{addq, cadd, csub, mulq, mulqa, redc};
    pub use super::ntt::{forward_transform, inverse_transform};
    pub use super::params::{N, Q};
    pub use super::polynomial::{MontPoly, NttPoly, NttProduct, Poly};
    pub use super::sampling::{expand_a, sample_uniform};
    pub use super::serialize::{decode_bits, encode_bits, packed_len};
}
