// kem/src/sparrow/params.rs

//! Sparrow parameter definitions.

use sparrow_params::pqc::sparrow as global_params;

/// Number of public rows.
pub const SPARROW_K: usize = global_params::SPARROW_K;
/// Number of secret ring elements.
pub const SPARROW_ELL: usize = global_params::SPARROW_ELL;
/// Key bits agreed per reconciled coordinate.
pub const SPARROW_B: usize = global_params::SPARROW_B;
/// Reconciled coordinates per ciphertext.
pub const SPARROW_CTBITS: usize = global_params::SPARROW_CTBITS;
/// Size of the confirmation tag.
pub const SPARROW_CRH: usize = global_params::SPARROW_CRH;
/// Size of the cached public-key hash.
pub const SPARROW_TR_BYTES: usize = global_params::SPARROW_TR_SZ;
/// Size of the shared secret.
pub const SPARROW_SS_BYTES: usize = global_params::SPARROW_K_SZ;
/// Size of the random seed behind the reconciliation hints.
pub const SPARROW_SEC: usize = global_params::SPARROW_SEC;
/// Bytes of packed hint bits.
pub const SPARROW_HINT_BYTES: usize = global_params::SPARROW_HINT_BYTES;
/// Bytes of one packed ring element.
pub const SPARROW_POLY_BYTES: usize = global_params::SPARROW_POLY_BYTES;
/// Size of a serialized public key.
pub const SPARROW_PUBLIC_KEY_BYTES: usize = global_params::SPARROW_PUBLIC_KEY_BYTES;
/// Size of a serialized secret key.
pub const SPARROW_SECRET_KEY_BYTES: usize = global_params::SPARROW_SECRET_KEY_BYTES;
/// Size of the logical ciphertext: hints and one tag.
pub const SPARROW_CIPHERTEXT_BYTES: usize = global_params::SPARROW_CIPHERTEXT_BYTES;
/// Size of the full ciphertext encoding with its repeated tag.
pub const SPARROW_CIPHERTEXT_FULL_BYTES: usize = global_params::SPARROW_CIPHERTEXT_FULL_BYTES;

/// Trait defining parameters for a specific Sparrow variant.
///
/// The ring and the vector dimensions are tied to precomputed tables, so an
/// implementation only names a set whose constants match this module.
pub trait SparrowParameters: Send + Sync + 'static {
    /// Number of public rows.
    const K: usize;
    /// Number of secret ring elements.
    const ELL: usize;

    /// Algorithm name string.
    const NAME: &'static str;
    /// Size of the public key in bytes.
    const PUBLIC_KEY_BYTES: usize;
    /// Size of the secret key in bytes.
    const SECRET_KEY_BYTES: usize;
    /// Size of the ciphertext in bytes.
    const CIPHERTEXT_BYTES: usize;
    /// Size of the shared secret in bytes.
    const SHARED_SECRET_BYTES: usize;
}

/// The Sparrow-128-1 parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sparrow128Params;

impl SparrowParameters for Sparrow128Params {
    const K: usize = global_params::SPARROW_128_1.k;
    const ELL: usize = global_params::SPARROW_128_1.ell;
    const NAME: &'static str = "Sparrow-128-1";
    const PUBLIC_KEY_BYTES: usize = global_params::SPARROW_128_1.public_key_size;
    const SECRET_KEY_BYTES: usize = global_params::SPARROW_128_1.secret_key_size;
    const CIPHERTEXT_BYTES: usize = global_params::SPARROW_128_1.ciphertext_size;
    const SHARED_SECRET_BYTES: usize = global_params::SPARROW_128_1.shared_secret_size;
}

const _: () = assert!(Sparrow128Params::K == SPARROW_K);
const _: () = assert!(Sparrow128Params::ELL == SPARROW_ELL);
const _: () = assert!(SPARROW_CTBITS * SPARROW_B / 8 == SPARROW_SS_BYTES);
