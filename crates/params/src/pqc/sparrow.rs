//! Constants for the Sparrow key encapsulation mechanism

/// Sparrow polynomial degree
pub const SPARROW_N: usize = 128;

/// Sparrow modulus
pub const SPARROW_Q: i64 = 260609;

/// Bits per serialized coefficient, ceil(log2 Q)
pub const SPARROW_Q_BITS: usize = 18;

/// Mask of the minimal bit-width enclosing Q
pub const SPARROW_QMSK: u64 = (1 << SPARROW_Q_BITS) - 1;

/// Bytes squeezed per uniform candidate, ceil(Q_BITS / 8)
pub const SPARROW_Q_BYTES: usize = (SPARROW_Q_BITS + 7) / 8;

/// Number of public rows
pub const SPARROW_K: usize = 7;

/// Number of secret ring elements
pub const SPARROW_ELL: usize = 7;

/// Key bits agreed per reconciled coordinate
pub const SPARROW_B: usize = 2;

/// Number of reconciled coordinates carried by a ciphertext
pub const SPARROW_CTBITS: usize = 128;

/// Hash output size of the confirmation tag and public-key hash
pub const SPARROW_CRH: usize = 32;

/// Size of the cached public-key hash
pub const SPARROW_TR_SZ: usize = 32;

/// Size of the shared secret
pub const SPARROW_K_SZ: usize = 32;

/// Size of the random seed drawn for the reconciliation hints
pub const SPARROW_SEC: usize = 16;

/// Bytes of packed reconciliation hints (one bit each)
pub const SPARROW_HINT_BYTES: usize = SPARROW_CTBITS / 8;

/// Bytes of a packed ring element
pub const SPARROW_POLY_BYTES: usize = SPARROW_N * SPARROW_Q_BITS / 8;

/// Size of a serialized public key
pub const SPARROW_PUBLIC_KEY_BYTES: usize = SPARROW_K * SPARROW_POLY_BYTES;

/// Size of a serialized secret key
pub const SPARROW_SECRET_KEY_BYTES: usize =
    SPARROW_PUBLIC_KEY_BYTES + SPARROW_ELL * SPARROW_POLY_BYTES;

/// Size of the logical ciphertext: hints plus one tag
pub const SPARROW_CIPHERTEXT_BYTES: usize = SPARROW_HINT_BYTES + SPARROW_CRH;

/// Size of the full encoding that repeats the tag
pub const SPARROW_CIPHERTEXT_FULL_BYTES: usize = SPARROW_CIPHERTEXT_BYTES + SPARROW_CRH;

/// Standard deviation of the small Gaussian tier (secrets and key noise)
pub const SPARROW_SIGMA_SMALL: u32 = 4;

/// Standard deviation of the large Gaussian tier (encapsulation noise)
pub const SPARROW_SIGMA_LARGE: u32 = 512;

/// Structure containing a Sparrow parameter set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SparrowParams {
    /// Polynomial degree
    pub n: usize,

    /// Modulus
    pub q: i64,

    /// Number of public rows
    pub k: usize,

    /// Number of secret ring elements
    pub ell: usize,

    /// Key bits per reconciled coordinate
    pub b: usize,

    /// Reconciled coordinates per ciphertext
    pub ctbits: usize,

    /// Standard deviation of the small Gaussian tier
    pub sigma_small: u32,

    /// Standard deviation of the large Gaussian tier
    pub sigma_large: u32,

    /// Size of public key in bytes
    pub public_key_size: usize,

    /// Size of secret key in bytes
    pub secret_key_size: usize,

    /// Size of ciphertext in bytes
    pub ciphertext_size: usize,

    /// Size of shared secret in bytes
    pub shared_secret_size: usize,
}

/// Sparrow-128-1 parameters
pub const SPARROW_128_1: SparrowParams = SparrowParams {
    n: SPARROW_N,
    q: SPARROW_Q,
    k: SPARROW_K,
    ell: SPARROW_ELL,
    b: SPARROW_B,
    ctbits: SPARROW_CTBITS,
    sigma_small: SPARROW_SIGMA_SMALL,
    sigma_large: SPARROW_SIGMA_LARGE,
    public_key_size: SPARROW_PUBLIC_KEY_BYTES,
    secret_key_size: SPARROW_SECRET_KEY_BYTES,
    ciphertext_size: SPARROW_CIPHERTEXT_BYTES,
    shared_secret_size: SPARROW_K_SZ,
};

const _: () = assert!(SPARROW_PUBLIC_KEY_BYTES == 2016);
const _: () = assert!(SPARROW_SECRET_KEY_BYTES == 4032);
const _: () = assert!(SPARROW_CIPHERTEXT_BYTES == 48);
const _: () = assert!(SPARROW_CTBITS * SPARROW_B / 8 == SPARROW_K_SZ);
const _: () = assert!(SPARROW_CTBITS <= SPARROW_N);
