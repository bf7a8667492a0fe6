// kem/src/sparrow/protocol.rs

//! Sparrow key generation, encapsulation and decapsulation.
//!
//! Both parties hold static keypairs made with opposite orientations of the
//! implicit public matrix A. Each side multiplies its own secret against the
//! peer's public rows, which lands both on (nearly) the same ring element;
//! reconciliation turns that into identical key bits, and a hash over both
//! public-key hashes, the hints and those bits yields the shared secret and
//! its confirmation tag.

use core::array;
use core::fmt;

use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use sparrow_algorithms::poly::gaussian::{sample_large, sample_small};
use sparrow_algorithms::poly::params::N;
use sparrow_algorithms::poly::polynomial::{NttPoly, NttProduct, Poly};
use sparrow_algorithms::poly::sampling::expand_a;
use sparrow_algorithms::xof::{shake256, ExtendableOutputFunction, Shake256};
use sparrow_internal::constant_time::ct_eq_choice;

use super::params::{
    Sparrow128Params, SparrowParameters, SPARROW_CRH, SPARROW_CTBITS, SPARROW_ELL,
    SPARROW_HINT_BYTES, SPARROW_K, SPARROW_PUBLIC_KEY_BYTES, SPARROW_SS_BYTES, SPARROW_TR_BYTES,
};
use super::rec::{help_recvec, rec_vec};
use super::serialize::{pack_hints, pack_rows};
use crate::error::{validate, Result};

/// Domain-separation byte of the shared-secret hash
pub const KEY_DOMAIN: u8 = b'K';

/// Domain-separation byte of the confirmation-tag hash
pub const TAG_DOMAIN: u8 = b't';

/// `tr_first || tr_second || hints || K_tmp`
const BODY_LEN: usize = 2 * SPARROW_TR_BYTES + SPARROW_HINT_BYTES + SPARROW_SS_BYTES;

const ALGORITHM: &str = Sparrow128Params::NAME;

/// Shared secret as returned by the core operations
pub type SharedSecretBytes = Zeroizing<[u8; SPARROW_SS_BYTES]>;

/// Public key: K noisy rows and the hash of their serialization
#[derive(Clone, PartialEq, Eq, Zeroize)]
pub struct PublicKey {
    pub(crate) t: [Poly; SPARROW_K],
    pub(crate) tr: [u8; SPARROW_TR_BYTES],
}

/// Secret key: the owner's public key and the NTT-domain secret vector
///
/// The secret values are kept reduced into [0, Q) so that the key
/// serializes without a further conversion.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey {
    pub(crate) pk: PublicKey,
    pub(crate) s: [NttPoly; SPARROW_ELL],
}

/// Ciphertext: one reconciliation hint bit per coordinate and the tag
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ciphertext {
    pub(crate) hints: [u8; SPARROW_CTBITS],
    pub(crate) tag: [u8; SPARROW_CRH],
}

impl PublicKey {
    /// Builds a public key from its rows, hashing their serialization into `tr`
    pub(crate) fn from_rows(t: [Poly; SPARROW_K]) -> Result<Self> {
        let mut bytes = [0u8; SPARROW_PUBLIC_KEY_BYTES];
        pack_rows(&mut bytes, &t)?;
        let mut tr = [0u8; SPARROW_TR_BYTES];
        shake256(&mut tr, &bytes);
        Ok(Self { t, tr })
    }

    /// The public rows `t`
    pub fn rows(&self) -> &[Poly; SPARROW_K] {
        &self.t
    }

    /// Hash of the serialized rows
    pub fn hash(&self) -> &[u8; SPARROW_TR_BYTES] {
        &self.tr
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublicKey")
            .field("tr", &self.tr)
            .finish_non_exhaustive()
    }
}

impl SecretKey {
    /// The public half carried by this key
    pub fn public_key(&self) -> &PublicKey {
        &self.pk
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKey")
            .field("pk", &self.pk)
            .field("s", &"[REDACTED]")
            .finish()
    }
}

impl Ciphertext {
    /// Reconciliation hints, each 0 or 1
    pub fn hints(&self) -> &[u8; SPARROW_CTBITS] {
        &self.hints
    }

    /// Confirmation tag
    pub fn tag(&self) -> &[u8; SPARROW_CRH] {
        &self.tag
    }
}

/// Generates a keypair.
///
/// With `transpose` set, row i of the public key is built from column i of
/// A instead of row i; the two parties of an exchange must differ here.
pub(crate) fn keygen<R: RngCore + CryptoRng>(
    rng: &mut R,
    transpose: bool,
) -> Result<(PublicKey, SecretKey)> {
    let mut noise = Zeroizing::new([0i64; N]);

    // 1. s <- small Gaussian, held reduced in the NTT domain
    let s: [NttPoly; SPARROW_ELL] = array::from_fn(|_| {
        sample_small(rng, &mut noise[..]);
        Poly::from_coeffs(*noise).forward().canonical()
    });

    // 2. t_i = sum_j A_ij * s_j + e_i
    let mut t: [Poly; SPARROW_K] = array::from_fn(|_| Poly::zero());
    for (i, ti) in t.iter_mut().enumerate() {
        let mut acc = NttProduct::zero();
        for (j, sj) in s.iter().enumerate() {
            let a = if transpose { expand_a(j, i) } else { expand_a(i, j) };
            acc.mul_acc(sj, &a);
        }
        *ti = acc.inverse();

        sample_small(rng, &mut noise[..]);
        ti.add_noise(&noise[..]);
    }

    // 3. tr = H(pk); the secret key carries its own public half
    let pk = PublicKey::from_rows(t)?;
    let sk = SecretKey { pk: pk.clone(), s };

    Ok((pk, sk))
}

/// `sum_i s_i * t_i` in canonical coefficient form
fn shared_point(s: &[NttPoly; SPARROW_ELL], t: &[Poly; SPARROW_K]) -> Poly {
    let mut acc = NttProduct::zero();
    for (si, ti) in s.iter().zip(t.iter()) {
        acc.mul_acc(si, &ti.forward());
    }
    acc.inverse()
}

fn confirmation_body(
    tr_first: &[u8; SPARROW_TR_BYTES],
    tr_second: &[u8; SPARROW_TR_BYTES],
    hints: &[u8; SPARROW_CTBITS],
    k_tmp: &[u8; SPARROW_SS_BYTES],
) -> Result<Zeroizing<[u8; BODY_LEN]>> {
    let mut body = Zeroizing::new([0u8; BODY_LEN]);
    let (trs, rest) = body.split_at_mut(2 * SPARROW_TR_BYTES);
    let (h, k) = rest.split_at_mut(SPARROW_HINT_BYTES);

    trs[..SPARROW_TR_BYTES].copy_from_slice(tr_first);
    trs[SPARROW_TR_BYTES..].copy_from_slice(tr_second);
    h.copy_from_slice(&pack_hints(hints)?);
    k.copy_from_slice(k_tmp);

    Ok(body)
}

/// SHAKE256(prefix || body), truncated to 32 bytes
fn derive(prefix: u8, body: &[u8]) -> Result<[u8; SPARROW_SS_BYTES]> {
    let mut xof = Shake256::new();
    xof.absorb(&[prefix])?;
    xof.absorb(body)?;
    let mut out = [0u8; SPARROW_SS_BYTES];
    xof.squeeze(&mut out)?;
    Ok(out)
}

/// Encapsulates towards `pk_a` with the caller's own `sk_b`.
pub(crate) fn encapsulate<R: RngCore + CryptoRng>(
    rng: &mut R,
    pk_a: &PublicKey,
    sk_b: &SecretKey,
) -> Result<(Ciphertext, SharedSecretBytes)> {
    // 1. v = s_B^T t_A + y, y <- large Gaussian on the reconciled prefix
    let mut v = shared_point(&sk_b.s, &pk_a.t);
    let mut y = Zeroizing::new([0i64; SPARROW_CTBITS]);
    sample_large(rng, &mut y[..]);
    v.add_noise(&y[..]);

    // 2. hints and the raw key bits
    let mut hints = [0u8; SPARROW_CTBITS];
    help_recvec(rng, &v, &mut hints);
    let mut k_tmp = Zeroizing::new([0u8; SPARROW_SS_BYTES]);
    rec_vec(&mut k_tmp, &v, &hints);

    // 3. K = H('K' || ...), tag = H('t' || ...), peer's key hash first
    let body = confirmation_body(&pk_a.tr, &sk_b.pk.tr, &hints, &k_tmp)?;
    let tag = derive(TAG_DOMAIN, &body[..])?;
    let key = Zeroizing::new(derive(KEY_DOMAIN, &body[..])?);

    Ok((Ciphertext { hints, tag }, key))
}

/// Decapsulates a ciphertext sent by the owner of `pk_b`.
///
/// The tag is compared in constant time; on mismatch no key is derived.
pub(crate) fn decapsulate<R: RngCore + CryptoRng>(
    rng: &mut R,
    pk_b: &PublicKey,
    sk_a: &SecretKey,
    ct: &Ciphertext,
) -> Result<SharedSecretBytes> {
    // 1. v = s_A^T t_B + y, y <- small Gaussian on the reconciled prefix
    let mut v = shared_point(&sk_a.s, &pk_b.t);
    let mut y = Zeroizing::new([0i64; SPARROW_CTBITS]);
    sample_small(rng, &mut y[..]);
    v.add_noise(&y[..]);

    // 2. key bits under the received hints
    let mut k_tmp = Zeroizing::new([0u8; SPARROW_SS_BYTES]);
    rec_vec(&mut k_tmp, &v, &ct.hints);

    // 3. recompute and check the tag; own key hash first, matching encaps
    let body = confirmation_body(&sk_a.pk.tr, &pk_b.tr, &ct.hints, &k_tmp)?;
    let mut tag = derive(TAG_DOMAIN, &body[..])?;
    let tag_ok = bool::from(ct_eq_choice(&tag[..], &ct.tag[..]));
    tag.zeroize();
    validate::decapsulation(tag_ok, ALGORITHM, "confirmation tag mismatch")?;

    Ok(Zeroizing::new(derive(KEY_DOMAIN, &body[..])?))
}
