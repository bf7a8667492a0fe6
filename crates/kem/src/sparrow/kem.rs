// kem/src/sparrow/kem.rs

//! Sparrow KEM wrapper types and the `sparrow_api::Kem` implementation.

use alloc::vec::Vec;
use core::fmt;

use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use sparrow_api::error::Result as ApiResult;
use sparrow_api::{Kem, SecretBytes, Serialize, SerializeSecret};

use super::params::{
    Sparrow128Params, SparrowParameters, SPARROW_CIPHERTEXT_BYTES, SPARROW_PUBLIC_KEY_BYTES,
    SPARROW_SECRET_KEY_BYTES, SPARROW_SS_BYTES,
};
use super::protocol;
use super::serialize::{decode_ct, decode_pk, decode_sk, encode_ct, encode_pk, encode_sk};
use crate::error::{validate, Result};

/// Size of a serialized public key in bytes
pub const PUBLIC_KEY_BYTES: usize = SPARROW_PUBLIC_KEY_BYTES;
/// Size of a serialized secret key in bytes
pub const SECRET_KEY_BYTES: usize = SPARROW_SECRET_KEY_BYTES;
/// Size of a ciphertext in bytes
pub const CIPHERTEXT_BYTES: usize = SPARROW_CIPHERTEXT_BYTES;
/// Size of the shared secret in bytes
pub const SHARED_SECRET_BYTES: usize = SPARROW_SS_BYTES;

/// Serialized Sparrow public key
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SparrowPublicKey(Vec<u8>);

/// Serialized Sparrow secret key, zeroized on drop
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SparrowSecretKey(Vec<u8>);

/// Serialized Sparrow ciphertext (hints and tag)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SparrowCiphertext(Vec<u8>);

/// Sparrow shared secret
#[derive(Clone, Debug, PartialEq, Eq, Zeroize)]
pub struct SparrowSharedSecret(SecretBytes<SPARROW_SS_BYTES>);

impl AsRef<[u8]> for SparrowPublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for SparrowSecretKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for SparrowCiphertext {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for SparrowSharedSecret {
    fn as_ref(&self) -> &[u8] {
        self.0.as_ref()
    }
}

impl fmt::Debug for SparrowSecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SparrowSecretKey[REDACTED]")
    }
}

impl Serialize for SparrowPublicKey {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        decode_pk(bytes)?;
        Ok(Self(bytes.to_vec()))
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.0.clone()
    }
}

impl SerializeSecret for SparrowSecretKey {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        decode_sk(bytes)?;
        Ok(Self(bytes.to_vec()))
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.0.clone())
    }
}

impl Serialize for SparrowCiphertext {
    /// Accepts the 48-byte encoding, or the 80-byte one with a repeated tag
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        let ct = decode_ct(bytes)?;
        Ok(Self(encode_ct(&ct)?))
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.0.clone()
    }
}

impl SerializeSecret for SparrowSharedSecret {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        Ok(Self(SecretBytes::from_slice(bytes)?))
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.0.as_ref().to_vec())
    }
}

impl SparrowSharedSecret {
    fn new(bytes: &[u8; SPARROW_SS_BYTES]) -> Self {
        Self(SecretBytes::new(*bytes))
    }
}

/// Sparrow-128-1 KEM, implementing `sparrow_api::Kem`.
#[derive(Debug, Clone, Copy)]
pub struct Sparrow128;

impl Kem for Sparrow128 {
    type PublicKey = SparrowPublicKey;
    type SecretKey = SparrowSecretKey;
    type SharedSecret = SparrowSharedSecret;
    type Ciphertext = SparrowCiphertext;
    type KeyPair = (SparrowPublicKey, SparrowSecretKey);

    fn name() -> &'static str {
        Sparrow128Params::NAME
    }

    fn keypair<R: CryptoRng + RngCore>(rng: &mut R, transpose: bool) -> ApiResult<Self::KeyPair> {
        let (pk, sk) = protocol::keygen(rng, transpose)?;
        let pk_bytes = encode_pk(&pk)?;
        let mut sk_bytes = encode_sk(&sk)?;
        Ok((SparrowPublicKey(pk_bytes), SparrowSecretKey(core::mem::take(&mut *sk_bytes))))
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.0.clone()
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.1.clone()
    }

    fn encapsulate<R: CryptoRng + RngCore>(
        rng: &mut R,
        peer_public_key: &Self::PublicKey,
        own_secret_key: &Self::SecretKey,
    ) -> ApiResult<(Self::Ciphertext, Self::SharedSecret)> {
        let pk = decode_pk(&peer_public_key.0)?;
        let sk = decode_sk(&own_secret_key.0)?;
        let (ct, ss) = protocol::encapsulate(rng, &pk, &sk)?;
        Ok((SparrowCiphertext(encode_ct(&ct)?), SparrowSharedSecret::new(&ss)))
    }

    fn decapsulate<R: CryptoRng + RngCore>(
        rng: &mut R,
        peer_public_key: &Self::PublicKey,
        own_secret_key: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
    ) -> ApiResult<Self::SharedSecret> {
        let pk = decode_pk(&peer_public_key.0)?;
        let sk = decode_sk(&own_secret_key.0)?;
        let ct = decode_ct(&ciphertext.0)?;
        let ss = protocol::decapsulate(rng, &pk, &sk, &ct)?;
        Ok(SparrowSharedSecret::new(&ss))
    }
}

/// Generates a keypair into `pk` (2016 bytes) and `sk` (4032 bytes)
pub fn crypto_keypair<R: RngCore + CryptoRng>(
    rng: &mut R,
    pk: &mut [u8],
    sk: &mut [u8],
    transpose: bool,
) -> Result<()> {
    validate::length("Sparrow public key output", pk.len(), PUBLIC_KEY_BYTES)?;
    validate::length("Sparrow secret key output", sk.len(), SECRET_KEY_BYTES)?;

    let (public, secret) = protocol::keygen(rng, transpose)?;
    pk.copy_from_slice(&encode_pk(&public)?);
    sk.copy_from_slice(&encode_sk(&secret)?);
    Ok(())
}

/// Encapsulates towards `peer_pk` with `own_sk`, writing `ss` (32 bytes) and `ct` (48 bytes)
pub fn crypto_encaps<R: RngCore + CryptoRng>(
    rng: &mut R,
    ss: &mut [u8],
    ct: &mut [u8],
    peer_pk: &[u8],
    own_sk: &[u8],
) -> Result<()> {
    validate::length("Sparrow shared secret output", ss.len(), SHARED_SECRET_BYTES)?;
    validate::length("Sparrow ciphertext output", ct.len(), CIPHERTEXT_BYTES)?;

    let pk = decode_pk(peer_pk)?;
    let sk = decode_sk(own_sk)?;
    let (c, k) = protocol::encapsulate(rng, &pk, &sk)?;
    ct.copy_from_slice(&encode_ct(&c)?);
    ss.copy_from_slice(&k[..]);
    Ok(())
}

/// Decapsulates `ct` sent by the owner of `peer_pk`, writing `ss` (32 bytes)
///
/// `ss` is left untouched when the confirmation tag does not verify.
pub fn crypto_decaps<R: RngCore + CryptoRng>(
    rng: &mut R,
    ss: &mut [u8],
    peer_pk: &[u8],
    ct: &[u8],
    own_sk: &[u8],
) -> Result<()> {
    validate::length("Sparrow shared secret output", ss.len(), SHARED_SECRET_BYTES)?;

    let pk = decode_pk(peer_pk)?;
    let c = decode_ct(ct)?;
    let sk = decode_sk(own_sk)?;
    let k = protocol::decapsulate(rng, &pk, &sk, &c)?;
    ss.copy_from_slice(&k[..]);
    Ok(())
}
