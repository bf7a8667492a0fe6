// kem/src/sparrow/serialize.rs

//! Serialization functions for Sparrow data structures.
//!
//! Every ring element is packed as 128 coefficients of 18 bits each,
//! least-significant bit first (288 bytes). Layouts:
//!
//! - public key: `t_0 .. t_6` (2016 bytes)
//! - secret key: public key, then `s_0 .. s_6` in reduced NTT form (4032 bytes)
//! - ciphertext: 128 one-bit hints (16 bytes), then the tag (48 bytes)
//! - full ciphertext: the above followed by a second copy of the tag (80 bytes)

use alloc::vec::Vec;
use core::array;

use zeroize::Zeroizing;

use sparrow_algorithms::poly::params::{N, Q_BITS};
use sparrow_algorithms::poly::polynomial::{NttPoly, Poly};
use sparrow_algorithms::poly::serialize::{decode_bits, encode_bits};
use sparrow_algorithms::xof::shake256;

use super::params::{
    SPARROW_CIPHERTEXT_BYTES, SPARROW_CIPHERTEXT_FULL_BYTES, SPARROW_CRH, SPARROW_CTBITS,
    SPARROW_ELL, SPARROW_HINT_BYTES, SPARROW_K, SPARROW_POLY_BYTES, SPARROW_PUBLIC_KEY_BYTES,
    SPARROW_SECRET_KEY_BYTES, SPARROW_TR_BYTES,
};
use super::protocol::{Ciphertext, PublicKey, SecretKey};
use crate::error::{validate, Error, Result};

/// Packs ring elements back to back into `out`
pub(crate) fn pack_rows(out: &mut [u8], rows: &[Poly]) -> Result<usize> {
    validate::length("Sparrow packed rows", out.len(), rows.len() * SPARROW_POLY_BYTES)?;
    let mut written = 0;
    for (chunk, row) in out.chunks_exact_mut(SPARROW_POLY_BYTES).zip(rows.iter()) {
        written += encode_bits(chunk, row.coeffs(), Q_BITS)?;
    }
    Ok(written)
}

/// Unpacks `M` ring elements, rejecting coefficients outside [0, Q)
fn unpack_rows<const M: usize>(bytes: &[u8], key_type: &'static str) -> Result<[Poly; M]> {
    validate::length(key_type, bytes.len(), M * SPARROW_POLY_BYTES)?;

    let mut rows: [Poly; M] = array::from_fn(|_| Poly::zero());
    let mut canonical = true;
    for (row, chunk) in rows.iter_mut().zip(bytes.chunks_exact(SPARROW_POLY_BYTES)) {
        decode_bits(row.coeffs_mut(), chunk, Q_BITS, false)?;
        canonical &= row.is_canonical();
    }

    validate::key(canonical, key_type, "coefficient out of range")?;
    Ok(rows)
}

/// Packs hint bits eight to a byte
pub(crate) fn pack_hints(hints: &[u8; SPARROW_CTBITS]) -> Result<[u8; SPARROW_HINT_BYTES]> {
    let values: [i64; SPARROW_CTBITS] = array::from_fn(|i| hints[i] as i64);
    let mut out = [0u8; SPARROW_HINT_BYTES];
    encode_bits(&mut out, &values, 1)?;
    Ok(out)
}

fn unpack_hints(bytes: &[u8]) -> Result<[u8; SPARROW_CTBITS]> {
    let mut values = [0i64; SPARROW_CTBITS];
    decode_bits(&mut values, bytes, 1, false)?;
    Ok(array::from_fn(|i| values[i] as u8))
}

/// Serialize a public key (2016 bytes)
pub fn encode_pk(pk: &PublicKey) -> Result<Vec<u8>> {
    let mut out = alloc::vec![0u8; SPARROW_PUBLIC_KEY_BYTES];
    pack_rows(&mut out, &pk.t)?;
    Ok(out)
}

/// Deserialize a public key, recomputing its hash from `bytes`
pub fn decode_pk(bytes: &[u8]) -> Result<PublicKey> {
    validate::length("Sparrow public key", bytes.len(), SPARROW_PUBLIC_KEY_BYTES)?;
    let t = unpack_rows::<SPARROW_K>(bytes, "Sparrow public key")?;
    let mut tr = [0u8; SPARROW_TR_BYTES];
    shake256(&mut tr, bytes);
    Ok(PublicKey { t, tr })
}

/// Serialize a secret key (4032 bytes)
pub fn encode_sk(sk: &SecretKey) -> Result<Zeroizing<Vec<u8>>> {
    let mut out = Zeroizing::new(alloc::vec![0u8; SPARROW_SECRET_KEY_BYTES]);
    let (pk_bytes, s_bytes) = out.split_at_mut(SPARROW_PUBLIC_KEY_BYTES);

    pack_rows(pk_bytes, &sk.pk.t)?;
    for (chunk, si) in s_bytes.chunks_exact_mut(SPARROW_POLY_BYTES).zip(sk.s.iter()) {
        encode_bits(chunk, si.coeffs(), Q_BITS)?;
    }

    Ok(out)
}

/// Deserialize a secret key
///
/// The embedded public key is decoded as by [`decode_pk`]; secret values
/// must be reduced into [0, Q).
pub fn decode_sk(bytes: &[u8]) -> Result<SecretKey> {
    validate::length("Sparrow secret key", bytes.len(), SPARROW_SECRET_KEY_BYTES)?;
    let (pk_bytes, s_bytes) = bytes.split_at(SPARROW_PUBLIC_KEY_BYTES);

    let pk = decode_pk(pk_bytes)?;
    let rows = unpack_rows::<SPARROW_ELL>(s_bytes, "Sparrow secret key")?;
    let s: [NttPoly; SPARROW_ELL] = array::from_fn(|i| NttPoly::from_coeffs(*rows[i].coeffs()));

    Ok(SecretKey { pk, s })
}

fn encode_ct_into(out: &mut [u8], ct: &Ciphertext) -> Result<()> {
    let (h, tag) = out.split_at_mut(SPARROW_HINT_BYTES);
    h.copy_from_slice(&pack_hints(&ct.hints)?);
    tag[..SPARROW_CRH].copy_from_slice(&ct.tag);
    Ok(())
}

/// Serialize a ciphertext: hints and one tag (48 bytes)
pub fn encode_ct(ct: &Ciphertext) -> Result<Vec<u8>> {
    let mut out = alloc::vec![0u8; SPARROW_CIPHERTEXT_BYTES];
    encode_ct_into(&mut out, ct)?;
    Ok(out)
}

/// Serialize a ciphertext with the tag written twice (80 bytes)
pub fn encode_ct_full(ct: &Ciphertext) -> Result<Vec<u8>> {
    let mut out = alloc::vec![0u8; SPARROW_CIPHERTEXT_FULL_BYTES];
    encode_ct_into(&mut out, ct)?;
    out[SPARROW_CIPHERTEXT_BYTES..].copy_from_slice(&ct.tag);
    Ok(out)
}

/// Deserialize a ciphertext from its 48-byte or 80-byte encoding
///
/// The 80-byte form is accepted only when both tag copies agree.
pub fn decode_ct(bytes: &[u8]) -> Result<Ciphertext> {
    if bytes.len() != SPARROW_CIPHERTEXT_BYTES && bytes.len() != SPARROW_CIPHERTEXT_FULL_BYTES {
        return Err(Error::Primitive(sparrow_algorithms::Error::Length {
            context: "Sparrow ciphertext",
            expected: SPARROW_CIPHERTEXT_BYTES,
            actual: bytes.len(),
        }));
    }

    let hints = unpack_hints(&bytes[..SPARROW_HINT_BYTES])?;
    let mut tag = [0u8; SPARROW_CRH];
    tag.copy_from_slice(&bytes[SPARROW_HINT_BYTES..SPARROW_CIPHERTEXT_BYTES]);

    if bytes.len() == SPARROW_CIPHERTEXT_FULL_BYTES {
        validate::ciphertext(
            bytes[SPARROW_CIPHERTEXT_BYTES..] == tag[..],
            "Sparrow",
            "tag copies differ",
        )?;
    }

    Ok(Ciphertext { hints, tag })
}

const _: () = assert!(SPARROW_POLY_BYTES * 8 == N * Q_BITS);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sparrow::protocol::keygen;
    use rand::SeedableRng;
    use rand_chacha::ChaChaRng;
    use sparrow_algorithms::poly::params::Q;

    fn keypair(seed: u64) -> (PublicKey, SecretKey) {
        let mut rng = ChaChaRng::seed_from_u64(seed);
        keygen(&mut rng, false).unwrap()
    }

    fn sample_ct() -> Ciphertext {
        let mut hints = [0u8; SPARROW_CTBITS];
        for (i, h) in hints.iter_mut().enumerate() {
            *h = ((i * 7 + 3) % 5 == 0) as u8;
        }
        let tag: [u8; SPARROW_CRH] = array::from_fn(|i| (i * 11) as u8);
        Ciphertext { hints, tag }
    }

    #[test]
    fn test_public_key_encoding() {
        let (pk, _) = keypair(1);
        let bytes = encode_pk(&pk).unwrap();
        assert_eq!(bytes.len(), SPARROW_PUBLIC_KEY_BYTES);

        let mut tr = [0u8; SPARROW_TR_BYTES];
        shake256(&mut tr, &bytes);
        assert_eq!(&tr, pk.hash());

        let decoded = decode_pk(&bytes).unwrap();
        assert_eq!(decoded, pk);
    }

    #[test]
    fn test_secret_key_encoding() {
        let (pk, sk) = keypair(2);
        let bytes = encode_sk(&sk).unwrap();
        assert_eq!(bytes.len(), SPARROW_SECRET_KEY_BYTES);
        assert_eq!(&bytes[..SPARROW_PUBLIC_KEY_BYTES], &encode_pk(&pk).unwrap()[..]);

        let decoded = decode_sk(&bytes).unwrap();
        assert_eq!(decoded.public_key(), &pk);
        assert_eq!(decoded.s, sk.s);
    }

    #[test]
    fn test_out_of_range_coefficient_rejected() {
        let (_, sk) = keypair(3);
        let mut bytes = encode_sk(&sk).unwrap();
        // first secret coefficient := 2^18 - 1 >= Q
        let off = SPARROW_PUBLIC_KEY_BYTES;
        bytes[off] = 0xFF;
        bytes[off + 1] = 0xFF;
        bytes[off + 2] |= 0x03;
        assert!(matches!(
            decode_sk(&bytes),
            Err(Error::InvalidKey { reason: "coefficient out of range", .. })
        ));

        let mut pk_bytes = bytes[..SPARROW_PUBLIC_KEY_BYTES].to_vec();
        let q = Q as u32;
        pk_bytes[0] = q as u8;
        pk_bytes[1] = (q >> 8) as u8;
        pk_bytes[2] = (pk_bytes[2] & !0x03) | ((q >> 16) as u8 & 0x03);
        assert!(matches!(decode_pk(&pk_bytes), Err(Error::InvalidKey { .. })));
    }

    #[test]
    fn test_ciphertext_encodings() {
        let ct = sample_ct();

        let short = encode_ct(&ct).unwrap();
        assert_eq!(short.len(), SPARROW_CIPHERTEXT_BYTES);
        assert_eq!(&short[SPARROW_HINT_BYTES..], &ct.tag[..]);
        assert_eq!(decode_ct(&short).unwrap(), ct);

        let full = encode_ct_full(&ct).unwrap();
        assert_eq!(full.len(), SPARROW_CIPHERTEXT_FULL_BYTES);
        assert_eq!(&full[..SPARROW_CIPHERTEXT_BYTES], &short[..]);
        assert_eq!(&full[SPARROW_CIPHERTEXT_BYTES..], &ct.tag[..]);
        assert_eq!(decode_ct(&full).unwrap(), ct);
    }

    #[test]
    fn test_hint_bit_order() {
        let mut hints = [0u8; SPARROW_CTBITS];
        hints[0] = 1;
        hints[9] = 1;
        let packed = pack_hints(&hints).unwrap();
        assert_eq!(packed[0], 0x01);
        assert_eq!(packed[1], 0x02);
        assert_eq!(unpack_hints(&packed).unwrap(), hints);
    }

    #[test]
    fn test_full_ciphertext_with_diverging_tags_rejected() {
        let mut full = encode_ct_full(&sample_ct()).unwrap();
        full[SPARROW_CIPHERTEXT_FULL_BYTES - 1] ^= 0x01;
        assert!(matches!(decode_ct(&full), Err(Error::InvalidCiphertext { .. })));
    }

    #[test]
    fn test_wrong_lengths() {
        let err = decode_pk(&[0u8; SPARROW_PUBLIC_KEY_BYTES - 1]).unwrap_err();
        assert!(matches!(
            err,
            Error::Primitive(sparrow_algorithms::Error::Length { expected: 2016, actual: 2015, .. })
        ));
        assert!(decode_sk(&[0u8; SPARROW_SECRET_KEY_BYTES + 1]).is_err());
        assert!(decode_ct(&[0u8; 47]).is_err());
        assert!(decode_ct(&[0u8; 64]).is_err());
    }
}
