//! serialize.rs - Packing of coefficient vectors into bytes
//!
//! Values are packed least-significant bit first: the first value occupies
//! the low bits of the first byte. A trailing partial byte is zero-padded.

use crate::error::{validate, Error, Result};

/// Bytes needed for `count` values of `bits` bits each
pub const fn packed_len(count: usize, bits: usize) -> usize {
    (count * bits + 7) / 8
}

fn check_bits(bits: usize) -> Result<()> {
    if bits == 0 || bits > 32 {
        return Err(Error::param("bits", "bits per value must be in range [1, 32]"));
    }
    Ok(())
}

/// Packs the low `bits` bits of each value into `out`
///
/// Returns the number of bytes written, always `packed_len(values.len(), bits)`.
pub fn encode_bits(out: &mut [u8], values: &[i64], bits: usize) -> Result<usize> {
    check_bits(bits)?;
    let len = packed_len(values.len(), bits);
    validate::min_length("encode_bits output", out.len(), len)?;

    let mask = (1u64 << bits) - 1;
    let mut acc = 0u64; // bit buffer
    let mut nbits = 0usize;
    let mut j = 0usize;

    for &v in values {
        acc |= ((v as u64) & mask) << nbits;
        nbits += bits;
        while nbits >= 8 {
            out[j] = acc as u8;
            j += 1;
            acc >>= 8;
            nbits -= 8;
        }
    }
    if nbits > 0 {
        out[j] = acc as u8;
        j += 1;
    }

    Ok(j)
}

/// Unpacks `values.len()` values of `bits` bits each from `bytes`
///
/// With `signed`, each value is read as two's complement and sign-extended.
/// Returns the number of bytes consumed.
pub fn decode_bits(values: &mut [i64], bytes: &[u8], bits: usize, signed: bool) -> Result<usize> {
    check_bits(bits)?;
    let len = packed_len(values.len(), bits);
    validate::min_length("decode_bits input", bytes.len(), len)?;

    let (mask, sign) = if signed {
        let s = 1u64 << (bits - 1);
        (s - 1, s)
    } else {
        ((1u64 << bits) - 1, 0)
    };

    let mut acc = 0u64;
    let mut nbits = 0usize;
    let mut i = 0usize;

    for v in values.iter_mut() {
        while nbits < bits {
            acc |= (bytes[i] as u64) << nbits;
            i += 1;
            nbits += 8;
        }
        *v = (acc & mask) as i64 - (acc & sign) as i64;
        acc >>= bits;
        nbits -= bits;
    }

    Ok(i)
}
