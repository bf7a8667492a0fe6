//! Endianness utility functions

/// Convert a u64 from little-endian byte order to native byte order
pub fn u64_from_le_bytes(bytes: &[u8]) -> u64 {
    u64::from_le_bytes([
        bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
    ])
}

/// Read up to eight little-endian bytes into a zero-extended u64
pub fn u64_from_le_prefix(bytes: &[u8]) -> u64 {
    debug_assert!(bytes.len() <= 8);
    let mut buf = [0u8; 8];
    buf[..bytes.len()].copy_from_slice(bytes);
    u64::from_le_bytes(buf)
}

/// Convert a u128 from little-endian byte order to native byte order
pub fn u128_from_le_bytes(bytes: &[u8; 16]) -> u128 {
    u128::from_le_bytes(*bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_is_zero_extended() {
        assert_eq!(u64_from_le_prefix(&[0x01, 0x02, 0x03]), 0x030201);
        assert_eq!(u64_from_le_prefix(&[]), 0);
        assert_eq!(
            u64_from_le_bytes(&[0x02, 0x01, 0xef, 0xbe, 0xad, 0xde, 0, 0, 0xff]),
            0xdead_beef_0102
        );
    }

    #[test]
    fn test_u128_byte_order() {
        let mut b = [0u8; 16];
        b[15] = 0x80;
        assert_eq!(u128_from_le_bytes(&b), 1u128 << 127);
    }
}
