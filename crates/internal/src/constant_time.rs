//! Constant-time operations to prevent timing attacks

use subtle::{Choice, ConstantTimeEq};

/// Constant-time comparison of two byte slices
///
/// Returns true if the slices are equal, false otherwise.
/// This function runs in constant time regardless of the input values.
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return false;
    }

    a.ct_eq(b).into()
}

/// Constant-time equality check that returns a Choice (0 or 1)
pub fn ct_eq_choice<A, B>(a: A, b: B) -> Choice
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return Choice::from(0);
    }

    a.ct_eq(b)
}

/// All-ones when `x` is negative, zero otherwise
#[inline(always)]
pub const fn sign_mask(x: i64) -> i64 {
    x >> 63
}

/// All-ones when `a < b`, zero otherwise
///
/// Valid whenever `a - b` does not overflow, which holds for every operand
/// the ring arithmetic produces.
#[inline(always)]
pub const fn lt_mask(a: i64, b: i64) -> i64 {
    (a - b) >> 63
}

/// All-ones when `a == b`, zero otherwise
#[inline(always)]
pub const fn eq_mask(a: i64, b: i64) -> i64 {
    let d = a ^ b;
    // d | -d has its top bit set exactly when d != 0
    !((d | d.wrapping_neg()) >> 63)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ct_eq_slices() {
        assert!(ct_eq([1u8, 2, 3], [1u8, 2, 3]));
        assert!(!ct_eq([1u8, 2, 3], [1u8, 2, 4]));
        assert!(!ct_eq([1u8, 2, 3], [1u8, 2]));
        assert_eq!(ct_eq_choice([0u8; 32], [0u8; 32]).unwrap_u8(), 1);
        assert_eq!(ct_eq_choice([0u8; 32], [0u8; 31]).unwrap_u8(), 0);
    }

    #[test]
    fn test_masks() {
        assert_eq!(sign_mask(-5), -1);
        assert_eq!(sign_mask(0), 0);
        assert_eq!(lt_mask(3, 4), -1);
        assert_eq!(lt_mask(4, 4), 0);
        assert_eq!(eq_mask(260609, 260609), -1);
        assert_eq!(eq_mask(260609, 260608), 0);
        assert_eq!(eq_mask(0, i64::MIN), 0);
    }
}
