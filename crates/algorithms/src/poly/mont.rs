//! mont.rs - Portable 64-bit Montgomery arithmetic modulo Q
//!
//! Every conditional correction is an arithmetic mask on the sign bit.
//! Secret coefficients flow through all of these, so none of them may
//! branch on their inputs. The `debug_assert!`s state the contracts and
//! compile out of release builds.

use sparrow_internal::constant_time::sign_mask;

use super::params::{MONT_NI, MONT_QI, MONT_RR, Q};

/// Plain addition; the caller bounds the result
#[inline(always)]
pub const fn add(x: i64, y: i64) -> i64 {
    x + y
}

/// Plain subtraction; the caller bounds the result
#[inline(always)]
pub const fn sub(x: i64, y: i64) -> i64 {
    x - y
}

/// Conditionally add `m` if `x` is negative: [-m, m) -> [0, m)
#[inline(always)]
pub fn cadd(x: i64, m: i64) -> i64 {
    debug_assert!(x >= -m && x < m);
    let r = x + (sign_mask(x) & m);
    debug_assert!(r >= 0 && r < m);
    r
}

/// Conditionally subtract `m` if `x >= m`: [0, 2m) -> [0, m)
#[inline(always)]
pub fn csub(x: i64, m: i64) -> i64 {
    debug_assert!(m > 0 && x >= 0 && x < 2 * m);
    let t = x - m;
    let r = t + (sign_mask(t) & m);
    debug_assert!(r >= 0 && r < m);
    r
}

/// Montgomery reduction: returns r == x / 2^64 (mod Q)
///
/// `x` must lie in [-2^111, 2^111); the result lies in [-Q, Q) whenever
/// |x| < Q * 2^63, which covers every product formed by the transforms.
#[inline(always)]
pub fn redc(x: i128) -> i64 {
    debug_assert!(x >= -(1i128 << 111) && x < (1i128 << 111));
    let r = (x as i64).wrapping_mul(MONT_QI);
    let r = ((x + (r as i128) * (Q as i128)) >> 64) as i64;
    debug_assert!(r >= -Q && r < Q);
    r
}

/// Montgomery multiplication: x * y / R (mod Q), result in [-Q, Q)
#[inline(always)]
pub fn mulq(x: i64, y: i64) -> i64 {
    redc((x as i128) * (y as i128))
}

/// Montgomery multiply-add: (x * y + z) / R (mod Q), result in [-Q, Q)
#[inline(always)]
pub fn mulqa(x: i64, y: i64, z: i64) -> i64 {
    redc((x as i128) * (y as i128) + (z as i128))
}

/// Canonical addition for `x + y` in [-Q, 2Q), result in [0, Q)
///
/// One subtraction of Q followed by two masked corrections; this covers a
/// wider input range than `cadd(csub(..))` and so carries its own contract.
#[inline(always)]
pub fn addq(x: i64, y: i64) -> i64 {
    let s = x + y;
    debug_assert!(s >= -Q && s < 2 * Q);
    let mut t = s - Q;
    t += sign_mask(t) & Q;
    t += sign_mask(t) & Q;
    t
}

/// Canonical value into Montgomery form (x * R mod Q), result in [-Q, Q)
#[inline(always)]
pub fn to_mont(x: i64) -> i64 {
    mulq(x, MONT_RR)
}

/// Montgomery form back to canonical, result in [0, Q)
#[inline(always)]
pub fn from_mont(x: i64) -> i64 {
    cadd(mulq(x, 1), Q)
}

/// Inverse-transform normalization of a single value, result in [0, Q)
#[inline(always)]
pub(crate) fn normalize_inverse(x: i64) -> i64 {
    cadd(mulq(x, MONT_NI), Q)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poly::params::MONT_R;

    fn modq(x: i128) -> i64 {
        x.rem_euclid(Q as i128) as i64
    }

    #[test]
    fn test_cadd_csub_edges() {
        assert_eq!(cadd(-Q, Q), 0);
        assert_eq!(cadd(-1, Q), Q - 1);
        assert_eq!(cadd(0, Q), 0);
        assert_eq!(cadd(Q - 1, Q), Q - 1);

        assert_eq!(csub(0, Q), 0);
        assert_eq!(csub(Q - 1, Q), Q - 1);
        assert_eq!(csub(Q, Q), 0);
        assert_eq!(csub(2 * Q - 1, Q), Q - 1);
    }

    #[test]
    fn test_redc_congruence() {
        let q = Q as i128;
        let samples: [i128; 6] = [
            0,
            1,
            -1,
            (q - 1) * (q - 1),
            -(q * (1i128 << 62)),
            q * (1i128 << 62) - 1,
        ];
        for &x in samples.iter() {
            let r = redc(x);
            assert!(r >= -Q && r < Q, "redc({}) = {} out of range", x, r);
            // r * 2^64 == x (mod Q), and 2^64 == R (mod Q)
            assert_eq!(modq((r as i128) * (MONT_R as i128)), modq(x));
        }
    }

    #[test]
    fn test_mont_round_trip() {
        for x in [0, 1, 2, 12345, Q / 2, Q - 1] {
            assert_eq!(from_mont(to_mont(x)), x);
        }
        assert_eq!(from_mont(MONT_R), 1);
        assert_eq!(cadd(mulq(MONT_RR, 1), Q), MONT_R);
    }

    #[test]
    fn test_mulqa_matches_mulq_plus_shift() {
        let (x, y, z) = (123456i64, 234567i64, 98765i64);
        let lhs = mulqa(x, y, z);
        let rhs = mulq(x, y);
        // z / R is added on top of the product
        assert_eq!(
            modq((lhs - rhs) as i128 * MONT_R as i128),
            modq(z as i128)
        );
    }

    #[test]
    fn test_addq_range() {
        assert_eq!(addq(-Q, 0), 0);
        assert_eq!(addq(-1, 0), Q - 1);
        assert_eq!(addq(Q - 1, Q), Q - 1);
        assert_eq!(addq(Q - 1, 1), 0);
        assert_eq!(addq(17, -20), Q - 3);
        assert_eq!(add(3, 4), 7);
        assert_eq!(sub(3, 4), -1);
    }
}
