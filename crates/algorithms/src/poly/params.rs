//! params.rs - Ring parameters and Montgomery constants
//!
//! All values are tied to the precomputed twiddle and cutoff tables; they are
//! compile-time constants of the single supported ring Z_Q[x]/(x^N + 1).

use sparrow_params::pqc::sparrow::{SPARROW_N, SPARROW_Q, SPARROW_QMSK, SPARROW_Q_BITS, SPARROW_Q_BYTES};

/// Polynomial degree N (number of coefficients)
pub const N: usize = SPARROW_N;

/// Coefficient modulus Q
pub const Q: i64 = SPARROW_Q;

/// Bits per packed coefficient
pub const Q_BITS: usize = SPARROW_Q_BITS;

/// Mask of the minimal bit-width enclosing Q
pub const QMSK: u64 = SPARROW_QMSK;

/// Bytes squeezed per uniform candidate
pub const Q_BYTES: usize = SPARROW_Q_BYTES;

/// Montgomery radix R = 2^64 mod Q
pub const MONT_R: i64 = 125151;

/// R^2 mod Q, converts a canonical value into Montgomery form
pub const MONT_RR: i64 = 171901;

/// R^2 / N mod Q, the inverse-transform normalization constant
pub const MONT_NI: i64 = 7451;

/// -Q^-1 mod 2^64
pub const MONT_QI: i64 = 2426873466807384575;

/// Check if a number is prime (trial division; only used for parameter checks)
pub const fn is_prime(q: i64) -> bool {
    if q < 2 {
        return false;
    }
    let mut i = 2;
    while i * i <= q {
        if q % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}

/// Check if N is a power of 2
pub const fn is_power_of_two(n: usize) -> bool {
    n > 0 && (n & (n - 1)) == 0
}

const _: () = assert!(is_prime(Q));
const _: () = assert!(is_power_of_two(N));
const _: () = assert!(Q % (2 * N as i64) == 1);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_montgomery_constants() {
        let q = Q as i128;
        let r = (1i128 << 64) % q;
        assert_eq!(r as i64, MONT_R);
        assert_eq!((r * r % q) as i64, MONT_RR);

        // N * MONT_NI == R^2 (mod Q)
        assert_eq!((N as i128 * MONT_NI as i128) % q, r * r % q);

        // Q * QI == -1 (mod 2^64)
        assert_eq!((Q as u64).wrapping_mul(MONT_QI as u64), u64::MAX);
    }

    #[test]
    fn test_ring_shape() {
        assert!(is_prime(Q));
        assert!(!is_prime(Q + 2));
        assert!(is_power_of_two(N));
        assert_eq!(QMSK, (1 << 18) - 1);
        assert!(Q as u64 <= QMSK + 1);
        assert_eq!(Q_BYTES, 3);
    }
}
