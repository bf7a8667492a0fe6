//! polynomial.rs - Ring elements tagged by representation
//!
//! Four wrappers, one per representation, so a value in the wrong domain
//! cannot reach a multiply or a codec by accident:
//!
//! | type          | holds                                   |
//! |---------------|-----------------------------------------|
//! | [`Poly`]       | canonical coefficients (or signed noise) |
//! | [`MontPoly`]   | coefficients scaled by R                 |
//! | [`NttPoly`]    | NTT point values of a `Poly`             |
//! | [`NttProduct`] | sum of pointwise products (carries R^-1) |
//!
//! Conversions only happen through the transform calls below.

use zeroize::{Zeroize, ZeroizeOnDrop};

use super::mont::{addq, from_mont};
use super::ntt::{
    forward_transform, inverse_transform, pointwise_multiply, pointwise_multiply_add,
    scalar_multiply, scalar_to_mont,
};
use super::params::{MONT_R, N, Q};
use crate::error::{Error, Result};

/// A ring element of Z_Q[x]/(x^N + 1) in coefficient form
#[derive(Debug, Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Poly {
    coeffs: [i64; N],
}

/// A ring element whose coefficients are scaled by the Montgomery radix
#[derive(Debug, Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct MontPoly {
    coeffs: [i64; N],
}

/// A ring element in NTT (point-value) form
#[derive(Debug, Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct NttPoly {
    coeffs: [i64; N],
}

/// NTT-domain accumulator of pointwise products
///
/// Every product carries a factor R^-1, which the inverse transform cancels,
/// so [`NttProduct::inverse`] lands directly in canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct NttProduct {
    coeffs: [i64; N],
}

impl Poly {
    /// Creates a polynomial with all coefficients set to zero
    pub fn zero() -> Self {
        Self { coeffs: [0; N] }
    }

    /// Wraps an array of coefficients
    pub fn from_coeffs(coeffs: [i64; N]) -> Self {
        Self { coeffs }
    }

    /// Creates a polynomial from a slice of exactly N coefficients
    pub fn from_slice(coeffs: &[i64]) -> Result<Self> {
        if coeffs.len() != N {
            return Err(Error::Length {
                context: "Poly::from_slice",
                expected: N,
                actual: coeffs.len(),
            });
        }
        let mut out = Self::zero();
        out.coeffs.copy_from_slice(coeffs);
        Ok(out)
    }

    /// Returns the coefficients
    pub fn coeffs(&self) -> &[i64; N] {
        &self.coeffs
    }

    /// Returns the coefficients mutably
    pub fn coeffs_mut(&mut self) -> &mut [i64; N] {
        &mut self.coeffs
    }

    /// True when every coefficient lies in [0, Q)
    ///
    /// Scans the whole element without early exit.
    pub fn is_canonical(&self) -> bool {
        let bad = self
            .coeffs
            .iter()
            .fold(0i64, |acc, &x| acc | x | (Q - 1 - x));
        bad >= 0
    }

    /// Forward transform into the NTT domain
    pub fn forward(&self) -> NttPoly {
        let mut out = NttPoly { coeffs: self.coeffs };
        forward_transform(&mut out.coeffs);
        out
    }

    /// Adds signed noise with canonical reduction: `c[i] = addq(c[i], e[i])`
    ///
    /// Only the first `noise.len()` coefficients are touched, so a shorter
    /// noise vector perturbs a prefix of the element. `self` must be canonical
    /// and each noise value must lie in [-Q, Q).
    pub fn add_noise(&mut self, noise: &[i64]) {
        debug_assert!(noise.len() <= N);
        for (c, &e) in self.coeffs.iter_mut().zip(noise.iter()) {
            *c = addq(e, *c);
        }
    }
}

impl MontPoly {
    /// Returns the coefficients
    pub fn coeffs(&self) -> &[i64; N] {
        &self.coeffs
    }

    /// Strips the Montgomery factor, giving canonical coefficients
    pub fn from_montgomery(&self) -> Poly {
        let mut out = Poly { coeffs: self.coeffs };
        for x in out.coeffs.iter_mut() {
            *x = from_mont(*x);
        }
        out
    }
}

impl NttPoly {
    /// Wraps NTT-domain values, e.g. decoded from a secret key
    pub fn from_coeffs(coeffs: [i64; N]) -> Self {
        Self { coeffs }
    }

    /// Returns the point values
    pub fn coeffs(&self) -> &[i64; N] {
        &self.coeffs
    }

    /// Inverse transform; the result still carries the factor R
    pub fn inverse(&self) -> MontPoly {
        let mut out = MontPoly { coeffs: self.coeffs };
        inverse_transform(&mut out.coeffs);
        out
    }

    /// The same point values reduced into [0, Q)
    pub fn canonical(&self) -> NttPoly {
        let mut out = NttPoly { coeffs: [0; N] };
        scalar_multiply(&mut out.coeffs, &self.coeffs, MONT_R);
        out
    }

    /// Multiplies every point value by the canonical scalar `c`, result in [0, Q)
    pub fn scale(&self, c: i64) -> NttPoly {
        debug_assert!(c >= 0 && c < Q);
        let mut out = NttPoly { coeffs: [0; N] };
        scalar_multiply(&mut out.coeffs, &self.coeffs, scalar_to_mont(c));
        out
    }

    /// Pointwise product with `other`
    pub fn pointwise(&self, other: &NttPoly) -> NttProduct {
        let mut out = NttProduct::zero();
        pointwise_multiply(&mut out.coeffs, &self.coeffs, &other.coeffs);
        out
    }
}

impl NttProduct {
    /// An empty accumulator
    pub fn zero() -> Self {
        Self { coeffs: [0; N] }
    }

    /// Returns the accumulated values
    pub fn coeffs(&self) -> &[i64; N] {
        &self.coeffs
    }

    /// Accumulates `a * b` pointwise
    pub fn mul_acc(&mut self, a: &NttPoly, b: &NttPoly) {
        pointwise_multiply_add(&mut self.coeffs, &a.coeffs, &b.coeffs);
    }

    /// Inverse transform into canonical coefficient form
    pub fn inverse(&self) -> Poly {
        let mut out = Poly { coeffs: self.coeffs };
        inverse_transform(&mut out.coeffs);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaChaRng;

    fn random_poly(rng: &mut ChaChaRng) -> Poly {
        let mut p = Poly::zero();
        for x in p.coeffs_mut().iter_mut() {
            *x = rng.gen_range(0..Q);
        }
        p
    }

    #[test]
    fn test_typed_roundtrip() {
        let mut rng = ChaChaRng::seed_from_u64(42);
        let p = random_poly(&mut rng);
        assert_eq!(p.forward().inverse().from_montgomery(), p);
    }

    #[test]
    fn test_canonical_preserves_values_mod_q() {
        let mut rng = ChaChaRng::seed_from_u64(5);
        let p = random_poly(&mut rng);
        let raw = p.forward();
        let canon = raw.canonical();
        for i in 0..N {
            assert!(canon.coeffs()[i] >= 0 && canon.coeffs()[i] < Q);
            assert_eq!(canon.coeffs()[i], raw.coeffs()[i].rem_euclid(Q));
        }
        // Reduction does not change products
        let q = random_poly(&mut rng).forward();
        assert_eq!(raw.pointwise(&q), canon.pointwise(&q));
    }

    #[test]
    fn test_product_of_one() {
        let mut rng = ChaChaRng::seed_from_u64(6);
        let p = random_poly(&mut rng);
        let mut one = Poly::zero();
        one.coeffs_mut()[0] = 1;
        assert_eq!(p.forward().pointwise(&one.forward()).inverse(), p);

        let mut acc = NttProduct::zero();
        acc.mul_acc(&p.forward(), &one.forward());
        acc.mul_acc(&p.forward(), &one.forward());
        let doubled = acc.inverse();
        for i in 0..N {
            assert_eq!(doubled.coeffs()[i], (2 * p.coeffs()[i]) % Q);
        }
    }

    #[test]
    fn test_scale() {
        let mut rng = ChaChaRng::seed_from_u64(8);
        let p = random_poly(&mut rng);
        let mut one = Poly::zero();
        one.coeffs_mut()[0] = 1;
        let scaled = p.forward().scale(5).pointwise(&one.forward()).inverse();
        for i in 0..N {
            assert_eq!(scaled.coeffs()[i], (5 * p.coeffs()[i]) % Q);
        }
    }

    #[test]
    fn test_add_noise_prefix_only() {
        let mut p = Poly::zero();
        p.coeffs_mut()[0] = 1;
        p.coeffs_mut()[1] = Q - 1;
        p.coeffs_mut()[5] = 7;
        p.add_noise(&[-3, 4]);
        assert_eq!(p.coeffs()[0], Q - 2);
        assert_eq!(p.coeffs()[1], 3);
        assert_eq!(p.coeffs()[5], 7);
        assert!(p.is_canonical());
    }

    #[test]
    fn test_is_canonical_and_from_slice() {
        let mut p = Poly::zero();
        assert!(p.is_canonical());
        p.coeffs_mut()[17] = Q;
        assert!(!p.is_canonical());
        p.coeffs_mut()[17] = -1;
        assert!(!p.is_canonical());

        assert!(Poly::from_slice(&[0i64; N]).is_ok());
        assert!(matches!(
            Poly::from_slice(&[0i64; N - 1]),
            Err(Error::Length { expected: N, actual: 127, .. })
        ));
    }
}
