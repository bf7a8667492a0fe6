// kem/src/sparrow/rec.rs

//! Reconciliation of noisy ring coordinates into shared key bits.
//!
//! The encapsulating side classifies each of its first `CTBITS` coordinates
//! into a parity hint after a small random perturbation; both sides then map
//! their own (doubled) coordinate to the nearest value carrying that hint
//! and read off `B = 2` bits from it. Coordinates that differ by less than
//! about Q/16 reconcile to the same symbol.
//!
//! Every function here sees secret coordinates. Selection is done with
//! arithmetic masks only; there is no branch or table index on `v`.

use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use sparrow_algorithms::poly::mont::{cadd, csub};
use sparrow_algorithms::poly::params::Q;
use sparrow_algorithms::poly::polynomial::Poly;
use sparrow_algorithms::xof::Shake256;
use sparrow_internal::constant_time::{eq_mask, lt_mask, sign_mask};
use sparrow_internal::endian::u64_from_le_bytes;

use super::params::{SPARROW_B, SPARROW_CTBITS, SPARROW_SEC, SPARROW_SS_BYTES};

/// Domain-separation byte of the hint randomness
pub const REC_DOMAIN: u8 = b'r';

/// Bucket boundaries over the doubled range [0, 2Q], spaced Q/4 apart
pub const CUTOFFS: [i64; 9] = [
    0, 65153, 130305, 195457, 260609, 325762, 390914, 456066, 521218,
];

const HINT_SEED_LEN: usize = 8 + SPARROW_SEC;

/// Parity of the quarter-Q bucket holding `v`: `((2^B * v) / Q) & 1`
#[inline(always)]
pub fn help_rec(v: i64) -> i64 {
    (((1 << SPARROW_B) * v) / Q) & 1
}

/// Nearest value to `w` whose hint is `b`, or `w` itself if it already has it
///
/// `w` is a doubled coordinate in [0, 2Q); the result lies in [0, 2Q). The
/// scan visits every cutoff and keeps a running minimum through masks.
pub fn closest_v(w: i64, b: i64) -> i64 {
    let correct = eq_mask(help_rec(w), b);

    let mut dist = Q;
    let mut closest = 0i64;

    for &c in CUTOFFS.iter() {
        // d = |c - w| - [c < w], s = -1 when c < w
        let r = c - w;
        let s = sign_mask(r);
        let d = (r + s) ^ s;

        let rep = lt_mask(d - s, dist);
        let equal = eq_mask(c, w);
        dist = (rep & (d - s)) | (!rep & dist);
        closest = (rep & (c + s + equal)) | (!rep & closest);
    }

    let x = (correct & w) | (!correct & closest);

    // x lies in [-1, 2Q]; shifting by one keeps both folds in their domains
    cadd(csub(x + 1, 2 * Q) - 1, 2 * Q)
}

/// Two key bits from a doubled coordinate and its hint
#[inline]
pub fn rec_element(w: i64, b: i64) -> i64 {
    let v = closest_v(w, b);
    (((v << (SPARROW_B - 1)) + Q / 2) / Q) & 0b11
}

/// Reconciles the first `CTBITS` coordinates of `v` into key bytes
///
/// Four 2-bit symbols per byte, first coordinate in the top bits.
pub fn rec_vec(out: &mut [u8; SPARROW_SS_BYTES], v: &Poly, hints: &[u8; SPARROW_CTBITS]) {
    let c = v.coeffs();
    for (k, byte) in out.iter_mut().enumerate() {
        let i = 4 * k;
        let sym = |j: usize| rec_element(2 * c[i + j], hints[i + j] as i64);
        *byte = ((sym(0) << 6) | (sym(1) << 4) | (sym(2) << 2) | sym(3)) as u8;
    }
}

/// Computes the ciphertext hints for the first `CTBITS` coordinates of `v`
///
/// Draws a fresh `SEC`-byte seed from `rng`; the seed is expanded under the
/// header `'r' || 0^7` into two perturbation bits per coordinate, consumed
/// from 64-bit little-endian words low bit first.
pub fn help_recvec<R: RngCore + CryptoRng>(
    rng: &mut R,
    v: &Poly,
    hints: &mut [u8; SPARROW_CTBITS],
) {
    let mut seed = [0u8; HINT_SEED_LEN];
    seed[0] = REC_DOMAIN;
    rng.fill_bytes(&mut seed[8..]);

    let mut xof = Shake256::with_input(&seed);
    seed.zeroize();

    let mut buf = [0u8; 8];
    let mut rand = 0u64;
    let mut left = 0usize;
    let c = v.coeffs();

    for (i, h) in hints.iter_mut().enumerate() {
        if left < 2 {
            xof.squeeze_bytes(&mut buf);
            rand = u64_from_le_bytes(&buf);
            left = 64;
        }
        let r1 = (rand & 1) as i64;
        rand >>= 1;
        let r2 = (rand & 1) as i64;
        rand >>= 1;
        left -= 2;

        *h = help_rec(2 * c[i] + (r1 - r2)) as u8;
    }

    buf.zeroize();
    rand.zeroize();
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
    fn test_help_rec_buckets() {
        assert_eq!(help_rec(0), 0);
        assert_eq!(help_rec(65152), 0);
        assert_eq!(help_rec(65153), 1);
        assert_eq!(help_rec(130305), 0);
        assert_eq!(help_rec(2 * Q - 1), 1);
        // truncating division keeps small negatives in bucket 0
        assert_eq!(help_rec(-1), 0);
    }

    #[test]
    fn test_closest_v_lands_in_requested_bucket() {
        for w in (0..2 * Q).step_by(97).chain([0, 65152, 65153, 2 * Q - 1]) {
            for b in 0..2 {
                let c = closest_v(w, b);
                assert!((0..2 * Q).contains(&c), "closest_v({}, {}) = {}", w, b, c);
                assert_eq!(help_rec(c), b, "w = {}", w);
            }
            assert_eq!(closest_v(w, help_rec(w)), w);
        }
    }

    #[test]
    fn test_closest_v_range_exhaustive() {
        for w in 0..2 * Q {
            for b in 0..2 {
                let c = closest_v(w, b);
                assert!((0..2 * Q).contains(&c), "closest_v({}, {}) = {}", w, b, c);
            }
        }
        // the two ends of the fold
        assert_eq!(closest_v(1, 1), 2 * Q - 1);
        assert_eq!(closest_v(2 * Q - 1, 0), 0);
    }

    #[test]
    fn test_closest_v_picks_nearest_cutoff() {
        // one less than the nearest cutoff below w, wrapping modulo 2Q
        assert_eq!(closest_v(1000, 1), 2 * Q - 1);
        assert_eq!(closest_v(70000, 0), 65152);
        // the cutoff itself when it lies above w
        assert_eq!(closest_v(60000, 1), 65153);
        // exactly on a cutoff of the wrong parity
        assert_eq!(closest_v(65153, 0), 65152);
    }

    #[test]
    fn test_rec_element_symbols() {
        let quarters = [0, Q / 4, Q / 2, 3 * Q / 4];
        for (k, &v) in quarters.iter().enumerate() {
            assert_eq!(rec_element(2 * v, help_rec(2 * v)), k as i64);
        }
    }

    #[test]
    fn test_rec_vec_packing() {
        let mut v = Poly::zero();
        v.coeffs_mut()[..4].copy_from_slice(&[0, Q / 4, Q / 2, 3 * Q / 4]);
        let mut hints = [0u8; SPARROW_CTBITS];
        for i in 0..SPARROW_CTBITS {
            hints[i] = help_rec(2 * v.coeffs()[i]) as u8;
        }
        assert_eq!(&hints[..4], &[0, 1, 1, 1]);

        let mut key = [0xFFu8; SPARROW_SS_BYTES];
        rec_vec(&mut key, &v, &hints);
        assert_eq!(key[0], 0x1B);
        assert!(key[1..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_noisy_views_agree() {
        let mut rng = ChaChaRng::seed_from_u64(42);
        for _ in 0..200 {
            let v = random_poly(&mut rng);
            let mut w = v.clone();
            let noise: [i64; SPARROW_CTBITS] =
                core::array::from_fn(|_| rng.gen_range(-4096..=4096));
            w.add_noise(&noise);

            let mut hints = [0u8; SPARROW_CTBITS];
            help_recvec(&mut rng, &v, &mut hints);
            assert!(hints.iter().all(|&h| h <= 1));

            let mut k1 = [0u8; SPARROW_SS_BYTES];
            let mut k2 = [0u8; SPARROW_SS_BYTES];
            rec_vec(&mut k1, &v, &hints);
            rec_vec(&mut k2, &w, &hints);
            assert_eq!(k1, k2);
        }
    }

    #[test]
    fn test_help_recvec_draws_seed_from_rng() {
        let mut rng = ChaChaRng::seed_from_u64(3);
        let v = random_poly(&mut rng);

        let mut a = ChaChaRng::seed_from_u64(9);
        let mut b = ChaChaRng::seed_from_u64(9);
        let mut ha = [0u8; SPARROW_CTBITS];
        let mut hb = [0u8; SPARROW_CTBITS];
        help_recvec(&mut a, &v, &mut ha);
        help_recvec(&mut b, &v, &mut hb);
        assert_eq!(ha, hb);

        // exactly SEC bytes are consumed
        let mut skip = [0u8; SPARROW_SEC];
        let mut c = ChaChaRng::seed_from_u64(9);
        c.fill_bytes(&mut skip);
        assert_eq!(a.next_u64(), c.next_u64());
    }
}
