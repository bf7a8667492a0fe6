//! Property-based tests for the arithmetic, packing and reconciliation layers

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use sparrow_algorithms::poly::mont::{from_mont, to_mont};
use sparrow_algorithms::poly::params::MONT_R;
use sparrow_algorithms::poly::prelude::*;
use sparrow_kem::sparrow::rec::{closest_v, help_rec, help_recvec, rec_vec};

fn canonical_poly() -> impl Strategy<Value = Poly> {
    prop::collection::vec(0..Q, N).prop_map(|v| {
        let mut p = Poly::zero();
        p.coeffs_mut().copy_from_slice(&v);
        p
    })
}

/// Schoolbook product in Z_Q[x]/(x^N + 1)
fn negacyclic(a: &Poly, b: &Poly) -> Vec<i64> {
    let mut r = vec![0i64; N];
    for i in 0..N {
        for j in 0..N {
            let p = a.coeffs()[i] * b.coeffs()[j] % Q;
            if i + j < N {
                r[i + j] = (r[i + j] + p) % Q;
            } else {
                r[i + j - N] = (r[i + j - N] - p).rem_euclid(Q);
            }
        }
    }
    r
}

proptest! {
    #[test]
    fn montgomery_product_matches_plain(x in 0..Q, y in 0..Q) {
        let r = cadd(mulq(to_mont(x), y), Q);
        prop_assert_eq!(r, x * y % Q);
        prop_assert_eq!(from_mont(to_mont(x)), x);
    }

    #[test]
    fn mulq_stays_in_range(x in -4 * Q..4 * Q, y in -4 * Q..4 * Q) {
        let r = mulq(x, y);
        prop_assert!((-Q..Q).contains(&r));
    }

    #[test]
    fn mulqa_adds_before_reduction(x in 0..Q, y in 0..Q, z in 0..Q) {
        let lhs = cadd(mulqa(x, y, z), Q);
        let rhs = (mulq(x, y) + mulq(1, z)).rem_euclid(Q);
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn redc_reduces_wide_products(a in -Q + 1..Q, b in any::<i64>()) {
        let x = (a as i128) * (b as i128);
        let r = redc(x);
        prop_assert!((-Q..Q).contains(&r));

        // r == x / R (mod Q), checked both ways through the domain conversions
        let xq = x.rem_euclid(Q as i128) as i64;
        prop_assert_eq!(cadd(r, Q), from_mont(xq));
        prop_assert_eq!(cadd(to_mont(cadd(r, Q)), Q), xq);
    }

    #[test]
    fn redc_covers_the_full_bound(x in -((Q as i128) << 63) + 1..((Q as i128) << 63)) {
        let r = redc(x);
        prop_assert!((-Q..Q).contains(&r));
        prop_assert_eq!(
            ((r as i128) * (MONT_R as i128)).rem_euclid(Q as i128),
            x.rem_euclid(Q as i128)
        );
    }

    #[test]
    fn addq_is_canonical(x in 0..Q, e in -Q..Q) {
        prop_assert_eq!(addq(x, e), (x + e).rem_euclid(Q));
    }

    #[test]
    fn csub_and_cadd_fold_once(x in 0..2 * Q, y in -Q..Q) {
        prop_assert_eq!(csub(x, Q), x % Q);
        prop_assert_eq!(cadd(y, Q), y.rem_euclid(Q));
    }

    #[test]
    fn transform_round_trip(p in canonical_poly()) {
        let back = p.forward().inverse().from_montgomery();
        prop_assert_eq!(back, p);
    }

    #[test]
    fn raw_transform_scales_by_r(p in canonical_poly()) {
        let mut v = *p.coeffs();
        forward_transform(&mut v);
        inverse_transform(&mut v);
        for (i, &x) in v.iter().enumerate() {
            prop_assert_eq!(x, cadd(to_mont(p.coeffs()[i]), Q));
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn pointwise_product_is_negacyclic_convolution(a in canonical_poly(), b in canonical_poly()) {
        let prod = a.forward().pointwise(&b.forward()).inverse();
        prop_assert_eq!(prod.coeffs().to_vec(), negacyclic(&a, &b));
    }

    #[test]
    fn accumulated_products_add(a in canonical_poly(), b in canonical_poly(), c in canonical_poly()) {
        let mut acc = NttProduct::zero();
        acc.mul_acc(&a.forward(), &b.forward());
        acc.mul_acc(&a.forward(), &c.forward());

        let ab = negacyclic(&a, &b);
        let ac = negacyclic(&a, &c);
        let expected: Vec<i64> = ab.iter().zip(ac.iter()).map(|(x, y)| (x + y) % Q).collect();
        prop_assert_eq!(acc.inverse().coeffs().to_vec(), expected);
    }

    #[test]
    fn canonical_keeps_point_values(p in canonical_poly()) {
        let f = p.forward();
        let c = f.canonical();
        for (&x, &y) in f.coeffs().iter().zip(c.coeffs().iter()) {
            prop_assert!((0..Q).contains(&y));
            prop_assert_eq!(x.rem_euclid(Q), y);
        }
    }

    #[test]
    fn scale_multiplies_point_values(p in canonical_poly(), c in 0..Q) {
        let f = p.forward();
        let s = f.scale(c);
        for (&x, &y) in f.coeffs().iter().zip(s.coeffs().iter()) {
            prop_assert_eq!(y, x.rem_euclid(Q) * c % Q);
        }
    }
}

proptest! {
    #[test]
    fn bit_packing_keeps_low_bits(
        bits in 1usize..=32,
        values in prop::collection::vec(any::<i64>(), 0..64)
    ) {
        let mut out = vec![0u8; packed_len(values.len(), bits)];
        let written = encode_bits(&mut out, &values, bits).unwrap();
        prop_assert_eq!(written, out.len());

        let mut back = vec![0i64; values.len()];
        let read = decode_bits(&mut back, &out, bits, false).unwrap();
        prop_assert_eq!(read, written);

        let mask = (1u64 << bits) - 1;
        for (v, b) in values.iter().zip(back.iter()) {
            prop_assert_eq!((*v as u64) & mask, *b as u64);
        }
    }

    #[test]
    fn signed_decoding_sign_extends(bits in 2usize..=32, values in prop::collection::vec(any::<i32>(), 1..32)) {
        let half = 1i64 << (bits - 1);
        let vals: Vec<i64> = values.iter().map(|&v| (v as i64).rem_euclid(2 * half) - half).collect();
        let mut out = vec![0u8; packed_len(vals.len(), bits)];
        encode_bits(&mut out, &vals, bits).unwrap();
        let mut back = vec![0i64; vals.len()];
        decode_bits(&mut back, &out, bits, true).unwrap();
        prop_assert_eq!(back, vals);
    }

    #[test]
    fn closest_v_has_requested_parity(w in 0..2 * Q, b in 0i64..2) {
        let c = closest_v(w, b);
        prop_assert!((0..2 * Q).contains(&c));
        prop_assert_eq!(help_rec(c), b);
        if help_rec(w) == b {
            prop_assert_eq!(c, w);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn reconciliation_tolerates_small_noise(
        v in canonical_poly(),
        noise in prop::collection::vec(-4096i64..=4096, 128),
        seed in any::<u64>()
    ) {
        let mut w = v.clone();
        w.add_noise(&noise);

        let mut rng = ChaChaRng::seed_from_u64(seed);
        let mut hints = [0u8; 128];
        help_recvec(&mut rng, &v, &mut hints);

        let mut k1 = [0u8; 32];
        let mut k2 = [0u8; 32];
        rec_vec(&mut k1, &v, &hints);
        rec_vec(&mut k2, &w, &hints);
        prop_assert_eq!(k1, k2);
    }
}
