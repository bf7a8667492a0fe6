//! Essential tests for the Number Theoretic Transform

use super::*;
use crate::poly::mont::from_mont;
use crate::poly::params::MONT_R;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;

fn random_canonical(rng: &mut ChaChaRng) -> [i64; N] {
    let mut v = [0i64; N];
    for x in v.iter_mut() {
        *x = rng.gen_range(0..Q);
    }
    v
}

fn random_small(rng: &mut ChaChaRng, bound: i64) -> [i64; N] {
    let mut v = [0i64; N];
    for x in v.iter_mut() {
        *x = rng.gen_range(-bound..=bound);
    }
    v
}

/// Direct negacyclic convolution modulo (Q, x^N + 1)
fn schoolbook(a: &[i64; N], b: &[i64; N]) -> [i64; N] {
    let mut c = [0i128; N];
    for i in 0..N {
        for j in 0..N {
            let p = a[i] as i128 * b[j] as i128;
            if i + j < N {
                c[i + j] += p;
            } else {
                c[i + j - N] -= p;
            }
        }
    }
    let mut r = [0i64; N];
    for i in 0..N {
        r[i] = c[i].rem_euclid(Q as i128) as i64;
    }
    r
}

#[test]
fn test_ntt_roundtrip_scales_by_r() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    for _ in 0..10 {
        let original = random_canonical(&mut rng);
        let mut v = original;

        forward_transform(&mut v);
        inverse_transform(&mut v);

        for i in 0..N {
            // Output is canonical and equal to original * R
            assert!(v[i] >= 0 && v[i] < Q);
            assert_eq!(from_mont(v[i]), original[i], "Roundtrip failed at coefficient {}", i);
        }
    }
}

#[test]
fn test_ntt_roundtrip_signed_input() {
    let mut rng = ChaChaRng::seed_from_u64(7);
    let original = random_small(&mut rng, 40);
    let mut v = original;

    forward_transform(&mut v);
    inverse_transform(&mut v);

    for i in 0..N {
        assert_eq!(from_mont(v[i]), original[i].rem_euclid(Q));
    }
}

/// Test NTT linearity property: NTT(a + b) = NTT(a) + NTT(b)
#[test]
fn test_ntt_linearity() {
    let mut rng = ChaChaRng::seed_from_u64(1);
    let a = random_canonical(&mut rng);
    let b = random_canonical(&mut rng);

    let mut sum = [0i64; N];
    for i in 0..N {
        sum[i] = (a[i] + b[i]) % Q;
    }

    let (mut na, mut nb, mut ns) = (a, b, sum);
    forward_transform(&mut na);
    forward_transform(&mut nb);
    forward_transform(&mut ns);

    for i in 0..N {
        assert_eq!(
            ns[i].rem_euclid(Q),
            (na[i] + nb[i]).rem_euclid(Q),
            "Linearity violation at coefficient {}",
            i
        );
    }
}

#[test]
fn test_pointwise_product_is_negacyclic_convolution() {
    let mut rng = ChaChaRng::seed_from_u64(3);
    for _ in 0..4 {
        let a = random_canonical(&mut rng);
        let b = random_small(&mut rng, 30);
        let expected = schoolbook(&a, &b);

        let (mut na, mut nb) = (a, b);
        forward_transform(&mut na);
        forward_transform(&mut nb);

        let mut r = [0i64; N];
        pointwise_multiply(&mut r, &na, &nb);
        inverse_transform(&mut r);
        assert_eq!(r, expected);

        // Multiply-add into a zero accumulator gives the same product
        let mut acc = [0i64; N];
        pointwise_multiply_add(&mut acc, &na, &nb);
        inverse_transform(&mut acc);
        assert_eq!(acc, expected);
    }
}

#[test]
fn test_x_times_x_pow_n_minus_1_wraps_negatively() {
    // x * x^(N-1) = x^N = -1
    let mut a = [0i64; N];
    let mut b = [0i64; N];
    a[1] = 1;
    b[N - 1] = 1;
    forward_transform(&mut a);
    forward_transform(&mut b);

    let mut r = [0i64; N];
    pointwise_multiply(&mut r, &a, &b);
    inverse_transform(&mut r);

    let mut expected = [0i64; N];
    expected[0] = Q - 1;
    assert_eq!(r, expected);
}

#[test]
fn test_forward_output_bound() {
    let mut v = [Q - 1; N];
    forward_transform(&mut v);
    let max = v.iter().map(|x| x.abs()).max().unwrap_or(0);
    assert!(max < 4 * Q, "forward transform grew to {}", max);
}

#[test]
fn test_scalar_multiply() {
    let mut rng = ChaChaRng::seed_from_u64(9);
    let a = random_canonical(&mut rng);

    // Scaling by R^2 / R = R lifts into Montgomery form; by R gives identity
    let mut r = [0i64; N];
    scalar_multiply(&mut r, &a, MONT_R);
    assert_eq!(r, a);

    scalar_multiply(&mut r, &a, scalar_to_mont(3));
    for i in 0..N {
        assert_eq!(r[i], (3 * a[i]) % Q);
    }
}

#[test]
fn test_twiddle_table_is_canonical() {
    assert_eq!(TWIDDLES.len(), 127);
    assert!(TWIDDLES.iter().all(|&z| z > 0 && z < Q));
}

#[test]
fn test_multiply_add_accumulates_in_place() {
    let mut rng = ChaChaRng::seed_from_u64(11);
    let mut na = random_canonical(&mut rng);
    let mut nb = random_canonical(&mut rng);
    forward_transform(&mut na);
    forward_transform(&mut nb);

    let mut prod = [0i64; N];
    pointwise_multiply(&mut prod, &na, &nb);

    // the accumulator doubles as the output
    let mut acc = prod;
    pointwise_multiply_add(&mut acc, &na, &nb);
    for i in 0..N {
        assert!((0..Q).contains(&acc[i]));
        assert_eq!(acc[i], (2 * prod[i]) % Q);
    }
}
