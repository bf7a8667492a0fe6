//! ntt.rs - Negacyclic Number Theoretic Transform over Z_Q[x]/(x^128 + 1)
//!
//! Iterative merge-recursion with doubling strides and a fixed table of 127
//! twiddle factors in Montgomery form.
//!
//! ## Domains
//! - `forward_transform` leaves values unreduced, bounded by about 3.3Q in
//!   magnitude for canonical input.
//! - `inverse_transform` normalizes by `MONT_NI` and returns canonical values,
//!   but the round trip `inverse(forward(v))` yields `v * R`.
//! - A pointwise product carries a factor R^-1, so
//!   `inverse(pointwise(forward(a), forward(b)))` is exactly `a * b`.
//!
//! The typed wrappers in [`super::polynomial`] keep these domains apart.

use super::mont::{cadd, csub, mulq, normalize_inverse};
use super::params::{MONT_RR, N, Q};

/// Roots of unity, Montgomery form, in butterfly order
#[rustfmt::skip]
pub(crate) static TWIDDLES: [i64; N - 1] = [
    121164, 146817, 218404, 27259, 186478, 162117,
    169434, 243759, 231077, 72852, 23347, 1667,
    214564, 138579, 240683, 170236, 28814, 127897,
    26868, 162847, 216494, 91142, 63600, 8967,
    163946, 227655, 106837, 140182, 240492, 159440,
    43269, 23795, 127388, 69726, 96716, 253383,
    176768, 110461, 238018, 107586, 41969, 63147,
    143834, 113366, 168252, 47282, 117111, 134036,
    229844, 118146, 33720, 86003, 121439, 189344,
    118230, 129395, 44898, 173042, 184715, 231336,
    197766, 70204, 31141, 147708, 11664, 223999,
    185309, 157126, 218964, 37184, 201553, 215109,
    251236, 37418, 213068, 208658, 206646, 78796,
    260162, 141853, 159005, 196109, 247322, 12089,
    126019, 172645, 184112, 218317, 233133, 136824,
    24016, 57605, 254233, 248805, 85133, 258357,
    147562, 41350, 34579, 19927, 260023, 106494,
    75102, 217822, 58423, 108650, 256930, 176204,
    52977, 13224, 102798, 79675, 159748, 93993,
    211692, 69063, 107525, 209690, 183925, 62503,
    116598, 31112, 56446, 94178, 5849, 7068,
    180755,
];

/// Forward negacyclic NTT, in place
pub fn forward_transform(v: &mut [i64; N]) {
    let mut w = 0;
    let mut k = 1;
    let mut j = N >> 1;

    while j > 0 {
        let mut p0 = 0;
        for _ in 0..k {
            let z = TWIDDLES[w];
            w += 1;
            for t in p0..p0 + j {
                let x = v[t];
                let y = mulq(v[t + j], z);
                v[t] = x + y;
                v[t + j] = x - y;
            }
            p0 += j << 1;
        }
        k <<= 1;
        j >>= 1;
    }
}

/// Inverse negacyclic NTT, in place, normalized by 1/(N * R)
pub fn inverse_transform(v: &mut [i64; N]) {
    let mut w = N - 2;
    let mut j = 1;
    let mut k = N >> 1;

    while k > 0 {
        let mut p0 = 0;
        for _ in 0..k {
            let z = TWIDDLES[w];
            w = w.wrapping_sub(1);
            for t in p0..p0 + j {
                let x = v[t];
                let y = v[t + j];
                v[t] = x + y;
                v[t + j] = mulq(y - x, z);
            }
            p0 += j << 1;
        }
        j <<= 1;
        k >>= 1;
    }

    for x in v.iter_mut() {
        *x = normalize_inverse(*x);
    }
}

/// r = a * c / R, canonical
pub fn scalar_multiply(r: &mut [i64; N], a: &[i64; N], c: i64) {
    for (ri, &ai) in r.iter_mut().zip(a.iter()) {
        *ri = cadd(mulq(ai, c), Q);
    }
}

/// r = a * b / R coefficient-wise, canonical
pub fn pointwise_multiply(r: &mut [i64; N], a: &[i64; N], b: &[i64; N]) {
    for i in 0..N {
        r[i] = cadd(mulq(a[i], b[i]), Q);
    }
}

/// r = a * b / R + r coefficient-wise; `r` must be canonical on entry
///
/// The accumulator is the output: `r` is read as the addend and overwritten
/// with the canonical sum, so `(out, a, b, acc)` with `out == acc` is this call.
pub fn pointwise_multiply_add(r: &mut [i64; N], a: &[i64; N], b: &[i64; N]) {
    for i in 0..N {
        r[i] = csub(cadd(mulq(a[i], b[i]), Q) + r[i], Q);
    }
}

/// Montgomery form of a canonical scalar, for use with `scalar_multiply`
#[inline]
pub fn scalar_to_mont(c: i64) -> i64 {
    cadd(mulq(c, MONT_RR), Q)
}

#[cfg(test)]
mod tests;
