//! Discrete Gaussian noise
//!
//! Constant-time cumulative-distribution-table sampler. Each sample consumes
//! 16 bytes from the caller's RNG: the low 127 bits form a uniform `u`, the
//! top bit is the sign. The magnitude is the number of tail-table entries
//! strictly above `u`, counted over the whole table with no data-dependent
//! branch or index.
//!
//! Outputs are plain signed integers; callers reduce them into the ring with
//! `addq` (see [`super::polynomial::Poly::add_noise`]).

use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use sparrow_internal::endian::u128_from_le_bytes;

mod tables;

use tables::{LARGE_CDT, LARGE_SIGMA, SMALL_CDT, SMALL_SIGMA};

/// Bytes drawn from the RNG per sample
pub const GAUSS_SAMPLE_BYTES: usize = 16;

/// Width tier of the noise distribution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GaussianTier {
    /// Secrets and key-generation error
    Small,
    /// Encapsulation noise
    Large,
}

impl GaussianTier {
    fn table(self) -> &'static [u128] {
        match self {
            GaussianTier::Small => &SMALL_CDT,
            GaussianTier::Large => &LARGE_CDT,
        }
    }

    /// Standard deviation of the tier
    pub fn sigma(self) -> u32 {
        match self {
            GaussianTier::Small => SMALL_SIGMA,
            GaussianTier::Large => LARGE_SIGMA,
        }
    }

    /// Largest magnitude the tier can produce
    pub fn max_magnitude(self) -> i64 {
        self.table().len() as i64
    }
}

#[inline(always)]
fn sample_one(table: &[u128], x: u128) -> i64 {
    let u = x & (u128::MAX >> 1);
    let sign = -((x >> 127) as i64);

    let mut mag = 0i64;
    for &t in table {
        // top bit of u - t is set exactly when u < t
        mag += (u.wrapping_sub(t) >> 127) as i64;
    }

    (mag ^ sign) - sign
}

/// Fills `out` with independent samples of the given tier
pub fn sample<R: RngCore + CryptoRng>(tier: GaussianTier, rng: &mut R, out: &mut [i64]) {
    let table = tier.table();
    let mut buf = [0u8; GAUSS_SAMPLE_BYTES];

    for v in out.iter_mut() {
        rng.fill_bytes(&mut buf);
        *v = sample_one(table, u128_from_le_bytes(&buf));
    }

    buf.zeroize();
}

/// Small-tier noise (sigma = 4)
pub fn sample_small<R: RngCore + CryptoRng>(rng: &mut R, out: &mut [i64]) {
    sample(GaussianTier::Small, rng, out)
}

/// Large-tier noise (sigma = 512)
pub fn sample_large<R: RngCore + CryptoRng>(rng: &mut R, out: &mut [i64]) {
    sample(GaussianTier::Large, rng, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaChaRng;

    /// RNG that repeats a single byte
    struct ConstRng(u8);

    impl RngCore for ConstRng {
        fn next_u32(&mut self) -> u32 {
            u32::from_le_bytes([self.0; 4])
        }
        fn next_u64(&mut self) -> u64 {
            u64::from_le_bytes([self.0; 8])
        }
        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(self.0);
        }
        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    impl CryptoRng for ConstRng {}

    fn moments(v: &[i64]) -> (f64, f64) {
        let n = v.len() as f64;
        let mean = v.iter().map(|&x| x as f64).sum::<f64>() / n;
        let var = v.iter().map(|&x| (x as f64 - mean).powi(2)).sum::<f64>() / (n - 1.0);
        (mean, var)
    }

    #[test]
    fn test_table_extremes() {
        // u = 0 lies below every tail entry: the largest magnitude
        let mut out = [0i64; 2];
        sample_small(&mut ConstRng(0x00), &mut out);
        assert_eq!(out, [38, 38]);
        sample_large(&mut ConstRng(0x00), &mut out);
        assert_eq!(out, [4842, 4842]);

        // u = 2^127 - 1 lies above every entry; negative zero folds to zero
        sample_small(&mut ConstRng(0xFF), &mut out);
        assert_eq!(out, [0, 0]);
    }

    #[test]
    fn test_tables_are_decreasing() {
        for tier in [GaussianTier::Small, GaussianTier::Large] {
            let t = tier.table();
            assert!(t.windows(2).all(|w| w[0] > w[1]));
            assert!(t[0] < 1u128 << 127);
            assert!(*t.last().unwrap() > 0);
        }
        assert_eq!(GaussianTier::Small.max_magnitude(), 38);
        assert_eq!(GaussianTier::Large.sigma(), 512);
    }

    #[test]
    fn test_small_moments() {
        let mut rng = ChaChaRng::seed_from_u64(42);
        let mut v = [0i64; 20_000];
        sample_small(&mut rng, &mut v);

        let (mean, var) = moments(&v);
        assert!(mean.abs() < 0.2, "mean {}", mean);
        assert!((var / 16.0 - 1.0).abs() < 0.1, "variance {}", var);
        assert!(v.iter().all(|&x| x.abs() <= 38));
    }

    #[test]
    fn test_large_moments() {
        let mut rng = ChaChaRng::seed_from_u64(43);
        let mut v = [0i64; 8192];
        sample_large(&mut rng, &mut v);

        let (mean, var) = moments(&v);
        assert!(mean.abs() < 40.0, "mean {}", mean);
        assert!((var / (512.0 * 512.0) - 1.0).abs() < 0.1, "variance {}", var);
    }

    #[test]
    fn test_small_is_symmetric() {
        let mut rng = ChaChaRng::seed_from_u64(44);
        let mut v = [0i64; 20_000];
        sample(GaussianTier::Small, &mut rng, &mut v);

        let pos = v.iter().filter(|&&x| x > 0).count() as f64;
        let neg = v.iter().filter(|&&x| x < 0).count() as f64;
        // Both halves are close to 45% of the mass
        assert!((pos - neg).abs() / (pos + neg) < 0.05);
    }

    #[test]
    fn test_consumes_sixteen_bytes_per_sample() {
        let mut a = ChaChaRng::seed_from_u64(1);
        let mut b = ChaChaRng::seed_from_u64(1);
        let mut out = [0i64; 3];
        sample_small(&mut a, &mut out);
        let mut skip = [0u8; 3 * GAUSS_SAMPLE_BYTES];
        b.fill_bytes(&mut skip);
        assert_eq!(a.next_u64(), b.next_u64());
    }
}
