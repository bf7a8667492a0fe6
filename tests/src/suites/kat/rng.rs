// tests/src/suites/kat/rng.rs
//! Deterministic RNG reading a SHAKE256 output stream

use rand::{CryptoRng, Error, RngCore};
use sparrow_algorithms::xof::Shake256;

/// Byte stream `SHAKE256(seed)`, handed out in order
///
/// Only for reproducing vectors. It also counts the bytes handed out so a
/// vector can pin how much randomness an exchange consumes.
pub struct ShakeRng {
    xof: Shake256,
    drawn: u64,
}

impl ShakeRng {
    pub fn new(seed: &[u8]) -> Self {
        Self {
            xof: Shake256::with_input(seed),
            drawn: 0,
        }
    }

    /// Bytes drawn so far
    pub fn bytes_drawn(&self) -> u64 {
        self.drawn
    }
}

impl RngCore for ShakeRng {
    fn next_u32(&mut self) -> u32 {
        let mut b = [0u8; 4];
        self.fill_bytes(&mut b);
        u32::from_le_bytes(b)
    }

    fn next_u64(&mut self) -> u64 {
        let mut b = [0u8; 8];
        self.fill_bytes(&mut b);
        u64::from_le_bytes(b)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.xof.squeeze_bytes(dest);
        self.drawn += dest.len() as u64;
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl CryptoRng for ShakeRng {}

#[cfg(test)]
mod tests {
    use super::*;
    use sparrow_algorithms::xof::shake256;

    #[test]
    fn stream_is_independent_of_chunking() {
        let seed: Vec<u8> = (0u8..48).collect();
        let mut whole = [0u8; 300];
        shake256(&mut whole, &seed);

        let mut rng = ShakeRng::new(&seed);
        let mut parts = [0u8; 300];
        rng.fill_bytes(&mut parts[..16]);
        rng.fill_bytes(&mut parts[16..150]);
        rng.fill_bytes(&mut parts[150..]);
        assert_eq!(parts, whole);
        assert_eq!(rng.bytes_drawn(), 300);
    }

    #[test]
    fn words_are_little_endian() {
        let mut a = ShakeRng::new(b"w");
        let mut b = ShakeRng::new(b"w");
        let mut bytes = [0u8; 8];
        b.fill_bytes(&mut bytes);
        assert_eq!(a.next_u64(), u64::from_le_bytes(bytes));
    }
}
