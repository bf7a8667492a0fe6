//! SHAKE256 extendable output function
//!
//! FIPS PUB 202 SHAKE256: Keccak-f[1600] with a 136-byte rate and the
//! `0x1F ... 0x80` XOF padding. Input bytes are XORed straight into the
//! state lanes, so no separate block buffer is kept.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::ExtendableOutputFunction;
use crate::error::{Error, Result};
#[cfg(feature = "alloc")]
use crate::error::validate;

// SHAKE constants
const KECCAK_ROUNDS: usize = 24;
const KECCAK_STATE_SIZE: usize = 25; // 5x5 of 64-bit words

/// SHAKE256 rate in bytes: (1600 - 2*256) / 8
pub const SHAKE256_RATE: usize = 136;

const DOMAIN_PAD: u8 = 0x1F;

// Round constants for Keccak
const RC: [u64; KECCAK_ROUNDS] = [
    0x0000000000000001, 0x0000000000008082, 0x800000000000808A, 0x8000000080008000,
    0x000000000000808B, 0x0000000080000001, 0x8000000080008081, 0x8000000000008009,
    0x000000000000008A, 0x0000000000000088, 0x0000000080008009, 0x000000008000000A,
    0x000000008000808B, 0x800000000000008B, 0x8000000000008089, 0x8000000000008003,
    0x8000000000008002, 0x8000000000000080, 0x000000000000800A, 0x800000008000000A,
    0x8000000080008081, 0x8000000000008080, 0x0000000080000001, 0x8000000080008008,
];

// Rotation offsets
const RHO: [u32; 24] = [
    1, 3, 6, 10, 15, 21, 28, 36, 45, 55, 2, 14,
    27, 41, 56, 8, 25, 43, 62, 18, 39, 61, 20, 44,
];

// Mapping from index positions to x,y coordinates in the state array
const PI: [usize; 24] = [
    10, 7, 11, 17, 18, 3, 5, 16, 8, 21, 24, 4,
    15, 23, 19, 13, 12, 2, 20, 14, 22, 9, 6, 1,
];

/// Performs a full Keccak-f[1600] permutation on the state
fn keccak_f1600(state: &mut [u64; KECCAK_STATE_SIZE]) {
    let mut c = [0u64; 5];
    let mut b = [0u64; KECCAK_STATE_SIZE];

    for &rc in RC.iter() {
        // Theta
        for x in 0..5 {
            c[x] = state[x] ^ state[x + 5] ^ state[x + 10] ^ state[x + 15] ^ state[x + 20];
        }
        for x in 0..5 {
            let d = c[(x + 4) % 5] ^ c[(x + 1) % 5].rotate_left(1);
            for y in 0..5 {
                state[x + 5 * y] ^= d;
            }
        }

        // Rho and Pi
        let mut x = 1;
        let mut y = 0;
        b[0] = state[0];
        for i in 0..24 {
            b[PI[i]] = state[x + 5 * y].rotate_left(RHO[i]);
            let temp = y;
            y = (2 * x + 3 * y) % 5;
            x = temp;
        }

        // Chi
        for y in 0..5 {
            for x in 0..5 {
                let idx = x + 5 * y;
                state[idx] = b[idx] ^ ((!b[(x + 1) % 5 + 5 * y]) & b[(x + 2) % 5 + 5 * y]);
            }
        }

        // Iota
        state[0] ^= rc;
    }

    c.zeroize();
    b.zeroize();
}

/// SHAKE-256 extendable output function
///
/// The sponge state is zeroized on drop: it is keyed by secret material
/// when hashing reconciliation seeds and shared-key inputs.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Shake256 {
    state: [u64; KECCAK_STATE_SIZE],
    /// Byte offset inside the current rate block
    pos: usize,
    squeezing: bool,
}

impl Shake256 {
    fn init() -> Self {
        Shake256 {
            state: [0u64; KECCAK_STATE_SIZE],
            pos: 0,
            squeezing: false,
        }
    }

    #[inline(always)]
    fn xor_byte(&mut self, pos: usize, byte: u8) {
        self.state[pos / 8] ^= (byte as u64) << (8 * (pos % 8));
    }

    #[inline(always)]
    fn read_byte(&self, pos: usize) -> u8 {
        (self.state[pos / 8] >> (8 * (pos % 8))) as u8
    }

    /// Creates a sponge that has already absorbed `data`
    pub fn with_input(data: &[u8]) -> Self {
        let mut xof = Self::init();
        xof.absorb_unchecked(data);
        xof
    }

    fn absorb_unchecked(&mut self, data: &[u8]) {
        for &byte in data {
            self.xor_byte(self.pos, byte);
            self.pos += 1;
            if self.pos == SHAKE256_RATE {
                keccak_f1600(&mut self.state);
                self.pos = 0;
            }
        }
    }

    fn pad_unchecked(&mut self) {
        if self.squeezing {
            return;
        }
        self.xor_byte(self.pos, DOMAIN_PAD);
        self.xor_byte(SHAKE256_RATE - 1, 0x80);
        keccak_f1600(&mut self.state);
        self.pos = 0;
        self.squeezing = true;
    }

    /// Squeezes into `output`, padding first if still absorbing
    ///
    /// Infallible counterpart of [`ExtendableOutputFunction::squeeze`] for
    /// fixed-size internal buffers, where an empty request is simply a no-op.
    pub fn squeeze_bytes(&mut self, output: &mut [u8]) {
        self.pad_unchecked();
        for out in output.iter_mut() {
            if self.pos == SHAKE256_RATE {
                keccak_f1600(&mut self.state);
                self.pos = 0;
            }
            *out = self.read_byte(self.pos);
            self.pos += 1;
        }
    }
}

impl ExtendableOutputFunction for Shake256 {
    fn new() -> Self {
        Self::init()
    }

    fn absorb(&mut self, data: &[u8]) -> Result<()> {
        if self.squeezing {
            return Err(Error::xof_padded());
        }
        self.absorb_unchecked(data);
        Ok(())
    }

    fn pad(&mut self) -> Result<()> {
        self.pad_unchecked();
        Ok(())
    }

    fn squeeze(&mut self, output: &mut [u8]) -> Result<()> {
        self.squeeze_bytes(output);
        Ok(())
    }

    #[cfg(feature = "alloc")]
    fn squeeze_into_vec(&mut self, len: usize) -> Result<Vec<u8>> {
        validate::parameter(
            len > 0,
            "output_length",
            "Output length must be greater than 0"
        )?;

        let mut v = alloc::vec![0u8; len];
        self.squeeze_bytes(&mut v);
        Ok(v)
    }

    fn reset(&mut self) {
        self.zeroize();
    }

    fn security_level() -> usize {
        256
    }
}

/// One-shot SHAKE256: fills `out` with the XOF stream of `data`
pub fn shake256(out: &mut [u8], data: &[u8]) {
    let mut xof = Shake256::with_input(data);
    xof.squeeze_bytes(out);
}

#[cfg(test)]
mod tests;
