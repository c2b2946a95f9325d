//! Seedable random source for all generators.
//!
//! xoshiro128** over four 32-bit words, initialized from a single u32 seed
//! via splitmix32. The exact draw semantics of the helpers below are part of
//! the determinism contract: a generator that consumes one `rand_float` where
//! another consumed `rand_int` produces a different stream from then on, so
//! helpers never consume more than one `next_u32` per draw.
//!
//! The type also implements [`rand::RngCore`]/[`rand::SeedableRng`] so tests
//! and fuzzing harnesses can treat it as an ordinary `rand` generator.

use rand::{Error, RngCore, SeedableRng};

/// Deterministic xoshiro128** generator with tracker-oriented draw helpers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenRng {
    state: [u32; 4],
}

#[inline]
fn rotl(x: u32, k: u32) -> u32 {
    x.rotate_left(k)
}

impl GenRng {
    /// Create a generator with the conventional default seed.
    pub fn new() -> Self {
        let mut rng = Self { state: [0; 4] };
        rng.seed(12345);
        rng
    }

    /// Reset all state as a pure function of `seed`. Two equal seeds produce
    /// identical output sequences forever after.
    pub fn seed(&mut self, seed: u32) {
        // splitmix32 to spread a single seed across the four state words
        let mut s = seed;
        for word in &mut self.state {
            s = s.wrapping_add(0x9e37_79b9);
            let mut z = s;
            z = (z ^ (z >> 16)).wrapping_mul(0x85eb_ca6b);
            z = (z ^ (z >> 13)).wrapping_mul(0xc2b2_ae35);
            z ^= z >> 16;
            *word = z;
        }
    }

    /// Next 32 pseudo-random bits.
    pub fn next(&mut self) -> u32 {
        let result = rotl(self.state[1].wrapping_mul(5), 7).wrapping_mul(9);
        let t = self.state[1] << 9;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = rotl(self.state[3], 11);
        result
    }

    /// Uniform integer in `[min, max]` inclusive. Returns `min` unmodified
    /// when `min >= max`, so a degenerate or inverted range never divides by
    /// zero.
    pub fn rand_int(&mut self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        let range = (max - min + 1) as u32;
        min + (self.next() % range) as i32
    }

    /// Uniform float in `[0, 1)` built from the top 24 bits of one draw.
    pub fn rand_float(&mut self) -> f32 {
        (self.next() >> 8) as f32 / (1u32 << 24) as f32
    }

    /// Index chosen proportionally to per-entry non-negative weights.
    /// Returns 0 when the weight sum is not positive; the last index absorbs
    /// float accumulation error.
    pub fn weighted_pick(&mut self, weights: &[f32]) -> usize {
        let total: f32 = weights.iter().sum();
        if total <= 0.0 {
            return 0;
        }
        let r = self.rand_float() * total;
        let mut accum = 0.0f32;
        for (i, w) in weights.iter().enumerate() {
            accum += w;
            if r < accum {
                return i;
            }
        }
        weights.len() - 1
    }

    /// Uniformly chosen element, or 0 when the slice is empty.
    pub fn pick(&mut self, values: &[u8]) -> u8 {
        if values.is_empty() {
            return 0;
        }
        values[self.rand_int(0, values.len() as i32 - 1) as usize]
    }

    /// In-place Fisher-Yates shuffle; every permutation equally likely.
    pub fn shuffle<T>(&mut self, values: &mut [T]) {
        for i in (1..values.len()).rev() {
            let j = self.rand_int(0, i as i32) as usize;
            values.swap(i, j);
        }
    }
}

impl Default for GenRng {
    fn default() -> Self {
        Self::new()
    }
}

impl RngCore for GenRng {
    fn next_u32(&mut self) -> u32 {
        self.next()
    }

    fn next_u64(&mut self) -> u64 {
        let lo = self.next() as u64;
        let hi = self.next() as u64;
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for GenRng {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        let mut rng = Self { state: [0; 4] };
        rng.seed(u32::from_le_bytes(seed));
        rng
    }
}
