//! Stream handle
//!
//! [`Rng`] pairs a key with a draw counter so callers can pull a sequence
//! of values without threading indices by hand. Draw `n` comes from the
//! child `split(key, n)`; the base key itself is never consumed.
//!
//! The handle is a plain value. Copying it copies the counter too, so the
//! copy replays the same values. To hand independent randomness to
//! another worker, fork it at an index unique to that worker:
//!
//! ```
//! use splitrng::Rng;
//!
//! let root = Rng::from_seed(7);
//! let mut workers: Vec<Rng> = (0..4).map(|id| root.fork(id)).collect();
//!
//! let first = workers[0].sample_uniform();
//! assert!((0.0..1.0).contains(&first));
//! ```
//!
//! Mutation goes through `&mut self`, so one handle cannot be drawn from
//! by two threads at once.

#[cfg(feature = "rand")]
use crate::bits::{bits32, bits64};
use crate::key::{Key, init_key};
use crate::sample::{self, SampleRange};
use crate::threefry::split;

/// Seed used by [`Rng::new`] and [`Default`].
///
/// Not part of the reproducibility contract: pass an explicit seed or key
/// whenever results must match across versions.
const DEFAULT_SEED: u32 = 0x9E37_79B9;

/// A key plus a monotonically advancing draw counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rng {
    key: Key,
    counter: u64,
}

impl Rng {
    /// Handle on a fixed, implementation-defined seed.
    pub const fn new() -> Self {
        Self::from_seed(DEFAULT_SEED)
    }

    /// Handle whose draws are children of `key`.
    pub const fn from_key(key: Key) -> Self {
        Self { key, counter: 0 }
    }

    /// Handle on `init_key(seed, 0)`.
    pub const fn from_seed(seed: u32) -> Self {
        Self::from_key(init_key(seed, 0))
    }

    /// The base key of this stream (not a per-draw child).
    ///
    /// Split it at a caller-chosen index to start a sub-stream elsewhere.
    #[inline]
    pub const fn rand_key(&self) -> Key {
        self.key
    }

    /// Number of draws taken so far.
    #[inline]
    pub const fn counter(&self) -> u64 {
        self.counter
    }

    /// Independent handle rooted at `split(rand_key(), idx)`.
    ///
    /// Does not advance `self`. Forking twice at the same index gives the
    /// same stream.
    #[inline]
    pub fn fork(&self, idx: u32) -> Rng {
        Rng::from_key(split(self.key, idx, 0))
    }

    /// Takes one step and returns that step's child key.
    ///
    /// The counter's low word is the split index and its high word the
    /// upper index, so the stream does not repeat after 2^32 draws.
    #[inline]
    pub fn next_key(&mut self) -> Key {
        let child = split(self.key, self.counter as u32, (self.counter >> 32) as u32);
        self.counter = self.counter.wrapping_add(1);
        child
    }

    /// Uniform integer in `[a, b)`. Stops the program if `a >= b`.
    #[inline]
    #[track_caller]
    pub fn sample_i32(&mut self, a: i32, b: i32) -> i32 {
        sample::sample_i32(self.next_key(), a, b)
    }

    /// Integer in `[a, b)` without rejection. **Biased**, see
    /// [`sample::sample_i32_biased`].
    #[inline]
    #[track_caller]
    pub fn sample_i32_biased(&mut self, a: i32, b: i32) -> i32 {
        sample::sample_i32_biased(self.next_key(), a, b)
    }

    /// Uniform integer in a pre-validated range.
    #[inline]
    pub fn sample_range(&mut self, range: SampleRange) -> i32 {
        sample::sample_range(self.next_key(), range)
    }

    /// Uniform float in `[0, 1)`.
    #[inline]
    pub fn sample_uniform(&mut self) -> f32 {
        sample::sample_uniform(self.next_key())
    }

    /// Fair coin.
    #[inline]
    pub fn sample_bool(&mut self) -> bool {
        sample::sample_bool(self.next_key())
    }

    /// Two independent uniform floats from a single step.
    #[inline]
    pub fn sample_2x_uniform(&mut self) -> (f32, f32) {
        sample::sample_2x_uniform(self.next_key())
    }
}

impl Default for Rng {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Key> for Rng {
    fn from(key: Key) -> Self {
        Rng::from_key(key)
    }
}

impl From<u32> for Rng {
    fn from(seed: u32) -> Self {
        Rng::from_seed(seed)
    }
}

#[cfg(feature = "rand")]
impl rand_core::RngCore for Rng {
    fn next_u32(&mut self) -> u32 {
        bits32(self.next_key())
    }

    fn next_u64(&mut self) -> u64 {
        bits64(self.next_key())
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        rand_core::impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

#[cfg(feature = "rand")]
impl rand_core::SeedableRng for Rng {
    /// Little-endian `seed` followed by little-endian `seed_upper`.
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        let lo = u32::from_le_bytes([seed[0], seed[1], seed[2], seed[3]]);
        let hi = u32::from_le_bytes([seed[4], seed[5], seed[6], seed[7]]);

        Rng::from_key(init_key(lo, hi))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_key_walks_children() {
        let mut rng = Rng::from_seed(3);
        let base = rng.rand_key();

        assert_eq!(rng.next_key(), split(base, 0, 0));
        assert_eq!(rng.next_key(), split(base, 1, 0));
        assert_eq!(rng.counter(), 2);
        assert_eq!(rng.rand_key(), base);
    }

    #[test]
    fn counter_high_word_feeds_upper_index() {
        let mut rng = Rng {
            key: init_key(1, 0),
            counter: (5u64 << 32) | 9,
        };

        assert_eq!(rng.next_key(), split(init_key(1, 0), 9, 5));
    }
}
