//! Samplers over a single key.
//!
//! Every function here is pure: it reads one key (and, for the rare
//! rejection retries and for paired draws, children of that key) and
//! returns a value. Nothing allocates and nothing is shared, so these can
//! run from any number of threads or lanes at once.
//!
//! # Bounded integers
//!
//! [`sample_i32`] uses Lemire's multiply-high method with rejection
//! ("Fast Random Number Generation in an Interval", algorithm 5). For a
//! span `s`, the high word of the 64-bit product `x * s` lands in `[0, s)`.
//! It is exactly uniform once the draws whose low word falls below
//! `2^32 mod s` are thrown away. For small spans those draws are rare;
//! even for the worst spans fewer than half of all words are rejected.
//!
//! [`sample_i32_biased`] skips the rejection step. Its bias is at most
//! `s / 2^32`, which is fine for things like jitter, but it is a separate
//! function and never stands in for the exact one.

use crate::bits::bits32;
use crate::error::RangeError;
use crate::fatal::fatal;
use crate::key::Key;
use crate::threefry::split;

/// A non-empty half-open integer range `[low, high)`.
///
/// Building one validates the bounds, so the range samplers that take a
/// `SampleRange` cannot fail. Use this when bounds come from outside the
/// program (configuration, scenario files) and should be rejected with an
/// error rather than a crash.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SampleRange {
    low: i32,
    high: i32,
}

impl SampleRange {
    /// Validates `low < high`.
    pub const fn new(low: i32, high: i32) -> Result<Self, RangeError> {
        if low < high {
            Ok(Self { low, high })
        } else {
            Err(RangeError::Empty { low, high })
        }
    }

    /// Inclusive lower bound.
    pub const fn low(self) -> i32 {
        self.low
    }

    /// Exclusive upper bound.
    pub const fn high(self) -> i32 {
        self.high
    }

    /// Number of values in the range. Never zero; `[i32::MIN, i32::MAX)`
    /// gives `u32::MAX`.
    pub const fn span(self) -> u32 {
        self.high.wrapping_sub(self.low) as u32
    }
}

impl TryFrom<core::ops::Range<i32>> for SampleRange {
    type Error = RangeError;

    fn try_from(r: core::ops::Range<i32>) -> Result<Self, Self::Error> {
        SampleRange::new(r.start, r.end)
    }
}

/// Validates `[a, b)` or stops the program, blaming the caller.
#[inline]
#[track_caller]
fn require_range(op: &str, a: i32, b: i32) -> SampleRange {
    match SampleRange::new(a, b) {
        Ok(range) => range,
        Err(e) => fatal!("{op}: {e}"),
    }
}

/// 32x32 -> 64 multiply, returned as `(low word, high word)`.
#[inline(always)]
const fn mul_wide(x: u32, s: u32) -> (u32, u32) {
    let m = x as u64 * s as u64;
    (m as u32, (m >> 32) as u32)
}

/// Uniform integer in `[a, b)`.
///
/// Exactly unbiased for every span. `a >= b` is a programmer error and
/// stops the program with the caller's location.
#[inline]
#[track_caller]
pub fn sample_i32(key: Key, a: i32, b: i32) -> i32 {
    sample_range(key, require_range("sample_i32", a, b))
}

/// Integer in `[a, b)` without rejection. **Biased.**
///
/// The probability of any value deviates from `1 / s` by at most `1 / 2^32`
/// (total bias bounded by `s / 2^32`). Cheaper than [`sample_i32`] and
/// branch-free; use it only where that bias is acceptable. `a >= b` stops
/// the program.
#[inline]
#[track_caller]
pub fn sample_i32_biased(key: Key, a: i32, b: i32) -> i32 {
    sample_range_biased(key, require_range("sample_i32_biased", a, b))
}

/// Uniform integer in a pre-validated range. Unbiased.
///
/// When a draw is rejected, retry `n` (counting from 0) takes its word
/// from `split(key, n, 0)`. Each retry reads a fresh child, so the loop
/// ends with probability 1. With `t = 2^32 mod s`, a draw is rejected with
/// probability `t / 2^32` and the expected number of retries is
/// `t / (2^32 - t)`. Since `t < 2^31`, that is always below 1.
pub fn sample_range(key: Key, range: SampleRange) -> i32 {
    let s = range.span();
    let (mut l, mut h) = mul_wide(bits32(key), s);

    if l < s {
        // 2^32 mod s, computed in 32 bits as (2^32 - s) mod s.
        let t = s.wrapping_neg() % s;
        let mut attempt = 0u32;

        while l < t {
            tracing::trace!(attempt, span = s, "rejected biased draw");

            (l, h) = mul_wide(bits32(split(key, attempt, 0)), s);
            attempt = attempt.wrapping_add(1);
        }
    }

    range.low.wrapping_add(h as i32)
}

/// Integer in a pre-validated range without rejection. **Biased**, see
/// [`sample_i32_biased`].
#[inline]
pub fn sample_range_biased(key: Key, range: SampleRange) -> i32 {
    let (_, h) = mul_wide(bits32(key), range.span());
    range.low.wrapping_add(h as i32)
}

/// Maps 32 random bits to a float in `[0, 1)`.
///
/// The top 23 bits become the mantissa of a float in `[1, 2)`, and 1 is
/// subtracted. Every result is a multiple of `2^-23`, and the largest is
/// `1 - 2^-23`, so 1.0 is never produced.
#[inline]
pub fn bits_to_float01(rand_bits: u32) -> f32 {
    f32::from_bits(0x3F80_0000 | (rand_bits >> 9)) - 1.0
}

/// Uniform float in `[0, 1)`.
#[inline]
pub fn sample_uniform(key: Key) -> f32 {
    bits_to_float01(bits32(key))
}

/// Fair coin from the lowest bit.
#[inline]
pub fn sample_bool(key: Key) -> bool {
    bits32(key) & 1 == 1
}

/// Two independent uniform floats in `[0, 1)`.
///
/// The values come from the children at index 0 and index 1, never from
/// two halves of the same word.
#[inline]
pub fn sample_2x_uniform(key: Key) -> (f32, f32) {
    (
        sample_uniform(split(key, 0, 0)),
        sample_uniform(split(key, 1, 0)),
    )
}
