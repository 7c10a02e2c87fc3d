//! Key type
//!
//! A [`Key`] names one node in an infinite tree of random substreams.
//! It is a plain 64-bit value made of two 32-bit words, freely copied and
//! compared bitwise. Keys never carry hidden state: the same key always
//! produces the same children and the same samples.
//!
//! Keys have a stable text form (16 lowercase hex digits, word `a` first)
//! so that seeds can be written into configuration files and simulation
//! reports, and parsed back with [`str::parse`].

use core::fmt;
use core::str::FromStr;

use crate::error::KeyParseError;

/// Position in the substream tree.
///
/// Construct a root key with [`init_key`] (or [`Key::new`]) and derive
/// children with [`crate::split`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Key {
    /// First word. Used as the 32-bit output word and as the high half of
    /// the 64-bit output.
    pub a: u32,
    /// Second word.
    pub b: u32,
}

impl Key {
    /// Builds a key from its two words.
    #[inline]
    pub const fn new(a: u32, b: u32) -> Self {
        Self { a, b }
    }

    /// Returns the two words as `(a, b)`.
    #[inline]
    pub const fn words(self) -> (u32, u32) {
        (self.a, self.b)
    }

    /// Packs the key into a `u64`, with `a` as the high half.
    #[inline]
    pub const fn to_u64(self) -> u64 {
        ((self.a as u64) << 32) | self.b as u64
    }

    /// Inverse of [`Key::to_u64`].
    #[inline]
    pub const fn from_u64(v: u64) -> Self {
        Self {
            a: (v >> 32) as u32,
            b: v as u32,
        }
    }

    /// Derives the child key at index `idx`. Same as `split(self, idx, 0)`.
    #[inline]
    pub fn split(self, idx: u32) -> Self {
        crate::threefry::split(self, idx, 0)
    }

    /// Derives the child key at the index pair `(idx, idx_upper)`.
    #[inline]
    pub fn split2(self, idx: u32, idx_upper: u32) -> Self {
        crate::threefry::split(self, idx, idx_upper)
    }
}

/// Builds a root key directly from seed words.
///
/// No mixing happens here; the words are placed as-is and mixing happens
/// on the first split. Draw from children of the returned key, not from
/// the key itself.
#[inline]
pub const fn init_key(seed: u32, seed_upper: u32) -> Key {
    Key {
        a: seed,
        b: seed_upper,
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}{:08x}", self.a, self.b)
    }
}

impl FromStr for Key {
    type Err = KeyParseError;

    /// Parses 16 hex digits, optionally prefixed by `0x` and with `_`
    /// separators anywhere (`0xdeadbeef_00000001`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);

        let digits = || s.chars().filter(|&c| c != '_');

        let len = digits().count();
        if len != 16 {
            return Err(KeyParseError::Length(len));
        }

        let mut v = 0u64;
        for (pos, c) in digits().enumerate() {
            let nibble = c
                .to_digit(16)
                .ok_or(KeyParseError::Digit { pos, found: c })?;
            v = (v << 4) | u64::from(nibble);
        }

        Ok(Key::from_u64(v))
    }
}

impl From<u64> for Key {
    fn from(v: u64) -> Self {
        Key::from_u64(v)
    }
}

impl From<Key> for u64 {
    fn from(k: Key) -> Self {
        k.to_u64()
    }
}
