//! Raw random words from a key.
//!
//! A key that came out of [`crate::split`] is already a mixed position in
//! the substream tree, so extracting bits just selects its words. Root keys
//! from [`crate::init_key`] are not mixed; split them before extracting.

use crate::key::Key;

/// One uniform 32-bit word: the key's `a` word.
#[inline]
pub const fn bits32(key: Key) -> u32 {
    key.a
}

/// One uniform 64-bit word: `a` in the high half, `b` in the low half.
#[inline]
pub const fn bits64(key: Key) -> u64 {
    key.to_u64()
}
