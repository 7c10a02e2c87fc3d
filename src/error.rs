//! Error types
//!
//! The sampling core has no recoverable failure mode: precondition
//! violations stop the program instead. The types here cover the two
//! places where input is validated ahead of time and the caller may want
//! to handle a bad value: building a [`crate::SampleRange`] and parsing a
//! [`crate::Key`] from text.

use thiserror::Error;

/// Invalid bounds for a half-open sampling range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeError {
    /// `low >= high`, so `[low, high)` contains no values.
    #[error("empty sample range [{low}, {high}): low must be less than high")]
    Empty { low: i32, high: i32 },
}

/// Failure to parse a [`crate::Key`] from its hex text form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum KeyParseError {
    /// Wrong number of hex digits (16 expected, separators excluded).
    #[error("expected 16 hex digits, found {0}")]
    Length(usize),
    /// A character that is neither a hex digit nor `_`.
    #[error("invalid hex digit {found:?} at position {pos}")]
    Digit { pos: usize, found: char },
}
