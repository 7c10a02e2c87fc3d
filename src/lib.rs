//! Splittable, counter-based random streams for parallel simulation
//!
//! This crate turns a 64-bit [`Key`] and an index into pseudo-random bits
//! with no shared state. It is meant for simulations where thousands of
//! entities, threads, or SIMD lanes each need their own reproducible
//! random stream and must not coordinate to get it.
//!
//! Everything is built on one primitive, [`split`], a 20-round
//! Threefry-2x32 permutation keyed by the parent key and fed the index as
//! its counter.
//!
//! # Module overview
//!
//! - `key`
//!   The [`Key`] value type, root-key construction ([`init_key`]), and a
//!   stable hex text form for storing seeds.
//!
//! - `threefry`
//!   [`split`] and its multi-lane form [`split_lanes`], which is
//!   bit-identical to the scalar path.
//!
//! - `bits`
//!   [`bits32`] and [`bits64`]: raw words from a mixed key.
//!
//! - `sample`
//!   Bounded integers (unbiased [`sample_i32`] and explicitly biased
//!   [`sample_i32_biased`]), floats in `[0, 1)`, booleans, and paired
//!   floats.
//!
//! - `stream`
//!   [`Rng`], a key plus a draw counter, for callers that want a sequence
//!   of values without managing indices. With the `rand` feature it also
//!   implements `rand_core::RngCore` and `SeedableRng`.
//!
//! # Splitting discipline
//!
//! There is no global generator. Each execution context gets its own key
//! by splitting a parent key at an index unique to that context (worker
//! id, entity id, timestep):
//!
//! ```
//! use splitrng::{init_key, sample_i32, split};
//!
//! let root = init_key(42, 0);
//! let entity_17 = split(root, 17, 0);
//! let tick_3 = split(entity_17, 3, 0);
//!
//! let roll = sample_i32(tick_3, 1, 7);
//! assert!((1..7).contains(&roll));
//! ```
//!
//! # Design goals
//!
//! - No heap allocations and no locks in the core
//! - Identical results on every target and execution path
//! - Programmer errors (empty ranges) stop the program at the call site
//!
//! Not a cryptographic generator: the permutation is chosen for
//! statistical quality and speed.

mod bits;
mod error;
mod fatal;
mod key;
mod sample;
mod stream;
mod threefry;

pub use bits::{bits32, bits64};
pub use error::{KeyParseError, RangeError};
pub use key::{Key, init_key};
pub use sample::{
    SampleRange, bits_to_float01, sample_2x_uniform, sample_bool, sample_i32, sample_i32_biased,
    sample_range, sample_range_biased, sample_uniform,
};
pub use stream::Rng;
pub use threefry::{split, split_lanes};
