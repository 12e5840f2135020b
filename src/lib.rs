//! MT19937, the 32-bit Mersenne Twister.
//!
//! A deterministic generator: the same seed always gives the same sequence of
//! words, and the derived `u64`, `f64` and `f32` outputs are built from those
//! words. It is **not** cryptographically secure.
//!
//! ```
//! use mt19937::MT19937;
//!
//! let mut mt = MT19937::seeded(1);
//! assert_eq!(mt.next_u32(), 1791095845);
//! assert!(mt.next_f64() <= 1.0);
//! ```
#![allow(clippy::unreadable_literal, clippy::excessive_precision)]

pub mod prng;
pub mod utils;

pub use crate::prng::mt19937::MT19937;
pub use crate::prng::{Prng, SeedBits};
pub use crate::utils::bytes::ByteStream;
pub use crate::utils::errors::{Error, Result};
