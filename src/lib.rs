//! # rebi
//!
//! Exact arbitrary precision integer arithmetic on a sign-and-magnitude
//! representation. The magnitude is a little-endian sequence of 32-bit words at
//! radix `2^32`; values are constructed from decimal text, from word sequences or
//! from machine integers, and support addition, subtraction, multiplication,
//! ordered comparison and word-wise bitwise logic.
//!
//! Values are immutable by convention: operations read their operands and produce
//! fresh results, so sharing a value between expressions can never change it.
pub use error::Error;
pub use integer::{Big, Word};
pub use integer::sign::Sign;

pub mod error;
pub mod integer;
