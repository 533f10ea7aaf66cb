//! # Arbitrary precision integers
//!
//! A signed integer of unbounded size, stored as a sign next to a little-endian
//! magnitude of 32-bit words. The primary way to construct values is parsing
//! decimal text; word sequences and machine integers convert directly.
//!
//! Values are kept in canonical form at all times: the magnitude is trimmed at
//! construction and zero is always positive, so equal values have equal
//! representations. Operations read their operands immutably and build fresh
//! outputs; an operand is never resized or otherwise changed by using it.
use std::iter::Sum;

use num::{Integer, One, Zero};
use smallvec::smallvec;

use crate::error::Error;
use crate::integer::sign::Sign;
use crate::integer::words::{significant, trim, Words};

pub use crate::integer::words::{Word, BASE};

pub mod sign;
pub mod macros;

pub(crate) mod words;

mod arithmetic;
mod bitwise;
mod decimal;
mod ordering;

/// An exact integer of arbitrary size.
#[derive(Debug, Clone)]
pub struct Big {
    /// Little-endian magnitude, canonical (trimmed, never empty).
    words: Words,
    /// `Positive` when the magnitude is zero.
    sign: Sign,
}

impl Big {
    /// Build a non-negative value from a little-endian word sequence.
    ///
    /// Trailing zero words are accepted and trimmed away.
    ///
    /// # Errors
    ///
    /// When the sequence contains no words at all.
    pub fn from_words(words: &[Word]) -> Result<Self, Error> {
        if words.is_empty() {
            return Err(Error::EmptyWordSequence);
        }

        let mut words = Words::from_slice(words);
        trim(&mut words);

        Ok(Self { words, sign: Sign::Positive })
    }

    /// Canonicalize a freshly computed magnitude and sign into a value.
    ///
    /// Operations build their outputs through this: the buffer is trimmed and a
    /// zero magnitude forces the positive sign, so there is exactly one
    /// representation per value.
    pub(crate) fn from_parts(sign: Sign, mut words: Words) -> Self {
        trim(&mut words);

        let sign = if words[..] == [0] { Sign::Positive } else { sign };

        Self { words, sign }
    }

    /// Number of significant words in the magnitude.
    ///
    /// Zero has one word.
    pub fn word_count(&self) -> usize {
        significant(&self.words).len()
    }

    /// Whether the magnitude is divisible by two.
    ///
    /// Parity lives entirely in the least significant word; the sign does not
    /// matter. Zero is even.
    pub fn is_even(&self) -> bool {
        self.words[0].is_even()
    }

    /// Whether the value is strictly below zero.
    pub fn is_negative(&self) -> bool {
        debug_assert!(self.sign == Sign::Positive || !words::is_zero(&self.words));

        self.sign == Sign::Negative
    }

    pub(crate) fn sign(&self) -> Sign {
        self.sign
    }

    /// The magnitude without trailing zero words.
    pub(crate) fn magnitude(&self) -> &[Word] {
        significant(&self.words)
    }
}

impl Zero for Big {
    fn zero() -> Self {
        Self {
            words: smallvec![0],
            sign: Sign::Positive,
        }
    }

    fn set_zero(&mut self) {
        self.words.clear();
        self.words.push(0);
        self.sign = Sign::Positive;
    }

    fn is_zero(&self) -> bool {
        words::is_zero(&self.words)
    }
}

impl One for Big {
    fn one() -> Self {
        Self {
            words: smallvec![1],
            sign: Sign::Positive,
        }
    }

    fn set_one(&mut self) {
        self.words.clear();
        self.words.push(1);
        self.sign = Sign::Positive;
    }

    fn is_one(&self) -> bool {
        self.sign == Sign::Positive && self.magnitude() == [1]
    }
}

impl Default for Big {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<u64> for Big {
    fn from(value: u64) -> Self {
        let mut words: Words = smallvec![value as Word, (value >> Word::BITS) as Word];
        trim(&mut words);

        Self { words, sign: Sign::Positive }
    }
}

macro_rules! impl_from_small {
    ($t:ident) => {
        impl From<$t> for Big {
            fn from(value: $t) -> Self {
                Self::from(value as u64)
            }
        }
    }
}

impl_from_small!(u8);
impl_from_small!(u16);
impl_from_small!(u32);
impl_from_small!(usize);

impl Sum for Big {
    fn sum<I: Iterator<Item=Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |total, value| total + value)
    }
}
