//! # Decimal interchange
//!
//! Exact conversion between decimal text and the word representation, in both
//! directions a base conversion rather than a digit-for-digit transcription: one
//! decimal digit spreads over the binary words and one word spans several decimal
//! digits.
use std::fmt;
use std::str::FromStr;

use num::Zero;
use smallvec::smallvec;

use crate::error::Error;
use crate::integer::{Big, Word};
use crate::integer::sign::Sign;
use crate::integer::words::{trim, Words};

/// Largest power of ten that fits one word; the radix of the formatting loop.
const DECIMAL_GROUP: Word = 1_000_000_000;
/// Number of decimal digits per `DECIMAL_GROUP` super-digit.
const DECIMAL_GROUP_DIGITS: usize = 9;

impl FromStr for Big {
    type Err = Error;

    /// Parse an optionally `-`-prefixed sequence of decimal digits.
    ///
    /// The digits are folded most significant first into the word vector as
    /// `value = value * 10 + digit` with full carry propagation, so the
    /// conversion from base 10 to base `2^32` is exact at any length. Leading
    /// zeros are accepted; `"0"` and `"-0"` both give the canonical, positive
    /// zero.
    ///
    /// # Errors
    ///
    /// When the text is empty, is `-` alone, or contains any character other
    /// than an optional leading `-` followed by ASCII digits.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        if text.is_empty() {
            return Err(Error::InvalidDecimal("empty text".to_string()));
        }

        let (sign, digits) = match text.strip_prefix('-') {
            Some(rest) => (Sign::Negative, rest),
            None => (Sign::Positive, text),
        };
        if digits.is_empty() {
            return Err(Error::InvalidDecimal("no digits after the sign".to_string()));
        }

        let mut words: Words = smallvec![0];
        for character in digits.chars() {
            match character.to_digit(10) {
                Some(digit) => mul_small_add(&mut words, 10, digit as Word),
                None => return Err(Error::InvalidDecimal(
                    format!("found character {:?}, expected a digit 0..9", character),
                )),
            }
        }

        Ok(Self::from_parts(sign, words))
    }
}

impl fmt::Display for Big {
    /// Format as decimal digits, `-`-prefixed when negative.
    ///
    /// A local copy of the magnitude is repeatedly divided by `10^9`, producing
    /// the base-`10^9` super-digits least significant first. They are printed
    /// most significant first, later groups zero-padded to the full group width
    /// and the leading group unpadded.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }

        let mut remaining = Words::from_slice(self.magnitude());
        let mut groups = Vec::new();
        while remaining[..] != [0] {
            groups.push(div_small(&mut remaining, DECIMAL_GROUP));
        }

        if self.is_negative() {
            f.write_str("-")?;
        }

        let mut groups = groups.iter().rev();
        if let Some(leading) = groups.next() {
            write!(f, "{}", leading)?;
        }
        for group in groups {
            write!(f, "{:0width$}", group, width = DECIMAL_GROUP_DIGITS)?;
        }

        Ok(())
    }
}

/// Replace `words` by `words * factor + addend`, growing as the carry overflows
/// the top word.
fn mul_small_add(words: &mut Words, factor: Word, addend: Word) {
    let mut carry = addend as u64;
    for word in words.iter_mut() {
        let total = *word as u64 * factor as u64 + carry;
        *word = total as Word;
        carry = total >> Word::BITS;
    }

    if carry > 0 {
        words.push(carry as Word);
    }
}

/// Divide `words` by a single-word divisor in place, returning the remainder.
///
/// Classic short division from the most significant word down: each step divides
/// the running remainder shifted up one word plus the current word.
fn div_small(words: &mut Words, divisor: Word) -> Word {
    debug_assert!(divisor > 0);

    let mut remainder = 0_u64;
    for word in words.iter_mut().rev() {
        let current = (remainder << Word::BITS) | *word as u64;
        *word = (current / divisor as u64) as Word;
        remainder = current % divisor as u64;
    }
    trim(words);

    remainder as Word
}
