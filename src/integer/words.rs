//! # Word store
//!
//! The magnitude of a value is a little-endian sequence of unsigned words: index 0
//! is the least significant word and each position counts for `BASE` times the
//! previous one. The canonical form has no trailing zero words, except for the
//! single-word zero `[0]`, and is never empty.
use std::cmp::Ordering;

use smallvec::SmallVec;

/// One slot in the little-endian magnitude.
pub type Word = u32;

/// Value of one word position relative to the next.
pub const BASE: u64 = 1 << Word::BITS;

/// Magnitudes up to `2^128 - 1` stay inline.
pub(crate) type Words = SmallVec<[Word; 4]>;

/// Strip trailing (most significant) zero words down to minimum length 1.
///
/// An empty word store is structurally impossible for constructed values; the
/// constructors reject empty input before it can reach here.
pub(crate) fn trim(words: &mut Words) {
    debug_assert!(!words.is_empty());

    while words.len() > 1 && words.last() == Some(&0) {
        words.pop();
    }
}

/// Borrow the words without trailing zeros, minimum length 1.
///
/// This is the normalize-on-read view: observers compare through it, so a padded
/// buffer and its canonical form are indistinguishable.
pub(crate) fn significant(words: &[Word]) -> &[Word] {
    debug_assert!(!words.is_empty());

    let mut length = words.len();
    while length > 1 && words[length - 1] == 0 {
        length -= 1;
    }

    &words[..length]
}

/// Compare two magnitudes.
///
/// A longer (trimmed) magnitude is always the greater one; equal lengths are
/// compared word by word from the most significant end, the first difference
/// decides.
pub(crate) fn cmp(a: &[Word], b: &[Word]) -> Ordering {
    let a = significant(a);
    let b = significant(b);

    match Ord::cmp(&a.len(), &b.len()) {
        Ordering::Equal => Iterator::cmp(a.iter().rev(), b.iter().rev()),
        other => other,
    }
}

/// Whether a magnitude represents zero.
pub(crate) fn is_zero(words: &[Word]) -> bool {
    significant(words) == [0]
}
