//! # Bitwise logic
//!
//! Word-wise boolean combinators over the magnitude: the operands are traversed
//! as equal-length word pairs with the shorter one reading as zero beyond its
//! end, the boolean formula is applied to every bit position within each word
//! pair independently, and no carry ever crosses a word boundary. Signs are
//! ignored; results are non-negative magnitudes in canonical form.
//!
//! Besides the native `&`, `|`, `^` and `!` operators the negated and combined
//! tables NAND, NOR, XNOR and XAND (`a AND NOT b`) are available as methods.
use std::ops::{BitAnd, BitOr, BitXor, Not};

use itertools::Itertools;

use crate::integer::{Big, Word};
use crate::integer::sign::Sign;
use crate::integer::words::Words;

impl Big {
    /// Apply a word-parallel boolean formula to zero-padded word pairs.
    fn combine_words(&self, rhs: &Self, table: impl Fn(Word, Word) -> Word) -> Self {
        let words: Words = self.magnitude().iter()
            .zip_longest(rhs.magnitude().iter())
            .map(|pair| {
                let (&left, &right) = pair.or(&0, &0);
                table(left, right)
            })
            .collect();

        Self::from_parts(Sign::Positive, words)
    }

    /// Negated conjunction: the bit is 0 exactly when both input bits are 1.
    pub fn nand(&self, rhs: &Self) -> Self {
        self.combine_words(rhs, |left, right| !(left & right))
    }

    /// Negated disjunction: the bit is 1 exactly when both input bits are 0.
    pub fn nor(&self, rhs: &Self) -> Self {
        self.combine_words(rhs, |left, right| !(left | right))
    }

    /// Negated exclusive or: the bit is 1 exactly when the input bits agree.
    pub fn xnor(&self, rhs: &Self) -> Self {
        self.combine_words(rhs, |left, right| !(left ^ right))
    }

    /// Conjunction with the negated right operand: the bit is 1 exactly when
    /// the left bit is 1 and the right bit is 0.
    pub fn xand(&self, rhs: &Self) -> Self {
        self.combine_words(rhs, |left, right| left & !right)
    }
}

impl BitAnd<&Big> for &Big {
    type Output = Big;

    fn bitand(self, rhs: &Big) -> Self::Output {
        self.combine_words(rhs, |left, right| left & right)
    }
}

impl BitOr<&Big> for &Big {
    type Output = Big;

    fn bitor(self, rhs: &Big) -> Self::Output {
        self.combine_words(rhs, |left, right| left | right)
    }
}

impl BitXor<&Big> for &Big {
    type Output = Big;

    fn bitxor(self, rhs: &Big) -> Self::Output {
        self.combine_words(rhs, |left, right| left ^ right)
    }
}

macro_rules! forward_bit_op {
    ($op:ident, $method:ident) => {
        impl $op<Big> for Big {
            type Output = Big;

            fn $method(self, rhs: Big) -> Self::Output {
                $op::$method(&self, &rhs)
            }
        }

        impl $op<&Big> for Big {
            type Output = Big;

            fn $method(self, rhs: &Big) -> Self::Output {
                $op::$method(&self, rhs)
            }
        }

        impl $op<Big> for &Big {
            type Output = Big;

            fn $method(self, rhs: Big) -> Self::Output {
                $op::$method(self, &rhs)
            }
        }
    }
}

forward_bit_op!(BitAnd, bitand);
forward_bit_op!(BitOr, bitor);
forward_bit_op!(BitXor, bitxor);

impl Not for &Big {
    type Output = Big;

    /// Per-word one's complement of the magnitude.
    ///
    /// Unary, so there is no second operand to pad against; the complemented
    /// words are only trimmed into canonical form.
    fn not(self) -> Self::Output {
        let words: Words = self.magnitude().iter().map(|&word| !word).collect();

        Big::from_parts(Sign::Positive, words)
    }
}

impl Not for Big {
    type Output = Big;

    fn not(self) -> Self::Output {
        !&self
    }
}
