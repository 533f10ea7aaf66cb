//! # Arithmetic
//!
//! Addition, subtraction and multiplication over the sign-and-magnitude
//! representation. The magnitude kernels are plain schoolbook algorithms with
//! ripple carry and borrow; the sign logic on top reduces every case to a
//! magnitude addition or a guarded magnitude subtraction of the smaller value
//! from the larger one.
//!
//! All operators take their operands by reference (owned variants forward) and
//! write fresh output buffers. Results never overflow; the representation grows
//! by as many words as the carries require.
use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use itertools::Itertools;
use num::{One, Zero};
use smallvec::smallvec;

use crate::integer::{Big, Word, BASE};
use crate::integer::sign::Sign;
use crate::integer::words::{self, trim, Words};

impl Big {
    /// Add one to the value in place.
    pub fn increment(&mut self) {
        *self += Self::one();
    }

    /// Subtract one from the value in place.
    pub fn decrement(&mut self) {
        *self -= Self::one();
    }
}

/// Sum of two signed values given as sign and magnitude.
///
/// Equal signs add the magnitudes and keep the shared sign. Differing signs
/// cancel: the smaller magnitude is subtracted from the larger and the result
/// takes the sign of the larger operand, which keeps the subtraction kernel on
/// its guarded `lhs >= rhs` path. Equal magnitudes of differing sign give zero.
fn combine(lhs_sign: Sign, lhs: &[Word], rhs_sign: Sign, rhs: &[Word]) -> Big {
    if lhs_sign == rhs_sign {
        return Big::from_parts(lhs_sign, add_magnitudes(lhs, rhs));
    }

    match words::cmp(lhs, rhs) {
        Ordering::Greater => Big::from_parts(lhs_sign, sub_magnitudes(lhs, rhs)),
        Ordering::Less => Big::from_parts(rhs_sign, sub_magnitudes(rhs, lhs)),
        Ordering::Equal => Big::zero(),
    }
}

/// Ripple-carry addition of two magnitudes.
///
/// Word pairs are traversed together with the shorter operand reading as zero
/// beyond its end; a final carry word is appended when the top pair overflows.
fn add_magnitudes(lhs: &[Word], rhs: &[Word]) -> Words {
    let mut total = Words::with_capacity(lhs.len().max(rhs.len()) + 1);

    let mut carry = 0_u64;
    for pair in lhs.iter().zip_longest(rhs.iter()) {
        let (&left, &right) = pair.or(&0, &0);
        let sum = left as u64 + right as u64 + carry;
        total.push(sum as Word);
        carry = sum >> Word::BITS;
    }
    if carry > 0 {
        total.push(carry as Word);
    }

    trim(&mut total);
    total
}

/// Borrow-propagating subtraction of a smaller magnitude from a larger one.
///
/// Requires `lhs >= rhs`; the callers guarantee it by comparing first. A borrow
/// left over after the last word would mean the guard failed, which is a bug in
/// this module, so it fails fast in every build profile.
fn sub_magnitudes(lhs: &[Word], rhs: &[Word]) -> Words {
    debug_assert!(words::cmp(lhs, rhs) != Ordering::Less);

    let mut difference = Words::with_capacity(lhs.len());

    let mut borrow = 0_i64;
    for pair in lhs.iter().zip_longest(rhs.iter()) {
        let (&left, &right) = pair.or(&0, &0);
        let mut value = left as i64 - right as i64 - borrow;
        if value < 0 {
            value += BASE as i64;
            borrow = 1;
        } else {
            borrow = 0;
        }
        difference.push(value as Word);
    }
    assert_eq!(borrow, 0, "borrow left after subtracting a smaller magnitude from a larger one");

    trim(&mut difference);
    difference
}

/// Schoolbook long multiplication of two magnitudes.
///
/// Every word of the shorter operand produces a partial row against every word
/// of the longer one; the rows accumulate directly into a zero-initialized
/// output buffer of `len(lhs) + len(rhs) + 1` words, which holds all carries
/// before the final trim.
fn mul_magnitudes(lhs: &[Word], rhs: &[Word]) -> Words {
    let (short, long) = if lhs.len() <= rhs.len() { (lhs, rhs) } else { (rhs, lhs) };

    let mut product: Words = smallvec![0; short.len() + long.len() + 1];
    for (row, &multiplier) in short.iter().enumerate() {
        if multiplier == 0 {
            continue;
        }

        let mut carry = 0_u64;
        for (column, &word) in long.iter().enumerate() {
            let value = product[row + column] as u64 + word as u64 * multiplier as u64 + carry;
            product[row + column] = value as Word;
            carry = value >> Word::BITS;
        }

        let mut position = row + long.len();
        while carry > 0 {
            let value = product[position] as u64 + carry;
            product[position] = value as Word;
            carry = value >> Word::BITS;
            position += 1;
        }
    }

    trim(&mut product);
    product
}

impl Add<&Big> for &Big {
    type Output = Big;

    fn add(self, rhs: &Big) -> Self::Output {
        combine(self.sign(), self.magnitude(), rhs.sign(), rhs.magnitude())
    }
}

impl Sub<&Big> for &Big {
    type Output = Big;

    fn sub(self, rhs: &Big) -> Self::Output {
        combine(self.sign(), self.magnitude(), -rhs.sign(), rhs.magnitude())
    }
}

impl Mul<&Big> for &Big {
    type Output = Big;

    fn mul(self, rhs: &Big) -> Self::Output {
        Big::from_parts(
            self.sign() * rhs.sign(),
            mul_magnitudes(self.magnitude(), rhs.magnitude()),
        )
    }
}

macro_rules! forward_binary_op {
    ($op:ident, $method:ident, $op_assign:ident, $method_assign:ident) => {
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

        impl $op_assign<Big> for Big {
            fn $method_assign(&mut self, rhs: Big) {
                *self = $op::$method(&*self, &rhs);
            }
        }

        impl $op_assign<&Big> for Big {
            fn $method_assign(&mut self, rhs: &Big) {
                *self = $op::$method(&*self, rhs);
            }
        }
    }
}

forward_binary_op!(Add, add, AddAssign, add_assign);
forward_binary_op!(Sub, sub, SubAssign, sub_assign);
forward_binary_op!(Mul, mul, MulAssign, mul_assign);

impl Neg for Big {
    type Output = Big;

    fn neg(self) -> Self::Output {
        Big::from_parts(-self.sign(), self.words)
    }
}

impl Neg for &Big {
    type Output = Big;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}
