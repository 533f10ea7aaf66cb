use std::ops::{Mul, Neg};

/// Sign of a value.
///
/// Zero has no sign of its own; canonical form stores it as `Positive` so that
/// there is exactly one representation of zero. A separate third variant for zero
/// would force branches that can never be taken in the arithmetic kernels, which
/// only ever see the sign next to a nonzero magnitude.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum Sign {
    /// `x >= 0`
    Positive,
    /// `x < 0`
    Negative,
}

impl Mul for Sign {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Sign::Positive, Sign::Positive) => Sign::Positive,
            (Sign::Positive, Sign::Negative) => Sign::Negative,
            (Sign::Negative, Sign::Positive) => Sign::Negative,
            (Sign::Negative, Sign::Negative) => Sign::Positive,
        }
    }
}

impl Neg for Sign {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }
}
