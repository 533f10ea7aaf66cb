//! # Errors
//!
//! Reasons for rejecting caller supplied input. These cover malformed input only;
//! violations of internal invariants are implementation bugs and fail fast through
//! assertions rather than being represented here.
use std::error;
use std::fmt;

/// Caller supplied input that can not be interpreted as a number.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Error {
    /// Text that is not an optional `-` followed by at least one decimal digit.
    InvalidDecimal(String),
    /// A word sequence without any words. The word store of a value is never
    /// empty; zero is the single word `[0]`.
    EmptyWordSequence,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidDecimal(reason) => {
                write!(f, "could not parse decimal text: {}", reason)
            },
            Error::EmptyWordSequence => {
                write!(f, "a big integer requires at least one word")
            },
        }
    }
}

impl error::Error for Error {}
