//! Parse failures for [`super::FixedBignum`]'s textual decimal format.

use core::fmt;

/// Reasons a decimal string cannot be parsed into a [`super::FixedBignum`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseBignumError {
    /// The input (or the digit run after an optional leading `-`) was empty.
    Empty,
    /// A non-digit character appeared where a digit was expected.
    InvalidDigit(char),
    /// The decimal value does not fit in the declared word width.
    Overflow,
}

impl fmt::Display for ParseBignumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseBignumError::Empty => write!(f, "empty bignum literal"),
            ParseBignumError::InvalidDigit(c) => write!(f, "invalid digit '{c}' in bignum literal"),
            ParseBignumError::Overflow => write!(f, "bignum literal overflows its declared width"),
        }
    }
}

impl std::error::Error for ParseBignumError {}
