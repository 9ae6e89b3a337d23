// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use std::fmt::Display;

/// The error type for building digits and digit lists from raw input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DigitError {
    /// A numeric value outside `0..=9` was supplied as a digit.
    OutOfRange { value: i64 },
    /// A character in decimal text was not an ASCII digit.
    InvalidCharacter { character: char, position: usize },
    /// Decimal text was empty, so it encodes no number at all.
    Empty,
}

impl Display for DigitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange { value } => {
                write!(f, "Value {} is not a decimal digit (expected 0..=9)", value)
            }
            Self::InvalidCharacter {
                character,
                position,
            } => write!(
                f,
                "Character '{}' at position {} is not a decimal digit",
                character, position
            ),
            Self::Empty => write!(f, "Decimal text is empty"),
        }
    }
}

impl std::error::Error for DigitError {}

/// A single decimal digit in `0..=9`.
///
/// # Examples
///
/// ```rust
/// # use kata_list::Digit;
/// let seven = Digit::new(7).unwrap();
/// assert_eq!(seven.get(), 7);
/// assert!(Digit::new(10).is_err());
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Digit(u8);

impl Digit {
    /// The digit `0`.
    pub const ZERO: Self = Self(0);

    /// The largest decimal digit, `9`.
    pub const MAX: Self = Self(9);

    /// Creates a digit, rejecting values above 9.
    #[inline]
    pub const fn new(value: u8) -> Result<Self, DigitError> {
        if value <= Self::MAX.0 {
            Ok(Self(value))
        } else {
            Err(DigitError::OutOfRange {
                value: value as i64,
            })
        }
    }

    /// Creates a digit from the remainder of a division by ten.
    #[inline(always)]
    pub(crate) const fn from_remainder(value: u8) -> Self {
        debug_assert!(
            value <= 9,
            "called `Digit::from_remainder` with a value that is not a remainder of ten"
        );
        Self(value)
    }

    /// Returns the digit as a `u8`.
    #[inline(always)]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Returns `true` for the digit `0`.
    #[inline(always)]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Parses an ASCII digit character.
    ///
    /// `position` is only used for error reporting.
    #[inline]
    pub fn from_char(character: char, position: usize) -> Result<Self, DigitError> {
        character
            .to_digit(10)
            .map(|d| Self(d as u8))
            .ok_or(DigitError::InvalidCharacter {
                character,
                position,
            })
    }

    /// Returns the digit as an ASCII character.
    #[inline]
    pub const fn to_char(self) -> char {
        (b'0' + self.0) as char
    }

    /// Adds two digits and an incoming carry.
    ///
    /// Returns `(digit, carry)` where `digit = total % 10` and
    /// `carry = total / 10`. With all three inputs at most 9 the total is at
    /// most 27, so both parts are themselves digits.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use kata_list::Digit;
    /// let d = |v| Digit::new(v).unwrap();
    /// assert_eq!(Digit::sum_with_carry(d(9), d(9), d(1)), (d(9), d(1)));
    /// assert_eq!(Digit::sum_with_carry(d(2), d(5), d(0)), (d(7), d(0)));
    /// ```
    #[inline]
    pub const fn sum_with_carry(a: Self, b: Self, carry: Self) -> (Self, Self) {
        let total = a.0 + b.0 + carry.0;
        (Self(total % 10), Self(total / 10))
    }
}

impl std::fmt::Debug for Digit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Digit({})", self.0)
    }
}

impl Display for Digit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for Digit {
    type Error = DigitError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<i64> for Digit {
    type Error = DigitError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .filter(|v| *v <= 9)
            .map(Self)
            .ok_or(DigitError::OutOfRange { value })
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}
