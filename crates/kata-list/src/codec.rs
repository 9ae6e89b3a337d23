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

//! Conversions between digit lists and other number representations.
//!
//! Three encodings are supported:
//!
//! - **Integers** (`u128`): `from_value` / `to_value`. Decoding reports
//!   `None` for the empty list and for values that do not fit.
//! - **Decimal text** (most-significant digit first, as humans write it):
//!   `from_decimal_str` / `to_decimal_string`. Works for any length.
//! - **Digit arrays** (least-significant first, the list's own order):
//!   `from_digits` / `try_from_digits` / `to_digits`.
//!
//! Leading zeros in text and trailing zeros in arrays are kept as given; the
//! codec never normalizes, so encodings round-trip node for node.

use crate::{
    digit::{Digit, DigitError},
    list::DigitList,
};
use kata_core::num::decimal::DecimalDigits;

impl DigitList {
    /// Encodes a non-negative integer. Zero becomes a single `0` node.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use kata_list::DigitList;
    /// assert_eq!(DigitList::from_value(342).to_digits(), vec![2, 4, 3]);
    /// assert_eq!(DigitList::from_value(0).to_digits(), vec![0]);
    /// ```
    pub fn from_value(value: u128) -> Self {
        value
            .decimal_digits()
            .into_iter()
            .map(|d| Digit::from_remainder(d as u8))
            .collect()
    }

    /// Decodes the list into an integer.
    ///
    /// Returns `None` for the empty list (no number) or if the value exceeds
    /// `u128::MAX`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use kata_list::DigitList;
    /// assert_eq!(DigitList::from_value(807).to_value(), Some(807));
    /// assert_eq!(DigitList::empty().to_value(), None);
    /// ```
    pub fn to_value(&self) -> Option<u128> {
        if self.is_empty() {
            return None;
        }

        let digits: Vec<Digit> = self.iter().collect();
        digits
            .iter()
            .rev()
            .try_fold(0_u128, |acc, d| acc.push_digit(u128::from(d.get())))
    }

    /// Parses decimal text written most-significant digit first.
    ///
    /// # Errors
    ///
    /// Returns `DigitError::Empty` for empty text and
    /// `DigitError::InvalidCharacter` for anything that is not an ASCII digit.
    /// Signs and whitespace are rejected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use kata_list::DigitList;
    /// let list = DigitList::from_decimal_str("342").unwrap();
    /// assert_eq!(list.to_digits(), vec![2, 4, 3]);
    /// assert!(DigitList::from_decimal_str("3a2").is_err());
    /// ```
    pub fn from_decimal_str(text: &str) -> Result<Self, DigitError> {
        if text.is_empty() {
            return Err(DigitError::Empty);
        }

        let digits = text
            .chars()
            .enumerate()
            .map(|(position, character)| Digit::from_char(character, position))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(digits.into_iter().rev().collect())
    }

    /// Renders the list as decimal text, most-significant digit first.
    ///
    /// The empty list renders as the empty string.
    pub fn to_decimal_string(&self) -> String {
        let mut text: Vec<char> = self.iter().map(Digit::to_char).collect();
        text.reverse();
        text.into_iter().collect()
    }

    /// Builds a list from raw digits, least-significant first.
    ///
    /// An empty slice yields the empty list.
    ///
    /// # Errors
    ///
    /// Returns `DigitError::OutOfRange` for the first value above 9.
    #[inline]
    pub fn from_digits(digits: &[u8]) -> Result<Self, DigitError> {
        Self::try_from_digits(digits.iter().copied())
    }

    /// Builds a list from any sequence of values convertible into digits,
    /// least-significant first.
    ///
    /// # Errors
    ///
    /// Returns the conversion error of the first invalid value.
    pub fn try_from_digits<I, V>(values: I) -> Result<Self, DigitError>
    where
        I: IntoIterator<Item = V>,
        Digit: TryFrom<V, Error = DigitError>,
    {
        values.into_iter().map(Digit::try_from).collect()
    }

    /// Returns the raw digits, least-significant first.
    #[inline]
    pub fn to_digits(&self) -> Vec<u8> {
        self.iter().map(Digit::get).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    #[test]
    fn test_from_value_examples() {
        assert_eq!(DigitList::from_value(342).to_digits(), vec![2, 4, 3]);
        assert_eq!(DigitList::from_value(465).to_digits(), vec![5, 6, 4]);
        assert_eq!(DigitList::from_value(1000).to_digits(), vec![0, 0, 0, 1]);
        assert_eq!(DigitList::from_value(0).to_digits(), vec![0]);
    }

    #[test]
    fn test_value_round_trip_random() {
        let mut rng = StdRng::seed_from_u64(0x5EED);
        for _ in 0..1_000 {
            let shift: u32 = rng.gen_range(0..128);
            let value: u128 = rng.gen_range(0..=u128::MAX >> shift);
            let list = DigitList::from_value(value);
            assert_eq!(list.to_value(), Some(value), "value {value} did not round-trip");
        }
        assert_eq!(DigitList::from_value(u128::MAX).to_value(), Some(u128::MAX));
    }

    #[test]
    fn test_to_value_rejects_empty_and_overflow() {
        assert_eq!(DigitList::empty().to_value(), None);

        let too_large = DigitList::from_decimal_str(&"9".repeat(40)).unwrap();
        assert_eq!(too_large.to_value(), None);
    }

    #[test]
    fn test_to_value_ignores_most_significant_zeros() {
        let mut padded = vec![5_u8];
        padded.extend(std::iter::repeat_n(0, 60));
        let list = DigitList::from_digits(&padded).unwrap();
        assert_eq!(list.to_value(), Some(5));
    }

    #[test]
    fn test_decimal_text_round_trip() {
        let long = "1234567890".repeat(8);
        for text in ["0", "7", "342", "1000", "007", long.as_str()] {
            let list = DigitList::from_decimal_str(text).unwrap();
            assert_eq!(list.to_decimal_string(), text);
        }
        assert_eq!(DigitList::empty().to_decimal_string(), "");
    }

    #[test]
    fn test_decimal_text_errors() {
        assert_eq!(DigitList::from_decimal_str(""), Err(DigitError::Empty));
        assert_eq!(
            DigitList::from_decimal_str("12-4"),
            Err(DigitError::InvalidCharacter {
                character: '-',
                position: 2
            })
        );
        assert!(DigitList::from_decimal_str(" 1").is_err());
    }

    #[test]
    fn test_from_digits() {
        assert_eq!(
            DigitList::from_digits(&[2, 4, 3]).unwrap().to_value(),
            Some(342)
        );
        assert!(DigitList::from_digits(&[]).unwrap().is_empty());
        assert_eq!(
            DigitList::from_digits(&[1, 10, 2]),
            Err(DigitError::OutOfRange { value: 10 })
        );
    }

    #[test]
    fn test_try_from_digits_with_signed_values() {
        let list = DigitList::try_from_digits([9_i64, 9, 9]).unwrap();
        assert_eq!(list.to_value(), Some(999));
        assert_eq!(
            DigitList::try_from_digits([1_i64, -3]),
            Err(DigitError::OutOfRange { value: -3 })
        );
    }
}
