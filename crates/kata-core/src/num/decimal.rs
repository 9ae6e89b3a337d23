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

//! # Decimal Digits
//!
//! Splitting an integer into base-10 digits and building one back up, digit by
//! digit, with explicit overflow behavior. Division and remainder truncate
//! toward zero, so negative values yield non-positive digits: `-123` splits
//! into `(-12, -3)`. Pushing those digits back onto an accumulator rebuilds
//! the same negative value, which keeps sign handling out of callers.
//!
//! ## Usage
//!
//! ```rust
//! use kata_core::num::decimal::DecimalDigits;
//!
//! assert_eq!(1234_u32.split_last_digit(), (123, 4));
//! assert_eq!(12_u8.push_digit(7), Some(127));
//! assert_eq!(26_u8.push_digit(0), None);
//! assert_eq!(i32::MAX.saturating_push_digit(9), i32::MAX);
//! ```

use crate::num::{
    constants::{Radix, Zero},
    ops::{CheckedAddVal, CheckedMulVal, SaturatingAddVal, SaturatingMulVal},
};
use core::ops::{Div, Rem};
use smallvec::SmallVec;

/// Enough inline capacity for every digit of a `u128` (39 digits).
pub const MAX_INLINE_DIGITS: usize = 40;

/// Digits of an integer, least-significant first.
pub type DigitBuffer<T> = SmallVec<[T; MAX_INLINE_DIGITS]>;

/// Base-10 digit manipulation for primitive integers.
pub trait DecimalDigits:
    Copy
    + PartialEq
    + Zero
    + Radix
    + Div<Self, Output = Self>
    + Rem<Self, Output = Self>
    + CheckedAddVal
    + CheckedMulVal
    + SaturatingAddVal
    + SaturatingMulVal
{
    /// Splits off the least-significant digit, returning `(rest, digit)`.
    ///
    /// Both parts truncate toward zero, so for negative values `digit` is in
    /// `-9..=0`.
    #[inline(always)]
    fn split_last_digit(self) -> (Self, Self) {
        (self / Self::RADIX, self % Self::RADIX)
    }

    /// Appends `digit` as the new least-significant digit (`self * 10 + digit`),
    /// returning `None` if the result does not fit into the type.
    #[inline(always)]
    fn push_digit(self, digit: Self) -> Option<Self> {
        self.checked_mul_val(Self::RADIX)?.checked_add_val(digit)
    }

    /// Appends `digit` as the new least-significant digit, clamping to the
    /// bounds of the type instead of overflowing.
    ///
    /// Pushing non-positive digits onto a non-positive accumulator clamps at
    /// `MIN`, which is how negative values are accumulated.
    #[inline(always)]
    fn saturating_push_digit(self, digit: Self) -> Self {
        self.saturating_mul_val(Self::RADIX).saturating_add_val(digit)
    }

    /// Returns all digits, least-significant first. Zero yields a single `0`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use kata_core::num::decimal::DecimalDigits;
    /// assert_eq!(807_u64.decimal_digits().as_slice(), &[7, 0, 8]);
    /// assert_eq!(0_u64.decimal_digits().as_slice(), &[0]);
    /// assert_eq!((-42_i32).decimal_digits().as_slice(), &[-2, -4]);
    /// ```
    fn decimal_digits(self) -> DigitBuffer<Self> {
        let mut digits = DigitBuffer::new();
        let mut rest = self;
        loop {
            let (next, digit) = rest.split_last_digit();
            digits.push(digit);
            if next == Self::ZERO {
                return digits;
            }
            rest = next;
        }
    }
}

impl<T> DecimalDigits for T where
    T: Copy
        + PartialEq
        + Zero
        + Radix
        + Div<T, Output = T>
        + Rem<T, Output = T>
        + CheckedAddVal
        + CheckedMulVal
        + SaturatingAddVal
        + SaturatingMulVal
{
}
