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

//! # By-Value Arithmetic
//!
//! Checked and saturating arithmetic traits that take their operands by value.
//! They forward to the inherent methods of the primitive integer types
//! (`checked_add`, `saturating_mul`, ...) so generic code can rely on the
//! exact primitive semantics without going through the reference-based
//! `num_traits` APIs.
//!
//! - Checked operations return `None` when the mathematical result does not
//!   fit into the type.
//! - Saturating operations clamp the result to `[T::MIN, T::MAX]`.

use core::ops::{Add, Mul, Sub};

/// Checked addition by value.
///
/// # Examples
///
/// ```rust
/// # use kata_core::num::ops::CheckedAddVal;
/// let a: u8 = 200;
/// assert_eq!(a.checked_add_val(100), None);
/// assert_eq!(a.checked_add_val(50), Some(250));
/// ```
pub trait CheckedAddVal: Sized + Add<Self, Output = Self> {
    /// Performs checked addition by value, returning `None` on overflow.
    fn checked_add_val(self, v: Self) -> Option<Self>;
}

/// Checked subtraction by value.
///
/// # Examples
///
/// ```rust
/// # use kata_core::num::ops::CheckedSubVal;
/// let a: i32 = i32::MIN;
/// assert_eq!(a.checked_sub_val(1), None);
/// assert_eq!(9_i32.checked_sub_val(2), Some(7));
/// ```
pub trait CheckedSubVal: Sized + Sub<Self, Output = Self> {
    /// Performs checked subtraction by value, returning `None` on overflow.
    fn checked_sub_val(self, v: Self) -> Option<Self>;
}

/// Checked multiplication by value.
pub trait CheckedMulVal: Sized + Mul<Self, Output = Self> {
    /// Performs checked multiplication by value, returning `None` on overflow.
    fn checked_mul_val(self, v: Self) -> Option<Self>;
}

/// Saturating addition by value.
pub trait SaturatingAddVal: Sized + Add<Self, Output = Self> {
    /// Performs saturating addition by value.
    fn saturating_add_val(self, v: Self) -> Self;
}

/// Saturating multiplication by value.
pub trait SaturatingMulVal: Sized + Mul<Self, Output = Self> {
    /// Performs saturating multiplication by value.
    fn saturating_mul_val(self, v: Self) -> Self;
}

macro_rules! impl_by_value_ops {
    ($($t:ty),* $(,)?) => {
        $(
            impl CheckedAddVal for $t {
                #[inline(always)]
                fn checked_add_val(self, v: Self) -> Option<Self> {
                    <$t>::checked_add(self, v)
                }
            }

            impl CheckedSubVal for $t {
                #[inline(always)]
                fn checked_sub_val(self, v: Self) -> Option<Self> {
                    <$t>::checked_sub(self, v)
                }
            }

            impl CheckedMulVal for $t {
                #[inline(always)]
                fn checked_mul_val(self, v: Self) -> Option<Self> {
                    <$t>::checked_mul(self, v)
                }
            }

            impl SaturatingAddVal for $t {
                #[inline(always)]
                fn saturating_add_val(self, v: Self) -> Self {
                    <$t>::saturating_add(self, v)
                }
            }

            impl SaturatingMulVal for $t {
                #[inline(always)]
                fn saturating_mul_val(self, v: Self) -> Self {
                    <$t>::saturating_mul(self, v)
                }
            }
        )*
    };
}

impl_by_value_ops!(
    i8, u8, i16, u16, i32, u32, i64, u64, i128, u128, isize, usize,
);
