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

//! Reverse the decimal digits of an integer (problem 0007).
//!
//! Digits are peeled off the end of the input with truncating division and
//! pushed onto an accumulator with checked arithmetic. A negative input yields
//! non-positive digits, so the accumulator stays negative on its own and no
//! sign needs to be tracked.

use kata_core::num::decimal::DecimalDigits;
use tracing::trace;

/// Reverses the decimal digits of `x`, keeping its sign.
///
/// Returns `0` when the reversed value does not fit into an `i32`. Trailing
/// zeros of the input vanish (`120` becomes `21`).
///
/// # Examples
///
/// ```rust
/// # use kata_solutions::reverse_integer::reverse;
/// assert_eq!(reverse(123), 321);
/// assert_eq!(reverse(-123), -321);
/// assert_eq!(reverse(120), 21);
/// assert_eq!(reverse(1_534_236_469), 0);
/// ```
pub fn reverse(x: i32) -> i32 {
    reverse_digits(x).unwrap_or(0)
}

/// Reverses the decimal digits of `x` in its own type, returning `None` on
/// overflow.
///
/// # Examples
///
/// ```rust
/// # use kata_solutions::reverse_integer::reverse_digits;
/// assert_eq!(reverse_digits(250_u8), Some(52));
/// assert_eq!(reverse_digits(199_u8), None);
/// assert_eq!(reverse_digits(-4_500_i64), Some(-54));
/// ```
pub fn reverse_digits<T>(x: T) -> Option<T>
where
    T: DecimalDigits,
{
    let mut rest = x;
    let mut reversed = T::ZERO;
    loop {
        let (next, digit) = rest.split_last_digit();
        reversed = match reversed.push_digit(digit) {
            Some(value) => value,
            None => {
                trace!("reversed digits overflow");
                return None;
            }
        };
        if next == T::ZERO {
            return Some(reversed);
        }
        rest = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    fn reverse_via_string(x: i32) -> i32 {
        let reversed: String = x.unsigned_abs().to_string().chars().rev().collect();
        let magnitude: i64 = reversed.parse().unwrap();
        let signed = if x < 0 { -magnitude } else { magnitude };
        i32::try_from(signed).unwrap_or(0)
    }

    #[test]
    fn test_known_inputs() {
        assert_eq!(reverse(123), 321);
        assert_eq!(reverse(-123), -321);
        assert_eq!(reverse(120), 21);
        assert_eq!(reverse(0), 0);
        assert_eq!(reverse(-5), -5);
    }

    #[test]
    fn test_overflow_yields_zero() {
        assert_eq!(reverse(1_534_236_469), 0);
        assert_eq!(reverse(i32::MAX), 0);
        assert_eq!(reverse(i32::MIN), 0);
    }

    #[test]
    fn test_results_at_the_edge_of_the_range() {
        assert_eq!(reverse(1_463_847_412), 2_147_483_641);
        assert_eq!(reverse(-2_147_483_412), -2_143_847_412);
    }

    #[test]
    fn test_generic_over_integer_types() {
        assert_eq!(reverse_digits(250_u8), Some(52));
        assert_eq!(reverse_digits(199_u8), None);
        assert_eq!(reverse_digits(-128_i8), None);
        assert_eq!(reverse_digits(1_000_u64), Some(1));
        assert_eq!(reverse_digits(u128::MAX), None);
    }

    #[test]
    fn test_random_inputs_agree_with_string_reversal() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..5_000 {
            let x: i32 = rng.gen_range(i32::MIN..=i32::MAX);
            assert_eq!(reverse(x), reverse_via_string(x), "x {}", x);
        }
    }
}
