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

//! String to 32-bit integer (problem 0008).
//!
//! Parsing runs in four stages over the input: skip leading spaces, read an
//! optional sign, read a run of ASCII digits, and stop at the first other
//! character. Digits are accumulated with saturating arithmetic, with negated
//! digits for negative input, so out-of-range values clamp to the `i32`
//! bounds without a separate overflow check.

use kata_core::num::decimal::DecimalDigits;

/// Parses the leading integer of `text`, clamped to the `i32` range.
///
/// Only the space character counts as leading whitespace. At most one sign is
/// accepted. Input that does not start with a digit after the optional sign
/// yields `0`.
///
/// # Examples
///
/// ```rust
/// # use kata_solutions::atoi::my_atoi;
/// assert_eq!(my_atoi("42"), 42);
/// assert_eq!(my_atoi("   -42"), -42);
/// assert_eq!(my_atoi("4193 with words"), 4193);
/// assert_eq!(my_atoi("words and 987"), 0);
/// assert_eq!(my_atoi("-91283472332"), i32::MIN);
/// ```
pub fn my_atoi(text: &str) -> i32 {
    let rest = text.trim_start_matches(' ');
    let (negative, digits) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };

    digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .map(|byte| i32::from(byte - b'0'))
        .fold(0_i32, |acc, digit| {
            let digit = if negative { -digit } else { digit };
            acc.saturating_push_digit(digit)
        })
}
