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

//! # Kata Solutions
//!
//! Independent, stateless solutions to discrete algorithmic puzzles. Every
//! solution is a pure function: it borrows its input, allocates only the
//! value it returns, and shares nothing with other calls, so all of them are
//! reentrant and safe to call from any thread.
//!
//! ## Modules
//!
//! | Problem | Module              | Entry point                       |
//! |---------|---------------------|-----------------------------------|
//! | 0001    | `two_sum`           | `find_complement_pair`            |
//! | 0002    | `add_two_numbers`   | `add_numbers`, `add_with_carry`   |
//! | 0003    | `longest_substring` | `length_of_longest_substring`     |
//! | 0004    | `median`            | `find_median_sorted_arrays`       |
//! | 0005    | `palindrome`        | `longest_palindrome`              |
//! | 0006    | `zigzag`            | `convert`                         |
//! | 0007    | `reverse_integer`   | `reverse`, `reverse_digits`       |
//! | 0008    | `atoi`              | `my_atoi`                         |
//!
//! ## Absence Is Not Failure
//!
//! Outcomes such as "no pair sums to the target" or "no median of nothing"
//! are ordinary results and are returned as `None`. Panics are reserved for
//! broken internal invariants.

pub mod add_two_numbers;
pub mod atoi;
pub mod longest_substring;
pub mod median;
pub mod palindrome;
pub mod reverse_integer;
pub mod two_sum;
pub mod zigzag;
