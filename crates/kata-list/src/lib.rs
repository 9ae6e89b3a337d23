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

//! # Kata List
//!
//! **Digit lists: non-negative integers as singly linked chains of decimal digits.**
//!
//! A `DigitList` stores one decimal digit per node, least-significant digit
//! first, so `342` is the chain `2 -> 4 -> 3`. Lists own their nodes
//! exclusively; there is no sharing between lists and no cycles.
//!
//! ## Architecture
//!
//! * **`digit`**: The validated `Digit` type (0-9) and `DigitError`.
//! * **`list`**: `DigitNode`, `DigitList`, and the borrowing `Digits` iterator.
//! * **`codec`**: Conversions between digit lists and integers, decimal text,
//!   and plain least-significant-first digit arrays.
//!
//! ## Absence vs. Zero
//!
//! The empty list is not the number zero. It models an absent operand; zero is
//! a single node holding `0`. Operations on digit lists keep the two apart.

pub mod codec;
pub mod digit;
pub mod list;

pub use digit::{Digit, DigitError};
pub use list::{DigitList, DigitNode, Digits};
