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

//! # Numeric Foundations
//!
//! Traits and utilities for integer-centric puzzle code. The solutions in this
//! workspace repeatedly need the same three things: a handful of sentinel
//! constants, arithmetic that reports or clamps overflow instead of wrapping,
//! and a way to peel decimal digits off an integer or push them back on.
//!
//! ## Submodules
//!
//! - `constants`: Associated-constant traits (`Zero`, `Radix`) implemented for
//!   all primitive integer types.
//! - `ops`: Checked (`Option<T>`) and saturating by-value arithmetic traits.
//! - `decimal`: `DecimalDigits`, splitting and building integers one base-10
//!   digit at a time with explicit overflow semantics.

pub mod constants;
pub mod decimal;
pub mod ops;
