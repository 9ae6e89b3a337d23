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

//! # Kata Harness
//!
//! Fixture-driven verification of the kata solutions. Every problem directory
//! carries a `testcases.json` file naming a function and listing its cases;
//! the harness discovers these files, dispatches each case to the matching
//! solution through a registry, and collects the outcomes in a report.
//!
//! ## Modules
//!
//! - `testcases`: Fixture file format, loading, and discovery.
//! - `registry`: Fixture function names mapped onto the solutions.
//! - `args`: Typed decoding of case arguments and encoding of results.
//! - `runner`: The `Runner` builder and its `Report`.
//! - `error`: The `HarnessError` type.
//!
//! ## Logging
//!
//! Progress is reported through `tracing`: `info!` per fixture file,
//! `debug!` per passing case, and `warn!` per failing case. No subscriber is
//! installed here.

pub mod args;
pub mod error;
pub mod registry;
pub mod runner;
pub mod testcases;

pub use error::HarnessError;
pub use runner::{Report, Runner};
