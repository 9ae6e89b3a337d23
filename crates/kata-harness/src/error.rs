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

use kata_list::DigitError;
use std::fmt::Display;

/// The error type for loading fixtures and dispatching their cases.
#[derive(Debug)]
pub enum HarnessError {
    /// An I/O error occurred while locating or reading fixture files.
    Io(std::io::Error),
    /// A fixture file is not valid JSON or does not have the expected shape.
    Json(serde_json::Error),
    /// A fixture names a function that no solution implements.
    UnknownFunction { name: String },
    /// A case supplies the wrong number of arguments.
    Arity {
        function: &'static str,
        expected: usize,
        found: usize,
    },
    /// An argument has the wrong JSON type or an unusable value.
    Argument { position: usize, reason: String },
    /// A digit-list argument contains a value outside `0..=9`.
    Digit(DigitError),
}

impl Display for HarnessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Json(e) => write!(f, "JSON error: {e}"),
            Self::UnknownFunction { name } => write!(f, "Unknown function '{}'", name),
            Self::Arity {
                function,
                expected,
                found,
            } => write!(
                f,
                "Function '{}' takes {} arguments but the case supplies {}",
                function, expected, found
            ),
            Self::Argument { position, reason } => {
                write!(f, "Argument {} is invalid: {}", position, reason)
            }
            Self::Digit(e) => write!(f, "Digit error: {}", e),
        }
    }
}

impl std::error::Error for HarnessError {}

impl From<std::io::Error> for HarnessError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for HarnessError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<DigitError> for HarnessError {
    fn from(e: DigitError) -> Self {
        Self::Digit(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_offending_part() {
        let unknown = HarnessError::UnknownFunction {
            name: "threeSum".to_string(),
        };
        assert_eq!(unknown.to_string(), "Unknown function 'threeSum'");

        let arity = HarnessError::Arity {
            function: "twoSum",
            expected: 2,
            found: 1,
        };
        assert_eq!(
            arity.to_string(),
            "Function 'twoSum' takes 2 arguments but the case supplies 1"
        );

        let argument = HarnessError::Argument {
            position: 0,
            reason: "expected a string".to_string(),
        };
        assert_eq!(argument.to_string(), "Argument 0 is invalid: expected a string");
    }

    #[test]
    fn test_from_conversions() {
        let digit: HarnessError = DigitError::OutOfRange { value: 12 }.into();
        assert!(matches!(digit, HarnessError::Digit(DigitError::OutOfRange { value: 12 })));

        let io: HarnessError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(io, HarnessError::Io(_)));

        let json: HarnessError = serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();
        assert!(matches!(json, HarnessError::Json(_)));
    }
}
