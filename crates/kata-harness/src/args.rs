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

//! Typed access to the JSON arguments of a fixture case, and the JSON
//! encodings of solution results.
//!
//! Digit lists travel as arrays of digits, least-significant first. The
//! empty list, an absent operand, is written as `[]`; on input both `[]` and
//! `null` decode to the empty list.

use crate::error::HarnessError;
use kata_list::DigitList;
use serde_json::Value;

/// The positional arguments of a single case.
#[derive(Debug, Clone, Copy)]
pub struct Args<'a> {
    values: &'a [Value],
}

impl<'a> Args<'a> {
    /// Wraps `values` after checking that there are exactly `arity` of them.
    ///
    /// # Errors
    ///
    /// Returns `HarnessError::Arity` if the count does not match.
    pub fn new(
        function: &'static str,
        arity: usize,
        values: &'a [Value],
    ) -> Result<Self, HarnessError> {
        if values.len() != arity {
            return Err(HarnessError::Arity {
                function,
                expected: arity,
                found: values.len(),
            });
        }
        Ok(Self { values })
    }

    /// Returns the number of arguments.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if there are no arguments.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    fn get(&self, position: usize) -> Result<&'a Value, HarnessError> {
        self.values
            .get(position)
            .ok_or_else(|| invalid(position, "missing"))
    }

    /// Reads an integer argument.
    pub fn i64(&self, position: usize) -> Result<i64, HarnessError> {
        self.get(position)?
            .as_i64()
            .ok_or_else(|| invalid(position, "expected an integer"))
    }

    /// Reads an integer argument that has to fit into an `i32`.
    pub fn i32(&self, position: usize) -> Result<i32, HarnessError> {
        let value = self.i64(position)?;
        i32::try_from(value)
            .map_err(|_| invalid(position, format!("{} does not fit into a 32-bit integer", value)))
    }

    /// Reads a non-negative integer argument.
    pub fn usize(&self, position: usize) -> Result<usize, HarnessError> {
        let value = self.i64(position)?;
        usize::try_from(value)
            .map_err(|_| invalid(position, format!("{} is not a valid count", value)))
    }

    /// Reads a string argument.
    pub fn str(&self, position: usize) -> Result<&'a str, HarnessError> {
        self.get(position)?
            .as_str()
            .ok_or_else(|| invalid(position, "expected a string"))
    }

    /// Reads an array of integers.
    pub fn i64_array(&self, position: usize) -> Result<Vec<i64>, HarnessError> {
        let items = self
            .get(position)?
            .as_array()
            .ok_or_else(|| invalid(position, "expected an array of integers"))?;

        items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                item.as_i64()
                    .ok_or_else(|| invalid(position, format!("element {} is not an integer", i)))
            })
            .collect()
    }

    /// Reads a digit list. `null` and `[]` both yield the empty list.
    ///
    /// # Errors
    ///
    /// Returns `HarnessError::Digit` if an element is outside `0..=9`.
    pub fn digit_list(&self, position: usize) -> Result<DigitList, HarnessError> {
        if self.get(position)?.is_null() {
            return Ok(DigitList::empty());
        }
        let digits = self.i64_array(position)?;
        Ok(DigitList::try_from_digits(digits)?)
    }
}

#[inline]
fn invalid(position: usize, reason: impl Into<String>) -> HarnessError {
    HarnessError::Argument {
        position,
        reason: reason.into(),
    }
}

/// Encodes a digit list as its digits. The empty list encodes as `[]`.
pub fn encode_digit_list(list: &DigitList) -> Value {
    Value::from(list.to_digits())
}

/// Compares a produced value against the expected one.
///
/// Numbers compare by value, so `2` matches `2.0`. Arrays compare element by
/// element; everything else must be equal.
pub fn values_match(expected: &Value, actual: &Value) -> bool {
    match (expected, actual) {
        (Value::Number(e), Value::Number(a)) => match (e.as_i64(), a.as_i64()) {
            (Some(e), Some(a)) => e == a,
            _ => e.as_f64() == a.as_f64(),
        },
        (Value::Array(e), Value::Array(a)) => {
            e.len() == a.len() && e.iter().zip(a).all(|(e, a)| values_match(e, a))
        }
        _ => expected == actual,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kata_list::DigitError;
    use serde_json::json;

    #[test]
    fn test_arity_is_checked() {
        let values = vec![json!(1)];
        let err = Args::new("reverse", 2, &values).unwrap_err();
        assert!(matches!(
            err,
            HarnessError::Arity {
                function: "reverse",
                expected: 2,
                found: 1
            }
        ));
    }

    #[test]
    fn test_scalar_accessors() {
        let values = vec![json!(-7), json!("text"), json!(3)];
        let args = Args::new("f", 3, &values).unwrap();
        assert_eq!(args.len(), 3);
        assert_eq!(args.i64(0).unwrap(), -7);
        assert_eq!(args.i32(0).unwrap(), -7);
        assert_eq!(args.str(1).unwrap(), "text");
        assert_eq!(args.usize(2).unwrap(), 3);
    }

    #[test]
    fn test_type_mismatches_name_the_position() {
        let values = vec![json!("x"), json!(-1), json!(4_000_000_000_i64)];
        let args = Args::new("f", 3, &values).unwrap();
        assert!(matches!(args.i64(0), Err(HarnessError::Argument { position: 0, .. })));
        assert!(matches!(args.str(1), Err(HarnessError::Argument { position: 1, .. })));
        assert!(matches!(args.usize(1), Err(HarnessError::Argument { position: 1, .. })));
        assert!(matches!(args.i32(2), Err(HarnessError::Argument { position: 2, .. })));
    }

    #[test]
    fn test_i64_array() {
        let values = vec![json!([1, -2, 3]), json!([1, "2"])];
        let args = Args::new("f", 2, &values).unwrap();
        assert_eq!(args.i64_array(0).unwrap(), vec![1, -2, 3]);
        assert!(matches!(
            args.i64_array(1),
            Err(HarnessError::Argument { position: 1, .. })
        ));
    }

    #[test]
    fn test_digit_list_absence_and_range() {
        let values = vec![json!(null), json!([]), json!([2, 4, 3]), json!([1, 10])];
        let args = Args::new("f", 4, &values).unwrap();
        assert!(args.digit_list(0).unwrap().is_empty());
        assert!(args.digit_list(1).unwrap().is_empty());
        assert_eq!(args.digit_list(2).unwrap().to_digits(), vec![2, 4, 3]);
        assert!(matches!(
            args.digit_list(3),
            Err(HarnessError::Digit(DigitError::OutOfRange { value: 10 }))
        ));
    }

    #[test]
    fn test_encode_digit_list() {
        let list = DigitList::from_digits(&[7, 0, 8]).unwrap();
        assert_eq!(encode_digit_list(&list), json!([7, 0, 8]));
        assert_eq!(encode_digit_list(&DigitList::empty()), json!([]));
        assert_ne!(encode_digit_list(&DigitList::empty()), Value::Null);
    }

    #[test]
    fn test_values_match_numbers_by_value() {
        assert!(values_match(&json!(2), &json!(2.0)));
        assert!(values_match(&json!(2.5), &json!(2.5)));
        assert!(!values_match(&json!(2), &json!(2.5)));
        assert!(values_match(&json!([0, 1]), &json!([0, 1])));
        assert!(!values_match(&json!([0, 1]), &json!([1, 0])));
        assert!(!values_match(&json!([0]), &json!([0, 1])));
        assert!(values_match(&json!(null), &json!(null)));
        assert!(!values_match(&json!(null), &json!([])));
        assert!(values_match(&json!("bab"), &json!("bab")));
    }
}
