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

//! Maps fixture function names onto the solutions.
//!
//! Every entry decodes the case arguments, calls one solution, and encodes
//! its result back into JSON. Function names follow the fixture files
//! (`twoSum`, `addTwoNumbers`, ...), not the Rust names.

use crate::{
    args::{Args, encode_digit_list},
    error::HarnessError,
};
use kata_solutions::{
    add_two_numbers::add_numbers, atoi::my_atoi, longest_substring::length_of_longest_substring,
    median::find_median_sorted_arrays, palindrome::longest_palindrome, reverse_integer::reverse,
    two_sum::find_complement_pair, zigzag::convert,
};
use serde_json::Value;

type Invoke = fn(&Args<'_>) -> Result<Value, HarnessError>;

/// A solution reachable from a fixture.
#[derive(Clone, Copy)]
pub struct Solver {
    function: &'static str,
    arity: usize,
    invoke: Invoke,
}

impl Solver {
    /// Returns the fixture name of the function.
    #[inline]
    pub fn function(&self) -> &'static str {
        self.function
    }

    /// Returns the number of arguments the function takes.
    #[inline]
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Runs the solution on the JSON arguments of one case.
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments do not decode into the parameter
    /// types of the solution.
    pub fn invoke(&self, arguments: &[Value]) -> Result<Value, HarnessError> {
        let args = Args::new(self.function, self.arity, arguments)?;
        (self.invoke)(&args)
    }
}

impl std::fmt::Debug for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Solver")
            .field("function", &self.function)
            .field("arity", &self.arity)
            .finish()
    }
}

const SOLVERS: &[Solver] = &[
    Solver {
        function: "twoSum",
        arity: 2,
        invoke: |args| {
            let sequence = args.i64_array(0)?;
            let target = args.i64(1)?;
            Ok(match find_complement_pair(&sequence, target) {
                Some(pair) => {
                    let (first, second) = pair.as_tuple();
                    Value::from(vec![first, second])
                }
                None => Value::Null,
            })
        },
    },
    Solver {
        function: "addTwoNumbers",
        arity: 2,
        invoke: |args| {
            let a = args.digit_list(0)?;
            let b = args.digit_list(1)?;
            Ok(encode_digit_list(&add_numbers(&a, &b)))
        },
    },
    Solver {
        function: "lengthOfLongestSubstring",
        arity: 1,
        invoke: |args| Ok(Value::from(length_of_longest_substring(args.str(0)?))),
    },
    Solver {
        function: "findMedianSortedArrays",
        arity: 2,
        invoke: |args| {
            let a = args.i64_array(0)?;
            let b = args.i64_array(1)?;
            Ok(find_median_sorted_arrays(&a, &b).map_or(Value::Null, Value::from))
        },
    },
    Solver {
        function: "longestPalindrome",
        arity: 1,
        invoke: |args| Ok(Value::from(longest_palindrome(args.str(0)?))),
    },
    Solver {
        function: "convert",
        arity: 2,
        invoke: |args| Ok(Value::from(convert(args.str(0)?, args.usize(1)?))),
    },
    Solver {
        function: "reverse",
        arity: 1,
        invoke: |args| Ok(Value::from(reverse(args.i32(0)?))),
    },
    Solver {
        function: "myAtoi",
        arity: 1,
        invoke: |args| Ok(Value::from(my_atoi(args.str(0)?))),
    },
];

/// Returns every registered solver.
#[inline]
pub fn solvers() -> &'static [Solver] {
    SOLVERS
}

/// Looks up the solver for a fixture function name.
///
/// # Errors
///
/// Returns `HarnessError::UnknownFunction` if no solution has that name.
pub fn lookup(function: &str) -> Result<&'static Solver, HarnessError> {
    SOLVERS
        .iter()
        .find(|solver| solver.function == function)
        .ok_or_else(|| HarnessError::UnknownFunction {
            name: function.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn run(function: &str, arguments: Value) -> Value {
        let arguments = arguments.as_array().cloned().unwrap();
        lookup(function).unwrap().invoke(&arguments).unwrap()
    }

    #[test]
    fn test_function_names_are_unique() {
        let mut names: Vec<&str> = solvers().iter().map(Solver::function).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), solvers().len());
    }

    #[test]
    fn test_unknown_function() {
        assert!(matches!(
            lookup("threeSum"),
            Err(HarnessError::UnknownFunction { name }) if name == "threeSum"
        ));
    }

    #[test]
    fn test_dispatch_encodes_results() {
        assert_eq!(run("twoSum", json!([[2, 7, 11, 15], 9])), json!([0, 1]));
        assert_eq!(run("twoSum", json!([[1, 2], 7])), Value::Null);
        assert_eq!(run("addTwoNumbers", json!([[2, 4, 3], [5, 6, 4]])), json!([7, 0, 8]));
        assert_eq!(run("addTwoNumbers", json!([null, [1]])), json!([]));
        assert_eq!(run("addTwoNumbers", json!([[], [1]])), json!([]));
        assert_eq!(run("lengthOfLongestSubstring", json!(["pwwkew"])), json!(3));
        assert_eq!(run("findMedianSortedArrays", json!([[1, 2], [3, 4]])), json!(2.5));
        assert_eq!(run("findMedianSortedArrays", json!([[], []])), Value::Null);
        assert_eq!(run("longestPalindrome", json!(["cbbd"])), json!("bb"));
        assert_eq!(run("convert", json!(["PAYPALISHIRING", 3])), json!("PAHNAPLSIIGYIR"));
        assert_eq!(run("reverse", json!([-123])), json!(-321));
        assert_eq!(run("myAtoi", json!(["   -42"])), json!(-42));
    }

    #[test]
    fn test_invoke_checks_arity_and_types() {
        let solver = lookup("reverse").unwrap();
        assert_eq!(solver.arity(), 1);
        assert!(matches!(
            solver.invoke(&[json!(1), json!(2)]),
            Err(HarnessError::Arity { expected: 1, found: 2, .. })
        ));
        assert!(matches!(
            solver.invoke(&[json!("1")]),
            Err(HarnessError::Argument { position: 0, .. })
        ));
    }
}
