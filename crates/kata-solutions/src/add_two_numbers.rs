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

//! Digit-wise addition of two digit lists (problem 0002).
//!
//! Both operands store their digits least-significant first, so the carry
//! flows in list order: each step reads one digit from each list (an ended
//! list reads as 0), emits `total % 10`, and hands `total / 10` to the next
//! step. The sum is built by a `CarryingSum` iterator that walks both lists in
//! lockstep and collects into a fresh list, one node per step plus one for a
//! final nonzero carry. Stack usage is constant regardless of list length.
//!
//! ## Absence
//!
//! `add_numbers` returns the empty list when either operand is empty. An
//! empty list is a missing operand, not zero (zero is the single node `0`),
//! and a missing operand makes the sum missing as well.

use kata_list::{Digit, DigitList, DigitNode};
use std::iter::FusedIterator;
use tracing::trace;

/// Adds the numbers encoded by `a` and `b`.
///
/// Returns the empty list if either operand is empty. Neither input is
/// modified; the result shares no nodes with them.
///
/// # Examples
///
/// ```rust
/// # use kata_list::DigitList;
/// # use kata_solutions::add_two_numbers::add_numbers;
/// let a = DigitList::from_digits(&[2, 4, 3]).unwrap();
/// let b = DigitList::from_digits(&[5, 6, 4]).unwrap();
/// assert_eq!(add_numbers(&a, &b).to_digits(), vec![7, 0, 8]);
///
/// assert!(add_numbers(&DigitList::empty(), &b).is_empty());
/// ```
pub fn add_numbers(a: &DigitList, b: &DigitList) -> DigitList {
    match (a.head(), b.head()) {
        (Some(a), Some(b)) => add_with_carry(Some(a), Some(b), Digit::ZERO),
        _ => {
            trace!(
                a_empty = a.is_empty(),
                b_empty = b.is_empty(),
                "operand absent, sum is absent"
            );
            DigitList::empty()
        }
    }
}

/// Adds the digit chains starting at `a` and `b` plus an incoming `carry`.
///
/// A chain that is `None` contributes zeros. The result is never empty.
///
/// # Panics
///
/// Panics if both `a` and `b` are `None`: a step with no digits to read means
/// the caller lost track of where the operands end.
///
/// # Examples
///
/// ```rust
/// # use kata_list::{Digit, DigitList};
/// # use kata_solutions::add_two_numbers::add_with_carry;
/// let nines = DigitList::from_digits(&[9, 9]).unwrap();
/// let one = Digit::new(1).unwrap();
/// assert_eq!(add_with_carry(nines.head(), None, one).to_digits(), vec![0, 0, 1]);
/// ```
pub fn add_with_carry(a: Option<&DigitNode>, b: Option<&DigitNode>, carry: Digit) -> DigitList {
    CarryingSum::new(a, b, carry).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// At least one operand still has a digit to read.
    Digits,
    /// Both operands ended with a nonzero carry left to emit.
    FinalCarry,
    Done,
}

/// Iterator over the digits of a sum, least-significant first.
///
/// Each call to `next` performs one addition step. Construct it through
/// `CarryingSum::new` and collect it into a `DigitList`, or consume it lazily.
#[derive(Debug, Clone)]
pub struct CarryingSum<'a> {
    a: Option<&'a DigitNode>,
    b: Option<&'a DigitNode>,
    carry: Digit,
    phase: Phase,
}

impl<'a> CarryingSum<'a> {
    /// Starts a sum at the given nodes with an incoming carry.
    #[inline]
    pub fn new(a: Option<&'a DigitNode>, b: Option<&'a DigitNode>, carry: Digit) -> Self {
        Self {
            a,
            b,
            carry,
            phase: Phase::Digits,
        }
    }

    /// Returns the carry that the next step will add.
    #[inline]
    pub fn carry(&self) -> Digit {
        self.carry
    }
}

impl Iterator for CarryingSum<'_> {
    type Item = Digit;

    fn next(&mut self) -> Option<Self::Item> {
        match self.phase {
            Phase::Done => None,
            Phase::FinalCarry => {
                self.phase = Phase::Done;
                Some(self.carry)
            }
            Phase::Digits => {
                assert!(
                    self.a.is_some() || self.b.is_some(),
                    "called `CarryingSum::next` with both operands absent"
                );

                let digit_a = self.a.map_or(Digit::ZERO, DigitNode::digit);
                let digit_b = self.b.map_or(Digit::ZERO, DigitNode::digit);
                let (digit, carry) = Digit::sum_with_carry(digit_a, digit_b, self.carry);

                self.a = self.a.and_then(DigitNode::next);
                self.b = self.b.and_then(DigitNode::next);
                self.carry = carry;

                if self.a.is_none() && self.b.is_none() {
                    self.phase = if carry.is_zero() {
                        Phase::Done
                    } else {
                        Phase::FinalCarry
                    };
                }

                Some(digit)
            }
        }
    }
}

impl FusedIterator for CarryingSum<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    fn list(digits: &[u8]) -> DigitList {
        DigitList::from_digits(digits).unwrap()
    }

    fn d(v: u8) -> Digit {
        Digit::new(v).unwrap()
    }

    #[test]
    fn test_documented_examples() {
        assert_eq!(
            add_numbers(&list(&[2, 4, 3]), &list(&[5, 6, 4])).to_digits(),
            vec![7, 0, 8]
        );
        assert_eq!(
            add_numbers(&list(&[9, 9, 9]), &list(&[1])).to_digits(),
            vec![0, 0, 0, 1]
        );
    }

    #[test]
    fn test_zero_is_a_value() {
        assert_eq!(add_numbers(&list(&[0]), &list(&[0])).to_digits(), vec![0]);
        assert_eq!(add_numbers(&list(&[0]), &list(&[7, 3])).to_digits(), vec![7, 3]);
    }

    #[test]
    fn test_absence_propagates() {
        let x = list(&[1, 2, 3]);
        assert!(add_numbers(&DigitList::empty(), &x).is_empty());
        assert!(add_numbers(&x, &DigitList::empty()).is_empty());
        assert!(add_numbers(&DigitList::empty(), &DigitList::empty()).is_empty());
        assert!(add_numbers(&DigitList::empty(), &list(&[0])).is_empty());
    }

    #[test]
    fn test_final_carry_only_when_nonzero() {
        assert_eq!(add_numbers(&list(&[5]), &list(&[5])).to_digits(), vec![0, 1]);
        assert_eq!(add_numbers(&list(&[4]), &list(&[5])).to_digits(), vec![9]);
    }

    #[test]
    fn test_operands_of_different_lengths() {
        assert_eq!(
            add_numbers(&list(&[9, 9, 9, 9, 9, 9, 9]), &list(&[9, 9, 9, 9])).to_digits(),
            vec![8, 9, 9, 9, 0, 0, 0, 1]
        );
        assert_eq!(
            add_numbers(&list(&[1]), &list(&[9, 9, 9])).to_digits(),
            vec![0, 0, 0, 1]
        );
    }

    #[test]
    fn test_inputs_are_not_modified() {
        let a = list(&[9, 9]);
        let b = list(&[1]);
        let (a_before, b_before) = (a.clone(), b.clone());

        let sum = add_numbers(&a, &b);
        assert_eq!(sum.to_digits(), vec![0, 0, 1]);
        assert_eq!(a, a_before);
        assert_eq!(b, b_before);
    }

    #[test]
    fn test_add_with_carry_one_sided() {
        let a = list(&[9]);
        assert_eq!(add_with_carry(a.head(), None, d(1)).to_digits(), vec![0, 1]);
        assert_eq!(add_with_carry(None, a.head(), d(0)).to_digits(), vec![9]);
        assert_eq!(add_with_carry(a.head(), None, d(9)).to_digits(), vec![8, 1]);
    }

    #[test]
    #[should_panic(expected = "with both operands absent")]
    fn test_add_with_carry_panics_without_operands() {
        let _ = add_with_carry(None, None, d(1));
    }

    #[test]
    fn test_carrying_sum_is_fused_and_reports_carry() {
        let a = list(&[5]);
        let b = list(&[7]);
        let mut steps = CarryingSum::new(a.head(), b.head(), Digit::ZERO);

        assert_eq!(steps.next(), Some(d(2)));
        assert_eq!(steps.carry(), d(1));
        assert_eq!(steps.next(), Some(d(1)));
        assert_eq!(steps.next(), None);
        assert_eq!(steps.next(), None);
    }

    #[test]
    fn test_random_sums_match_integer_addition() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..2_000 {
            let (shift_x, shift_y): (u32, u32) = (rng.gen_range(0..64), rng.gen_range(0..64));
            let x: u64 = rng.gen_range(0..=u64::MAX >> shift_x);
            let y: u64 = rng.gen_range(0..=u64::MAX >> shift_y);

            let sum = add_numbers(
                &DigitList::from_value(u128::from(x)),
                &DigitList::from_value(u128::from(y)),
            );
            assert_eq!(
                sum.to_value(),
                Some(u128::from(x) + u128::from(y)),
                "{} + {}",
                x,
                y
            );
        }
    }

    #[test]
    fn test_beyond_integer_range() {
        let a = DigitList::from_decimal_str(&"9".repeat(100)).unwrap();
        let b = DigitList::from_decimal_str("1").unwrap();
        let expected = format!("1{}", "0".repeat(100));
        assert_eq!(add_numbers(&a, &b).to_decimal_string(), expected);
    }

    #[test]
    fn test_very_long_operands_do_not_exhaust_the_stack() {
        let len = 1_000_000;
        let a: DigitList = std::iter::repeat_n(d(9), len).collect();
        let b = list(&[1]);

        let sum = add_numbers(&a, &b);
        assert_eq!(sum.len(), len + 1);
        assert!(sum.iter().take(len).all(Digit::is_zero));
        assert_eq!(sum.iter().last(), Some(d(1)));
    }
}
