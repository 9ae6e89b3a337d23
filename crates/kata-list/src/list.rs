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

//! Owned singly linked digit lists.
//!
//! `DigitList` owns an optional chain of boxed `DigitNode`s. Nodes are only
//! reachable by shared reference from outside this crate, so every list is
//! built here and the single-owner chain can never be spliced into a second
//! list. Dropping, cloning, comparing, and formatting walk the chain
//! iteratively; none of them recurse per node.

use crate::digit::Digit;
use std::iter::FusedIterator;

/// One node of a digit list: a digit and the owning link to the next node.
pub struct DigitNode {
    digit: Digit,
    next: Option<Box<DigitNode>>,
}

impl DigitNode {
    #[inline]
    pub(crate) fn new(digit: Digit) -> Self {
        Self { digit, next: None }
    }

    /// Returns the digit stored in this node.
    #[inline(always)]
    pub fn digit(&self) -> Digit {
        self.digit
    }

    /// Returns the next, more significant node, if any.
    #[inline(always)]
    pub fn next(&self) -> Option<&DigitNode> {
        self.next.as_deref()
    }

    /// Returns `true` if a more significant node follows this one.
    #[inline(always)]
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Returns the link slot that follows this node, for appending.
    #[inline(always)]
    pub(crate) fn next_slot(&mut self) -> &mut Option<Box<DigitNode>> {
        &mut self.next
    }
}

impl std::fmt::Debug for DigitNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DigitNode")
            .field("digit", &self.digit)
            .field("has_next", &self.has_next())
            .finish()
    }
}

/// A non-negative integer stored as digits, least-significant first.
///
/// The empty list encodes no number (an absent operand), which is distinct
/// from zero, encoded as a single `0` node.
///
/// # Examples
///
/// ```rust
/// # use kata_list::{Digit, DigitList};
/// let list: DigitList = [2, 4, 3]
///     .into_iter()
///     .map(|v| Digit::new(v).unwrap())
///     .collect();
/// assert_eq!(list.len(), 3);
/// assert_eq!(list.to_string(), "[2, 4, 3]");
/// assert!(DigitList::empty().is_empty());
/// ```
#[derive(Default)]
pub struct DigitList {
    head: Option<Box<DigitNode>>,
}

impl DigitList {
    /// Creates the empty list.
    #[inline]
    pub const fn empty() -> Self {
        Self { head: None }
    }

    /// Creates a list holding exactly one digit.
    #[inline]
    pub fn single(digit: Digit) -> Self {
        Self {
            head: Some(Box::new(DigitNode::new(digit))),
        }
    }

    /// Returns `true` if the list holds no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the number of nodes. This walks the whole list.
    #[inline]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Returns the least-significant node, if any.
    #[inline]
    pub fn head(&self) -> Option<&DigitNode> {
        self.head.as_deref()
    }

    /// Iterates over the digits, least-significant first.
    #[inline]
    pub fn iter(&self) -> Digits<'_> {
        Digits {
            node: self.head.as_deref(),
        }
    }

    /// Inserts `digit` as the new least-significant digit.
    ///
    /// This multiplies the encoded value by ten and adds `digit`.
    pub fn push_front(&mut self, digit: Digit) {
        let mut node = Box::new(DigitNode::new(digit));
        node.next = self.head.take();
        self.head = Some(node);
    }
}

impl Drop for DigitList {
    fn drop(&mut self) {
        let mut cursor = self.head.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
    }
}

impl Clone for DigitList {
    fn clone(&self) -> Self {
        self.iter().collect()
    }
}

impl PartialEq for DigitList {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for DigitList {}

impl std::hash::Hash for DigitList {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        for digit in self.iter() {
            digit.hash(state);
        }
    }
}

impl std::fmt::Debug for DigitList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter().map(Digit::get)).finish()
    }
}

impl std::fmt::Display for DigitList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, digit) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", digit)?;
        }
        write!(f, "]")
    }
}

impl FromIterator<Digit> for DigitList {
    /// Builds a list in iteration order: the first digit becomes the head.
    fn from_iter<I: IntoIterator<Item = Digit>>(iter: I) -> Self {
        let mut list = Self::empty();
        let mut tail = &mut list.head;
        for digit in iter {
            tail = tail.insert(Box::new(DigitNode::new(digit))).next_slot();
        }
        list
    }
}

impl<'a> IntoIterator for &'a DigitList {
    type Item = Digit;
    type IntoIter = Digits<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over the digits of a list, least-significant first.
#[derive(Debug, Clone)]
pub struct Digits<'a> {
    node: Option<&'a DigitNode>,
}

impl Iterator for Digits<'_> {
    type Item = Digit;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.node?;
        self.node = node.next();
        Some(node.digit)
    }
}

impl FusedIterator for Digits<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(v: u8) -> Digit {
        Digit::new(v).unwrap()
    }

    fn list(values: &[u8]) -> DigitList {
        values.iter().map(|&v| d(v)).collect()
    }

    fn raw(list: &DigitList) -> Vec<u8> {
        list.iter().map(Digit::get).collect()
    }

    #[test]
    fn test_empty_list() {
        let l = DigitList::empty();
        assert!(l.is_empty());
        assert_eq!(l.len(), 0);
        assert!(l.head().is_none());
        assert_eq!(l.iter().next(), None);
        assert_eq!(l, DigitList::default());
    }

    #[test]
    fn test_collect_preserves_order() {
        let l = list(&[2, 4, 3]);
        assert_eq!(raw(&l), vec![2, 4, 3]);
        assert_eq!(l.len(), 3);

        let head = l.head().unwrap();
        assert_eq!(head.digit(), d(2));
        assert!(head.has_next());
        let last = head.next().and_then(DigitNode::next).unwrap();
        assert_eq!(last.digit(), d(3));
        assert!(!last.has_next());
    }

    #[test]
    fn test_single_is_not_empty() {
        let zero = DigitList::single(Digit::ZERO);
        assert!(!zero.is_empty());
        assert_eq!(raw(&zero), vec![0]);
        assert_ne!(zero, DigitList::empty());
    }

    #[test]
    fn test_push_front_prepends_least_significant() {
        let mut l = list(&[4, 3]);
        l.push_front(d(2));
        assert_eq!(raw(&l), vec![2, 4, 3]);

        let mut e = DigitList::empty();
        e.push_front(d(9));
        assert_eq!(raw(&e), vec![9]);
    }

    #[test]
    fn test_clone_is_independent() {
        let original = list(&[1, 2, 3]);
        let mut copy = original.clone();
        assert_eq!(original, copy);

        copy.push_front(d(0));
        assert_eq!(raw(&original), vec![1, 2, 3]);
        assert_eq!(raw(&copy), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_equality_is_structural() {
        assert_eq!(list(&[1, 0]), list(&[1, 0]));
        assert_ne!(list(&[1, 0]), list(&[1]));
        assert_ne!(list(&[1]), list(&[2]));
    }

    #[test]
    fn test_formatting() {
        let l = list(&[7, 0, 8]);
        assert_eq!(format!("{}", l), "[7, 0, 8]");
        assert_eq!(format!("{:?}", l), "[7, 0, 8]");
        assert_eq!(format!("{}", DigitList::empty()), "[]");

        let node = format!("{:?}", l.head().unwrap());
        assert!(node.contains("DigitNode"));
        assert!(node.contains("has_next: true"));
    }

    #[test]
    fn test_long_list_drops_without_recursion() {
        let long: DigitList = std::iter::repeat_n(d(9), 1_000_000).collect();
        assert_eq!(long.len(), 1_000_000);
        let copy = long.clone();
        assert_eq!(copy, long);
        drop(long);
        drop(copy);
    }

    #[test]
    fn test_borrowing_into_iterator() {
        let l = list(&[5, 6]);
        let mut seen = Vec::new();
        for digit in &l {
            seen.push(digit.get());
        }
        assert_eq!(seen, vec![5, 6]);
    }
}
