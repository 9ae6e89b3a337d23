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

//! Complement lookup over a sequence (problem 0001).
//!
//! Finds two positions whose values add up to a target in a single forward
//! pass. A hash map remembers the most recent position of every value seen so
//! far; each new element asks whether its complement is already in the map.

use kata_core::num::ops::CheckedSubVal;
use rustc_hash::FxHashMap;
use std::hash::Hash;
use tracing::trace;

/// A position in the searched sequence.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementIndex(usize);

impl ElementIndex {
    #[inline(always)]
    pub const fn new(position: usize) -> Self {
        Self(position)
    }

    /// Returns the raw position.
    #[inline(always)]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl std::fmt::Debug for ElementIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ElementIndex({})", self.0)
    }
}

impl std::fmt::Display for ElementIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ElementIndex> for usize {
    fn from(index: ElementIndex) -> Self {
        index.0
    }
}

/// Two distinct positions whose values sum to the target.
///
/// `first` is always the earlier position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ComplementPair {
    first: ElementIndex,
    second: ElementIndex,
}

impl ComplementPair {
    /// Creates a new pair.
    ///
    /// # Panics
    ///
    /// Panics if `first` is not strictly before `second`.
    #[inline]
    pub fn new(first: ElementIndex, second: ElementIndex) -> Self {
        assert!(
            first < second,
            "called `ComplementPair::new` with unordered indices: first = {}, second = {}",
            first,
            second
        );

        Self { first, second }
    }

    /// Returns the earlier position.
    #[inline]
    pub fn first(&self) -> ElementIndex {
        self.first
    }

    /// Returns the later position.
    #[inline]
    pub fn second(&self) -> ElementIndex {
        self.second
    }

    /// Returns both positions as raw `usize`s, earlier first.
    #[inline]
    pub fn as_tuple(&self) -> (usize, usize) {
        (self.first.get(), self.second.get())
    }
}

impl std::fmt::Display for ComplementPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.first.get(), self.second.get())
    }
}

/// Returns the first pair of positions `(j, i)`, `j < i`, with
/// `sequence[j] + sequence[i] == target`, scanning left to right.
///
/// The match is reported as soon as the later element is reached, pairing it
/// with the most recent earlier occurrence of its complement. If subtracting
/// an element from `target` overflows `T`, no value of `T` can complete the
/// pair, so the lookup is skipped for that element.
///
/// Runs in O(n) time and O(n) auxiliary space. Returns `None` when no pair
/// exists.
///
/// # Examples
///
/// ```rust
/// # use kata_solutions::two_sum::find_complement_pair;
/// let pair = find_complement_pair(&[2, 7, 11, 15], 9).unwrap();
/// assert_eq!(pair.as_tuple(), (0, 1));
///
/// assert_eq!(find_complement_pair(&[3, 2, 4], 6).map(|p| p.as_tuple()), Some((1, 2)));
/// assert!(find_complement_pair(&[1, 2, 3], 100).is_none());
/// ```
pub fn find_complement_pair<T>(sequence: &[T], target: T) -> Option<ComplementPair>
where
    T: Copy + Eq + Hash + CheckedSubVal,
{
    let mut seen: FxHashMap<T, ElementIndex> =
        FxHashMap::with_capacity_and_hasher(sequence.len(), Default::default());

    for (position, &value) in sequence.iter().enumerate() {
        let index = ElementIndex::new(position);

        if let Some(earlier) = target
            .checked_sub_val(value)
            .and_then(|complement| seen.get(&complement).copied())
        {
            trace!(first = earlier.get(), second = position, "complement found");
            return Some(ComplementPair::new(earlier, index));
        }

        seen.insert(value, index);
    }

    None
}
