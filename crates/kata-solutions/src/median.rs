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

//! Median of two sorted arrays (problem 0004).
//!
//! The median is found by selecting order statistics from the two arrays
//! without merging them. `kth_smallest` repeatedly probes up to `k / 2`
//! elements into each array and discards the prefix whose last probed element
//! is smaller: none of those elements can be the k-th smallest. Each round
//! removes about half of the remaining `k`, giving O(log(m + n)) rounds.

use num_traits::PrimInt;

/// Returns the median of the union of two ascending slices.
///
/// For an odd total length this is the middle element; for an even total
/// length, the mean of the two middle elements. Returns `None` when both
/// slices are empty.
///
/// # Examples
///
/// ```rust
/// # use kata_solutions::median::find_median_sorted_arrays;
/// assert_eq!(find_median_sorted_arrays(&[1, 3], &[2]), Some(2.0));
/// assert_eq!(find_median_sorted_arrays(&[1, 2], &[3, 4]), Some(2.5));
/// assert_eq!(find_median_sorted_arrays::<i32>(&[], &[]), None);
/// ```
pub fn find_median_sorted_arrays<T>(a: &[T], b: &[T]) -> Option<f64>
where
    T: PrimInt,
{
    let total = a.len() + b.len();
    if total == 0 {
        return None;
    }

    let middle = total / 2;
    if total % 2 == 1 {
        kth_smallest(a, b, middle + 1).to_f64()
    } else {
        let lower = kth_smallest(a, b, middle).to_f64()?;
        let upper = kth_smallest(a, b, middle + 1).to_f64()?;
        Some((lower + upper) / 2.0)
    }
}

/// Returns the `k`-th smallest element (1-based) of the union of two
/// ascending slices.
///
/// # Panics
///
/// Panics if `k` is zero or exceeds `a.len() + b.len()`.
pub fn kth_smallest<T>(a: &[T], b: &[T], k: usize) -> T
where
    T: PrimInt,
{
    assert!(
        k >= 1 && k <= a.len() + b.len(),
        "called `kth_smallest` with k out of range: k = {} but the combined len is {}",
        k,
        a.len() + b.len()
    );

    let (mut a, mut b, mut k) = (a, b, k);
    loop {
        if a.is_empty() {
            return b[k - 1];
        }
        if b.is_empty() {
            return a[k - 1];
        }
        if k == 1 {
            return a[0].min(b[0]);
        }

        let half = k / 2;
        let i = a.len().min(half);
        let j = b.len().min(half);
        if a[i - 1] < b[j - 1] {
            a = &a[i..];
            k -= i;
        } else {
            b = &b[j..];
            k -= j;
        }
    }
}
