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

//! Longest palindromic substring (problem 0005).
//!
//! Center expansion: every character and every gap between neighbouring
//! characters is a candidate center, visited left to right as
//! `char 0, gap 0|1, char 1, gap 1|2, ...`. Each center grows outwards while
//! both ends match. A later center only replaces the best palindrome if it is
//! strictly longer, so among equally long palindromes the leftmost wins.
//! Worst case O(n^2) time, O(n) space for the character buffer.

/// Returns the longest palindromic substring of `text`, measured in
/// characters. Ties go to the leftmost candidate. Empty input yields an empty
/// string.
///
/// # Examples
///
/// ```rust
/// # use kata_solutions::palindrome::longest_palindrome;
/// assert_eq!(longest_palindrome("babad"), "bab");
/// assert_eq!(longest_palindrome("cbbd"), "bb");
/// assert_eq!(longest_palindrome(""), "");
/// ```
pub fn longest_palindrome(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
        return String::new();
    }

    let mut best_start = 0;
    let mut best_len = 1;
    for center in 0..(2 * chars.len() - 1) {
        let (start, len) = expand_around(&chars, center);
        if len > best_len {
            best_start = start;
            best_len = len;
        }
    }

    chars[best_start..best_start + best_len].iter().collect()
}

/// Expands the palindrome around `center` and returns `(start, len)`.
///
/// Even centers `2k` sit on character `k`; odd centers `2k + 1` sit on the gap
/// between characters `k` and `k + 1`.
#[inline]
fn expand_around(chars: &[char], center: usize) -> (usize, usize) {
    // Half-open window that is already known to be a palindrome.
    let mut left = center.div_ceil(2);
    let mut right = center / 2 + 1;

    while left > 0 && right < chars.len() && chars[left - 1] == chars[right] {
        left -= 1;
        right += 1;
    }

    (left, right - left)
}
