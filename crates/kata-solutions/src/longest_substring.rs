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

//! Longest substring without repeating characters (problem 0003).

use rustc_hash::FxHashSet;

/// Returns the length, in characters, of the longest run of `text` in which
/// no character occurs twice.
///
/// A window `[left, right)` slides over the characters while a set tracks its
/// members. A new character that is not yet in the window extends it. A
/// repeated one shrinks the window from the left until its earlier
/// occurrence has been dropped, after which it is admitted on the next step.
/// Every character enters and leaves the window at most once, so this runs in
/// O(n).
///
/// # Examples
///
/// ```rust
/// # use kata_solutions::longest_substring::length_of_longest_substring;
/// assert_eq!(length_of_longest_substring("abcabcbb"), 3);
/// assert_eq!(length_of_longest_substring("bbbbb"), 1);
/// assert_eq!(length_of_longest_substring(""), 0);
/// ```
pub fn length_of_longest_substring(text: &str) -> usize {
    let chars: Vec<char> = text.chars().collect();
    let mut window: FxHashSet<char> = FxHashSet::default();
    let mut longest = 0;
    let mut left = 0;
    let mut right = 0;

    while right < chars.len() {
        let incoming = chars[right];
        if window.contains(&incoming) {
            while left < right {
                let outgoing = chars[left];
                window.remove(&outgoing);
                left += 1;
                if outgoing == incoming {
                    break;
                }
            }
        } else {
            window.insert(incoming);
            longest = longest.max(right - left + 1);
            right += 1;
        }
    }

    longest
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    fn exhaustive(text: &str) -> usize {
        let chars: Vec<char> = text.chars().collect();
        let mut best = 0;
        for start in 0..chars.len() {
            let mut seen = std::collections::HashSet::new();
            for &c in &chars[start..] {
                if !seen.insert(c) {
                    break;
                }
            }
            best = best.max(seen.len());
        }
        best
    }

    #[test]
    fn test_known_inputs() {
        assert_eq!(length_of_longest_substring("abcabcbb"), 3);
        assert_eq!(length_of_longest_substring("bbbbb"), 1);
        assert_eq!(length_of_longest_substring("pwwkew"), 3);
        assert_eq!(length_of_longest_substring("dvdf"), 3);
        assert_eq!(length_of_longest_substring("abba"), 2);
        assert_eq!(length_of_longest_substring(" "), 1);
        assert_eq!(length_of_longest_substring(""), 0);
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        assert_eq!(length_of_longest_substring("äöäü"), 3);
        assert_eq!(length_of_longest_substring("日本日本語"), 3);
    }

    #[test]
    fn test_random_inputs_agree_with_exhaustive_search() {
        let mut rng = StdRng::seed_from_u64(3);
        let alphabet = ['a', 'b', 'c', 'd', 'e', ' '];

        for _ in 0..1_000 {
            let len = rng.gen_range(0..30);
            let text: String = (0..len)
                .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
                .collect();
            assert_eq!(
                length_of_longest_substring(&text),
                exhaustive(&text),
                "text {:?}",
                text
            );
        }
    }
}
