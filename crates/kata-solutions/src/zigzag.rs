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

//! Zigzag conversion (problem 0006).
//!
//! Writing `text` down and diagonally up across `rows` rows repeats every
//! `2 * (rows - 1)` characters. Row `r` receives the character at `r` in every
//! cycle and, for rows strictly between the first and the last, a second one
//! on the rising diagonal at `cycle - r`. Reading the rows top to bottom
//! therefore needs no grid, only index arithmetic.

/// Reads `text` written in a zigzag over `rows` rows, row by row.
///
/// With `rows <= 1` there is no zigzag and the text is returned unchanged.
///
/// # Examples
///
/// ```rust
/// # use kata_solutions::zigzag::convert;
/// assert_eq!(convert("PAYPALISHIRING", 3), "PAHNAPLSIIGYIR");
/// assert_eq!(convert("PAYPALISHIRING", 4), "PINALSIGYAHRPI");
/// assert_eq!(convert("AB", 1), "AB");
/// ```
pub fn convert(text: &str, rows: usize) -> String {
    if rows <= 1 {
        return text.to_owned();
    }

    let chars: Vec<char> = text.chars().collect();
    let cycle = 2 * (rows - 1);
    let mut out = String::with_capacity(text.len());

    for row in 0..rows {
        let is_border = row == 0 || row == rows - 1;
        let mut index = row;
        while index < chars.len() {
            out.push(chars[index]);
            if !is_border {
                let diagonal = index + cycle - 2 * row;
                if diagonal < chars.len() {
                    out.push(chars[diagonal]);
                }
            }
            index += cycle;
        }
    }

    out
}
