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

//! Loading and discovery of `testcases.json` fixture files.
//!
//! Fixtures live in one directory per problem, named `NNNN-slug`, inside a
//! common problems directory:
//!
//! ```text
//! problems/
//!   0001-two-sum/testcases.json
//!   0002-add-two-numbers/testcases.json
//! ```
//!
//! Each file names the function under test, optionally describes its
//! parameter and return types, and lists the cases as positional JSON inputs
//! with the expected output.

use crate::error::HarnessError;
use serde::Deserialize;
use serde_json::Value;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// The file name of a fixture inside a problem directory.
pub const FIXTURE_FILE_NAME: &str = "testcases.json";

/// The contents of one fixture file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCases {
    /// The fixture name of the function under test, e.g. `twoSum`.
    pub function: String,
    /// Descriptive parameter types, e.g. `["int[]", "int"]`.
    #[serde(default)]
    pub param_types: Vec<String>,
    /// Descriptive return type, e.g. `ListNode`.
    #[serde(default)]
    pub return_type: Option<String>,
    pub cases: Vec<TestCase>,
}

/// A single case: positional arguments and the expected result.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TestCase {
    pub input: Vec<Value>,
    pub output: Value,
}

impl TestCases {
    /// Parses fixture JSON.
    ///
    /// # Errors
    ///
    /// Returns `HarnessError::Json` if the text is not a valid fixture.
    pub fn from_json(text: &str) -> Result<Self, HarnessError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads and parses the fixture file at `path`.
    ///
    /// # Errors
    ///
    /// Returns `HarnessError::Io` if the file cannot be read and
    /// `HarnessError::Json` if it is not a valid fixture.
    pub fn from_path<P>(path: P) -> Result<Self, HarnessError>
    where
        P: AsRef<Path>,
    {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}

/// A discovered fixture: its problem directory name and file path.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct FixtureFile {
    pub slug: String,
    pub path: PathBuf,
}

/// Lists the fixture files of every problem directory below `problems_dir`,
/// sorted by directory name.
///
/// Directories without a fixture file are skipped.
///
/// # Errors
///
/// Returns `HarnessError::Io` if `problems_dir` cannot be read.
pub fn discover<P>(problems_dir: P) -> Result<Vec<FixtureFile>, HarnessError>
where
    P: AsRef<Path>,
{
    let mut fixtures = Vec::new();
    for entry in fs::read_dir(problems_dir)? {
        let dir = entry?.path();
        let path = dir.join(FIXTURE_FILE_NAME);
        if !path.is_file() {
            continue;
        }
        let Some(slug) = dir.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        fixtures.push(FixtureFile {
            slug: slug.to_string(),
            path,
        });
    }

    fixtures.sort();
    Ok(fixtures)
}

/// Finds a `problems` directory in `start` or one of its ancestors.
pub fn find_problems_dir<P>(start: P) -> Option<PathBuf>
where
    P: AsRef<Path>,
{
    let mut cur: Option<&Path> = Some(start.as_ref());
    while let Some(p) = cur {
        let cand = p.join("problems");
        if cand.is_dir() {
            return Some(cand);
        }
        cur = p.parent();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_full_fixture() {
        let text = r#"{
            "function": "twoSum",
            "paramTypes": ["int[]", "int"],
            "returnType": "int[]",
            "cases": [
                { "input": [[2, 7, 11, 15], 9], "output": [0, 1] },
                { "input": [[1, 2], 7], "output": null }
            ]
        }"#;

        let fixture = TestCases::from_json(text).unwrap();
        assert_eq!(fixture.function, "twoSum");
        assert_eq!(fixture.param_types, vec!["int[]", "int"]);
        assert_eq!(fixture.return_type.as_deref(), Some("int[]"));
        assert_eq!(fixture.cases.len(), 2);
        assert_eq!(fixture.cases[0].input, vec![json!([2, 7, 11, 15]), json!(9)]);
        assert_eq!(fixture.cases[1].output, Value::Null);
    }

    #[test]
    fn test_type_descriptions_are_optional() {
        let text = r#"{ "function": "reverse", "cases": [ { "input": [1], "output": 1 } ] }"#;
        let fixture = TestCases::from_json(text).unwrap();
        assert!(fixture.param_types.is_empty());
        assert_eq!(fixture.return_type, None);
    }

    #[test]
    fn test_malformed_fixture_is_a_json_error() {
        assert!(matches!(TestCases::from_json("{"), Err(HarnessError::Json(_))));
        assert!(matches!(
            TestCases::from_json(r#"{ "function": "reverse" }"#),
            Err(HarnessError::Json(_))
        ));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("does-not-exist.json");
        assert!(matches!(TestCases::from_path(path), Err(HarnessError::Io(_))));
    }

    #[test]
    fn test_problems_dir_is_found_from_the_crate() {
        let dir = find_problems_dir(env!("CARGO_MANIFEST_DIR")).unwrap();
        assert!(dir.ends_with("problems"));

        let fixtures = discover(&dir).unwrap();
        assert!(!fixtures.is_empty());
        assert!(fixtures.windows(2).all(|w| w[0].slug < w[1].slug));
        assert!(fixtures.iter().all(|f| f.path.ends_with(FIXTURE_FILE_NAME)));
    }
}
