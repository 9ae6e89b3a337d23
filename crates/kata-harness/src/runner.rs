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

//! Runs fixture files against the registered solutions.
//!
//! A `Runner` is configured with a consuming builder and produces a `Report`
//! with one entry per fixture file. Case failures are recorded in the report;
//! only problems that prevent a fixture from being read at all (missing
//! directory, unreadable or malformed file, unknown function) abort the run.

use crate::{
    args::values_match,
    error::HarnessError,
    registry,
    testcases::{FixtureFile, TestCases, discover, find_problems_dir},
};
use serde_json::Value;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Why a single case did not pass.
#[derive(Debug)]
pub enum CaseOutcome {
    /// The solution returned something other than the expected value.
    Mismatch { expected: Value, actual: Value },
    /// The case arguments could not be passed to the solution.
    Rejected(HarnessError),
}

/// A failing case of a fixture file.
#[derive(Debug)]
pub struct CaseFailure {
    pub index: usize,
    pub input: Vec<Value>,
    pub outcome: CaseOutcome,
}

impl std::fmt::Display for CaseFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let input = Value::from(self.input.clone());
        match &self.outcome {
            CaseOutcome::Mismatch { expected, actual } => write!(
                f,
                "case {}: input {} expected {} but got {}",
                self.index, input, expected, actual
            ),
            CaseOutcome::Rejected(e) => write!(
                f,
                "case {}: input {} rejected: {}",
                self.index, input, e
            ),
        }
    }
}

/// The results of one fixture file.
#[derive(Debug)]
pub struct FixtureReport {
    pub slug: String,
    pub function: String,
    pub passed: usize,
    pub failures: Vec<CaseFailure>,
}

impl FixtureReport {
    /// Returns the number of cases that ran.
    #[inline]
    pub fn total(&self) -> usize {
        self.passed + self.failures.len()
    }

    /// Returns `true` if every case passed.
    #[inline]
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// The results of a whole run.
#[derive(Debug, Default)]
pub struct Report {
    pub fixtures: Vec<FixtureReport>,
}

impl Report {
    #[inline]
    pub fn passed(&self) -> usize {
        self.fixtures.iter().map(|r| r.passed).sum()
    }

    #[inline]
    pub fn failed(&self) -> usize {
        self.fixtures.iter().map(|r| r.failures.len()).sum()
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        self.fixtures.iter().all(FixtureReport::is_success)
    }

    /// Iterates over every failing case together with its fixture.
    pub fn failures(&self) -> impl Iterator<Item = (&FixtureReport, &CaseFailure)> {
        self.fixtures
            .iter()
            .flat_map(|r| r.failures.iter().map(move |f| (r, f)))
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{} fixtures, {} cases passed, {} failed",
            self.fixtures.len(),
            self.passed(),
            self.failed()
        )?;
        for (fixture, failure) in self.failures() {
            writeln!(f, "  {} ({}): {}", fixture.slug, fixture.function, failure)?;
        }
        Ok(())
    }
}

/// Runs fixture files against the solutions.
///
/// # Examples
///
/// ```rust,no_run
/// # use kata_harness::Runner;
/// let report = Runner::new().with_filter("0001").run().unwrap();
/// assert!(report.is_success());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Runner {
    problems_dir: Option<PathBuf>,
    filter: Option<String>,
}

impl Runner {
    /// Creates a runner that looks for a `problems` directory above this crate
    /// and runs every fixture in it.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads fixtures from `dir` instead of searching for one.
    #[inline]
    pub fn with_problems_dir<P>(mut self, dir: P) -> Self
    where
        P: Into<PathBuf>,
    {
        self.problems_dir = Some(dir.into());
        self
    }

    /// Only runs fixtures whose directory name contains `pattern`.
    #[inline]
    pub fn with_filter<S>(mut self, pattern: S) -> Self
    where
        S: Into<String>,
    {
        self.filter = Some(pattern.into());
        self
    }

    /// Returns the problems directory this runner reads from.
    ///
    /// # Errors
    ///
    /// Returns `HarnessError::Io` with `NotFound` if no directory was set and
    /// none can be found.
    pub fn problems_dir(&self) -> Result<PathBuf, HarnessError> {
        if let Some(dir) = &self.problems_dir {
            return Ok(dir.clone());
        }
        find_problems_dir(env!("CARGO_MANIFEST_DIR")).ok_or_else(|| {
            HarnessError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "could not find a 'problems/' directory",
            ))
        })
    }

    /// Runs every selected fixture.
    ///
    /// # Errors
    ///
    /// Returns the first error that prevents a fixture from running at all.
    pub fn run(&self) -> Result<Report, HarnessError> {
        let dir = self.problems_dir()?;
        let mut report = Report::default();

        for fixture in discover(&dir)? {
            if let Some(filter) = &self.filter {
                if !fixture.slug.contains(filter.as_str()) {
                    continue;
                }
            }
            report.fixtures.push(run_fixture(&fixture)?);
        }

        info!(
            fixtures = report.fixtures.len(),
            passed = report.passed(),
            failed = report.failed(),
            "run finished"
        );
        Ok(report)
    }
}

/// Runs all cases of one fixture file.
///
/// # Errors
///
/// Returns an error if the file cannot be loaded or names an unknown
/// function. Individual case failures are recorded in the report instead.
pub fn run_fixture(fixture: &FixtureFile) -> Result<FixtureReport, HarnessError> {
    let cases = TestCases::from_path(&fixture.path)?;
    let solver = registry::lookup(&cases.function)?;
    info!(
        slug = %fixture.slug,
        function = solver.function(),
        cases = cases.cases.len(),
        "running fixture"
    );

    let mut report = FixtureReport {
        slug: fixture.slug.clone(),
        function: cases.function.clone(),
        passed: 0,
        failures: Vec::new(),
    };

    for (index, case) in cases.cases.into_iter().enumerate() {
        let outcome = match solver.invoke(&case.input) {
            Ok(actual) if values_match(&case.output, &actual) => None,
            Ok(actual) => Some(CaseOutcome::Mismatch {
                expected: case.output,
                actual,
            }),
            Err(e) => Some(CaseOutcome::Rejected(e)),
        };

        match outcome {
            None => {
                debug!(slug = %fixture.slug, index, "case passed");
                report.passed += 1;
            }
            Some(outcome) => {
                let failure = CaseFailure {
                    index,
                    input: case.input,
                    outcome,
                };
                warn!(slug = %fixture.slug, "{}", failure);
                report.failures.push(failure);
            }
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn report_with(passed: usize, failures: Vec<CaseFailure>) -> FixtureReport {
        FixtureReport {
            slug: "0007-reverse-integer".to_string(),
            function: "reverse".to_string(),
            passed,
            failures,
        }
    }

    #[test]
    fn test_report_counts() {
        let failure = CaseFailure {
            index: 3,
            input: vec![json!(10)],
            outcome: CaseOutcome::Mismatch {
                expected: json!(2),
                actual: json!(1),
            },
        };
        let report = Report {
            fixtures: vec![report_with(4, Vec::new()), report_with(2, vec![failure])],
        };

        assert_eq!(report.passed(), 6);
        assert_eq!(report.failed(), 1);
        assert!(!report.is_success());
        assert_eq!(report.fixtures[1].total(), 3);
        assert_eq!(report.failures().count(), 1);
    }

    #[test]
    fn test_failure_display() {
        let mismatch = CaseFailure {
            index: 0,
            input: vec![json!(10)],
            outcome: CaseOutcome::Mismatch {
                expected: json!(2),
                actual: json!(1),
            },
        };
        assert_eq!(mismatch.to_string(), "case 0: input [10] expected 2 but got 1");

        let rejected = CaseFailure {
            index: 1,
            input: vec![json!("x")],
            outcome: CaseOutcome::Rejected(HarnessError::Argument {
                position: 0,
                reason: "expected an integer".to_string(),
            }),
        };
        assert_eq!(
            rejected.to_string(),
            "case 1: input [\"x\"] rejected: Argument 0 is invalid: expected an integer"
        );
    }

    #[test]
    fn test_empty_report_is_a_success() {
        let report = Report::default();
        assert!(report.is_success());
        assert_eq!(report.to_string(), "0 fixtures, 0 cases passed, 0 failed\n");
    }

    #[test]
    fn test_explicit_problems_dir_wins() {
        let runner = Runner::new().with_problems_dir("/nowhere/problems");
        assert_eq!(runner.problems_dir().unwrap(), PathBuf::from("/nowhere/problems"));
        assert!(matches!(runner.run(), Err(HarnessError::Io(_))));
    }
}
