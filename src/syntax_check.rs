//! XML syntax check runner.
//!
//! Build-then-decide pipeline: every candidate file is parsed and its
//! problems collected before any pass/fail decision is made, so a single
//! malformed file never hides problems in the files after it.

use std::fs;
use std::path::{Path, PathBuf};

use crate::collector::{SyntaxErrorCollector, SyntaxProblem};
use crate::error::{CheckError, Result};
use crate::file_discovery::FileDiscovery;
use crate::output::{self, XML_SYNTAX_CHECK_FAILED_INDICATOR};

/// Final result of one check run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    /// Whether the check passed.
    pub passed: bool,
    /// Consolidated report text, written to stdout exactly once by the caller.
    pub report: String,
}

impl CheckOutcome {
    /// Convert a failed outcome into the terminal check error.
    ///
    /// The error's display text is the literal `indicator` substring; a
    /// passing outcome converts to `Ok(())`.
    pub fn into_result(self, indicator: &'static str) -> Result<()> {
        if self.passed {
            Ok(())
        } else {
            Err(CheckError::CheckFailed { indicator })
        }
    }
}

/// Runs the XML syntax check over a directory tree.
pub struct SyntaxCheckRunner {
    discovery: FileDiscovery,
    collector: SyntaxErrorCollector,
}

impl SyntaxCheckRunner {
    /// Create a runner that scans `*.xml` files.
    pub fn new() -> Self {
        Self {
            discovery: FileDiscovery::new(),
            collector: SyntaxErrorCollector::new(),
        }
    }

    /// Create a runner with custom file discovery.
    pub fn with_discovery(discovery: FileDiscovery) -> Self {
        Self {
            discovery,
            collector: SyntaxErrorCollector::new(),
        }
    }

    /// Run the check over every candidate file under `root`.
    ///
    /// Files are scanned in lexicographic path order; the report lists
    /// offending files most-recently-scanned first. The ordering is part of
    /// the observable contract relied on by the CI tooling that greps these
    /// reports, so it must stay byte-stable.
    ///
    /// Returns `Err` only for fatal configuration failures (e.g. a missing
    /// root directory); a failed check is reported through
    /// [`CheckOutcome::passed`].
    pub fn check(&self, root: &Path) -> Result<CheckOutcome> {
        let files = self.discovery.discover_files(root)?;

        let mut problems_by_file: Vec<(PathBuf, Vec<SyntaxProblem>)> = Vec::new();
        for path in files {
            // Decode leniently: files in legacy encodings still parse on
            // their ASCII structure instead of killing the whole scan.
            let bytes = fs::read(&path)?;
            let text = String::from_utf8_lossy(&bytes);
            let problems = self.collector.collect(&text);
            if !problems.is_empty() {
                problems_by_file.push((path, problems));
            }
        }

        // Report blocks appear in reverse of scan order.
        problems_by_file.reverse();

        let passed = problems_by_file.is_empty();
        let report = output::format_syntax_report(&problems_by_file);
        Ok(CheckOutcome { passed, report })
    }

    /// Run the check, print the report, and escalate a failure.
    ///
    /// This is the process-facing entry point: the report is written to
    /// stdout exactly once, and a failed check surfaces as an error carrying
    /// the `XML SYNTAX CHECK FAILED` indicator.
    pub fn run(&self, root: &Path) -> Result<()> {
        let outcome = self.check(root)?;
        println!("{}", outcome.report);
        outcome.into_result(XML_SYNTAX_CHECK_FAILED_INDICATOR)
    }
}

impl Default for SyntaxCheckRunner {
    fn default() -> Self {
        Self::new()
    }
}
