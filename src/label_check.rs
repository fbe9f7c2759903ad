//! Accessibility label check runner.
//!
//! Collects every unlabeled, non-exempt activity across all listed
//! manifests, then decides pass/fail once at the end. Violations are
//! displayed as resolved source-file paths so the report points at the file
//! to fix rather than at a class name.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::error::{CheckError, Result};
use crate::exemptions::ExemptionSet;
use crate::manifest;
use crate::output::{self, ACCESSIBILITY_LABEL_CHECK_FAILED_INDICATOR};
use crate::syntax_check::CheckOutcome;

/// Source tree prefix under which activity classes live.
pub const DEFAULT_SOURCE_ROOT: &str = "app/src/main/java";

/// Runs the accessibility label check over a set of manifests.
pub struct LabelCheckRunner {
    exemptions: ExemptionSet,
    source_root: String,
}

impl LabelCheckRunner {
    /// Create a runner with the given exemption set.
    pub fn new(exemptions: ExemptionSet) -> Self {
        Self {
            exemptions,
            source_root: DEFAULT_SOURCE_ROOT.to_string(),
        }
    }

    /// Override the source tree prefix used for display paths.
    pub fn with_source_root(mut self, source_root: impl Into<String>) -> Self {
        self.source_root = source_root.into();
        self
    }

    /// Run the check over every listed manifest under `root`.
    ///
    /// Each relative path is resolved against `root`; a missing manifest is
    /// a fatal configuration error. Violations are deduplicated and sorted
    /// lexicographically by resolved path (byte order).
    pub fn check(&self, root: &Path, manifest_relative_paths: &[PathBuf]) -> Result<CheckOutcome> {
        let mut violation_paths = BTreeSet::new();

        for relative_path in manifest_relative_paths {
            let manifest_path = root.join(relative_path);
            if !manifest_path.is_file() {
                return Err(CheckError::MissingManifest {
                    path: manifest_path,
                });
            }

            for declaration in manifest::scan_manifest(&manifest_path)? {
                if declaration.has_label {
                    continue;
                }
                let identity = declaration.fully_qualified_name();
                if self.exemptions.is_exempt(&identity) {
                    continue;
                }
                violation_paths.insert(self.display_path(root, &identity));
            }
        }

        let violation_paths: Vec<String> = violation_paths.into_iter().collect();
        let passed = violation_paths.is_empty();
        let report = output::format_label_report(&violation_paths);
        Ok(CheckOutcome { passed, report })
    }

    /// Run the check, print the report, and escalate a failure.
    ///
    /// The report is written to stdout exactly once; a failed check surfaces
    /// as an error carrying the `ACCESSIBILITY LABEL CHECK FAILED` indicator.
    pub fn run(&self, root: &Path, manifest_relative_paths: &[PathBuf]) -> Result<()> {
        let outcome = self.check(root, manifest_relative_paths)?;
        println!("{}", outcome.report);
        outcome.into_result(ACCESSIBILITY_LABEL_CHECK_FAILED_INDICATOR)
    }

    /// Map a fully-qualified identity onto its source file path under root.
    ///
    /// Dot-separated package segments become directory separators, giving
    /// `<root>/<source-root>/<package path>/<ClassName>` with no extension.
    fn display_path(&self, root: &Path, identity: &str) -> String {
        root.join(&self.source_root)
            .join(identity.replace('.', "/"))
            .to_string_lossy()
            .into_owned()
    }
}
