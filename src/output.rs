//! Report rendering and outcome indicators.
//!
//! Both checks communicate their outcome through fixed literal indicator
//! strings: on success the indicator is the entire stdout content, on failure
//! the indicator is embedded in the raised error so calling infrastructure
//! can detect the result by grepping captured output.

use std::path::Path;

use crate::collector::SyntaxProblem;

/// Sole stdout content of a passing syntax check.
pub const XML_SYNTAX_CHECK_PASSED_INDICATOR: &str = "XML SYNTAX CHECK PASSED";

/// Indicator substring carried by the syntax check failure error.
pub const XML_SYNTAX_CHECK_FAILED_INDICATOR: &str = "XML SYNTAX CHECK FAILED";

/// Sole stdout content of a passing accessibility label check.
pub const ACCESSIBILITY_LABEL_CHECK_PASSED_INDICATOR: &str = "ACCESSIBILITY LABEL CHECK PASSED";

/// Indicator substring carried by the label check failure error.
pub const ACCESSIBILITY_LABEL_CHECK_FAILED_INDICATOR: &str = "ACCESSIBILITY LABEL CHECK FAILED";

/// Heading of the label check failure report.
pub const LABEL_FAILURE_HEADING: &str = "Accessibility label missing for Activities:";

/// Remediation note pointing at the exemption asset.
pub const LABEL_FAILURE_NOTE_EXEMPTION_ASSET: &str = "If this is correct, please update \
     scripts/assets/accessibility_label_exemptions.toml";

/// Remediation note about calling exemptions out in review.
pub const LABEL_FAILURE_NOTE_REVIEW: &str = "Note that, in general, all Activities should have \
     labels. If you choose to add an exemption, please specifically call this out in your PR \
     description.";

/// Format one syntax problem as `<path>:<line>:<column>: <message>`.
pub fn format_syntax_problem(path: &Path, problem: &SyntaxProblem) -> String {
    format!(
        "{}:{}:{}: {}",
        path.display(),
        problem.line,
        problem.column,
        problem.message
    )
}

/// Render the consolidated syntax check report.
///
/// `problems_by_file` must already be in display order (reverse of scan
/// order) and contain only files that actually reported problems. An empty
/// input renders the PASS indicator.
pub fn format_syntax_report(problems_by_file: &[(std::path::PathBuf, Vec<SyntaxProblem>)]) -> String {
    if problems_by_file.is_empty() {
        return XML_SYNTAX_CHECK_PASSED_INDICATOR.to_string();
    }

    let mut lines = Vec::new();
    for (path, problems) in problems_by_file {
        for problem in problems {
            lines.push(format_syntax_problem(path, problem));
        }
    }
    lines.join("\n")
}

/// Render the consolidated label check report.
///
/// `violation_paths` must already be deduplicated and sorted. An empty input
/// renders the PASS indicator.
pub fn format_label_report(violation_paths: &[String]) -> String {
    if violation_paths.is_empty() {
        return ACCESSIBILITY_LABEL_CHECK_PASSED_INDICATOR.to_string();
    }

    let mut report = String::new();
    report.push_str(LABEL_FAILURE_HEADING);
    for path in violation_paths {
        report.push_str("\n- ");
        report.push_str(path);
    }
    report.push_str("\n\n");
    report.push_str(LABEL_FAILURE_NOTE_EXEMPTION_ASSET);
    report.push('\n');
    report.push_str(LABEL_FAILURE_NOTE_REVIEW);
    report
}
