//! # xml-checks
//!
//! Two independent CI checks for an application source tree:
//!
//! - an XML well-formedness check that scans a directory for XML files and
//!   reports every parser-detected syntax error with file/line/column
//!   precision, and
//! - an accessibility label check that scans Android manifest files for
//!   `<activity>` declarations lacking an `android:label` attribute,
//!   cross-referenced against an exemption list.
//!
//! Both checks collect every violation before deciding pass/fail, render one
//! consolidated report on stdout, and signal failure through an error whose
//! message carries a fixed indicator substring.

pub mod cli;
pub mod collector;
pub mod error;
pub mod exemptions;
pub mod file_discovery;
pub mod label_check;
pub mod manifest;
pub mod output;
pub mod syntax_check;

pub use cli::{LabelCheckCli, SyntaxCheckCli};
pub use collector::{SyntaxErrorCollector, SyntaxProblem};
pub use error::{CheckError, Result};
pub use exemptions::ExemptionSet;
pub use file_discovery::FileDiscovery;
pub use label_check::LabelCheckRunner;
pub use manifest::{scan_manifest, ActivityDeclaration};
pub use output::{
    ACCESSIBILITY_LABEL_CHECK_FAILED_INDICATOR, ACCESSIBILITY_LABEL_CHECK_PASSED_INDICATOR,
    XML_SYNTAX_CHECK_FAILED_INDICATOR, XML_SYNTAX_CHECK_PASSED_INDICATOR,
};
pub use syntax_check::{CheckOutcome, SyntaxCheckRunner};
