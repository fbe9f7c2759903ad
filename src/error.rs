use std::path::PathBuf;

use thiserror::Error;

/// Main error type covering every failure mode of the two checks.
///
/// Recoverable per-file parse problems are never represented here: they are
/// collected as data by the [`crate::collector`] module and surfaced through
/// the consolidated report. Only fatal configuration failures and the final
/// aggregate check decision appear as errors.
#[derive(Error, Debug)]
pub enum CheckError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Manifest file not found: {path}")]
    MissingManifest { path: PathBuf },

    #[error("Failed to interpret manifest: {path} - {details}")]
    ManifestParse { path: PathBuf, details: String },

    #[error("Failed to load exemption asset: {path} - {details}")]
    ExemptionLoad { path: PathBuf, details: String },

    /// Terminal aggregate failure raised once, after all files are processed.
    ///
    /// The display text is the literal indicator substring so that calling
    /// infrastructure can detect the outcome by grepping captured output.
    #[error("{indicator}")]
    CheckFailed { indicator: &'static str },
}

impl CheckError {
    /// Whether this error represents a failed check rather than a broken run.
    pub fn is_check_failure(&self) -> bool {
        matches!(self, CheckError::CheckFailed { .. })
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, CheckError>;
