use std::path::PathBuf;

use clap::Parser;

use crate::error::{CheckError, Result};

/// Check that XML files in a directory tree are well-formed
#[derive(Parser, Debug, Clone)]
#[command(name = "xml-syntax-check")]
#[command(about = "Scan a directory tree for XML files with syntax errors")]
#[command(version)]
pub struct SyntaxCheckCli {
    /// Root directory to scan recursively
    #[arg(help = "Root directory to scan for XML files")]
    pub root: PathBuf,

    /// File extensions to process (comma-separated)
    #[arg(
        short = 'e',
        long = "extensions",
        default_value = "xml",
        help = "File extensions to process (e.g., 'xml,cmdi')"
    )]
    pub extensions: String,

    /// Exclude file patterns (glob syntax)
    #[arg(long = "exclude", action = clap::ArgAction::Append)]
    pub exclude_patterns: Vec<String>,

    /// Follow symbolic links while scanning
    #[arg(long = "follow-symlinks")]
    pub follow_symlinks: bool,
}

impl SyntaxCheckCli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn get_extensions(&self) -> Vec<String> {
        self.extensions
            .split(',')
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Validate arguments before any scanning starts.
    pub fn validate(&self) -> Result<()> {
        if !self.root.is_dir() {
            return Err(CheckError::Config(format!(
                "Root directory does not exist: {}",
                self.root.display()
            )));
        }
        Ok(())
    }
}

/// Check that Android manifest activities declare accessibility labels
#[derive(Parser, Debug, Clone)]
#[command(name = "accessibility-label-check")]
#[command(about = "Check that Android manifest activities declare accessibility labels")]
#[command(version)]
pub struct LabelCheckCli {
    /// Root directory the manifest paths are relative to
    #[arg(help = "Root directory of the source tree")]
    pub root: PathBuf,

    /// Manifest files to check, relative to the root directory
    #[arg(required = true, help = "Manifest paths relative to the root directory")]
    pub manifests: Vec<PathBuf>,

    /// Exemption asset path (overrides the default under the root)
    #[arg(long = "exemptions")]
    pub exemptions: Option<PathBuf>,

    /// Source tree prefix used to resolve activity display paths
    #[arg(long = "source-root", default_value = crate::label_check::DEFAULT_SOURCE_ROOT)]
    pub source_root: String,
}

impl LabelCheckCli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments before any scanning starts.
    pub fn validate(&self) -> Result<()> {
        if !self.root.is_dir() {
            return Err(CheckError::Config(format!(
                "Root directory does not exist: {}",
                self.root.display()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_syntax_cli_parsing() {
        let cli = SyntaxCheckCli::try_parse_from(["xml-syntax-check", "/tmp"]).unwrap();
        assert_eq!(cli.root, PathBuf::from("/tmp"));
        assert_eq!(cli.get_extensions(), vec!["xml".to_string()]);
    }

    #[test]
    fn test_syntax_cli_extension_list() {
        let cli = SyntaxCheckCli::try_parse_from([
            "xml-syntax-check",
            "/tmp",
            "--extensions",
            "xml, CMDI,",
        ])
        .unwrap();
        assert_eq!(
            cli.get_extensions(),
            vec!["xml".to_string(), "cmdi".to_string()]
        );
    }

    #[test]
    fn test_syntax_cli_follow_symlinks_flag() {
        let cli = SyntaxCheckCli::try_parse_from(["xml-syntax-check", "/tmp"]).unwrap();
        assert!(!cli.follow_symlinks);

        let cli =
            SyntaxCheckCli::try_parse_from(["xml-syntax-check", "/tmp", "--follow-symlinks"])
                .unwrap();
        assert!(cli.follow_symlinks);
    }

    #[test]
    fn test_syntax_cli_missing_root_fails_validation() {
        let cli =
            SyntaxCheckCli::try_parse_from(["xml-syntax-check", "/nonexistent/tree"]).unwrap();
        assert!(cli.validate().is_err());
    }

    #[test]
    fn test_label_cli_requires_manifests() {
        let result = LabelCheckCli::try_parse_from(["accessibility-label-check", "/tmp"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_label_cli_parsing() {
        let cli = LabelCheckCli::try_parse_from([
            "accessibility-label-check",
            "/tmp",
            "app/src/main/AndroidManifest.xml",
            "app/src/main/java/org/example/AndroidManifest.xml",
        ])
        .unwrap();

        assert_eq!(cli.root, PathBuf::from("/tmp"));
        assert_eq!(cli.manifests.len(), 2);
        assert_eq!(cli.source_root, "app/src/main/java");
        assert!(cli.exemptions.is_none());
    }

    #[test]
    fn test_label_cli_exemptions_flag() {
        let cli = LabelCheckCli::try_parse_from([
            "accessibility-label-check",
            "/tmp",
            "AndroidManifest.xml",
            "--exemptions",
            "custom/exemptions.toml",
        ])
        .unwrap();

        assert_eq!(
            cli.exemptions,
            Some(PathBuf::from("custom/exemptions.toml"))
        );
    }
}
