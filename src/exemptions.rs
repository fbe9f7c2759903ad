//! Exemption asset loading.
//!
//! The accessibility label check consults a TOML asset listing
//! fully-qualified activity identities that are permitted to stay unlabeled.
//! The set is loaded once per run and read-only afterwards.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{CheckError, Result};

/// Default asset location, relative to the check root.
pub const DEFAULT_EXEMPTION_ASSET: &str = "scripts/assets/accessibility_label_exemptions.toml";

/// On-disk shape of the exemption asset.
#[derive(Debug, Deserialize)]
struct ExemptionFile {
    #[serde(default)]
    exempted_activities: Vec<String>,
}

/// Read-only set of fully-qualified activity identities exempt from the
/// label check.
#[derive(Debug, Clone, Default)]
pub struct ExemptionSet {
    exempt_identities: HashSet<String>,
}

impl ExemptionSet {
    /// Create an empty exemption set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a set from identities directly, mainly for tests.
    pub fn from_identities<I, S>(identities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            exempt_identities: identities.into_iter().map(Into::into).collect(),
        }
    }

    /// Load the asset at `path`. A missing or malformed asset is fatal.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| CheckError::ExemptionLoad {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;
        Self::parse(&text).map_err(|details| CheckError::ExemptionLoad {
            path: path.to_path_buf(),
            details,
        })
    }

    /// Load the default asset under `root`.
    ///
    /// An absent default asset yields an empty set so that trees without the
    /// asset still check cleanly; a present-but-malformed asset is fatal.
    pub fn load_default(root: &Path) -> Result<Self> {
        let path = root.join(DEFAULT_EXEMPTION_ASSET);
        if !path.exists() {
            return Ok(Self::empty());
        }
        Self::load(&path)
    }

    fn parse(text: &str) -> std::result::Result<Self, String> {
        let file: ExemptionFile = toml::from_str(text).map_err(|e| e.to_string())?;
        Ok(Self {
            exempt_identities: file.exempted_activities.into_iter().collect(),
        })
    }

    /// Whether the given fully-qualified identity is exempt.
    pub fn is_exempt(&self, identity: &str) -> bool {
        self.exempt_identities.contains(identity)
    }

    pub fn len(&self) -> usize {
        self.exempt_identities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exempt_identities.is_empty()
    }
}
