//! Candidate file discovery.
//!
//! Recursive, deterministic enumeration of check candidates under a root
//! directory. Ordering is part of the observable report contract, so
//! discovered paths are always returned in lexicographic order.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use globset::{GlobSet, GlobSetBuilder};

use crate::error::{CheckError, Result};

/// File discovery engine with extension and glob pattern filtering.
#[derive(Debug, Clone)]
pub struct FileDiscovery {
    /// File extensions to include (e.g., ["xml"])
    extensions: Vec<String>,
    /// Exclude patterns set
    exclude_set: Option<GlobSet>,
    /// Follow symbolic links
    follow_symlinks: bool,
}

impl FileDiscovery {
    /// Create a discovery instance that matches `*.xml` files.
    pub fn new() -> Self {
        Self {
            extensions: vec!["xml".to_string()],
            exclude_set: None,
            follow_symlinks: false,
        }
    }

    /// Set file extensions to discover (lowercase, without the dot).
    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions;
        self
    }

    /// Add exclude patterns (glob syntax).
    pub fn with_exclude_patterns(mut self, patterns: Vec<String>) -> Result<Self> {
        if patterns.is_empty() {
            self.exclude_set = None;
            return Ok(self);
        }

        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = globset::GlobBuilder::new(&pattern)
                .literal_separator(true)
                .build()
                .map_err(|e| {
                    CheckError::Config(format!("Invalid glob pattern '{}': {}", pattern, e))
                })?;
            builder.add(glob);
        }

        self.exclude_set = Some(builder.build().map_err(|e| {
            CheckError::Config(format!("Failed to build exclude glob set: {}", e))
        })?);
        Ok(self)
    }

    /// Set whether to follow symbolic links.
    pub fn with_follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    /// Discover matching files under `root`, in lexicographic path order.
    ///
    /// A nonexistent or unreadable root is a fatal configuration error.
    pub fn discover_files(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let metadata = fs::metadata(root)?;

        let mut files = Vec::new();
        if metadata.is_file() {
            if self.should_process(root) {
                files.push(root.to_path_buf());
            }
            return Ok(files);
        }

        let mut visited = HashSet::new();
        if self.follow_symlinks {
            visited.insert(fs::canonicalize(root)?);
        }
        self.walk(root, &mut files, &mut visited)?;
        files.sort();
        Ok(files)
    }

    fn walk(
        &self,
        dir: &Path,
        files: &mut Vec<PathBuf>,
        visited: &mut HashSet<PathBuf>,
    ) -> Result<()> {
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();

            if path.is_symlink() && !self.follow_symlinks {
                continue;
            }

            let metadata = match fs::metadata(&path) {
                Ok(metadata) => metadata,
                // Dangling symlink; nothing to scan behind it.
                Err(_) if path.is_symlink() => continue,
                Err(e) => return Err(e.into()),
            };
            if metadata.is_dir() {
                if self.follow_symlinks {
                    // Symlinked directories can alias or cycle back into the
                    // tree; each real directory is entered once.
                    let canonical = fs::canonicalize(&path)?;
                    if !visited.insert(canonical) {
                        continue;
                    }
                }
                self.walk(&path, files, visited)?;
            } else if metadata.is_file() && self.should_process(&path) {
                files.push(path);
            }
        }
        Ok(())
    }

    /// Check if a file should be processed based on extension and patterns.
    pub fn should_process(&self, path: &Path) -> bool {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(extension) => {
                if !self.extensions.contains(&extension.to_lowercase()) {
                    return false;
                }
            }
            None => return false,
        }

        if let Some(exclude_set) = &self.exclude_set {
            if exclude_set.is_match(path) {
                return false;
            }
        }

        true
    }
}

impl Default for FileDiscovery {
    fn default() -> Self {
        Self::new()
    }
}
