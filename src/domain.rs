//! Core data types passed between the scan, reconcile and materialize phases.

use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Extension of the documents a vault is made of, without the leading dot.
pub const DEFAULT_EXTENSION: &str = "md";

/// A document found under the vault root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub path: PathBuf,
    /// Path relative to the vault root, always `/`-separated.
    pub relative_path: String,
}

/// One `[[target]]` match, tagged with where it was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkOccurrence {
    pub target: String,
    pub source: String,
    pub line: usize,
}

impl LinkOccurrence {
    pub fn location(&self) -> Location {
        Location { source: self.source.clone(), line: self.line }
    }
}

/// Source file and 1-based line of a link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    pub source: String,
    pub line: usize,
}

/// Link target -> every place it is referenced, in scan order.
pub type LinkIndex = BTreeMap<String, Vec<Location>>;

/// Subset of a [`LinkIndex`] whose targets have no matching document.
pub type MissingLinks = BTreeMap<String, Vec<Location>>;

/// Settings for a single run against a vault.
#[derive(Debug, Clone)]
pub struct VaultConfig {
    pub root: PathBuf,
    pub extension: String,
    pub follow_symlinks: bool,
}

impl VaultConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extension: DEFAULT_EXTENSION.to_string(),
            follow_symlinks: false,
        }
    }

    /// Set the document extension; a leading dot is ignored.
    pub fn extension(mut self, ext: &str) -> Self {
        self.extension = ext.trim_start_matches('.').to_string();
        self
    }

    pub fn follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }
}

/// Outcome of the read-only planning phase.
#[derive(Debug, Clone, Serialize)]
pub struct Plan {
    pub root: PathBuf,
    pub extension: String,
    pub documents_scanned: usize,
    pub links_found: usize,
    pub missing: MissingLinks,
}

impl Plan {
    pub fn is_empty(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Files touched by applying a plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ApplyReport {
    pub created: Vec<PathBuf>,
    /// Targets whose file already existed and was left untouched.
    pub skipped: Vec<PathBuf>,
}
