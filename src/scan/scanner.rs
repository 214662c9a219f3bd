//! Recursive document scanner

use crate::domain::{Document, DEFAULT_EXTENSION};
use crate::error::{Result, VaultError};
use crate::utils::{normalize_path, strip_extension};
use std::fs;
use std::io;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Walks a vault and collects every file carrying the document extension.
pub struct DocumentScanner {
    root_path: PathBuf,
    extension: String,
    follow_symlinks: bool,
}

impl DocumentScanner {
    /// Create a new DocumentScanner looking for `.md` files.
    pub fn new(root_path: PathBuf) -> Self {
        Self { root_path, extension: DEFAULT_EXTENSION.to_string(), follow_symlinks: false }
    }

    /// Set the document extension (e.g. "md" or ".md")
    pub fn extension(mut self, ext: &str) -> Self {
        self.extension = ext.trim_start_matches('.').to_string();
        self
    }

    /// Set whether to follow symbolic links
    pub fn follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    fn is_document(&self, entry: &walkdir::DirEntry) -> bool {
        !entry.file_type().is_dir()
            && entry
                .file_name()
                .to_str()
                .is_some_and(|name| strip_extension(name, &self.extension).is_some())
    }

    /// Scan the vault.
    ///
    /// Documents come back sorted by relative path. Any entry that cannot be
    /// read aborts the whole scan; there is no partial result.
    pub fn scan(&self) -> Result<Vec<Document>> {
        let metadata = fs::metadata(&self.root_path)
            .map_err(|source| VaultError::Scan { path: self.root_path.clone(), source })?;
        if !metadata.is_dir() {
            return Err(VaultError::Scan {
                path: self.root_path.clone(),
                source: io::Error::new(io::ErrorKind::Other, "not a directory"),
            });
        }

        let walker = WalkDir::new(&self.root_path)
            .follow_links(self.follow_symlinks)
            .sort_by_file_name();

        let mut documents = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|e| VaultError::from_walk(&self.root_path, e))?;
            if !self.is_document(&entry) {
                continue;
            }

            let Ok(rel) = entry.path().strip_prefix(&self.root_path) else {
                continue;
            };
            documents.push(Document {
                path: entry.path().to_path_buf(),
                relative_path: normalize_path(rel),
            });
        }

        // Walk order is per-directory; sort on the full relative path for stable output.
        documents.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
        tracing::debug!(
            root = %self.root_path.display(),
            count = documents.len(),
            "scanned vault documents"
        );
        Ok(documents)
    }
}
