//! Error types shared by every phase of a run.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, VaultError>;

/// Failures raised while scanning, reading, or writing a vault.
///
/// Everything except [`VaultError::UnsafeTarget`] is a filesystem failure; the
/// unsafe-target case is raised before any file is touched.
#[derive(Debug, Error)]
pub enum VaultError {
    #[error("cannot traverse {}: {source}", path.display())]
    Scan {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot create {}: {source}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("refusing to create '{target}': {reason}")]
    UnsafeTarget { target: String, reason: &'static str },
}

impl VaultError {
    /// Wrap a walkdir failure, keeping the path of the entry that failed.
    pub(crate) fn from_walk(root: &std::path::Path, err: walkdir::Error) -> Self {
        let path = err.path().map(|p| p.to_path_buf()).unwrap_or_else(|| root.to_path_buf());
        let source = match err.into_io_error() {
            Some(io_err) => io_err,
            // Symlink loops carry no io::Error of their own.
            None => io::Error::new(io::ErrorKind::Other, "filesystem loop detected"),
        };
        VaultError::Scan { path, source }
    }

    /// Whether this error comes from the filesystem rather than validation.
    pub fn is_filesystem(&self) -> bool {
        !matches!(self, VaultError::UnsafeTarget { .. })
    }
}
