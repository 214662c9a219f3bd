//! Create placeholder documents for missing link targets.

use crate::domain::{ApplyReport, MissingLinks};
use crate::error::{Result, VaultError};
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Component, Path, PathBuf};

/// Check that a link target names a file strictly inside the vault root.
///
/// Targets may contain `/` to address sub-directories, but absolute paths
/// and `..` segments are rejected.
pub fn validate_target(target: &str) -> Result<()> {
    let reject = |reason| Err(VaultError::UnsafeTarget { target: target.to_string(), reason });

    if target.trim().is_empty() {
        return reject("target is empty");
    }
    if target.ends_with('/') || target.ends_with(std::path::MAIN_SEPARATOR) {
        return reject("target does not name a file");
    }

    let mut named = false;
    for component in Path::new(target).components() {
        match component {
            Component::Prefix(_) | Component::RootDir => return reject("target is an absolute path"),
            Component::ParentDir => return reject("target escapes the vault root"),
            Component::CurDir => {}
            Component::Normal(_) => named = true,
        }
    }
    if !named {
        return reject("target does not name a file");
    }
    Ok(())
}

/// Path of the placeholder for `target` under `root`.
pub fn target_path(root: &Path, target: &str, extension: &str) -> PathBuf {
    root.join(format!("{target}.{extension}"))
}

/// Nearest ancestor of `path` that exists on disk.
fn existing_ancestor(path: &Path) -> Option<&Path> {
    path.ancestors().find(|p| p.exists())
}

/// Reject a placeholder whose directory resolves outside the root through a
/// symlink.
fn ensure_within_root(canonical_root: &Path, target: &str, path: &Path) -> Result<()> {
    let Some(ancestor) = path.parent().and_then(existing_ancestor) else {
        return Ok(());
    };
    let resolved = ancestor
        .canonicalize()
        .map_err(|source| VaultError::Create { path: ancestor.to_path_buf(), source })?;
    if resolved.starts_with(canonical_root) {
        Ok(())
    } else {
        Err(VaultError::UnsafeTarget {
            target: target.to_string(),
            reason: "target resolves outside the vault root",
        })
    }
}

/// Create an empty document for every missing target.
///
/// Every target is validated before anything is written. Files that already
/// exist are left untouched, so applying the same set twice is harmless. The
/// first creation failure stops the run.
pub fn apply(root: &Path, missing: &MissingLinks, extension: &str) -> Result<ApplyReport> {
    for target in missing.keys() {
        validate_target(target)?;
    }

    let canonical_root = root
        .canonicalize()
        .map_err(|source| VaultError::Create { path: root.to_path_buf(), source })?;

    let mut paths = Vec::with_capacity(missing.len());
    for target in missing.keys() {
        let path = target_path(root, target, extension);
        ensure_within_root(&canonical_root, target, &path)?;
        paths.push(path);
    }

    let mut report = ApplyReport::default();
    for path in paths {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|source| VaultError::Create { path: parent.to_path_buf(), source })?;
        }

        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(_) => {
                tracing::info!(path = %path.display(), "created placeholder");
                report.created.push(path);
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                tracing::debug!(path = %path.display(), "placeholder already exists");
                report.skipped.push(path);
            }
            Err(source) => return Err(VaultError::Create { path, source }),
        }
    }

    Ok(report)
}
