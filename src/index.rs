//! Index of the documents that already exist in a vault.

use crate::domain::{Document, VaultConfig};
use crate::error::Result;
use crate::scan::scan_vault;
use crate::utils::strip_extension;
use std::collections::BTreeMap;

/// Basename (extension stripped) -> relative paths of every document with it.
///
/// Documents sharing a basename in different directories are all kept; any
/// of them resolves a link to that basename.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExistingIndex {
    by_basename: BTreeMap<String, Vec<String>>,
}

impl ExistingIndex {
    pub fn from_documents(documents: &[Document], extension: &str) -> Self {
        let mut by_basename: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for doc in documents {
            let file_name = doc.relative_path.rsplit('/').next().unwrap_or(&doc.relative_path);
            let Some(basename) = strip_extension(file_name, extension) else {
                continue;
            };
            by_basename.entry(basename.to_string()).or_default().push(doc.relative_path.clone());
        }
        Self { by_basename }
    }

    /// Walk `config.root` and index what is there.
    pub fn scan(config: &VaultConfig) -> Result<Self> {
        let documents = scan_vault(config)?;
        Ok(Self::from_documents(&documents, &config.extension))
    }

    pub fn get(&self, basename: &str) -> Option<&[String]> {
        self.by_basename.get(basename).map(Vec::as_slice)
    }

    /// Whether a link target names a document in the vault.
    ///
    /// A bare name resolves on basename alone, wherever the document lives. A
    /// target with `/` also resolves when a document sits at exactly that
    /// relative path.
    pub fn resolves(&self, target: &str, extension: &str) -> bool {
        if self.by_basename.contains_key(target) {
            return true;
        }
        let Some((_, name)) = target.rsplit_once('/') else {
            return false;
        };
        self.by_basename.get(name).is_some_and(|paths| {
            paths.iter().any(|p| strip_extension(p, extension) == Some(target))
        })
    }

    /// Relative paths of every basename shared by more than one document.
    pub fn collisions(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.by_basename
            .iter()
            .filter(|(_, paths)| paths.len() > 1)
            .map(|(name, paths)| (name.as_str(), paths.as_slice()))
    }
}
