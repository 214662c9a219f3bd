//! Vault document discovery

use crate::domain::{Document, VaultConfig};
use crate::error::Result;

pub mod scanner;

pub use scanner::DocumentScanner;

pub fn scan_vault(config: &VaultConfig) -> Result<Vec<Document>> {
    DocumentScanner::new(config.root.clone())
        .extension(&config.extension)
        .follow_symlinks(config.follow_symlinks)
        .scan()
}
