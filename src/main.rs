//! vault-stubs: create placeholder notes for unresolved wiki-links
//!
//! Scans an Obsidian vault for `[[wiki-links]]` whose target note does not
//! exist yet and, after confirmation, creates empty notes for them.

use anyhow::Result;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    vault_stubs::cli::run()
}
