//! Command-line interface for vault-stubs
//!
//! A single command: scan a vault, list unresolved wiki-links, and offer to
//! create empty notes for them.

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub mod prompt;
pub mod report;

use prompt::{Session, SessionOptions};

/// Find unresolved [[wiki-links]] in an Obsidian vault and create the missing notes
#[derive(Parser)]
#[command(name = "vault-stubs")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Vault root directory (prompted for when omitted)
    #[arg(value_name = "ROOT")]
    root: Option<PathBuf>,

    /// Document extension to scan and create
    #[arg(long, value_name = "EXT", default_value = crate::domain::DEFAULT_EXTENSION)]
    ext: String,

    /// Create missing notes without asking for confirmation
    #[arg(short, long, conflicts_with = "dry_run")]
    yes: bool,

    /// Only report missing notes; never create anything
    #[arg(long)]
    dry_run: bool,

    /// Print the missing-link plan as JSON and exit
    #[arg(long, conflicts_with = "yes")]
    json: bool,

    /// Follow symbolic links when scanning
    #[arg(long)]
    follow_symlinks: bool,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    verbose: bool,
}

pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let options = SessionOptions {
        extension: Some(cli.ext),
        follow_symlinks: cli.follow_symlinks,
        assume_yes: cli.yes,
        dry_run: cli.dry_run,
        json: cli.json,
    };

    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout().lock());
    let outcome = session.run(cli.root, &options).context("terminal I/O failed")?;

    Ok(if outcome.is_failure() { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}
