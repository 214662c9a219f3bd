//! Find `[[wiki-links]]` in a Markdown vault that point at notes which do not
//! exist, and create empty placeholders for them.
//!
//! The work is split in two: [`reconcile::plan`] reads the vault and returns
//! the missing targets without side effects, and [`materialize::apply`]
//! creates the files.

pub mod cli;
pub mod domain;
pub mod error;
pub mod index;
pub mod links;
pub mod materialize;
pub mod reconcile;
pub mod scan;
pub mod utils;

pub use domain::{ApplyReport, Document, LinkIndex, Location, MissingLinks, Plan, VaultConfig};
pub use error::{Result, VaultError};
