//! Planning: work out which link targets have no document.

use crate::domain::{LinkIndex, MissingLinks, Plan, VaultConfig};
use crate::error::VaultError;
use crate::index::ExistingIndex;
use crate::links::{aggregate::occurrence_count, aggregate_links};
use crate::scan::scan_vault;
use thiserror::Error;

/// Keep the targets of `links` that the existing index cannot resolve.
pub fn reconcile(links: &LinkIndex, existing: &ExistingIndex, extension: &str) -> MissingLinks {
    links
        .iter()
        .filter(|(target, _)| !existing.resolves(target, extension))
        .map(|(target, locations)| (target.clone(), locations.clone()))
        .collect()
}

/// Phase of a plan that failed, used to label errors for the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanPhase {
    Scan,
    Extract,
    Index,
}

impl PlanPhase {
    pub fn describe(self) -> &'static str {
        match self {
            PlanPhase::Scan => "finding markdown files",
            PlanPhase::Extract => "extracting links from files",
            PlanPhase::Index => "finding missing files",
        }
    }

    fn wrap(self) -> impl FnOnce(VaultError) -> PlanError {
        move |source| PlanError { phase: self, source }
    }
}

/// A planning failure together with the phase it stopped in.
#[derive(Debug, Error)]
#[error("{}: {source}", .phase.describe())]
pub struct PlanError {
    pub phase: PlanPhase,
    #[source]
    pub source: VaultError,
}

/// Scan, extract, index and reconcile without touching the filesystem.
///
/// The existing-name index comes from its own walk of the root, so a vault
/// that changes mid-run fails in the phase that noticed it.
pub fn plan(config: &VaultConfig) -> Result<Plan, PlanError> {
    let documents = scan_vault(config).map_err(PlanPhase::Scan.wrap())?;
    let links = aggregate_links(&documents).map_err(PlanPhase::Extract.wrap())?;
    let existing = ExistingIndex::scan(config).map_err(PlanPhase::Index.wrap())?;

    for (name, paths) in existing.collisions() {
        tracing::debug!(basename = name, ?paths, "basename shared by several documents");
    }

    let missing = reconcile(&links, &existing, &config.extension);
    tracing::debug!(targets = links.len(), missing = missing.len(), "reconciled links");

    Ok(Plan {
        root: config.root.clone(),
        extension: config.extension.clone(),
        documents_scanned: documents.len(),
        links_found: occurrence_count(&links),
        missing,
    })
}
