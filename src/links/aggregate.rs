//! Merge per-document links into a single index.

use crate::domain::{Document, LinkIndex, LinkOccurrence};
use crate::error::Result;
use crate::links::extractor::extract_links_from_file;
use rayon::prelude::*;

/// Extract links from every document and group them by target.
///
/// Documents are read in parallel but merged in input order, so each
/// target's locations follow document order and then line order. The first
/// document that fails to read aborts the whole aggregation.
pub fn aggregate_links(documents: &[Document]) -> Result<LinkIndex> {
    let per_document: Vec<Vec<LinkOccurrence>> = documents
        .par_iter()
        .map(|doc| extract_links_from_file(&doc.path, &doc.relative_path))
        .collect::<Result<_>>()?;

    let mut index = LinkIndex::new();
    for link in per_document.into_iter().flatten() {
        let location = link.location();
        index.entry(link.target).or_default().push(location);
    }

    tracing::debug!(
        documents = documents.len(),
        targets = index.len(),
        "aggregated wiki-links"
    );
    Ok(index)
}

/// Total number of link occurrences in an index.
pub fn occurrence_count(index: &LinkIndex) -> usize {
    index.values().map(Vec::len).sum()
}
