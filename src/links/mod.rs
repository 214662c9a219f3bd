//! Wiki-link extraction and aggregation

pub mod aggregate;
pub mod extractor;

pub use aggregate::aggregate_links;
pub use extractor::{extract_links, extract_links_from_file};
