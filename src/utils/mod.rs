//! Shared helpers

pub mod paths;

pub use paths::{normalize_path, strip_extension};
