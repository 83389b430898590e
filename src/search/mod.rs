//! Mock search provider.
//!
//! A fixed catalog of well-known sites stands in for a real search index.
//! Matching is a case-insensitive substring test against title, description
//! and URL; an empty query returns the whole catalog.

pub mod catalog;

pub use catalog::{SearchCatalog, quick_links};
