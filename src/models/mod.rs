//! Data models for the simulated browser.
//!
//! - [`HistoryEntry`] - One visited location in the session history
//! - [`Location`] - Interpreted location (home, search, site)
//! - [`ReviewRecord`] - Per-URL rating aggregate, viewer rating and comments
//! - [`SearchResult`] / [`QuickLink`] - Mock search catalog and home page shortcuts
//!
//! Review records are serialized with serde using camelCase field names.

pub mod history;
pub mod location;
pub mod review;
pub mod search;

pub use history::{HOME_LOCATION, HistoryEntry};
pub use location::{Location, SEARCH_PREFIX, site_domain};
pub use review::{ANONYMOUS_AUTHOR, Comment, RatingAggregate, ReviewRecord, render_stars};
pub use search::{QuickLink, SearchResult};
