//! Per-URL ratings and comments.
//!
//! [`ReviewStore`] keeps one [`ReviewRecord`](crate::models::ReviewRecord) per
//! literal URL string (no normalization) on top of a [`ReviewStorage`] port:
//!
//! - [`MemoryStorage`] for tests and throwaway sessions
//! - [`FileStorage`] for the on-disk `reviews.json` document
//!
//! Validation errors are rejected before any mutation. Storage faults are
//! absorbed on read and surfaced on write.

pub mod error;
pub mod storage;
pub mod store;

pub use error::{ReviewError, ReviewResult};
pub use storage::{FileStorage, MemoryStorage, ReviewStorage};
pub use store::ReviewStore;
