//! Web Explorer - a simulated web browser with per-site ratings and comments
//!
//! The crate is built around two pieces of state:
//!
//! - [`HistoryNavigator`]: back/forward history over visited locations
//!   (`home`, `search:<query>` or a URL)
//! - [`ReviewStore`]: one rating aggregate and comment list per URL, persisted
//!   through a [`ReviewStorage`](reviews::ReviewStorage) port
//!
//! The terminal UI and the command line are thin layers over both.
//!
//! # Example
//!
//! ```
//! use web_explorer::{HistoryNavigator, MemoryStorage, ReviewStore};
//!
//! let mut history = HistoryNavigator::new();
//! history.navigate("https://github.com");
//! assert!(history.can_go_back());
//!
//! let mut store = ReviewStore::new(MemoryStorage::new());
//! let record = store.submit_rating(history.current_location(), 4)?;
//! assert_eq!(record.aggregate.rating_count, 1);
//! # Ok::<(), web_explorer::ReviewError>(())
//! ```

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod logging;
pub mod models;
pub mod navigation;
pub mod reviews;
pub mod search;
pub mod tui;

// Re-export commonly used types
pub use clipboard::copy_url_to_clipboard;
pub use models::{Location, ReviewRecord};
pub use navigation::HistoryNavigator;
pub use reviews::{FileStorage, MemoryStorage, ReviewError, ReviewStore};
pub use search::SearchCatalog;
