use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Location string of the landing page.
pub const HOME_LOCATION: &str = "home";

/// One visited location in the browsing history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub location: String,
    #[serde(rename = "visitedAt")]
    pub visited_at: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(location: impl Into<String>) -> Self {
        Self { location: location.into(), visited_at: Utc::now() }
    }
}
