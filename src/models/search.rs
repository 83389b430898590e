use serde::{Deserialize, Serialize};

/// One hit returned by the search catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub url: String,
    pub description: String,
}

/// Shortcut shown on the home page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickLink {
    pub name: String,
    pub url: String,
}
