use std::fmt;

use super::history::HOME_LOCATION;

/// Prefix marking a search pseudo-location in history entries
pub const SEARCH_PREFIX: &str = "search:";

/// Interpreted form of a history location string.
///
/// The navigator stores opaque strings; this is where they get meaning:
/// - `"home"` is the landing page
/// - `"search:<query>"` is a results page for `<query>`
/// - anything else is a site URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    Home,
    Search { query: String },
    Site { url: String },
}

impl Location {
    pub fn parse(location: &str) -> Self {
        if location == HOME_LOCATION {
            Location::Home
        } else if let Some(query) = location.strip_prefix(SEARCH_PREFIX) {
            Location::Search { query: query.to_string() }
        } else {
            Location::Site { url: location.to_string() }
        }
    }

    /// Resolve text typed into the address bar.
    ///
    /// Input starting with `http` is taken as a URL, `home` as the landing page,
    /// everything else becomes a search. Blank input resolves to nothing.
    pub fn from_address_input(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }
        if input == HOME_LOCATION {
            return Some(Location::Home);
        }
        if input.starts_with("http") {
            return Some(Location::Site { url: input.to_string() });
        }
        // Already-encoded search strings round-trip unchanged
        if let Some(query) = input.strip_prefix(SEARCH_PREFIX) {
            return Some(Location::Search { query: query.to_string() });
        }
        Some(Location::Search { query: input.to_string() })
    }

    /// Key that ratings and comments attach to: the site URL, or the encoded
    /// `search:<query>` string for a results page. Home has none.
    pub fn review_url(&self) -> Option<String> {
        match self {
            Location::Home => None,
            Location::Search { .. } | Location::Site { .. } => Some(self.to_string()),
        }
    }

    /// URL of a real site, the only kind worth handing to another browser
    pub fn site_url(&self) -> Option<&str> {
        match self {
            Location::Site { url } => Some(url),
            _ => None,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Home => f.write_str(HOME_LOCATION),
            Location::Search { query } => write!(f, "{}{}", SEARCH_PREFIX, query),
            Location::Site { url } => f.write_str(url),
        }
    }
}

/// Host name of a site URL, or the raw string when it doesn't parse
pub fn site_domain(url: &str) -> String {
    url::Url::parse(url)
        .ok()
        .and_then(|parsed| parsed.host_str().map(str::to_string))
        .unwrap_or_else(|| url.to_string())
}
