use chrono::{Duration, Utc};

use crate::models::{HOME_LOCATION, HistoryEntry};

/// Back/forward history over opaque location strings.
///
/// Invariants: `entries` is never empty and `cursor < entries.len()`.
/// Entries after the cursor are forward history.
#[derive(Debug, Clone)]
pub struct HistoryNavigator {
    entries: Vec<HistoryEntry>,
    cursor: usize,
}

impl HistoryNavigator {
    pub fn new() -> Self {
        Self { entries: vec![HistoryEntry::new(HOME_LOCATION)], cursor: 0 }
    }

    /// Visit `target`, discarding any forward history
    pub fn navigate(&mut self, target: impl Into<String>) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(HistoryEntry::new(target));
        self.cursor = self.entries.len() - 1;
    }

    pub fn back(&mut self) {
        if self.can_go_back() {
            self.cursor -= 1;
        }
    }

    pub fn forward(&mut self) {
        if self.can_go_forward() {
            self.cursor += 1;
        }
    }

    /// Re-stamp the current entry so dependent views re-derive their state.
    /// Location, cursor and length are untouched.
    pub fn refresh(&mut self) {
        let current = &self.entries[self.cursor];
        // Strictly later than the previous stamp, even on a coarse or stepped clock
        let visited_at = Utc::now().max(current.visited_at + Duration::nanoseconds(1));
        self.entries[self.cursor] = HistoryEntry { location: current.location.clone(), visited_at };
    }

    pub fn home(&mut self) {
        self.navigate(HOME_LOCATION);
    }

    pub fn current_location(&self) -> &str {
        &self.current_entry().location
    }

    pub fn current_entry(&self) -> &HistoryEntry {
        &self.entries[self.cursor]
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor < self.entries.len() - 1
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

impl Default for HistoryNavigator {
    fn default() -> Self {
        Self::new()
    }
}
