//! TUI application state and event handling.
//!
//! The `App` struct owns the session: one [`HistoryNavigator`], one
//! [`ReviewStore`] and the transient UI state around them (address bar text,
//! comment draft, focus, status messages).
//!
//! # Data flow
//!
//! Every key press becomes an [`Action`]. Navigation actions mutate the
//! navigator; afterwards `sync_with_history` compares the current history entry
//! with the one the view was derived from and, when it differs (new location or
//! a refresh re-stamp), re-reads the review record and resets the address bar.
//! Ratings and comments go straight to the store and replace the view-model
//! with the record it returns.
//!
//! # Example
//!
//! ```rust,ignore
//! let store = ReviewStore::new(FileStorage::open(&data_dir)?);
//! let mut app = App::new(store, &UiConfig::default());
//! app.run(&mut terminal)?;
//! ```

use std::time::{Duration, Instant};

use anyhow::Result;
use log::{info, warn};
use ratatui::Terminal;
use ratatui::backend::Backend;

use super::events::{Action, poll_event};
use super::rendering::{RenderState, render_ui};
use crate::clipboard::copy_url_to_clipboard;
use crate::config::UiConfig;
use crate::models::{HistoryEntry, Location, QuickLink, ReviewRecord, SearchResult};
use crate::navigation::HistoryNavigator;
use crate::reviews::{ReviewStorage, ReviewStore};
use crate::search::{SearchCatalog, quick_links};

/// Duration for success status messages (milliseconds)
const STATUS_SUCCESS_DURATION_MS: u64 = 3000;
/// Duration for error status messages (milliseconds)
const STATUS_ERROR_DURATION_MS: u64 = 5000;

const MAX_ADDRESS_LEN: usize = 2048;
const MAX_AUTHOR_LEN: usize = 64;
const MAX_COMMENT_LEN: usize = 2000;
const PAGE_SIZE: isize = 5;

/// Type of status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Success,
    Error,
}

/// Transient status message with expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub message_type: MessageType,
    pub expires_at: Instant,
}

/// Which widget receives text input and Enter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    AddressBar,
    Content,
    Author,
    Comment,
}

pub struct App<S: ReviewStorage> {
    navigator: HistoryNavigator,
    store: ReviewStore<S>,
    catalog: SearchCatalog,
    quick_links: Vec<QuickLink>,
    // View derived from the current history entry
    rendered_entry: HistoryEntry,
    location: Location,
    review: Option<ReviewRecord>,
    // Input state
    address_input: String,
    author_input: String,
    comment_draft: String,
    focus: Focus,
    show_reviews: bool,
    selected_idx: usize,
    should_quit: bool,
    status_message: Option<StatusMessage>,
    // Dirty state tracking for efficient rendering
    needs_redraw: bool,
    last_draw_time: Instant,
}

impl<S: ReviewStorage> App<S> {
    pub fn new(store: ReviewStore<S>, ui: &UiConfig) -> Self {
        let navigator = HistoryNavigator::new();
        let rendered_entry = navigator.current_entry().clone();
        let location = Location::parse(&rendered_entry.location);

        Self {
            navigator,
            store,
            catalog: SearchCatalog::new(),
            quick_links: quick_links(),
            rendered_entry,
            location,
            review: None,
            address_input: String::new(),
            author_input: ui.author.clone().unwrap_or_default(),
            comment_draft: String::new(),
            focus: Focus::AddressBar,
            show_reviews: ui.show_reviews,
            selected_idx: 0,
            should_quit: false,
            status_message: None,
            needs_redraw: true,
            last_draw_time: Instant::now(),
        }
    }

    /// Navigate to address-bar style input (URL, `home`, or search terms)
    pub fn open(&mut self, input: &str) {
        if let Some(location) = Location::from_address_input(input) {
            self.navigator.navigate(location.to_string());
            self.sync_with_history();
            self.focus = Focus::Content;
        }
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        info!("Browser session started at {}", self.location);

        while !self.should_quit {
            // Clear expired status messages (marks dirty if cleared)
            let had_status = self.status_message.is_some();
            self.check_and_clear_expired_status();
            if had_status && self.status_message.is_none() {
                self.needs_redraw = true;
            }

            // Draw if dirty or if it's been >100ms (for terminal resize handling)
            let now = Instant::now();
            let elapsed = now.duration_since(self.last_draw_time);
            if self.needs_redraw || elapsed >= Duration::from_millis(100) {
                let results = self.search_results();
                terminal.draw(|f| {
                    let state = RenderState {
                        location: &self.location,
                        address_input: &self.address_input,
                        focus: self.focus,
                        can_go_back: self.navigator.can_go_back(),
                        can_go_forward: self.navigator.can_go_forward(),
                        show_reviews: self.show_reviews,
                        quick_links: &self.quick_links,
                        results: &results,
                        selected_idx: self.selected_idx,
                        review: self.review.as_ref(),
                        author_input: &self.author_input,
                        comment_draft: &self.comment_draft,
                        status_message: self.status_message.as_ref(),
                    };
                    render_ui(f, &state);
                })?;
                self.needs_redraw = false;
                self.last_draw_time = now;
            }

            let action = poll_event(Duration::from_millis(100))?;
            self.handle_action(action);
        }

        info!("Browser session ended after {} history entries", self.navigator.entries().len());
        Ok(())
    }

    /// Set a transient status message with automatic expiry
    fn set_status(&mut self, text: impl Into<String>, message_type: MessageType, duration_ms: u64) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            message_type,
            expires_at: Instant::now() + Duration::from_millis(duration_ms),
        });
        self.needs_redraw = true;
    }

    fn set_success(&mut self, text: impl Into<String>) {
        self.set_status(text, MessageType::Success, STATUS_SUCCESS_DURATION_MS);
    }

    fn set_error(&mut self, text: impl Into<String>) {
        self.set_status(text, MessageType::Error, STATUS_ERROR_DURATION_MS);
    }

    /// Check and clear expired status messages
    fn check_and_clear_expired_status(&mut self) {
        let should_clear = self
            .status_message
            .as_ref()
            .map(|msg| Instant::now() >= msg.expires_at)
            .unwrap_or(false);
        if should_clear {
            self.status_message = None;
        }
    }

    /// Handle a user action (extracted for testing)
    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::ClearInput => self.clear_input(),
            Action::Back => {
                self.navigator.back();
                self.sync_with_history();
            }
            Action::Forward => {
                self.navigator.forward();
                self.sync_with_history();
            }
            Action::Refresh => {
                self.navigator.refresh();
                self.sync_with_history();
            }
            Action::Home => {
                self.navigator.home();
                self.sync_with_history();
            }
            Action::ToggleReviews => {
                self.show_reviews = !self.show_reviews;
                if !self.show_reviews && matches!(self.focus, Focus::Author | Focus::Comment) {
                    self.focus = Focus::Content;
                }
                self.needs_redraw = true;
            }
            Action::FocusAddressBar => {
                self.focus = Focus::AddressBar;
                self.needs_redraw = true;
            }
            Action::CycleFocus => self.cycle_focus(),
            Action::MoveUp => self.move_selection(-1),
            Action::MoveDown => self.move_selection(1),
            Action::PageUp => self.move_selection(-PAGE_SIZE),
            Action::PageDown => self.move_selection(PAGE_SIZE),
            Action::Submit => self.submit(),
            Action::CopyUrl => self.copy_url(),
            Action::Input(c) => self.input_char(c),
            Action::DeleteChar => {
                if let Some(buffer) = self.focused_buffer()
                    && buffer.pop().is_some()
                {
                    self.needs_redraw = true;
                }
            }
            Action::None => {}
        }
    }

    /// Re-derive the view when the current history entry changed
    fn sync_with_history(&mut self) {
        let current = self.navigator.current_entry();
        if *current == self.rendered_entry {
            return;
        }

        let location_changed = current.location != self.rendered_entry.location;
        self.rendered_entry = current.clone();
        self.location = Location::parse(&self.rendered_entry.location);
        self.review = self.location.review_url().map(|url| self.store.read(&url));
        self.address_input = match &self.location {
            Location::Home => String::new(),
            Location::Search { query } => query.clone(),
            Location::Site { url } => url.clone(),
        };

        if location_changed {
            self.comment_draft.clear();
            self.selected_idx = 0;
            if matches!(self.focus, Focus::Author | Focus::Comment) && self.review.is_none() {
                self.focus = Focus::Content;
            }
        }
        self.needs_redraw = true;
    }

    fn clear_input(&mut self) {
        match self.focus {
            Focus::AddressBar if !self.address_input.is_empty() => self.address_input.clear(),
            Focus::AddressBar => self.focus = Focus::Content,
            Focus::Author => self.focus = Focus::Content,
            Focus::Comment if !self.comment_draft.is_empty() => self.comment_draft.clear(),
            Focus::Comment => self.focus = Focus::Content,
            Focus::Content => self.should_quit = true,
        }
        self.needs_redraw = true;
    }

    fn reviews_editable(&self) -> bool {
        self.show_reviews && self.review.is_some()
    }

    fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::AddressBar => Focus::Content,
            Focus::Content if self.reviews_editable() => Focus::Author,
            Focus::Content => Focus::AddressBar,
            Focus::Author => Focus::Comment,
            Focus::Comment => Focus::AddressBar,
        };
        self.needs_redraw = true;
    }

    fn search_results(&self) -> Vec<&SearchResult> {
        match &self.location {
            Location::Search { query } => self.catalog.search(query),
            _ => Vec::new(),
        }
    }

    /// Number of selectable items in the content pane
    fn item_count(&self) -> usize {
        match &self.location {
            Location::Home => self.quick_links.len(),
            Location::Search { .. } => self.search_results().len(),
            Location::Site { .. } => 0,
        }
    }

    fn move_selection(&mut self, delta: isize) {
        let total = self.item_count();
        if total == 0 {
            self.selected_idx = 0;
            return;
        }

        let old_idx = self.selected_idx;
        let new_idx = (self.selected_idx as isize + delta).max(0) as usize;
        self.selected_idx = new_idx.min(total - 1);

        if old_idx != self.selected_idx {
            self.needs_redraw = true;
        }
    }

    /// URL of the highlighted quick link or search result
    fn selected_url(&self) -> Option<String> {
        match &self.location {
            Location::Home => self.quick_links.get(self.selected_idx).map(|l| l.url.clone()),
            Location::Search { .. } => {
                self.search_results().get(self.selected_idx).map(|r| r.url.clone())
            }
            Location::Site { .. } => None,
        }
    }

    fn submit(&mut self) {
        match self.focus {
            Focus::AddressBar => {
                let input = self.address_input.clone();
                if Location::from_address_input(&input).is_some() {
                    self.open(&input);
                } else {
                    self.set_error("✗ Enter a URL or search terms");
                }
            }
            Focus::Content => {
                if let Some(url) = self.selected_url() {
                    self.navigator.navigate(url);
                    self.sync_with_history();
                }
            }
            Focus::Author => {
                self.focus = Focus::Comment;
                self.needs_redraw = true;
            }
            Focus::Comment => self.post_comment(),
        }
    }

    fn input_char(&mut self, c: char) {
        if self.focus == Focus::Content {
            if let Some(stars) = c.to_digit(10)
                && self.reviews_editable()
            {
                self.rate(stars as u8);
            }
            return;
        }

        let limit = match self.focus {
            Focus::AddressBar => MAX_ADDRESS_LEN,
            Focus::Author => MAX_AUTHOR_LEN,
            _ => MAX_COMMENT_LEN,
        };
        if let Some(buffer) = self.focused_buffer()
            && buffer.len() < limit
        {
            buffer.push(c);
            self.needs_redraw = true;
        }
    }

    fn focused_buffer(&mut self) -> Option<&mut String> {
        match self.focus {
            Focus::AddressBar => Some(&mut self.address_input),
            Focus::Author => Some(&mut self.author_input),
            Focus::Comment => Some(&mut self.comment_draft),
            Focus::Content => None,
        }
    }

    fn rate(&mut self, stars: u8) {
        let Some(url) = self.location.review_url() else {
            return;
        };
        match self.store.submit_rating(&url, stars) {
            Ok(record) => {
                self.review = Some(record);
                self.set_success(format!(
                    "✓ You rated {} star{}",
                    stars,
                    if stars == 1 { "" } else { "s" }
                ));
            }
            Err(e) => {
                if !e.is_validation() {
                    warn!("Rating {} for {} failed: {}", stars, url, e);
                }
                self.set_error(format!("✗ {}", e));
            }
        }
    }

    fn post_comment(&mut self) {
        let Some(url) = self.location.review_url() else {
            return;
        };
        match self.store.submit_comment(&url, &self.author_input, &self.comment_draft) {
            Ok(record) => {
                self.review = Some(record);
                self.comment_draft.clear();
                self.set_success("✓ Comment posted");
            }
            Err(e) => {
                // Draft stays so the user can fix it
                self.set_error(format!("✗ {}", e));
            }
        }
    }

    fn copy_url(&mut self) {
        let Some(url) = self.location.site_url().map(str::to_string) else {
            self.set_error("✗ No site to copy");
            return;
        };
        match copy_url_to_clipboard(&url) {
            Ok(()) => self.set_success("✓ URL copied to clipboard"),
            Err(e) => self.set_error(format!("✗ Clipboard error: {}", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reviews::{MemoryStorage, ReviewError, ReviewResult};

    const GITHUB: &str = "https://github.com";

    fn create_app() -> App<MemoryStorage> {
        App::new(ReviewStore::new(MemoryStorage::new()), &UiConfig::default())
    }

    fn create_app_with_reviews() -> App<MemoryStorage> {
        let ui = UiConfig { show_reviews: true, author: Some("Alice".to_string()) };
        App::new(ReviewStore::new(MemoryStorage::new()), &ui)
    }

    fn type_text<S: ReviewStorage>(app: &mut App<S>, text: &str) {
        for c in text.chars() {
            app.handle_action(Action::Input(c));
        }
    }

    /// Storage that refuses every write
    struct ReadOnlyStorage;

    impl ReviewStorage for ReadOnlyStorage {
        fn get(&self, _key: &str) -> ReviewResult<Option<String>> {
            Ok(None)
        }

        fn set(&mut self, _key: &str, _value: String) -> ReviewResult<()> {
            Err(ReviewError::StorageUnavailable("read-only".to_string()))
        }
    }

    #[test]
    fn test_app_new_initializes_state() {
        let app = create_app();

        assert_eq!(app.location, Location::Home);
        assert_eq!(app.focus, Focus::AddressBar);
        assert_eq!(app.address_input, "");
        assert!(app.review.is_none());
        assert!(!app.show_reviews);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_app_new_applies_ui_config() {
        let app = create_app_with_reviews();
        assert!(app.show_reviews);
        assert_eq!(app.author_input, "Alice");
    }

    #[test]
    fn test_address_bar_url_navigates_to_site() {
        let mut app = create_app();
        type_text(&mut app, GITHUB);
        app.handle_action(Action::Submit);

        assert_eq!(app.location, Location::Site { url: GITHUB.to_string() });
        assert_eq!(app.navigator.current_location(), GITHUB);
        assert_eq!(app.address_input, GITHUB);
        assert_eq!(app.focus, Focus::Content);
        assert_eq!(app.review, Some(ReviewRecord::empty(GITHUB)));
    }

    #[test]
    fn test_address_bar_terms_navigate_to_search() {
        let mut app = create_app();
        type_text(&mut app, "wiki");
        app.handle_action(Action::Submit);

        assert_eq!(app.navigator.current_location(), "search:wiki");
        assert_eq!(app.location, Location::Search { query: "wiki".to_string() });
        assert_eq!(app.address_input, "wiki");
        assert_eq!(app.review, Some(ReviewRecord::empty("search:wiki")));
        assert_eq!(app.item_count(), 1);
    }

    #[test]
    fn test_blank_address_shows_error() {
        let mut app = create_app();
        type_text(&mut app, "   ");
        app.handle_action(Action::Submit);

        assert_eq!(app.navigator.entries().len(), 1);
        let msg = app.status_message.as_ref().unwrap();
        assert_eq!(msg.message_type, MessageType::Error);
    }

    #[test]
    fn test_open_selected_quick_link() {
        let mut app = create_app();
        app.handle_action(Action::CycleFocus);
        assert_eq!(app.focus, Focus::Content);

        app.handle_action(Action::MoveDown);
        app.handle_action(Action::Submit);

        assert_eq!(app.navigator.current_location(), GITHUB);
    }

    #[test]
    fn test_open_selected_search_result() {
        let mut app = create_app();
        app.open("developers");
        assert_eq!(app.item_count(), 3);

        app.handle_action(Action::PageDown);
        assert_eq!(app.selected_idx, 2);
        app.handle_action(Action::Submit);

        assert_eq!(app.navigator.current_location(), "https://developer.mozilla.org");
        assert_eq!(app.selected_idx, 0);
    }

    #[test]
    fn test_move_selection_bounds() {
        let mut app = create_app();
        app.focus = Focus::Content;

        app.move_selection(-10);
        assert_eq!(app.selected_idx, 0);

        app.move_selection(100);
        assert_eq!(app.selected_idx, 7);

        app.open(GITHUB);
        app.move_selection(1);
        assert_eq!(app.selected_idx, 0);
    }

    #[test]
    fn test_back_forward_and_home() {
        let mut app = create_app();
        app.open("https://a.com");
        app.open("https://b.com");

        app.handle_action(Action::Back);
        assert_eq!(app.address_input, "https://a.com");
        assert!(app.navigator.can_go_forward());

        app.handle_action(Action::Forward);
        assert_eq!(app.address_input, "https://b.com");

        app.handle_action(Action::Home);
        assert_eq!(app.location, Location::Home);
        assert_eq!(app.address_input, "");
        assert!(app.review.is_none());
        assert_eq!(app.navigator.entries().len(), 4);
    }

    #[test]
    fn test_back_at_start_is_noop() {
        let mut app = create_app();
        app.handle_action(Action::Back);
        assert_eq!(app.location, Location::Home);
        assert_eq!(app.navigator.cursor(), 0);
    }

    #[test]
    fn test_refresh_rereads_review() {
        let mut app = create_app_with_reviews();
        app.open(GITHUB);

        // Written behind the app's back, e.g. by the CLI
        app.store.submit_rating(GITHUB, 5).unwrap();
        assert_eq!(app.review.as_ref().unwrap().aggregate.rating_count, 0);

        app.handle_action(Action::Refresh);
        assert_eq!(app.review.as_ref().unwrap().aggregate.rating_count, 1);
        assert_eq!(app.navigator.entries().len(), 2);
    }

    #[test]
    fn test_digit_rates_current_site() {
        let mut app = create_app_with_reviews();
        app.open(GITHUB);

        app.handle_action(Action::Input('4'));
        let review = app.review.as_ref().unwrap();
        assert_eq!(review.viewer_rating, Some(4));
        assert_eq!(review.aggregate.mean_stars, 4.0);

        app.handle_action(Action::Input('2'));
        let review = app.review.as_ref().unwrap();
        assert_eq!(review.aggregate.mean_stars, 2.0);
        assert_eq!(review.aggregate.rating_count, 1);
        assert_eq!(app.status_message.as_ref().unwrap().text, "✓ You rated 2 stars");
    }

    #[test]
    fn test_search_page_can_be_rated_and_commented() {
        let mut app = create_app_with_reviews();
        app.open("developers");
        app.handle_action(Action::Input('3'));

        let review = app.review.as_ref().unwrap();
        assert_eq!(review.url, "search:developers");
        assert_eq!(review.viewer_rating, Some(3));

        app.focus = Focus::Comment;
        type_text(&mut app, "Good results");
        app.handle_action(Action::Submit);

        let stored = app.store.read("search:developers");
        assert_eq!(stored.aggregate.rating_count, 1);
        assert_eq!(stored.comments[0].text, "Good results");
        assert_eq!(stored.comments[0].rating_at_submission, 3);
    }

    #[test]
    fn test_search_reviews_are_per_query() {
        let mut app = create_app_with_reviews();
        app.open("wiki");
        app.handle_action(Action::Input('5'));

        app.open("video");
        assert_eq!(app.review, Some(ReviewRecord::empty("search:video")));

        app.handle_action(Action::Back);
        assert_eq!(app.review.as_ref().unwrap().viewer_rating, Some(5));
    }

    #[test]
    fn test_copy_url_on_search_page() {
        let mut app = create_app();
        app.open("wiki");
        app.handle_action(Action::CopyUrl);

        assert_eq!(app.status_message.as_ref().unwrap().text, "✗ No site to copy");
    }

    #[test]
    fn test_invalid_digit_rating_reports_error() {
        let mut app = create_app_with_reviews();
        app.open(GITHUB);

        app.handle_action(Action::Input('9'));
        let msg = app.status_message.as_ref().unwrap();
        assert_eq!(msg.message_type, MessageType::Error);
        assert!(msg.text.contains("Invalid rating 9"));
        assert_eq!(app.review.as_ref().unwrap().aggregate.rating_count, 0);
    }

    #[test]
    fn test_digits_ignored_when_reviews_hidden() {
        let mut app = create_app();
        app.open(GITHUB);
        app.handle_action(Action::Input('5'));

        assert!(app.review.as_ref().unwrap().viewer_rating.is_none());
        assert!(app.store.read(GITHUB).viewer_rating.is_none());
    }

    #[test]
    fn test_post_comment_clears_draft() {
        let mut app = create_app_with_reviews();
        app.open(GITHUB);

        app.handle_action(Action::CycleFocus);
        assert_eq!(app.focus, Focus::Author);
        app.handle_action(Action::Submit);
        assert_eq!(app.focus, Focus::Comment);

        type_text(&mut app, "Great site");
        app.handle_action(Action::Submit);

        assert_eq!(app.comment_draft, "");
        let review = app.review.as_ref().unwrap();
        assert_eq!(review.comments.len(), 1);
        assert_eq!(review.comments[0].author, "Alice");
        assert_eq!(review.comments[0].text, "Great site");
    }

    #[test]
    fn test_blank_comment_keeps_draft() {
        let mut app = create_app_with_reviews();
        app.open(GITHUB);
        app.focus = Focus::Comment;

        type_text(&mut app, "   ");
        app.handle_action(Action::Submit);

        assert_eq!(app.comment_draft, "   ");
        assert!(app.review.as_ref().unwrap().comments.is_empty());
        let msg = app.status_message.as_ref().unwrap();
        assert_eq!(msg.text, "✗ Comment text cannot be empty");
    }

    #[test]
    fn test_location_change_clears_comment_draft() {
        let mut app = create_app_with_reviews();
        app.open(GITHUB);
        app.focus = Focus::Comment;
        type_text(&mut app, "unfinished");

        app.handle_action(Action::Back);

        assert_eq!(app.comment_draft, "");
        assert_eq!(app.focus, Focus::Content);
    }

    #[test]
    fn test_write_failure_reports_error_and_keeps_view() {
        let ui = UiConfig { show_reviews: true, author: None };
        let mut app = App::new(ReviewStore::new(ReadOnlyStorage), &ui);
        app.open(GITHUB);

        app.handle_action(Action::Input('3'));

        let msg = app.status_message.as_ref().unwrap();
        assert_eq!(msg.message_type, MessageType::Error);
        assert!(msg.text.contains("read-only"));
        assert!(app.review.as_ref().unwrap().viewer_rating.is_none());
    }

    #[test]
    fn test_toggle_reviews_moves_focus_out_of_panel() {
        let mut app = create_app_with_reviews();
        app.open(GITHUB);
        app.focus = Focus::Author;

        app.handle_action(Action::ToggleReviews);
        assert!(!app.show_reviews);
        assert_eq!(app.focus, Focus::Content);
    }

    #[test]
    fn test_cycle_focus_skips_panel_without_site() {
        let mut app = create_app_with_reviews();
        app.handle_action(Action::CycleFocus);
        assert_eq!(app.focus, Focus::Content);
        app.handle_action(Action::CycleFocus);
        assert_eq!(app.focus, Focus::AddressBar);
    }

    #[test]
    fn test_clear_input() {
        let mut app = create_app();
        type_text(&mut app, "abc");

        app.handle_action(Action::ClearInput);
        assert_eq!(app.address_input, "");
        assert_eq!(app.focus, Focus::AddressBar);

        app.handle_action(Action::ClearInput);
        assert_eq!(app.focus, Focus::Content);

        app.handle_action(Action::ClearInput);
        assert!(app.should_quit);
    }

    #[test]
    fn test_delete_char() {
        let mut app = create_app();
        type_text(&mut app, "test");

        app.handle_action(Action::DeleteChar);
        assert_eq!(app.address_input, "tes");

        app.address_input.clear();
        app.handle_action(Action::DeleteChar);
        assert_eq!(app.address_input, "");
    }

    #[test]
    fn test_address_length_limit() {
        let mut app = create_app();
        app.address_input = "a".repeat(MAX_ADDRESS_LEN);
        app.handle_action(Action::Input('b'));
        assert_eq!(app.address_input.len(), MAX_ADDRESS_LEN);
    }

    #[test]
    fn test_focus_address_bar() {
        let mut app = create_app();
        app.focus = Focus::Content;
        app.handle_action(Action::FocusAddressBar);
        assert_eq!(app.focus, Focus::AddressBar);
    }

    #[test]
    fn test_copy_url_without_site() {
        let mut app = create_app();
        app.handle_action(Action::CopyUrl);

        let msg = app.status_message.as_ref().unwrap();
        assert_eq!(msg.text, "✗ No site to copy");
        assert_eq!(msg.message_type, MessageType::Error);
    }

    #[test]
    fn test_copy_url_on_site() {
        let mut app = create_app();
        app.open(GITHUB);
        app.handle_action(Action::CopyUrl);

        // Success or clipboard error depending on environment
        let msg = app.status_message.as_ref().unwrap();
        if msg.message_type == MessageType::Success {
            assert_eq!(msg.text, "✓ URL copied to clipboard");
        } else {
            assert!(msg.text.starts_with("✗ Clipboard error:"));
        }
    }

    #[test]
    fn test_handle_action_quit() {
        let mut app = create_app();
        app.handle_action(Action::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn test_handle_action_none() {
        let mut app = create_app();
        let initial = (app.selected_idx, app.address_input.clone(), app.focus);

        app.handle_action(Action::None);

        assert_eq!((app.selected_idx, app.address_input.clone(), app.focus), initial);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_status_message_expiry() {
        let mut app = create_app();
        app.set_status("Expired", MessageType::Success, 0);
        std::thread::sleep(Duration::from_millis(1));

        app.check_and_clear_expired_status();
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_status_message_kept_while_active() {
        let mut app = create_app();
        app.set_status("Active", MessageType::Error, 5000);

        app.check_and_clear_expired_status();
        let msg = app.status_message.as_ref().unwrap();
        assert_eq!(msg.text, "Active");
        assert!(msg.expires_at > Instant::now());
    }
}
