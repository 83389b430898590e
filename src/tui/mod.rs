// TUI module: browser window with history, pages and review panel
mod app;
mod events;
mod layout;
mod rendering;
mod terminal;
mod timestamps;

use anyhow::Result;
pub use app::App;
use terminal::BrowserScreen;
pub use timestamps::{format_timestamp, format_timestamp_at};

use crate::config::UiConfig;
use crate::reviews::{ReviewStorage, ReviewStore};

/// Run the interactive browser, optionally opening `start` first
pub fn run_interactive<S: ReviewStorage>(
    store: ReviewStore<S>,
    ui: &UiConfig,
    start: Option<&str>,
) -> Result<()> {
    let mut app = App::new(store, ui);
    if let Some(target) = start {
        app.open(target);
    }

    let mut screen = BrowserScreen::enter()?;
    let res = app.run(screen.terminal_mut());
    screen.leave()?;

    res
}
