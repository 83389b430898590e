//! Copy the current page URL to the system clipboard.
//!
//! Stands in for "open in new tab": the user pastes the URL into a real
//! browser.

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Longest URL we hand to the clipboard
const MAX_URL_LEN: usize = 64 * 1024;

/// Clipboard operations (mockable in tests)
trait ClipboardProvider {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

struct SystemClipboard {
    clipboard: Clipboard,
}

impl SystemClipboard {
    fn new() -> Result<Self> {
        let clipboard = Clipboard::new().context("Failed to initialize clipboard")?;
        Ok(Self { clipboard })
    }
}

impl ClipboardProvider for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.clipboard.set_text(text).context("Failed to set clipboard contents")?;
        Ok(())
    }
}

fn validate_url(url: &str) -> Result<&str> {
    let url = url.trim();
    if url.is_empty() {
        anyhow::bail!("Cannot copy an empty URL");
    }
    if url.len() > MAX_URL_LEN {
        anyhow::bail!("URL too long for clipboard ({} bytes, max {})", url.len(), MAX_URL_LEN);
    }
    Ok(url)
}

fn copy_with_provider(url: &str, provider: &mut dyn ClipboardProvider) -> Result<()> {
    let url = validate_url(url)?;
    provider.set_text(url)
}

/// Copy `url` to the system clipboard.
///
/// # Errors
/// Fails on an empty or oversized URL (checked before touching the clipboard)
/// and when no system clipboard is reachable, e.g. in headless sessions.
pub fn copy_url_to_clipboard(url: &str) -> Result<()> {
    validate_url(url)?;
    let mut clipboard = SystemClipboard::new()?;
    copy_with_provider(url, &mut clipboard)
}
