//! Alternate-screen session for the browser window.

use std::io::{self, Stdout, Write};

use anyhow::{Context, Result};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

const WINDOW_TITLE: &str = "WebExplorer";

/// Raw-mode, alternate-screen terminal owned by one browsing session.
///
/// The shell screen comes back on [`BrowserScreen::leave`] or, failing that,
/// when the value is dropped (panic or early return out of the event loop).
pub struct BrowserScreen {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    active: bool,
}

impl BrowserScreen {
    pub fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        if let Err(e) = enter_sequence(&mut stdout) {
            let _ = disable_raw_mode();
            return Err(e).context("Failed to open browser screen");
        }

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.clear()?;
        Ok(Self { terminal, active: true })
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    /// Hand the screen back to the shell, reporting any failure
    pub fn leave(mut self) -> Result<()> {
        self.active = false;
        disable_raw_mode().context("Failed to disable raw mode")?;
        leave_sequence(self.terminal.backend_mut()).context("Failed to leave browser screen")?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for BrowserScreen {
    fn drop(&mut self) {
        if !self.active {
            return;
        }
        let _ = disable_raw_mode();
        let _ = leave_sequence(self.terminal.backend_mut());
        let _ = self.terminal.show_cursor();
    }
}

fn enter_sequence<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, EnterAlternateScreen, SetTitle(WINDOW_TITLE))
}

fn leave_sequence<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, LeaveAlternateScreen)
}
