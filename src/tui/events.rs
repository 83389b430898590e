use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// User actions from keyboard events
#[derive(Debug, PartialEq)]
pub enum Action {
    Quit,
    ClearInput,
    Back,
    Forward,
    Refresh,
    Home,
    ToggleReviews,
    FocusAddressBar,
    CycleFocus,
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    Submit,
    CopyUrl,
    Input(char),
    DeleteChar,
    None,
}

/// Poll for keyboard events and convert to actions
pub fn poll_event(timeout: Duration) -> anyhow::Result<Action> {
    if event::poll(timeout)?
        && let Event::Key(key) = event::read()?
        && key.kind != KeyEventKind::Release
    {
        return Ok(key_to_action(key));
    }
    Ok(Action::None)
}

fn key_to_action(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Esc, _) => Action::ClearInput,

        // History
        (KeyCode::Left, KeyModifiers::ALT) | (KeyCode::Char('b'), KeyModifiers::CONTROL) => {
            Action::Back
        }
        (KeyCode::Right, KeyModifiers::ALT) | (KeyCode::Char('f'), KeyModifiers::CONTROL) => {
            Action::Forward
        }
        (KeyCode::Char('r'), KeyModifiers::CONTROL) | (KeyCode::F(5), _) => Action::Refresh,
        (KeyCode::Char('g'), KeyModifiers::CONTROL) | (KeyCode::Home, KeyModifiers::ALT) => {
            Action::Home
        }

        // Panels and focus
        (KeyCode::Char('t'), KeyModifiers::CONTROL) => Action::ToggleReviews,
        (KeyCode::Char('l'), KeyModifiers::CONTROL) => Action::FocusAddressBar,
        (KeyCode::Tab, _) => Action::CycleFocus,

        // Selection
        (KeyCode::Up, _) => Action::MoveUp,
        (KeyCode::Down, _) => Action::MoveDown,
        (KeyCode::PageUp, _) => Action::PageUp,
        (KeyCode::PageDown, _) => Action::PageDown,

        (KeyCode::Enter, _) => Action::Submit,
        (KeyCode::Char('y'), KeyModifiers::CONTROL) => Action::CopyUrl,

        // Text input
        (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
            Action::Input(c)
        }
        (KeyCode::Backspace, _) => Action::DeleteChar,

        _ => Action::None,
    }
}
