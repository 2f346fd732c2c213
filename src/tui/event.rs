//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::PsySafeError;
use crate::features::breathing::Clock;
use crate::tui::app::App;

/// Longest time the loop blocks waiting for input.
pub const MAX_POLL: Duration = Duration::from_millis(100);

/// Action to take after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// Start or stop the session.
    Toggle,
    /// Highlight a technique by index.
    Select(usize),
    /// Highlight the next technique.
    Next,
}

/// Wait for input until the app's next timer is due.
///
/// Returns an action to take, or None if no action is needed.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events<C: Clock>(app: &App<C>) -> Result<Option<Action>, PsySafeError> {
    if !event::poll(app.poll_timeout(MAX_POLL))
        .map_err(|e| PsySafeError::Terminal(format!("Event poll failed: {e}")))?
    {
        return Ok(None);
    }

    match event::read().map_err(|e| PsySafeError::Terminal(format!("Event read failed: {e}")))? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(map_key(key)),
        _ => Ok(None),
    }
}

/// Map a key press to an action.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char(' ' | 's') | KeyCode::Enter => Some(Action::Toggle),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|d| usize::try_from(d).ok())
            .map(|d| Action::Select(d - 1)),
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => Some(Action::Next),
        _ => None,
    }
}
