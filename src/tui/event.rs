//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::error::PomoshError;
use crate::timer::{ConfigField, Preference, SettingsStore};
use crate::tui::app::App;

/// Action to take after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
}

/// Wait up to `timeout` for one terminal event and apply it.
///
/// Returns an action for the main loop, or None if no action is needed.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events<S: SettingsStore>(
    app: &mut App<S>,
    timeout: Duration,
) -> Result<Option<Action>, PomoshError> {
    if !event::poll(timeout).map_err(|e| PomoshError::Terminal(format!("Event poll failed: {e}")))? {
        return Ok(None);
    }

    let event = event::read().map_err(|e| PomoshError::Terminal(format!("Event read failed: {e}")))?;
    match event {
        Event::FocusGained => app.focus_changed(true),
        Event::FocusLost => app.focus_changed(false),
        Event::Resize(_, _) => app.invalidate(),
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return Ok(Some(Action::Quit));
            }
            return Ok(handle_key(app, key.code));
        }
        _ => {}
    }

    Ok(None)
}

/// Apply a single key press.
pub fn handle_key<S: SettingsStore>(app: &mut App<S>, code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => return Some(Action::Quit),

        KeyCode::Char(' ') | KeyCode::Char('p') => app.toggle_pause(),
        KeyCode::Char('r') => app.restart(),

        KeyCode::Char('w') => app.adjust(ConfigField::WorkDuration, -1),
        KeyCode::Char('W') => app.adjust(ConfigField::WorkDuration, 1),
        KeyCode::Char('b') => app.adjust(ConfigField::BreakDuration, -1),
        KeyCode::Char('B') => app.adjust(ConfigField::BreakDuration, 1),
        KeyCode::Char('c') => app.adjust(ConfigField::TotalCycles, -1),
        KeyCode::Char('C') => app.adjust(ConfigField::TotalCycles, 1),

        KeyCode::Char('s') => app.toggle(Preference::Sound),
        KeyCode::Char('n') => app.toggle(Preference::Notifications),

        KeyCode::Char('?') => {
            app.show_help = !app.show_help;
            app.invalidate();
        }

        _ => {}
    }
    None
}
