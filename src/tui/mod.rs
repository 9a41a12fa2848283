//! Terminal User Interface (TUI) for pomosh.
//!
//! Runs the session timer on screen with a one-second tick. Built with
//! ratatui and crossterm.

mod app;
mod event;
mod ui;

pub use app::App;

use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    event::{DisableFocusChange, EnableFocusChange},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tracing::info;

use crate::config::FileStore;
use crate::error::PomoshError;
use crate::timer::{DesktopNotifier, SessionTimer, SettingsStore, TerminalBell};

/// Interval between clock ticks.
pub const TICK: Duration = Duration::from_secs(1);

/// Run the TUI application.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialize or run.
pub fn run(store: FileStore) -> Result<(), PomoshError> {
    let timer = SessionTimer::new(store)
        .with_sound(TerminalBell)
        .with_alert(DesktopNotifier::default());
    let mut app = App::new(timer);

    enable_raw_mode().map_err(|e| PomoshError::Terminal(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableFocusChange)
        .map_err(|e| PomoshError::Terminal(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| PomoshError::Terminal(format!("Failed to create terminal: {e}")))?;

    info!("timer started");
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableFocusChange).ok();
    terminal.show_cursor().ok();
    info!(status = %app.state().status(), "timer closed");

    result
}

/// Run the main application loop.
///
/// Ticks are scheduled against a fixed deadline so time spent drawing or
/// handling keys does not stretch the second.
fn run_app<B: Backend, S: SettingsStore>(
    terminal: &mut Terminal<B>,
    app: &mut App<S>,
) -> Result<(), PomoshError> {
    let mut next_tick = Instant::now() + TICK;

    loop {
        if app.needs_redraw() {
            terminal
                .draw(|frame| ui::render(frame, app))
                .map_err(|e| PomoshError::Terminal(format!("Failed to draw: {e}")))?;
            app.mark_drawn();
        }

        let timeout = next_tick.saturating_duration_since(Instant::now());
        if let Some(event::Action::Quit) = event::handle_events(app, timeout)? {
            break;
        }

        while Instant::now() >= next_tick {
            app.tick();
            next_tick += TICK;
        }
    }

    Ok(())
}
