//! Phase-end signal channels.
//!
//! The session timer hands a [`PhaseEnd`] to up to two sinks at every
//! work/break boundary: an audible cue and a user-visible alert. Sinks are
//! best-effort. The timer logs their errors and carries on.

use std::io::Write;

use notify_rust::Notification;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::PomoshError;
use crate::timer::state::Phase;

/// A crossed work/break boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseEnd {
    /// The phase that just ran out.
    pub ending: Phase,
    /// The phase starting now, or `None` when the session is finishing.
    pub next: Option<Phase>,
    /// Cycles left after this boundary.
    pub rounds_left: u32,
}

impl PhaseEnd {
    /// Human-readable body for alerts.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self.next {
            Some(Phase::Break) => "It's break time ☕️",
            Some(Phase::Work) => "Now, it's working time 🔥",
            None => "Session complete, nice work 🙌",
        }
    }
}

/// Receiver of phase-end signals.
#[cfg_attr(test, mockall::automock)]
pub trait SignalSink {
    /// Deliver one signal. Must not block the caller for long.
    ///
    /// # Errors
    ///
    /// Returns an error if the signal could not be dispatched.
    fn emit(&self, event: &PhaseEnd) -> Result<(), PomoshError>;
}

/// Sink that drops every signal.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl SignalSink for Silent {
    fn emit(&self, _event: &PhaseEnd) -> Result<(), PomoshError> {
        Ok(())
    }
}

/// Audible cue: rings the terminal bell.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalBell;

impl SignalSink for TerminalBell {
    fn emit(&self, event: &PhaseEnd) -> Result<(), PomoshError> {
        let mut stdout = std::io::stdout();
        stdout.write_all(b"\x07")?;
        stdout.flush()?;
        debug!(ending = %event.ending, "bell rung");
        Ok(())
    }
}

/// User-visible alert via the desktop notification service.
///
/// Each alert is shown from its own short-lived thread so a slow
/// notification daemon never holds up the tick.
#[derive(Debug, Clone)]
pub struct DesktopNotifier {
    app_name: String,
}

impl DesktopNotifier {
    /// Create a notifier that labels alerts with `app_name`.
    #[must_use]
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
        }
    }
}

impl Default for DesktopNotifier {
    fn default() -> Self {
        Self::new("pomosh")
    }
}

impl SignalSink for DesktopNotifier {
    fn emit(&self, event: &PhaseEnd) -> Result<(), PomoshError> {
        let app_name = self.app_name.clone();
        let body = event.message();

        std::thread::Builder::new()
            .name("pomosh-notify".to_string())
            .spawn(move || {
                let shown = Notification::new()
                    .appname(&app_name)
                    .summary("Time is up 🙌")
                    .body(body)
                    .show();
                if let Err(e) = shown {
                    warn!(error = %e, "desktop notification failed");
                }
            })
            .map_err(|e| PomoshError::Notification(format!("Failed to spawn notifier: {e}")))?;

        Ok(())
    }
}
