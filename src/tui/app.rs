//! Application state for the TUI.

use std::cell::Cell;
use std::rc::Rc;

use crate::timer::{
    format_duration, ConfigField, Preference, SessionState, SessionTimer, SettingsStore, Status,
    Transition,
};

/// Application state.
pub struct App<S: SettingsStore> {
    /// The session being run.
    pub timer: SessionTimer<S>,
    /// Status message to display.
    pub status: Option<String>,
    /// Whether the key help overlay is shown.
    pub show_help: bool,
    /// Set by the timer's change observer, cleared after each draw.
    dirty: Rc<Cell<bool>>,
    /// Pause came from the keyboard, so focus changes leave it alone.
    paused_by_user: bool,
}

impl<S: SettingsStore> App<S> {
    /// Wrap a timer.
    pub fn new(mut timer: SessionTimer<S>) -> Self {
        let dirty = Rc::new(Cell::new(true));
        let flag = Rc::clone(&dirty);
        timer.on_change(move |_| flag.set(true));

        Self {
            timer,
            status: Some("Press ? for help".to_string()),
            show_help: false,
            dirty,
            paused_by_user: false,
        }
    }

    /// Current session state.
    pub const fn state(&self) -> &SessionState {
        self.timer.state()
    }

    /// Whether anything changed since the last [`mark_drawn`](Self::mark_drawn).
    pub fn needs_redraw(&self) -> bool {
        self.dirty.get()
    }

    /// Record that the current state has been drawn.
    pub fn mark_drawn(&self) {
        self.dirty.set(false);
    }

    /// Force a redraw (e.g. after a terminal resize).
    pub fn invalidate(&self) {
        self.dirty.set(true);
    }

    /// Deliver one clock tick.
    pub fn tick(&mut self) {
        match self.timer.tick() {
            Some(Transition::PhaseEnded(end)) => self.status = Some(end.message().to_string()),
            Some(Transition::Completed) => {
                self.status = Some("Session complete. Press r to start again.".to_string());
            }
            None => {}
        }
    }

    /// Space bar: pause or resume.
    pub fn toggle_pause(&mut self) {
        if self.state().is_complete() {
            self.status = Some("Session complete. Press r to start again.".to_string());
            return;
        }
        let resume = !self.state().is_active;
        self.paused_by_user = !resume;
        self.timer.set_active(resume);
        self.status = Some(if resume { "Resumed" } else { "Paused" }.to_string());
    }

    /// Terminal gained or lost focus.
    pub fn focus_changed(&mut self, focused: bool) {
        if self.paused_by_user || self.state().is_complete() {
            return;
        }
        self.timer.set_active(focused);
    }

    /// Move a numeric setting by `steps` increments.
    pub fn adjust(&mut self, field: ConfigField, steps: i32) {
        let current = self.timer.config().get(field);
        let delta = field.step().saturating_mul(steps.unsigned_abs());
        let requested = if steps < 0 {
            current.saturating_sub(delta)
        } else {
            current.saturating_add(delta)
        };

        let stored = self.timer.update_config(field, requested);
        let shown = if field.is_duration() {
            format_duration(chrono::Duration::seconds(i64::from(stored)))
        } else {
            stored.to_string()
        };
        self.status = Some(format!("{}: {shown}", field.label()));
    }

    /// Flip a preference.
    pub fn toggle(&mut self, pref: Preference) {
        let enabled = !self.timer.config().preference(pref);
        self.timer.set_preference(pref, enabled);
        self.status = Some(format!("{}: {}", pref.label(), if enabled { "on" } else { "off" }));
    }

    /// Start the session over.
    pub fn restart(&mut self) {
        self.paused_by_user = false;
        self.timer.restart();
        self.status = Some("New session started".to_string());
    }

    /// Headline for the current status.
    pub fn headline(&self) -> &'static str {
        match self.state().status() {
            Status::Working => "Working",
            Status::Breaking => "Break",
            Status::Paused => "Paused",
            Status::Complete => "Done",
        }
    }
}
