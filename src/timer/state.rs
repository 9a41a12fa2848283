//! Runtime session state.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::timer::config::SessionConfig;

/// Which kind of countdown is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Work interval.
    Work,
    /// Break interval.
    Break,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Work => write!(f, "Work"),
            Self::Break => write!(f, "Break"),
        }
    }
}

/// Coarse status derived from the state flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Counting down a work phase.
    Working,
    /// Counting down a break phase.
    Breaking,
    /// Frozen mid-session.
    Paused,
    /// All cycles done.
    Complete,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Working => write!(f, "Working"),
            Self::Breaking => write!(f, "Breaking"),
            Self::Paused => write!(f, "Paused"),
            Self::Complete => write!(f, "Complete"),
        }
    }
}

/// Everything the state machine tracks between ticks.
///
/// Fields are public for reading; only [`SessionTimer`](crate::timer::SessionTimer)
/// mutates them, which keeps `remaining_seconds <= phase_duration_seconds`
/// and `rounds_left <= total_cycles`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// Seconds left in the current phase.
    pub remaining_seconds: u32,
    /// Nominal length of the current phase.
    pub phase_duration_seconds: u32,
    /// Cycles not yet finished.
    pub rounds_left: u32,
    /// True while a break is running.
    pub is_break_phase: bool,
    /// True while the countdown advances on each tick.
    pub is_active: bool,
    /// Sound cue preference.
    pub sound_enabled: bool,
    /// Desktop alert preference.
    pub notifications_enabled: bool,
}

impl SessionState {
    /// Fresh, running session at the start of its first work phase.
    #[must_use]
    pub const fn new(config: &SessionConfig) -> Self {
        Self {
            remaining_seconds: config.work_duration_seconds,
            phase_duration_seconds: config.work_duration_seconds,
            rounds_left: config.total_cycles,
            is_break_phase: false,
            is_active: true,
            sound_enabled: config.sound_enabled,
            notifications_enabled: config.notifications_enabled,
        }
    }

    /// The phase currently counting down.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        if self.is_break_phase {
            Phase::Break
        } else {
            Phase::Work
        }
    }

    /// True once every cycle has run out.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.rounds_left == 0 && !self.is_break_phase && self.remaining_seconds == 0
    }

    /// Status for display.
    #[must_use]
    pub const fn status(&self) -> Status {
        if self.is_complete() {
            Status::Complete
        } else if !self.is_active {
            Status::Paused
        } else if self.is_break_phase {
            Status::Breaking
        } else {
            Status::Working
        }
    }

    /// Remaining time in the current phase.
    #[must_use]
    pub fn remaining(&self) -> Duration {
        Duration::seconds(i64::from(self.remaining_seconds))
    }

    /// Fraction of the current phase already elapsed (0.0 - 1.0).
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.phase_duration_seconds == 0 {
            return 1.0;
        }
        let elapsed = self.phase_duration_seconds.saturating_sub(self.remaining_seconds);
        f64::from(elapsed) / f64::from(self.phase_duration_seconds)
    }
}
