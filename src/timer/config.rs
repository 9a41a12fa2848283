//! Session configuration and its valid ranges.
//!
//! Every value that enters a [`SessionConfig`] goes through
//! [`ConfigField::clamp`], so a config can never hold a duration or cycle
//! count outside the ranges below.

use serde::{Deserialize, Serialize};

use crate::timer::store::{SettingValue, SettingsStore};

/// Default work phase length (20 minutes).
pub const DEFAULT_WORK_SECONDS: u32 = 1200;
/// Default break phase length (10 minutes).
pub const DEFAULT_BREAK_SECONDS: u32 = 600;
/// Default number of work/break cycles in a session.
pub const DEFAULT_TOTAL_CYCLES: u32 = 4;

/// A numeric, range-checked session setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigField {
    /// Length of a work phase in seconds.
    WorkDuration,
    /// Length of a break phase in seconds.
    BreakDuration,
    /// Number of work/break round-trips in a session.
    TotalCycles,
}

impl ConfigField {
    /// All numeric fields, in display order.
    pub const ALL: [Self; 3] = [Self::WorkDuration, Self::BreakDuration, Self::TotalCycles];

    /// Settings store key for this field.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::WorkDuration => "work_duration_seconds",
            Self::BreakDuration => "break_duration_seconds",
            Self::TotalCycles => "total_cycles",
        }
    }

    /// Inclusive `(min, max)` bounds.
    #[must_use]
    pub const fn bounds(self) -> (u32, u32) {
        match self {
            Self::WorkDuration => (1200, 3600),
            Self::BreakDuration => (300, 600),
            Self::TotalCycles => (1, 12),
        }
    }

    /// Granularity of accepted values, measured from the lower bound.
    #[must_use]
    pub const fn step(self) -> u32 {
        match self {
            Self::WorkDuration => 300,
            Self::BreakDuration => 60,
            Self::TotalCycles => 1,
        }
    }

    /// Value used when the settings store has no entry.
    #[must_use]
    pub const fn default_value(self) -> u32 {
        match self {
            Self::WorkDuration => DEFAULT_WORK_SECONDS,
            Self::BreakDuration => DEFAULT_BREAK_SECONDS,
            Self::TotalCycles => DEFAULT_TOTAL_CYCLES,
        }
    }

    /// Whether the field holds a duration in seconds.
    #[must_use]
    pub const fn is_duration(self) -> bool {
        matches!(self, Self::WorkDuration | Self::BreakDuration)
    }

    /// Clamp `value` into range and snap it to the nearest step.
    #[must_use]
    pub fn clamp(self, value: u32) -> u32 {
        let (min, max) = self.bounds();
        let step = self.step();
        let offset = value.clamp(min, max) - min;
        let snapped = min + (offset + step / 2) / step * step;
        snapped.min(max)
    }

    /// Parse a field from a user-facing name.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "work" | "work-duration" | "work_duration_seconds" => Some(Self::WorkDuration),
            "break" | "break-duration" | "break_duration_seconds" => Some(Self::BreakDuration),
            "cycles" | "rounds" | "total-cycles" | "total_cycles" => Some(Self::TotalCycles),
            _ => None,
        }
    }

    /// Short label for display.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::WorkDuration => "Working time",
            Self::BreakDuration => "Break time",
            Self::TotalCycles => "Total cycles",
        }
    }
}

impl std::fmt::Display for ConfigField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// A boolean user preference that gates a phase-end signal channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preference {
    /// Audible cue at phase boundaries.
    Sound,
    /// Desktop alert at phase boundaries.
    Notifications,
}

impl Preference {
    /// Both preferences.
    pub const ALL: [Self; 2] = [Self::Sound, Self::Notifications];

    /// Settings store key for this preference.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Sound => "sound_enabled",
            Self::Notifications => "notifications_enabled",
        }
    }

    /// Parse a preference from a user-facing name.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "sound" | "sounds" | "sound_enabled" => Some(Self::Sound),
            "notifications" | "notify" | "notifications_enabled" => Some(Self::Notifications),
            _ => None,
        }
    }

    /// Short label for display.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sound => "Sound effects",
            Self::Notifications => "Notifications",
        }
    }
}

/// User-adjustable session settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Work phase length in seconds.
    pub work_duration_seconds: u32,
    /// Break phase length in seconds.
    pub break_duration_seconds: u32,
    /// Work/break cycles per session.
    pub total_cycles: u32,
    /// Ring the bell at phase boundaries.
    pub sound_enabled: bool,
    /// Show a desktop notification at phase boundaries.
    pub notifications_enabled: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            work_duration_seconds: DEFAULT_WORK_SECONDS,
            break_duration_seconds: DEFAULT_BREAK_SECONDS,
            total_cycles: DEFAULT_TOTAL_CYCLES,
            sound_enabled: true,
            notifications_enabled: true,
        }
    }
}

impl SessionConfig {
    /// Read every setting from `store`, falling back to defaults for missing
    /// or mistyped keys and clamping anything out of range.
    #[must_use]
    pub fn from_store<S: SettingsStore + ?Sized>(store: &S) -> Self {
        let mut config = Self::default();

        for field in ConfigField::ALL {
            let value = store
                .get(field.key())
                .and_then(SettingValue::as_u32)
                .unwrap_or_else(|| field.default_value());
            config.set(field, value);
        }

        for pref in Preference::ALL {
            if let Some(enabled) = store.get(pref.key()).and_then(SettingValue::as_bool) {
                config.set_preference(pref, enabled);
            }
        }

        config
    }

    /// Current value of a numeric field.
    #[must_use]
    pub const fn get(&self, field: ConfigField) -> u32 {
        match field {
            ConfigField::WorkDuration => self.work_duration_seconds,
            ConfigField::BreakDuration => self.break_duration_seconds,
            ConfigField::TotalCycles => self.total_cycles,
        }
    }

    /// Set a numeric field, clamping it. Returns the value actually stored.
    pub fn set(&mut self, field: ConfigField, value: u32) -> u32 {
        let value = field.clamp(value);
        match field {
            ConfigField::WorkDuration => self.work_duration_seconds = value,
            ConfigField::BreakDuration => self.break_duration_seconds = value,
            ConfigField::TotalCycles => self.total_cycles = value,
        }
        value
    }

    /// Current value of a preference.
    #[must_use]
    pub const fn preference(&self, pref: Preference) -> bool {
        match pref {
            Preference::Sound => self.sound_enabled,
            Preference::Notifications => self.notifications_enabled,
        }
    }

    /// Set a preference.
    pub fn set_preference(&mut self, pref: Preference, enabled: bool) {
        match pref {
            Preference::Sound => self.sound_enabled = enabled,
            Preference::Notifications => self.notifications_enabled = enabled,
        }
    }

    /// Copy with every numeric field pulled back into range.
    #[must_use]
    pub fn clamped(mut self) -> Self {
        for field in ConfigField::ALL {
            self.set(field, self.get(field));
        }
        self
    }
}
