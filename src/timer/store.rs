//! Key-value settings persistence.
//!
//! The session timer receives its store at construction time instead of
//! reaching for a process-wide one, so tests can hand it a [`MemoryStore`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::PomoshError;

/// A stored setting value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    /// Boolean preference.
    Bool(bool),
    /// Integer setting (durations, cycle counts).
    Int(u32),
}

impl SettingValue {
    /// The integer payload, if this is an integer.
    #[must_use]
    pub const fn as_u32(self) -> Option<u32> {
        match self {
            Self::Int(v) => Some(v),
            Self::Bool(_) => None,
        }
    }

    /// The boolean payload, if this is a boolean.
    #[must_use]
    pub const fn as_bool(self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(v),
            Self::Int(_) => None,
        }
    }
}

impl std::fmt::Display for SettingValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
        }
    }
}

/// Persistence for session settings.
#[cfg_attr(test, mockall::automock)]
pub trait SettingsStore {
    /// Look up a setting. Returns `None` if the key has never been written.
    fn get(&self, key: &str) -> Option<SettingValue>;

    /// Write a setting.
    ///
    /// # Errors
    ///
    /// Returns an error if the value could not be persisted.
    fn set(&mut self, key: &str, value: SettingValue) -> Result<(), PomoshError>;
}

/// In-memory settings store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    values: HashMap<String, SettingValue>,
}

impl MemoryStore {
    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, key: &str, value: SettingValue) -> Self {
        self.values.insert(key.to_string(), value);
        self
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether nothing has been stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Option<SettingValue> {
        self.values.get(key).copied()
    }

    fn set(&mut self, key: &str, value: SettingValue) -> Result<(), PomoshError> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}
