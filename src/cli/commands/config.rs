//! Settings command implementation.
//!
//! Handles `pomosh config` subcommands over the persisted settings file.

use colored::Colorize;
use tracing::info;

use crate::cli::args::{ConfigCommands, OutputFormat};
use crate::config::{Config, FileStore};
use crate::error::PomoshError;
use crate::output::{format_config, format_setting_change};
use crate::timer::{parse_duration_seconds, ConfigField, Preference, SettingValue, SettingsStore};

/// Execute config subcommands against `store`.
///
/// # Errors
///
/// Returns an error if the key or value is invalid or the file cannot be
/// written.
pub fn config(
    store: &mut FileStore,
    cmd: ConfigCommands,
    format: OutputFormat,
) -> Result<String, PomoshError> {
    match cmd {
        ConfigCommands::Show => format_config(&store.config().timer, format),
        ConfigCommands::Set { key, value } => set_setting(store, &key, &value, format),
        ConfigCommands::Reset => reset(store, format),
        ConfigCommands::Path => Ok(store.path().display().to_string()),
    }
}

/// A parsed `config set` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingUpdate {
    /// Numeric setting with the requested raw value.
    Number(ConfigField, u32),
    /// Boolean preference.
    Toggle(Preference, bool),
}

/// Parse a key/value pair from the command line.
///
/// Durations accept `25m`, `1h`, `300s` or bare minutes.
///
/// # Errors
///
/// Returns `PomoshError::InvalidSetting` for unknown keys or unparseable
/// values.
pub fn parse_setting(key: &str, value: &str) -> Result<SettingUpdate, PomoshError> {
    if let Some(field) = ConfigField::parse(key) {
        let parsed = if field.is_duration() {
            parse_duration_seconds(value)
        } else {
            parse_count(value)
        };
        return parsed
            .map(|v| SettingUpdate::Number(field, v))
            .ok_or_else(|| PomoshError::InvalidSetting(format!("'{value}' is not a valid value for {key}")));
    }

    if let Some(pref) = Preference::parse(key) {
        let enabled = match value.trim().to_lowercase().as_str() {
            "on" | "true" | "yes" | "1" => true,
            "off" | "false" | "no" | "0" => false,
            _ => {
                return Err(PomoshError::InvalidSetting(format!(
                    "'{value}' is not on/off for {key}"
                )))
            }
        };
        return Ok(SettingUpdate::Toggle(pref, enabled));
    }

    Err(PomoshError::InvalidSetting(format!(
        "unknown key '{key}' (expected work, break, cycles, sound or notifications)"
    )))
}

/// Parse a plain count. Values too large for `u32` saturate so they clamp
/// like any other out-of-range request.
fn parse_count(value: &str) -> Option<u32> {
    let value = value.trim();
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(value.parse().unwrap_or(u32::MAX))
}

fn set_setting(
    store: &mut FileStore,
    key: &str,
    value: &str,
    format: OutputFormat,
) -> Result<String, PomoshError> {
    let (store_key, stored, clamped) = match parse_setting(key, value)? {
        SettingUpdate::Number(field, requested) => {
            let v = field.clamp(requested);
            (field.key(), SettingValue::Int(v), v != requested)
        }
        SettingUpdate::Toggle(pref, enabled) => (pref.key(), SettingValue::Bool(enabled), false),
    };

    store.set(store_key, stored)?;
    info!(key = store_key, %stored, clamped, "setting changed");

    format_setting_change(store_key, value, stored, clamped, format)
}

fn reset(store: &mut FileStore, format: OutputFormat) -> Result<String, PomoshError> {
    let defaults = Config::default().timer;

    for field in ConfigField::ALL {
        store.set(field.key(), SettingValue::Int(defaults.get(field)))?;
    }
    for pref in Preference::ALL {
        store.set(pref.key(), SettingValue::Bool(defaults.preference(pref)))?;
    }

    match format {
        OutputFormat::Json => format_config(&store.config().timer, format),
        OutputFormat::Pretty => Ok(format!(
            "{}\n\n{}",
            "Settings restored to defaults".green(),
            format_config(&store.config().timer, format)?
        )),
    }
}
