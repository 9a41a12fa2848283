//! Output formatting for pomosh.
//!
//! This module renders settings, setting changes and simulation reports as
//! pretty terminal text or JSON.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::error::PomoshError;
use crate::timer::{SessionConfig, SettingValue, SimulationReport};

pub use json::*;
pub use pretty::*;

/// Format session settings based on output format.
///
/// # Errors
///
/// Returns `PomoshError::Json` if JSON serialization fails.
pub fn format_config(config: &SessionConfig, format: OutputFormat) -> Result<String, PomoshError> {
    match format {
        OutputFormat::Pretty => Ok(format_config_pretty(config)),
        OutputFormat::Json => format_config_json(config),
    }
}

/// Format the result of a `config set` based on output format.
///
/// # Errors
///
/// Returns `PomoshError::Json` if JSON serialization fails.
pub fn format_setting_change(
    key: &str,
    requested: &str,
    stored: SettingValue,
    clamped: bool,
    format: OutputFormat,
) -> Result<String, PomoshError> {
    match format {
        OutputFormat::Pretty => Ok(format_setting_change_pretty(key, requested, stored, clamped)),
        OutputFormat::Json => format_setting_change_json(key, requested, stored, clamped),
    }
}

/// Format a simulation report based on output format.
///
/// # Errors
///
/// Returns `PomoshError::Json` if JSON serialization fails.
pub fn format_simulation(
    report: &SimulationReport,
    format: OutputFormat,
) -> Result<String, PomoshError> {
    match format {
        OutputFormat::Pretty => Ok(format_simulation_pretty(report)),
        OutputFormat::Json => format_simulation_json(report),
    }
}
