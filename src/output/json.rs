//! JSON output formatting for pomosh.

use serde_json::json;

use crate::error::PomoshError;
use crate::timer::{SessionConfig, SettingValue, SimulationReport};

/// Format session settings as JSON.
///
/// # Errors
///
/// Returns `PomoshError::Json` if JSON serialization fails.
pub fn format_config_json(config: &SessionConfig) -> Result<String, PomoshError> {
    Ok(serde_json::to_string_pretty(config)?)
}

/// Format a setting change as JSON.
///
/// # Errors
///
/// Returns `PomoshError::Json` if JSON serialization fails.
pub fn format_setting_change_json(
    key: &str,
    requested: &str,
    stored: SettingValue,
    clamped: bool,
) -> Result<String, PomoshError> {
    let output = json!({
        "key": key,
        "requested": requested,
        "stored": stored,
        "clamped": clamped,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a simulation report as JSON.
///
/// # Errors
///
/// Returns `PomoshError::Json` if JSON serialization fails.
pub fn format_simulation_json(report: &SimulationReport) -> Result<String, PomoshError> {
    Ok(serde_json::to_string_pretty(report)?)
}
