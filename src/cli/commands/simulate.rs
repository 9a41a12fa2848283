//! Simulate command implementation.

use crate::cli::args::{OutputFormat, SimulateArgs};
use crate::error::PomoshError;
use crate::output::format_simulation;
use crate::timer::{parse_duration_seconds, simulate as run_simulation, SessionConfig};

/// Run a headless session from `base` with any overrides in `args`.
///
/// # Errors
///
/// Returns an error if a duration override cannot be parsed or output
/// formatting fails.
pub fn simulate(
    base: &SessionConfig,
    args: &SimulateArgs,
    format: OutputFormat,
) -> Result<String, PomoshError> {
    let mut config = *base;

    if let Some(ref work) = args.work {
        config.work_duration_seconds = parse_override("work", work)?;
    }
    if let Some(ref brk) = args.r#break {
        config.break_duration_seconds = parse_override("break", brk)?;
    }
    if let Some(cycles) = args.cycles {
        config.total_cycles = cycles;
    }

    let report = run_simulation(&config, args.max_ticks);
    format_simulation(&report, format)
}

fn parse_override(name: &str, value: &str) -> Result<u32, PomoshError> {
    parse_duration_seconds(value).ok_or_else(|| {
        PomoshError::InvalidSetting(format!("'{value}' is not a valid {name} duration"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(work: Option<&str>, brk: Option<&str>, cycles: Option<u32>) -> SimulateArgs {
        SimulateArgs {
            work: work.map(str::to_string),
            r#break: brk.map(str::to_string),
            cycles,
            max_ticks: 100_000,
        }
    }

    #[test]
    fn test_overrides_apply() {
        let out = simulate(
            &SessionConfig::default(),
            &args(Some("25m"), Some("5m"), Some(2)),
            OutputFormat::Json,
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["config"]["work_duration_seconds"], 1500);
        assert_eq!(value["config"]["break_duration_seconds"], 300);
        assert_eq!(value["config"]["total_cycles"], 2);
        assert_eq!(value["breaks"], 1);
        assert_eq!(value["completed"], true);
    }

    #[test]
    fn test_bad_duration() {
        let err = simulate(
            &SessionConfig::default(),
            &args(Some("later"), None, None),
            OutputFormat::Json,
        )
        .unwrap_err();
        assert!(matches!(err, PomoshError::InvalidSetting(_)));
    }

    #[test]
    fn test_oversized_override_is_clamped() {
        let out = simulate(
            &SessionConfig::default(),
            &args(Some("9999999999999999h"), None, Some(1)),
            OutputFormat::Json,
        )
        .unwrap();

        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["config"]["work_duration_seconds"], 3600);
        assert_eq!(value["completed"], true);
    }
}
