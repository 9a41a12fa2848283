//! Pretty (human-readable) output formatting for pomosh.

use colored::Colorize;

use crate::timer::{
    format_clock, format_duration, ConfigField, Phase, Preference, SessionConfig, SettingValue,
    SimulationReport, Transition,
};

fn on_off(enabled: bool) -> String {
    if enabled {
        "on".green().to_string()
    } else {
        "off".dimmed().to_string()
    }
}

fn describe(field: ConfigField, value: u32) -> String {
    if field.is_duration() {
        format_duration(chrono::Duration::seconds(i64::from(value)))
    } else {
        value.to_string()
    }
}

/// Format session settings for the terminal.
#[must_use]
pub fn format_config_pretty(config: &SessionConfig) -> String {
    let mut lines = vec![format!("{}", "Preferences".bold())];

    for field in ConfigField::ALL {
        let (min, max) = field.bounds();
        lines.push(format!(
            "  {:<15} {}  {}",
            field.label(),
            describe(field, config.get(field)).cyan(),
            format!("({} - {})", describe(field, min), describe(field, max)).dimmed()
        ));
    }

    lines.push(format!("  {:<15} {}", "Cycle rings", "🔥".repeat(config.total_cycles as usize)));

    for pref in Preference::ALL {
        lines.push(format!("  {:<15} {}", pref.label(), on_off(config.preference(pref))));
    }

    lines.join("\n")
}

/// Format the result of a `config set`.
#[must_use]
pub fn format_setting_change_pretty(
    key: &str,
    requested: &str,
    stored: SettingValue,
    clamped: bool,
) -> String {
    let shown = match (ConfigField::ALL.into_iter().find(|f| f.key() == key), stored) {
        (Some(field), SettingValue::Int(v)) => describe(field, v),
        (_, SettingValue::Bool(v)) => on_off(v),
        (None, SettingValue::Int(v)) => v.to_string(),
    };

    let mut line = format!("{} {key} = {shown}", "✓".green());
    if clamped {
        line.push_str(
            &format!("  (requested {requested}, clamped to the allowed range)")
                .yellow()
                .to_string(),
        );
    }
    line
}

/// Format a simulation report for the terminal.
#[must_use]
pub fn format_simulation_pretty(report: &SimulationReport) -> String {
    let config = &report.config;
    let mut lines = vec![
        format!(
            "{} {} work / {} break × {} cycles",
            "Session".bold(),
            format_clock(config.work_duration_seconds),
            format_clock(config.break_duration_seconds),
            config.total_cycles
        ),
        String::new(),
    ];

    for entry in &report.timeline {
        let at = format!("tick {:>6}", entry.tick).dimmed();
        let what = match entry.transition {
            Transition::PhaseEnded(end) => match end.next {
                Some(Phase::Break) => format!("☕ break starts ({} rounds left)", end.rounds_left),
                Some(Phase::Work) => "🔥 work starts".to_string(),
                None => "🏁 final work phase ends, break skipped".to_string(),
            },
            Transition::Completed => "✅ session complete".green().to_string(),
        };
        lines.push(format!("  {at}  {what}"));
    }

    lines.push(String::new());
    let status = if report.completed {
        "complete".green()
    } else {
        "stopped at tick limit".yellow()
    };
    lines.push(format!(
        "{} ticks, {} work phases, {} breaks ({status})",
        report.ticks, report.work_phases, report.breaks
    ));

    lines.join("\n")
}
