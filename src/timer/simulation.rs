//! Headless session runs.
//!
//! Drives a [`SessionTimer`] tick by tick without a clock, recording every
//! transition. Used by `pomosh simulate` to preview a session's shape.

use serde::Serialize;

use crate::timer::config::{ConfigField, Preference, SessionConfig};
use crate::timer::session::{SessionTimer, Transition};
use crate::timer::state::Phase;
use crate::timer::store::MemoryStore;

/// A transition and the tick it happened on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimelineEntry {
    /// 1-based tick number.
    pub tick: u32,
    /// What happened.
    pub transition: Transition,
}

/// Outcome of a simulated session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulationReport {
    /// Config the session ran with (after clamping).
    pub config: SessionConfig,
    /// Ticks delivered until the session stopped or the limit was hit.
    pub ticks: u32,
    /// Work phases started, including the first.
    pub work_phases: u32,
    /// Breaks entered.
    pub breaks: u32,
    /// Whether the session reached its terminal state.
    pub completed: bool,
    /// Every transition in order.
    pub timeline: Vec<TimelineEntry>,
}

/// Run a full session with `config`, delivering at most `max_ticks` ticks.
///
/// Sound and alert channels stay silent.
#[must_use]
pub fn simulate(config: &SessionConfig, max_ticks: u32) -> SimulationReport {
    let mut timer = SessionTimer::new(MemoryStore::default());
    for field in ConfigField::ALL {
        timer.update_config(field, config.get(field));
    }
    for pref in Preference::ALL {
        timer.set_preference(pref, false);
    }
    timer.restart();

    let mut report = SimulationReport {
        config: *timer.config(),
        ticks: 0,
        work_phases: 1,
        breaks: 0,
        completed: false,
        timeline: Vec::new(),
    };

    while timer.state().is_active && report.ticks < max_ticks {
        report.ticks += 1;
        let Some(transition) = timer.tick() else {
            continue;
        };

        match transition {
            Transition::PhaseEnded(end) => match end.next {
                Some(Phase::Break) => report.breaks += 1,
                Some(Phase::Work) => report.work_phases += 1,
                None => {}
            },
            Transition::Completed => report.completed = true,
        }
        report.timeline.push(TimelineEntry {
            tick: report.ticks,
            transition,
        });
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(work: u32, brk: u32, cycles: u32) -> SessionConfig {
        SessionConfig {
            work_duration_seconds: work,
            break_duration_seconds: brk,
            total_cycles: cycles,
            ..SessionConfig::default()
        }
    }

    #[test]
    fn test_three_cycles_two_breaks() {
        let report = simulate(&config(1200, 600, 3), 100_000);

        assert!(report.completed);
        assert_eq!(report.work_phases, 3);
        assert_eq!(report.breaks, 2);
        assert_eq!(report.ticks, 4796);
        assert_eq!(report.timeline.len(), 6);
        assert_eq!(report.timeline[0].tick, 1199);
        assert_eq!(report.timeline[1].tick, 1199 + 599);
    }

    #[test]
    fn test_single_cycle() {
        let report = simulate(&config(1200, 600, 1), 100_000);

        assert!(report.completed);
        assert_eq!(report.breaks, 0);
        assert_eq!(report.work_phases, 1);
        assert_eq!(report.ticks, 1200);
    }

    #[test]
    fn test_max_ticks_stops_early() {
        let report = simulate(&config(1200, 600, 4), 100);

        assert!(!report.completed);
        assert_eq!(report.ticks, 100);
        assert!(report.timeline.is_empty());
    }

    #[test]
    fn test_config_is_clamped() {
        let report = simulate(&config(60, 60, 40), 0);

        assert_eq!(report.config.work_duration_seconds, 1200);
        assert_eq!(report.config.break_duration_seconds, 300);
        assert_eq!(report.config.total_cycles, 12);
        assert!(!report.config.sound_enabled);
    }
}
