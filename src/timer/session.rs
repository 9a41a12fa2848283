//! The session timer state machine.
//!
//! A [`SessionTimer`] alternates work and break phases for a configured
//! number of cycles. It is driven by an external once-per-second
//! [`tick`](SessionTimer::tick) and never looks at a clock itself.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::timer::config::{ConfigField, Preference, SessionConfig};
use crate::timer::signal::{PhaseEnd, SignalSink, Silent};
use crate::timer::state::{Phase, SessionState};
use crate::timer::store::{SettingValue, SettingsStore};

/// Callback invoked with the new state after every operation.
pub type Observer = Box<dyn FnMut(&SessionState)>;

/// What a tick did, when it did more than count down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Transition {
    /// A work/break boundary was crossed.
    PhaseEnded(PhaseEnd),
    /// The countdown hit zero with no rounds left and stopped.
    Completed,
}

/// Work/break cycle timer.
pub struct SessionTimer<S: SettingsStore> {
    store: S,
    config: SessionConfig,
    state: SessionState,
    sound: Box<dyn SignalSink>,
    alert: Box<dyn SignalSink>,
    observers: Vec<Observer>,
}

impl<S: SettingsStore> SessionTimer<S> {
    /// Create a timer whose config is read from `store`.
    ///
    /// The session starts active, at the beginning of its first work phase.
    /// Both signal channels are silent until replaced with
    /// [`with_sound`](Self::with_sound) / [`with_alert`](Self::with_alert).
    pub fn new(store: S) -> Self {
        let config = SessionConfig::from_store(&store);
        let state = SessionState::new(&config);
        debug!(?config, "session initialized");

        Self {
            store,
            config,
            state,
            sound: Box::new(Silent),
            alert: Box::new(Silent),
            observers: Vec::new(),
        }
    }

    /// Use `sink` for the audible cue channel.
    #[must_use]
    pub fn with_sound(mut self, sink: impl SignalSink + 'static) -> Self {
        self.sound = Box::new(sink);
        self
    }

    /// Use `sink` for the user-visible alert channel.
    #[must_use]
    pub fn with_alert(mut self, sink: impl SignalSink + 'static) -> Self {
        self.alert = Box::new(sink);
        self
    }

    /// Register a state change observer.
    pub fn on_change(&mut self, observer: impl FnMut(&SessionState) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    /// Current configuration.
    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The injected settings store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Advance the session by one second.
    ///
    /// Does nothing while the session is inactive.
    pub fn tick(&mut self) -> Option<Transition> {
        if !self.state.is_active {
            self.notify();
            return None;
        }

        if self.state.remaining_seconds > 0 {
            self.state.remaining_seconds -= 1;
        }

        let transition = if self.state.remaining_seconds == 1 && self.state.rounds_left > 0 {
            Some(Transition::PhaseEnded(self.end_phase()))
        } else if self.state.remaining_seconds == 0 {
            self.state.is_active = false;
            info!("session complete");
            Some(Transition::Completed)
        } else {
            None
        };

        self.notify();
        transition
    }

    /// Cross a work/break boundary.
    ///
    /// The final cycle has no break: its boundary drops straight to zero
    /// seconds and the next tick completes the session.
    fn end_phase(&mut self) -> PhaseEnd {
        let ending = self.state.phase();
        self.state.is_break_phase = !self.state.is_break_phase;

        let next = if self.state.is_break_phase {
            let next = if self.state.rounds_left == 1 {
                self.state.remaining_seconds = 0;
                self.state.is_break_phase = false;
                None
            } else {
                self.start_phase(self.config.break_duration_seconds);
                Some(Phase::Break)
            };
            self.state.rounds_left -= 1;
            next
        } else {
            self.start_phase(self.config.work_duration_seconds);
            Some(Phase::Work)
        };

        let event = PhaseEnd {
            ending,
            next,
            rounds_left: self.state.rounds_left,
        };
        info!(ending = %ending, next = ?next, rounds_left = event.rounds_left, "phase ended");
        self.signal(&event);
        event
    }

    fn start_phase(&mut self, seconds: u32) {
        self.state.phase_duration_seconds = seconds;
        self.state.remaining_seconds = seconds;
    }

    fn signal(&self, event: &PhaseEnd) {
        if self.state.sound_enabled {
            if let Err(e) = self.sound.emit(event) {
                warn!(error = %e, "sound cue failed");
            }
        }
        if self.state.notifications_enabled {
            if let Err(e) = self.alert.emit(event) {
                warn!(error = %e, "alert failed");
            }
        }
    }

    /// Pause or resume the countdown. Nothing else is touched.
    pub fn set_active(&mut self, active: bool) {
        self.state.is_active = active;
        debug!(active, "activity changed");
        self.notify();
    }

    /// Change a numeric setting.
    ///
    /// The value is clamped, persisted and applied. Editing the duration of
    /// the phase that is running rescales the countdown immediately; cycle
    /// count edits apply from the next session. Editing anything after the
    /// session completed sets up a fresh, paused session.
    ///
    /// Returns the value actually stored.
    pub fn update_config(&mut self, field: ConfigField, value: u32) -> u32 {
        let stored = self.config.set(field, value);
        if stored != value {
            debug!(%field, requested = value, stored, "value clamped");
        }
        self.persist(field.key(), SettingValue::Int(stored));

        if self.state.is_complete() {
            self.state = SessionState::new(&self.config);
            self.state.is_active = false;
        } else {
            let drives_current_phase = match field {
                ConfigField::WorkDuration => !self.state.is_break_phase,
                ConfigField::BreakDuration => self.state.is_break_phase,
                ConfigField::TotalCycles => false,
            };
            if drives_current_phase {
                self.start_phase(stored);
            }
        }

        self.notify();
        stored
    }

    /// Toggle the sound or notification preference.
    pub fn set_preference(&mut self, pref: Preference, enabled: bool) {
        self.config.set_preference(pref, enabled);
        self.persist(pref.key(), SettingValue::Bool(enabled));

        match pref {
            Preference::Sound => self.state.sound_enabled = enabled,
            Preference::Notifications => self.state.notifications_enabled = enabled,
        }
        self.notify();
    }

    /// Throw away the current session and start a new one.
    pub fn restart(&mut self) {
        self.state = SessionState::new(&self.config);
        info!(cycles = self.state.rounds_left, "session restarted");
        self.notify();
    }

    fn persist(&mut self, key: &str, value: SettingValue) {
        if let Err(e) = self.store.set(key, value) {
            warn!(key, error = %e, "failed to persist setting");
        }
    }

    fn notify(&mut self) {
        for observer in &mut self.observers {
            observer(&self.state);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::error::PomoshError;
    use crate::timer::signal::MockSignalSink;
    use crate::timer::store::{MemoryStore, MockSettingsStore};

    fn store(work: u32, brk: u32, cycles: u32) -> MemoryStore {
        MemoryStore::default()
            .with("work_duration_seconds", SettingValue::Int(work))
            .with("break_duration_seconds", SettingValue::Int(brk))
            .with("total_cycles", SettingValue::Int(cycles))
    }

    fn timer(work: u32, brk: u32, cycles: u32) -> SessionTimer<MemoryStore> {
        SessionTimer::new(store(work, brk, cycles))
    }

    /// Tick until the session deactivates, returning the tick count and
    /// every transition seen.
    fn run_to_end(timer: &mut SessionTimer<MemoryStore>) -> (u32, Vec<Transition>) {
        let mut ticks = 0;
        let mut transitions = Vec::new();
        while timer.state().is_active {
            ticks += 1;
            transitions.extend(timer.tick());
            assert!(ticks < 100_000, "session never finished");
        }
        (ticks, transitions)
    }

    #[test]
    fn test_initial_state() {
        let timer = SessionTimer::new(MemoryStore::default());
        let state = timer.state();

        assert_eq!(state.remaining_seconds, 1200);
        assert_eq!(state.phase_duration_seconds, 1200);
        assert_eq!(state.rounds_left, 4);
        assert!(!state.is_break_phase);
        assert!(state.is_active);
    }

    #[test]
    fn test_tick_counts_down() {
        let mut timer = timer(1200, 600, 4);
        assert_eq!(timer.tick(), None);
        assert_eq!(timer.state().remaining_seconds, 1199);
        assert_eq!(timer.state().phase_duration_seconds, 1200);
    }

    #[test]
    fn test_work_duration_ticks_reach_break() {
        for work in [1200, 1500, 3600] {
            for brk in [300, 600] {
                let mut timer = timer(work, brk, 2);
                for _ in 0..work {
                    timer.tick();
                }
                assert!(timer.state().is_break_phase, "work={work} break={brk}");
                assert!(timer.state().is_active);
                assert_eq!(timer.state().phase_duration_seconds, brk);
                assert_eq!(timer.state().rounds_left, 1);
            }
        }
    }

    #[test]
    fn test_boundary_fires_when_one_second_remains() {
        let mut timer = timer(1200, 300, 2);
        for _ in 0..1198 {
            assert_eq!(timer.tick(), None);
        }
        assert_eq!(timer.state().remaining_seconds, 2);

        let transition = timer.tick();
        assert_eq!(
            transition,
            Some(Transition::PhaseEnded(PhaseEnd {
                ending: Phase::Work,
                next: Some(Phase::Break),
                rounds_left: 1,
            }))
        );
        assert_eq!(timer.state().remaining_seconds, 300);
    }

    #[test]
    fn test_single_cycle_never_breaks() {
        let mut timer = timer(1200, 600, 1);
        let mut saw_break = false;
        for _ in 0..1200 {
            timer.tick();
            saw_break |= timer.state().is_break_phase;
        }

        assert!(!saw_break);
        let state = timer.state();
        assert!(state.is_complete());
        assert!(!state.is_active);
        assert_eq!(state.remaining_seconds, 0);
        assert_eq!(state.rounds_left, 0);
    }

    #[test]
    fn test_final_cycle_zero_length_break() {
        let mut timer = timer(1200, 600, 1);
        for _ in 0..1198 {
            timer.tick();
        }

        let last = timer.tick();
        assert_eq!(
            last,
            Some(Transition::PhaseEnded(PhaseEnd {
                ending: Phase::Work,
                next: None,
                rounds_left: 0,
            }))
        );
        let state = timer.state();
        assert_eq!(state.remaining_seconds, 0);
        assert!(!state.is_break_phase);
        // The phase length is left as it was.
        assert_eq!(state.phase_duration_seconds, 1200);
        assert!(state.is_active);

        assert_eq!(timer.tick(), Some(Transition::Completed));
        assert!(!timer.state().is_active);
    }

    #[test]
    fn test_three_cycle_session() {
        let mut timer = timer(1200, 600, 3);
        let (ticks, transitions) = run_to_end(&mut timer);

        let phases: Vec<_> = transitions
            .iter()
            .map(|t| match t {
                Transition::PhaseEnded(end) => (Some(end.ending), end.next),
                Transition::Completed => (None, None),
            })
            .collect();
        assert_eq!(
            phases,
            vec![
                (Some(Phase::Work), Some(Phase::Break)),
                (Some(Phase::Break), Some(Phase::Work)),
                (Some(Phase::Work), Some(Phase::Break)),
                (Some(Phase::Break), Some(Phase::Work)),
                (Some(Phase::Work), None),
                (None, None),
            ]
        );

        let breaks = transitions
            .iter()
            .filter(|t| matches!(t, Transition::PhaseEnded(e) if e.next == Some(Phase::Break)))
            .count();
        assert_eq!(breaks, 2);

        // Each boundary lands on the tick that reaches one second.
        assert_eq!(ticks, 3 * 1199 + 2 * 599 + 1);
        assert!(ticks <= 4800);
        assert!(timer.state().is_complete());
    }

    #[test]
    fn test_complete_within_nominal_session_length() {
        let mut timer = timer(1200, 600, 3);
        for _ in 0..4800 {
            timer.tick();
        }
        assert!(timer.state().is_complete());
        assert!(!timer.state().is_active);
    }

    #[test]
    fn test_remaining_non_increasing_within_phase() {
        let mut timer = timer(1200, 300, 2);

        while timer.state().is_active {
            let before = timer.state().remaining_seconds;
            let transition = timer.tick();
            let state = timer.state();

            if transition.is_none() {
                assert!(state.remaining_seconds <= before);
            }
            assert!(state.remaining_seconds <= state.phase_duration_seconds);
        }
    }

    #[test]
    fn test_pause_preserves_time() {
        let mut timer = timer(1200, 600, 4);
        for _ in 0..100 {
            timer.tick();
        }
        let before = timer.state().clone();

        timer.set_active(false);
        for _ in 0..5000 {
            assert_eq!(timer.tick(), None);
        }
        assert_eq!(timer.state().remaining_seconds, before.remaining_seconds);
        assert_eq!(timer.state().phase_duration_seconds, before.phase_duration_seconds);

        timer.set_active(true);
        assert_eq!(timer.state(), &before);

        timer.tick();
        assert_eq!(timer.state().remaining_seconds, before.remaining_seconds - 1);
    }

    #[test]
    fn test_update_work_while_breaking_keeps_remaining() {
        let mut timer = timer(1200, 600, 3);
        for _ in 0..1250 {
            timer.tick();
        }
        assert!(timer.state().is_break_phase);
        let remaining = timer.state().remaining_seconds;

        let stored = timer.update_config(ConfigField::WorkDuration, 900);
        assert_eq!(stored, 1200);
        assert_eq!(timer.state().remaining_seconds, remaining);
        assert_eq!(timer.state().phase_duration_seconds, 600);

        let stored = timer.update_config(ConfigField::WorkDuration, 1800);
        assert_eq!(stored, 1800);
        assert_eq!(timer.state().remaining_seconds, remaining);

        // Takes effect at the next work phase.
        while timer.state().is_break_phase {
            timer.tick();
        }
        assert_eq!(timer.state().remaining_seconds, 1800);
        assert_eq!(timer.state().phase_duration_seconds, 1800);
    }

    #[test]
    fn test_update_running_phase_duration_rescales() {
        let mut timer = timer(1200, 600, 3);
        for _ in 0..10 {
            timer.tick();
        }

        timer.update_config(ConfigField::WorkDuration, 2400);
        assert_eq!(timer.state().remaining_seconds, 2400);
        assert_eq!(timer.state().phase_duration_seconds, 2400);

        // Break edits do not touch a running work phase.
        timer.update_config(ConfigField::BreakDuration, 300);
        assert_eq!(timer.state().remaining_seconds, 2400);
    }

    #[test]
    fn test_update_cycles_applies_next_session() {
        let mut timer = timer(1200, 600, 3);
        timer.update_config(ConfigField::TotalCycles, 8);
        assert_eq!(timer.state().rounds_left, 3);
        assert_eq!(timer.config().total_cycles, 8);

        timer.restart();
        assert_eq!(timer.state().rounds_left, 8);
    }

    #[test]
    fn test_update_clamps_and_persists() {
        let mut timer = timer(1200, 600, 3);

        assert_eq!(timer.update_config(ConfigField::WorkDuration, 10), 1200);
        assert_eq!(timer.update_config(ConfigField::BreakDuration, 9999), 600);
        assert_eq!(timer.update_config(ConfigField::TotalCycles, 0), 1);

        let store = timer.store();
        assert_eq!(store.get("work_duration_seconds"), Some(SettingValue::Int(1200)));
        assert_eq!(store.get("break_duration_seconds"), Some(SettingValue::Int(600)));
        assert_eq!(store.get("total_cycles"), Some(SettingValue::Int(1)));
    }

    #[test]
    fn test_update_after_complete_reinitializes() {
        let mut timer = timer(1200, 600, 1);
        run_to_end(&mut timer);
        assert!(timer.state().is_complete());

        timer.update_config(ConfigField::TotalCycles, 2);
        let state = timer.state();
        assert!(!state.is_complete());
        assert!(!state.is_active);
        assert_eq!(state.rounds_left, 2);
        assert_eq!(state.remaining_seconds, 1200);
    }

    #[test]
    fn test_tick_after_completion_stays_complete() {
        let mut timer = timer(1200, 600, 1);
        run_to_end(&mut timer);

        timer.set_active(true);
        assert_eq!(timer.tick(), Some(Transition::Completed));
        assert!(!timer.state().is_active);
        assert!(timer.state().is_complete());
    }

    #[test]
    fn test_signals_respect_preferences() {
        let mut sound = MockSignalSink::new();
        sound.expect_emit().times(3).returning(|_| Ok(()));
        let mut alert = MockSignalSink::new();
        alert.expect_emit().never();

        let mut timer = SessionTimer::new(store(1200, 300, 2))
            .with_sound(sound)
            .with_alert(alert);
        timer.set_preference(Preference::Notifications, false);

        while timer.state().is_active {
            timer.tick();
        }
        assert!(timer.state().is_complete());
    }

    #[test]
    fn test_signal_carries_ending_phase() {
        let mut alert = MockSignalSink::new();
        alert
            .expect_emit()
            .withf(|e| e.ending == Phase::Work && e.next == Some(Phase::Break))
            .times(1)
            .returning(|_| Ok(()));

        let mut timer = SessionTimer::new(store(1200, 300, 3)).with_alert(alert);
        timer.set_preference(Preference::Sound, false);
        for _ in 0..1199 {
            timer.tick();
        }
        assert!(timer.state().is_break_phase);
    }

    #[test]
    fn test_sink_failure_does_not_affect_state() {
        let mut sound = MockSignalSink::new();
        sound
            .expect_emit()
            .returning(|_| Err(PomoshError::Notification("no speaker".to_string())));

        let mut timer = SessionTimer::new(store(1200, 300, 2)).with_sound(sound);
        for _ in 0..1199 {
            timer.tick();
        }
        assert!(timer.state().is_break_phase);
        assert_eq!(timer.state().remaining_seconds, 300);
    }

    #[test]
    fn test_store_failure_does_not_affect_state() {
        let mut store = MockSettingsStore::new();
        store.expect_get().returning(|_| None);
        store
            .expect_set()
            .returning(|_, _| Err(PomoshError::Config("read-only".to_string())));

        let mut timer = SessionTimer::new(store);
        let stored = timer.update_config(ConfigField::WorkDuration, 1500);
        assert_eq!(stored, 1500);
        assert_eq!(timer.state().remaining_seconds, 1500);
        assert_eq!(timer.config().work_duration_seconds, 1500);
    }

    #[test]
    fn test_preferences_persist() {
        let mut timer = timer(1200, 600, 3);
        timer.set_preference(Preference::Sound, false);

        assert!(!timer.state().sound_enabled);
        assert!(!timer.config().sound_enabled);
        assert_eq!(timer.store().get("sound_enabled"), Some(SettingValue::Bool(false)));
    }

    #[test]
    fn test_observers_see_every_change() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut timer = timer(1200, 600, 3);
        timer.on_change(move |state| sink.borrow_mut().push(state.remaining_seconds));

        timer.tick();
        timer.set_active(false);
        timer.tick();
        timer.set_active(true);
        timer.update_config(ConfigField::WorkDuration, 1500);

        assert_eq!(*seen.borrow(), vec![1199, 1199, 1199, 1199, 1500]);
    }
}
