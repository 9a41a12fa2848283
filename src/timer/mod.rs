//! Work/break session timer.
//!
//! - Session state machine driven by a one-second tick
//! - Range-checked configuration backed by an injected settings store
//! - Phase-end signals on sound and alert channels
//! - Headless simulation of a full session
//! - Clock/duration formatting helpers

pub mod config;
pub mod format;
pub mod session;
pub mod signal;
pub mod simulation;
pub mod state;
pub mod store;

pub use config::{ConfigField, Preference, SessionConfig};
pub use format::{format_clock, format_duration, parse_duration, parse_duration_seconds};
pub use session::{Observer, SessionTimer, Transition};
pub use signal::{DesktopNotifier, PhaseEnd, SignalSink, Silent, TerminalBell};
pub use simulation::{simulate, SimulationReport, TimelineEntry};
pub use state::{Phase, SessionState, Status};
pub use store::{MemoryStore, SettingValue, SettingsStore};
