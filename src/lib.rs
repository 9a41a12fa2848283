//! pomosh - A Pomodoro-style cycle timer
//!
//! This crate provides a work/break session timer state machine together with
//! a terminal UI, a headless simulator and a settings CLI built around it.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod timer;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::PomoshError;
pub use timer::{SessionConfig, SessionState, SessionTimer};
