//! Command implementations for pomosh.
//!
//! Each command returns the text to print; `main` handles printing and
//! error reporting.

mod completions;
mod config;
mod simulate;

pub use completions::completions;
pub use config::{config, parse_setting, SettingUpdate};
pub use simulate::simulate;
