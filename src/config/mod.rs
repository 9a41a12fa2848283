//! Configuration management for pomosh.
//!
//! This module handles loading and saving configuration from `~/.pomosh/`.

mod paths;
mod settings;
mod store;

pub use paths::{Paths, HOME_ENV};
pub use settings::{ColorSetting, Config, GeneralConfig};
pub use store::FileStore;
