//! Command-line interface for pomosh.

pub mod args;
pub mod commands;
