//! Command-line argument definitions.

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

/// pomosh - a Pomodoro cycle timer for the terminal
///
/// Alternates work and break phases for a configurable number of cycles.
/// The last cycle skips its break.
///
/// # Examples
///
///   pomosh start                      Run the timer
///   pomosh config set work 25m        Work phases of 25 minutes
///   pomosh simulate --cycles 3        Preview a session's timeline
#[derive(Debug, Parser)]
#[command(name = "pomosh", version, about, long_about = None)]
pub struct Cli {
    /// Output format (defaults to the `general.default_output` setting)
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable, colored output.
    #[default]
    Pretty,
    /// JSON for scripting.
    Json,
}

/// Top-level commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the timer in the terminal
    ///
    /// Keys:
    ///   space   pause / resume
    ///   w / W   working time -/+ 5 minutes
    ///   b / B   break time -/+ 1 minute
    ///   c / C   cycles -/+ 1
    ///   s       toggle sound
    ///   n       toggle notifications
    ///   r       restart the session
    ///   q       quit
    ///
    /// Losing terminal focus pauses the timer; regaining it resumes.
    #[command(alias = "run")]
    Start,

    /// Run a session headlessly and report its timeline
    ///
    /// Ticks the timer as fast as possible with sound and alerts muted.
    /// Durations accept forms like 25m, 1h, 90s or a bare number of minutes,
    /// and are clamped to the same ranges as the settings.
    ///
    /// # Examples
    ///
    ///   pomosh simulate
    ///   pomosh simulate --work 25m --break 5m --cycles 4
    ///   pomosh simulate --cycles 1 -o json
    #[command(alias = "sim")]
    Simulate(SimulateArgs),

    /// Show or change persisted settings
    Config(ConfigArgs),

    /// Generate shell completions
    ///
    /// # Examples
    ///
    ///   pomosh completions zsh > ~/.zsh/completions/_pomosh
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for `pomosh simulate`.
#[derive(Debug, Args)]
pub struct SimulateArgs {
    /// Working time per cycle (overrides the saved setting)
    #[arg(short, long)]
    pub work: Option<String>,

    /// Break time between cycles (overrides the saved setting)
    #[arg(short, long = "break")]
    pub r#break: Option<String>,

    /// Number of cycles (overrides the saved setting)
    #[arg(short, long)]
    pub cycles: Option<u32>,

    /// Stop after this many ticks even if the session is not complete
    #[arg(long, default_value_t = 100_000)]
    pub max_ticks: u32,
}

/// Arguments for `pomosh config`.
#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Settings subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show current settings
    Show,

    /// Change a setting
    ///
    /// Keys: work, break, cycles, sound, notifications.
    /// Out-of-range values are clamped.
    ///
    /// # Examples
    ///
    ///   pomosh config set work 30m
    ///   pomosh config set break 300s
    ///   pomosh config set cycles 6
    ///   pomosh config set sound off
    Set {
        /// Setting name
        key: String,
        /// New value
        value: String,
    },

    /// Restore default settings
    Reset,

    /// Print the config file location
    Path,
}
