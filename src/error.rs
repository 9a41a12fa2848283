//! Error types for pomosh.

use thiserror::Error;

/// Errors surfaced by the pomosh CLI and its hosts.
///
/// The session timer itself never fails; these cover the surfaces around it
/// (settings files, terminal handling, argument validation).
#[derive(Debug, Error)]
pub enum PomoshError {
    /// Configuration could not be read, parsed or written.
    #[error("configuration error: {0}")]
    Config(String),

    /// A setting key or value supplied by the user is not valid.
    #[error("invalid setting: {0}")]
    InvalidSetting(String),

    /// Terminal setup, drawing or event handling failed.
    #[error("terminal error: {0}")]
    Terminal(String),

    /// A desktop notification could not be delivered.
    #[error("notification error: {0}")]
    Notification(String),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
