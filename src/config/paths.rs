//! Path resolution for pomosh configuration and data files.
//!
//! All pomosh data is stored in `~/.pomosh/` (or `$POMOSH_HOME`):
//! - `config.yaml` - Settings file
//! - `pomosh.log` - Log file written while the terminal UI is running

use std::path::PathBuf;

use crate::error::PomoshError;

/// Environment variable overriding the data directory.
pub const HOME_ENV: &str = "POMOSH_HOME";

/// Paths to pomosh configuration and data files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    /// Root directory: `~/.pomosh/`
    pub root: PathBuf,
    /// Config file: `~/.pomosh/config.yaml`
    pub config_file: PathBuf,
    /// Log file: `~/.pomosh/pomosh.log`
    pub log_file: PathBuf,
}

impl Paths {
    /// Resolve paths from `$POMOSH_HOME`, falling back to `$HOME/.pomosh`.
    ///
    /// # Errors
    ///
    /// Returns an error if neither variable is set.
    pub fn new() -> Result<Self, PomoshError> {
        if let Some(root) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self::with_root(PathBuf::from(root)));
        }

        let home = std::env::var_os("HOME").ok_or_else(|| {
            PomoshError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".pomosh")))
    }

    /// Create paths with a custom root directory.
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            log_file: root.join("pomosh.log"),
            root,
        }
    }

    /// Ensure the root directory exists.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), PomoshError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                PomoshError::Config(format!(
                    "Failed to create directory {}: {e}",
                    self.root.display()
                ))
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_paths_with_root() {
        let root = PathBuf::from("/tmp/test-pomosh");
        let paths = Paths::with_root(root.clone());

        assert_eq!(paths.root, root);
        assert_eq!(paths.config_file, root.join("config.yaml"));
        assert_eq!(paths.log_file, root.join("pomosh.log"));
    }

    #[test]
    fn test_ensure_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().join("nested").join("pomosh"));

        paths.ensure_dirs().unwrap();
        assert!(paths.root.is_dir());

        // Second call is a no-op.
        paths.ensure_dirs().unwrap();
    }
}
