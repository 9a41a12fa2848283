//! Settings store backed by the `timer` section of the config file.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::Config;
use crate::error::PomoshError;
use crate::timer::{ConfigField, Preference, SettingValue, SettingsStore};

/// A [`SettingsStore`] that rewrites `config.yaml` on every write.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    config: Config,
}

impl FileStore {
    /// Open the store at `path`. A missing file starts from defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed.
    pub fn open(path: &Path) -> Result<Self, PomoshError> {
        Ok(Self {
            path: path.to_path_buf(),
            config: Config::load_from_path(path)?,
        })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The full configuration as currently held.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }
}

impl SettingsStore for FileStore {
    fn get(&self, key: &str) -> Option<SettingValue> {
        let timer = &self.config.timer;
        if let Some(field) = ConfigField::ALL.into_iter().find(|f| f.key() == key) {
            return Some(SettingValue::Int(timer.get(field)));
        }
        Preference::ALL
            .into_iter()
            .find(|p| p.key() == key)
            .map(|p| SettingValue::Bool(timer.preference(p)))
    }

    fn set(&mut self, key: &str, value: SettingValue) -> Result<(), PomoshError> {
        let mut config = self.config.clone();
        let timer = &mut config.timer;

        if let Some(field) = ConfigField::ALL.into_iter().find(|f| f.key() == key) {
            let v = value
                .as_u32()
                .ok_or_else(|| PomoshError::InvalidSetting(format!("{key} expects a number")))?;
            timer.set(field, v);
        } else if let Some(pref) = Preference::ALL.into_iter().find(|p| p.key() == key) {
            let v = value
                .as_bool()
                .ok_or_else(|| PomoshError::InvalidSetting(format!("{key} expects true or false")))?;
            timer.set_preference(pref, v);
        } else {
            return Err(PomoshError::InvalidSetting(format!("unknown key '{key}'")));
        }

        // Only keep the change once it is on disk.
        config.save_to_path(&self.path)?;
        self.config = config;
        debug!(key, %value, path = %self.path.display(), "setting saved");
        Ok(())
    }
}
