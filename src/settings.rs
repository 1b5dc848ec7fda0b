//! # Persisted user settings.
//!
//! [`Settings`] bundles the last-used run parameters with the presentation
//! layer's theme flag. [`SettingsStore`] is an injected dependency of the
//! presentation layer — the engine and controller never touch it — with a
//! TOML file implementation in [`TomlStore`].
//!
//! Delays are stored as integer milliseconds so the file stays hand-editable:
//!
//! ```toml
//! payload = "hi"
//! iteration_delay_ms = 2000
//! start_delay_ms = 5000
//! repeat_count = 10
//! dark_theme = true
//! ```

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;
use crate::params::RunParams;

/// User settings persisted between sessions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Last-used payload text.
    pub payload: String,
    /// Pause between repetitions, in milliseconds.
    pub iteration_delay_ms: u64,
    /// Pause before the first repetition, in milliseconds.
    pub start_delay_ms: u64,
    /// Repeat count; `0` means unbounded.
    pub repeat_count: u32,
    /// Whether the dark theme is active. Opaque to this crate.
    pub dark_theme: bool,
}

impl Default for Settings {
    /// Empty payload, 1s iteration delay, no start delay, unbounded, light
    /// theme.
    fn default() -> Self {
        Self {
            payload: String::new(),
            iteration_delay_ms: 1_000,
            start_delay_ms: 0,
            repeat_count: 0,
            dark_theme: false,
        }
    }
}

impl Settings {
    /// Builds settings from run parameters plus the theme flag.
    pub fn from_params(params: &RunParams, dark_theme: bool) -> Self {
        Self {
            payload: params.payload.clone(),
            iteration_delay_ms: params.iteration_delay.as_millis() as u64,
            start_delay_ms: params.start_delay.as_millis() as u64,
            repeat_count: params.repeat_count,
            dark_theme,
        }
    }

    /// Converts back to run parameters.
    pub fn params(&self) -> RunParams {
        RunParams {
            payload: self.payload.clone(),
            iteration_delay: Duration::from_millis(self.iteration_delay_ms),
            start_delay: Duration::from_millis(self.start_delay_ms),
            repeat_count: self.repeat_count,
        }
    }
}

/// Settings persistence, injected into the presentation layer.
pub trait SettingsStore: Send + Sync {
    /// Loads the persisted settings.
    fn load(&self) -> Result<Settings, SettingsError>;

    /// Persists the settings.
    fn save(&self, settings: &Settings) -> Result<(), SettingsError>;
}

/// File-backed [`SettingsStore`] using TOML.
#[derive(Clone, Debug)]
pub struct TomlStore {
    path: PathBuf,
}

impl TomlStore {
    /// Creates a store reading and writing the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Loads settings, falling back to defaults when the file does not exist
    /// yet. Parse errors still surface — a corrupt file should not be
    /// silently replaced.
    pub fn load_or_default(&self) -> Result<Settings, SettingsError> {
        if !self.path.exists() {
            return Ok(Settings::default());
        }
        self.load()
    }
}

impl SettingsStore for TomlStore {
    fn load(&self) -> Result<Settings, SettingsError> {
        let raw = fs::read_to_string(&self.path)?;
        Ok(toml::from_str(&raw)?)
    }

    fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let raw = toml::to_string_pretty(settings)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_reproduces_every_field() {
        let dir = tempfile::tempdir().unwrap();
        let store = TomlStore::new(dir.path().join("settings.toml"));

        let params = RunParams::new("hi there", Duration::from_millis(2_500))
            .with_start_delay(Duration::from_secs(5))
            .with_repeat_count(42);
        let saved = Settings::from_params(&params, true);
        store.save(&saved).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, saved);
        assert_eq!(loaded.params(), params);
        assert!(loaded.dark_theme);
    }

    #[test]
    fn test_missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = TomlStore::new(dir.path().join("nope.toml"));

        assert!(store.load().is_err());
        assert_eq!(store.load_or_default().unwrap(), Settings::default());
    }

    #[test]
    fn test_corrupt_file_is_not_silently_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "payload = [not toml").unwrap();

        let store = TomlStore::new(path);
        assert!(matches!(
            store.load_or_default(),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = TomlStore::new(dir.path().join("nested/deeper/settings.toml"));
        store.save(&Settings::default()).unwrap();
        assert_eq!(store.load().unwrap(), Settings::default());
    }
}
