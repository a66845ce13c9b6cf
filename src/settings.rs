use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{theme_by_name, Theme, THEMES};

const APP_DIR_NAME: &str = "snake-arcade";
const SETTINGS_FILE_NAME: &str = "settings.json";

/// Persisted presentation settings. Scores are deliberately not stored.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub theme: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: THEMES[0].name.to_owned(),
        }
    }
}

impl Settings {
    /// Resolves the stored theme name, falling back to the default theme
    /// when the file names one that no longer exists.
    #[must_use]
    pub fn resolve_theme(&self) -> &'static Theme {
        theme_by_name(&self.theme).unwrap_or(&THEMES[0])
    }
}

/// Errors surfaced when the settings file exists but cannot be used.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to access settings file: {0}")]
    Io(#[from] io::Error),
    #[error("settings file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Returns the platform-correct settings file path.
#[must_use]
pub fn settings_path() -> PathBuf {
    let mut base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(SETTINGS_FILE_NAME);
    base
}

/// Loads settings from disk.
///
/// Returns defaults when the file does not yet exist (first run). Returns
/// `Err` when the file exists but cannot be read or parsed, so the caller
/// can surface a warning before entering raw terminal mode.
pub fn load_settings() -> Result<Settings, SettingsError> {
    load_settings_from_path(&settings_path())
}

/// Saves settings to disk, creating parent directories when needed.
pub fn save_settings(settings: &Settings) -> Result<(), SettingsError> {
    save_settings_to_path(&settings_path(), settings)
}

fn load_settings_from_path(path: &Path) -> Result<Settings, SettingsError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Settings::default()),
        Err(e) => return Err(e.into()),
    };

    Ok(serde_json::from_str(&raw)?)
}

fn save_settings_to_path(path: &Path, settings: &Settings) -> Result<(), SettingsError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::{load_settings_from_path, save_settings_to_path, Settings, SettingsError};

    #[test]
    fn settings_round_trip() {
        let path = unique_test_path("round_trip");
        let settings = Settings {
            theme: "Neon".to_owned(),
        };

        save_settings_to_path(&path, &settings).expect("settings save should succeed");
        let loaded = load_settings_from_path(&path).expect("load should succeed");

        assert_eq!(loaded, settings);
        cleanup_test_path(&path);
    }

    #[test]
    fn missing_settings_file_returns_defaults() {
        let path = unique_test_path("missing");
        // Deliberately do not create the file.
        let loaded = load_settings_from_path(&path).expect("missing file should return defaults");
        assert_eq!(loaded, Settings::default());
    }

    #[test]
    fn malformed_settings_file_returns_parse_error() {
        let path = unique_test_path("malformed");
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("test parent directory should be creatable");
        }
        fs::write(&path, "not-json").expect("test file write should succeed");

        assert!(matches!(
            load_settings_from_path(&path),
            Err(SettingsError::Parse(_))
        ));

        cleanup_test_path(&path);
    }

    #[test]
    fn unknown_theme_name_resolves_to_default() {
        let settings = Settings {
            theme: "does-not-exist".to_owned(),
        };

        assert_eq!(settings.resolve_theme().name, "Garden");
    }

    fn unique_test_path(label: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after epoch")
            .as_nanos();

        std::env::temp_dir()
            .join("snake-arcade-settings-tests")
            .join(format!("{label}-{nanos}.json"))
    }

    fn cleanup_test_path(path: &PathBuf) {
        let _ = fs::remove_file(path);
        if let Some(parent) = path.parent() {
            let _ = fs::remove_dir(parent);
        }
    }
}
