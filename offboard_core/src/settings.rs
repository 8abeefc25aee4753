//! # Application Settings
//!
//! Settings are stored as human-readable JSON. A missing file means "use the
//! defaults"; saves go through a `.tmp` file and a rename so a crash never
//! leaves a half-written settings file behind.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::directory::ViewMode;
use crate::errors::{OffboardError, OffboardResult};

/// Global application settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Delay before returning to the directory after a wizard submission
    pub redirect_delay_ms: u64,

    /// Initial directory render mode
    pub default_view_mode: ViewMode,

    /// Author name stamped on new case comments
    pub comment_author: String,

    /// Role stamped on new case comments
    pub comment_role: String,

    /// Where generated certificates are written
    pub download_dir: PathBuf,

    /// Default tracing filter when RUST_LOG is not set
    pub log_level: String,
}

impl Settings {
    /// Redirect delay as a `Duration`
    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            redirect_delay_ms: 2000,
            default_view_mode: ViewMode::Table,
            comment_author: "You".to_string(),
            comment_role: "HR Manager".to_string(),
            download_dir: PathBuf::from("."),
            log_level: "info".to_string(),
        }
    }
}

/// Load settings from a JSON file, falling back to defaults when it does not exist.
pub fn load_settings(path: &Path) -> OffboardResult<Settings> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "settings file absent, using defaults");
        return Ok(Settings::default());
    }

    let json = fs::read_to_string(path)
        .map_err(|e| OffboardError::file_error("read", path.display().to_string(), e.to_string()))?;
    let settings = serde_json::from_str(&json)?;
    tracing::debug!(path = %path.display(), "settings loaded");
    Ok(settings)
}

/// Save settings with an atomic write (temp file, then rename).
pub fn save_settings(settings: &Settings, path: &Path) -> OffboardResult<()> {
    let json = serde_json::to_string_pretty(settings)?;
    let tmp_path = path.with_extension("json.tmp");

    fs::write(&tmp_path, json.as_bytes())
        .map_err(|e| OffboardError::file_error("write temp", tmp_path.display().to_string(), e.to_string()))?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        OffboardError::file_error("rename", path.display().to_string(), e.to_string())
    })?;

    tracing::info!(path = %path.display(), "settings saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_settings(&dir.path().join("nope.json")).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.redirect_delay(), Duration::from_secs(2));
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let settings = Settings {
            redirect_delay_ms: 500,
            default_view_mode: ViewMode::Card,
            comment_author: "Admin".to_string(),
            ..Settings::default()
        };
        save_settings(&settings, &path).unwrap();
        assert!(!dir.path().join("settings.json.tmp").exists());
        assert_eq!(load_settings(&path).unwrap(), settings);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "default_view_mode": "card" }"#).unwrap();
        let settings = load_settings(&path).unwrap();
        assert_eq!(settings.default_view_mode, ViewMode::Card);
        assert_eq!(settings.comment_author, "You");
    }

    #[test]
    fn test_malformed_file_is_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();
        let err = load_settings(&path).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }
}
