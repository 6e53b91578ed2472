//! User settings for finsight
//!
//! Small, optional preferences persisted as JSON. A missing settings file
//! means defaults; nothing is written unless the user saves.

use serde::{Deserialize, Serialize};

use super::paths::FinsightPaths;
use crate::error::FinsightError;

/// User settings for finsight
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Primary date format expected in the `Date` column (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Number of rows shown in the dashboard data preview
    #[serde(default = "default_preview_rows")]
    pub preview_rows: usize,
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_preview_rows() -> usize {
    10
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            preview_rows: default_preview_rows(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if no file exists
    pub fn load_or_create(paths: &FinsightPaths) -> Result<Self, FinsightError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            log::debug!("loading settings from {}", settings_path.display());
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| FinsightError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| FinsightError::Config(format!("Failed to parse settings file: {}", e)))?;

            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FinsightPaths) -> Result<(), FinsightError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| FinsightError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| FinsightError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.date_format, "%Y-%m-%d");
        assert_eq!(settings.preview_rows, 10);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinsightPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinsightPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            date_format: "%m/%d/%Y".to_string(),
            preview_rows: 25,
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinsightPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, FinsightError::Config(_)));
    }
}
