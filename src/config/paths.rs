//! Path management for finsight
//!
//! Resolves where the settings file lives.
//!
//! ## Path Resolution Order
//!
//! 1. `FINSIGHT_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/finsight` or `~/.config/finsight`
//! 3. Windows: `%APPDATA%\finsight`

use std::path::PathBuf;

use crate::error::FinsightError;

/// Manages all paths used by finsight
#[derive(Debug, Clone)]
pub struct FinsightPaths {
    base_dir: PathBuf,
}

impl FinsightPaths {
    /// Create a new FinsightPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, FinsightError> {
        let base_dir = if let Ok(custom) = std::env::var("FINSIGHT_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create FinsightPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/finsight/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), FinsightError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FinsightError::Io(format!("Failed to create base directory: {}", e)))?;
        Ok(())
    }
}

/// Resolve the default config directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, FinsightError> {
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| {
            std::env::var("HOME")
                .map(|home| PathBuf::from(home).join(".config"))
                .map_err(|_| FinsightError::Config("HOME environment variable not set".into()))
        })?;
    Ok(config_base.join("finsight"))
}

/// Resolve the default config directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, FinsightError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| FinsightError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("finsight"))
}
