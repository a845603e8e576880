//! Path management for CCRM
//!
//! Provides XDG-compliant path resolution for configuration, data, and backups.
//!
//! ## Path Resolution Order
//!
//! 1. `CCRM_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/ccrm` or `~/.config/ccrm`
//! 3. Windows: `%APPDATA%\ccrm`

use std::path::PathBuf;

use crate::error::CcrmError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "CCRM_DATA_DIR";

/// Manages all paths used by CCRM
#[derive(Debug, Clone)]
pub struct CcrmPaths {
    base_dir: PathBuf,
}

impl CcrmPaths {
    /// Resolve the base directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, CcrmError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create CcrmPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Directory holding the CSV data files (base/data)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Directory holding named backups (base/backups)
    pub fn backup_dir(&self) -> PathBuf {
        self.base_dir.join("backups")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Path of a file inside the data directory
    pub fn data_file(&self, file_name: &str) -> PathBuf {
        self.data_dir().join(file_name)
    }

    /// Ensure all required directories exist
    ///
    /// Creates the base, data and backup directories.
    pub fn ensure_directories(&self) -> Result<(), CcrmError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| CcrmError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| CcrmError::Io(format!("Failed to create data directory: {}", e)))?;

        std::fs::create_dir_all(self.backup_dir())
            .map_err(|e| CcrmError::Io(format!("Failed to create backup directory: {}", e)))?;

        Ok(())
    }

    /// Check if CCRM has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, CcrmError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => {
            let home = std::env::var("HOME")
                .map_err(|_| CcrmError::Config("HOME environment variable not set".into()))?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("ccrm"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, CcrmError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| CcrmError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("ccrm"))
}
