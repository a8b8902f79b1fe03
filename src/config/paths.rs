//! Path management for backup-dash
//!
//! ## Path Resolution Order
//!
//! 1. `BACKUP_DASH_DIR` environment variable (if set)
//! 2. The platform configuration directory (`~/.config/backup-dash` on Linux)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::DashError;

/// Environment variable overriding the base directory
pub const DIR_ENV_VAR: &str = "BACKUP_DASH_DIR";

/// Manages all paths used by backup-dash
#[derive(Debug, Clone)]
pub struct DashPaths {
    /// Base directory for configuration and logs
    base_dir: PathBuf,
}

impl DashPaths {
    /// Create a new DashPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no platform configuration directory can be found.
    pub fn new() -> Result<Self, DashError> {
        let base_dir = if let Ok(custom) = std::env::var(DIR_ENV_VAR) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create DashPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the log directory
    pub fn log_dir(&self) -> PathBuf {
        self.base_dir.join("logs")
    }

    /// Ensure the base and log directories exist
    pub fn ensure_directories(&self) -> Result<(), DashError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| DashError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.log_dir())
            .map_err(|e| DashError::Io(format!("Failed to create log directory: {}", e)))?;

        Ok(())
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, DashError> {
    ProjectDirs::from("", "", "backup-dash")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| DashError::Config("Could not determine configuration directory".into()))
}
