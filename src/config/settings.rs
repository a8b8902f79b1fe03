//! User settings for backup-dash
//!
//! Holds the report location and fetch limits. Every field has a default so a
//! partial `config.json` is valid.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::paths::DashPaths;
use crate::error::DashError;

/// User settings for backup-dash
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Where daily reports are read from: an `http(s)://` URL or a directory.
    /// `{date}` is replaced with the ISO date; otherwise `rapport_<date>.json`
    /// is appended.
    #[serde(default = "default_source")]
    pub source: String,

    /// Upper bound on a single report fetch, in seconds
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,

    /// Largest accepted report body, in bytes
    #[serde(default = "default_max_report_bytes")]
    pub max_report_bytes: usize,

    /// TUI refresh interval, in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_schema_version() -> u32 {
    1
}

fn default_source() -> String {
    "./rapports".to_string()
}

fn default_fetch_timeout_secs() -> u64 {
    10
}

fn default_max_report_bytes() -> usize {
    8 * 1024 * 1024
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            source: default_source(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
            max_report_bytes: default_max_report_bytes(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Settings {
    /// Fetch timeout as a Duration
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs.max(1))
    }

    /// Tick rate as a Duration
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(10))
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &DashPaths) -> Result<Self, DashError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| DashError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| DashError::Config(format!("Failed to parse settings file: {}", e)))?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &DashPaths) -> Result<(), DashError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| DashError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| DashError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
