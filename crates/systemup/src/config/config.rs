//! Configuration for systemup.
//!
//! An optional TOML file in the per-user config directory. The file is only
//! ever read; a missing file means defaults.

use crate::{
    AppError, AppResult,
    config::{BehaviourConfig, LoggingConfig, MIN_REFRESH_INTERVAL_MS},
};

use std::{fs, panic::Location, path::PathBuf, time::Duration};

use directories::ProjectDirs;
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Main configuration struct.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Tray behaviour settings.
    #[serde(default)]
    pub behaviour: BehaviourConfig,
    /// Log output settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from disk, falling back to defaults if absent.
    ///
    /// Runs before logging is set up, so nothing is logged here; the caller
    /// reports a returned error once the subscriber exists.
    #[track_caller]
    pub fn load() -> AppResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&config_path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to read config {:?}: {}", config_path, e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Self::from_toml_str(&contents)
    }

    /// Parse configuration from TOML text.
    #[track_caller]
    pub fn from_toml_str(contents: &str) -> AppResult<Self> {
        toml::from_str(contents).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to parse config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Tooltip refresh period, never shorter than the minimum.
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(
            self.behaviour
                .refresh_interval_ms
                .max(MIN_REFRESH_INTERVAL_MS),
        )
    }

    /// Directory for rolling log files.
    #[track_caller]
    pub fn log_dir() -> AppResult<PathBuf> {
        Ok(Self::project_dirs()?.data_local_dir().join("logs"))
    }

    #[track_caller]
    fn config_path() -> AppResult<PathBuf> {
        Ok(Self::project_dirs()?.config_dir().join("config.toml"))
    }

    #[track_caller]
    fn project_dirs() -> AppResult<ProjectDirs> {
        ProjectDirs::from("com", "systemup", "SystemUP").ok_or_else(|| AppError::ConfigError {
            reason: "Failed to get project directories".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
