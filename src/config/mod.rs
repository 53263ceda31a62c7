// SPDX-License-Identifier: MPL-2.0
//! This module handles the toast store configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use toastline::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.max_visible = Some(5);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_dir = PathBuf::from("./temp_config_dir");
//! std::fs::create_dir_all(&temp_dir).unwrap();
//! let temp_file = temp_dir.join("test_settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded_config = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded_config.max_visible, Some(5));
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

mod defaults;

pub use defaults::*;

use crate::domain::toast::{DefaultDuration, GraceDelay, HistoryCapacity, MaxVisible, TickInterval};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "Toastline";

/// Persisted toast store settings.
///
/// Every field is optional so that partial files stay valid; missing values
/// fall back to the `DEFAULT_*` constants re-exported here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub max_visible: Option<usize>,
    #[serde(default)]
    pub default_duration_ms: Option<u64>,
    #[serde(default)]
    pub grace_delay_ms: Option<u64>,
    #[serde(default)]
    pub history_capacity: Option<usize>,
    #[serde(default)]
    pub tick_interval_ms: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_visible: Some(DEFAULT_MAX_VISIBLE),
            default_duration_ms: Some(DEFAULT_DURATION_MS),
            grace_delay_ms: Some(DEFAULT_GRACE_DELAY_MS),
            history_capacity: Some(DEFAULT_HISTORY_CAPACITY),
            tick_interval_ms: Some(DEFAULT_TICK_INTERVAL_MS),
        }
    }
}

impl Config {
    /// Returns the registry bound, clamped to its valid range.
    #[must_use]
    pub fn max_visible(&self) -> MaxVisible {
        self.max_visible.map(MaxVisible::new).unwrap_or_default()
    }

    /// Returns the fallback time-to-live, clamped to its valid range.
    #[must_use]
    pub fn default_duration(&self) -> DefaultDuration {
        self.default_duration_ms
            .map(DefaultDuration::new)
            .unwrap_or_default()
    }

    /// Returns the exit grace delay, clamped to its valid range.
    #[must_use]
    pub fn grace_delay(&self) -> GraceDelay {
        self.grace_delay_ms.map(GraceDelay::new).unwrap_or_default()
    }

    /// Returns the history capacity, clamped to its valid range.
    #[must_use]
    pub fn history_capacity(&self) -> HistoryCapacity {
        self.history_capacity
            .map(HistoryCapacity::new)
            .unwrap_or_default()
    }

    /// Returns the driver tick interval, clamped to its valid range.
    #[must_use]
    pub fn tick_interval(&self) -> TickInterval {
        self.tick_interval_ms
            .map(TickInterval::new)
            .unwrap_or_default()
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), "invalid settings file, using defaults: {err}");
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
