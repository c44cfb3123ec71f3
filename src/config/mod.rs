// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration: tuning values for the
//! interaction state machines, loaded from and saved to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use folio_sync::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Slow the cursor down a little
//! config.smoothing_factor = Some(0.1);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_file = PathBuf::from("./temp_config_dir/settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded.smoothing_factor, Some(0.1));
//! ```

pub mod defaults;

use crate::domain::newtypes::{BufferCapacity, HideDelay, SmoothingFactor, VisibilityThreshold};
use crate::domain::ids::SectionId;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub use defaults::*;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "FolioSync";

/// User-tunable settings. Every field is optional; missing values fall back
/// to the constants in [`defaults`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub smoothing_factor: Option<f32>,
    #[serde(default)]
    pub section_threshold: Option<f32>,
    #[serde(default)]
    pub initial_section: Option<String>,
    #[serde(default)]
    pub overlay_hide_delay_ms: Option<u64>,
    #[serde(default)]
    pub diagnostics_buffer_capacity: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            smoothing_factor: Some(DEFAULT_SMOOTHING_FACTOR),
            section_threshold: Some(DEFAULT_SECTION_THRESHOLD),
            initial_section: Some(DEFAULT_INITIAL_SECTION.to_string()),
            overlay_hide_delay_ms: Some(DEFAULT_OVERLAY_HIDE_DELAY_MS),
            diagnostics_buffer_capacity: Some(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY),
        }
    }
}

impl Config {
    /// Smoothing factor, clamped into its valid range.
    #[must_use]
    pub fn smoothing(&self) -> SmoothingFactor {
        self.smoothing_factor
            .map(SmoothingFactor::new)
            .unwrap_or_default()
    }

    /// Intersection threshold, clamped into `[0, 1]`.
    #[must_use]
    pub fn threshold(&self) -> VisibilityThreshold {
        self.section_threshold
            .map(VisibilityThreshold::new)
            .unwrap_or_default()
    }

    /// Section active before the first visibility event.
    #[must_use]
    pub fn initial_section(&self) -> SectionId {
        self.initial_section
            .as_deref()
            .filter(|id| !id.trim().is_empty())
            .map_or_else(|| SectionId::from(DEFAULT_INITIAL_SECTION), SectionId::from)
    }

    /// Overlay auto-hide window.
    #[must_use]
    pub fn hide_delay(&self) -> HideDelay {
        self.overlay_hide_delay_ms
            .map(HideDelay::from_millis)
            .unwrap_or_default()
    }

    /// Diagnostics buffer capacity.
    #[must_use]
    pub fn buffer_capacity(&self) -> BufferCapacity {
        self.diagnostics_buffer_capacity
            .map(BufferCapacity::new)
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

/// Loads the configuration from the platform config directory, or returns
/// defaults when no file exists yet.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

/// Saves the configuration to the platform config directory.
///
/// # Errors
///
/// Returns an error if the file cannot be serialized or written.
pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Loads a configuration file. Malformed TOML yields the defaults.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

/// Writes a configuration file, creating parent directories as needed.
///
/// # Errors
///
/// Returns an error if serialization or any filesystem operation fails.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;
    use std::time::Duration;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_fields() {
        let config = Config {
            smoothing_factor: Some(0.3),
            section_threshold: Some(0.5),
            initial_section: Some("about".to_string()),
            overlay_hide_delay_ms: Some(5000),
            diagnostics_buffer_capacity: Some(200),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "smoothing_factor = 0.5\n").expect("failed to write toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.smoothing_factor, Some(0.5));
        assert!(loaded.overlay_hide_delay_ms.is_none());
        assert_eq!(loaded.hide_delay().as_duration(), Duration::from_millis(3000));
    }

    #[test]
    fn accessors_clamp_out_of_range_values() {
        let config = Config {
            smoothing_factor: Some(4.0),
            section_threshold: Some(-1.0),
            initial_section: Some("   ".to_string()),
            overlay_hide_delay_ms: Some(10),
            diagnostics_buffer_capacity: Some(1),
        };

        assert_abs_diff_eq!(config.smoothing().value(), MAX_SMOOTHING_FACTOR);
        assert_abs_diff_eq!(config.threshold().value(), 0.0);
        assert_eq!(config.initial_section().as_str(), DEFAULT_INITIAL_SECTION);
        assert_eq!(
            config.hide_delay().as_duration(),
            Duration::from_millis(MIN_OVERLAY_HIDE_DELAY_MS)
        );
        assert_eq!(
            config.buffer_capacity().value(),
            MIN_DIAGNOSTICS_BUFFER_CAPACITY
        );
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }
}
