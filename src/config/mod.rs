//! This module handles the snack bar configuration, including loading and saving
//! preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_snackbar::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Keep banners on screen a little longer
//! config.snackbar.auto_hide_secs = Some(8);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

mod defaults;

pub use defaults::*;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedSnackbar";

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub snackbar: SnackbarConfig,
}

/// Timing and layout preferences for the snack bar overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnackbarConfig {
    #[serde(default)]
    pub auto_hide_secs: Option<u32>,
    #[serde(default)]
    pub reveal_duration_ms: Option<u64>,
    #[serde(default)]
    pub safe_area_top: Option<f32>,
}

impl Default for SnackbarConfig {
    fn default() -> Self {
        Self {
            auto_hide_secs: Some(DEFAULT_AUTO_HIDE_SECS),
            reveal_duration_ms: Some(DEFAULT_REVEAL_DURATION_MS),
            safe_area_top: Some(DEFAULT_SAFE_AREA_TOP),
        }
    }
}

impl SnackbarConfig {
    /// Auto-hide delay, clamped to the supported range.
    #[must_use]
    pub fn auto_hide(&self) -> AutoHideDelay {
        AutoHideDelay::new(self.auto_hide_secs.unwrap_or(DEFAULT_AUTO_HIDE_SECS))
    }

    /// Slide-in duration, clamped to the supported range.
    #[must_use]
    pub fn reveal(&self) -> RevealDuration {
        RevealDuration::new(
            self.reveal_duration_ms
                .unwrap_or(DEFAULT_REVEAL_DURATION_MS),
        )
    }

    /// Top safe-area inset in logical pixels.
    #[must_use]
    pub fn safe_area_top(&self) -> f32 {
        clamp_safe_area_top(self.safe_area_top.unwrap_or(DEFAULT_SAFE_AREA_TOP))
    }
}

/// Keeps a top inset inside `0..=MAX_SAFE_AREA_TOP`; NaN maps to zero.
#[must_use]
pub fn clamp_safe_area_top(value: f32) -> f32 {
    if value.is_nan() {
        return DEFAULT_SAFE_AREA_TOP;
    }
    value.clamp(0.0, MAX_SAFE_AREA_TOP)
}

/// Delay before a snack bar hides itself.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (1–60 seconds).
///
/// # Example
///
/// ```
/// use iced_snackbar::config::AutoHideDelay;
///
/// let delay = AutoHideDelay::new(5);
/// assert_eq!(delay.value(), 5);
///
/// // Values outside range are clamped
/// assert_eq!(AutoHideDelay::new(0).value(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoHideDelay(u32);

impl AutoHideDelay {
    #[must_use]
    pub fn new(secs: u32) -> Self {
        Self(secs.clamp(MIN_AUTO_HIDE_SECS, MAX_AUTO_HIDE_SECS))
    }

    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_secs(u64::from(self.0))
    }
}

impl Default for AutoHideDelay {
    fn default() -> Self {
        Self(DEFAULT_AUTO_HIDE_SECS)
    }
}

/// Duration of the slide-in animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealDuration(u64);

impl RevealDuration {
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.min(MAX_REVEAL_DURATION_MS))
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for RevealDuration {
    fn default() -> Self {
        Self(DEFAULT_REVEAL_DURATION_MS)
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
            tracing::warn!(path = %path.display(), error = %err, "invalid settings, using defaults");
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
