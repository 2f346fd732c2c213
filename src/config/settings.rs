//! Configuration settings for psysafe.
//!
//! Settings are loaded from `~/.psysafe/config.yaml`. Every field has a
//! default, so a partial file is fine.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::config::Paths;
use crate::error::PsySafeError;
use crate::features::breathing::Technique;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Breathing exercise settings.
    pub breathing: BreathingConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    pub default_output: OutputFormat,
    /// Color output setting.
    pub color: ColorSetting,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorSetting {
    /// Apply the setting to the `colored` crate.
    pub fn apply(self) {
        match self {
            Self::Auto => colored::control::unset_override(),
            Self::Always => colored::control::set_override(true),
            Self::Never => colored::control::set_override(false),
        }
    }
}

/// Breathing exercise settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BreathingConfig {
    /// Technique used when none is given.
    #[serde(default = "default_technique")]
    pub default_technique: String,
    /// Spacing of elapsed-time updates in milliseconds.
    #[serde(default = "default_tick_interval")]
    pub tick_interval_millis: u64,
    /// Show the elapsed timer.
    #[serde(default = "default_true")]
    pub show_elapsed: bool,
}

fn default_technique() -> String {
    "square".to_string()
}

const fn default_tick_interval() -> u64 {
    1000
}

const fn default_true() -> bool {
    true
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: OutputFormat::Pretty,
            color: ColorSetting::Auto,
        }
    }
}

impl Default for BreathingConfig {
    fn default() -> Self {
        Self {
            default_technique: default_technique(),
            tick_interval_millis: default_tick_interval(),
            show_elapsed: default_true(),
        }
    }
}

impl BreathingConfig {
    /// Tick interval as a `Duration`.
    #[must_use]
    pub const fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_millis)
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self, PsySafeError> {
        let paths = Paths::new()?;
        Self::load_from_path(&paths.config_file)
    }

    /// Load configuration from a specific path.
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, parsed or
    /// validated.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, PsySafeError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            PsySafeError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        let config: Self = serde_yaml::from_str(&contents).map_err(|e| {
            PsySafeError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Check values serde cannot check.
    ///
    /// # Errors
    ///
    /// Returns `PsySafeError::Config` for an unknown default technique or a
    /// zero tick interval.
    pub fn validate(&self) -> Result<(), PsySafeError> {
        Technique::lookup(&self.breathing.default_technique).map_err(|_| {
            PsySafeError::Config(format!(
                "breathing.default_technique '{}' is not a known technique",
                self.breathing.default_technique
            ))
        })?;

        if self.breathing.tick_interval_millis == 0 {
            return Err(PsySafeError::Config(
                "breathing.tick_interval_millis must be positive".to_string(),
            ));
        }

        Ok(())
    }
}
