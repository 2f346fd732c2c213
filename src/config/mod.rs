//! Configuration management for psysafe.
//!
//! This module handles loading and saving configuration from `~/.psysafe/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{BreathingConfig, ColorSetting, Config, GeneralConfig};
