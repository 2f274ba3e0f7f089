//! Configuration models and loaders for the mortar calculator's ballistic constants.
//!
//! Every field falls back to the built-in tables, so a file only needs to name what it
//! overrides. Values are parsed here and validated by the fire-control crate when bound.

use std::fs::File;
use std::path::Path;

use mortar_core::charge::{AngleWindow, ChargePreset, default_charges};
use mortar_core::constants::{GRAVITY, MAX_ELEVATION_DEG, MIN_ELEVATION_DEG};
use serde::Deserialize;
use thiserror::Error;

/// Overridable constants for a firing-solution run.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BallisticsConfig {
    /// Gravitational acceleration (distance units/s²).
    pub gravity: f64,
    pub angle_window: AngleWindowConfig,
    /// Charge table, in the order solutions are reported.
    pub charges: Vec<ChargeConfig>,
}

/// Elevation limits in degrees, both inclusive.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct AngleWindowConfig {
    pub min_deg: f64,
    pub max_deg: f64,
}

/// One charge entry: ordinal index and muzzle speed.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct ChargeConfig {
    pub index: u32,
    pub velocity: f64,
}

impl Default for BallisticsConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            angle_window: AngleWindowConfig::default(),
            charges: default_charges().into_iter().map(ChargeConfig::from).collect(),
        }
    }
}

impl Default for AngleWindowConfig {
    fn default() -> Self {
        Self {
            min_deg: MIN_ELEVATION_DEG,
            max_deg: MAX_ELEVATION_DEG,
        }
    }
}

impl From<ChargePreset> for ChargeConfig {
    fn from(preset: ChargePreset) -> Self {
        Self {
            index: preset.index,
            velocity: preset.velocity,
        }
    }
}

impl From<ChargeConfig> for ChargePreset {
    fn from(config: ChargeConfig) -> Self {
        ChargePreset::new(config.index, config.velocity)
    }
}

impl From<AngleWindowConfig> for AngleWindow {
    fn from(config: AngleWindowConfig) -> Self {
        AngleWindow::new(config.min_deg, config.max_deg)
    }
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Load ballistic constants from a `.toml` file, or from YAML for any other extension.
pub fn load_ballistics<P: AsRef<Path>>(path: P) -> Result<BallisticsConfig, ConfigError> {
    let path = path.as_ref();
    if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        from_toml_str(&contents)
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

pub fn from_toml_str(contents: &str) -> Result<BallisticsConfig, ConfigError> {
    Ok(toml::from_str(contents)?)
}

pub fn from_yaml_str(contents: &str) -> Result<BallisticsConfig, ConfigError> {
    Ok(serde_yaml::from_str(contents)?)
}
