//! Configuration loading from TOML files

mod constants;
mod materials;

pub use constants::{
    AngleUnit, CalcConfig, CalcOptions, LayerRange, LayeringConstants, LAYERING_BOOST_FACTOR,
};
pub use materials::{load_material_table, parse_material_table};

use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Configuration validation error: {0}")]
    ValidationError(String),
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_toml(&content)
}

/// Load a TOML string and deserialize it
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}

/// Load a calculation config file
pub fn load_calc_config(path: &Path) -> Result<CalcConfig, ConfigError> {
    let config: CalcConfig = load_toml(path)?;
    config.validate()?;
    tracing::debug!(path = %path.display(), ?config, "loaded calc config");
    Ok(config)
}
