//! Calculation constants and the corrected-mode switches

use super::ConfigError;
use serde::{Deserialize, Serialize};

/// Share of the next layer's AC granted to a structural layer beneath it
pub const LAYERING_BOOST_FACTOR: f64 = 0.2;

/// Which layers count toward `max_ap` and effective HP
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerRange {
    /// Every layer but the last one added (legacy behaviour)
    #[default]
    ExcludeLast,
    /// Every layer
    All,
}

/// How the shell angle is fed to the cosine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AngleUnit {
    /// The degree value is used as radians without conversion (legacy behaviour)
    #[default]
    Radians,
    /// The degree value is converted to radians first
    Degrees,
}

impl AngleUnit {
    /// Angle in radians as handed to `cos`
    pub fn to_radians(self, angle: f64) -> f64 {
        match self {
            AngleUnit::Radians => angle,
            AngleUnit::Degrees => angle.to_radians(),
        }
    }
}

/// Independently toggleable switches; defaults reproduce the legacy tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CalcOptions {
    #[serde(default)]
    pub layer_range: LayerRange,
    #[serde(default)]
    pub angle_unit: AngleUnit,
}

impl CalcOptions {
    /// Both corrections switched on
    pub fn corrected() -> Self {
        CalcOptions {
            layer_range: LayerRange::All,
            angle_unit: AngleUnit::Degrees,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayeringConstants {
    /// Fraction of the next layer's AC added to the current one
    #[serde(default = "default_boost_factor")]
    pub boost_factor: f64,
}

impl Default for LayeringConstants {
    fn default() -> Self {
        LayeringConstants {
            boost_factor: LAYERING_BOOST_FACTOR,
        }
    }
}

fn default_boost_factor() -> f64 {
    LAYERING_BOOST_FACTOR
}

/// Tunable calculation settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalcConfig {
    #[serde(default)]
    pub options: CalcOptions,
    #[serde(default)]
    pub layering: LayeringConstants,
}

impl CalcConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let factor = self.layering.boost_factor;
        if !factor.is_finite() || factor < 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "layering.boost_factor must be a non-negative number, got {}",
                factor
            )));
        }
        Ok(())
    }
}
