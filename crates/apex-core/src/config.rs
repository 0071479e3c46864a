//! Tunable pursuit parameters.
//!
//! Every field has a default from [`crate::constants`], so a config file only
//! needs to name the values it overrides.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::{ConfigError, ConfigResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PursuitConfig {
    /// Intensity lost per second while under chase.
    pub intensity_decay_rate: f64,
    /// Quiet seconds at zero intensity before a star is dropped.
    pub star_cooldown_secs: f64,
    /// Intensity above which a clear player gets the first star.
    pub auto_star_threshold: f64,
    /// Vehicle impact speed that counts as a crash.
    pub crash_threshold: f64,
    /// Impact speed that breaks a destructible prop.
    pub prop_break_speed: f64,
    /// How long the sirens run once triggered.
    pub siren_duration_secs: f64,
}

impl Default for PursuitConfig {
    fn default() -> Self {
        Self {
            intensity_decay_rate: INTENSITY_DECAY_RATE,
            star_cooldown_secs: STAR_COOLDOWN_SECS,
            auto_star_threshold: AUTO_STAR_INTENSITY_THRESHOLD,
            crash_threshold: CRASH_THRESHOLD,
            prop_break_speed: PROP_BREAK_SPEED,
            siren_duration_secs: SIREN_DURATION_SECS,
        }
    }
}

impl PursuitConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: PursuitConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        non_negative("intensity_decay_rate", self.intensity_decay_rate)?;
        positive("star_cooldown_secs", self.star_cooldown_secs)?;
        non_negative("auto_star_threshold", self.auto_star_threshold)?;
        non_negative("crash_threshold", self.crash_threshold)?;
        non_negative("prop_break_speed", self.prop_break_speed)?;
        non_negative("siren_duration_secs", self.siren_duration_secs)?;
        Ok(())
    }
}

fn non_negative(field: &'static str, value: f64) -> ConfigResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotNonNegative { field, value })
    }
}

fn positive(field: &'static str, value: f64) -> ConfigResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}
