//! Timed command scripts for headless replay.
//!
//! A script is a JSON document listing commands and the simulation time at
//! which each is delivered:
//!
//! ```json
//! {
//!   "duration_secs": 120.0,
//!   "entries": [
//!     { "at_secs": 1.0, "command": { "type": "RegisterOffense", "kind": "property_damage" } },
//!     { "at_secs": 30.0, "command": { "type": "Escape" } }
//!   ]
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use apex_core::commands::PursuitCommand;

/// Quiet time appended after the last entry when no duration is given.
pub const DEFAULT_TAIL_SECS: f64 = 60.0;

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("failed to read script {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid script JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("entry {index}: time must be a finite number >= 0 (got {at_secs})")]
    InvalidTime { index: usize, at_secs: f64 },

    #[error("duration must be a finite number >= 0 (got {0})")]
    InvalidDuration(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptEntry {
    pub at_secs: f64,
    pub command: PursuitCommand,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Script {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_secs: Option<f64>,
    #[serde(default)]
    pub entries: Vec<ScriptEntry>,
}

impl Script {
    /// Parse and validate a script. Entries are sorted by time, stable for ties.
    pub fn from_json_str(json: &str) -> Result<Self, ScriptError> {
        let mut script: Script = serde_json::from_str(json)?;
        script.validate()?;
        script.sort();
        Ok(script)
    }

    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let json = std::fs::read_to_string(path).map_err(|source| ScriptError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ScriptError> {
        for (index, entry) in self.entries.iter().enumerate() {
            if !entry.at_secs.is_finite() || entry.at_secs < 0.0 {
                return Err(ScriptError::InvalidTime {
                    index,
                    at_secs: entry.at_secs,
                });
            }
        }
        if let Some(duration) = self.duration_secs {
            if !duration.is_finite() || duration < 0.0 {
                return Err(ScriptError::InvalidDuration(duration));
            }
        }
        Ok(())
    }

    pub fn sort(&mut self) {
        self.entries.sort_by(|a, b| a.at_secs.total_cmp(&b.at_secs));
    }

    /// Simulation time at which replay stops.
    pub fn end_secs(&self) -> f64 {
        self.duration_secs.unwrap_or_else(|| {
            self.entries
                .iter()
                .map(|e| e.at_secs)
                .fold(0.0, f64::max)
                + DEFAULT_TAIL_SECS
        })
    }
}
