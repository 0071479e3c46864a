//! Pursuit state and the snapshot polled by HUD and audio consumers.

use serde::{Deserialize, Serialize};

use crate::events::PursuitEvent;
use crate::types::{SimTime, WantedStars};

/// The pursuit state proper.
///
/// Invariant (restored by every session entry point):
/// `under_chase == (!wanted_stars.is_clear() || intensity > 0.0)`, and
/// `intensity >= 0.0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PursuitState {
    pub wanted_stars: WantedStars,
    pub intensity: f64,
    pub under_chase: bool,
    /// Simulation time of the most recent offense, if any.
    pub last_offense_secs: Option<f64>,
}

impl PursuitState {
    /// Whether the chase flag agrees with stars and intensity.
    pub fn is_consistent(&self) -> bool {
        self.intensity >= 0.0
            && self.under_chase == (!self.wanted_stars.is_clear() || self.intensity > 0.0)
    }
}

/// Complete pursuit view produced after each fixed step.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PursuitSnapshot {
    pub time: SimTime,
    pub wanted_stars: WantedStars,
    pub intensity: f64,
    pub under_chase: bool,
    pub siren_active: bool,
    /// Seconds since the last offense (None if none yet).
    pub secs_since_offense: Option<f64>,
    /// Events emitted since the previous snapshot.
    pub events: Vec<PursuitEvent>,
}
