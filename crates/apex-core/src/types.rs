//! Fundamental pursuit and simulation types.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::constants::MAX_WANTED_STARS;
use crate::enums::ImpactTarget;

/// Wanted level in the range `0..=MAX_WANTED_STARS`.
///
/// Every operation saturates, so a value outside the range cannot be built.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct WantedStars(u8);

impl WantedStars {
    pub const CLEAR: WantedStars = WantedStars(0);
    pub const MAX: WantedStars = WantedStars(MAX_WANTED_STARS);

    /// Build a wanted level, clamping anything above the maximum.
    pub fn saturating(stars: u8) -> Self {
        Self(stars.min(MAX_WANTED_STARS))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn is_clear(self) -> bool {
        self.0 == 0
    }

    /// One more star, capped at the maximum.
    pub fn increment(self) -> Self {
        Self::saturating(self.0.saturating_add(1))
    }

    /// One fewer star, floored at zero.
    pub fn decrement(self) -> Self {
        Self(self.0.saturating_sub(1))
    }

    /// Raise to at least `floor` stars. Never lowers.
    pub fn raise_to(self, floor: u8) -> Self {
        Self::saturating(self.0.max(floor))
    }
}

impl TryFrom<u8> for WantedStars {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value > MAX_WANTED_STARS {
            Err(format!(
                "wanted level {value} exceeds maximum of {MAX_WANTED_STARS}"
            ))
        } else {
            Ok(Self(value))
        }
    }
}

impl From<WantedStars> for u8 {
    fn from(stars: WantedStars) -> u8 {
        stars.0
    }
}

impl std::fmt::Display for WantedStars {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.0, MAX_WANTED_STARS)
    }
}

/// Monotonic simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}

/// A physical contact reported by the collision layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpactReport {
    pub target: ImpactTarget,
    /// Relative velocity at contact (m/s).
    pub relative_velocity: DVec3,
}

impl ImpactReport {
    pub fn new(target: ImpactTarget, relative_velocity: DVec3) -> Self {
        Self {
            target,
            relative_velocity,
        }
    }

    /// Head-on impact at the given speed, for callers that only know a magnitude.
    pub fn with_speed(target: ImpactTarget, speed: f64) -> Self {
        Self::new(target, DVec3::new(0.0, 0.0, speed))
    }

    /// Impact speed magnitude (m/s).
    pub fn speed(&self) -> f64 {
        self.relative_velocity.length()
    }
}
