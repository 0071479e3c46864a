//! Star escalation policy.
//!
//! Pure functions that compute wanted-level transitions from an offense
//! profile, the current intensity and the quiet time since the cooldown
//! anchor. Operates on plain data; the session owns the state.

use apex_core::config::PursuitConfig;
use apex_core::constants::{AUTO_STAR_INTENSITY_THRESHOLD, STAR_COOLDOWN_SECS};
use apex_core::types::WantedStars;

use crate::classifier::{OffenseProfile, StarRule};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EscalationPolicy {
    /// Intensity above which a clear player gets the first star.
    pub auto_star_threshold: f64,
    /// Quiet seconds at zero intensity per dropped star.
    pub cooldown_secs: f64,
}

impl Default for EscalationPolicy {
    fn default() -> Self {
        Self {
            auto_star_threshold: AUTO_STAR_INTENSITY_THRESHOLD,
            cooldown_secs: STAR_COOLDOWN_SECS,
        }
    }
}

/// Input to the cooldown rule.
pub struct CooldownContext {
    pub stars: WantedStars,
    pub intensity_is_zero: bool,
    pub now_secs: f64,
    /// Start of the current quiet window.
    pub anchor_secs: f64,
}

/// Output from the cooldown rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CooldownUpdate {
    pub new_stars: WantedStars,
    pub new_anchor_secs: f64,
    pub stars_lost: u8,
}

impl EscalationPolicy {
    pub fn from_config(config: &PursuitConfig) -> Self {
        Self {
            auto_star_threshold: config.auto_star_threshold,
            cooldown_secs: config.star_cooldown_secs,
        }
    }

    /// Wanted level after an offense, given the intensity once the offense
    /// has been accumulated.
    pub fn escalate(
        &self,
        stars: WantedStars,
        profile: &OffenseProfile,
        intensity_after: f64,
    ) -> WantedStars {
        let forced = match profile.star_rule {
            StarRule::None => stars,
            StarRule::AtLeast(floor) => stars.raise_to(floor),
            StarRule::Increment => stars.increment(),
        };

        if forced.is_clear() && intensity_after > self.auto_star_threshold {
            return forced.raise_to(1);
        }
        forced
    }

    /// Drop one star per full quiet window that has elapsed at zero intensity.
    ///
    /// Each dropped star advances the anchor by exactly one window, so a single
    /// long step loses as many stars as a run of short ones would.
    pub fn cool_down(&self, ctx: &CooldownContext) -> CooldownUpdate {
        let mut update = CooldownUpdate {
            new_stars: ctx.stars,
            new_anchor_secs: ctx.anchor_secs,
            stars_lost: 0,
        };

        if !ctx.intensity_is_zero || self.cooldown_secs <= 0.0 {
            return update;
        }

        while !update.new_stars.is_clear()
            && ctx.now_secs - update.new_anchor_secs >= self.cooldown_secs
        {
            update.new_stars = update.new_stars.decrement();
            update.new_anchor_secs += self.cooldown_secs;
            update.stars_lost += 1;
        }

        update
    }
}
