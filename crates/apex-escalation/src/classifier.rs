//! Offense-specific escalation profiles.
//!
//! Consolidates per-offense parameters for the escalation policy.

use apex_core::constants::*;
use apex_core::enums::OffenseKind;

/// How an offense affects the wanted level directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarRule {
    /// No direct effect; only intensity changes.
    None,
    /// Raise to at least this many stars.
    AtLeast(u8),
    /// Always one more star than before.
    Increment,
}

/// Escalation profile for an offense kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffenseProfile {
    /// Pursuit intensity added by the offense.
    pub intensity_delta: f64,
    pub star_rule: StarRule,
}

/// Get the escalation profile for a given offense.
pub fn classify(kind: OffenseKind) -> OffenseProfile {
    match kind {
        OffenseKind::Speeding => OffenseProfile {
            intensity_delta: SPEEDING_INTENSITY,
            star_rule: StarRule::None,
        },
        OffenseKind::Collision => OffenseProfile {
            intensity_delta: COLLISION_INTENSITY,
            star_rule: StarRule::None,
        },
        OffenseKind::PropertyDamage => OffenseProfile {
            intensity_delta: PROPERTY_DAMAGE_INTENSITY,
            star_rule: StarRule::AtLeast(PROPERTY_DAMAGE_MIN_STARS),
        },
        OffenseKind::HitPedestrian => OffenseProfile {
            intensity_delta: HIT_PEDESTRIAN_INTENSITY,
            star_rule: StarRule::Increment,
        },
    }
}
