//! Enumeration types used throughout the pursuit model.

use serde::{Deserialize, Serialize};

/// A discrete offense the player can commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OffenseKind {
    Speeding,
    Collision,
    PropertyDamage,
    HitPedestrian,
}

impl OffenseKind {
    /// Every offense kind, in escalating severity.
    pub const ALL: [OffenseKind; 4] = [
        OffenseKind::Speeding,
        OffenseKind::Collision,
        OffenseKind::PropertyDamage,
        OffenseKind::HitPedestrian,
    ];

    /// Parse a command-line style name (`hit_pedestrian`, `hitpedestrian`, `pedestrian`).
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized: String = name
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match normalized.as_str() {
            "speeding" | "speed" => Some(OffenseKind::Speeding),
            "collision" | "crash" => Some(OffenseKind::Collision),
            "propertydamage" | "property" | "prop" => Some(OffenseKind::PropertyDamage),
            "hitpedestrian" | "pedestrian" | "ped" => Some(OffenseKind::HitPedestrian),
            _ => None,
        }
    }
}

/// What the player's car made contact with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactTarget {
    /// Another car (traffic or police).
    Vehicle,
    /// Destructible city property: fences, poles, crates, barrels.
    Prop,
    /// A pedestrian-tagged object.
    Pedestrian,
    /// Static world geometry. Never an offense.
    Scenery,
}

impl ImpactTarget {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "vehicle" | "car" => Some(ImpactTarget::Vehicle),
            "prop" => Some(ImpactTarget::Prop),
            "pedestrian" | "ped" => Some(ImpactTarget::Pedestrian),
            "scenery" | "wall" => Some(ImpactTarget::Scenery),
            _ => None,
        }
    }
}

/// Why the sirens were switched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SirenTrigger {
    /// A high-impact vehicle crash.
    Crash,
    /// An offense left the player with at least one star.
    Wanted,
}
