//! Events emitted by a pursuit session for audio and HUD feedback.

use serde::{Deserialize, Serialize};

use crate::enums::{OffenseKind, SirenTrigger};
use crate::types::WantedStars;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PursuitEvent {
    /// An offense was registered.
    OffenseRegistered {
        kind: OffenseKind,
        intensity: f64,
        stars: WantedStars,
    },
    /// The chase began (session was clear before the offense).
    ChaseStarted,
    /// Wanted level went up.
    StarGained { stars: WantedStars },
    /// A star was dropped after a quiet cooldown window.
    StarLost { stars: WantedStars },
    /// Stars and intensity both reached zero on their own.
    ChaseEnded,
    /// The player escaped; all pursuit state was cleared.
    Escaped,
    SirenOn { trigger: SirenTrigger },
    SirenOff,
}
