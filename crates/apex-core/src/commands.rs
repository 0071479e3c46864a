//! Commands sent from the gameplay layer to a pursuit session.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::OffenseKind;
use crate::types::ImpactReport;

/// All inputs a pursuit session accepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PursuitCommand {
    /// A classified offense (e.g. from a trigger volume).
    RegisterOffense { kind: OffenseKind },
    /// A raw physical contact to be classified.
    ReportImpact { report: ImpactReport },
    /// The player lost the cops.
    Escape,
    /// Tear the session down to its initial state.
    Reset,
}
