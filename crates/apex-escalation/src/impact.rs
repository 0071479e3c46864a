//! Impact classification: turns raw contacts from the collision layer into
//! offenses.

use apex_core::config::PursuitConfig;
use apex_core::constants::{CRASH_THRESHOLD, PROP_BREAK_SPEED};
use apex_core::enums::{ImpactTarget, OffenseKind};
use apex_core::types::ImpactReport;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpactThresholds {
    /// Impact speed above which any crash triggers sirens, and a vehicle
    /// crash counts as a collision offense.
    pub crash_threshold: f64,
    /// Impact speed above which a prop breaks.
    pub prop_break_speed: f64,
}

impl Default for ImpactThresholds {
    fn default() -> Self {
        Self {
            crash_threshold: CRASH_THRESHOLD,
            prop_break_speed: PROP_BREAK_SPEED,
        }
    }
}

impl ImpactThresholds {
    pub fn from_config(config: &PursuitConfig) -> Self {
        Self {
            crash_threshold: config.crash_threshold,
            prop_break_speed: config.prop_break_speed,
        }
    }
}

/// Offense committed by an impact, if any.
pub fn classify_impact(
    report: &ImpactReport,
    thresholds: &ImpactThresholds,
) -> Option<OffenseKind> {
    let speed = report.speed();
    match report.target {
        ImpactTarget::Pedestrian => Some(OffenseKind::HitPedestrian),
        ImpactTarget::Prop if speed > thresholds.prop_break_speed => {
            Some(OffenseKind::PropertyDamage)
        }
        ImpactTarget::Vehicle if speed > thresholds.crash_threshold => {
            Some(OffenseKind::Collision)
        }
        _ => None,
    }
}

/// Whether an impact is violent enough to bring the sirens out.
pub fn is_crash(report: &ImpactReport, thresholds: &ImpactThresholds) -> bool {
    report.target != ImpactTarget::Pedestrian && report.speed() > thresholds.crash_threshold
}
