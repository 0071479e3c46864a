//! Line-oriented console input for the live loop, and the HUD line it prints.

use thiserror::Error;

use apex_core::commands::PursuitCommand;
use apex_core::enums::{ImpactTarget, OffenseKind};
use apex_core::state::PursuitSnapshot;
use apex_core::types::ImpactReport;

use crate::state::GameLoopCommand;

#[derive(Debug, Error, PartialEq)]
pub enum ConsoleError {
    #[error("unknown command `{0}` (try: offense, impact, escape, reset, quit)")]
    UnknownCommand(String),
    #[error("unknown offense `{0}` (speeding, collision, property_damage, hit_pedestrian)")]
    UnknownOffense(String),
    #[error("unknown impact target `{0}` (vehicle, prop, pedestrian, scenery)")]
    UnknownTarget(String),
    #[error("invalid impact speed `{0}`")]
    BadSpeed(String),
    #[error("missing {0}")]
    Missing(&'static str),
}

/// Parse one console line. Blank lines and `#` comments yield `None`.
pub fn parse_line(line: &str) -> Result<Option<GameLoopCommand>, ConsoleError> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(None);
    };
    if verb.starts_with('#') {
        return Ok(None);
    }

    let command = match verb.to_ascii_lowercase().as_str() {
        "offense" | "o" => {
            let name = words.next().ok_or(ConsoleError::Missing("offense kind"))?;
            let kind = OffenseKind::from_name(name)
                .ok_or_else(|| ConsoleError::UnknownOffense(name.to_string()))?;
            GameLoopCommand::Pursuit(PursuitCommand::RegisterOffense { kind })
        }
        "impact" | "i" => {
            let name = words.next().ok_or(ConsoleError::Missing("impact target"))?;
            let target = ImpactTarget::from_name(name)
                .ok_or_else(|| ConsoleError::UnknownTarget(name.to_string()))?;
            let raw = words.next().ok_or(ConsoleError::Missing("impact speed"))?;
            let speed: f64 = raw
                .parse()
                .ok()
                .filter(|s: &f64| s.is_finite() && *s >= 0.0)
                .ok_or_else(|| ConsoleError::BadSpeed(raw.to_string()))?;
            GameLoopCommand::Pursuit(PursuitCommand::ReportImpact {
                report: ImpactReport::with_speed(target, speed),
            })
        }
        "escape" | "e" => GameLoopCommand::Pursuit(PursuitCommand::Escape),
        "reset" => GameLoopCommand::Pursuit(PursuitCommand::Reset),
        "quit" | "q" | "exit" => GameLoopCommand::Shutdown,
        other => return Err(ConsoleError::UnknownCommand(other.to_string())),
    };
    Ok(Some(command))
}

/// The part of a snapshot the HUD redraws on change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HudKey {
    pub stars: u8,
    pub under_chase: bool,
    pub siren_active: bool,
}

impl From<&PursuitSnapshot> for HudKey {
    fn from(snap: &PursuitSnapshot) -> Self {
        Self {
            stars: snap.wanted_stars.get(),
            under_chase: snap.under_chase,
            siren_active: snap.siren_active,
        }
    }
}

/// One-line HUD: `[t=12.3s] ★★☆☆☆ intensity 42.0 CHASE SIREN`.
pub fn hud_line(snap: &PursuitSnapshot) -> String {
    let stars = snap.wanted_stars.get() as usize;
    let max = apex_core::constants::MAX_WANTED_STARS as usize;
    let mut line = format!(
        "[t={:.1}s] {}{} intensity {:.1}",
        snap.time.elapsed_secs,
        "★".repeat(stars),
        "☆".repeat(max - stars),
        snap.intensity
    );
    if snap.under_chase {
        line.push_str(" CHASE");
    }
    if snap.siren_active {
        line.push_str(" SIREN");
    }
    line
}
