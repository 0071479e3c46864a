//! Pursuit constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 30;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

/// Longest single step `tick` will simulate (seconds). Larger steps are capped
/// so the clock stays finite and keeps whole-second precision.
pub const MAX_TICK_SECS: f64 = 86_400.0;

// --- Wanted level ---

/// Highest wanted level a player can reach.
pub const MAX_WANTED_STARS: u8 = 5;

/// Intensity above which a clear player is automatically given the first star.
pub const AUTO_STAR_INTENSITY_THRESHOLD: f64 = 50.0;

/// Quiet time (seconds) with zero intensity before one star is dropped.
pub const STAR_COOLDOWN_SECS: f64 = 20.0;

/// Intensity lost per second while under chase.
pub const INTENSITY_DECAY_RATE: f64 = 0.5;

// --- Offense intensity contributions ---

pub const SPEEDING_INTENSITY: f64 = 10.0;
pub const COLLISION_INTENSITY: f64 = 25.0;
pub const PROPERTY_DAMAGE_INTENSITY: f64 = 30.0;
pub const HIT_PEDESTRIAN_INTENSITY: f64 = 100.0;

/// Minimum wanted level forced by property damage.
pub const PROPERTY_DAMAGE_MIN_STARS: u8 = 1;

// --- Impacts ---

/// Vehicle impact speed (m/s) above which a crash counts as a collision offense
/// and starts the sirens.
pub const CRASH_THRESHOLD: f64 = 15.0;

/// Impact speed (m/s) above which a destructible prop breaks.
pub const PROP_BREAK_SPEED: f64 = 15.0;

// --- Sirens ---

/// How long sirens keep wailing after being triggered (seconds).
pub const SIREN_DURATION_SECS: f64 = 15.0;
