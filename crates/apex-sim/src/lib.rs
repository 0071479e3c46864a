//! Pursuit session for Apex Drift.
//!
//! Owns the pursuit state, applies the escalation rules on every offense and
//! tick, runs the sirens, and produces `PursuitSnapshot`s for HUD and audio.

pub mod session;
pub mod siren;

pub use apex_core as core;
pub use session::PursuitSession;
