//! Pursuit escalation rules for Apex Drift.
//!
//! Offense classification, intensity accumulation and the star escalation
//! policy. Pure rules over plain data; no session, clock or logging.

pub mod accumulator;
pub mod classifier;
pub mod impact;
pub mod policy;

pub use apex_core as core;
