//! Apex Drift pursuit driver.
//!
//! Wires the pursuit session to a fixed-timestep loop: headless script
//! replay, seeded demo drives, and a real-time console loop.

pub mod console;
pub mod demo;
pub mod game_loop;
pub mod script;
pub mod state;

pub use apex_core as core;
