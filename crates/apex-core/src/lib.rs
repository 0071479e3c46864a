//! Core types and definitions for the Apex Drift pursuit model.
//!
//! This crate defines the vocabulary shared across all other crates:
//! offense and star types, commands, events, snapshots, configuration and
//! constants. It has no dependency on any runtime or game engine.

pub mod commands;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
