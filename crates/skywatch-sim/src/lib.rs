//! Simulation engine for SKYWATCH.
//!
//! Folds the game state forward one fixed step at a time and applies
//! player intents between steps.

pub mod engine;
pub mod guidance;
pub mod systems;
pub mod world_setup;

pub use engine::{step, SimConfig, SimulationEngine, TickOutcome};
pub use skywatch_core as core;
