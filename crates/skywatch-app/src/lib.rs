//! SKYWATCH headless application.
//!
//! Wraps the simulation engine in a wall-clock game loop thread and
//! provides a scripted autopilot for unattended sessions.

pub mod autopilot;
pub mod error;
pub mod game_loop;
pub mod state;

pub use error::AppError;
pub use game_loop::GameLoop;
pub use skywatch_core as core;
