//! Systems that operate on the game state each tick.
//!
//! Systems are plain functions over `&mut GameState` (or `&GameState` for
//! read-only). They do not own state; the engine folds them in a fixed order.

pub mod cleanup;
pub mod fire_control;
pub mod impact;
pub mod intercept;
pub mod movement;
pub mod progression;
pub mod radar;
pub mod snapshot;
pub mod stealth;
pub mod wave_spawner;
