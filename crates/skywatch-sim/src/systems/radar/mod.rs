//! Radar: sweep rotation and beam detection.

pub mod detection;
pub mod sweep;

use skywatch_core::state::GameState;

/// Result of one radar pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RadarPass {
    pub sweep_completed: bool,
    pub new_detection: bool,
}

/// Advance the sweep by `elapsed_ms`, then paint every contact inside the beam.
///
/// Must run AFTER the clock has been advanced (contacts are stamped with
/// `state.time_ms`) and BEFORE movement.
pub fn run(state: &mut GameState, elapsed_ms: f64) -> RadarPass {
    let sweep_completed = sweep::run(state, elapsed_ms);
    let new_detection = detection::run(state);
    RadarPass {
        sweep_completed,
        new_detection,
    }
}
