//! Sweep rotation.
//!
//! The beam turns at a constant `360° / SCAN_PERIOD_MS` and wraps at North.

use skywatch_core::constants::SCAN_PERIOD_MS;
use skywatch_core::state::GameState;
use skywatch_core::types::normalize_deg;

/// Sweep angle after `elapsed_ms`, and whether the beam wrapped past North.
pub fn advance(angle: f64, elapsed_ms: f64) -> (f64, bool) {
    let next = normalize_deg(angle + 360.0 * elapsed_ms / SCAN_PERIOD_MS);
    // A delta of a full period or more lands back on (or past) the same angle.
    let wrapped = next < angle || elapsed_ms >= SCAN_PERIOD_MS;
    (next, wrapped)
}

/// Rotate the sweep. Returns true when a revolution completed.
pub fn run(state: &mut GameState, elapsed_ms: f64) -> bool {
    let (angle, wrapped) = advance(state.sweep_angle, elapsed_ms);
    state.sweep_angle = angle;
    if wrapped {
        log::trace!("sweep completed at t={:.0}ms", state.time_ms);
    }
    wrapped
}
