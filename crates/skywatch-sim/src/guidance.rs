//! Guidance helpers: pure-pursuit stepping and time-to-impact estimation.

use glam::DVec2;

use skywatch_core::constants::{CONVERGENCE_EPSILON, FRAME_RATE};
use skywatch_core::types::{heading_toward, BASE_POSITION};

/// Advance `pos` by `speed` along the straight line toward `target`.
///
/// Within `CONVERGENCE_EPSILON` of the target the position is held for
/// this tick instead of normalizing a near-zero vector.
pub fn pursuit_step(pos: DVec2, target: DVec2, speed: f64) -> DVec2 {
    match heading_toward(pos, target, CONVERGENCE_EPSILON) {
        Some(dir) => pos + dir * speed,
        None => pos,
    }
}

/// Seconds until a unit at `pos` moving at `speed` (units per tick) reaches the base.
/// `None` for a stationary unit.
pub fn time_to_base_secs(pos: DVec2, speed: f64) -> Option<f64> {
    if speed <= 0.0 {
        return None;
    }
    Some(pos.distance(BASE_POSITION) / speed / FRAME_RATE)
}

/// Earliest arrival among all `(position, speed)` pairs. Advisory only.
pub fn min_time_to_impact(units: impl IntoIterator<Item = (DVec2, f64)>) -> Option<f64> {
    units
        .into_iter()
        .filter_map(|(pos, speed)| time_to_base_secs(pos, speed))
        .min_by(f64::total_cmp)
}
