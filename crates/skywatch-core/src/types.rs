//! Fundamental geometric helpers.
//!
//! Positions are `glam::DVec2` on a plane centered at the base:
//! x = East, y = North. Bearings are degrees clockwise from North.

use glam::DVec2;

/// Entity identity, unique within one game session.
pub type EntityId = u32;

/// Base position (radar center).
pub const BASE_POSITION: DVec2 = DVec2::ZERO;

/// Bearing of `pos` as seen from the base, in degrees `[0, 360)`.
pub fn bearing_deg(pos: DVec2) -> f64 {
    normalize_deg(pos.x.atan2(pos.y).to_degrees())
}

/// Wrap an angle into `[0, 360)`.
pub fn normalize_deg(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Signed difference `a - b` in degrees, normalized to `(-180, 180]`.
pub fn signed_diff_deg(a: f64, b: f64) -> f64 {
    let mut diff = (a - b).rem_euclid(360.0);
    if diff > 180.0 {
        diff -= 360.0;
    }
    diff
}

/// Unit vector from `from` toward `to`, or `None` when they are closer than `epsilon`.
pub fn heading_toward(from: DVec2, to: DVec2, epsilon: f64) -> Option<DVec2> {
    let delta = to - from;
    let dist = delta.length();
    if dist < epsilon {
        None
    } else {
        Some(delta / dist)
    }
}
