//! Beam detection.
//!
//! Every contact (enemy or neutral) whose bearing lies within half the beam
//! width of the sweep angle is stamped with the current time. A contact that
//! had been seen before but faded out counts as a new detection; a first-ever
//! paint is silent. All detections in one tick collapse into a single signal.

use skywatch_core::components::Contact;
use skywatch_core::constants::SWEEP_BEAM_WIDTH_DEG;
use skywatch_core::state::GameState;
use skywatch_core::types::{bearing_deg, signed_diff_deg};

/// Whether a contact at `bearing` is inside the beam centered on `sweep_angle`.
pub fn in_beam(bearing: f64, sweep_angle: f64) -> bool {
    signed_diff_deg(sweep_angle, bearing).abs() < SWEEP_BEAM_WIDTH_DEG / 2.0
}

/// Stamp a contact if painted. Returns true when a previously seen contact
/// was painted again after fading out.
fn paint(contact: &mut Contact, sweep_angle: f64, now_ms: f64) -> bool {
    if !in_beam(bearing_deg(contact.position), sweep_angle) {
        return false;
    }
    let redetected = contact.ever_scanned() && !contact.scan_is_fresh(now_ms);
    contact.last_scan_ms = now_ms;
    redetected
}

/// Paint all contacts under the beam. Returns true if any was newly detected.
pub fn run(state: &mut GameState) -> bool {
    let now_ms = state.time_ms;
    let sweep_angle = state.sweep_angle;
    let mut detected = false;

    for contact in state.enemies.iter_mut().chain(state.neutrals.iter_mut()) {
        if paint(contact, sweep_angle, now_ms) {
            log::debug!(
                "contact {} ({:?}) detected at bearing {:.1}",
                contact.id,
                contact.category,
                bearing_deg(contact.position)
            );
            detected = true;
        }
    }

    detected
}
