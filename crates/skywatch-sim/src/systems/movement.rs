//! Kinematic integration.
//!
//! Contacts fly straight at the base. Missiles chase their target's current
//! position (pure pursuit); a missile whose target is gone is discarded.

use skywatch_core::state::GameState;
use skywatch_core::types::{bearing_deg, BASE_POSITION};

use crate::guidance::pursuit_step;

/// Move every contact `speed` units toward the base.
pub fn run_contacts(state: &mut GameState) {
    for contact in state.enemies.iter_mut().chain(state.neutrals.iter_mut()) {
        contact.position = pursuit_step(contact.position, BASE_POSITION, contact.speed);
    }
}

/// Move missiles toward their targets, dropping any without a live target.
/// Must run after `run_contacts` so missiles home on this tick's positions.
pub fn run_missiles(state: &mut GameState) {
    let enemies = &state.enemies;
    state.missiles.retain_mut(|missile| {
        if !missile.alive {
            return false;
        }
        let Some(target) = enemies.iter().find(|e| e.id == missile.target_id && e.alive) else {
            log::debug!(
                "missile {} lost target {}, discarded",
                missile.id,
                missile.target_id
            );
            return false;
        };
        let next = pursuit_step(missile.position, target.position, missile.speed);
        if next != missile.position {
            missile.heading = bearing_deg(next - missile.position);
        }
        missile.position = next;
        true
    });
}

/// Run contact and missile movement in order.
pub fn run(state: &mut GameState) {
    run_contacts(state);
    run_missiles(state);
}
