//! Base impact: enemies that reach the base damage it and are removed.
//! Neutrals are ignored.

use skywatch_core::constants::{BASE_IMPACT_DAMAGE, BASE_IMPACT_RADIUS};
use skywatch_core::state::GameState;
use skywatch_core::types::BASE_POSITION;

/// Apply impacts. Returns the number of enemies that struck the base.
pub fn run(state: &mut GameState) -> u32 {
    let mut impacts = 0;
    for enemy in &mut state.enemies {
        if enemy.position.distance(BASE_POSITION) < BASE_IMPACT_RADIUS {
            enemy.alive = false;
            impacts += 1;
        }
    }

    if impacts > 0 {
        state.base_health -= BASE_IMPACT_DAMAGE * impacts as i32;
        state.enemies.retain(|e| e.alive);
        log::info!(
            "{} enemies hit the base, health now {}",
            impacts,
            state.base_health
        );
    }

    impacts
}
