//! Cleanup system: purges spent missiles and expired explosions.

use skywatch_core::state::GameState;

/// Drop dead missiles and explosions whose lifetime has elapsed.
pub fn run(state: &mut GameState) {
    let now_ms = state.time_ms;
    state.missiles.retain(|m| m.alive);
    state.explosions.retain(|e| !e.is_expired(now_ms));
}
