//! Wave spawning: releases the next wave of the current level.

use rand_chacha::ChaCha8Rng;

use skywatch_core::state::GameState;
use skywatch_core::tables::GameTables;

use crate::world_setup;

/// Spawn the next wave of the current level, if one remains.
/// Returns the new wave number, or `None` when the level is exhausted
/// (or the level itself is missing from the tables).
pub fn spawn_next_wave(
    state: &mut GameState,
    tables: &GameTables,
    rng: &mut ChaCha8Rng,
) -> Option<u32> {
    let next_wave = state.wave + 1;
    let groups = tables.wave(state.level, next_wave)?.clone();

    for group in &groups {
        for _ in 0..group.count {
            world_setup::spawn_contact(state, tables, rng, group.category);
        }
    }
    state.wave = next_wave;

    log::info!(
        "level {} wave {}/{} inbound: {} contacts",
        state.level,
        next_wave,
        tables.wave_count(state.level),
        groups.iter().map(|g| g.count).sum::<u32>()
    );
    Some(next_wave)
}
