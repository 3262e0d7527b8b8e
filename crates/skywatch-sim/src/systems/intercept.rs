//! Intercept evaluation: proximity fuse, blast damage and scoring.
//!
//! A missile inside `FUSE_RADIUS` of its target detonates. The target is
//! always destroyed; every other enemy (never a neutral) strictly inside the
//! blast radius goes with it. Kills from all detonations in a tick are
//! pooled, removed together and scored once.

use std::collections::BTreeSet;

use glam::DVec2;

use skywatch_core::components::Explosion;
use skywatch_core::constants::*;
use skywatch_core::state::GameState;
use skywatch_core::types::EntityId;

/// Result of one intercept pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterceptResult {
    /// Enemies removed this tick.
    pub destroyed: BTreeSet<EntityId>,
    /// Missiles that detonated this tick.
    pub detonated: Vec<EntityId>,
}

impl InterceptResult {
    pub fn is_hit(&self) -> bool {
        !self.destroyed.is_empty()
    }
}

/// A fused missile, captured before any state is modified.
struct Detonation {
    missile_index: usize,
    position: DVec2,
    blast_radius: f64,
    target_id: EntityId,
}

/// Run fuse checks, spawn explosions, remove destroyed enemies and award score.
pub fn run(state: &mut GameState) -> InterceptResult {
    let detonations: Vec<Detonation> = state
        .missiles
        .iter()
        .enumerate()
        .filter(|(_, m)| m.alive)
        .filter_map(|(missile_index, missile)| {
            let target = state.enemy(missile.target_id)?;
            (missile.position.distance(target.position) < FUSE_RADIUS).then(|| Detonation {
                missile_index,
                position: missile.position,
                blast_radius: missile.blast_radius,
                target_id: target.id,
            })
        })
        .collect();

    let mut result = InterceptResult::default();

    for det in &detonations {
        let missile = &mut state.missiles[det.missile_index];
        missile.alive = false;
        result.detonated.push(missile.id);

        // Guaranteed kill on the primary target, plus collateral.
        result.destroyed.insert(det.target_id);
        for enemy in &state.enemies {
            if enemy.position.distance(det.position) < det.blast_radius {
                result.destroyed.insert(enemy.id);
            }
        }

        let id = state.alloc_id();
        state.explosions.push(Explosion {
            id,
            position: det.position,
            radius: det.blast_radius,
            created_ms: state.time_ms,
            duration_ms: EXPLOSION_DURATION_MS,
        });
    }

    if result.is_hit() {
        state.enemies.retain(|e| !result.destroyed.contains(&e.id));
        let kills = result.destroyed.len() as u32;
        state.score += SCORE_PER_KILL * kills;
        log::debug!(
            "{} detonation(s) destroyed {} enemies, score {}",
            result.detonated.len(),
            kills,
            state.score
        );
    }

    result
}
