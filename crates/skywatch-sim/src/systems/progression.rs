//! Progression: loss checks, victory, wave advance and time-to-impact.
//!
//! Loss checks run before the victory/wave check, so clearing the last enemy
//! with an empty magazine is a win, not a loss.

use rand_chacha::ChaCha8Rng;

use skywatch_core::constants::BASE_HEALTH_BONUS_FACTOR;
use skywatch_core::enums::{GameOutcome, GameStatus};
use skywatch_core::state::GameState;
use skywatch_core::tables::GameTables;

use crate::guidance::min_time_to_impact;
use crate::systems::wave_spawner;

/// What the progression check decided this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// Nothing changed.
    Continue,
    /// A new wave was released.
    WaveSpawned(u32),
    /// The game ended.
    Ended(GameOutcome),
}

/// The first loss condition that holds, if any.
pub fn loss_condition(state: &GameState) -> Option<GameOutcome> {
    if state.base_health <= 0 {
        return Some(GameOutcome::BaseDestroyed);
    }
    if state.ammo.total() == 0 && state.missiles.is_empty() && !state.enemies.is_empty() {
        return Some(GameOutcome::AmmoExhausted);
    }
    None
}

fn end_game(state: &mut GameState, outcome: GameOutcome) {
    if outcome == GameOutcome::Victory {
        let bonus = state.base_health.max(0) as u32 * BASE_HEALTH_BONUS_FACTOR;
        state.score += bonus;
        log::info!("all waves cleared, bonus {bonus}");
    }
    state.status = GameStatus::GameOver;
    state.outcome = Some(outcome);
    log::info!(
        "game over ({outcome:?}) at wave {}, final score {}",
        state.wave,
        state.score
    );
}

/// Evaluate loss, then victory or wave advance.
pub fn run(state: &mut GameState, tables: &GameTables, rng: &mut ChaCha8Rng) -> Progress {
    if let Some(outcome) = loss_condition(state) {
        end_game(state, outcome);
        return Progress::Ended(outcome);
    }

    if !state.enemies.is_empty() {
        return Progress::Continue;
    }

    match wave_spawner::spawn_next_wave(state, tables, rng) {
        Some(wave) => Progress::WaveSpawned(wave),
        None => {
            end_game(state, GameOutcome::Victory);
            Progress::Ended(GameOutcome::Victory)
        }
    }
}

/// Recompute the advisory time-to-impact telemetry.
pub fn update_time_to_impact(state: &mut GameState) {
    state.time_to_impact_secs =
        min_time_to_impact(state.enemies.iter().map(|e| (e.position, e.speed)));
}
