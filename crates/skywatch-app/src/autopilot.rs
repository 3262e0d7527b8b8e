//! Scripted player: picks targets and fires without a human at the scope.
//!
//! The policy is deliberately simple. Lock the hostile closest to the base,
//! keep the selected weapon while it has rounds (otherwise take the first
//! weapon that does), and launch only when nothing is already chasing the
//! locked target.

use serde::Serialize;

use skywatch_core::commands::PlayerCommand;
use skywatch_core::constants::FRAME_BUDGET_MS;
use skywatch_core::enums::{GameOutcome, GameStatus, WeaponType};
use skywatch_core::state::GameState;
use skywatch_core::types::{EntityId, BASE_POSITION};
use skywatch_sim::{SimConfig, SimulationEngine};

/// Hostile nearest to the base, if any.
pub fn nearest_enemy(state: &GameState) -> Option<EntityId> {
    state
        .enemies
        .iter()
        .filter(|e| e.alive)
        .min_by(|a, b| {
            a.position
                .distance(BASE_POSITION)
                .total_cmp(&b.position.distance(BASE_POSITION))
        })
        .map(|e| e.id)
}

/// Weapon to fire next: the current one while it has rounds.
pub fn pick_weapon(state: &GameState) -> Option<WeaponType> {
    if state.ammo.get(state.selected_weapon) > 0 {
        return Some(state.selected_weapon);
    }
    WeaponType::ALL
        .into_iter()
        .find(|weapon| state.ammo.get(*weapon) > 0)
}

/// Intents to apply before the next tick.
pub fn plan(state: &GameState) -> Vec<PlayerCommand> {
    let mut commands = Vec::new();
    if state.status != GameStatus::Playing {
        return commands;
    }
    let Some(target) = nearest_enemy(state) else {
        return commands;
    };

    if state.locked_target != Some(target) {
        commands.push(PlayerCommand::LockTarget {
            target: Some(target),
        });
    }

    let chased = state.missiles.iter().any(|m| m.target_id == target);
    if chased {
        return commands;
    }

    if let Some(weapon) = pick_weapon(state) {
        if weapon != state.selected_weapon {
            commands.push(PlayerCommand::SelectWeapon { weapon });
        }
        commands.push(PlayerCommand::Launch);
    }
    commands
}

/// Summary of one autopilot session.
#[derive(Debug, Clone, Serialize)]
pub struct RunMetrics {
    pub seed: u64,
    pub max_frames: u64,
    pub frame_count: u64,
    pub final_score: u32,
    pub final_wave: u32,
    pub base_health: i32,
    pub launches: u32,
    pub outcome: Option<GameOutcome>,
}

/// Play a whole game in-process at a fixed frame delta.
/// Stops at game over or after `max_frames`.
pub fn run_session(config: SimConfig, max_frames: u64) -> RunMetrics {
    let seed = config.seed;
    let mut engine = SimulationEngine::new(config);
    engine.start();

    let mut frame_count = 0;
    let mut launches = 0;
    let mut last_wave = 0;

    while frame_count < max_frames && engine.status() == GameStatus::Playing {
        for command in plan(engine.state()) {
            if command == PlayerCommand::Launch {
                launches += 1;
            }
            engine.apply(command);
        }
        engine.advance(FRAME_BUDGET_MS);
        frame_count += 1;

        let state = engine.state();
        if state.wave != last_wave {
            last_wave = state.wave;
            log::info!(
                "frame {frame_count}: wave {} score {} health {}",
                state.wave,
                state.score,
                state.base_health
            );
        }
    }

    let state = engine.state();
    RunMetrics {
        seed,
        max_frames,
        frame_count,
        final_score: state.score,
        final_wave: state.wave,
        base_health: state.base_health,
        launches,
        outcome: state.outcome,
    }
}

#[cfg(test)]
mod tests {
    use glam::DVec2;

    use skywatch_core::components::AmmoLedger;
    use skywatch_core::enums::ContactCategory;
    use skywatch_core::tables::GameTables;
    use skywatch_sim::world_setup::spawn_contact_at;

    use super::*;

    fn playing_state() -> (GameState, GameTables) {
        let tables = GameTables::default();
        let state = GameState::new_game(&tables);
        (state, tables)
    }

    #[test]
    fn test_plan_locks_nearest_and_launches() {
        let (mut state, tables) = playing_state();
        spawn_contact_at(
            &mut state,
            &tables,
            ContactCategory::Bomber,
            DVec2::new(0.0, 200.0),
        );
        let near = spawn_contact_at(
            &mut state,
            &tables,
            ContactCategory::Fighter,
            DVec2::new(-80.0, 0.0),
        )
        .unwrap();

        assert_eq!(
            plan(&state),
            vec![
                PlayerCommand::LockTarget { target: Some(near) },
                PlayerCommand::Launch,
            ]
        );
    }

    #[test]
    fn test_plan_holds_fire_while_missile_chasing() {
        let (mut state, tables) = playing_state();
        let id = spawn_contact_at(
            &mut state,
            &tables,
            ContactCategory::Fighter,
            DVec2::new(100.0, 0.0),
        )
        .unwrap();
        let mut engine = SimulationEngine::with_state(SimConfig::default(), state);
        for command in plan(engine.state()) {
            engine.apply(command);
        }
        assert_eq!(engine.state().missiles.len(), 1);
        assert_eq!(engine.state().locked_target, Some(id));
        assert!(plan(engine.state()).is_empty());
    }

    #[test]
    fn test_plan_switches_weapon_when_empty() {
        let (mut state, tables) = playing_state();
        spawn_contact_at(
            &mut state,
            &tables,
            ContactCategory::Fighter,
            DVec2::new(100.0, 0.0),
        );
        state.ammo = AmmoLedger::new([(WeaponType::Falcon, 0), (WeaponType::Aegis, 3)]);

        let commands = plan(&state);
        assert!(commands.contains(&PlayerCommand::SelectWeapon {
            weapon: WeaponType::Aegis
        }));
        assert_eq!(commands.last(), Some(&PlayerCommand::Launch));
    }

    #[test]
    fn test_plan_idle_without_ammo_or_targets() {
        let (mut state, tables) = playing_state();
        assert!(plan(&state).is_empty());

        spawn_contact_at(
            &mut state,
            &tables,
            ContactCategory::Fighter,
            DVec2::new(100.0, 0.0),
        );
        state.ammo = AmmoLedger::new([(WeaponType::Falcon, 0)]);
        state.locked_target = nearest_enemy(&state);
        assert!(plan(&state).is_empty());

        state.status = GameStatus::GameOver;
        assert!(plan(&state).is_empty());
    }

    #[test]
    fn test_civilians_are_never_targeted() {
        let (mut state, tables) = playing_state();
        spawn_contact_at(
            &mut state,
            &tables,
            ContactCategory::Civilian,
            DVec2::new(10.0, 10.0),
        );
        assert!(nearest_enemy(&state).is_none());
    }

    #[test]
    fn test_session_reaches_game_over() {
        let metrics = run_session(SimConfig::default(), 200_000);
        assert!(metrics.frame_count < 200_000, "session should end");
        assert!(metrics.outcome.is_some());
        assert!(metrics.launches > 0);
        assert!(metrics.final_score > 0);
    }

    #[test]
    fn test_session_is_deterministic() {
        let a = run_session(SimConfig::default(), 5_000);
        let b = run_session(SimConfig::default(), 5_000);
        assert_eq!(a.frame_count, b.frame_count);
        assert_eq!(a.final_score, b.final_score);
        assert_eq!(a.launches, b.launches);
    }
}
