//! Stealth flicker.
//!
//! Inside radar range each stealth fighter independently toggles its
//! visibility with a small fixed probability per tick. Outside radar range
//! it is always visible.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skywatch_core::constants::{RADAR_RADIUS, STEALTH_FLICKER_PROBABILITY};
use skywatch_core::state::GameState;
use skywatch_core::types::BASE_POSITION;

pub fn run(state: &mut GameState, rng: &mut ChaCha8Rng) {
    for enemy in state.enemies.iter_mut().filter(|e| e.category.has_stealth()) {
        if enemy.position.distance(BASE_POSITION) < RADAR_RADIUS {
            if rng.gen_bool(STEALTH_FLICKER_PROBABILITY) {
                enemy.is_visible = !enemy.is_visible;
            }
        } else {
            enemy.is_visible = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::DVec2;
    use rand::SeedableRng;

    use skywatch_core::enums::ContactCategory;
    use skywatch_core::tables::GameTables;

    use super::*;
    use crate::world_setup::spawn_contact_at;

    #[test]
    fn test_outside_radar_forced_visible() {
        let tables = GameTables::default();
        let mut state = GameState::new_game(&tables);
        spawn_contact_at(
            &mut state,
            &tables,
            ContactCategory::StealthFighter,
            DVec2::new(0.0, 230.0),
        );
        state.enemies[0].is_visible = false;

        let mut rng = ChaCha8Rng::seed_from_u64(1);
        run(&mut state, &mut rng);
        assert!(state.enemies[0].is_visible);
    }

    #[test]
    fn test_inside_radar_flickers_at_low_rate() {
        let tables = GameTables::default();
        let mut state = GameState::new_game(&tables);
        spawn_contact_at(
            &mut state,
            &tables,
            ContactCategory::StealthFighter,
            DVec2::new(0.0, 100.0),
        );
        spawn_contact_at(
            &mut state,
            &tables,
            ContactCategory::Fighter,
            DVec2::new(0.0, 100.0),
        );

        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let mut toggles = 0;
        let mut last = state.enemies[0].is_visible;
        for _ in 0..5000 {
            run(&mut state, &mut rng);
            if state.enemies[0].is_visible != last {
                toggles += 1;
                last = state.enemies[0].is_visible;
            }
            assert!(state.enemies[1].is_visible, "fighters never flicker");
        }
        // Expected ~100 toggles at 2% per tick.
        assert!((50..200).contains(&toggles), "toggles = {toggles}");
    }
}
