//! Fire control: the player's lock, weapon selection and launch intents.
//!
//! These are applied between ticks. Lock and select never validate; launch
//! is rejected (state untouched) without a lock or without ammo.

use skywatch_core::enums::WeaponType;
use skywatch_core::state::GameState;
use skywatch_core::tables::GameTables;
use skywatch_core::types::EntityId;

use crate::world_setup;

/// Lock a contact, or clear the lock. Stale ids are tolerated.
pub fn lock_target(state: &mut GameState, target: Option<EntityId>) {
    state.locked_target = target;
}

/// Select the weapon for the next launch. No ammo check.
pub fn select_weapon(state: &mut GameState, weapon: WeaponType) {
    state.selected_weapon = weapon;
}

/// Launch the selected weapon at the locked target.
///
/// Returns the new missile's id, or `None` when the launch is rejected.
/// Civilians are not filtered here; that restriction lives in the UI.
pub fn launch(state: &mut GameState, tables: &GameTables) -> Option<EntityId> {
    let target_id = state.locked_target?;
    let weapon = state.selected_weapon;

    if state.ammo.get(weapon) == 0 {
        log::debug!("launch rejected: {weapon:?} magazine empty");
        return None;
    }
    let Some(profile) = tables.weapon(weapon) else {
        log::warn!("launch rejected: no weapon profile for {weapon:?}");
        return None;
    };
    if !state.ammo.take_one(weapon) {
        return None;
    }

    let id = state.alloc_id();
    state
        .missiles
        .push(world_setup::build_missile(id, weapon, profile, target_id));
    log::debug!(
        "{weapon:?} {id} away at target {target_id}, {} left",
        state.ammo.get(weapon)
    );
    Some(id)
}
