//! Entity spawn factories.
//!
//! Creates contacts from the category profile table and missiles from the
//! weapon profile table.

use glam::DVec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skywatch_core::components::{Contact, FriendlyMissile};
use skywatch_core::constants::*;
use skywatch_core::enums::{ContactCategory, WeaponType};
use skywatch_core::state::GameState;
use skywatch_core::tables::{ContactProfile, GameTables, WeaponProfile};
use skywatch_core::types::{bearing_deg, normalize_deg, EntityId, BASE_POSITION};

/// Spawn a contact at `position` heading for the base. Civilians go to the
/// neutral list, everything else to the enemy list. Returns `None` when the
/// category has no profile.
pub fn spawn_contact_at(
    state: &mut GameState,
    tables: &GameTables,
    category: ContactCategory,
    position: DVec2,
) -> Option<EntityId> {
    let Some(profile) = tables.contact(category) else {
        log::warn!("no contact profile for {category:?}, spawn skipped");
        return None;
    };
    let id = state.alloc_id();
    let contact = build_contact(id, category, profile, position);
    if category.is_neutral() {
        state.neutrals.push(contact);
    } else {
        state.enemies.push(contact);
    }
    Some(id)
}

/// Spawn a contact at a random bearing on the spawn ring (`SPAWN_RANGE_FACTOR`
/// times the radar radius).
pub fn spawn_contact(
    state: &mut GameState,
    tables: &GameTables,
    rng: &mut ChaCha8Rng,
    category: ContactCategory,
) -> Option<EntityId> {
    let bearing: f64 = rng.gen_range(0.0..360.0);
    let range = RADAR_RADIUS * SPAWN_RANGE_FACTOR;
    let rad = bearing.to_radians();
    // Bearing is measured from North (y-axis) clockwise toward East (x-axis).
    let position = DVec2::new(range * rad.sin(), range * rad.cos());
    spawn_contact_at(state, tables, category, position)
}

fn build_contact(
    id: EntityId,
    category: ContactCategory,
    profile: &ContactProfile,
    position: DVec2,
) -> Contact {
    Contact {
        id,
        position,
        // Inbound: heading is the reciprocal of the spawn bearing.
        heading: normalize_deg(bearing_deg(position - BASE_POSITION) + 180.0),
        speed: profile.speed,
        alive: true,
        category,
        threat_level: profile.threat_level,
        signature_size: profile.signature_size,
        is_visible: true,
        last_scan_ms: 0.0,
        evasion: 0.0,
    }
}

/// Build a missile leaving the base toward `target_id`.
pub fn build_missile(
    id: EntityId,
    weapon: WeaponType,
    profile: &WeaponProfile,
    target_id: EntityId,
) -> FriendlyMissile {
    FriendlyMissile {
        id,
        position: BASE_POSITION,
        heading: 0.0,
        speed: profile.speed,
        alive: true,
        weapon,
        target_id,
        blast_radius: profile.blast_radius,
        homing_strength: profile.homing_strength,
        fuse_ms: MISSILE_FUSE_MS,
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_spawn_on_ring_heading_inbound() {
        let tables = GameTables::default();
        let mut state = GameState::new_game(&tables);
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        for _ in 0..20 {
            spawn_contact(&mut state, &tables, &mut rng, ContactCategory::Bomber).unwrap();
        }

        assert_eq!(state.enemies.len(), 20);
        for enemy in &state.enemies {
            let range = enemy.position.length();
            assert!((range - 240.0).abs() < 1e-9, "spawn range {range}");
            assert_eq!(enemy.speed, 0.05);
            assert_eq!(enemy.threat_level, 4);
            assert!(enemy.is_visible);
            assert!(!enemy.ever_scanned());
            let inbound = normalize_deg(bearing_deg(enemy.position) + 180.0);
            assert!((enemy.heading - inbound).abs() < 1e-9);
        }
    }

    #[test]
    fn test_civilians_spawn_as_neutrals() {
        let tables = GameTables::default();
        let mut state = GameState::new_game(&tables);
        spawn_contact_at(
            &mut state,
            &tables,
            ContactCategory::Civilian,
            DVec2::new(0.0, 150.0),
        )
        .unwrap();
        assert!(state.enemies.is_empty());
        assert_eq!(state.neutrals.len(), 1);
        assert_eq!(state.neutrals[0].threat_level, 0);
    }

    #[test]
    fn test_missing_profile_skips_spawn() {
        let mut tables = GameTables::default();
        tables.contacts.remove(&ContactCategory::EnemyMissile);
        let mut state = GameState::new_game(&tables);
        let id = spawn_contact_at(
            &mut state,
            &tables,
            ContactCategory::EnemyMissile,
            DVec2::new(10.0, 10.0),
        );
        assert!(id.is_none());
        assert!(state.enemies.is_empty());
    }
}
