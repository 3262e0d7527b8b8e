//! Snapshot system: builds the display read-model from the game state.
//!
//! Read-only: it never modifies the state.

use skywatch_core::components::{Contact, Explosion, FriendlyMissile};
use skywatch_core::constants::{MARQUEE_MESSAGES, SCAN_FADE_MS};
use skywatch_core::enums::ContactCategory;
use skywatch_core::state::GameState;
use skywatch_core::tables::GameTables;
use skywatch_core::types::{bearing_deg, BASE_POSITION};
use skywatch_core::views::*;

/// Display opacity of a contact at `now_ms`, or `None` when it is hidden.
///
/// A locked contact is always fully drawn. Otherwise it must be visible
/// (not stealthed), scanned at least once and still inside the fade window,
/// fading linearly from 1 to 0 across that window.
pub fn contact_opacity(contact: &Contact, now_ms: f64, locked: bool) -> Option<f64> {
    if locked {
        return Some(1.0);
    }
    if !contact.is_visible || !contact.scan_is_fresh(now_ms) {
        return None;
    }
    let since = now_ms - contact.last_scan_ms;
    Some((1.0 - since / SCAN_FADE_MS).max(0.0))
}

/// Symbol for a contact category.
pub fn contact_symbol(category: ContactCategory, signature_size: f64) -> BlipSymbol {
    match category {
        ContactCategory::Civilian => BlipSymbol::Square { size: 2.0 },
        ContactCategory::Fighter
        | ContactCategory::Bomber
        | ContactCategory::DroneSwarm
        | ContactCategory::StealthFighter
        | ContactCategory::EnemyMissile => BlipSymbol::Circle {
            radius: signature_size,
        },
    }
}

fn contact_blip(contact: &Contact, state: &GameState) -> Option<RadarBlip> {
    let locked = state.is_locked(contact.id);
    let opacity = contact_opacity(contact, state.time_ms, locked)?;
    Some(RadarBlip::Contact {
        id: contact.id,
        position: contact.position,
        category: contact.category,
        symbol: contact_symbol(contact.category, contact.signature_size),
        label: contact.category.label().to_string(),
        opacity,
        locked,
        neutral: contact.category.is_neutral(),
    })
}

fn missile_blip(missile: &FriendlyMissile) -> RadarBlip {
    RadarBlip::Missile {
        id: missile.id,
        position: missile.position,
        weapon: missile.weapon,
        symbol: BlipSymbol::Dot,
    }
}

fn explosion_view(explosion: &Explosion, now_ms: f64) -> ExplosionView {
    let progress = if explosion.duration_ms > 0.0 {
        ((now_ms - explosion.created_ms) / explosion.duration_ms).clamp(0.0, 1.0)
    } else {
        1.0
    };
    ExplosionView {
        id: explosion.id,
        position: explosion.position,
        radius: explosion.radius,
        progress,
    }
}

fn target_view(contact: &Contact) -> TargetView {
    TargetView {
        id: contact.id,
        category: contact.category,
        threat_level: if contact.category.is_neutral() {
            0
        } else {
            contact.threat_level
        },
        range: contact.position.distance(BASE_POSITION),
        bearing: bearing_deg(contact.position),
        speed: contact.speed,
    }
}

fn build_weapons(state: &GameState, tables: &GameTables) -> Vec<WeaponView> {
    state
        .ammo
        .iter()
        .map(|(weapon, ammo)| {
            let (name, description) = tables
                .weapon(weapon)
                .map(|p| (p.name.clone(), p.description.clone()))
                .unwrap_or_else(|| (format!("{weapon:?}"), String::new()));
            WeaponView {
                weapon,
                name,
                description,
                ammo,
                selected: weapon == state.selected_weapon,
            }
        })
        .collect()
}

/// Build a complete `RadarSnapshot` from the current state.
pub fn build_snapshot(state: &GameState, tables: &GameTables) -> RadarSnapshot {
    // Neutrals first so hostiles draw on top.
    let mut blips: Vec<RadarBlip> = state
        .neutrals
        .iter()
        .chain(state.enemies.iter())
        .filter_map(|c| contact_blip(c, state))
        .collect();
    blips.extend(state.missiles.iter().map(missile_blip));

    let locked = state.locked_contact();
    let launch_enabled = locked.is_some_and(|c| !c.category.is_neutral())
        && state.ammo.get(state.selected_weapon) > 0;

    RadarSnapshot {
        status: state.status,
        outcome: state.outcome,
        time_ms: state.time_ms,
        sweep_angle: state.sweep_angle,
        blips,
        explosions: state
            .explosions
            .iter()
            .map(|e| explosion_view(e, state.time_ms))
            .collect(),
        target: locked.map(target_view),
        status_bar: StatusBarView {
            score: state.score,
            level: state.level,
            wave: state.wave,
            base_health: state.base_health,
            time_to_impact_secs: state.time_to_impact_secs,
        },
        weapons: build_weapons(state, tables),
        selected_weapon: state.selected_weapon,
        launch_enabled,
        marquee: MARQUEE_MESSAGES[state.marquee_index % MARQUEE_MESSAGES.len()].to_string(),
    }
}

#[cfg(test)]
mod tests {
    use glam::DVec2;

    use super::*;
    use crate::world_setup::spawn_contact_at;

    fn fighter_state() -> (GameState, GameTables) {
        let tables = GameTables::default();
        let mut state = GameState::new_game(&tables);
        spawn_contact_at(
            &mut state,
            &tables,
            ContactCategory::Fighter,
            DVec2::new(100.0, 0.0),
        );
        (state, tables)
    }

    #[test]
    fn test_never_scanned_contact_hidden() {
        let (state, _) = fighter_state();
        assert!(contact_opacity(&state.enemies[0], 5000.0, false).is_none());
    }

    #[test]
    fn test_opacity_fades_linearly() {
        let (mut state, _) = fighter_state();
        state.enemies[0].last_scan_ms = 1000.0;
        let c = &state.enemies[0];
        assert!((contact_opacity(c, 1000.0, false).unwrap() - 1.0).abs() < 1e-12);
        assert!((contact_opacity(c, 2500.0, false).unwrap() - 0.5).abs() < 1e-12);
        assert!(contact_opacity(c, 4000.0, false).is_none());
    }

    #[test]
    fn test_stealthed_contact_hidden_unless_locked() {
        let (mut state, _) = fighter_state();
        state.enemies[0].last_scan_ms = 1000.0;
        state.enemies[0].is_visible = false;
        assert!(contact_opacity(&state.enemies[0], 1100.0, false).is_none());
        assert_eq!(contact_opacity(&state.enemies[0], 1100.0, true), Some(1.0));
    }

    #[test]
    fn test_snapshot_locked_target_and_launch_gate() {
        let (mut state, tables) = fighter_state();
        let civ = spawn_contact_at(
            &mut state,
            &tables,
            ContactCategory::Civilian,
            DVec2::new(0.0, 50.0),
        )
        .unwrap();

        state.locked_target = Some(state.enemies[0].id);
        let snap = build_snapshot(&state, &tables);
        let target = snap.target.unwrap();
        assert_eq!(target.category, ContactCategory::Fighter);
        assert!((target.range - 100.0).abs() < 1e-9);
        assert!((target.bearing - 90.0).abs() < 1e-9);
        assert!(snap.launch_enabled);
        // Locked contacts draw even if never scanned.
        assert_eq!(snap.blips.len(), 1);

        state.locked_target = Some(civ);
        let snap = build_snapshot(&state, &tables);
        assert_eq!(snap.target.unwrap().threat_level, 0);
        assert!(!snap.launch_enabled, "launching at civilians is disabled");

        state.locked_target = Some(12345);
        let snap = build_snapshot(&state, &tables);
        assert!(snap.target.is_none());
        assert!(!snap.launch_enabled);
    }

    #[test]
    fn test_snapshot_serializes() {
        let (state, tables) = fighter_state();
        let snap = build_snapshot(&state, &tables);
        let json = serde_json::to_string(&snap).unwrap();
        assert!(json.contains("\"status\":\"playing\""));
        assert_eq!(snap.weapons.len(), 6);
        assert_eq!(snap.marquee, "TARGET INFO");
    }
}
