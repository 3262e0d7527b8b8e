#[cfg(test)]
mod tests {
    use glam::DVec2;

    use crate::commands::PlayerCommand;
    use crate::components::{AmmoLedger, Contact, Explosion};
    use crate::constants::*;
    use crate::enums::*;
    use crate::events::{AudioEvent, TickEvents};
    use crate::state::GameState;
    use crate::tables::{GameTables, TablesError};

    fn contact(id: u32, category: ContactCategory) -> Contact {
        Contact {
            id,
            position: DVec2::new(100.0, 0.0),
            heading: 90.0,
            speed: 0.1,
            alive: true,
            category,
            threat_level: 2,
            signature_size: 0.8,
            is_visible: true,
            last_scan_ms: 0.0,
            evasion: 0.0,
        }
    }

    #[test]
    fn test_default_tables_validate() {
        let tables = GameTables::default();
        tables.validate().unwrap();
        assert_eq!(tables.wave_count(1), 5);
        assert_eq!(tables.wave_count(2), 0);
        assert_eq!(tables.weapon(WeaponType::Titan).unwrap().blast_radius, 80.0);
        assert_eq!(tables.contact(ContactCategory::Fighter).unwrap().speed, 0.1);
    }

    #[test]
    fn test_wave_lookup_is_one_based() {
        let tables = GameTables::default();
        assert!(tables.wave(1, 0).is_none());
        assert_eq!(tables.wave(1, 1).unwrap()[0].count, 2);
        assert_eq!(tables.wave(1, 5).unwrap().len(), 2);
        assert!(tables.wave(1, 6).is_none());
        assert!(tables.wave(0, 1).is_none());
    }

    #[test]
    fn test_tables_json_loads() {
        let json = serde_json::to_string(&GameTables::default()).unwrap();
        let loaded = GameTables::from_json(&json).unwrap();
        assert_eq!(loaded, GameTables::default());
    }

    #[test]
    fn test_tables_json_rejects_missing_weapon() {
        let mut tables = GameTables::default();
        tables.weapons.remove(&WeaponType::Emp);
        let json = serde_json::to_string(&tables).unwrap();
        let err = GameTables::from_json(&json).unwrap_err();
        assert!(matches!(err, TablesError::MissingWeapon(WeaponType::Emp)));
    }

    #[test]
    fn test_tables_json_rejects_garbage() {
        let err = GameTables::from_json("{ not json").unwrap_err();
        assert!(matches!(err, TablesError::Json(_)));
    }

    #[test]
    fn test_tables_reject_threat_level_above_five() {
        let mut tables = GameTables::default();
        tables
            .contacts
            .get_mut(&ContactCategory::Bomber)
            .unwrap()
            .threat_level = 6;
        assert!(matches!(
            tables.validate(),
            Err(TablesError::ThreatLevelOutOfRange { level: 6, .. })
        ));
    }

    #[test]
    fn test_ammo_ledger_never_negative() {
        let mut ammo = AmmoLedger::new([(WeaponType::Titan, 1)]);
        assert!(ammo.take_one(WeaponType::Titan));
        assert!(!ammo.take_one(WeaponType::Titan));
        assert_eq!(ammo.get(WeaponType::Titan), 0);
        assert!(!ammo.take_one(WeaponType::Falcon));
        assert_eq!(ammo.total(), 0);
    }

    #[test]
    fn test_new_state_issues_initial_ammo() {
        let state = GameState::new(&GameTables::default());
        assert_eq!(state.status, GameStatus::StartMenu);
        assert_eq!(state.base_health, 100);
        assert_eq!(state.level, 1);
        assert_eq!(state.wave, 0);
        assert_eq!(state.selected_weapon, WeaponType::Falcon);
        assert_eq!(state.ammo.get(WeaponType::Falcon), 20);
        assert_eq!(state.ammo.get(WeaponType::Titan), 2);
        assert_eq!(state.ammo.total(), 55);
        assert!(state.time_to_impact_secs.is_none());

        let playing = GameState::new_game(&GameTables::default());
        assert_eq!(playing.status, GameStatus::Playing);
    }

    #[test]
    fn test_alloc_id_is_monotonic() {
        let mut state = GameState::new(&GameTables::default());
        let a = state.alloc_id();
        let b = state.alloc_id();
        assert!(b > a);
        assert!(a > 0);
    }

    #[test]
    fn test_locked_contact_resolves_neutrals_and_tolerates_stale_ids() {
        let mut state = GameState::new(&GameTables::default());
        state.enemies.push(contact(1, ContactCategory::Fighter));
        state.neutrals.push(contact(2, ContactCategory::Civilian));

        state.locked_target = Some(2);
        assert_eq!(
            state.locked_contact().unwrap().category,
            ContactCategory::Civilian
        );

        state.locked_target = Some(99);
        assert!(state.locked_contact().is_none());
        assert!(state.is_locked(99));
    }

    #[test]
    fn test_scan_freshness() {
        let mut c = contact(1, ContactCategory::Fighter);
        assert!(!c.scan_is_fresh(100.0), "never-scanned contact is not fresh");
        c.last_scan_ms = 1000.0;
        assert!(c.scan_is_fresh(1000.0 + SCAN_FADE_MS - 1.0));
        assert!(!c.scan_is_fresh(1000.0 + SCAN_FADE_MS));
    }

    #[test]
    fn test_explosion_expiry() {
        let explosion = Explosion {
            id: 1,
            position: DVec2::ZERO,
            radius: 15.0,
            created_ms: 200.0,
            duration_ms: EXPLOSION_DURATION_MS,
        };
        assert!(!explosion.is_expired(699.0));
        assert!(explosion.is_expired(700.0));
    }

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_string(&GameStatus::StartMenu).unwrap();
        assert_eq!(json, "\"start_menu\"");
        let back: GameStatus = serde_json::from_str("\"level_complete\"").unwrap();
        assert_eq!(back, GameStatus::LevelComplete);
        assert!(GameStatus::GameOver.is_terminal());
        assert!(!GameStatus::Playing.is_terminal());
    }

    /// PlayerCommand is a tagged union on the wire.
    #[test]
    fn test_player_command_wire_format() {
        let json = serde_json::to_string(&PlayerCommand::LockTarget { target: Some(7) }).unwrap();
        assert_eq!(json, r#"{"type":"LockTarget","target":7}"#);

        let cmd: PlayerCommand =
            serde_json::from_str(r#"{"type":"SelectWeapon","weapon":"Titan"}"#).unwrap();
        assert_eq!(
            cmd,
            PlayerCommand::SelectWeapon {
                weapon: WeaponType::Titan
            }
        );

        let cmd: PlayerCommand = serde_json::from_str(r#"{"type":"Launch"}"#).unwrap();
        assert_eq!(cmd, PlayerCommand::Launch);
    }

    #[test]
    fn test_tick_events_flatten_in_order() {
        let events = TickEvents {
            sweep_completed: true,
            new_detection: false,
            hit: true,
        };
        assert!(!events.is_empty());
        assert_eq!(
            events.audio_events(),
            vec![AudioEvent::SweepCompleted, AudioEvent::Hit]
        );
        assert!(TickEvents::default().is_empty());
    }

    #[test]
    fn test_category_dispatch() {
        assert!(ContactCategory::Civilian.is_neutral());
        assert!(!ContactCategory::EnemyMissile.is_neutral());
        assert!(ContactCategory::StealthFighter.has_stealth());
        assert_eq!(ContactCategory::DroneSwarm.label(), "DRON");
    }
}
