//! Game state: the complete simulation snapshot folded once per tick.

use serde::{Deserialize, Serialize};

use crate::components::*;
use crate::constants::BASE_MAX_HEALTH;
use crate::enums::*;
use crate::tables::GameTables;
use crate::types::EntityId;

/// Everything the simulation knows. One new value is derived per tick;
/// player intents update the current value between ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub status: GameStatus,
    /// Set when the game ends.
    pub outcome: Option<GameOutcome>,
    pub score: u32,
    /// 1-based level number.
    pub level: u32,
    /// Number of waves spawned so far in the current level.
    pub wave: u32,
    /// 0–100; may go negative on the killing blow.
    pub base_health: i32,
    /// Simulation clock (ms), the sum of all applied frame deltas.
    pub time_ms: f64,
    /// Sweep angle in degrees, `[0, 360)`.
    pub sweep_angle: f64,
    pub enemies: Vec<Contact>,
    pub neutrals: Vec<Contact>,
    pub missiles: Vec<FriendlyMissile>,
    pub explosions: Vec<Explosion>,
    /// May go stale; resolved on read.
    pub locked_target: Option<EntityId>,
    pub selected_weapon: WeaponType,
    pub ammo: AmmoLedger,
    /// Seconds until the nearest enemy reaches the base; `None` when no enemies remain.
    pub time_to_impact_secs: Option<f64>,
    /// Index into the status marquee messages.
    pub marquee_index: usize,
    pub next_id: EntityId,
}

impl GameState {
    /// Fresh state sitting at the start menu, with ammo issued from `tables`.
    pub fn new(tables: &GameTables) -> Self {
        let ammo = AmmoLedger::new(
            WeaponType::ALL
                .into_iter()
                .map(|w| (w, tables.weapon(w).map(|p| p.initial_ammo).unwrap_or(0))),
        );
        Self {
            status: GameStatus::StartMenu,
            outcome: None,
            score: 0,
            level: 1,
            wave: 0,
            base_health: BASE_MAX_HEALTH,
            time_ms: 0.0,
            sweep_angle: 0.0,
            enemies: Vec::new(),
            neutrals: Vec::new(),
            missiles: Vec::new(),
            explosions: Vec::new(),
            locked_target: None,
            selected_weapon: WeaponType::default(),
            ammo,
            time_to_impact_secs: None,
            marquee_index: 0,
            next_id: 1,
        }
    }

    /// Fresh state already in `Playing`.
    pub fn new_game(tables: &GameTables) -> Self {
        Self {
            status: GameStatus::Playing,
            ..Self::new(tables)
        }
    }

    /// Allocate the next entity id.
    pub fn alloc_id(&mut self) -> EntityId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn enemy(&self, id: EntityId) -> Option<&Contact> {
        self.enemies.iter().find(|e| e.id == id)
    }

    /// The locked contact, if the lock still refers to a live enemy or neutral.
    pub fn locked_contact(&self) -> Option<&Contact> {
        let id = self.locked_target?;
        self.enemies
            .iter()
            .chain(self.neutrals.iter())
            .find(|c| c.id == id && c.alive)
    }

    pub fn is_locked(&self, id: EntityId) -> bool {
        self.locked_target == Some(id)
    }
}
