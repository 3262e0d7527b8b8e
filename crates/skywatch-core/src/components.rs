//! Entity data: radar contacts, friendly missiles, explosions and the ammo ledger.
//!
//! Components are plain data structs. Game logic lives in the simulation
//! systems, not here.

use std::collections::BTreeMap;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::SCAN_FADE_MS;
use crate::enums::*;
use crate::types::EntityId;

/// Enemy or neutral unit tracked on radar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: EntityId,
    pub position: DVec2,
    /// Spawn bearing in degrees.
    pub heading: f64,
    /// Distance units per tick.
    pub speed: f64,
    pub alive: bool,
    pub category: ContactCategory,
    /// Threat level 0–5.
    pub threat_level: u8,
    /// Radar signature size (display radius).
    pub signature_size: f64,
    /// Stealth flicker state. False hides the contact from the display.
    pub is_visible: bool,
    /// Simulation time (ms) of the last sweep hit. 0 means never detected.
    pub last_scan_ms: f64,
    /// Evasion probability. Not consulted by combat resolution.
    pub evasion: f64,
}

impl Contact {
    /// Whether the sweep has ever painted this contact.
    pub fn ever_scanned(&self) -> bool {
        self.last_scan_ms > 0.0
    }

    /// Whether the last sweep hit is still inside the fade window at `now_ms`.
    /// Never-scanned contacts are never fresh.
    pub fn scan_is_fresh(&self, now_ms: f64) -> bool {
        self.ever_scanned() && now_ms - self.last_scan_ms < SCAN_FADE_MS
    }
}

/// Friendly interceptor missile homing on a locked contact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FriendlyMissile {
    pub id: EntityId,
    pub position: DVec2,
    pub heading: f64,
    pub speed: f64,
    pub alive: bool,
    pub weapon: WeaponType,
    /// Contact this missile homes on. Missing target means the missile is spent.
    pub target_id: EntityId,
    pub blast_radius: f64,
    /// Steering blend factor. Not consulted by guidance.
    pub homing_strength: f64,
    /// Fuse timer (ms) set at launch. Not consulted by detonation.
    pub fuse_ms: f64,
}

/// Transient detonation marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explosion {
    pub id: EntityId,
    pub position: DVec2,
    pub radius: f64,
    pub created_ms: f64,
    pub duration_ms: f64,
}

impl Explosion {
    pub fn is_expired(&self, now_ms: f64) -> bool {
        now_ms - self.created_ms >= self.duration_ms
    }
}

/// Remaining rounds per weapon.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AmmoLedger {
    counts: BTreeMap<WeaponType, u32>,
}

impl AmmoLedger {
    pub fn new(counts: impl IntoIterator<Item = (WeaponType, u32)>) -> Self {
        Self {
            counts: counts.into_iter().collect(),
        }
    }

    /// Remaining rounds for `weapon`; unknown weapons have none.
    pub fn get(&self, weapon: WeaponType) -> u32 {
        self.counts.get(&weapon).copied().unwrap_or(0)
    }

    /// Take one round. Returns false (and changes nothing) when empty.
    pub fn take_one(&mut self, weapon: WeaponType) -> bool {
        match self.counts.get_mut(&weapon) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        }
    }

    /// Rounds remaining across all weapons.
    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (WeaponType, u32)> + '_ {
        self.counts.iter().map(|(w, c)| (*w, *c))
    }
}
