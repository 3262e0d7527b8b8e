//! Static configuration tables: weapon profiles, contact profiles and
//! level/wave definitions.
//!
//! The simulation borrows these; it never mutates them. `GameTables::default()`
//! is the stock content, `GameTables::from_json` loads a replacement set.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::enums::{ContactCategory, WeaponType};

/// Launch parameters for a weapon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaponProfile {
    pub name: String,
    pub description: String,
    /// Distance units per tick.
    pub speed: f64,
    pub blast_radius: f64,
    pub homing_strength: f64,
    /// Rounds issued at game start.
    pub initial_ammo: u32,
}

/// Spawn parameters for a contact category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContactProfile {
    /// Distance units per tick.
    pub speed: f64,
    pub threat_level: u8,
    pub signature_size: f64,
}

/// A batch of identical contacts within a wave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaveGroup {
    pub category: ContactCategory,
    pub count: u32,
}

/// One wave: every group spawns at once.
pub type WaveDefinition = Vec<WaveGroup>;

/// An ordered sequence of waves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelDefinition {
    pub waves: Vec<WaveDefinition>,
}

/// Errors from loading or validating tables.
#[derive(Debug, Error)]
pub enum TablesError {
    #[error("malformed tables JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no weapon profile for {0:?}")]
    MissingWeapon(WeaponType),
    #[error("no contact profile for {0:?}")]
    MissingContact(ContactCategory),
    #[error("threat level {level} for {category:?} exceeds 5")]
    ThreatLevelOutOfRange { category: ContactCategory, level: u8 },
    #[error("level table is empty")]
    NoLevels,
}

/// Every static table the simulation consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameTables {
    pub weapons: BTreeMap<WeaponType, WeaponProfile>,
    pub contacts: BTreeMap<ContactCategory, ContactProfile>,
    pub levels: Vec<LevelDefinition>,
}

impl GameTables {
    /// Parse and validate a table set from JSON.
    pub fn from_json(json: &str) -> Result<Self, TablesError> {
        let tables: GameTables = serde_json::from_str(json)?;
        tables.validate()?;
        Ok(tables)
    }

    /// Check that every weapon and category has a profile and at least one level exists.
    pub fn validate(&self) -> Result<(), TablesError> {
        for weapon in WeaponType::ALL {
            if !self.weapons.contains_key(&weapon) {
                return Err(TablesError::MissingWeapon(weapon));
            }
        }
        for category in ContactCategory::ALL {
            match self.contacts.get(&category) {
                None => return Err(TablesError::MissingContact(category)),
                Some(profile) if profile.threat_level > 5 => {
                    return Err(TablesError::ThreatLevelOutOfRange {
                        category,
                        level: profile.threat_level,
                    })
                }
                Some(_) => {}
            }
        }
        if self.levels.is_empty() {
            return Err(TablesError::NoLevels);
        }
        Ok(())
    }

    pub fn weapon(&self, weapon: WeaponType) -> Option<&WeaponProfile> {
        self.weapons.get(&weapon)
    }

    pub fn contact(&self, category: ContactCategory) -> Option<&ContactProfile> {
        self.contacts.get(&category)
    }

    /// Level by 1-based number.
    pub fn level(&self, level: u32) -> Option<&LevelDefinition> {
        let index = usize::try_from(level).ok()?.checked_sub(1)?;
        self.levels.get(index)
    }

    /// Wave by 1-based level and 1-based wave number.
    pub fn wave(&self, level: u32, wave: u32) -> Option<&WaveDefinition> {
        let index = usize::try_from(wave).ok()?.checked_sub(1)?;
        self.level(level)?.waves.get(index)
    }

    /// Number of waves in a level; 0 for a missing level.
    pub fn wave_count(&self, level: u32) -> u32 {
        self.level(level)
            .map(|l| l.waves.len() as u32)
            .unwrap_or(0)
    }
}

impl Default for GameTables {
    fn default() -> Self {
        use ContactCategory::*;

        let weapon = |name: &str, description: &str, speed, blast_radius, homing_strength, ammo| {
            WeaponProfile {
                name: name.to_string(),
                description: description.to_string(),
                speed,
                blast_radius,
                homing_strength,
                initial_ammo: ammo,
            }
        };
        let weapons = BTreeMap::from([
            (
                WeaponType::Falcon,
                weapon(
                    "Falcon",
                    "Slow but plentiful missile. Best for predictable targets.",
                    0.4,
                    15.0,
                    0.9,
                    20,
                ),
            ),
            (
                WeaponType::Grizzly,
                weapon(
                    "Grizzly",
                    "Very fast missile with a large blast radius. For bombers/swarms.",
                    1.4,
                    50.0,
                    0.5,
                    5,
                ),
            ),
            (
                WeaponType::Aegis,
                weapon(
                    "Aegis",
                    "A standard, agile interceptor for fast-moving threats.",
                    1.0,
                    10.0,
                    1.0,
                    10,
                ),
            ),
            (
                WeaponType::Emp,
                weapon(
                    "EMP",
                    "Destroys all units in a massive electronic burst.",
                    1.7,
                    60.0,
                    0.6,
                    3,
                ),
            ),
            (
                WeaponType::Viper,
                weapon(
                    "Viper",
                    "A nimble micro-missile for agile single targets.",
                    0.6,
                    8.0,
                    0.95,
                    15,
                ),
            ),
            (
                WeaponType::Titan,
                weapon(
                    "Titan",
                    "Devastating warhead, massive blast. Extremely fast deployment.",
                    2.0,
                    80.0,
                    0.3,
                    2,
                ),
            ),
        ]);

        let contact = |speed, threat_level, signature_size| ContactProfile {
            speed,
            threat_level,
            signature_size,
        };
        let contacts = BTreeMap::from([
            (Fighter, contact(0.1, 2, 0.8)),
            (Bomber, contact(0.05, 4, 1.5)),
            (DroneSwarm, contact(0.04, 1, 0.5)),
            (StealthFighter, contact(0.12, 5, 0.6)),
            (Civilian, contact(0.05, 0, 1.2)),
            (EnemyMissile, contact(0.2, 3, 0.4)),
        ]);

        let group = |category, count| WaveGroup { category, count };
        let levels = vec![LevelDefinition {
            waves: vec![
                vec![group(Fighter, 2)],
                vec![group(Fighter, 3)],
                vec![group(Bomber, 1), group(Fighter, 2)],
                vec![group(DroneSwarm, 5)],
                vec![group(Bomber, 2), group(StealthFighter, 1)],
            ],
        }];

        Self {
            weapons,
            contacts,
            levels,
        }
    }
}
