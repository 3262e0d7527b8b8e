//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Radar contact category. `Civilian` is the only neutral category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ContactCategory {
    Fighter,
    Bomber,
    DroneSwarm,
    StealthFighter,
    Civilian,
    /// Inbound hostile missile.
    EnemyMissile,
}

impl ContactCategory {
    pub const ALL: [ContactCategory; 6] = [
        ContactCategory::Fighter,
        ContactCategory::Bomber,
        ContactCategory::DroneSwarm,
        ContactCategory::StealthFighter,
        ContactCategory::Civilian,
        ContactCategory::EnemyMissile,
    ];

    /// Whether contacts of this category belong to the neutral collection.
    pub fn is_neutral(self) -> bool {
        matches!(self, ContactCategory::Civilian)
    }

    /// Whether this category can drop out of radar via stealth flicker.
    pub fn has_stealth(self) -> bool {
        matches!(self, ContactCategory::StealthFighter)
    }

    /// Four-letter display label (e.g. "FIGH", "STEA").
    pub fn label(self) -> &'static str {
        match self {
            ContactCategory::Fighter => "FIGH",
            ContactCategory::Bomber => "BOMB",
            ContactCategory::DroneSwarm => "DRON",
            ContactCategory::StealthFighter => "STEA",
            ContactCategory::Civilian => "CIVI",
            ContactCategory::EnemyMissile => "MISS",
        }
    }
}

/// Friendly interceptor weapon.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum WeaponType {
    /// Slow but plentiful.
    #[default]
    Falcon,
    Grizzly,
    Aegis,
    Emp,
    Viper,
    /// Massive blast, very few rounds.
    Titan,
}

impl WeaponType {
    pub const ALL: [WeaponType; 6] = [
        WeaponType::Falcon,
        WeaponType::Grizzly,
        WeaponType::Aegis,
        WeaponType::Emp,
        WeaponType::Viper,
        WeaponType::Titan,
    ];
}

/// Top-level game status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    #[default]
    StartMenu,
    Playing,
    /// Reserved for multi-level content; the single bundled level ends in `GameOver`.
    LevelComplete,
    GameOver,
}

impl GameStatus {
    /// `GameOver` and `LevelComplete` hold until an explicit restart.
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::GameOver | GameStatus::LevelComplete)
    }
}

/// Why a game ended. Carried for logging and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    /// All waves cleared.
    Victory,
    /// Base health reached zero.
    BaseDestroyed,
    /// No ammo left, nothing in flight, enemies remain.
    AmmoExhausted,
}
