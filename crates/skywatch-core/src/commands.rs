//! Player intents sent from the presentation layer to the simulation.
//!
//! Intents are applied immediately, between ticks, never during one.

use serde::{Deserialize, Serialize};

use crate::enums::WeaponType;
use crate::types::EntityId;

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Lock a contact as the missile target, or clear the lock with `None`.
    LockTarget { target: Option<EntityId> },
    /// Choose the weapon for the next launch.
    SelectWeapon { weapon: WeaponType },
    /// Fire the selected weapon at the locked target.
    Launch,
    /// Leave the start menu (or a finished game) with a fresh state.
    StartGame,
    /// Discard the current game and start over.
    Restart,
}
