//! Display read-model: what the presentation layer draws each frame.
//!
//! Built from a `GameState` by the simulation; never fed back into it.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::EntityId;

/// Complete display state published after each tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarSnapshot {
    pub status: GameStatus,
    pub outcome: Option<GameOutcome>,
    pub time_ms: f64,
    pub sweep_angle: f64,
    pub blips: Vec<RadarBlip>,
    pub explosions: Vec<ExplosionView>,
    pub target: Option<TargetView>,
    pub status_bar: StatusBarView,
    pub weapons: Vec<WeaponView>,
    pub selected_weapon: WeaponType,
    /// Whether the launch control should be enabled.
    pub launch_enabled: bool,
    pub marquee: String,
}

/// Shape used to draw a blip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape")]
pub enum BlipSymbol {
    /// Hostile aircraft and missiles, scaled by radar signature.
    Circle { radius: f64 },
    /// Civilian traffic.
    Square { size: f64 },
    /// Friendly interceptor.
    Dot,
}

/// One drawable radar return.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum RadarBlip {
    Contact {
        id: EntityId,
        position: DVec2,
        category: ContactCategory,
        symbol: BlipSymbol,
        label: String,
        /// 0.0–1.0 phosphor fade.
        opacity: f64,
        locked: bool,
        neutral: bool,
    },
    Missile {
        id: EntityId,
        position: DVec2,
        weapon: WeaponType,
        symbol: BlipSymbol,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplosionView {
    pub id: EntityId,
    pub position: DVec2,
    pub radius: f64,
    /// 0.0 at detonation, 1.0 when the marker expires.
    pub progress: f64,
}

/// Locked target details for the info panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetView {
    pub id: EntityId,
    pub category: ContactCategory,
    /// Shown as 0 for civilians.
    pub threat_level: u8,
    pub range: f64,
    pub bearing: f64,
    pub speed: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusBarView {
    pub score: u32,
    pub level: u32,
    pub wave: u32,
    pub base_health: i32,
    /// `None` when no enemies remain.
    pub time_to_impact_secs: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaponView {
    pub weapon: WeaponType,
    pub name: String,
    pub description: String,
    pub ammo: u32,
    pub selected: bool,
}
