//! Observational signals emitted by the simulation for audio feedback.
//!
//! Each per-tick signal fires at most once per tick, however many
//! contacts caused it.

use serde::{Deserialize, Serialize};

use crate::enums::WeaponType;

/// Audio cue for the frontend sound system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// Sweep wrapped past North.
    SweepCompleted,
    /// A contact that had faded out was painted again.
    NewDetection,
    /// At least one enemy destroyed this tick.
    Hit,
    /// Missile launched (emitted by the launch intent, not the tick).
    Launch { weapon: WeaponType },
}

/// Signals raised by a single tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickEvents {
    pub sweep_completed: bool,
    pub new_detection: bool,
    pub hit: bool,
}

impl TickEvents {
    pub fn is_empty(&self) -> bool {
        !(self.sweep_completed || self.new_detection || self.hit)
    }

    /// Flatten into audio cues, in a stable order.
    pub fn audio_events(&self) -> Vec<AudioEvent> {
        let mut events = Vec::new();
        if self.sweep_completed {
            events.push(AudioEvent::SweepCompleted);
        }
        if self.new_detection {
            events.push(AudioEvent::NewDetection);
        }
        if self.hit {
            events.push(AudioEvent::Hit);
        }
        events
    }
}
