//! State shared between the caller and the game loop thread.

use std::sync::{Arc, Mutex};

use skywatch_core::events::TickEvents;
use skywatch_core::views::RadarSnapshot;
use skywatch_sim::SimulationEngine;

/// Control messages for the game loop thread. Player intents do not travel
/// this way; they are applied directly under the engine lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameLoopCommand {
    /// Stop ticking and let the thread exit.
    Shutdown,
}

/// What the loop publishes after each committed tick.
#[derive(Debug, Clone, Default)]
pub struct Published {
    pub snapshot: Option<RadarSnapshot>,
    pub events: TickEvents,
    /// Ticks committed since the loop started.
    pub ticks: u64,
}

/// Handles shared by the loop thread and its owner.
///
/// The engine mutex is the single writer: the loop holds it for exactly one
/// `advance` per tick, and intents take it between ticks.
#[derive(Clone)]
pub struct SharedState {
    pub engine: Arc<Mutex<SimulationEngine>>,
    pub published: Arc<Mutex<Published>>,
}

impl SharedState {
    pub fn new(engine: SimulationEngine) -> Self {
        Self {
            engine: Arc::new(Mutex::new(engine)),
            published: Arc::new(Mutex::new(Published::default())),
        }
    }
}

#[cfg(test)]
mod tests {
    use skywatch_sim::SimConfig;

    use super::*;

    #[test]
    fn test_shared_state_creation() {
        let shared = SharedState::new(SimulationEngine::new(SimConfig::default()));
        let published = shared.published.lock().unwrap();
        assert!(published.snapshot.is_none());
        assert!(published.events.is_empty());
        assert_eq!(published.ticks, 0);
        assert_eq!(
            shared.engine.lock().unwrap().status(),
            skywatch_core::enums::GameStatus::StartMenu
        );
    }
}
