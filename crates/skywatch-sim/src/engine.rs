//! Simulation engine, the core of the game.
//!
//! `step` is the tick reducer: it folds the previous `GameState` and one
//! frame delta into a new state without touching the old one.
//! `SimulationEngine` owns the current state, the tables and the seeded RNG,
//! applies player intents between ticks and drives `step` with frame
//! coalescing. Completely headless, enabling deterministic testing.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use skywatch_core::commands::PlayerCommand;
use skywatch_core::constants::{FRAME_BUDGET_MS, MARQUEE_INTERVAL_MS, MARQUEE_MESSAGES};
use skywatch_core::enums::{GameStatus, WeaponType};
use skywatch_core::events::{AudioEvent, TickEvents};
use skywatch_core::state::GameState;
use skywatch_core::tables::GameTables;
use skywatch_core::types::EntityId;
use skywatch_core::views::RadarSnapshot;

use crate::systems;
use crate::systems::progression::Progress;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed and deltas = same simulation.
    pub seed: u64,
    pub tables: GameTables,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tables: GameTables::default(),
        }
    }
}

/// A new state and the signals raised while producing it.
#[derive(Debug, Clone)]
pub struct TickOutcome {
    pub state: GameState,
    pub events: TickEvents,
}

/// Run one simulation step.
///
/// Order: clock → radar → movement → intercept → cleanup → base impact →
/// loss / victory / wave advance → stealth flicker → time-to-impact →
/// marquee. A step that ends the game skips everything after progression;
/// a step that spawns a wave skips stealth and time-to-impact.
pub fn step(
    prev: &GameState,
    elapsed_ms: f64,
    tables: &GameTables,
    rng: &mut ChaCha8Rng,
) -> TickOutcome {
    let mut state = prev.clone();
    let mut events = TickEvents::default();

    if state.status != GameStatus::Playing {
        return TickOutcome { state, events };
    }

    state.time_ms += elapsed_ms;

    let radar = systems::radar::run(&mut state, elapsed_ms);
    events.sweep_completed = radar.sweep_completed;
    events.new_detection = radar.new_detection;

    systems::movement::run(&mut state);
    events.hit = systems::intercept::run(&mut state).is_hit();
    systems::cleanup::run(&mut state);
    systems::impact::run(&mut state);

    match systems::progression::run(&mut state, tables, rng) {
        Progress::Ended(_) => return TickOutcome { state, events },
        // A fresh wave keeps last tick's flicker and telemetry.
        Progress::WaveSpawned(_) => {}
        Progress::Continue => {
            systems::stealth::run(&mut state, rng);
            systems::progression::update_time_to_impact(&mut state);
        }
    }

    state.marquee_index =
        (state.time_ms / MARQUEE_INTERVAL_MS) as usize % MARQUEE_MESSAGES.len();

    TickOutcome { state, events }
}

/// The simulation engine. Owns the current state and all sim resources.
pub struct SimulationEngine {
    state: GameState,
    tables: GameTables,
    rng: ChaCha8Rng,
    audio_events: Vec<AudioEvent>,
}

impl SimulationEngine {
    /// Create an engine sitting at the start menu.
    pub fn new(config: SimConfig) -> Self {
        let state = GameState::new(&config.tables);
        Self::with_state(config, state)
    }

    /// Create an engine around an existing state (replays, scripted setups).
    pub fn with_state(config: SimConfig, state: GameState) -> Self {
        Self {
            state,
            tables: config.tables,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            audio_events: Vec::new(),
        }
    }

    /// Current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn tables(&self) -> &GameTables {
        &self.tables
    }

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    /// Mutable access for scripted setups.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Display read-model of the current state.
    pub fn snapshot(&self) -> RadarSnapshot {
        systems::snapshot::build_snapshot(&self.state, &self.tables)
    }

    /// Drain audio cues raised since the last call (ticks and launches).
    pub fn take_audio_events(&mut self) -> Vec<AudioEvent> {
        std::mem::take(&mut self.audio_events)
    }

    /// Run one step if the game is playing and `elapsed_ms` covers a frame.
    /// Shorter deltas are dropped, not carried over.
    pub fn advance(&mut self, elapsed_ms: f64) -> TickEvents {
        if self.state.status != GameStatus::Playing
            || !elapsed_ms.is_finite()
            || elapsed_ms < FRAME_BUDGET_MS
        {
            return TickEvents::default();
        }

        let outcome = step(&self.state, elapsed_ms, &self.tables, &mut self.rng);
        self.state = outcome.state;
        self.audio_events.extend(outcome.events.audio_events());
        outcome.events
    }

    /// Leave the start menu, or begin again after a finished game.
    /// Ignored while a game is in progress.
    pub fn start(&mut self) {
        if self.state.status == GameStatus::StartMenu || self.state.status.is_terminal() {
            self.restart();
        }
    }

    /// Replace the state with a fresh game, discarding any game in progress.
    pub fn restart(&mut self) {
        self.state = GameState::new_game(&self.tables);
        self.audio_events.clear();
        log::info!("new game started");
    }

    pub fn lock_target(&mut self, target: Option<EntityId>) {
        systems::fire_control::lock_target(&mut self.state, target);
    }

    pub fn select_weapon(&mut self, weapon: WeaponType) {
        systems::fire_control::select_weapon(&mut self.state, weapon);
    }

    /// Launch at the locked target. Returns false if the launch was rejected.
    pub fn launch(&mut self) -> bool {
        let weapon = self.state.selected_weapon;
        match systems::fire_control::launch(&mut self.state, &self.tables) {
            Some(_) => {
                self.audio_events.push(AudioEvent::Launch { weapon });
                true
            }
            None => false,
        }
    }

    /// Apply a player command immediately.
    pub fn apply(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::LockTarget { target } => self.lock_target(target),
            PlayerCommand::SelectWeapon { weapon } => self.select_weapon(weapon),
            PlayerCommand::Launch => {
                self.launch();
            }
            PlayerCommand::StartGame => self.start(),
            PlayerCommand::Restart => self.restart(),
        }
    }
}
