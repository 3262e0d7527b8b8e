//! Game loop thread: drives the simulation engine at 60Hz on wall-clock time.
//!
//! The engine lives behind a mutex shared with the owner. Each tick the loop
//! locks it once, advances it by the measured delta and publishes the new
//! snapshot. A delta shorter than one frame is not consumed, so the next
//! wake-up sees the accumulated time. Control messages arrive via `mpsc`.

use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use skywatch_core::commands::PlayerCommand;
use skywatch_core::constants::{FRAME_BUDGET_MS, FRAME_RATE};
use skywatch_core::events::{AudioEvent, TickEvents};
use skywatch_core::state::GameState;
use skywatch_core::views::RadarSnapshot;
use skywatch_sim::{SimConfig, SimulationEngine};

use crate::error::AppError;
use crate::state::{GameLoopCommand, SharedState};

/// Nominal duration of one frame.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / FRAME_RATE as u64);

/// Owner handle for a running game loop thread.
pub struct GameLoop {
    shared: SharedState,
    control_tx: mpsc::Sender<GameLoopCommand>,
    handle: Option<JoinHandle<()>>,
}

impl GameLoop {
    /// Spawn the loop around a new engine sitting at the start menu.
    pub fn spawn(config: SimConfig) -> Result<Self, AppError> {
        Self::spawn_engine(SimulationEngine::new(config))
    }

    /// Spawn the loop around an existing engine.
    pub fn spawn_engine(engine: SimulationEngine) -> Result<Self, AppError> {
        let shared = SharedState::new(engine);
        let (control_tx, control_rx) = mpsc::channel::<GameLoopCommand>();

        let thread_shared = shared.clone();
        let handle = std::thread::Builder::new()
            .name("skywatch-game-loop".into())
            .spawn(move || run_game_loop(&thread_shared, control_rx))?;

        log::info!("game loop started");
        Ok(Self {
            shared,
            control_tx,
            handle: Some(handle),
        })
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Apply a player intent now, between ticks.
    pub fn send(&self, command: PlayerCommand) -> Result<(), AppError> {
        if !self.is_running() {
            return Err(AppError::LoopStopped);
        }
        let mut engine = self.shared.engine.lock()?;
        log::debug!("applying {command:?}");
        engine.apply(command);
        Ok(())
    }

    /// Snapshot published by the most recent committed tick.
    pub fn latest_snapshot(&self) -> Result<Option<RadarSnapshot>, AppError> {
        Ok(self.shared.published.lock()?.snapshot.clone())
    }

    /// Signals raised by the most recent committed tick.
    pub fn latest_events(&self) -> Result<TickEvents, AppError> {
        Ok(self.shared.published.lock()?.events)
    }

    /// Ticks committed so far.
    pub fn ticks(&self) -> Result<u64, AppError> {
        Ok(self.shared.published.lock()?.ticks)
    }

    /// Copy of the last committed state. Still readable after shutdown.
    pub fn state(&self) -> Result<GameState, AppError> {
        Ok(self.shared.engine.lock()?.state().clone())
    }

    /// Drain queued audio cues.
    pub fn take_audio_events(&self) -> Result<Vec<AudioEvent>, AppError> {
        Ok(self.shared.engine.lock()?.take_audio_events())
    }

    /// Stop the loop and wait for the thread. The engine keeps its last
    /// committed state. Calling this twice is a no-op.
    pub fn shutdown(&mut self) -> Result<(), AppError> {
        let Some(handle) = self.handle.take() else {
            return Ok(());
        };
        // The thread may already be gone; joining tells us how it ended.
        let _ = self.control_tx.send(GameLoopCommand::Shutdown);
        handle.join().map_err(|_| AppError::LoopStopped)?;
        log::info!("game loop stopped");
        Ok(())
    }
}

impl Drop for GameLoop {
    fn drop(&mut self) {
        if let Err(err) = self.shutdown() {
            log::warn!("game loop did not stop cleanly: {err}");
        }
    }
}

/// Run one tick if at least a frame has passed since `last_tick`.
/// Returns true when the engine was advanced.
fn tick_once(shared: &SharedState, last_tick: &mut Instant, now: Instant) -> bool {
    let elapsed_ms = now.duration_since(*last_tick).as_secs_f64() * 1000.0;
    if elapsed_ms < FRAME_BUDGET_MS {
        return false;
    }
    *last_tick = now;

    let (snapshot, events) = {
        let Ok(mut engine) = shared.engine.lock() else {
            return false;
        };
        let events = engine.advance(elapsed_ms);
        (engine.snapshot(), events)
    };

    if let Ok(mut published) = shared.published.lock() {
        published.snapshot = Some(snapshot);
        published.events = events;
        published.ticks += 1;
    }
    true
}

/// The game loop. Runs until Shutdown, channel disconnect, or a poisoned lock.
fn run_game_loop(shared: &SharedState, control_rx: mpsc::Receiver<GameLoopCommand>) {
    let mut last_tick = Instant::now();

    loop {
        if shared.engine.is_poisoned() {
            log::error!("engine lock poisoned, game loop exiting");
            return;
        }

        tick_once(shared, &mut last_tick, Instant::now());

        // Sleep until the next frame is due, waking early for control messages.
        let due = last_tick + TICK_DURATION;
        let wait = due.saturating_duration_since(Instant::now());
        match control_rx.recv_timeout(wait) {
            Ok(GameLoopCommand::Shutdown) => return,
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => return,
        }
    }
}
