//! Errors raised at the game loop boundary. The simulation itself never fails.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// A thread panicked while holding the engine or snapshot lock.
    #[error("game loop lock poisoned")]
    LockPoisoned,
    /// The loop thread has been shut down (or died).
    #[error("game loop is not running")]
    LoopStopped,
    #[error("failed to spawn game loop thread: {0}")]
    Spawn(#[from] std::io::Error),
}

impl<T> From<std::sync::PoisonError<T>> for AppError {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        AppError::LockPoisoned
    }
}
