//! Error types for the play engine.

use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur while driving a play session.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A choice was made while the session was still on the opening screen.
    #[error("session has not started")]
    NotStarted,

    /// `start` was called after the opening screen was already dismissed.
    #[error("session already started")]
    AlreadyStarted,

    /// The walk is over; no further transitions are possible.
    #[error("session has ended")]
    AlreadyOver,

    /// The chosen option does not exist in the current dialogue.
    #[error("invalid option {index}: dialogue has {available} options")]
    InvalidOption {
        /// The zero-based option index that was requested.
        index: usize,
        /// How many options the current dialogue offers.
        available: usize,
    },

    /// The script failed validation.
    #[error(transparent)]
    Script(#[from] swoon_core::ScriptError),
}
