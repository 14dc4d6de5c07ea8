//! Unified error types surfaced by the runtime API.
//!
//! Wraps the core's validation errors so clients can bubble them up with
//! consistent context.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuntimeError {
    #[error(transparent)]
    Action(#[from] game_core::ActionError),

    #[error(transparent)]
    Turn(#[from] game_core::TurnError),

    #[error(transparent)]
    Grid(#[from] game_core::GridError),

    #[error(transparent)]
    Spawn(#[from] game_core::SpawnError),

    #[error("unknown enemy template '{0}'")]
    UnknownTemplate(String),
}
