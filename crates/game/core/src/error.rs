//! Shared error taxonomy for the rules engine.
//!
//! Every legality gate in the core is a predicate checked before mutation;
//! errors exist to tell callers *why* a gate refused, never to unwind a turn.

/// How severe an error is, from the caller's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Precondition failed; retry with different input.
    Validation,
    /// Expected in normal play (out of power, blocked cell); skip and continue.
    Recoverable,
    /// The session cannot continue.
    Fatal,
}

/// Common interface over the core's error enums.
///
/// `error_code` gives observability layers a stable string key; `severity`
/// tells the caller whether the turn cycle can continue.
pub trait CoreError: std::error::Error {
    fn severity(&self) -> ErrorSeverity;
    fn error_code(&self) -> &'static str;
}

/// Errors from grid-shape mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// `expand` was asked to shrink or keep the current size.
    #[error("grid must grow: current {current:?}, requested {requested:?}")]
    NotLarger {
        current: (u32, u32),
        requested: (u32, u32),
    },
}

impl CoreError for GridError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotLarger { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotLarger { .. } => "GRID_NOT_LARGER",
        }
    }
}

/// Errors from placing a new actor into the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SpawnError {
    /// Spawn coordinate is outside the grid.
    #[error("spawn position out of bounds")]
    OutOfBounds,
    /// Spawn cell is an obstacle.
    #[error("spawn position not walkable")]
    NotWalkable,
    /// Spawn cell already holds an actor.
    #[error("spawn position occupied")]
    Occupied,
    /// The enemy roster is at capacity.
    #[error("enemy roster full")]
    RosterFull,
}

impl CoreError for SpawnError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::OutOfBounds | Self::NotWalkable | Self::Occupied => ErrorSeverity::Recoverable,
            Self::RosterFull => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::OutOfBounds => "SPAWN_OUT_OF_BOUNDS",
            Self::NotWalkable => "SPAWN_NOT_WALKABLE",
            Self::Occupied => "SPAWN_OCCUPIED",
            Self::RosterFull => "SPAWN_ROSTER_FULL",
        }
    }
}
