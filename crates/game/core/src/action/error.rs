//! Action validation errors.

use crate::error::{CoreError, ErrorSeverity};
use crate::state::types::Position;

/// Why an action was refused. Validation is all-or-nothing: a refused action
/// leaves the state untouched, including the power pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error("the session is over")]
    GameOver,
    #[error("actor not found")]
    UnknownActor,
    #[error("it is not this actor's turn")]
    NotActorsTurn,
    #[error("actor cannot act under its current status")]
    CannotAct,
    #[error("actor cannot move under its current status")]
    CannotMove,
    #[error("insufficient power: need {required}, have {available}")]
    InsufficientPower { required: u32, available: u32 },
    #[error("target {0} is out of bounds")]
    OutOfBounds(Position),
    #[error("target is {distance} cells away, range is {range}")]
    OutOfRange { distance: u32, range: u32 },
    #[error("target cell is not walkable")]
    NotWalkable,
    #[error("target cell is occupied")]
    Occupied,
    #[error("no valid target at the cell")]
    NoTarget,
    #[error("target is not hostile")]
    FriendlyTarget,
    #[error("only the player may use this action")]
    PlayerOnly,
    #[error("a live trap already sits on the cell")]
    TrapBlocked,
    #[error("trap limit reached")]
    TrapLimit,
    #[error("no orthogonally adjacent enemy")]
    NoAdjacentEnemy,
    #[error("action must target the actor's own cell")]
    NotSelfTargeted,
}

impl CoreError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::GameOver | Self::UnknownActor => ErrorSeverity::Fatal,
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::GameOver => "ACTION_GAME_OVER",
            Self::UnknownActor => "ACTION_UNKNOWN_ACTOR",
            Self::NotActorsTurn => "ACTION_NOT_ACTORS_TURN",
            Self::CannotAct => "ACTION_CANNOT_ACT",
            Self::CannotMove => "ACTION_CANNOT_MOVE",
            Self::InsufficientPower { .. } => "ACTION_INSUFFICIENT_POWER",
            Self::OutOfBounds(_) => "ACTION_OUT_OF_BOUNDS",
            Self::OutOfRange { .. } => "ACTION_OUT_OF_RANGE",
            Self::NotWalkable => "ACTION_NOT_WALKABLE",
            Self::Occupied => "ACTION_OCCUPIED",
            Self::NoTarget => "ACTION_NO_TARGET",
            Self::FriendlyTarget => "ACTION_FRIENDLY_TARGET",
            Self::PlayerOnly => "ACTION_PLAYER_ONLY",
            Self::TrapBlocked => "ACTION_TRAP_BLOCKED",
            Self::TrapLimit => "ACTION_TRAP_LIMIT",
            Self::NoAdjacentEnemy => "ACTION_NO_ADJACENT_ENEMY",
            Self::NotSelfTargeted => "ACTION_NOT_SELF_TARGETED",
        }
    }
}
