//! Domain events emitted by the engine.
//!
//! Every mutation the engine performs is reported as a [`GameEvent`] value in
//! execution order. The core never broadcasts; callers forward the returned
//! events to whatever transport they run (the runtime republishes them on its
//! event bus).

use crate::action::ActionKind;
use crate::combat::PositionBonus;
use crate::state::turn::TurnPhase;
use crate::state::types::{EntityId, Position, StatusEffectKind};

/// Something that happened inside the rules engine.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameEvent {
    // ===== turn cycle =====
    PhaseChanged {
        from: TurnPhase,
        to: TurnPhase,
    },
    /// A full cycle (player turn + enemy turn) finished.
    TurnCompleted {
        turn_number: u32,
    },

    // ===== actions and combat =====
    ActionExecuted {
        actor: EntityId,
        action: ActionKind,
        target: Position,
    },
    EntityMoved {
        entity: EntityId,
        from: Position,
        to: Position,
    },
    DamageDealt {
        attacker: EntityId,
        defender: EntityId,
        amount: u32,
        bonus: PositionBonus,
    },
    EntityDied {
        entity: EntityId,
        position: Position,
    },
    ScoreAwarded {
        amount: u32,
        total: u32,
    },

    // ===== status effects =====
    StatusApplied {
        entity: EntityId,
        kind: StatusEffectKind,
        duration: u32,
    },
    StatusExpired {
        entity: EntityId,
        kind: StatusEffectKind,
    },

    // ===== telegraphs =====
    /// Enemy intents were recomputed; read them off the enemy roster.
    TelegraphsUpdated,

    // ===== power economy =====
    PowerChanged {
        current: u32,
        bonus: u32,
    },
    PowerUpPlaced {
        position: Position,
        amount: u32,
    },
    PowerUpCollected {
        position: Position,
        amount: u32,
    },
    PowerUpExpired {
        position: Position,
    },

    // ===== traps =====
    TrapPlaced {
        position: Position,
    },
    TrapTriggered {
        position: Position,
        victim: EntityId,
    },

    // ===== world =====
    EnemySpawned {
        entity: EntityId,
        position: Position,
    },
    GridExpanded {
        width: u32,
        height: u32,
        /// Offset applied to every pre-existing position.
        offset: Position,
    },
}
