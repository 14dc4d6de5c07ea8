//! Placed traps.
//!
//! A trap is armed when placed, triggers at most once (on the first enemy
//! that occupies or is hurled through its cell) and is removed afterwards.

use arrayvec::ArrayVec;

use crate::config::GameConfig;

use super::{Position, StatusEffect, StatusEffectKind};

/// A single placed trap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trap {
    pub position: Position,
    /// Effect delivered on trigger.
    pub effect: StatusEffect,
    pub triggered: bool,
}

impl Trap {
    /// An ice trap: roots the first enemy that springs it.
    pub fn ice(position: Position) -> Self {
        Self {
            position,
            effect: StatusEffect::new(StatusEffectKind::Rooted, GameConfig::ROOT_DURATION),
            triggered: false,
        }
    }

    pub fn is_live(&self) -> bool {
        !self.triggered
    }
}

/// All placed traps, bounded by [`GameConfig::MAX_TRAPS`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrapState {
    traps: ArrayVec<Trap, { GameConfig::MAX_TRAPS }>,
}

impl TrapState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Trap> {
        self.traps.iter()
    }

    pub fn is_full(&self) -> bool {
        self.traps.is_full()
    }

    /// Returns the live (untriggered) trap at `position`, if any.
    pub fn live_trap_at(&self, position: Position) -> Option<&Trap> {
        self.traps
            .iter()
            .find(|t| t.position == position && t.is_live())
    }

    /// Places a trap. Fails when the trap table is full or a live trap
    /// already sits on the cell; callers validate cell legality separately.
    pub fn place(&mut self, trap: Trap) -> bool {
        if self.live_trap_at(trap.position).is_some() {
            return false;
        }
        self.traps.try_push(trap).is_ok()
    }

    /// Shifts every trap by `offset`. Used when the grid re-centers on growth.
    pub fn shift(&mut self, offset: Position) {
        for trap in &mut self.traps {
            trap.position = trap.position + offset;
        }
    }

    /// Springs the live trap at `position`, removing it and returning the
    /// effect it delivers. At most one trap fires per call.
    pub fn trigger_at(&mut self, position: Position) -> Option<StatusEffect> {
        let index = self
            .traps
            .iter()
            .position(|t| t.position == position && t.is_live())?;
        let trap = self.traps.swap_remove(index);
        Some(trap.effect)
    }
}
