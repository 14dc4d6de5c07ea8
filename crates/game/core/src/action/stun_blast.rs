//! Stun Blast: locks a single enemy out of its next turn.

use crate::config::GameConfig;
use crate::events::GameEvent;
use crate::state::GameState;
use crate::state::types::{EntityId, Position, StatusEffect, StatusEffectKind};

use super::{ActionError, ActionSpec, check_range};

pub(super) struct StunBlastAction;

impl ActionSpec for StunBlastAction {
    fn validate(
        &self,
        state: &GameState,
        actor: EntityId,
        target: Position,
    ) -> Result<(), ActionError> {
        let actor_state = state.entities.actor(actor).ok_or(ActionError::UnknownActor)?;
        check_range(actor_state.position, target, GameConfig::STUN_BLAST_RANGE)?;

        let cell = state.grid.cell(target).ok_or(ActionError::OutOfBounds(target))?;
        let defender_id = cell.occupant.ok_or(ActionError::NoTarget)?;
        let defender = state
            .entities
            .actor(defender_id)
            .ok_or(ActionError::NoTarget)?;
        if !defender.is_enemy() {
            return Err(ActionError::FriendlyTarget);
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut GameState,
        _actor: EntityId,
        target: Position,
    ) -> Result<Vec<GameEvent>, ActionError> {
        let victim = state.grid.occupant(target).ok_or(ActionError::NoTarget)?;
        let effect = StatusEffect::new(StatusEffectKind::Stunned, GameConfig::STUN_DURATION);
        if let Some(enemy) = state.entities.actor_mut(victim) {
            enemy.status.apply(effect);
        }
        Ok(vec![GameEvent::StatusApplied {
            entity: victim,
            kind: effect.kind,
            duration: effect.remaining,
        }])
    }
}
