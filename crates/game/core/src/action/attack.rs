//! Attack: single-target strike with positional bonuses.

use crate::combat;
use crate::events::GameEvent;
use crate::state::GameState;
use crate::state::types::{EntityId, Position};

use super::{ActionError, ActionSpec, check_range};

pub(super) struct AttackAction;

impl ActionSpec for AttackAction {
    fn validate(
        &self,
        state: &GameState,
        actor: EntityId,
        target: Position,
    ) -> Result<(), ActionError> {
        let actor_state = state.entities.actor(actor).ok_or(ActionError::UnknownActor)?;
        check_range(actor_state.position, target, actor_state.attack_range())?;

        let cell = state.grid.cell(target).ok_or(ActionError::OutOfBounds(target))?;
        let defender_id = cell.occupant.ok_or(ActionError::NoTarget)?;
        let defender = state
            .entities
            .actor(defender_id)
            .ok_or(ActionError::NoTarget)?;
        if defender.kind == actor_state.kind {
            return Err(ActionError::FriendlyTarget);
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut GameState,
        actor: EntityId,
        target: Position,
    ) -> Result<Vec<GameEvent>, ActionError> {
        let defender = state.grid.occupant(target).ok_or(ActionError::NoTarget)?;
        let base = state
            .entities
            .actor(actor)
            .ok_or(ActionError::UnknownActor)?
            .attack_damage();
        Ok(combat::strike(state, actor, defender, base, true))
    }
}
