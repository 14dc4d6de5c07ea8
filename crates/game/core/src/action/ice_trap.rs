//! Ice Trap: arms a rooting trap on a free cell.

use crate::config::GameConfig;
use crate::events::GameEvent;
use crate::state::GameState;
use crate::state::types::{EntityId, Position, Trap};

use super::{ActionError, ActionSpec, check_range};

pub(super) struct IceTrapAction;

impl ActionSpec for IceTrapAction {
    fn validate(
        &self,
        state: &GameState,
        actor: EntityId,
        target: Position,
    ) -> Result<(), ActionError> {
        let actor_state = state.entities.actor(actor).ok_or(ActionError::UnknownActor)?;
        check_range(actor_state.position, target, GameConfig::ICE_TRAP_RANGE)?;

        let cell = state.grid.cell(target).ok_or(ActionError::OutOfBounds(target))?;
        if !cell.walkable {
            return Err(ActionError::NotWalkable);
        }
        if cell.occupant.is_some() {
            return Err(ActionError::Occupied);
        }
        if state.traps.live_trap_at(target).is_some() {
            return Err(ActionError::TrapBlocked);
        }
        if state.traps.is_full() {
            return Err(ActionError::TrapLimit);
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut GameState,
        _actor: EntityId,
        target: Position,
    ) -> Result<Vec<GameEvent>, ActionError> {
        if !state.traps.place(Trap::ice(target)) {
            return Err(ActionError::TrapLimit);
        }
        Ok(vec![GameEvent::TrapPlaced { position: target }])
    }
}
