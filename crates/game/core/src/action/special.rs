//! Special: area blast that damages every enemy near the target cell.
//!
//! The blast never touches the player, even when the target cell sits on or
//! next to them.

use crate::combat;
use crate::config::GameConfig;
use crate::events::GameEvent;
use crate::state::GameState;
use crate::state::types::{EntityId, Position};

use super::{ActionError, ActionSpec, check_range};

pub(super) struct SpecialAction;

impl ActionSpec for SpecialAction {
    fn validate(
        &self,
        state: &GameState,
        actor: EntityId,
        target: Position,
    ) -> Result<(), ActionError> {
        let actor_state = state.entities.actor(actor).ok_or(ActionError::UnknownActor)?;
        if !state.grid.in_bounds(target) {
            return Err(ActionError::OutOfBounds(target));
        }
        // Range starts at 1; the caster's own cell is not a valid aim point.
        if actor_state.position == target {
            return Err(ActionError::OutOfRange {
                distance: 0,
                range: GameConfig::SPECIAL_RANGE,
            });
        }
        check_range(actor_state.position, target, GameConfig::SPECIAL_RANGE)
    }

    fn apply(
        &self,
        state: &mut GameState,
        actor: EntityId,
        target: Position,
    ) -> Result<Vec<GameEvent>, ActionError> {
        // Snapshot the victims first; strikes mutate the roster.
        let victims: Vec<EntityId> = state
            .entities
            .enemies
            .iter()
            .filter(|e| e.position.manhattan(target) <= GameConfig::SPECIAL_BLAST_RADIUS)
            .map(|e| e.id)
            .collect();

        let mut events = Vec::new();
        for victim in victims {
            events.extend(combat::strike(
                state,
                actor,
                victim,
                GameConfig::SPECIAL_DAMAGE,
                false,
            ));
        }
        Ok(events)
    }
}
