//! Move: relocate to any free cell within movement range.

use crate::events::GameEvent;
use crate::state::GameState;
use crate::state::types::{EntityId, Position};

use super::{ActionError, ActionSpec, check_range};

pub(super) struct MoveAction;

impl ActionSpec for MoveAction {
    fn validate(
        &self,
        state: &GameState,
        actor: EntityId,
        target: Position,
    ) -> Result<(), ActionError> {
        let actor_state = state.entities.actor(actor).ok_or(ActionError::UnknownActor)?;
        if !actor_state.status.can_move() {
            return Err(ActionError::CannotMove);
        }
        check_range(actor_state.position, target, actor_state.move_range())?;

        let cell = state.grid.cell(target).ok_or(ActionError::OutOfBounds(target))?;
        if !cell.walkable {
            return Err(ActionError::NotWalkable);
        }
        if cell.occupant.is_some() {
            return Err(ActionError::Occupied);
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut GameState,
        actor: EntityId,
        target: Position,
    ) -> Result<Vec<GameEvent>, ActionError> {
        let from = state
            .entities
            .actor(actor)
            .ok_or(ActionError::UnknownActor)?
            .position;
        if !state.move_actor(actor, target) {
            return Err(ActionError::Occupied);
        }

        let mut events = vec![GameEvent::EntityMoved {
            entity: actor,
            from,
            to: target,
        }];

        if actor.is_player() {
            // Only the player collects pickups.
            if let Some(power_up) = state.grid.take_power_up(target) {
                state.power.gain_bonus(power_up.amount);
                events.push(GameEvent::PowerUpCollected {
                    position: target,
                    amount: power_up.amount,
                });
                events.push(GameEvent::PowerChanged {
                    current: state.power.current(),
                    bonus: state.power.bonus(),
                });
            }
        } else if let Some(effect) = state.traps.trigger_at(target) {
            if let Some(enemy) = state.entities.actor_mut(actor) {
                enemy.status.apply(effect);
            }
            events.push(GameEvent::TrapTriggered {
                position: target,
                victim: actor,
            });
            events.push(GameEvent::StatusApplied {
                entity: actor,
                kind: effect.kind,
                duration: effect.remaining,
            });
        }
        Ok(events)
    }
}
