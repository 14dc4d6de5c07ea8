//! Knockback Wave: shoves every orthogonally adjacent enemy away.
//!
//! Each enemy is pushed along the pure axis away from the player, sliding
//! the maximum contiguous free distance up to the push cap and springing any
//! live trap on the cells it crosses.

use crate::config::GameConfig;
use crate::events::GameEvent;
use crate::state::GameState;
use crate::state::types::{EntityId, Position};

use super::{ActionError, ActionSpec};

pub(super) struct KnockbackWaveAction;

fn adjacent_enemies(state: &GameState, origin: Position) -> Vec<EntityId> {
    Position::ORTHOGONAL
        .iter()
        .filter_map(|step| state.grid.occupant(origin + *step))
        .filter(|id| !id.is_player())
        .collect()
}

impl ActionSpec for KnockbackWaveAction {
    fn validate(
        &self,
        state: &GameState,
        actor: EntityId,
        target: Position,
    ) -> Result<(), ActionError> {
        let actor_state = state.entities.actor(actor).ok_or(ActionError::UnknownActor)?;
        // The wave radiates from the caster; it has no aim point.
        if target != actor_state.position {
            return Err(ActionError::NotSelfTargeted);
        }
        if adjacent_enemies(state, actor_state.position).is_empty() {
            return Err(ActionError::NoAdjacentEnemy);
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut GameState,
        _actor: EntityId,
        target: Position,
    ) -> Result<Vec<GameEvent>, ActionError> {
        let victims = adjacent_enemies(state, target);
        let mut events = Vec::new();
        for victim in victims {
            events.extend(push_enemy(state, target, victim));
        }
        Ok(events)
    }
}

/// Pushes one enemy directly away from `origin` by the maximum contiguous
/// free distance. An enemy blocked immediately stays put and springs nothing.
fn push_enemy(state: &mut GameState, origin: Position, victim: EntityId) -> Vec<GameEvent> {
    let mut events = Vec::new();
    let Some(from) = state.entities.actor(victim).map(|e| e.position) else {
        return events;
    };
    let dir = origin.direction_toward(from);

    let mut steps = 0;
    for d in 1..=GameConfig::KNOCKBACK_DISTANCE as i32 {
        let cell = from.offset(dir.x * d, dir.y * d);
        if state.grid.cell(cell).is_some_and(|c| c.is_free()) {
            steps = d;
        } else {
            break;
        }
    }
    if steps == 0 {
        return events;
    }
    let to = from.offset(dir.x * steps, dir.y * steps);

    state.move_actor(victim, to);
    events.push(GameEvent::EntityMoved {
        entity: victim,
        from,
        to,
    });

    // Spring every live trap on the path, landing cell included.
    for step in 1..=steps {
        let cell = from.offset(dir.x * step, dir.y * step);
        if let Some(effect) = state.traps.trigger_at(cell) {
            if let Some(enemy) = state.entities.actor_mut(victim) {
                enemy.status.apply(effect);
            }
            events.push(GameEvent::TrapTriggered {
                position: cell,
                victim,
            });
            events.push(GameEvent::StatusApplied {
                entity: victim,
                kind: effect.kind,
                duration: effect.remaining,
            });
        }
    }
    events
}
