//! The action contract and dispatcher.
//!
//! Every action moves through the same pipeline: shared gating (phase, actor
//! status, power), action-specific validation, then application. A refused
//! action never mutates state; power is consumed only after a successful
//! apply, and only for the player.

mod attack;
mod error;
mod ice_trap;
mod knockback;
mod movement;
mod special;
mod stun_blast;

pub use error::ActionError;

use crate::config::GameConfig;
use crate::events::GameEvent;
use crate::state::GameState;
use crate::state::turn::TurnPhase;
use crate::state::types::{EntityId, Position};

/// Every action the rules engine knows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionKind {
    Move,
    Attack,
    Special,
    StunBlast,
    IceTrap,
    KnockbackWave,
}

impl ActionKind {
    /// Power cost charged to the player on successful execution.
    pub fn power_cost(self) -> u32 {
        match self {
            Self::Move => GameConfig::MOVE_COST,
            Self::Attack => GameConfig::ATTACK_COST,
            Self::Special => GameConfig::SPECIAL_COST,
            Self::StunBlast => GameConfig::STUN_BLAST_COST,
            Self::IceTrap => GameConfig::ICE_TRAP_COST,
            Self::KnockbackWave => GameConfig::KNOCKBACK_COST,
        }
    }

    /// Baseline Manhattan targeting range. Move and Attack defer to the
    /// acting actor's own stats at validation time.
    pub fn range(self) -> u32 {
        match self {
            Self::Move => GameConfig::PLAYER_MOVE_RANGE,
            Self::Attack => GameConfig::ATTACK_RANGE,
            Self::Special => GameConfig::SPECIAL_RANGE,
            Self::StunBlast => GameConfig::STUN_BLAST_RANGE,
            Self::IceTrap => GameConfig::ICE_TRAP_RANGE,
            Self::KnockbackWave => GameConfig::KNOCKBACK_RANGE,
        }
    }

    /// Enemies only ever move and attack.
    pub fn player_only(self) -> bool {
        !matches!(self, Self::Move | Self::Attack)
    }
}

/// Per-action validation and application. Implementations assume the shared
/// gates in [`validate`] already passed.
trait ActionSpec {
    fn validate(&self, state: &GameState, actor: EntityId, target: Position)
    -> Result<(), ActionError>;

    fn apply(
        &self,
        state: &mut GameState,
        actor: EntityId,
        target: Position,
    ) -> Result<Vec<GameEvent>, ActionError>;
}

fn spec_for(kind: ActionKind) -> &'static dyn ActionSpec {
    match kind {
        ActionKind::Move => &movement::MoveAction,
        ActionKind::Attack => &attack::AttackAction,
        ActionKind::Special => &special::SpecialAction,
        ActionKind::StunBlast => &stun_blast::StunBlastAction,
        ActionKind::IceTrap => &ice_trap::IceTrapAction,
        ActionKind::KnockbackWave => &knockback::KnockbackWaveAction,
    }
}

/// Full legality check without mutation: shared gates first, then the
/// action's own rules.
pub fn validate(
    state: &GameState,
    actor: EntityId,
    kind: ActionKind,
    target: Position,
) -> Result<(), ActionError> {
    if state.turn.is_over() {
        return Err(ActionError::GameOver);
    }
    let actor_state = state.entities.actor(actor).ok_or(ActionError::UnknownActor)?;

    let expected_phase = if actor_state.is_player() {
        TurnPhase::PlayerTurn
    } else {
        TurnPhase::EnemyTurn
    };
    if state.turn.phase != expected_phase {
        return Err(ActionError::NotActorsTurn);
    }
    if kind.player_only() && !actor_state.is_player() {
        return Err(ActionError::PlayerOnly);
    }
    if !actor_state.status.can_act() {
        return Err(ActionError::CannotAct);
    }
    if actor_state.is_player() {
        let required = kind.power_cost();
        if !state.power.has_enough(required) {
            return Err(ActionError::InsufficientPower {
                required,
                available: state.power.available(),
            });
        }
    }
    spec_for(kind).validate(state, actor, target)
}

pub fn can_execute(state: &GameState, actor: EntityId, kind: ActionKind, target: Position) -> bool {
    validate(state, actor, kind, target).is_ok()
}

/// Validates and applies an action, charging the player's power on success.
pub fn execute(
    state: &mut GameState,
    actor: EntityId,
    kind: ActionKind,
    target: Position,
) -> Result<Vec<GameEvent>, ActionError> {
    validate(state, actor, kind, target)?;

    let mut events = vec![GameEvent::ActionExecuted {
        actor,
        action: kind,
        target,
    }];
    events.extend(spec_for(kind).apply(state, actor, target)?);

    if actor.is_player() {
        state.power.consume(kind.power_cost());
        events.push(GameEvent::PowerChanged {
            current: state.power.current(),
            bonus: state.power.bonus(),
        });
    }
    Ok(events)
}

/// Every cell the action could legally target right now. Intended for client
/// highlighting; mirrors [`validate`] exactly.
pub fn preview_targets(state: &GameState, actor: EntityId, kind: ActionKind) -> Vec<Position> {
    let Some(actor_state) = state.entities.actor(actor) else {
        return Vec::new();
    };
    let reach = match kind {
        ActionKind::Move => actor_state.move_range(),
        ActionKind::Attack => actor_state.attack_range(),
        _ => kind.range(),
    };
    state
        .grid
        .cells_in_range(actor_state.position, reach, false)
        .into_iter()
        .filter(|target| can_execute(state, actor, kind, *target))
        .collect()
}

/// Shared range gate used by the specs.
fn check_range(origin: Position, target: Position, range: u32) -> Result<(), ActionError> {
    let distance = origin.manhattan(target);
    if distance > range {
        return Err(ActionError::OutOfRange { distance, range });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::types::{
        EnemyTemplate, PowerUp, StatusEffectKind, TelegraphKind, TelegraphedAction,
    };

    fn template() -> EnemyTemplate {
        EnemyTemplate {
            name: "grunt".into(),
            max_health: 3,
            attack_damage: 1,
            move_range: 2,
            attack_range: 1,
            spawn_weight: 10,
            min_wave: 1,
            score: 10,
        }
    }

    fn fresh_state() -> GameState {
        GameState::new(GameConfig::new())
    }

    #[test]
    fn knockback_without_adjacent_enemy_is_a_refused_no_op() {
        let mut state = fresh_state();
        let own_cell = state.player().position;
        // An enemy two cells away is not adjacent.
        state.spawn_enemy(template(), own_cell.offset(2, 0)).unwrap();

        assert!(!can_execute(
            &state,
            EntityId::PLAYER,
            ActionKind::KnockbackWave,
            own_cell
        ));
        let before = state.clone();
        let result = execute(&mut state, EntityId::PLAYER, ActionKind::KnockbackWave, own_cell);
        assert_eq!(result, Err(ActionError::NoAdjacentEnemy));
        assert_eq!(state, before);
    }

    #[test]
    fn ice_trap_placement_rules() {
        let mut state = fresh_state();
        let player_pos = state.player().position;
        let enemy_pos = player_pos.offset(1, 0);
        state.spawn_enemy(template(), enemy_pos).unwrap();
        let wall = player_pos.offset(0, 1);
        state.grid.set_walkable(wall, false);

        assert_eq!(
            validate(&state, EntityId::PLAYER, ActionKind::IceTrap, enemy_pos),
            Err(ActionError::Occupied)
        );
        assert_eq!(
            validate(&state, EntityId::PLAYER, ActionKind::IceTrap, wall),
            Err(ActionError::NotWalkable)
        );

        let free = player_pos.offset(1, 1);
        execute(&mut state, EntityId::PLAYER, ActionKind::IceTrap, free).unwrap();
        assert_eq!(
            validate(&state, EntityId::PLAYER, ActionKind::IceTrap, free),
            Err(ActionError::TrapBlocked)
        );
    }

    #[test]
    fn refused_actions_never_consume_power() {
        let mut state = fresh_state();
        let far = Position::new(0, 0);
        let before = state.power.available();

        let result = execute(&mut state, EntityId::PLAYER, ActionKind::Attack, far);
        assert!(matches!(result, Err(ActionError::OutOfRange { .. })));
        assert_eq!(state.power.available(), before);
    }

    #[test]
    fn stun_blast_refreshes_a_standing_stun() {
        let mut state = fresh_state();
        let enemy_pos = state.player().position.offset(1, 0);
        let id = state.spawn_enemy(template(), enemy_pos).unwrap();

        execute(&mut state, EntityId::PLAYER, ActionKind::StunBlast, enemy_pos).unwrap();
        execute(&mut state, EntityId::PLAYER, ActionKind::StunBlast, enemy_pos).unwrap();

        let status = state.entities.actor(id).unwrap().status;
        let effect = status.active().expect("one effect, never two");
        assert_eq!(effect.kind, StatusEffectKind::Stunned);
        assert_eq!(effect.remaining, GameConfig::STUN_DURATION);
    }

    #[test]
    fn special_blast_spares_the_player() {
        let mut state = fresh_state();
        let player_pos = state.player().position;
        // Aim right next to the player; the blast radius covers both the
        // adjacent enemy and the player's own cell.
        let aim = player_pos.offset(1, 0);
        let near = state.spawn_enemy(template(), aim.offset(1, 0)).unwrap();
        let outside = state
            .spawn_enemy(template(), aim.offset(3, 0))
            .unwrap();

        execute(&mut state, EntityId::PLAYER, ActionKind::Special, aim).unwrap();

        assert_eq!(state.player().health.current, state.player().health.maximum);
        assert_eq!(
            state.entities.actor(near).unwrap().health.current,
            3 - GameConfig::SPECIAL_DAMAGE
        );
        assert_eq!(state.entities.actor(outside).unwrap().health.current, 3);
    }

    #[test]
    fn shoved_enemy_is_judged_from_where_it_lands() {
        let mut state = fresh_state();
        let start = state.player().position;
        let spawn = start.offset(1, 0);
        let id = state.spawn_enemy(template(), spawn).unwrap();
        state.entities.actor_mut(id).unwrap().telegraph =
            TelegraphedAction::new(TelegraphKind::Attack, start, spawn);

        // Step beside the enemy and shove it two cells down its column.
        execute(&mut state, EntityId::PLAYER, ActionKind::Move, start.offset(1, 1)).unwrap();
        execute(
            &mut state,
            EntityId::PLAYER,
            ActionKind::KnockbackWave,
            start.offset(1, 1),
        )
        .unwrap();
        assert_eq!(
            state.entities.actor(id).unwrap().position,
            start.offset(1, -2)
        );

        // From the enemy's new cell its facing is diagonal toward the old
        // target, so an attack up the column is frontal: base damage only.
        execute(&mut state, EntityId::PLAYER, ActionKind::Move, spawn).unwrap();
        execute(&mut state, EntityId::PLAYER, ActionKind::Attack, start.offset(1, -2)).unwrap();

        let enemy = state.entities.actor(id).unwrap();
        assert_eq!(enemy.health.current, enemy.health.maximum - 1);
    }

    #[test]
    fn collecting_a_power_up_reports_each_pool_change() {
        let mut state = fresh_state();
        let target = state.player().position.offset(1, 0);
        assert!(state.grid.place_power_up(
            target,
            PowerUp {
                amount: 3,
                despawn_in: 2,
            }
        ));

        let events = execute(&mut state, EntityId::PLAYER, ActionKind::Move, target).unwrap();
        let changes: Vec<_> = events
            .iter()
            .filter(|e| matches!(e, GameEvent::PowerChanged { .. }))
            .collect();
        // One notification for the pickup, one for the move cost (paid from
        // the bonus pool first).
        assert_eq!(
            changes,
            vec![
                &GameEvent::PowerChanged {
                    current: 10,
                    bonus: 3
                },
                &GameEvent::PowerChanged {
                    current: 10,
                    bonus: 2
                },
            ]
        );
    }

    #[test]
    fn enemies_cannot_use_player_only_actions() {
        let mut state = fresh_state();
        let enemy_pos = state.player().position.offset(1, 0);
        let id = state.spawn_enemy(template(), enemy_pos).unwrap();
        state.turn.phase = TurnPhase::EnemyTurn;

        assert_eq!(
            validate(&state, id, ActionKind::StunBlast, state.player().position),
            Err(ActionError::PlayerOnly)
        );
    }
}
