//! Damage resolution.

use crate::events::GameEvent;
use crate::state::GameState;
use crate::state::turn::TurnPhase;
use crate::state::types::{ActorState, EntityId};

use super::{PositionBonus, classify};

/// Final damage for an attack: base plus positional bonus, doubled when the
/// defender is stunned. The doubling covers the bonus, not just the base.
pub fn resolve_attack_damage(base: u32, bonus: PositionBonus, defender: &ActorState) -> u32 {
    let total = base + bonus.damage();
    if defender.status.is_stunned() {
        total * 2
    } else {
        total
    }
}

/// Lands a hit from `attacker` onto `defender`, resolving the positional
/// bonus (when `with_bonus`), the stun multiplier, death, score, and the
/// game-over transition. Returns the events in execution order.
///
/// Dead enemies are removed immediately; a dead player flips the phase to
/// [`TurnPhase::GameOver`].
pub fn strike(
    state: &mut GameState,
    attacker: EntityId,
    defender: EntityId,
    base: u32,
    with_bonus: bool,
) -> Vec<GameEvent> {
    let mut events = Vec::new();
    let Some(defender_state) = state.entities.actor(defender) else {
        return events;
    };

    let bonus = if with_bonus {
        match state.entities.actor(attacker) {
            Some(attacker_state) => classify(state, attacker_state, defender_state),
            None => PositionBonus::None,
        }
    } else {
        PositionBonus::None
    };
    let amount = resolve_attack_damage(base, bonus, defender_state);

    let Some(defender_state) = state.entities.actor_mut(defender) else {
        return events;
    };
    defender_state.health.deplete(amount);
    let died = defender_state.is_dead();
    let position = defender_state.position;
    events.push(GameEvent::DamageDealt {
        attacker,
        defender,
        amount,
        bonus,
    });

    if died {
        events.push(GameEvent::EntityDied {
            entity: defender,
            position,
        });
        if defender.is_player() {
            let from = state.turn.phase;
            state.turn.phase = TurnPhase::GameOver;
            events.push(GameEvent::PhaseChanged {
                from,
                to: TurnPhase::GameOver,
            });
        } else if let Some(enemy) = state.remove_enemy(defender) {
            let award = enemy.template.as_ref().map_or(0, |t| t.score);
            if award > 0 {
                state.score += award;
                events.push(GameEvent::ScoreAwarded {
                    amount: award,
                    total: state.score,
                });
            }
        }
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::state::types::{EnemyTemplate, Position, StatusEffect, StatusEffectKind};

    fn dummy() -> ActorState {
        ActorState::player(Position::ORIGIN, 10)
    }

    #[test]
    fn bonus_adds_before_doubling() {
        let mut defender = dummy();
        assert_eq!(resolve_attack_damage(1, PositionBonus::Backstab, &defender), 3);
        assert_eq!(resolve_attack_damage(1, PositionBonus::Flank, &defender), 2);

        defender
            .status
            .apply(StatusEffect::new(StatusEffectKind::Stunned, 1));
        assert_eq!(resolve_attack_damage(1, PositionBonus::Backstab, &defender), 6);
        assert_eq!(resolve_attack_damage(2, PositionBonus::None, &defender), 4);
    }

    #[test]
    fn lethal_strike_removes_enemy_and_awards_score() {
        let mut state = GameState::new(GameConfig::new());
        let id = state
            .spawn_enemy(
                EnemyTemplate {
                    name: "grunt".into(),
                    max_health: 1,
                    attack_damage: 1,
                    move_range: 2,
                    attack_range: 1,
                    spawn_weight: 10,
                    min_wave: 1,
                    score: 10,
                },
                Position::new(0, 0),
            )
            .unwrap();

        let events = strike(&mut state, EntityId::PLAYER, id, 1, false);
        assert!(events.iter().any(|e| matches!(
            e,
            GameEvent::EntityDied { entity, .. } if *entity == id
        )));
        assert_eq!(state.score, 10);
        assert!(state.entities.actor(id).is_none());
        assert_eq!(state.grid.occupant(Position::new(0, 0)), None);
    }

    #[test]
    fn player_death_ends_the_session() {
        let mut state = GameState::new(GameConfig::new());
        let attacker = EntityId(99);
        let events = strike(&mut state, attacker, EntityId::PLAYER, 100, false);
        assert!(state.turn.is_over());
        assert!(events.iter().any(|e| matches!(
            e,
            GameEvent::PhaseChanged { to: TurnPhase::GameOver, .. }
        )));
    }
}
