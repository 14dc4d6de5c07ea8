//! Turn orchestration.
//!
//! [`GameEngine`] borrows a [`GameState`] and drives the turn cycle: player
//! actions while the player phase lasts, then a full enemy pass, status and
//! pickup ticks, power regeneration, and re-telegraphing, all from
//! [`GameEngine::end_player_turn`]. Every mutation is reported as events in
//! execution order.

use crate::action::{self, ActionError, ActionKind};
use crate::ai;
use crate::error::{CoreError, ErrorSeverity, GridError, SpawnError};
use crate::events::GameEvent;
use crate::state::GameState;
use crate::state::turn::TurnPhase;
use crate::state::types::{EnemyTemplate, EntityId, Position, TelegraphKind};

/// Errors from the turn state machine itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TurnError {
    #[error("the session is over")]
    GameOver,
    #[error("the turn can only be ended during the player phase")]
    NotPlayerPhase,
}

impl CoreError for TurnError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::GameOver => ErrorSeverity::Fatal,
            Self::NotPlayerPhase => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::GameOver => "TURN_GAME_OVER",
            Self::NotPlayerPhase => "TURN_NOT_PLAYER_PHASE",
        }
    }
}

/// Stateless driver over a borrowed [`GameState`].
pub struct GameEngine<'a> {
    state: &'a mut GameState,
}

impl<'a> GameEngine<'a> {
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &GameState {
        self.state
    }

    // ===== player phase =====

    /// Executes one player action. Any number may run per turn while power
    /// and legality allow.
    pub fn execute_player_action(
        &mut self,
        kind: ActionKind,
        target: Position,
    ) -> Result<Vec<GameEvent>, ActionError> {
        action::execute(self.state, EntityId::PLAYER, kind, target)
    }

    pub fn can_execute(&self, kind: ActionKind, target: Position) -> bool {
        action::can_execute(self.state, EntityId::PLAYER, kind, target)
    }

    /// Cells the player could legally target with `kind` right now.
    pub fn preview_targets(&self, kind: ActionKind) -> Vec<Position> {
        action::preview_targets(self.state, EntityId::PLAYER, kind)
    }

    // ===== turn cycle =====

    /// Ends the player phase and runs the rest of the cycle: telegraphed
    /// enemy actions in spawn order, one status tick per actor, pickup
    /// despawns, power regeneration, and fresh telegraphs for the next turn.
    pub fn end_player_turn(&mut self) -> Result<Vec<GameEvent>, TurnError> {
        if self.state.turn.is_over() {
            return Err(TurnError::GameOver);
        }
        if self.state.turn.phase != TurnPhase::PlayerTurn {
            return Err(TurnError::NotPlayerPhase);
        }

        let mut events = Vec::new();
        self.transition(TurnPhase::EnemyTurn, &mut events);

        self.run_enemy_pass(&mut events);

        if !self.state.turn.is_over() {
            self.tick_statuses(&mut events);
            for position in self.state.grid.tick_power_ups() {
                events.push(GameEvent::PowerUpExpired { position });
            }

            let regen = self.state.config.power_regen_per_turn;
            if regen > 0 {
                self.state.power.regenerate(regen);
                events.push(GameEvent::PowerChanged {
                    current: self.state.power.current(),
                    bonus: self.state.power.bonus(),
                });
            }

            self.state.turn.turn_number += 1;
            events.push(GameEvent::TurnCompleted {
                turn_number: self.state.turn.turn_number,
            });

            events.extend(self.refresh_telegraphs());
            self.transition(TurnPhase::PlayerTurn, &mut events);
        }
        Ok(events)
    }

    /// Executes each enemy's telegraph against the live state. A telegraph
    /// that no longer validates (target cell occupied, player moved away,
    /// the enemy got stunned) is dropped; the enemy loses its action.
    fn run_enemy_pass(&mut self, events: &mut Vec<GameEvent>) {
        let order: Vec<EntityId> = self.state.entities.enemies.iter().map(|e| e.id).collect();
        for id in order {
            if self.state.turn.is_over() {
                break;
            }
            let Some(enemy) = self.state.entities.actor(id) else {
                // Killed earlier in this pass (area blast, knockback chain).
                continue;
            };
            let telegraph = enemy.telegraph;
            let kind = match telegraph.kind {
                TelegraphKind::None => continue,
                TelegraphKind::Move => ActionKind::Move,
                TelegraphKind::Attack => ActionKind::Attack,
            };
            match action::execute(self.state, id, kind, telegraph.target) {
                Ok(enemy_events) => events.extend(enemy_events),
                Err(_) => continue,
            }
        }
    }

    fn tick_statuses(&mut self, events: &mut Vec<GameEvent>) {
        if let Some(expired) = self.state.entities.player.status.tick() {
            events.push(GameEvent::StatusExpired {
                entity: EntityId::PLAYER,
                kind: expired.kind,
            });
        }
        for enemy in &mut self.state.entities.enemies {
            if let Some(expired) = enemy.status.tick() {
                events.push(GameEvent::StatusExpired {
                    entity: enemy.id,
                    kind: expired.kind,
                });
            }
        }
    }

    fn transition(&mut self, to: TurnPhase, events: &mut Vec<GameEvent>) {
        let from = self.state.turn.phase;
        if from == to {
            return;
        }
        self.state.turn.phase = to;
        events.push(GameEvent::PhaseChanged { from, to });
    }

    // ===== world management =====

    /// Recomputes every enemy's telegraph from the current state.
    pub fn refresh_telegraphs(&mut self) -> Vec<GameEvent> {
        let ids: Vec<EntityId> = self.state.entities.enemies.iter().map(|e| e.id).collect();
        for id in ids {
            let intent = ai::decide_next_action(self.state, id);
            if let Some(enemy) = self.state.entities.actor_mut(id) {
                enemy.telegraph = intent;
            }
        }
        vec![GameEvent::TelegraphsUpdated]
    }

    /// Spawns an enemy with an immediately visible telegraph.
    pub fn spawn_enemy(
        &mut self,
        template: EnemyTemplate,
        position: Position,
    ) -> Result<(EntityId, Vec<GameEvent>), SpawnError> {
        let id = self.state.spawn_enemy(template, position)?;
        let intent = ai::decide_next_action(self.state, id);
        if let Some(enemy) = self.state.entities.actor_mut(id) {
            enemy.telegraph = intent;
        }
        Ok((
            id,
            vec![
                GameEvent::EnemySpawned {
                    entity: id,
                    position,
                },
                GameEvent::TelegraphsUpdated,
            ],
        ))
    }

    /// Grows the grid, shifting all content toward the new center.
    pub fn expand_grid(
        &mut self,
        new_width: u32,
        new_height: u32,
    ) -> Result<Vec<GameEvent>, GridError> {
        let offset = self.state.expand_grid(new_width, new_height)?;
        Ok(vec![GameEvent::GridExpanded {
            width: new_width,
            height: new_height,
            offset,
        }])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::state::types::{StatusEffect, StatusEffectKind};

    fn template() -> EnemyTemplate {
        EnemyTemplate {
            name: "grunt".into(),
            max_health: 2,
            attack_damage: 1,
            move_range: 2,
            attack_range: 1,
            spawn_weight: 10,
            min_wave: 1,
            score: 10,
        }
    }

    #[test]
    fn cycle_regenerates_power_and_advances_turn() {
        let mut state = GameState::new(GameConfig::new());
        let mut engine = GameEngine::new(&mut state);

        let target = engine.state().player().position.offset(1, 0);
        engine
            .execute_player_action(ActionKind::Move, target)
            .unwrap();
        assert_eq!(engine.state().power.current(), 9);

        let events = engine.end_player_turn().unwrap();
        assert_eq!(engine.state().turn.turn_number, 1);
        assert_eq!(engine.state().turn.phase, TurnPhase::PlayerTurn);
        // Regen 2, capped at 10.
        assert_eq!(engine.state().power.current(), 10);
        assert!(events.iter().any(|e| matches!(
            e,
            GameEvent::TurnCompleted { turn_number: 1 }
        )));
    }

    #[test]
    fn telegraphed_attack_lands_during_enemy_pass() {
        let mut state = GameState::new(GameConfig::new());
        let mut engine = GameEngine::new(&mut state);
        let beside = engine.state().player().position.offset(1, 0);
        engine.spawn_enemy(template(), beside).unwrap();

        let health_before = engine.state().player().health.current;
        let events = engine.end_player_turn().unwrap();
        assert_eq!(engine.state().player().health.current, health_before - 1);
        assert!(events.iter().any(|e| matches!(
            e,
            GameEvent::DamageDealt { defender: EntityId::PLAYER, amount: 1, .. }
        )));
    }

    #[test]
    fn stunned_enemy_loses_its_action_then_recovers() {
        let mut state = GameState::new(GameConfig::new());
        let mut engine = GameEngine::new(&mut state);
        let beside = engine.state().player().position.offset(1, 0);
        let (id, _) = engine.spawn_enemy(template(), beside).unwrap();

        engine
            .execute_player_action(ActionKind::StunBlast, beside)
            .unwrap();
        let health_before = engine.state().player().health.current;

        let events = engine.end_player_turn().unwrap();
        // The stun blocked the telegraphed attack and expired at end of cycle.
        assert_eq!(engine.state().player().health.current, health_before);
        assert!(events.iter().any(|e| matches!(
            e,
            GameEvent::StatusExpired { kind: StatusEffectKind::Stunned, .. }
        )));
        assert!(
            engine
                .state()
                .entities
                .actor(id)
                .unwrap()
                .status
                .can_act()
        );
    }

    #[test]
    fn player_dodges_a_telegraphed_attack_by_moving() {
        let mut state = GameState::new(GameConfig::new());
        let mut engine = GameEngine::new(&mut state);
        let player_pos = engine.state().player().position;
        engine
            .spawn_enemy(template(), player_pos.offset(1, 0))
            .unwrap();

        // Step out of the telegraphed cell.
        engine
            .execute_player_action(ActionKind::Move, player_pos.offset(-2, 0))
            .unwrap();
        let health_before = engine.state().player().health.current;
        engine.end_player_turn().unwrap();
        assert_eq!(engine.state().player().health.current, health_before);
    }

    #[test]
    fn rooted_enemy_cannot_execute_a_move_telegraph() {
        let mut state = GameState::new(GameConfig::new());
        let mut engine = GameEngine::new(&mut state);
        let far = Position::new(0, 0);
        let (id, _) = engine.spawn_enemy(template(), far).unwrap();

        let enemy = engine.state.entities.actor_mut(id).unwrap();
        enemy
            .status
            .apply(StatusEffect::new(StatusEffectKind::Rooted, 2));

        engine.end_player_turn().unwrap();
        assert_eq!(
            engine.state().entities.actor(id).unwrap().position,
            far,
            "rooted enemies stay put"
        );
    }

    #[test]
    fn no_actions_after_game_over() {
        let mut state = GameState::new(GameConfig::new());
        state.turn.phase = TurnPhase::GameOver;
        let mut engine = GameEngine::new(&mut state);

        assert_eq!(engine.end_player_turn(), Err(TurnError::GameOver));
        let player_pos = engine.state().player().position;
        assert_eq!(
            engine.execute_player_action(ActionKind::Move, player_pos.offset(1, 0)),
            Err(ActionError::GameOver)
        );
    }
}
