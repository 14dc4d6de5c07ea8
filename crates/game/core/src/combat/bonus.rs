//! Positional attack bonus classification.
//!
//! Telegraphed enemy intents give the player's attacks positional leverage.
//! Classification is first-match-wins: backstab, then flank, then cornered.
//! Only player attacks against enemies earn a bonus.

use crate::state::{GameState, types::ActorState, types::Position};

/// How the attacker's position relates to the defender's telegraphed facing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PositionBonus {
    #[default]
    None,
    /// Attacker is perpendicular to the defender's facing.
    Flank,
    /// Defender has three or more orthogonal escape cells blocked.
    Cornered,
    /// Attacker sits exactly opposite the defender's facing.
    Backstab,
}

impl PositionBonus {
    /// Extra damage this bonus adds to the base attack.
    pub fn damage(self) -> u32 {
        match self {
            Self::None => 0,
            Self::Flank | Self::Cornered => 1,
            Self::Backstab => 2,
        }
    }
}

/// Classifies the bonus for an attack from `attacker` onto `defender`.
///
/// Facing is the per-axis sign from where the defender stands now toward its
/// telegraphed target; a defender displaced after deciding faces from its new
/// cell. An idle telegraph has no facing, so only the cornered check can
/// apply.
pub fn classify(state: &GameState, attacker: &ActorState, defender: &ActorState) -> PositionBonus {
    if !attacker.is_player() || !defender.is_enemy() {
        return PositionBonus::None;
    }

    let approach = defender.position.direction_toward(attacker.position);
    if defender.telegraph.is_valid() {
        let facing = defender
            .position
            .direction_toward(defender.telegraph.target);
        if facing != Position::ORIGIN {
            if approach.x == -facing.x && approach.y == -facing.y {
                return PositionBonus::Backstab;
            }
            if approach.x * facing.x + approach.y * facing.y == 0 {
                return PositionBonus::Flank;
            }
        }
    }

    if is_cornered(state, defender.position) {
        return PositionBonus::Cornered;
    }
    PositionBonus::None
}

/// True when at least three of the four orthogonal neighbors are blocked
/// (out of bounds, unwalkable, or occupied).
fn is_cornered(state: &GameState, position: Position) -> bool {
    let blocked = Position::ORTHOGONAL
        .iter()
        .filter(|step| {
            let cell = position + **step;
            !state.grid.cell(cell).is_some_and(|c| c.is_free())
        })
        .count();
    blocked >= 3
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::state::types::{EnemyTemplate, TelegraphKind, TelegraphedAction};

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

    fn state_with_enemy(
        enemy_pos: Position,
        telegraph_target: Position,
    ) -> (GameState, crate::state::types::EntityId) {
        let mut state = GameState::new(GameConfig::new());
        let id = state.spawn_enemy(template(), enemy_pos).unwrap();
        let enemy = state.entities.actor_mut(id).unwrap();
        enemy.telegraph = TelegraphedAction::new(TelegraphKind::Move, telegraph_target, enemy_pos);
        (state, id)
    }

    #[test]
    fn backstab_from_exactly_behind() {
        // Enemy at (2,4) facing right toward (4,4); player at (4,4) default
        // center would be in front. Put the player behind instead.
        let (mut state, id) = state_with_enemy(Position::new(2, 4), Position::new(4, 4));
        state.move_actor(crate::state::types::EntityId::PLAYER, Position::new(0, 4));

        let attacker = state.player().clone();
        let defender = state.entities.actor(id).unwrap().clone();
        assert_eq!(classify(&state, &attacker, &defender), PositionBonus::Backstab);
    }

    #[test]
    fn perpendicular_attacker_flanks() {
        let (mut state, id) = state_with_enemy(Position::new(2, 4), Position::new(4, 4));
        state.move_actor(crate::state::types::EntityId::PLAYER, Position::new(2, 2));

        let attacker = state.player().clone();
        let defender = state.entities.actor(id).unwrap().clone();
        assert_eq!(classify(&state, &attacker, &defender), PositionBonus::Flank);
    }

    #[test]
    fn frontal_attack_earns_nothing() {
        let (mut state, id) = state_with_enemy(Position::new(2, 4), Position::new(4, 4));
        state.move_actor(crate::state::types::EntityId::PLAYER, Position::new(4, 4));

        let attacker = state.player().clone();
        let defender = state.entities.actor(id).unwrap().clone();
        assert_eq!(classify(&state, &attacker, &defender), PositionBonus::None);
    }

    #[test]
    fn cornered_when_three_escapes_blocked() {
        // Enemy in the corner with an idle telegraph: two neighbors are out
        // of bounds, wall off a third.
        let mut state = GameState::new(GameConfig::new());
        let id = state.spawn_enemy(template(), Position::new(0, 0)).unwrap();
        state.grid.set_walkable(Position::new(1, 0), false);

        let attacker = state.player().clone();
        let defender = state.entities.actor(id).unwrap().clone();
        assert_eq!(classify(&state, &attacker, &defender), PositionBonus::Cornered);
    }

    #[test]
    fn facing_tracks_a_displaced_defender() {
        // The enemy telegraphed from (5,4), then got shoved to (5,2). Facing
        // is read from where it stands now: (-1,1), not the stale (-1,0).
        let (mut state, id) = state_with_enemy(Position::new(5, 4), Position::new(4, 4));
        state.move_actor(id, Position::new(5, 2));
        state.move_actor(crate::state::types::EntityId::PLAYER, Position::new(5, 4));

        let attacker = state.player().clone();
        let defender = state.entities.actor(id).unwrap().clone();
        assert_eq!(classify(&state, &attacker, &defender), PositionBonus::None);
    }

    #[test]
    fn enemies_never_earn_bonuses() {
        let (state, id) = state_with_enemy(Position::new(2, 4), Position::new(4, 4));
        let enemy = state.entities.actor(id).unwrap().clone();
        let player = state.player().clone();
        assert_eq!(classify(&state, &enemy, &player), PositionBonus::None);
    }
}
