//! Enemy decision-making.
//!
//! Decisions are pure: they read the state and produce a telegraph, and the
//! engine executes the telegraph on the following enemy turn. Stunned enemies
//! still decide; the gate is at execution time, so a stun that expires before
//! the enemy acts does not leave it idle.

use crate::state::GameState;
use crate::state::types::{EntityId, TelegraphKind, TelegraphedAction};

/// Picks the enemy's next intent.
///
/// Attack when the player is in range, otherwise step to the reachable free
/// cell closest to the player (first encountered on ties, in grid scan
/// order). An enemy with no cell that improves its distance idles.
pub fn decide_next_action(state: &GameState, enemy: EntityId) -> TelegraphedAction {
    let Some(enemy_state) = state.entities.actor(enemy) else {
        return TelegraphedAction::default();
    };
    let origin = enemy_state.position;
    let player = state.player().position;

    let distance = origin.manhattan(player);
    if distance > 0 && distance <= enemy_state.attack_range() {
        return TelegraphedAction::new(TelegraphKind::Attack, player, origin);
    }

    // Only a strict improvement is worth telegraphing; otherwise idle.
    let destination = state
        .grid
        .cells_in_range(origin, enemy_state.move_range(), true)
        .into_iter()
        .min_by_key(|cell| cell.manhattan(player))
        .filter(|best| best.manhattan(player) < distance);
    match destination {
        Some(target) => TelegraphedAction::new(TelegraphKind::Move, target, origin),
        None => TelegraphedAction::none(origin),
    }
}
