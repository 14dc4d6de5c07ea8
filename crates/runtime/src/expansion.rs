//! Periodic grid growth with obstacle seeding.
//!
//! Every N completed turn cycles the arena grows, existing content is
//! re-centered by the core, and the fresh border ring is seeded with obstacle
//! patterns. Obstacles never land on occupied cells, traps, or pickups, so
//! growth can never wall anything in retroactively.

use rand::Rng;
use rand::rngs::StdRng;

use game_core::state::types::Position;
use game_core::{GameConfig, GameEngine, GameEvent, GameState};

/// Obstacle pattern shapes, as offsets from an anchor cell.
const PATTERNS: [&[(i32, i32)]; 5] = [
    // wall segment
    &[(0, 0), (1, 0), (2, 0)],
    // L
    &[(0, 0), (1, 0), (2, 0), (2, 1)],
    // plus
    &[(0, 0), (1, 0), (-1, 0), (0, 1), (0, -1)],
    // cluster
    &[(0, 0), (1, 0), (0, 1), (1, 1)],
    // zigzag
    &[(0, 0), (1, 0), (1, 1), (2, 1)],
];

/// Grows the grid on a fixed turn interval.
pub struct ExpansionPolicy {
    interval: u32,
    increment: u32,
}

impl ExpansionPolicy {
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            interval: config.expansion_turn_interval,
            increment: config.expansion_increment,
        }
    }

    /// Expands the grid when the completed-turn counter hits the interval.
    pub fn on_turn_completed(&self, state: &mut GameState, rng: &mut StdRng) -> Vec<GameEvent> {
        let turn = state.turn.turn_number;
        if self.interval == 0 || self.increment == 0 || turn == 0 || turn % self.interval != 0 {
            return Vec::new();
        }

        let old_width = state.grid.width();
        let old_height = state.grid.height();
        let new_width = old_width + self.increment;
        let new_height = old_height + self.increment;

        let mut engine = GameEngine::new(state);
        let Ok(mut events) = engine.expand_grid(new_width, new_height) else {
            return Vec::new();
        };
        let offset = match events.first() {
            Some(GameEvent::GridExpanded { offset, .. }) => *offset,
            _ => Position::ORIGIN,
        };
        tracing::info!(new_width, new_height, turn, "grid expanded");

        self.seed_obstacles(state, rng, offset, old_width, old_height);
        // New walls may invalidate shifted move telegraphs.
        events.extend(GameEngine::new(state).refresh_telegraphs());
        events
    }

    /// Scatters obstacle patterns over the fresh border ring.
    fn seed_obstacles(
        &self,
        state: &mut GameState,
        rng: &mut StdRng,
        offset: Position,
        old_width: u32,
        old_height: u32,
    ) {
        let in_old_rect = |pos: Position| {
            pos.x >= offset.x
                && pos.x < offset.x + old_width as i32
                && pos.y >= offset.y
                && pos.y < offset.y + old_height as i32
        };

        let pattern_count = self.increment.max(2);
        for _ in 0..pattern_count {
            let pattern = PATTERNS[rng.gen_range(0..PATTERNS.len())];
            let anchor = Position::new(
                rng.gen_range(0..state.grid.width()) as i32,
                rng.gen_range(0..state.grid.height()) as i32,
            );
            for (dx, dy) in pattern {
                let cell_pos = anchor.offset(*dx, *dy);
                if in_old_rect(cell_pos) {
                    continue;
                }
                let blockable = state.grid.cell(cell_pos).is_some_and(|c| {
                    c.is_free() && c.power_up.is_none()
                }) && state.traps.live_trap_at(cell_pos).is_none();
                if blockable {
                    state.grid.set_walkable(cell_pos, false);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn expands_only_on_the_interval() {
        let config = GameConfig::new();
        let policy = ExpansionPolicy::from_config(&config);
        let mut state = GameState::new(config.clone());
        let mut rng = StdRng::seed_from_u64(1);

        state.turn.turn_number = config.expansion_turn_interval - 1;
        assert!(policy.on_turn_completed(&mut state, &mut rng).is_empty());
        assert_eq!(state.grid.width(), config.grid_width);

        state.turn.turn_number = config.expansion_turn_interval;
        let events = policy.on_turn_completed(&mut state, &mut rng);
        assert!(events
            .iter()
            .any(|e| matches!(e, GameEvent::GridExpanded { .. })));
        assert_eq!(
            state.grid.width(),
            config.grid_width + config.expansion_increment
        );
    }

    #[test]
    fn obstacles_stay_out_of_the_original_rect() {
        let config = GameConfig::new();
        let policy = ExpansionPolicy::from_config(&config);
        let mut state = GameState::new(config.clone());
        let mut rng = StdRng::seed_from_u64(9);

        state.turn.turn_number = config.expansion_turn_interval;
        policy.on_turn_completed(&mut state, &mut rng);

        // The original rectangle was fully walkable and must remain so.
        let offset = Position::new(
            (config.expansion_increment / 2) as i32,
            (config.expansion_increment / 2) as i32,
        );
        for x in 0..config.grid_width as i32 {
            for y in 0..config.grid_height as i32 {
                let pos = Position::new(x + offset.x, y + offset.y);
                assert!(state.grid.cell(pos).unwrap().walkable, "blocked {pos}");
            }
        }
        assert_eq!(state.player().position, Position::new(8, 8));
    }
}
