//! Complete game state.
//!
//! [`GameState`] is a plain value: cloneable, comparable, and (with the
//! `serde` feature) serializable. All mutation goes through the engine and
//! the placement helpers here, which maintain the one-occupant-per-cell
//! invariant between the grid and the actor roster.

pub mod turn;
pub mod types;

use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::error::{GridError, SpawnError};

use self::turn::TurnState;
use self::types::{ActorState, EnemyTemplate, EntityId, Grid, Position, PowerPool, TrapState};

/// The player plus every live enemy.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntitiesState {
    pub player: ActorState,
    pub enemies: ArrayVec<ActorState, { GameConfig::MAX_ENEMIES }>,
    next_id: u32,
}

impl EntitiesState {
    fn new(player: ActorState) -> Self {
        Self {
            player,
            enemies: ArrayVec::new(),
            next_id: 1,
        }
    }

    pub fn actor(&self, id: EntityId) -> Option<&ActorState> {
        if id.is_player() {
            Some(&self.player)
        } else {
            self.enemies.iter().find(|e| e.id == id)
        }
    }

    pub fn actor_mut(&mut self, id: EntityId) -> Option<&mut ActorState> {
        if id.is_player() {
            Some(&mut self.player)
        } else {
            self.enemies.iter_mut().find(|e| e.id == id)
        }
    }

    /// Player first, then enemies in spawn order.
    pub fn all_actors(&self) -> impl Iterator<Item = &ActorState> {
        std::iter::once(&self.player).chain(self.enemies.iter())
    }

    fn allocate_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }
}

/// Everything the rules engine reads and writes.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub config: GameConfig,
    pub grid: Grid,
    pub entities: EntitiesState,
    pub traps: TrapState,
    pub turn: TurnState,
    /// The player's power pool. Enemies act for free.
    pub power: PowerPool,
    pub score: u32,
}

impl GameState {
    /// Fresh session state: empty grid, player at the center, full pools.
    pub fn new(config: GameConfig) -> Self {
        let grid = Grid::new(config.grid_width, config.grid_height);
        let center = Position::new(
            (config.grid_width / 2) as i32,
            (config.grid_height / 2) as i32,
        );
        let player = ActorState::player(center, config.player_max_health);
        let power = PowerPool::new(config.player_max_power);

        let mut state = Self {
            grid,
            entities: EntitiesState::new(player),
            traps: TrapState::new(),
            turn: TurnState::new(),
            power,
            score: 0,
            config,
        };
        state.grid.set_occupied(center, EntityId::PLAYER);
        state
    }

    pub fn player(&self) -> &ActorState {
        &self.entities.player
    }

    /// Relocates an actor, keeping grid occupancy in sync. The destination
    /// must be free; callers validate legality (range, status, walkability)
    /// before moving.
    pub fn move_actor(&mut self, id: EntityId, to: Position) -> bool {
        let Some(from) = self.entities.actor(id).map(|a| a.position) else {
            return false;
        };
        if !self.grid.cell(to).is_some_and(|c| c.is_free()) {
            return false;
        }
        self.grid.clear_occupied(from);
        self.grid.set_occupied(to, id);
        if let Some(actor) = self.entities.actor_mut(id) {
            actor.position = to;
        }
        true
    }

    /// Adds an enemy at `position`, claiming the cell.
    pub fn spawn_enemy(
        &mut self,
        template: EnemyTemplate,
        position: Position,
    ) -> Result<EntityId, SpawnError> {
        let cell = self.grid.cell(position).ok_or(SpawnError::OutOfBounds)?;
        if !cell.walkable {
            return Err(SpawnError::NotWalkable);
        }
        if cell.occupant.is_some() {
            return Err(SpawnError::Occupied);
        }
        if self.entities.enemies.is_full() {
            return Err(SpawnError::RosterFull);
        }

        let id = self.entities.allocate_id();
        let enemy = ActorState::enemy(id, position, template);
        self.grid.set_occupied(position, id);
        // Capacity was checked above.
        let _ = self.entities.enemies.try_push(enemy);
        Ok(id)
    }

    /// Removes a dead or despawned enemy, freeing its cell.
    pub fn remove_enemy(&mut self, id: EntityId) -> Option<ActorState> {
        let index = self.entities.enemies.iter().position(|e| e.id == id)?;
        let enemy = self.entities.enemies.remove(index);
        self.grid.clear_occupied(enemy.position);
        Some(enemy)
    }

    /// Grows the grid and shifts every position-bearing piece of state by
    /// the re-centering offset: actors, telegraphs, and traps.
    pub fn expand_grid(&mut self, new_width: u32, new_height: u32) -> Result<Position, GridError> {
        let offset = self.grid.expand(new_width, new_height)?;

        let shift_actor = |actor: &mut ActorState| {
            actor.position = actor.position + offset;
            actor.telegraph.origin = actor.telegraph.origin + offset;
            actor.telegraph.target = actor.telegraph.target + offset;
        };
        shift_actor(&mut self.entities.player);
        for enemy in &mut self.entities.enemies {
            shift_actor(enemy);
        }
        self.traps.shift(offset);
        Ok(offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::types::ActorKind;

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
    fn new_state_places_player_at_center() {
        let state = GameState::new(GameConfig::new());
        let player = state.player();
        assert_eq!(player.position, Position::new(4, 4));
        assert_eq!(state.grid.occupant(player.position), Some(EntityId::PLAYER));
        assert_eq!(state.power.current(), GameConfig::DEFAULT_PLAYER_POWER);
    }

    #[test]
    fn move_actor_keeps_occupancy_in_sync() {
        let mut state = GameState::new(GameConfig::new());
        let from = state.player().position;
        let to = from.offset(1, 0);

        assert!(state.move_actor(EntityId::PLAYER, to));
        assert_eq!(state.grid.occupant(from), None);
        assert_eq!(state.grid.occupant(to), Some(EntityId::PLAYER));
        assert_eq!(state.player().position, to);
    }

    #[test]
    fn one_occupant_per_cell() {
        let mut state = GameState::new(GameConfig::new());
        let spot = Position::new(0, 0);
        let id = state.spawn_enemy(template(), spot).unwrap();
        assert_eq!(
            state.spawn_enemy(template(), spot),
            Err(SpawnError::Occupied)
        );
        // Moving onto the occupied cell is refused as well.
        assert!(!state.move_actor(EntityId::PLAYER, spot));

        state.remove_enemy(id);
        assert!(state.move_actor(EntityId::PLAYER, spot));
    }

    #[test]
    fn spawned_enemy_is_addressable_by_id() {
        let mut state = GameState::new(GameConfig::new());
        let id = state.spawn_enemy(template(), Position::new(1, 1)).unwrap();
        let enemy = state.entities.actor(id).unwrap();
        assert_eq!(enemy.kind, ActorKind::Enemy);
        assert_eq!(enemy.health.current, 2);
        assert_eq!(state.entities.all_actors().count(), 2);
    }

    #[test]
    fn expand_grid_shifts_everything() {
        let mut state = GameState::new(GameConfig::new());
        let enemy_id = state.spawn_enemy(template(), Position::new(0, 0)).unwrap();

        let offset = state.expand_grid(12, 12).unwrap();
        assert_eq!(offset, Position::new(2, 2));
        assert_eq!(state.player().position, Position::new(6, 6));

        let enemy = state.entities.actor(enemy_id).unwrap();
        assert_eq!(enemy.position, Position::new(2, 2));
        assert_eq!(state.grid.occupant(Position::new(2, 2)), Some(enemy_id));
        assert_eq!(state.grid.occupant(Position::new(0, 0)), None);
    }
}
