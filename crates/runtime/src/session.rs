//! Session orchestration.
//!
//! [`GameSession`] owns the state, the seeded RNG, the spawn scheduler, and
//! the expansion policy, and republishes every core event on the bus. The
//! core stays deterministic; all randomness enters here, so a seed plus the
//! player's action log reproduces a run exactly.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::sync::broadcast;

use game_content::{EnemyCatalog, SpawnTuning};
use game_core::state::types::{EntityId, Position};
use game_core::{ActionKind, GameConfig, GameEngine, GameEvent, GameState, action};

use crate::error::{Result, RuntimeError};
use crate::events::{Event, EventBus, Topic};
use crate::expansion::ExpansionPolicy;
use crate::spawner::WaveScheduler;

/// One run of the game, from first spawn to game over.
pub struct GameSession {
    state: GameState,
    scheduler: WaveScheduler,
    expansion: ExpansionPolicy,
    bus: EventBus,
    rng: StdRng,
}

impl GameSession {
    /// Starts a session with a random seed.
    pub fn new(config: GameConfig, catalog: EnemyCatalog, tuning: SpawnTuning) -> Self {
        Self::with_seed(config, catalog, tuning, rand::random())
    }

    /// Starts a session with a fixed seed. Same seed, same run.
    pub fn with_seed(
        config: GameConfig,
        catalog: EnemyCatalog,
        tuning: SpawnTuning,
        seed: u64,
    ) -> Self {
        let expansion = ExpansionPolicy::from_config(&config);
        Self {
            state: GameState::new(config),
            scheduler: WaveScheduler::new(catalog, tuning),
            expansion,
            bus: EventBus::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn is_over(&self) -> bool {
        self.state.turn.is_over()
    }

    pub fn current_wave(&self) -> u32 {
        self.scheduler.current_wave(self.state.turn.turn_number)
    }

    /// Subscribe to one event topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.bus.subscribe(topic)
    }

    /// Spawns the opening batch of enemies. Call once, before the first
    /// player action.
    pub fn begin(&mut self) -> Vec<GameEvent> {
        let events = self.scheduler.spawn_batch(&mut self.state, &mut self.rng);
        tracing::info!(
            enemies = self.state.entities.enemies.len(),
            "session started"
        );
        self.publish(&events);
        events
    }

    /// Executes one player action and republishes its events.
    pub fn player_action(&mut self, kind: ActionKind, target: Position) -> Result<Vec<GameEvent>> {
        let events = GameEngine::new(&mut self.state).execute_player_action(kind, target)?;
        tracing::info!(%kind, %target, "player action executed");
        self.publish(&events);
        Ok(events)
    }

    /// Cells the player could legally target with `kind` right now.
    pub fn preview_targets(&self, kind: ActionKind) -> Vec<Position> {
        action::preview_targets(&self.state, EntityId::PLAYER, kind)
    }

    pub fn can_execute(&self, kind: ActionKind, target: Position) -> bool {
        action::can_execute(&self.state, EntityId::PLAYER, kind, target)
    }

    /// Ends the player phase: enemy pass, ticks, regeneration, then the
    /// runtime policies (spawning, pickups, expansion).
    pub fn end_turn(&mut self) -> Result<Vec<GameEvent>> {
        let mut events = GameEngine::new(&mut self.state).end_player_turn()?;
        if !self.state.turn.is_over() {
            events.extend(self.scheduler.on_turn_completed(&mut self.state, &mut self.rng));
            events.extend(self.expansion.on_turn_completed(&mut self.state, &mut self.rng));
        }
        tracing::debug!(
            turn = self.state.turn.turn_number,
            wave = self.current_wave(),
            enemies = self.state.entities.enemies.len(),
            "turn cycle completed"
        );
        self.publish(&events);
        Ok(events)
    }

    /// Spawns a named enemy at an exact cell. Used by scripted setups.
    pub fn spawn_enemy(&mut self, name: &str, position: Position) -> Result<EntityId> {
        let template = self
            .scheduler
            .catalog()
            .get(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UnknownTemplate(name.to_owned()))?;
        let (id, events) = GameEngine::new(&mut self.state).spawn_enemy(template, position)?;
        self.publish(&events);
        Ok(id)
    }

    fn publish(&self, events: &[GameEvent]) {
        for event in events {
            self.bus.publish(Event {
                turn_number: self.state.turn.turn_number,
                event: event.clone(),
            });
        }
    }
}
