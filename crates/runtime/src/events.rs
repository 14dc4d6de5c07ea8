//! Topic-based event bus.
//!
//! The session republishes every [`GameEvent`] the core returns so UIs and
//! recorders can subscribe to just the stream they care about. Publishing is
//! best-effort: a topic with no subscribers drops its events.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use game_core::GameEvent;

/// Topics for event routing.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Turn cycle milestones (phase changes, completed cycles).
    Turn,
    /// Everything that happens inside a turn.
    GameState,
}

/// A core event stamped with the cycle it happened in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub turn_number: u32,
    pub event: GameEvent,
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self.event {
            GameEvent::PhaseChanged { .. } | GameEvent::TurnCompleted { .. } => Topic::Turn,
            _ => Topic::GameState,
        }
    }
}

/// Routes events onto one broadcast channel per topic.
///
/// The topic set is closed, so each channel is created up front and held
/// directly; subscribing never allocates.
pub struct EventBus {
    turn: broadcast::Sender<Event>,
    game_state: broadcast::Sender<Event>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a bus with the given buffer capacity per topic.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            turn: broadcast::channel(capacity).0,
            game_state: broadcast::channel(capacity).0,
        }
    }

    fn sender(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::Turn => &self.turn,
            Topic::GameState => &self.game_state,
        }
    }

    /// Publishes an event onto its topic's channel. A send error only means
    /// nobody is listening right now, which is not a failure.
    pub fn publish(&self, event: Event) {
        let topic = event.topic();
        if self.sender(topic).send(event).is_err() {
            tracing::trace!("no subscribers for topic {topic:?}");
        }
    }

    /// Returns a receiver that sees only events routed to `topic`.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.sender(topic).subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
