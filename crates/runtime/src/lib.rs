//! Runtime orchestration for the deterministic rules engine.
//!
//! This crate wires the core engine, content catalogs, and the runtime-only
//! policies (wave spawning, pickup drops, grid expansion) into a session API.
//! Consumers embed [`GameSession`] to drive turns and subscribe to events.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the orchestrator
//! - [`events`] provides the topic-based event bus
//! - [`spawner`] schedules wave spawns and power-up drops
//! - [`expansion`] grows the arena on a turn interval
//! - [`telemetry`] sets up tracing for binaries and tests

pub mod error;
pub mod events;
pub mod expansion;
pub mod session;
pub mod spawner;
pub mod telemetry;

pub use error::{Result, RuntimeError};
pub use events::{Event, EventBus, Topic};
pub use expansion::ExpansionPolicy;
pub use session::GameSession;
pub use spawner::WaveScheduler;
