//! Deterministic rules engine for a turn-based, grid-positioned tactics game.
//!
//! The crate is a pure state machine: no clocks, no randomness, no I/O.
//! Callers own a [`state::GameState`], drive it through an
//! [`engine::GameEngine`], and observe every mutation through the
//! [`events::GameEvent`] values each call returns. Identical inputs always
//! produce identical states, which is what makes sessions replayable from an
//! action log.
//!
//! Layering, lowest first:
//! - [`state`]: plain data (grid, actors, traps, pools) plus the placement
//!   helpers that keep grid occupancy and actor positions in lockstep.
//! - [`combat`]: positional bonus classification and damage resolution.
//! - [`action`]: the six-action contract and its validate/apply dispatcher.
//! - [`ai`]: pure enemy decision-making, one telegraph ahead.
//! - [`engine`]: the turn cycle tying it all together.

pub mod action;
pub mod ai;
pub mod combat;
pub mod config;
pub mod engine;
pub mod error;
pub mod events;
pub mod state;

pub use action::{ActionError, ActionKind};
pub use config::GameConfig;
pub use engine::{GameEngine, TurnError};
pub use error::{CoreError, ErrorSeverity, GridError, SpawnError};
pub use events::GameEvent;
pub use state::{GameState, turn::TurnPhase};
