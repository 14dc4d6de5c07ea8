//! Plain-data building blocks of the game state.

mod actor;
mod common;
mod power;
mod status;
mod telegraph;
mod trap;
mod world;

pub use actor::{ActorKind, ActorState, EnemyTemplate};
pub use common::{EntityId, Position, ResourceMeter};
pub use power::PowerPool;
pub use status::{StatusEffect, StatusEffectKind, StatusSlot};
pub use telegraph::{TelegraphKind, TelegraphedAction};
pub use trap::{Trap, TrapState};
pub use world::{Cell, Grid, PowerUp};
