//! Combat math: positional bonuses and damage resolution.

mod bonus;
mod damage;

pub use bonus::{PositionBonus, classify};
pub use damage::{resolve_attack_damage, strike};
