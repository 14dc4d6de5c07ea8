//! Telegraphed enemy intentions.
//!
//! Each enemy's next action is computed one turn ahead and exposed to the
//! opposing side before it executes. The attack bonus math reads the current
//! telegraph to classify backstabs and flanks.

use super::Position;

/// What an enemy intends to do on its next turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TelegraphKind {
    /// No viable action; the enemy will idle.
    #[default]
    None,
    Move,
    Attack,
}

/// A pre-computed enemy action: kind plus the coordinates it was planned with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TelegraphedAction {
    pub kind: TelegraphKind,
    /// Cell the action will be aimed at.
    pub target: Position,
    /// The enemy's own position at decide time.
    pub origin: Position,
}

impl TelegraphedAction {
    pub fn new(kind: TelegraphKind, target: Position, origin: Position) -> Self {
        Self {
            kind,
            target,
            origin,
        }
    }

    /// An idle telegraph anchored at the enemy's current cell.
    pub fn none(origin: Position) -> Self {
        Self::new(TelegraphKind::None, origin, origin)
    }

    pub fn is_valid(&self) -> bool {
        self.kind != TelegraphKind::None
    }
}
