//! Turn cycle bookkeeping.

/// Whose side is acting, or whether the session has ended.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnPhase {
    /// The player may submit any number of actions while power lasts.
    #[default]
    PlayerTurn,
    /// The engine is executing telegraphed enemy actions.
    EnemyTurn,
    /// Terminal. No action executes in this phase.
    GameOver,
}

/// Current phase and completed-cycle counter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnState {
    pub phase: TurnPhase,
    /// Completed full cycles (player turn + enemy turn). Starts at zero.
    pub turn_number: u32,
}

impl TurnState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_over(&self) -> bool {
        self.phase == TurnPhase::GameOver
    }
}
