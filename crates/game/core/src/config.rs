/// Game configuration constants and tunable parameters.
///
/// Compile-time capacities bound every collection in [`crate::state::GameState`]
/// so the engine never allocates past a known ceiling mid-session. Runtime
/// tunables are the knobs the balance data exposes.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Player health pool at session start.
    pub player_max_health: u32,
    /// Player power pool at session start (current and maximum).
    pub player_max_power: u32,
    /// Power restored to the player at the end of each full turn cycle.
    /// Zero disables regeneration.
    pub power_regen_per_turn: u32,
    /// Starting grid dimensions.
    pub grid_width: u32,
    pub grid_height: u32,
    /// Full turn cycles between grid expansions (consumed by the runtime's
    /// expansion policy; the core only exposes `Grid::expand`).
    pub expansion_turn_interval: u32,
    /// Cells added to each dimension per expansion.
    pub expansion_increment: u32,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum live enemies in the roster.
    pub const MAX_ENEMIES: usize = 64;
    /// Maximum concurrently placed traps.
    pub const MAX_TRAPS: usize = 16;

    // ===== baseline player combat numbers =====
    pub const PLAYER_ATTACK_DAMAGE: u32 = 1;
    pub const PLAYER_MOVE_RANGE: u32 = 3;

    // ===== action parameters (cost / range / magnitude) =====
    pub const MOVE_COST: u32 = 1;
    pub const ATTACK_COST: u32 = 3;
    pub const ATTACK_RANGE: u32 = 2;
    pub const SPECIAL_COST: u32 = 5;
    pub const SPECIAL_RANGE: u32 = 3;
    pub const SPECIAL_DAMAGE: u32 = 2;
    /// Manhattan radius of the Special blast around its target cell.
    pub const SPECIAL_BLAST_RADIUS: u32 = 1;
    pub const STUN_BLAST_COST: u32 = 4;
    pub const STUN_BLAST_RANGE: u32 = 3;
    pub const STUN_DURATION: u32 = 1;
    pub const ICE_TRAP_COST: u32 = 3;
    pub const ICE_TRAP_RANGE: u32 = 4;
    pub const ROOT_DURATION: u32 = 2;
    pub const KNOCKBACK_COST: u32 = 5;
    pub const KNOCKBACK_RANGE: u32 = 1;
    /// Maximum cells an enemy is pushed by Knockback Wave.
    pub const KNOCKBACK_DISTANCE: u32 = 2;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_PLAYER_HEALTH: u32 = 3;
    pub const DEFAULT_PLAYER_POWER: u32 = 10;
    pub const DEFAULT_POWER_REGEN: u32 = 2;
    pub const DEFAULT_GRID_WIDTH: u32 = 8;
    pub const DEFAULT_GRID_HEIGHT: u32 = 8;
    pub const DEFAULT_EXPANSION_INTERVAL: u32 = 10;
    pub const DEFAULT_EXPANSION_INCREMENT: u32 = 8;

    pub fn new() -> Self {
        Self {
            player_max_health: Self::DEFAULT_PLAYER_HEALTH,
            player_max_power: Self::DEFAULT_PLAYER_POWER,
            power_regen_per_turn: Self::DEFAULT_POWER_REGEN,
            grid_width: Self::DEFAULT_GRID_WIDTH,
            grid_height: Self::DEFAULT_GRID_HEIGHT,
            expansion_turn_interval: Self::DEFAULT_EXPANSION_INTERVAL,
            expansion_increment: Self::DEFAULT_EXPANSION_INCREMENT,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
