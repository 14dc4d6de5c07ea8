//! Actor state and enemy templates.

use crate::config::GameConfig;

use super::{EntityId, Position, ResourceMeter, StatusSlot, TelegraphedAction};

/// Which side an actor fights for. An explicit tag, checked directly at the
/// action-execution boundary (power consumption, target filtering).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActorKind {
    Player,
    Enemy,
}

/// Externally authored enemy stat block.
///
/// Templates are static data: the core reads them, the spawn scheduler picks
/// among them by weight and wave, and nothing in the session mutates them.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyTemplate {
    pub name: String,
    pub max_health: u32,
    pub attack_damage: u32,
    pub move_range: u32,
    pub attack_range: u32,
    /// Relative weight for the spawn scheduler's random pick.
    pub spawn_weight: u32,
    /// First wave this template may appear in.
    pub min_wave: u32,
    /// Score awarded to the player on kill.
    pub score: u32,
}

/// Complete per-actor state.
///
/// `position` is kept in lockstep with grid occupancy by the state-level
/// placement helpers; nothing else writes it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorState {
    pub id: EntityId,
    pub kind: ActorKind,
    pub position: Position,
    pub health: ResourceMeter,
    pub status: StatusSlot,
    /// Stat block for enemies; `None` for the player.
    pub template: Option<EnemyTemplate>,
    /// The cached next intended action. Meaningful for enemies only; the
    /// player's slot stays `None`-kinded.
    pub telegraph: TelegraphedAction,
}

impl ActorState {
    pub fn player(position: Position, max_health: u32) -> Self {
        Self {
            id: EntityId::PLAYER,
            kind: ActorKind::Player,
            position,
            health: ResourceMeter::full(max_health),
            status: StatusSlot::empty(),
            template: None,
            telegraph: TelegraphedAction::none(position),
        }
    }

    pub fn enemy(id: EntityId, position: Position, template: EnemyTemplate) -> Self {
        Self {
            id,
            kind: ActorKind::Enemy,
            position,
            health: ResourceMeter::full(template.max_health),
            status: StatusSlot::empty(),
            telegraph: TelegraphedAction::none(position),
            template: Some(template),
        }
    }

    pub fn is_player(&self) -> bool {
        self.kind == ActorKind::Player
    }

    pub fn is_enemy(&self) -> bool {
        self.kind == ActorKind::Enemy
    }

    pub fn is_dead(&self) -> bool {
        self.health.is_depleted()
    }

    /// Base damage dealt by this actor's attacks.
    pub fn attack_damage(&self) -> u32 {
        match &self.template {
            Some(t) => t.attack_damage,
            None => GameConfig::PLAYER_ATTACK_DAMAGE,
        }
    }

    pub fn move_range(&self) -> u32 {
        match &self.template {
            Some(t) => t.move_range,
            None => GameConfig::PLAYER_MOVE_RANGE,
        }
    }

    pub fn attack_range(&self) -> u32 {
        match &self.template {
            Some(t) => t.attack_range,
            None => GameConfig::ATTACK_RANGE,
        }
    }
}
