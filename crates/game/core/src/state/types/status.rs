//! Status effect model.
//!
//! Each actor holds at most one active effect. Reapplying the same kind
//! refreshes the duration to the larger of the two; a different kind
//! overwrites outright. Effects never combine.

/// Timed conditions gating an actor's move/act capability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatusEffectKind {
    /// Cannot move or initiate actions. Also amplifies incoming attack damage.
    Stunned,
    /// Cannot move.
    Rooted,
    /// Query-only flag; no gating at this layer.
    Slowed,
}

/// A single status effect counted down in whole turn cycles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffect {
    pub kind: StatusEffectKind,
    /// Remaining duration in full turn cycles. Zero means expired.
    pub remaining: u32,
}

impl StatusEffect {
    pub fn new(kind: StatusEffectKind, duration: u32) -> Self {
        Self {
            kind,
            remaining: duration,
        }
    }
}

/// Per-actor single-slot effect holder.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusSlot {
    active: Option<StatusEffect>,
}

impl StatusSlot {
    pub fn empty() -> Self {
        Self { active: None }
    }

    pub fn active(&self) -> Option<StatusEffect> {
        self.active
    }

    /// Applies an effect: same kind refreshes to `max(old, new)` duration,
    /// a different kind replaces the old effect outright.
    pub fn apply(&mut self, effect: StatusEffect) {
        match &mut self.active {
            Some(current) if current.kind == effect.kind => {
                current.remaining = current.remaining.max(effect.remaining);
            }
            _ => self.active = Some(effect),
        }
    }

    pub fn clear(&mut self) {
        self.active = None;
    }

    /// Counts the effect down by one turn cycle. Returns the effect that
    /// expired on this tick, if any.
    pub fn tick(&mut self) -> Option<StatusEffect> {
        let effect = self.active.as_mut()?;
        effect.remaining = effect.remaining.saturating_sub(1);
        if effect.remaining == 0 {
            self.active.take()
        } else {
            None
        }
    }

    fn has(&self, kind: StatusEffectKind) -> bool {
        self.active
            .is_some_and(|e| e.kind == kind && e.remaining > 0)
    }

    pub fn is_stunned(&self) -> bool {
        self.has(StatusEffectKind::Stunned)
    }

    pub fn is_rooted(&self) -> bool {
        self.has(StatusEffectKind::Rooted)
    }

    pub fn is_slowed(&self) -> bool {
        self.has(StatusEffectKind::Slowed)
    }

    /// Stunned blocks everything; Rooted blocks movement only.
    pub fn can_move(&self) -> bool {
        !self.is_stunned() && !self.is_rooted()
    }

    pub fn can_act(&self) -> bool {
        !self.is_stunned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_kind_refreshes_to_longer_duration() {
        let mut slot = StatusSlot::empty();
        slot.apply(StatusEffect::new(StatusEffectKind::Stunned, 3));
        slot.apply(StatusEffect::new(StatusEffectKind::Stunned, 1));
        assert_eq!(slot.active().unwrap().remaining, 3);

        slot.apply(StatusEffect::new(StatusEffectKind::Stunned, 5));
        assert_eq!(slot.active().unwrap().remaining, 5);
    }

    #[test]
    fn different_kind_overwrites() {
        let mut slot = StatusSlot::empty();
        slot.apply(StatusEffect::new(StatusEffectKind::Stunned, 3));
        slot.apply(StatusEffect::new(StatusEffectKind::Rooted, 1));
        assert!(slot.is_rooted());
        assert!(!slot.is_stunned());
    }

    #[test]
    fn tick_clears_on_expiry() {
        let mut slot = StatusSlot::empty();
        slot.apply(StatusEffect::new(StatusEffectKind::Rooted, 2));
        assert!(slot.tick().is_none());
        assert!(slot.is_rooted());

        let expired = slot.tick().expect("expires on second tick");
        assert_eq!(expired.kind, StatusEffectKind::Rooted);
        assert!(slot.active().is_none());
    }

    #[test]
    fn gating_queries() {
        let mut slot = StatusSlot::empty();
        assert!(slot.can_move() && slot.can_act());

        slot.apply(StatusEffect::new(StatusEffectKind::Rooted, 1));
        assert!(!slot.can_move());
        assert!(slot.can_act());

        slot.apply(StatusEffect::new(StatusEffectKind::Stunned, 1));
        assert!(!slot.can_move());
        assert!(!slot.can_act());

        slot.apply(StatusEffect::new(StatusEffectKind::Slowed, 1));
        assert!(slot.can_move() && slot.can_act());
    }
}
