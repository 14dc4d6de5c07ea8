//! The player's power economy.
//!
//! Power is the consumable resource gating every player action. Enemies never
//! touch this pool; the action dispatcher decides by actor identity, not by
//! action kind.

/// Bounded power pool with an additive temporary bonus reserve.
///
/// The bonus pool (granted by power-ups) drains before the base pool and is
/// not capped by `maximum`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PowerPool {
    current: u32,
    maximum: u32,
    bonus: u32,
}

impl PowerPool {
    pub fn new(maximum: u32) -> Self {
        Self {
            current: maximum,
            maximum,
            bonus: 0,
        }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn maximum(&self) -> u32 {
        self.maximum
    }

    pub fn bonus(&self) -> u32 {
        self.bonus
    }

    /// Total spendable power (base + bonus).
    pub fn available(&self) -> u32 {
        self.current + self.bonus
    }

    pub fn has_enough(&self, cost: u32) -> bool {
        cost <= self.available()
    }

    /// Spends `cost`, bonus pool first.
    ///
    /// Callers must check [`PowerPool::has_enough`] before mutating state;
    /// if they did not, the pools clamp at zero rather than underflow. That
    /// is a contract violation on the caller's side, not a supported path.
    pub fn consume(&mut self, cost: u32) {
        let from_bonus = cost.min(self.bonus);
        self.bonus -= from_bonus;
        self.current = self.current.saturating_sub(cost - from_bonus);
    }

    /// Restores base power, clamped at the maximum.
    pub fn regenerate(&mut self, amount: u32) {
        self.current = (self.current + amount).min(self.maximum);
    }

    /// Adds temporary power from a power-up. Not capped.
    pub fn gain_bonus(&mut self, amount: u32) {
        self.bonus += amount;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consume_drains_bonus_before_base() {
        let mut pool = PowerPool::new(10);
        pool.gain_bonus(3);
        assert_eq!(pool.available(), 13);

        pool.consume(4);
        assert_eq!(pool.bonus(), 0);
        assert_eq!(pool.current(), 9);
    }

    #[test]
    fn has_enough_counts_bonus() {
        let mut pool = PowerPool::new(2);
        assert!(!pool.has_enough(3));
        pool.gain_bonus(1);
        assert!(pool.has_enough(3));
    }

    #[test]
    fn misuse_clamps_instead_of_underflowing() {
        let mut pool = PowerPool::new(2);
        pool.consume(5);
        assert_eq!(pool.available(), 0);
    }

    #[test]
    fn regenerate_caps_at_maximum() {
        let mut pool = PowerPool::new(10);
        pool.consume(3);
        pool.regenerate(100);
        assert_eq!(pool.current(), 10);
    }
}
