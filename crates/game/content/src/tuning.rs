//! Spawn scheduler tuning.

/// Knobs driving the runtime's wave scheduler.
///
/// Waves count up from 1 as full turn cycles accumulate; spawn batches
/// arrive on an interval that shortens with the wave and grow with it too.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpawnTuning {
    /// Turn cycles per wave step.
    pub turns_per_wave: u32,
    /// Spawn interval floor, in turn cycles.
    pub min_spawn_interval: u32,
    /// Spawn interval at wave 1; shrinks by one every two waves.
    pub max_spawn_interval: u32,
    /// Enemies per batch at wave zero, before per-wave growth.
    pub base_spawn_count: f32,
    /// Extra enemies per wave, added before rounding.
    pub spawn_count_per_wave: f32,
    /// Random free-cell probes per spawn before giving up.
    pub placement_attempts: u32,
    /// Chance to drop a power-up each completed turn cycle.
    pub power_up_chance: f64,
    pub power_up_min_amount: u32,
    pub power_up_max_amount: u32,
    /// Turn cycles before an uncollected power-up despawns.
    pub power_up_lifetime: u32,
}

impl Default for SpawnTuning {
    fn default() -> Self {
        Self {
            turns_per_wave: 5,
            min_spawn_interval: 1,
            max_spawn_interval: 4,
            base_spawn_count: 1.0,
            spawn_count_per_wave: 0.5,
            placement_attempts: 100,
            power_up_chance: 0.2,
            power_up_min_amount: 2,
            power_up_max_amount: 5,
            power_up_lifetime: 3,
        }
    }
}

impl SpawnTuning {
    /// Wave number for a completed-turn count. Waves start at 1.
    pub fn wave_for_turn(&self, turn_number: u32) -> u32 {
        1 + turn_number / self.turns_per_wave.max(1)
    }

    /// Turn cycles between spawn batches at the given wave.
    pub fn spawn_interval(&self, wave: u32) -> u32 {
        self.max_spawn_interval
            .saturating_sub(wave / 2)
            .max(self.min_spawn_interval)
    }

    /// Batch size at the given wave. Always at least one.
    pub fn spawn_count(&self, wave: u32) -> u32 {
        let raw = self.base_spawn_count + wave as f32 * self.spawn_count_per_wave;
        (raw.round() as u32).max(1)
    }
}
