//! Spawn tuning loader.

use std::path::Path;

use crate::loaders::{LoadResult, read_file};
use crate::tuning::SpawnTuning;

/// Loader for spawn tuning from TOML files. Omitted fields keep their
/// defaults.
pub struct TuningLoader;

impl TuningLoader {
    /// Load a [`SpawnTuning`] from a TOML file.
    pub fn load(path: &Path) -> LoadResult<SpawnTuning> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse and validate tuning from TOML text.
    pub fn parse(content: &str) -> LoadResult<SpawnTuning> {
        let tuning: SpawnTuning = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse spawn tuning TOML: {}", e))?;

        if tuning.min_spawn_interval == 0 {
            anyhow::bail!("min_spawn_interval must be at least 1");
        }
        if tuning.max_spawn_interval < tuning.min_spawn_interval {
            anyhow::bail!(
                "max_spawn_interval {} is below min_spawn_interval {}",
                tuning.max_spawn_interval,
                tuning.min_spawn_interval
            );
        }
        if !(0.0..=1.0).contains(&tuning.power_up_chance) {
            anyhow::bail!("power_up_chance must be within [0, 1]");
        }
        if tuning.power_up_min_amount > tuning.power_up_max_amount {
            anyhow::bail!("power_up_min_amount exceeds power_up_max_amount");
        }
        Ok(tuning)
    }
}
