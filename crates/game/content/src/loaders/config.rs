//! Game configuration loader.

use std::path::Path;

use game_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load a [`GameConfig`] from a TOML file.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse and validate a config from TOML text.
    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if config.grid_width < 2 || config.grid_height < 2 {
            anyhow::bail!(
                "Grid must be at least 2x2, got {}x{}",
                config.grid_width,
                config.grid_height
            );
        }
        if config.player_max_health == 0 {
            anyhow::bail!("Player health must be positive");
        }
        if config.player_max_power == 0 {
            anyhow::bail!("Player power must be positive");
        }
        Ok(config)
    }
}
