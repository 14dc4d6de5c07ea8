//! Enemy catalog loader.

use std::collections::HashSet;
use std::path::Path;

use game_core::state::types::EnemyTemplate;

use crate::catalog::EnemyCatalog;
use crate::loaders::{LoadResult, read_file};

/// Loader for enemy catalogs from RON files.
///
/// RON format: `Vec<EnemyTemplate>`.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load an enemy catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<EnemyCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse and validate a catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<EnemyCatalog> {
        let templates: Vec<EnemyTemplate> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse enemy catalog RON: {}", e))?;

        if templates.is_empty() {
            anyhow::bail!("Enemy catalog is empty");
        }
        let mut seen = HashSet::new();
        for template in &templates {
            if template.name.is_empty() {
                anyhow::bail!("Enemy template with empty name");
            }
            if !seen.insert(template.name.as_str()) {
                anyhow::bail!("Duplicate enemy template '{}'", template.name);
            }
            if template.max_health == 0 {
                anyhow::bail!("Enemy '{}' has zero health", template.name);
            }
            if template.spawn_weight == 0 {
                anyhow::bail!("Enemy '{}' has zero spawn weight", template.name);
            }
            if template.min_wave == 0 {
                anyhow::bail!("Enemy '{}' has min_wave 0; waves start at 1", template.name);
            }
        }
        Ok(EnemyCatalog::new(templates))
    }
}
