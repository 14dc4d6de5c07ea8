//! Enemy catalog.

use game_core::state::types::EnemyTemplate;

/// A named set of enemy templates the spawn scheduler draws from.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyCatalog {
    templates: Vec<EnemyTemplate>,
}

impl EnemyCatalog {
    pub fn new(templates: Vec<EnemyTemplate>) -> Self {
        Self { templates }
    }

    /// The built-in roster, tiered by the wave each template unlocks at.
    pub fn builtin() -> Self {
        Self::new(vec![
            EnemyTemplate {
                name: "grunt".into(),
                max_health: 2,
                attack_damage: 1,
                move_range: 2,
                attack_range: 1,
                spawn_weight: 10,
                min_wave: 1,
                score: 10,
            },
            EnemyTemplate {
                name: "stalker".into(),
                max_health: 1,
                attack_damage: 1,
                move_range: 3,
                attack_range: 2,
                spawn_weight: 6,
                min_wave: 2,
                score: 15,
            },
            EnemyTemplate {
                name: "brute".into(),
                max_health: 4,
                attack_damage: 2,
                move_range: 1,
                attack_range: 1,
                spawn_weight: 4,
                min_wave: 3,
                score: 25,
            },
            EnemyTemplate {
                name: "ogre".into(),
                max_health: 6,
                attack_damage: 3,
                move_range: 1,
                attack_range: 1,
                spawn_weight: 2,
                min_wave: 5,
                score: 50,
            },
        ])
    }

    pub fn templates(&self) -> &[EnemyTemplate] {
        &self.templates
    }

    pub fn get(&self, name: &str) -> Option<&EnemyTemplate> {
        self.templates.iter().find(|t| t.name == name)
    }

    /// Templates eligible for the given wave.
    pub fn spawnable_for_wave(&self, wave: u32) -> impl Iterator<Item = &EnemyTemplate> {
        self.templates.iter().filter(move |t| t.min_wave <= wave)
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl Default for EnemyCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
