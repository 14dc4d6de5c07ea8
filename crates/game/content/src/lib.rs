//! Static game content and data-file loaders.
//!
//! This crate houses the built-in enemy roster and spawn tuning, plus loaders
//! for overriding them from data files:
//! - Enemy catalogs (data-driven via RON)
//! - Game configuration (data-driven via TOML)
//! - Spawn tuning (data-driven via TOML)
//!
//! Content is consumed by the runtime's spawn scheduler and session setup; it
//! never appears inside game state.

pub mod catalog;
pub mod tuning;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::EnemyCatalog;
pub use tuning::SpawnTuning;

#[cfg(feature = "loaders")]
pub use loaders::{CatalogLoader, ConfigLoader, TuningLoader};
