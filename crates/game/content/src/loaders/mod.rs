//! File loaders for externally supplied game data.
//!
//! Each loader converts one file format into the corresponding content type,
//! validating it on the way in so bad data fails at load time instead of
//! mid-session.

pub mod catalog;
pub mod config;
pub mod tuning;

pub use catalog::CatalogLoader;
pub use config::ConfigLoader;
pub use tuning::TuningLoader;

use std::fs;
use std::path::Path;

use anyhow::Context;

/// Result type shared by all loaders.
pub type LoadResult<T> = anyhow::Result<T>;

pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}
