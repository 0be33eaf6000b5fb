//! CLI subcommands.

pub mod batch;
pub mod config;
pub mod extract;

use std::path::Path;

use faturex_core::{CategoryTable, FaturexConfig};

/// Load configuration from an explicit path or fall back to defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<FaturexConfig> {
    match config_path {
        Some(path) => Ok(FaturexConfig::from_file(Path::new(path))?),
        None => Ok(FaturexConfig::default()),
    }
}

/// Resolve the category table: CLI flag, then config file, then embedded map.
pub fn load_category_table(
    flag: Option<&Path>,
    config: &FaturexConfig,
) -> anyhow::Result<CategoryTable> {
    match flag.or(config.categories.map_file.as_deref()) {
        Some(path) => Ok(CategoryTable::from_path(path)?),
        None => Ok(CategoryTable::global().clone()),
    }
}
