//! TOML map configuration with command-line overrides.

use anyhow::{Context, Result};
use dungeon_core::MapConfig;
use std::fs;
use std::path::Path;

pub fn load_map_config(path: &Path) -> Result<MapConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Command-line values win over the file; missing values fall back to defaults.
pub fn resolve_map_config(
    base: Option<MapConfig>,
    width: Option<usize>,
    height: Option<usize>,
    room_min: Option<usize>,
) -> MapConfig {
    let base = base.unwrap_or_default();
    MapConfig {
        width: width.unwrap_or(base.width),
        height: height.unwrap_or(base.height),
        room_min: room_min.unwrap_or(base.room_min),
    }
}
