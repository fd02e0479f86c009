//! Generation parameters shared by the library and the tool binaries.

use serde::{Deserialize, Serialize};

pub const DEFAULT_MAP_WIDTH: usize = 48;
pub const DEFAULT_MAP_HEIGHT: usize = 32;
pub const DEFAULT_ROOM_MIN: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub width: usize,
    pub height: usize,
    pub room_min: usize,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self { width: DEFAULT_MAP_WIDTH, height: DEFAULT_MAP_HEIGHT, room_min: DEFAULT_ROOM_MIN }
    }
}

impl MapConfig {
    pub fn new(width: usize, height: usize, room_min: usize) -> Self {
        Self { width, height, room_min }
    }
}
