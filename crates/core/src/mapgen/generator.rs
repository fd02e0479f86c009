//! High-level map generation orchestration: partition, route, repair.

use super::grid::Grid;
use super::layout::{carve_rooms, partition};
use super::model::GeneratedDungeon;
use super::random::RandomSource;
use super::repair::repair;
use super::router::route;
use crate::config::MapConfig;
use crate::error::GenerationError;

pub struct MapGenerator {
    config: MapConfig,
}

impl MapGenerator {
    pub fn new(config: MapConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> MapConfig {
        self.config
    }

    pub fn generate(&self, random: impl RandomSource) -> Result<Grid, GenerationError> {
        self.generate_detailed(random).map(|dungeon| dungeon.grid)
    }

    pub fn generate_detailed(
        &self,
        mut random: impl RandomSource,
    ) -> Result<GeneratedDungeon, GenerationError> {
        let MapConfig { width, height, room_min } = self.config;
        let random: &mut dyn RandomSource = &mut random;

        let layout = partition(width, height, room_min, random)?;
        let mut grid = Grid::new(width, height);
        carve_rooms(&mut grid, &layout);

        let mut record = route(&mut grid, &layout, random);
        let repair = repair(&mut grid, &layout, &mut record, random);

        Ok(GeneratedDungeon { grid, layout, record, repair })
    }
}
