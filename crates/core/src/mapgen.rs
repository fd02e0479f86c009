//! Procedural dungeon generation split into coherent submodules.
//!
//! A session runs three passes over one owned [`Grid`]: [`partition`] plans one
//! room per area, [`route`] walks the areas carving corridors, and [`repair`]
//! force-carves any link the walk left out.

pub mod model;

mod corridor;
mod generator;
mod grid;
mod layout;
mod random;
mod reachability;
mod repair;
mod router;

pub use generator::MapGenerator;
pub use grid::Grid;
pub use layout::{carve_rooms, partition};
pub use model::{AREA_HEIGHT, AreaLayout, GeneratedDungeon, ROOM_SPACE, Room};
pub use random::{RandomSource, SeededRandom};
pub use reachability::ReachabilityRecord;
pub use repair::{RepairReport, repair};
pub use router::route;

use crate::config::MapConfig;
use crate::error::GenerationError;

pub fn generate(
    map_width: usize,
    map_height: usize,
    room_min: usize,
    random: impl RandomSource,
) -> Result<Grid, GenerationError> {
    MapGenerator::new(MapConfig::new(map_width, map_height, room_min)).generate(random)
}

#[cfg(test)]
mod tests {
    use super::{MapGenerator, SeededRandom};
    use crate::config::MapConfig;

    #[test]
    fn generate_matches_map_generator_output() {
        let from_helper = super::generate(48, 32, 4, SeededRandom::new(123)).expect("valid");
        let from_generator = MapGenerator::new(MapConfig::new(48, 32, 4))
            .generate(SeededRandom::new(123))
            .expect("valid");

        assert_eq!(from_helper, from_generator);
    }
}
