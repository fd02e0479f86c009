pub mod config;
pub mod error;
pub mod mapgen;
pub mod types;

pub use config::MapConfig;
pub use error::GenerationError;
pub use mapgen::{GeneratedDungeon, Grid, MapGenerator, RandomSource, SeededRandom, generate};
pub use types::*;
