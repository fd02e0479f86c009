//! Errors surfaced by map generation.

use std::error::Error;
use std::fmt;

/// Describes why a map could not be generated with the requested parameters.
///
/// Every variant is raised before the grid is allocated, so a failed call
/// never leaves a partially carved map behind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GenerationError {
    /// The minimum room size is larger than the widest room an area can hold.
    RoomMinExceedsWidth { room_min: usize, room_width_max: usize, area_width: usize },
    /// The minimum room size is larger than the tallest room an area can hold.
    RoomMinExceedsHeight { room_min: usize, room_height_max: usize },
    /// Rooms must be at least one cell wide and tall.
    RoomMinTooSmall,
    /// The map cannot fit the per-area margins at all.
    MapTooSmall { map_width: usize, map_height: usize, area_width: usize },
}

impl GenerationError {
    /// All current variants describe unsatisfiable configuration.
    pub fn is_configuration_error(&self) -> bool {
        match self {
            Self::RoomMinExceedsWidth { .. }
            | Self::RoomMinExceedsHeight { .. }
            | Self::RoomMinTooSmall
            | Self::MapTooSmall { .. } => true,
        }
    }
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RoomMinExceedsWidth { room_min, room_width_max, area_width } => write!(
                f,
                "room_min {room_min} exceeds maximum room width {room_width_max} for {area_width} area columns"
            ),
            Self::RoomMinExceedsHeight { room_min, room_height_max } => {
                write!(f, "room_min {room_min} exceeds maximum room height {room_height_max}")
            }
            Self::RoomMinTooSmall => write!(f, "room_min must be at least 1"),
            Self::MapTooSmall { map_width, map_height, area_width } => write!(
                f,
                "map {map_width}x{map_height} is too small for {area_width} area columns and room margins"
            ),
        }
    }
}

impl Error for GenerationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_violated_limit() {
        let err =
            GenerationError::RoomMinExceedsWidth { room_min: 9, room_width_max: 8, area_width: 4 };
        let message = err.to_string();
        assert!(message.contains("room_min 9"), "{message}");
        assert!(message.contains("width 8"), "{message}");
    }

    #[test]
    fn every_variant_is_a_configuration_error() {
        let errors = [
            GenerationError::RoomMinExceedsWidth { room_min: 1, room_width_max: 0, area_width: 2 },
            GenerationError::RoomMinExceedsHeight { room_min: 1, room_height_max: 0 },
            GenerationError::RoomMinTooSmall,
            GenerationError::MapTooSmall { map_width: 1, map_height: 1, area_width: 2 },
        ];
        assert!(errors.iter().all(GenerationError::is_configuration_error));
    }
}
