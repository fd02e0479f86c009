//! Area partitioning and per-area room placement.

use super::grid::Grid;
use super::model::{AREA_HEIGHT, AreaLayout, MAX_AREA_WIDTH, MIN_AREA_WIDTH, ROOM_SPACE, Room};
use super::random::RandomSource;
use crate::error::GenerationError;

/// Splits the map into areas and draws one room per area.
///
/// Only plans the layout; the grid is untouched so a configuration error never
/// leaves partial output behind. Pair with [`carve_rooms`].
pub fn partition(
    map_width: usize,
    map_height: usize,
    room_min: usize,
    random: &mut dyn RandomSource,
) -> Result<AreaLayout, GenerationError> {
    if room_min == 0 {
        return Err(GenerationError::RoomMinTooSmall);
    }

    let area_width = random.range_inclusive(MIN_AREA_WIDTH, MAX_AREA_WIDTH);
    let area_cell_width = map_width / area_width;
    let area_cell_height = map_height / AREA_HEIGHT;
    let too_small = GenerationError::MapTooSmall { map_width, map_height, area_width };
    let room_width_max = area_cell_width.checked_sub(2 * ROOM_SPACE).ok_or(too_small.clone())?;
    let room_height_max = area_cell_height.checked_sub(2 * ROOM_SPACE).ok_or(too_small)?;

    if room_min > room_width_max {
        return Err(GenerationError::RoomMinExceedsWidth { room_min, room_width_max, area_width });
    }
    if room_min > room_height_max {
        return Err(GenerationError::RoomMinExceedsHeight { room_min, room_height_max });
    }

    // Draws run column by column so a given seed keeps producing the same rooms.
    let mut rooms = vec![Room { x: 0, y: 0, width: 0, height: 0 }; area_width * AREA_HEIGHT];
    for ax in 0..area_width {
        for ay in 0..AREA_HEIGHT {
            let width = random.range_inclusive(room_min, room_width_max);
            let height = random.range_inclusive(room_min, room_height_max);
            let x = ax * area_cell_width
                + random.range_inclusive(0, room_width_max - width)
                + ROOM_SPACE;
            let y = ay * area_cell_height
                + random.range_inclusive(0, room_height_max - height)
                + ROOM_SPACE;
            rooms[ay * area_width + ax] = Room { x, y, width, height };
        }
    }

    Ok(AreaLayout {
        area_width,
        area_height: AREA_HEIGHT,
        area_cell_width,
        area_cell_height,
        room_width_max,
        room_height_max,
        rooms,
    })
}

pub fn carve_rooms(grid: &mut Grid, layout: &AreaLayout) {
    for room in &layout.rooms {
        for y in room.y..=room.bottom() {
            grid.carve_horizontal_line(y, room.x, room.right());
        }
    }
}
