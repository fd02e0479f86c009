//! Public data models for area layouts, rooms, and generation results.

use serde::{Deserialize, Serialize};

use super::grid::Grid;
use super::reachability::ReachabilityRecord;
use super::repair::RepairReport;
use crate::types::{AreaCoord, Direction};

/// Number of area rows. The layout is always two rows tall; corridor routing and
/// the repair pass only reason about a top and a bottom row.
pub const AREA_HEIGHT: usize = 2;
pub const MIN_AREA_WIDTH: usize = 2;
pub const MAX_AREA_WIDTH: usize = 4;
/// Empty margin kept between a room and each edge of its area.
pub const ROOM_SPACE: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Room {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl Room {
    pub fn right(self) -> usize {
        self.x + self.width - 1
    }

    pub fn bottom(self) -> usize {
        self.y + self.height - 1
    }

    pub fn contains(self, x: usize, y: usize) -> bool {
        x >= self.x && x <= self.right() && y >= self.y && y <= self.bottom()
    }
}

/// Partition of the map into `area_width x area_height` areas, one room each.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaLayout {
    pub area_width: usize,
    pub area_height: usize,
    /// Grid cells spanned by one area horizontally.
    pub area_cell_width: usize,
    /// Grid cells spanned by one area vertically.
    pub area_cell_height: usize,
    pub room_width_max: usize,
    pub room_height_max: usize,
    /// Row-major: index `ay * area_width + ax`.
    pub rooms: Vec<Room>,
}

impl AreaLayout {
    pub fn room(&self, coord: AreaCoord) -> Room {
        self.rooms[self.index(coord)]
    }

    pub fn area_count(&self) -> usize {
        self.area_width * self.area_height
    }

    /// Area coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = AreaCoord> + use<> {
        let area_width = self.area_width;
        (0..self.area_count())
            .map(move |index| AreaCoord::new(index % area_width, index / area_width))
    }

    /// The rectangle an area covers on the grid, margins included.
    pub fn area_bounds(&self, coord: AreaCoord) -> Room {
        Room {
            x: coord.ax * self.area_cell_width,
            y: coord.ay * self.area_cell_height,
            width: self.area_cell_width,
            height: self.area_cell_height,
        }
    }

    pub fn neighbour(&self, coord: AreaCoord, direction: Direction) -> Option<AreaCoord> {
        let AreaCoord { ax, ay } = coord;
        match direction {
            Direction::Left => ax.checked_sub(1).map(|ax| AreaCoord::new(ax, ay)),
            Direction::Right => (ax + 1 < self.area_width).then_some(AreaCoord::new(ax + 1, ay)),
            Direction::Up => ay.checked_sub(1).map(|ay| AreaCoord::new(ax, ay)),
            Direction::Down => (ay + 1 < self.area_height).then_some(AreaCoord::new(ax, ay + 1)),
        }
    }

    fn index(&self, coord: AreaCoord) -> usize {
        debug_assert!(coord.ax < self.area_width && coord.ay < self.area_height);
        coord.ay * self.area_width + coord.ax
    }
}

/// Everything one generation call produced. Renderers only need `grid`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedDungeon {
    pub grid: Grid,
    pub layout: AreaLayout,
    pub record: ReachabilityRecord,
    pub repair: RepairReport,
}

impl GeneratedDungeon {
    pub fn floor_is_connected(&self) -> bool {
        self.grid.floor_is_connected()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_by_two_layout() -> AreaLayout {
        let room = Room { x: 2, y: 2, width: 4, height: 4 };
        AreaLayout {
            area_width: 3,
            area_height: AREA_HEIGHT,
            area_cell_width: 16,
            area_cell_height: 16,
            room_width_max: 12,
            room_height_max: 12,
            rooms: vec![room; 6],
        }
    }

    #[test]
    fn coords_walk_areas_row_major() {
        let coords: Vec<AreaCoord> = three_by_two_layout().coords().collect();
        assert_eq!(coords.len(), 6);
        assert_eq!(coords[0], AreaCoord::new(0, 0));
        assert_eq!(coords[2], AreaCoord::new(2, 0));
        assert_eq!(coords[3], AreaCoord::new(0, 1));
    }

    #[test]
    fn neighbours_stop_at_the_area_edges() {
        let layout = three_by_two_layout();
        let corner = AreaCoord::new(0, 0);
        assert_eq!(layout.neighbour(corner, Direction::Left), None);
        assert_eq!(layout.neighbour(corner, Direction::Up), None);
        assert_eq!(layout.neighbour(corner, Direction::Right), Some(AreaCoord::new(1, 0)));
        assert_eq!(layout.neighbour(corner, Direction::Down), Some(AreaCoord::new(0, 1)));
        assert_eq!(layout.neighbour(AreaCoord::new(2, 1), Direction::Right), None);
        assert_eq!(layout.neighbour(AreaCoord::new(2, 1), Direction::Down), None);
    }

    #[test]
    fn room_edges_are_inclusive() {
        let room = Room { x: 3, y: 5, width: 4, height: 2 };
        assert_eq!(room.right(), 6);
        assert_eq!(room.bottom(), 6);
        assert!(room.contains(6, 6));
        assert!(!room.contains(7, 6));
    }
}
