use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub y: usize,
    pub x: usize,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Cell {
    #[default]
    Empty,
    Floor,
}

impl Cell {
    pub fn is_floor(self) -> bool {
        self == Self::Floor
    }
}

/// Coordinate of one area in the coarse partition laid over the map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AreaCoord {
    pub ax: usize,
    pub ay: usize,
}

impl AreaCoord {
    pub const fn new(ax: usize, ay: usize) -> Self {
        Self { ax, ay }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}
