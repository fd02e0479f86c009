//! Occupancy grid written by every generation pass and read by renderers.

use std::collections::VecDeque;

use xxhash_rust::xxh3::xxh3_64;

use crate::types::{Cell, Pos};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, cells: vec![Cell::Empty; width * height] }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    /// Read-only query used by renderers. Positions outside the map read as `Empty`.
    pub fn cell_state(&self, x: usize, y: usize) -> Cell {
        self.cell_at(Pos { y, x })
    }

    pub fn cell_at(&self, pos: Pos) -> Cell {
        if !self.in_bounds(pos) {
            return Cell::Empty;
        }
        self.cells[pos.y * self.width + pos.x]
    }

    pub fn floor_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_floor()).count()
    }

    pub(crate) fn set_floor(&mut self, pos: Pos) {
        debug_assert!(
            self.in_bounds(pos),
            "carve outside {}x{} grid at {pos:?}",
            self.width,
            self.height
        );
        if !self.in_bounds(pos) {
            return;
        }
        self.cells[pos.y * self.width + pos.x] = Cell::Floor;
    }

    /// Carves every cell on row `y` from `from_x` to `to_x`, both inclusive, in either order.
    pub(crate) fn carve_horizontal_line(&mut self, y: usize, from_x: usize, to_x: usize) {
        for x in from_x.min(to_x)..=from_x.max(to_x) {
            self.set_floor(Pos { y, x });
        }
    }

    /// Carves every cell on column `x` from `from_y` to `to_y`, both inclusive, in either order.
    pub(crate) fn carve_vertical_line(&mut self, x: usize, from_y: usize, to_y: usize) {
        for y in from_y.min(to_y)..=from_y.max(to_y) {
            self.set_floor(Pos { y, x });
        }
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(8 + self.cells.len());
        bytes.extend((self.width as u32).to_le_bytes());
        bytes.extend((self.height as u32).to_le_bytes());
        for cell in &self.cells {
            bytes.push(match cell {
                Cell::Empty => 0,
                Cell::Floor => 1,
            });
        }
        bytes
    }

    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }

    /// True when every floor cell can reach every other through 4-neighbour steps.
    pub fn floor_is_connected(&self) -> bool {
        let Some(start_index) = self.cells.iter().position(|cell| cell.is_floor()) else {
            return true;
        };
        let start = Pos { y: start_index / self.width, x: start_index % self.width };

        let mut seen = vec![false; self.cells.len()];
        seen[start_index] = true;
        let mut reached = 1_usize;
        let mut open = VecDeque::from([start]);
        while let Some(pos) = open.pop_front() {
            for next in self.neighbours(pos) {
                let index = next.y * self.width + next.x;
                if seen[index] || !self.cells[index].is_floor() {
                    continue;
                }
                seen[index] = true;
                reached += 1;
                open.push_back(next);
            }
        }

        reached == self.floor_count()
    }

    fn neighbours(&self, pos: Pos) -> impl Iterator<Item = Pos> + use<> {
        let (width, height) = (self.width, self.height);
        let candidates = [
            pos.y.checked_sub(1).map(|y| Pos { y, x: pos.x }),
            (pos.x + 1 < width).then_some(Pos { y: pos.y, x: pos.x + 1 }),
            (pos.y + 1 < height).then_some(Pos { y: pos.y + 1, x: pos.x }),
            pos.x.checked_sub(1).map(|x| Pos { y: pos.y, x }),
        ];
        candidates.into_iter().flatten()
    }
}
