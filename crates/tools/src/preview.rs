//! Terminal preview of a generated grid.

use dungeon_core::{Cell, Grid};

const FLOOR_GLYPH: char = '.';
const EMPTY_GLYPH: char = '#';

pub fn render_ascii(grid: &Grid) -> String {
    let mut out = String::with_capacity((grid.width() + 1) * grid.height());
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            out.push(match grid.cell_state(x, y) {
                Cell::Floor => FLOOR_GLYPH,
                Cell::Empty => EMPTY_GLYPH,
            });
        }
        out.push('\n');
    }
    out
}
