//! Randomized row-major walk over the areas that carves the first corridors.

use super::corridor::CarveContext;
use super::grid::Grid;
use super::model::AreaLayout;
use super::random::RandomSource;
use super::reachability::ReachabilityRecord;
use crate::types::{AreaCoord, Direction};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    Carve(Direction),
    AlreadyLinked,
    Undetermined,
}

/// Walks every area once, row by row, joining it to one neighbour per step.
///
/// Vertical moves are only considered on the top and bottom area rows; with the
/// fixed two-row layout that covers every row.
pub fn route(
    grid: &mut Grid,
    layout: &AreaLayout,
    random: &mut dyn RandomSource,
) -> ReachabilityRecord {
    let mut record = ReachabilityRecord::new(layout.area_width, layout.area_height);
    let mut cursor = Some(AreaCoord::new(0, 0));

    while let Some(current) = cursor {
        match choose_step(layout, &record, current, random) {
            Step::Carve(direction) => {
                let mut context = CarveContext { grid: &mut *grid, layout, record: &mut record };
                context.carve(current, direction, random);
                cursor = advance(layout, current);
            }
            Step::AlreadyLinked => cursor = advance(layout, current),
            Step::Undetermined => {}
        }
    }

    record
}

fn choose_step(
    layout: &AreaLayout,
    record: &ReachabilityRecord,
    current: AreaCoord,
    random: &mut dyn RandomSource,
) -> Step {
    let direction = if random.coin() {
        if current.ax == 0 {
            Direction::Right
        } else if current.ax == layout.area_width - 1 {
            Direction::Left
        } else if random.coin() {
            Direction::Right
        } else {
            Direction::Left
        }
    } else if current.ay == 0 {
        Direction::Down
    } else if current.ay == layout.area_height - 1 {
        Direction::Up
    } else {
        return Step::Undetermined;
    };

    if record.is_linked(current, direction) {
        Step::AlreadyLinked
    } else {
        Step::Carve(direction)
    }
}

fn advance(layout: &AreaLayout, current: AreaCoord) -> Option<AreaCoord> {
    if current.ax + 1 < layout.area_width {
        Some(AreaCoord::new(current.ax + 1, current.ay))
    } else if current.ay + 1 < layout.area_height {
        Some(AreaCoord::new(0, current.ay + 1))
    } else {
        None
    }
}
