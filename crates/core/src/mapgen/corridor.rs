//! L-shaped corridor carving between rooms in adjacent areas.

use super::grid::Grid;
use super::model::AreaLayout;
use super::random::RandomSource;
use super::reachability::ReachabilityRecord;
use crate::types::{AreaCoord, Direction};

/// Mutable state shared by the router and the repair pass while carving.
pub(super) struct CarveContext<'a> {
    pub(super) grid: &'a mut Grid,
    pub(super) layout: &'a AreaLayout,
    pub(super) record: &'a mut ReachabilityRecord,
}

/// Endpoints of one corridor. `primary` runs along the direction of travel,
/// `secondary` across it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct CorridorPlan {
    start_primary: usize,
    start_secondary: usize,
    boundary: usize,
    target_primary: usize,
    target_secondary: usize,
}

impl CarveContext<'_> {
    /// Joins the room in `from` to the room next to it in `direction` and records the link.
    ///
    /// The corridor leaves the facing edge of the first room, runs to the shared
    /// area boundary, bends along the boundary, and runs on into the second room.
    pub(super) fn carve(
        &mut self,
        from: AreaCoord,
        direction: Direction,
        random: &mut dyn RandomSource,
    ) {
        let Some(to) = self.layout.neighbour(from, direction) else {
            debug_assert!(false, "no area {direction:?} of {from:?}");
            return;
        };
        let CorridorPlan {
            start_primary,
            start_secondary,
            boundary,
            target_primary,
            target_secondary,
        } = plan_corridor(self.layout, from, to, direction, random);

        if direction.is_horizontal() {
            self.grid.carve_horizontal_line(start_secondary, start_primary, boundary);
            self.grid.carve_vertical_line(boundary, start_secondary, target_secondary);
            self.grid.carve_horizontal_line(target_secondary, boundary, target_primary);
        } else {
            self.grid.carve_vertical_line(start_secondary, start_primary, boundary);
            self.grid.carve_horizontal_line(boundary, start_secondary, target_secondary);
            self.grid.carve_vertical_line(target_secondary, boundary, target_primary);
        }

        self.record.mark(from, direction);
    }
}

fn plan_corridor(
    layout: &AreaLayout,
    from: AreaCoord,
    to: AreaCoord,
    direction: Direction,
    random: &mut dyn RandomSource,
) -> CorridorPlan {
    let source = layout.room(from);
    let target = layout.room(to);
    match direction {
        Direction::Right => CorridorPlan {
            start_primary: source.right() + 1,
            start_secondary: random.range_inclusive(source.y, source.bottom()),
            boundary: to.ax * layout.area_cell_width,
            target_primary: target.x,
            target_secondary: random.range_inclusive(target.y, target.bottom()),
        },
        Direction::Left => CorridorPlan {
            start_primary: source.x,
            start_secondary: random.range_inclusive(source.y, source.bottom()),
            boundary: from.ax * layout.area_cell_width,
            target_primary: target.right() + 1,
            target_secondary: random.range_inclusive(target.y, target.bottom()),
        },
        Direction::Down => CorridorPlan {
            start_primary: source.bottom() + 1,
            start_secondary: random.range_inclusive(source.x, source.right()),
            boundary: to.ay * layout.area_cell_height,
            target_primary: target.y,
            target_secondary: random.range_inclusive(target.x, target.right()),
        },
        Direction::Up => CorridorPlan {
            start_primary: source.y,
            start_secondary: random.range_inclusive(source.x, source.right()),
            boundary: from.ay * layout.area_cell_height,
            target_primary: target.bottom() + 1,
            target_secondary: random.range_inclusive(target.x, target.right()),
        },
    }
}
