//! Post-routing pass that force-carves missing vertical and horizontal links.

use serde::{Deserialize, Serialize};

use super::corridor::CarveContext;
use super::grid::Grid;
use super::model::{AREA_HEIGHT, AreaLayout};
use super::random::RandomSource;
use super::reachability::ReachabilityRecord;
use crate::types::{AreaCoord, Direction};

/// What the repair pass inspected and carved.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepairReport {
    pub columns_checked: usize,
    /// Columns whose top and bottom areas were not linked before the repair.
    pub missing_columns: Vec<usize>,
    /// Column that received a forced top-to-bottom corridor.
    pub repaired_column: Option<usize>,
    pub column_pairs_checked: usize,
    /// `(column, row)` pairs that received a forced corridor to `column + 1`.
    pub repaired_rows: Vec<(usize, usize)>,
}

impl RepairReport {
    pub fn carved_anything(&self) -> bool {
        self.repaired_column.is_some() || !self.repaired_rows.is_empty()
    }
}

/// Checks that the top and bottom rows are joined and that each pair of adjacent
/// columns is joined, force-carving one corridor per failed check.
///
/// The forced corridor goes to a uniformly drawn column (or row), which may be one
/// that was already linked; only one vertical corridor is ever added.
pub fn repair(
    grid: &mut Grid,
    layout: &AreaLayout,
    record: &mut ReachabilityRecord,
    random: &mut dyn RandomSource,
) -> RepairReport {
    debug_assert_eq!(layout.area_height, AREA_HEIGHT);
    let mut report = RepairReport::default();
    let mut context = CarveContext { grid, layout, record };

    report.columns_checked = layout.area_width;
    report.missing_columns = (0..layout.area_width)
        .filter(|&ax| !context.record.has_down_link(AreaCoord::new(ax, 0)))
        .collect();
    if !report.missing_columns.is_empty() {
        let column = random.range_inclusive(0, layout.area_width - 1);
        context.carve(AreaCoord::new(column, 0), Direction::Down, random);
        report.repaired_column = Some(column);
    }

    report.column_pairs_checked = layout.area_width - 1;
    for ax in 0..layout.area_width - 1 {
        let all_rows_linked = (0..layout.area_height)
            .all(|ay| context.record.has_right_link(AreaCoord::new(ax, ay)));
        if all_rows_linked {
            continue;
        }
        let row = random.range_inclusive(0, layout.area_height - 1);
        context.carve(AreaCoord::new(ax, row), Direction::Right, random);
        report.repaired_rows.push((ax, row));
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapgen::layout::{carve_rooms, partition};
    use crate::mapgen::random::SeededRandom;
    use crate::mapgen::random::testing::{LowestRandom, ScriptedRandom};
    use crate::mapgen::router::route;

    fn routed(random: &mut dyn RandomSource) -> (Grid, AreaLayout, ReachabilityRecord) {
        let layout = partition(48, 32, 4, random).expect("valid config");
        let mut grid = Grid::new(48, 32);
        carve_rooms(&mut grid, &layout);
        let record = route(&mut grid, &layout, random);
        (grid, layout, record)
    }

    #[test]
    fn lowest_draws_repair_the_first_column_only() {
        let (mut grid, layout, mut record) = routed(&mut LowestRandom);
        let report = repair(&mut grid, &layout, &mut record, &mut LowestRandom);

        assert_eq!(report.missing_columns, vec![0, 1]);
        assert_eq!(report.repaired_column, Some(0));
        assert!(report.repaired_rows.is_empty());
        assert!(record.has_down_link(AreaCoord::new(0, 0)));
        assert!(!record.has_down_link(AreaCoord::new(1, 0)));
        assert!(record.is_area_graph_connected());
        assert!(grid.floor_is_connected());
    }

    #[test]
    fn forced_three_columns_check_three_columns_and_two_pairs() {
        let mut random = ScriptedRandom::new(&[1]);
        let (mut grid, layout, mut record) = routed(&mut random);
        let report = repair(&mut grid, &layout, &mut record, &mut random);

        assert_eq!(layout.area_width, 3);
        assert_eq!(report.columns_checked, 3);
        assert_eq!(report.column_pairs_checked, 2);
        assert_eq!(report.missing_columns, vec![0, 1, 2]);
        for ax in 0..2 {
            assert!((0..2).all(|ay| record.has_right_link(AreaCoord::new(ax, ay))));
        }
        assert!(record.has_down_link(AreaCoord::new(report.repaired_column.unwrap(), 0)));
    }

    #[test]
    fn a_missing_pair_link_is_carved_on_a_drawn_row() {
        let layout = partition(48, 32, 4, &mut LowestRandom).expect("valid config");
        let mut grid = Grid::new(48, 32);
        carve_rooms(&mut grid, &layout);
        let mut record = ReachabilityRecord::new(layout.area_width, layout.area_height);
        record.mark(AreaCoord::new(0, 0), Direction::Down);
        record.mark(AreaCoord::new(1, 0), Direction::Down);

        // Offset 1 picks the bottom row for the only column pair.
        let report = repair(&mut grid, &layout, &mut record, &mut ScriptedRandom::new(&[1]));
        assert!(report.missing_columns.is_empty());
        assert_eq!(report.repaired_column, None);
        assert_eq!(report.repaired_rows, vec![(0, 1)]);
        assert!(record.has_right_link(AreaCoord::new(0, 1)));
        assert!(!record.has_right_link(AreaCoord::new(0, 0)));
    }

    #[test]
    fn every_column_pair_is_linked_in_some_row_after_repair() {
        for seed in 0..300 {
            let mut random = SeededRandom::new(seed);
            let (mut grid, layout, mut record) = routed(&mut random);
            repair(&mut grid, &layout, &mut record, &mut random);

            assert!((0..layout.area_width).any(|ax| record.has_down_link(AreaCoord::new(ax, 0))));
            for ax in 0..layout.area_width - 1 {
                assert!(
                    (0..layout.area_height).any(|ay| record.has_right_link(AreaCoord::new(ax, ay))),
                    "seed={seed}: columns {ax} and {} are not linked",
                    ax + 1
                );
            }
        }
    }

    #[test]
    fn repairing_a_fully_linked_record_changes_nothing() {
        let mut random = SeededRandom::new(2_024);
        let (mut grid, layout, mut record) = routed(&mut random);
        repair(&mut grid, &layout, &mut record, &mut random);
        for ax in 0..layout.area_width {
            if !record.has_down_link(AreaCoord::new(ax, 0)) {
                CarveContext { grid: &mut grid, layout: &layout, record: &mut record }.carve(
                    AreaCoord::new(ax, 0),
                    Direction::Down,
                    &mut random,
                );
            }
        }
        for ax in 0..layout.area_width - 1 {
            for ay in 0..layout.area_height {
                if !record.has_right_link(AreaCoord::new(ax, ay)) {
                    CarveContext { grid: &mut grid, layout: &layout, record: &mut record }.carve(
                        AreaCoord::new(ax, ay),
                        Direction::Right,
                        &mut random,
                    );
                }
            }
        }

        let grid_before = grid.clone();
        let record_before = record.clone();
        for _ in 0..2 {
            let report = repair(&mut grid, &layout, &mut record, &mut random);
            assert!(!report.carved_anything());
            assert!(report.missing_columns.is_empty());
        }
        assert_eq!(grid, grid_before);
        assert_eq!(record, record_before);
    }
}
