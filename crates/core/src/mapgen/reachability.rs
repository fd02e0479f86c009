//! Record of which adjacent area pairs have been joined by a corridor.

use std::collections::VecDeque;

use crate::types::{AreaCoord, Direction};

/// Links between adjacent areas, stored in the direction of increasing coordinate.
///
/// A link only ever goes from unset to set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReachabilityRecord {
    area_width: usize,
    area_height: usize,
    /// `(ax, ay) -> (ax + 1, ay)`, indexed `ay * (area_width - 1) + ax`.
    horizontal: Vec<bool>,
    /// `(ax, ay) -> (ax, ay + 1)`, indexed `ay * area_width + ax`.
    vertical: Vec<bool>,
}

impl ReachabilityRecord {
    pub fn new(area_width: usize, area_height: usize) -> Self {
        Self {
            area_width,
            area_height,
            horizontal: vec![false; area_width.saturating_sub(1) * area_height],
            vertical: vec![false; area_width * area_height.saturating_sub(1)],
        }
    }

    pub fn area_width(&self) -> usize {
        self.area_width
    }

    pub fn area_height(&self) -> usize {
        self.area_height
    }

    /// Whether the link leaving `from` in `direction` is set.
    pub fn is_linked(&self, from: AreaCoord, direction: Direction) -> bool {
        match self.slot(from, direction) {
            Some(Slot::Horizontal(index)) => self.horizontal[index],
            Some(Slot::Vertical(index)) => self.vertical[index],
            None => false,
        }
    }

    pub fn has_right_link(&self, from: AreaCoord) -> bool {
        self.is_linked(from, Direction::Right)
    }

    pub fn has_down_link(&self, from: AreaCoord) -> bool {
        self.is_linked(from, Direction::Down)
    }

    pub(crate) fn mark(&mut self, from: AreaCoord, direction: Direction) {
        match self.slot(from, direction) {
            Some(Slot::Horizontal(index)) => self.horizontal[index] = true,
            Some(Slot::Vertical(index)) => self.vertical[index] = true,
            None => debug_assert!(false, "no area {direction:?} of {from:?}"),
        }
    }

    pub fn link_count(&self) -> usize {
        self.horizontal.iter().chain(&self.vertical).filter(|&&linked| linked).count()
    }

    /// Set links as `(lower, upper)` coordinate pairs, horizontal links first.
    pub fn links(&self) -> Vec<(AreaCoord, AreaCoord)> {
        let mut links = Vec::with_capacity(self.link_count());
        for ay in 0..self.area_height {
            for ax in 0..self.area_width.saturating_sub(1) {
                if self.has_right_link(AreaCoord::new(ax, ay)) {
                    links.push((AreaCoord::new(ax, ay), AreaCoord::new(ax + 1, ay)));
                }
            }
        }
        for ay in 0..self.area_height.saturating_sub(1) {
            for ax in 0..self.area_width {
                if self.has_down_link(AreaCoord::new(ax, ay)) {
                    links.push((AreaCoord::new(ax, ay), AreaCoord::new(ax, ay + 1)));
                }
            }
        }
        links
    }

    /// True when the links join every area into a single component.
    pub fn is_area_graph_connected(&self) -> bool {
        let area_count = self.area_width * self.area_height;
        if area_count == 0 {
            return true;
        }

        let mut seen = vec![false; area_count];
        seen[0] = true;
        let mut reached = 1_usize;
        let mut open = VecDeque::from([AreaCoord::new(0, 0)]);
        while let Some(coord) = open.pop_front() {
            for direction in [Direction::Left, Direction::Right, Direction::Up, Direction::Down] {
                let Some(next) = self.step(coord, direction) else {
                    continue;
                };
                let index = next.ay * self.area_width + next.ax;
                if seen[index] {
                    continue;
                }
                seen[index] = true;
                reached += 1;
                open.push_back(next);
            }
        }

        reached == area_count
    }

    /// The neighbour reached through a set link, if any.
    fn step(&self, from: AreaCoord, direction: Direction) -> Option<AreaCoord> {
        if !self.is_linked(from, direction) {
            return None;
        }
        Some(match direction {
            Direction::Left => AreaCoord::new(from.ax - 1, from.ay),
            Direction::Right => AreaCoord::new(from.ax + 1, from.ay),
            Direction::Up => AreaCoord::new(from.ax, from.ay - 1),
            Direction::Down => AreaCoord::new(from.ax, from.ay + 1),
        })
    }

    fn slot(&self, from: AreaCoord, direction: Direction) -> Option<Slot> {
        let AreaCoord { ax, ay } = from;
        if ax >= self.area_width || ay >= self.area_height {
            return None;
        }
        let row_links = self.area_width - 1;
        match direction {
            Direction::Right if ax + 1 < self.area_width => {
                Some(Slot::Horizontal(ay * row_links + ax))
            }
            Direction::Left if ax > 0 => Some(Slot::Horizontal(ay * row_links + ax - 1)),
            Direction::Down if ay + 1 < self.area_height => {
                Some(Slot::Vertical(ay * self.area_width + ax))
            }
            Direction::Up if ay > 0 => Some(Slot::Vertical((ay - 1) * self.area_width + ax)),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Slot {
    Horizontal(usize),
    Vertical(usize),
}
