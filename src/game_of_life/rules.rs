//! B3/S23 rule and generation stepping

use super::Grid;
use itertools::iproduct;

/// Moore neighborhood offsets
const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// The classic Conway rule engine
pub struct LifeRules;

impl LifeRules {
    /// Count live Moore neighbors of a cell, each offset wrapped per axis
    pub fn count_live_neighbors(grid: &Grid, row: i64, col: i64) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .filter(|(dr, dc)| grid.get(row + dr, col + dc))
            .count() as u8
    }

    /// Next state of a single cell under B3/S23
    pub fn next_state(alive: bool, neighbors: u8) -> bool {
        matches!((alive, neighbors), (true, 2) | (true, 3) | (false, 3))
    }

    /// Derive the next generation as a fresh grid of identical dimensions.
    ///
    /// Only the old grid is read while the new one is filled, so the update
    /// is synchronous across all cells.
    pub fn step(current: &Grid) -> Grid {
        let mut next = current.clone();
        for (row, col) in iproduct!(0..current.height(), 0..current.width()) {
            let alive = current.get(row as i64, col as i64);
            let neighbors = Self::count_live_neighbors(current, row as i64, col as i64);
            next.set(row as i64, col as i64, Self::next_state(alive, neighbors));
        }
        next
    }

    /// Step the grid forward a fixed number of generations
    pub fn step_generations(mut grid: Grid, generations: u64) -> Grid {
        for _ in 0..generations {
            grid = Self::step(&grid);
        }
        grid
    }
}
