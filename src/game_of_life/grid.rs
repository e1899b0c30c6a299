//! Toroidal grid representation for Game of Life

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors raised during grid construction
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("invalid grid dimensions {width}x{height}: width and height must be positive")]
    InvalidDimension { width: usize, height: usize },

    #[error("row {row} has length {len}, expected {expected} (all rows must have the same length)")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },
}

/// A fixed-size Game of Life grid with toroidal wrap-around.
///
/// Cells are stored row-major. Every public access wraps both indices
/// modulo the grid dimensions, so any `(row, col)` pair is valid and the
/// grid has no edge. Dimensions are immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Create a new grid with all cells dead
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![false; width * height],
        })
    }

    /// Create a grid from explicit rows of cells
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimension { width, height });
        }

        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != width {
                return Err(GridError::RaggedRow {
                    row,
                    len: cells.len(),
                    expected: width,
                });
            }
        }

        Ok(Self {
            width,
            height,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Convert in-range 2D coordinates to a flat index
    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Wrap arbitrary coordinates onto the torus, per axis
    #[inline]
    pub fn wrap(&self, row: i64, col: i64) -> (usize, usize) {
        (
            row.rem_euclid(self.height as i64) as usize,
            col.rem_euclid(self.width as i64) as usize,
        )
    }

    /// Get the cell at wrapped coordinates; total over all integer inputs
    pub fn get(&self, row: i64, col: i64) -> bool {
        let (row, col) = self.wrap(row, col);
        self.cells[self.index(row, col)]
    }

    /// Overwrite the cell at wrapped coordinates
    pub fn set(&mut self, row: i64, col: i64, alive: bool) {
        let (row, col) = self.wrap(row, col);
        let idx = self.index(row, col);
        self.cells[idx] = alive;
    }

    /// Count living cells
    pub fn count_alive(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Kill every cell; no other state is touched
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Refill the grid with an independent uniform draw over
    /// {dead, alive} for each cell (probability 0.5, cells independent)
    pub fn randomize<R: Rng>(&mut self, rng: &mut R) {
        for cell in &mut self.cells {
            *cell = rng.random_bool(0.5);
        }
    }

    /// All living cell coordinates in row-major order
    pub fn live_cells(&self) -> Vec<(usize, usize)> {
        let mut living = Vec::new();
        for row in 0..self.height {
            for col in 0..self.width {
                if self.cells[self.index(row, col)] {
                    living.push((row, col));
                }
            }
        }
        living
    }

    /// Check if the grid has no living cells
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| !cell)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                let symbol = if self.cells[self.index(row, col)] {
                    '█'
                } else {
                    '·'
                };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
