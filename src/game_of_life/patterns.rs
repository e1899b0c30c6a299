//! Static catalog of named Game of Life patterns

use super::Grid;
use thiserror::Error;

/// Error raised when a pattern name is absent from the catalog
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("unknown pattern '{0}'")]
    Unknown(String),
}

/// Catalog grouping, mirroring the classic taxonomy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    StillLife,
    Oscillator,
    Spaceship,
    Gun,
}

impl PatternKind {
    pub fn label(self) -> &'static str {
        match self {
            PatternKind::StillLife => "still life",
            PatternKind::Oscillator => "oscillator",
            PatternKind::Spaceship => "spaceship",
            PatternKind::Gun => "gun",
        }
    }
}

/// A named, immutable boolean mask.
///
/// Rows are '0'/'1' strings of equal length; the mask is never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub kind: PatternKind,
    rows: &'static [&'static str],
}

impl Pattern {
    pub fn width(&self) -> usize {
        self.rows[0].len()
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Mask value at a local offset inside the bounding box
    pub fn is_alive(&self, dr: usize, dc: usize) -> bool {
        self.rows[dr].as_bytes()[dc] == b'1'
    }

    /// Local coordinates of the mask's live cells, row-major
    pub fn live_cells(&self) -> Vec<(usize, usize)> {
        let mut living = Vec::new();
        for dr in 0..self.height() {
            for dc in 0..self.width() {
                if self.is_alive(dr, dc) {
                    living.push((dr, dc));
                }
            }
        }
        living
    }

    /// Stamp the mask onto the grid at an anchor, wrapping per axis.
    ///
    /// Every cell of the bounding box is written: mask zeros clear any
    /// live cell already at the wrapped location. The anchor may be any
    /// integer pair.
    pub fn stamp(&self, grid: &mut Grid, anchor_row: i64, anchor_col: i64) {
        for dr in 0..self.height() {
            for dc in 0..self.width() {
                grid.set(
                    anchor_row + dr as i64,
                    anchor_col + dc as i64,
                    self.is_alive(dr, dc),
                );
            }
        }
    }
}

/// All known patterns. Masks are the canonical layouts.
pub const CATALOG: &[Pattern] = &[
    Pattern {
        name: "cell",
        kind: PatternKind::StillLife,
        rows: &["1"],
    },
    Pattern {
        name: "block",
        kind: PatternKind::StillLife,
        rows: &["11", "11"],
    },
    Pattern {
        name: "hive",
        kind: PatternKind::StillLife,
        rows: &["0110", "1001", "0110"],
    },
    Pattern {
        name: "loaf",
        kind: PatternKind::StillLife,
        rows: &["0110", "1001", "0101", "0010"],
    },
    Pattern {
        name: "box",
        kind: PatternKind::StillLife,
        rows: &["010", "101", "010"],
    },
    Pattern {
        name: "boat",
        kind: PatternKind::StillLife,
        rows: &["110", "101", "010"],
    },
    Pattern {
        name: "ship",
        kind: PatternKind::StillLife,
        rows: &["110", "101", "011"],
    },
    Pattern {
        name: "blinker",
        kind: PatternKind::Oscillator,
        rows: &["111"],
    },
    Pattern {
        name: "toad",
        kind: PatternKind::Oscillator,
        rows: &["0111", "1110"],
    },
    Pattern {
        name: "beacon",
        kind: PatternKind::Oscillator,
        rows: &["1100", "1100", "0011", "0011"],
    },
    Pattern {
        name: "pulsar",
        kind: PatternKind::Oscillator,
        rows: &[
            "0011100011100",
            "0000000000000",
            "1000010100001",
            "1000010100001",
            "1000010100001",
            "0011100011100",
            "0000000000000",
            "0011100011100",
            "1000010100001",
            "1000010100001",
            "1000010100001",
            "0000000000000",
            "0011100011100",
        ],
    },
    Pattern {
        name: "pentadecathlon",
        kind: PatternKind::Oscillator,
        rows: &["0010000100", "1101111011", "0010000100"],
    },
    Pattern {
        name: "glider",
        kind: PatternKind::Spaceship,
        rows: &["010", "001", "111"],
    },
    Pattern {
        name: "lwss",
        kind: PatternKind::Spaceship,
        rows: &["01001", "10000", "10001", "11110"],
    },
    Pattern {
        name: "mwss",
        kind: PatternKind::Spaceship,
        rows: &["000100", "010001", "100000", "100001", "111110"],
    },
    Pattern {
        name: "hwss",
        kind: PatternKind::Spaceship,
        rows: &["0001100", "0100001", "1000000", "1000001", "1111110"],
    },
    Pattern {
        name: "gosper-gun",
        kind: PatternKind::Gun,
        rows: &[
            "000000000000000000000000100000000000",
            "000000000000000000000010100000000000",
            "000000000000110000001100000000000011",
            "000000000001000100001100000000000011",
            "110000000010000010001100000000000000",
            "110000000010001011000010100000000000",
            "000000000010000010000000100000000000",
            "000000000001000100000000000000000000",
            "000000000000110000000000000000000000",
        ],
    },
];

/// Look up a pattern by name, case-insensitively
pub fn lookup(name: &str) -> Result<&'static Pattern, PatternError> {
    CATALOG
        .iter()
        .find(|pattern| pattern.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| PatternError::Unknown(name.to_string()))
}

/// Catalog names in catalog order
pub fn names() -> Vec<&'static str> {
    CATALOG.iter().map(|pattern| pattern.name).collect()
}
