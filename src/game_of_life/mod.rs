//! Game of Life core functionality

pub mod grid;
pub mod patterns;
pub mod rules;

pub use grid::{Grid, GridError};
pub use patterns::{lookup, Pattern, PatternError, PatternKind, CATALOG};
pub use rules::LifeRules;
