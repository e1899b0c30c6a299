//! Toroidal Game of Life simulation engine
//!
//! This library implements Conway's Game of Life (rule B3/S23) on a
//! fixed-size grid whose edges wrap around, together with a catalog of
//! classic patterns and a session object that tracks generation and
//! population statistics for a presentation shell.

pub mod config;
pub mod game_of_life;
pub mod simulation;
pub mod utils;

pub use config::Settings;
pub use game_of_life::{Grid, GridError, LifeRules, Pattern, PatternError};
pub use simulation::{Session, Snapshot};

use anyhow::Result;

/// Run a fresh session for a fixed number of generations and return the
/// final shell-facing snapshot
pub fn run_generations(settings: &Settings, generations: u64) -> Result<Snapshot> {
    let mut session = Session::new(settings)?;
    session.start();
    for _ in 0..generations {
        session.advance();
    }
    session.stop();
    Ok(session.snapshot())
}
