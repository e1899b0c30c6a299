//! Simulation session: grid ownership, population bookkeeping, and the
//! stopped/running state machine

use crate::config::{InitialState, Settings};
use crate::game_of_life::{patterns, Grid, LifeRules, Pattern, PatternError};
use anyhow::Result;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

/// Tick-delay bounds, in milliseconds
pub const SPEED_MIN_MS: u64 = 10;
pub const SPEED_MAX_MS: u64 = 1000;

/// A running simulation: the grid plus every piece of state the shell
/// needs to render a frame and a status readout.
pub struct Session {
    grid: Grid,
    generation: u64,
    alive: usize,
    running: bool,
    selected: &'static Pattern,
    speed_ms: u64,
    rng: ChaCha8Rng,
}

/// Shell-facing view of the session after a mutation: the live cell list
/// for rendering and the numeric readout
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub generation: u64,
    pub alive: usize,
    pub dead: usize,
    pub running: bool,
    pub speed_ms: u64,
    pub selected_pattern: String,
    pub live_cells: Vec<(usize, usize)>,
}

impl Session {
    /// Build a session from settings: grid dimensions and initial content,
    /// selected pattern resolved through the catalog, clamped speed, and a
    /// ChaCha8 RNG seeded from config or OS entropy.
    pub fn new(settings: &Settings) -> Result<Self> {
        let mut grid = Grid::new(settings.grid.width, settings.grid.height)?;
        let selected = patterns::lookup(&settings.simulation.pattern)?;

        let mut rng = match settings.grid.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        };

        if settings.grid.initial_state == InitialState::Random {
            grid.randomize(&mut rng);
        }

        let alive = grid.count_alive();
        Ok(Self {
            grid,
            generation: 0,
            alive,
            running: false,
            selected,
            speed_ms: settings.simulation.speed_ms.clamp(SPEED_MIN_MS, SPEED_MAX_MS),
            rng,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn alive_count(&self) -> usize {
        self.alive
    }

    pub fn dead_count(&self) -> usize {
        self.grid.cell_count() - self.alive
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn speed_ms(&self) -> u64 {
        self.speed_ms
    }

    pub fn selected_pattern(&self) -> &'static Pattern {
        self.selected
    }

    pub fn live_cells(&self) -> Vec<(usize, usize)> {
        self.grid.live_cells()
    }

    /// Change which pattern subsequent placements use. On an unknown name
    /// the previous selection is kept.
    pub fn select_pattern(&mut self, name: &str) -> Result<(), PatternError> {
        self.selected = patterns::lookup(name)?;
        Ok(())
    }

    /// Stamp the selected pattern at a wrapped anchor
    pub fn stamp(&mut self, anchor_row: i64, anchor_col: i64) {
        self.selected.stamp(&mut self.grid, anchor_row, anchor_col);
        self.alive = self.grid.count_alive();
    }

    /// Stamp a named pattern without changing the selection
    pub fn stamp_pattern(
        &mut self,
        name: &str,
        anchor_row: i64,
        anchor_col: i64,
    ) -> Result<(), PatternError> {
        let pattern = patterns::lookup(name)?;
        pattern.stamp(&mut self.grid, anchor_row, anchor_col);
        self.alive = self.grid.count_alive();
        Ok(())
    }

    /// Refill the grid from the session RNG; the generation counter is
    /// left alone
    pub fn randomize(&mut self) {
        self.grid.randomize(&mut self.rng);
        self.alive = self.grid.count_alive();
    }

    /// Kill every cell and reset the generation counter
    pub fn clear(&mut self) {
        self.grid.clear();
        self.alive = 0;
        self.generation = 0;
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Advance one generation. A no-op while stopped; while running the
    /// grid is replaced wholesale and the counters are recomputed.
    pub fn advance(&mut self) {
        if !self.running {
            return;
        }
        self.grid = LifeRules::step(&self.grid);
        self.generation += 1;
        self.alive = self.grid.count_alive();
    }

    /// Set the tick delay, clamped into [10, 1000] ms
    pub fn set_speed(&mut self, speed_ms: u64) {
        self.speed_ms = speed_ms.clamp(SPEED_MIN_MS, SPEED_MAX_MS);
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            generation: self.generation,
            alive: self.alive,
            dead: self.dead_count(),
            running: self.running,
            speed_ms: self.speed_ms,
            selected_pattern: self.selected.name.to_string(),
            live_cells: self.grid.live_cells(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    fn session_with(width: usize, height: usize) -> Session {
        let mut settings = Settings::default();
        settings.grid.width = width;
        settings.grid.height = height;
        settings.grid.initial_state = InitialState::Empty;
        settings.grid.seed = Some(7);
        Session::new(&settings).unwrap()
    }

    fn assert_population_invariant(session: &Session) {
        assert_eq!(
            session.alive_count() + session.dead_count(),
            session.grid().cell_count()
        );
        assert_eq!(session.alive_count(), session.grid().count_alive());
    }

    #[test]
    fn test_new_session_is_stopped_and_empty() {
        let session = session_with(10, 10);
        assert!(!session.is_running());
        assert_eq!(session.generation(), 0);
        assert_eq!(session.alive_count(), 0);
        assert_eq!(session.dead_count(), 100);
        assert_population_invariant(&session);
    }

    #[test]
    fn test_invalid_dimensions_fail_construction() {
        let mut settings = Settings::default();
        settings.grid.width = 0;
        assert!(Session::new(&settings).is_err());
    }

    #[test]
    fn test_unknown_pattern_fails_construction() {
        let mut settings = Settings::default();
        settings.simulation.pattern = "nonesuch".to_string();
        assert!(Session::new(&settings).is_err());
    }

    #[test]
    fn test_advance_is_noop_while_stopped() {
        let mut session = session_with(10, 10);
        session.stamp_pattern("blinker", 4, 4).unwrap();
        let before = session.grid().clone();

        session.advance();
        assert_eq!(session.generation(), 0);
        assert_eq!(*session.grid(), before);
    }

    #[test]
    fn test_advance_increments_generation_while_running() {
        let mut session = session_with(10, 10);
        session.stamp_pattern("blinker", 4, 4).unwrap();
        session.start();

        session.advance();
        assert_eq!(session.generation(), 1);
        session.advance();
        assert_eq!(session.generation(), 2);
        assert_population_invariant(&session);

        // Period 2: back to the stamped shape
        assert_eq!(session.alive_count(), 3);
    }

    #[test]
    fn test_stamp_updates_population_not_generation() {
        let mut session = session_with(10, 10);
        session.start();
        session.advance();
        assert_eq!(session.generation(), 1);

        session.stamp_pattern("block", 2, 2).unwrap();
        assert_eq!(session.alive_count(), 4);
        assert_eq!(session.generation(), 1);
        assert_population_invariant(&session);
    }

    #[test]
    fn test_selected_pattern_stamping() {
        let mut session = session_with(10, 10);
        session.select_pattern("block").unwrap();
        session.stamp(0, 0);
        assert_eq!(session.alive_count(), 4);

        // Unknown names leave the selection untouched
        assert!(session.select_pattern("nonesuch").is_err());
        assert_eq!(session.selected_pattern().name, "block");

        // Case-insensitive selection
        session.select_pattern("Glider").unwrap();
        assert_eq!(session.selected_pattern().name, "glider");
    }

    #[test]
    fn test_clear_resets_generation_randomize_does_not() {
        let mut session = session_with(20, 20);
        session.randomize();
        session.start();
        session.advance();
        session.advance();
        session.stop();
        assert_eq!(session.generation(), 2);

        session.randomize();
        assert_eq!(session.generation(), 2);
        assert_population_invariant(&session);

        session.clear();
        assert_eq!(session.generation(), 0);
        assert_eq!(session.alive_count(), 0);
        assert_population_invariant(&session);
    }

    #[test]
    fn test_seeded_randomize_is_reproducible() {
        let mut first = session_with(16, 16);
        let mut second = session_with(16, 16);
        first.randomize();
        second.randomize();
        assert_eq!(first.grid(), second.grid());
        assert!(first.alive_count() > 0);
    }

    #[test]
    fn test_speed_clamping() {
        let mut session = session_with(5, 5);
        session.set_speed(0);
        assert_eq!(session.speed_ms(), SPEED_MIN_MS);
        session.set_speed(5000);
        assert_eq!(session.speed_ms(), SPEED_MAX_MS);
        session.set_speed(250);
        assert_eq!(session.speed_ms(), 250);
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut session = session_with(8, 8);
        session.stamp_pattern("block", 3, 3).unwrap();
        session.start();

        let snapshot = session.snapshot();
        assert_eq!(snapshot.alive, 4);
        assert_eq!(snapshot.dead, 60);
        assert_eq!(snapshot.generation, 0);
        assert!(snapshot.running);
        assert_eq!(snapshot.live_cells.len(), 4);
        assert_eq!(snapshot.selected_pattern, "cell");

        // Snapshot is JSON-serializable for the shell boundary
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"alive\":4"));
    }
}
