//! Display and output formatting utilities

use crate::game_of_life::{Grid, Pattern};
use crate::simulation::Session;

/// Terminal rendering for grids and patterns
pub struct GridFormatter;

impl GridFormatter {
    /// Format a grid in compact form
    pub fn compact(grid: &Grid) -> String {
        let mut output = String::with_capacity(grid.height() * (grid.width() + 1));
        for row in 0..grid.height() {
            for col in 0..grid.width() {
                output.push(if grid.get(row as i64, col as i64) {
                    '█'
                } else {
                    '·'
                });
            }
            output.push('\n');
        }
        output
    }

    /// Format a grid with row and column numbers
    pub fn with_coords(grid: &Grid) -> String {
        let mut output = String::new();

        output.push_str("   ");
        for col in 0..grid.width() {
            output.push_str(&format!("{:2}", col % 10));
        }
        output.push('\n');

        for row in 0..grid.height() {
            output.push_str(&format!("{:2} ", row));
            for col in 0..grid.width() {
                output.push_str(if grid.get(row as i64, col as i64) {
                    "██"
                } else {
                    "··"
                });
            }
            output.push('\n');
        }

        output
    }

    /// Format a pattern mask the same way grids are rendered
    pub fn pattern(pattern: &Pattern) -> String {
        let mut output = String::new();
        for dr in 0..pattern.height() {
            for dc in 0..pattern.width() {
                output.push(if pattern.is_alive(dr, dc) { '█' } else { '·' });
            }
            output.push('\n');
        }
        output
    }
}

/// The numeric status readout shown after every mutation
pub struct StatusFormatter;

impl StatusFormatter {
    /// Multi-line readout: population, generation, and placement mode
    pub fn readout(session: &Session) -> String {
        format!(
            "Alive: {}\nDead: {}\nGeneration: {}\nMode: {}",
            session.alive_count(),
            session.dead_count(),
            session.generation(),
            session.selected_pattern().name,
        )
    }

    /// Single-line variant for per-tick output
    pub fn line(session: &Session) -> String {
        format!(
            "generation {:>5}  alive {:>6}  dead {:>6}",
            session.generation(),
            session.alive_count(),
            session.dead_count(),
        )
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err()
            && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    /// Format success message
    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    /// Format error message
    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    /// Format warning message
    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    /// Format info message
    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{InitialState, Settings};
    use crate::game_of_life::lookup;

    #[test]
    fn test_grid_formatting() {
        let grid = Grid::from_rows(vec![
            vec![true, false, true],
            vec![false, true, false],
        ])
        .unwrap();

        let compact = GridFormatter::compact(&grid);
        assert_eq!(compact, "█·█\n·█·\n");

        let with_coords = GridFormatter::with_coords(&grid);
        assert!(with_coords.contains(" 0 1 2"));
        assert!(with_coords.contains("██"));
    }

    #[test]
    fn test_pattern_formatting() {
        let blinker = lookup("blinker").unwrap();
        assert_eq!(GridFormatter::pattern(blinker), "███\n");
    }

    #[test]
    fn test_status_readout() {
        let mut settings = Settings::default();
        settings.grid.width = 4;
        settings.grid.height = 4;
        settings.grid.initial_state = InitialState::Empty;
        let mut session = Session::new(&settings).unwrap();
        session.stamp_pattern("block", 0, 0).unwrap();

        let readout = StatusFormatter::readout(&session);
        assert!(readout.contains("Alive: 4"));
        assert!(readout.contains("Dead: 12"));
        assert!(readout.contains("Generation: 0"));
        assert!(readout.contains("Mode: cell"));

        assert!(StatusFormatter::line(&session).contains("alive"));
    }

    #[test]
    fn test_color_output() {
        let colored = ColorOutput::colored("test", Color::Red);
        assert!(colored.contains("test"));

        let success = ColorOutput::success("OK");
        assert!(success.contains("OK"));
    }
}
