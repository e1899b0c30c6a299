//! Configuration settings for the simulator

use crate::game_of_life::patterns;
use anyhow::{Context, Result};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub grid: GridConfig,
    pub simulation: SimulationConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    pub width: usize,
    pub height: usize,
    pub initial_state: InitialState,
    /// RNG seed for reproducible randomization; OS entropy when absent
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InitialState {
    Empty,
    Random,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Tick delay in milliseconds
    pub speed_ms: u64,
    /// Pattern used by placements until the shell selects another
    pub pattern: String,
    /// Generation budget for a batch run
    pub generations: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub show_grid: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid: GridConfig {
                width: 50,
                height: 50,
                initial_state: InitialState::Empty,
                seed: None,
            },
            simulation: SimulationConfig {
                speed_ms: 100,
                pattern: "cell".to_string(),
                generations: 100,
            },
            output: OutputConfig {
                format: OutputFormat::Text,
                show_grid: true,
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.grid.width == 0 || self.grid.height == 0 {
            anyhow::bail!(
                "Grid dimensions must be positive, got {}x{}",
                self.grid.width,
                self.grid.height
            );
        }

        if self.simulation.speed_ms == 0 {
            anyhow::bail!("Speed must be positive");
        }

        if let Err(err) = patterns::lookup(&self.simulation.pattern) {
            anyhow::bail!("{} (available: {})", err, patterns::names().iter().join(", "));
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(width) = cli_overrides.width {
            self.grid.width = width;
        }
        if let Some(height) = cli_overrides.height {
            self.grid.height = height;
        }
        if let Some(initial_state) = cli_overrides.initial_state {
            self.grid.initial_state = initial_state;
        }
        if let Some(seed) = cli_overrides.seed {
            self.grid.seed = Some(seed);
        }
        if let Some(speed_ms) = cli_overrides.speed_ms {
            self.simulation.speed_ms = speed_ms;
        }
        if let Some(ref pattern) = cli_overrides.pattern {
            self.simulation.pattern = pattern.clone();
        }
        if let Some(generations) = cli_overrides.generations {
            self.simulation.generations = generations;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub initial_state: Option<InitialState>,
    pub seed: Option<u64>,
    pub speed_ms: Option<u64>,
    pub pattern: Option<String>,
    pub generations: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_settings_validate() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut settings = Settings::default();
        settings.grid.width = 0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.simulation.speed_ms = 0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.simulation.pattern = "nonesuch".to_string();
        let err = settings.validate().unwrap_err().to_string();
        assert!(err.contains("unknown pattern"));
        assert!(err.contains("glider"));
    }

    #[test]
    fn test_yaml_round_trip() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config/settings.yaml");

        let mut settings = Settings::default();
        settings.grid.width = 30;
        settings.grid.initial_state = InitialState::Random;
        settings.grid.seed = Some(99);
        settings.simulation.pattern = "glider".to_string();

        settings.to_file(&path).unwrap();
        let loaded = Settings::from_file(&path).unwrap();

        assert_eq!(loaded.grid.width, 30);
        assert_eq!(loaded.grid.initial_state, InitialState::Random);
        assert_eq!(loaded.grid.seed, Some(99));
        assert_eq!(loaded.simulation.pattern, "glider");
    }

    #[test]
    fn test_merge_with_cli() {
        let mut settings = Settings::default();
        let overrides = CliOverrides {
            width: Some(25),
            pattern: Some("pulsar".to_string()),
            generations: Some(10),
            ..Default::default()
        };
        settings.merge_with_cli(&overrides);

        assert_eq!(settings.grid.width, 25);
        assert_eq!(settings.grid.height, 50);
        assert_eq!(settings.simulation.pattern, "pulsar");
        assert_eq!(settings.simulation.generations, 10);
    }
}
