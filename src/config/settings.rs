//! Configuration settings for the simulator

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::seed::DEFAULT_DENSITY;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub grid: GridConfig,
    pub seed: SeedConfig,
    pub run: RunConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    pub width: usize,
    pub height: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    pub source: SeedSource,
    pub density: f64,
    /// Fixed RNG seed for reproducible random grids; omit for OS entropy.
    pub rng_seed: Option<u64>,
    pub pattern_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedSource {
    Random,
    Pattern,
    Empty,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    pub max_generations: usize,
    /// Stop at the first step that produces no transitions.
    pub stop_when_stable: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// For text output: print the grid every N generations (0 = final only).
    pub print_every: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
    Summary,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid: GridConfig {
                width: 80,
                height: 40,
            },
            seed: SeedConfig {
                source: SeedSource::Random,
                density: DEFAULT_DENSITY,
                rng_seed: None,
                pattern_file: None,
            },
            run: RunConfig {
                max_generations: 1000,
                stop_when_stable: true,
            },
            output: OutputConfig {
                format: OutputFormat::Text,
                print_every: 0,
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

        if !(0.0..=1.0).contains(&self.seed.density) {
            anyhow::bail!("Seed density must be within [0, 1], got {}", self.seed.density);
        }

        if self.run.max_generations == 0 {
            anyhow::bail!("Maximum generations must be positive");
        }

        if self.seed.source == SeedSource::Pattern {
            match &self.seed.pattern_file {
                None => anyhow::bail!("Pattern seed source requires a pattern file"),
                Some(path) if !path.exists() => {
                    anyhow::bail!("Pattern file does not exist: {}", path.display())
                }
                Some(_) => {}
            }
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
        if let Some(generations) = cli_overrides.generations {
            self.run.max_generations = generations;
        }
        if let Some(density) = cli_overrides.density {
            self.seed.density = density;
        }
        if let Some(rng_seed) = cli_overrides.rng_seed {
            self.seed.rng_seed = Some(rng_seed);
        }
        if let Some(ref pattern_file) = cli_overrides.pattern_file {
            self.seed.source = SeedSource::Pattern;
            self.seed.pattern_file = Some(pattern_file.clone());
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub generations: Option<usize>,
    pub density: Option<f64>,
    pub rng_seed: Option<u64>,
    pub pattern_file: Option<PathBuf>,
}
