//! Incremental Game of Life Engine
//!
//! This library implements Conway's Game of Life on a bounded grid,
//! re-evaluating only the cells whose state or neighbor count changed since
//! the previous generation instead of rescanning the whole grid.

pub mod config;
pub mod engine;
pub mod runner;
pub mod seed;
pub mod utils;

pub use config::Settings;
pub use engine::{EngineError, LifeEngine, StepDelta};
pub use runner::{RunReport, SimulationRunner};

use anyhow::{Context, Result};
use config::SeedSource;

/// Build an engine and populate it from the configured seed source.
pub fn seeded_engine(settings: &Settings) -> Result<LifeEngine> {
    let mut engine = LifeEngine::new(settings.grid.width, settings.grid.height)?;

    match settings.seed.source {
        SeedSource::Random => {
            let mut rng = seed::seeding_rng(settings.seed.rng_seed);
            let cells = seed::random_cells(
                engine.width(),
                engine.height(),
                settings.seed.density,
                &mut rng,
            );
            engine.seed(cells);
        }
        SeedSource::Pattern => {
            let path = settings
                .seed
                .pattern_file
                .as_ref()
                .context("Pattern seed source requires a pattern file")?;
            let pattern = seed::load_pattern_from_file(path)?;
            let born = engine.seed(pattern.cells.iter().copied());
            log::debug!(
                "pattern {} set {} of {} cells alive",
                path.display(),
                born.len(),
                pattern.live_count()
            );
        }
        SeedSource::Empty => {}
    }

    Ok(engine)
}

/// Main entry point: seed a grid per `settings` and run it to quiescence or
/// the configured generation cap.
pub fn run_simulation(settings: &Settings) -> Result<RunReport> {
    let engine = seeded_engine(settings)?;
    let mut runner = SimulationRunner::new(
        engine,
        settings.run.max_generations,
        settings.run.stop_when_stable,
    );
    Ok(runner.run())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_simulation_with_empty_seed() {
        let mut settings = Settings::default();
        settings.grid.width = 10;
        settings.grid.height = 10;
        settings.seed.source = SeedSource::Empty;

        let report = run_simulation(&settings).unwrap();
        assert!(report.quiescent);
        assert_eq!(report.live_cells, 0);
    }

    #[test]
    fn test_run_simulation_is_reproducible_with_fixed_rng_seed() {
        let mut settings = Settings::default();
        settings.grid.width = 20;
        settings.grid.height = 20;
        settings.seed.rng_seed = Some(1234);
        settings.run.max_generations = 10;

        let first = run_simulation(&settings).unwrap();
        let second = run_simulation(&settings).unwrap();

        assert_eq!(first.generations, second.generations);
        assert_eq!(first.total_died, second.total_died);
        assert_eq!(first.total_born, second.total_born);
        assert_eq!(first.live_cells, second.live_cells);
    }
}
