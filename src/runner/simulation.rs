//! Step loop driving an engine to quiescence or a generation cap

use crate::engine::{LifeEngine, StepDelta};
use serde::Serialize;
use std::fmt;
use std::time::{Duration, Instant};

/// Repeatedly steps an engine, reporting each delta to an observer.
///
/// The engine itself has no scheduling or cancellation concept; this is the
/// one place that decides when to stop: after `max_generations` steps, or
/// earlier at the first quiescent step when `stop_when_stable` is set.
pub struct SimulationRunner {
    engine: LifeEngine,
    max_generations: usize,
    stop_when_stable: bool,
}

/// Summary of a completed run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub generations: usize,
    pub total_died: usize,
    pub total_born: usize,
    pub live_cells: usize,
    pub quiescent: bool,
    pub elapsed: Duration,
}

impl SimulationRunner {
    pub fn new(engine: LifeEngine, max_generations: usize, stop_when_stable: bool) -> Self {
        Self {
            engine,
            max_generations,
            stop_when_stable,
        }
    }

    /// Run without observing intermediate deltas.
    pub fn run(&mut self) -> RunReport {
        self.run_with(|_, _, _| {})
    }

    /// Run, handing the observer the engine's read surface, the generation
    /// number (starting at 1), and the delta after every step. A renderer
    /// paints the full grid once up front and then applies only the deltas
    /// it receives here.
    pub fn run_with<F>(&mut self, mut observer: F) -> RunReport
    where
        F: FnMut(&LifeEngine, usize, &StepDelta),
    {
        let start = Instant::now();
        let mut generations = 0;
        let mut total_died = 0;
        let mut total_born = 0;
        let mut quiescent = false;

        while generations < self.max_generations {
            let delta = self.engine.step();
            generations += 1;
            total_died += delta.died.len();
            total_born += delta.born.len();

            log::trace!(
                "generation {}: {} died, {} born",
                generations,
                delta.died.len(),
                delta.born.len()
            );
            observer(&self.engine, generations, &delta);

            if delta.is_quiescent() {
                quiescent = true;
                if self.stop_when_stable {
                    break;
                }
            }
        }

        let report = RunReport {
            generations,
            total_died,
            total_born,
            live_cells: self.engine.live_count(),
            quiescent,
            elapsed: start.elapsed(),
        };
        log::debug!(
            "run finished after {} generation(s), {} cell(s) alive",
            report.generations,
            report.live_cells
        );
        report
    }

    pub fn engine(&self) -> &LifeEngine {
        &self.engine
    }

    pub fn into_engine(self) -> LifeEngine {
        self.engine
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Generations: {}{}",
            self.generations,
            if self.quiescent { " (stable)" } else { "" }
        )?;
        writeln!(
            f,
            "Transitions: {} died, {} born",
            self.total_died, self.total_born
        )?;
        writeln!(f, "Live cells:  {}", self.live_cells)?;
        write!(f, "Elapsed:     {:.3}s", self.elapsed.as_secs_f64())
    }
}
