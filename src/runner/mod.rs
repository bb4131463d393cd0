//! Simulation scheduling on top of the engine

pub mod simulation;

pub use simulation::{RunReport, SimulationRunner};
