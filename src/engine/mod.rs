//! Incremental Game of Life engine core

pub mod delta;
pub mod grid;
pub mod neighbors;

pub use delta::StepDelta;
pub use grid::{EngineError, LifeEngine};
pub use neighbors::NeighborTable;
