//! Configuration management for the simulator

pub mod settings;

pub use settings::{
    CliOverrides, GridConfig, OutputConfig, OutputFormat, RunConfig, SeedConfig, SeedSource,
    Settings,
};
