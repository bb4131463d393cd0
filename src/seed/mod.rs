//! Seed sources for populating a fresh grid

pub mod patterns;
pub mod random;

pub use patterns::{
    create_example_patterns, load_pattern_from_file, parse_pattern, pattern_to_string,
    save_pattern_to_file, Pattern,
};
pub use random::{random_cells, seeding_rng, DEFAULT_DENSITY};
