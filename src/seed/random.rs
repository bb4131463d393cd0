//! Random seeding

use itertools::iproduct;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Fraction of cells set alive when no density is configured.
pub const DEFAULT_DENSITY: f64 = 0.4;

/// Generate seed coordinates where every cell of a `width` x `height` grid
/// is independently alive with probability `density`.
///
/// Coordinates come out in row-major order, ready for the engine's
/// bulk-seed contract.
pub fn random_cells<R: Rng>(
    width: usize,
    height: usize,
    density: f64,
    rng: &mut R,
) -> Vec<(i64, i64)> {
    let cells: Vec<(i64, i64)> = iproduct!(0..height, 0..width)
        .filter(|_| rng.gen::<f64>() < density)
        .map(|(y, x)| (x as i64, y as i64))
        .collect();

    log::debug!(
        "random seed drew {} of {} cells at density {}",
        cells.len(),
        width * height,
        density
    );
    cells
}

/// RNG for seeding: a fixed seed gives reproducible grids, otherwise the
/// generator is seeded from OS entropy.
pub fn seeding_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
