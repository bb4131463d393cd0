//! Incremental Game of Life engine

use super::{NeighborTable, StepDelta};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

/// Errors produced when constructing an engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("grid of {width}x{height} cells does not fit in memory")]
    GridTooLarge { width: usize, height: usize },
}

/// A bounded Game of Life grid that re-evaluates only cells whose state or
/// neighbor count changed since the last step.
///
/// Instead of rescanning the whole grid every generation, the engine keeps a
/// running live-neighbor counter per cell and a set of "candidate" cells
/// touched by recent transitions. A step examines just the candidates
/// against the B3/S23 rule, so the per-step cost is proportional to the
/// number of cells affected rather than to `width * height`.
///
/// Dimensions are fixed for the lifetime of an instance; growing or
/// shrinking the grid means building a new engine. All operations are
/// synchronous and the engine holds no external resources, but internal
/// arrays are mutated without atomicity guarantees, so a single logical
/// caller must drive each instance.
#[derive(Debug, Clone)]
pub struct LifeEngine {
    width: usize,
    height: usize,
    cells: Vec<bool>,
    counters: Vec<u8>,
    neighbors: NeighborTable,
    candidates: HashSet<usize>,
}

impl LifeEngine {
    /// Create an all-dead grid of the given dimensions.
    ///
    /// Allocates the state and counter arrays and precomputes the neighbor
    /// table. Rejects zero dimensions and dimension products that overflow
    /// `usize`; a rejected call builds nothing.
    pub fn new(width: usize, height: usize) -> Result<Self, EngineError> {
        if width == 0 || height == 0 {
            return Err(EngineError::InvalidDimensions { width, height });
        }
        let area = width
            .checked_mul(height)
            .ok_or(EngineError::GridTooLarge { width, height })?;

        Ok(Self {
            width,
            height,
            cells: vec![false; area],
            counters: vec![0; area],
            neighbors: NeighborTable::build(width, height),
            candidates: HashSet::new(),
        })
    }

    /// Kill every cell, zero every counter, and forget pending candidates.
    ///
    /// The neighbor table depends only on the dimensions and is left
    /// untouched. Idempotent.
    pub fn reset(&mut self) {
        self.cells.fill(false);
        self.counters.fill(0);
        self.candidates.clear();
    }

    /// The single point of truth for mutating a cell.
    ///
    /// Writes the new state, then propagates `delta` (+1 when the cell just
    /// became alive, -1 when it just died) into every neighbor's counter.
    /// The cell and all its neighbors become candidates for the next step.
    /// Counters are written nowhere else, which is what keeps them equal to
    /// the true live-neighbor counts as long as `delta` matches the one
    /// state flip being applied.
    ///
    /// Trusts its caller: an out-of-range index panics.
    fn set_cell(&mut self, index: usize, alive: bool, delta: i8) {
        self.cells[index] = alive;
        self.candidates.insert(index);
        for &neighbor in self.neighbors.of(index) {
            self.counters[neighbor] = self.counters[neighbor].wrapping_add_signed(delta);
            self.candidates.insert(neighbor);
        }
    }

    /// Flip the cell at `(x, y)` and return its new state.
    ///
    /// Coordinates outside the grid are a tolerated no-op returning `false`,
    /// so callers stamping patterns near an edge can let the boundary clip
    /// them instead of special-casing it.
    pub fn toggle(&mut self, x: i64, y: i64) -> bool {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return false;
        }
        let index = x as usize + self.width * y as usize;
        let alive = !self.cells[index];
        self.set_cell(index, alive, if alive { 1 } else { -1 });
        alive
    }

    /// Set each supplied coordinate alive via [`toggle`](Self::toggle),
    /// returning the indices that actually flipped to alive.
    ///
    /// Out-of-bounds coordinates are clipped silently; a coordinate naming
    /// an already-alive cell flips it dead and is not reported, so callers
    /// wanting "set alive unconditionally" must pre-filter live cells.
    pub fn seed<I>(&mut self, coords: I) -> Vec<usize>
    where
        I: IntoIterator<Item = (i64, i64)>,
    {
        let mut born = Vec::new();
        for (x, y) in coords {
            if self.toggle(x, y) {
                born.push(x as usize + self.width * y as usize);
            }
        }
        born
    }

    /// Decide the fate of every candidate against the current snapshot.
    ///
    /// All decisions for a generation are made against the pre-step state
    /// and counters; nothing is mutated here. Returns `(to_die, to_birth)`
    /// in ascending index order.
    fn analyze(&self) -> (Vec<usize>, Vec<usize>) {
        let mut to_die = Vec::new();
        let mut to_birth = Vec::new();

        for &index in &self.candidates {
            let count = self.counters[index];
            if self.cells[index] {
                if count != 2 && count != 3 {
                    to_die.push(index);
                }
            } else if count == 3 {
                to_birth.push(index);
            }
        }

        to_die.sort_unstable();
        to_birth.sort_unstable();
        (to_die, to_birth)
    }

    /// Advance the grid one generation and report which cells changed.
    ///
    /// The candidate set is cleared before transitions are applied, so the
    /// next step examines only cells touched by this step. Deaths are
    /// applied before births; ordering only affects intra-step candidate
    /// bookkeeping, since every decision was already made against the
    /// frozen snapshot. An empty delta means the grid is quiescent.
    pub fn step(&mut self) -> StepDelta {
        let (died, born) = self.analyze();
        self.candidates.clear();

        for &index in &died {
            self.set_cell(index, false, -1);
        }
        for &index in &born {
            self.set_cell(index, true, 1);
        }

        StepDelta {
            width: self.width,
            died,
            born,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The full state array, for an initial whole-grid paint.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Read the cell at `(x, y)`; out-of-bounds reads as dead.
    pub fn get(&self, x: i64, y: i64) -> bool {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return false;
        }
        self.cells[x as usize + self.width * y as usize]
    }

    /// Flatten `(x, y)` into a cell index.
    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        x + self.width * y
    }

    /// Decode a cell index into `(x, y)`.
    #[inline]
    pub fn coords(&self, index: usize) -> (usize, usize) {
        (index % self.width, index / self.width)
    }

    /// Number of live cells.
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// True when no cell is alive.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| !cell)
    }
}

impl fmt::Display for LifeEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                let symbol = if self.cells[self.index(x, y)] { '█' } else { '·' };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Recompute every counter from scratch through the neighbor table and
    /// compare with the incrementally maintained values.
    fn assert_counters_consistent(engine: &LifeEngine) {
        for index in 0..engine.cells.len() {
            let expected = engine
                .neighbors
                .of(index)
                .iter()
                .filter(|&&neighbor| engine.cells[neighbor])
                .count() as u8;
            assert_eq!(
                engine.counters[index], expected,
                "counter out of sync at index {}",
                index
            );
        }
    }

    fn live_coords(engine: &LifeEngine) -> Vec<(usize, usize)> {
        (0..engine.cells().len())
            .filter(|&index| engine.cells()[index])
            .map(|index| engine.coords(index))
            .collect()
    }

    #[test]
    fn test_rejects_degenerate_dimensions() {
        assert_eq!(
            LifeEngine::new(0, 5).unwrap_err(),
            EngineError::InvalidDimensions { width: 0, height: 5 }
        );
        assert_eq!(
            LifeEngine::new(5, 0).unwrap_err(),
            EngineError::InvalidDimensions { width: 5, height: 0 }
        );
        assert_eq!(
            LifeEngine::new(usize::MAX, 2).unwrap_err(),
            EngineError::GridTooLarge {
                width: usize::MAX,
                height: 2
            }
        );
    }

    #[test]
    fn test_new_engine_is_empty() {
        let engine = LifeEngine::new(4, 3).unwrap();
        assert_eq!(engine.width(), 4);
        assert_eq!(engine.height(), 3);
        assert_eq!(engine.cells().len(), 12);
        assert!(engine.is_empty());
        assert_eq!(engine.live_count(), 0);
        assert_counters_consistent(&engine);
    }

    #[test]
    fn test_toggle_updates_neighbor_counters() {
        let mut engine = LifeEngine::new(5, 5).unwrap();
        assert!(engine.toggle(2, 2));
        assert!(engine.get(2, 2));
        assert_eq!(engine.live_count(), 1);
        assert_counters_consistent(&engine);

        // Own counter untouched, all eight neighbors incremented
        assert_eq!(engine.counters[engine.index(2, 2)], 0);
        for &neighbor in engine.neighbors.of(engine.index(2, 2)) {
            assert_eq!(engine.counters[neighbor], 1);
        }
    }

    #[test]
    fn test_round_trip_toggle_restores_everything() {
        let mut engine = LifeEngine::new(5, 5).unwrap();
        engine.seed([(1, 1), (3, 2)]);
        let before = engine.clone();

        assert!(engine.toggle(2, 2));
        assert!(!engine.toggle(2, 2));

        assert_eq!(engine.cells, before.cells);
        assert_eq!(engine.counters, before.counters);
        assert_counters_consistent(&engine);
    }

    #[test]
    fn test_out_of_bounds_toggle_is_a_no_op() {
        let mut engine = LifeEngine::new(4, 3).unwrap();
        engine.seed([(1, 1)]);
        let before = engine.clone();
        let pending = engine.candidates.clone();

        assert!(!engine.toggle(-1, 0));
        assert!(!engine.toggle(4, 0));
        assert!(!engine.toggle(0, -1));
        assert!(!engine.toggle(0, 3));

        assert_eq!(engine.cells, before.cells);
        assert_eq!(engine.counters, before.counters);
        assert_eq!(engine.candidates, pending);
    }

    #[test]
    fn test_mutations_mark_all_affected_cells_as_candidates() {
        let mut engine = LifeEngine::new(5, 5).unwrap();
        engine.toggle(2, 2);

        let center = engine.index(2, 2);
        assert!(engine.candidates.contains(&center));
        for &neighbor in engine.neighbors.of(center) {
            assert!(engine.candidates.contains(&neighbor));
        }
        assert_eq!(engine.candidates.len(), 9);
    }

    #[test]
    fn test_seed_reports_cells_flipped_alive() {
        let mut engine = LifeEngine::new(4, 4).unwrap();

        // (9, 9) clips at the boundary; the duplicate (1, 1) flips the cell
        // back to dead and is not reported.
        let born = engine.seed([(1, 1), (2, 1), (9, 9), (1, 1)]);
        assert_eq!(born, vec![engine.index(1, 1), engine.index(2, 1)]);
        assert!(!engine.get(1, 1));
        assert!(engine.get(2, 1));
        assert_counters_consistent(&engine);
    }

    #[test]
    fn test_empty_grid_is_quiescent() {
        let mut engine = LifeEngine::new(6, 6).unwrap();
        for _ in 0..3 {
            let delta = engine.step();
            assert!(delta.is_quiescent());
        }
        assert!(engine.is_empty());
    }

    #[test]
    fn test_lone_cell_dies() {
        let mut engine = LifeEngine::new(3, 3).unwrap();
        engine.seed([(1, 1)]);

        let delta = engine.step();
        assert_eq!(delta.died, vec![engine.index(1, 1)]);
        assert!(delta.born.is_empty());
        assert!(engine.is_empty());
        assert_counters_consistent(&engine);
    }

    #[test]
    fn test_block_is_a_still_life() {
        let mut engine = LifeEngine::new(4, 4).unwrap();
        engine.seed([(1, 1), (2, 1), (1, 2), (2, 2)]);

        let delta = engine.step();
        assert!(delta.is_quiescent());
        assert_eq!(engine.live_count(), 4);

        // A stable step leaves no candidates behind, so the next step
        // inspects nothing at all.
        assert!(engine.candidates.is_empty());
        assert_counters_consistent(&engine);
    }

    #[test]
    fn test_blinker_oscillates() {
        let mut engine = LifeEngine::new(5, 5).unwrap();
        engine.seed([(1, 2), (2, 2), (3, 2)]);
        let horizontal = live_coords(&engine);

        let delta = engine.step();
        assert_eq!(delta.died, vec![engine.index(1, 2), engine.index(3, 2)]);
        assert_eq!(delta.born, vec![engine.index(2, 1), engine.index(2, 3)]);
        assert_eq!(live_coords(&engine), vec![(2, 1), (2, 2), (2, 3)]);
        assert_counters_consistent(&engine);

        let delta = engine.step();
        assert_eq!(delta.died, vec![engine.index(2, 1), engine.index(2, 3)]);
        assert_eq!(delta.born, vec![engine.index(1, 2), engine.index(3, 2)]);
        assert_eq!(live_coords(&engine), horizontal);
        assert_counters_consistent(&engine);
    }

    #[test]
    fn test_glider_translates_diagonally() {
        let mut engine = LifeEngine::new(10, 10).unwrap();
        let glider = [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];
        engine.seed(glider);

        for _ in 0..4 {
            engine.step();
            assert_counters_consistent(&engine);
        }

        let mut expected: Vec<(usize, usize)> = glider
            .iter()
            .map(|&(x, y)| (x as usize + 1, y as usize + 1))
            .collect();
        expected.sort_unstable();
        let mut actual = live_coords(&engine);
        actual.sort_unstable();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_counter_invariant_under_mixed_workload() {
        let mut engine = LifeEngine::new(8, 6).unwrap();
        engine.seed([(1, 1), (2, 1), (3, 1), (5, 4), (6, 4), (5, 3), (0, 0)]);
        assert_counters_consistent(&engine);

        engine.toggle(7, 5);
        engine.toggle(0, 0);
        assert_counters_consistent(&engine);

        for _ in 0..5 {
            engine.step();
            assert_counters_consistent(&engine);
        }
    }

    #[test]
    fn test_reset_is_idempotent_and_matches_fresh_engine() {
        let mut engine = LifeEngine::new(5, 4).unwrap();
        engine.seed([(1, 1), (2, 2), (3, 3)]);
        engine.step();

        engine.reset();
        let once = engine.clone();
        engine.reset();

        assert_eq!(engine.cells, once.cells);
        assert_eq!(engine.counters, once.counters);

        let fresh = LifeEngine::new(5, 4).unwrap();
        assert_eq!(engine.cells, fresh.cells);
        assert_eq!(engine.counters, fresh.counters);
        assert!(engine.candidates.is_empty());
    }

    #[test]
    fn test_single_cell_grid() {
        let mut engine = LifeEngine::new(1, 1).unwrap();
        assert!(engine.toggle(0, 0));

        // No neighbors, so the lone cell starves immediately.
        let delta = engine.step();
        assert_eq!(delta.died, vec![0]);
        assert!(engine.is_empty());
    }

    #[test]
    fn test_display_paints_live_and_dead_cells() {
        let mut engine = LifeEngine::new(3, 2).unwrap();
        engine.seed([(0, 0), (2, 1)]);
        assert_eq!(engine.to_string(), "█··\n··█\n");
    }
}
