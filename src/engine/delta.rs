//! Step output describing which cells changed in one generation

use serde::{Deserialize, Serialize};

/// The outcome of advancing the engine by one generation.
///
/// `died` and `born` hold flattened cell indices in ascending order, so a
/// renderer can repaint exactly the cells that changed instead of scanning
/// the whole grid. `width` is carried along for index decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepDelta {
    pub width: usize,
    pub died: Vec<usize>,
    pub born: Vec<usize>,
}

impl StepDelta {
    /// True when the step produced no transitions. A quiescent step means
    /// the grid has stabilized and further stepping will change nothing.
    pub fn is_quiescent(&self) -> bool {
        self.died.is_empty() && self.born.is_empty()
    }

    /// Total number of cells that changed state.
    pub fn changed(&self) -> usize {
        self.died.len() + self.born.len()
    }

    /// Decode a flattened index into `(x, y)` coordinates.
    #[inline]
    pub fn coords(&self, index: usize) -> (usize, usize) {
        (index % self.width, index / self.width)
    }

    /// Coordinates of the cells that died this step.
    pub fn died_coords(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.died.iter().map(|&index| self.coords(index))
    }

    /// Coordinates of the cells born this step.
    pub fn born_coords(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.born.iter().map(|&index| self.coords(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiescence() {
        let delta = StepDelta {
            width: 5,
            died: vec![],
            born: vec![],
        };
        assert!(delta.is_quiescent());
        assert_eq!(delta.changed(), 0);

        let delta = StepDelta {
            width: 5,
            died: vec![7],
            born: vec![],
        };
        assert!(!delta.is_quiescent());
        assert_eq!(delta.changed(), 1);
    }

    #[test]
    fn test_coordinate_decoding() {
        let delta = StepDelta {
            width: 5,
            died: vec![0, 7],
            born: vec![13],
        };
        assert_eq!(delta.coords(0), (0, 0));
        assert_eq!(delta.coords(7), (2, 1));
        assert_eq!(delta.coords(13), (3, 2));

        let died: Vec<_> = delta.died_coords().collect();
        assert_eq!(died, vec![(0, 0), (2, 1)]);
        let born: Vec<_> = delta.born_coords().collect();
        assert_eq!(born, vec![(3, 2)]);
    }

    #[test]
    fn test_json_round_trip() {
        let delta = StepDelta {
            width: 3,
            died: vec![1, 2],
            born: vec![4],
        };
        let json = serde_json::to_string(&delta).unwrap();
        let back: StepDelta = serde_json::from_str(&json).unwrap();
        assert_eq!(delta, back);
    }
}
