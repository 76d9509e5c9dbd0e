//! Search state in the time-extended grid.

use serde::{Deserialize, Serialize};

use super::point::GridCoord;

/// A node in the 3-D (row, col, time) search graph.
///
/// Time steps are 1-based: step `t` corresponds to the `t`-th sample of the
/// depth record. Equality and hashing are by value so states can key the
/// open/closed bookkeeping of the search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchState {
    /// Grid cell occupied at this time step
    pub coord: GridCoord,
    /// Time step (1-based index into the depth record)
    pub time: u32,
}

impl SearchState {
    /// Create a new search state
    #[inline]
    pub fn new(coord: GridCoord, time: u32) -> Self {
        Self { coord, time }
    }

    /// Combined transition metric to another state:
    /// spatial Chebyshev distance plus absolute time difference.
    #[inline]
    pub fn transition_distance(&self, other: &SearchState) -> u32 {
        let spatial = self.coord.chebyshev_distance(&other.coord) as u32;
        let temporal = self.time.abs_diff(other.time);
        spatial + temporal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_distance() {
        let a = SearchState::new(GridCoord::new(0, 0), 1);
        let b = SearchState::new(GridCoord::new(1, 1), 2);
        assert_eq!(a.transition_distance(&b), 2);

        let stay = SearchState::new(GridCoord::new(0, 0), 2);
        assert_eq!(a.transition_distance(&stay), 1);

        let far = SearchState::new(GridCoord::new(4, 2), 5);
        assert_eq!(a.transition_distance(&far), 8);
        // Symmetric
        assert_eq!(far.transition_distance(&a), 8);
    }
}
