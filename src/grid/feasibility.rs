//! Feasibility model over the bathymetry raster and depth record.
//!
//! Combines the static raster with the observed depth series into a 3-D
//! (row, col, time) traversability predicate, and enumerates the legal
//! one-step moves from a search state.

use serde::{Deserialize, Serialize};

use crate::core::{GridCoord, SearchState};

use super::{BathymetryGrid, DepthSeries};

/// Tolerance pair applied uniformly during one search attempt.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ToleranceSetting {
    /// Allowed apparent penetration into the seabed (raster uncertainty), metres
    pub seabed: f64,
    /// Allowed vertical clearance above the seabed, metres (infinite disables)
    pub benthic: f64,
}

impl ToleranceSetting {
    /// Create a tolerance pair
    #[inline]
    pub fn new(seabed: f64, benthic: f64) -> Self {
        Self { seabed, benthic }
    }
}

/// 3-D feasibility predicate over raster x depth record.
///
/// Both inputs are borrowed read-only for the whole reconstruction run.
#[derive(Clone, Copy, Debug)]
pub struct FeasibilityModel<'a> {
    grid: &'a BathymetryGrid,
    depths: &'a DepthSeries,
}

impl<'a> FeasibilityModel<'a> {
    /// Create a model over a raster and depth record
    pub fn new(grid: &'a BathymetryGrid, depths: &'a DepthSeries) -> Self {
        Self { grid, depths }
    }

    /// The wrapped raster
    #[inline]
    pub fn grid(&self) -> &'a BathymetryGrid {
        self.grid
    }

    /// The wrapped depth record
    #[inline]
    pub fn depths(&self) -> &'a DepthSeries {
        self.depths
    }

    /// Whether a cell can be occupied at a time step under the given tolerances.
    ///
    /// A cell is traversable at time `t` iff all of:
    /// - `t` lies within the depth record and the cell within the raster,
    /// - the seabed value is valid and positive (not land / no-data),
    /// - `seabed + tolerance.seabed > observed[t]` - the animal cannot sit in
    ///   water shallower than it measured, beyond the uncertainty allowance
    ///   (equality is infeasible, the inequality is strict),
    /// - `seabed - observed[t] < tolerance.benthic` - the animal cannot hang
    ///   farther above the seabed than allowed (infinite disables the check).
    ///
    /// The benthic check bounds only the above-seabed direction; an apparent
    /// position below the seabed reading is left to the seabed tolerance.
    pub fn is_traversable(&self, coord: GridCoord, time: u32, tolerance: &ToleranceSetting) -> bool {
        let observed = match self.depths.at(time) {
            Some(d) => d,
            None => return false,
        };
        let seabed = match self.grid.depth_at(coord) {
            Some(d) => d,
            None => return false,
        };
        if seabed <= 0.0 {
            return false;
        }
        if seabed + tolerance.seabed <= observed {
            return false;
        }
        seabed - observed < tolerance.benthic
    }

    /// Enumerate the legal one-step moves from a state.
    ///
    /// Candidates are "stay in place" plus the Moore neighborhood, each at
    /// `time + 1`, filtered through [`is_traversable`]. Stay is emitted
    /// first as a search-speed heuristic; emission order carries no
    /// correctness weight. At most 9 states are appended to `out`.
    ///
    /// [`is_traversable`]: FeasibilityModel::is_traversable
    pub fn feasible_moves(
        &self,
        state: &SearchState,
        tolerance: &ToleranceSetting,
        out: &mut Vec<SearchState>,
    ) {
        let next_time = state.time + 1;
        if self.is_traversable(state.coord, next_time, tolerance) {
            out.push(SearchState::new(state.coord, next_time));
        }
        for coord in state.coord.neighbors_8() {
            if self.is_traversable(coord, next_time, tolerance) {
                out.push(SearchState::new(coord, next_time));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_grid(depth: f64) -> BathymetryGrid {
        BathymetryGrid::from_rows(vec![vec![depth; 5]; 5])
    }

    fn open() -> ToleranceSetting {
        ToleranceSetting::new(0.0, f64::INFINITY)
    }

    #[test]
    fn test_traversable_basic() {
        let grid = flat_grid(10.0);
        let depths = DepthSeries::new(vec![5.0; 4]);
        let model = FeasibilityModel::new(&grid, &depths);

        assert!(model.is_traversable(GridCoord::new(2, 2), 1, &open()));
        // Out of raster
        assert!(!model.is_traversable(GridCoord::new(5, 2), 1, &open()));
        assert!(!model.is_traversable(GridCoord::new(2, -1), 1, &open()));
        // Outside the depth record
        assert!(!model.is_traversable(GridCoord::new(2, 2), 0, &open()));
        assert!(!model.is_traversable(GridCoord::new(2, 2), 5, &open()));
    }

    #[test]
    fn test_land_and_nodata_blocked() {
        let mut rows = vec![vec![10.0; 3]; 3];
        rows[0][0] = -9999.0; // nodata
        rows[0][1] = 0.0; // dry land
        rows[0][2] = -2.0; // above datum
        let grid = BathymetryGrid::from_rows(rows);
        let depths = DepthSeries::new(vec![1.0; 2]);
        let model = FeasibilityModel::new(&grid, &depths);

        assert!(!model.is_traversable(GridCoord::new(0, 0), 1, &open()));
        assert!(!model.is_traversable(GridCoord::new(0, 1), 1, &open()));
        assert!(!model.is_traversable(GridCoord::new(0, 2), 1, &open()));
        assert!(model.is_traversable(GridCoord::new(1, 1), 1, &open()));
    }

    #[test]
    fn test_seabed_boundary_is_strict() {
        let grid = flat_grid(10.0);
        // Animal exactly as deep as the seabed
        let depths = DepthSeries::new(vec![10.0]);
        let model = FeasibilityModel::new(&grid, &depths);
        let c = GridCoord::new(2, 2);

        assert!(!model.is_traversable(c, 1, &ToleranceSetting::new(0.0, f64::INFINITY)));
        // Equality still infeasible with tolerance closing the gap exactly
        let deeper = DepthSeries::new(vec![12.0]);
        let model = FeasibilityModel::new(&grid, &deeper);
        assert!(!model.is_traversable(c, 1, &ToleranceSetting::new(2.0, f64::INFINITY)));
        assert!(model.is_traversable(c, 1, &ToleranceSetting::new(2.1, f64::INFINITY)));
    }

    #[test]
    fn test_benthic_clearance() {
        let grid = flat_grid(30.0);
        // Animal near the surface, 25 m above the seabed
        let depths = DepthSeries::new(vec![5.0]);
        let model = FeasibilityModel::new(&grid, &depths);
        let c = GridCoord::new(1, 1);

        assert!(model.is_traversable(c, 1, &ToleranceSetting::new(0.0, f64::INFINITY)));
        assert!(model.is_traversable(c, 1, &ToleranceSetting::new(0.0, 25.1)));
        // Strict: clearance equal to the bound is infeasible
        assert!(!model.is_traversable(c, 1, &ToleranceSetting::new(0.0, 25.0)));
        assert!(!model.is_traversable(c, 1, &ToleranceSetting::new(0.0, 0.0)));
    }

    #[test]
    fn test_feasible_moves_full_neighborhood() {
        let grid = flat_grid(10.0);
        let depths = DepthSeries::new(vec![5.0; 5]);
        let model = FeasibilityModel::new(&grid, &depths);

        let mut out = Vec::new();
        model.feasible_moves(&SearchState::new(GridCoord::new(2, 2), 1), &open(), &mut out);
        assert_eq!(out.len(), 9);
        // Stay comes first
        assert_eq!(out[0], SearchState::new(GridCoord::new(2, 2), 2));
        for s in &out {
            assert_eq!(s.time, 2);
        }
    }

    #[test]
    fn test_feasible_moves_clipped_at_corner() {
        let grid = flat_grid(10.0);
        let depths = DepthSeries::new(vec![5.0; 5]);
        let model = FeasibilityModel::new(&grid, &depths);

        let mut out = Vec::new();
        model.feasible_moves(&SearchState::new(GridCoord::new(0, 0), 1), &open(), &mut out);
        // Stay + E, SE, S
        assert_eq!(out.len(), 4);
    }

    #[test]
    fn test_feasible_moves_empty_when_surrounded() {
        // Center cell deep, everything around it dry, and the observed depth
        // at the next step exceeds even the center depth: no move survives,
        // including stay.
        let mut rows = vec![vec![0.0; 3]; 3];
        rows[1][1] = 10.0;
        let grid = BathymetryGrid::from_rows(rows);
        let depths = DepthSeries::new(vec![5.0, 15.0]);
        let model = FeasibilityModel::new(&grid, &depths);

        let mut out = Vec::new();
        model.feasible_moves(&SearchState::new(GridCoord::new(1, 1), 1), &open(), &mut out);
        assert!(out.is_empty());
    }
}
