//! Assembly of per-segment results into the full time-indexed trajectory.

use serde::{Deserialize, Serialize};

use crate::core::WorldPoint;
use crate::grid::BathymetryGrid;
use crate::planner::SegmentOutcome;

/// The assembled trajectory, one entry per time step of the depth record.
///
/// Steps covered by no solved segment stay `None` in `path` and in both
/// tolerance arrays - gaps are explicit so partial results cannot be
/// mistaken for complete ones. `path_length` and `costs` accumulate over
/// solved segments only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    /// Resolved world coordinate per time step, or `None` inside a gap
    pub path: Vec<Option<WorldPoint>>,
    /// Total spatial distance in search cost units: the per-step temporal
    /// component is subtracted, so only actual cell moves count
    pub path_length: f64,
    /// Sum of the accumulated costs of all solved segments
    pub costs: f64,
    /// Seabed tolerance that resolved each step, aligned with `path`
    pub seabed_tolerances: Vec<Option<f64>>,
    /// Benthic tolerance that resolved each step, aligned with `path`
    pub benthic_tolerances: Vec<Option<f64>>,
}

impl Trajectory {
    /// Number of time steps (length of the depth record)
    #[inline]
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Whether the trajectory covers no time steps
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Number of time steps with a resolved coordinate
    pub fn resolved_steps(&self) -> usize {
        self.path.iter().filter(|p| p.is_some()).count()
    }

    /// Whether every time step between the first and last resolved step is
    /// covered (no interior gaps)
    pub fn is_contiguous(&self) -> bool {
        let first = self.path.iter().position(|p| p.is_some());
        let last = self.path.iter().rposition(|p| p.is_some());
        match (first, last) {
            (Some(a), Some(b)) => self.path[a..=b].iter().all(|p| p.is_some()),
            _ => false,
        }
    }
}

/// Fold segment outcomes into the final trajectory.
///
/// Every solved segment writes world coordinates and its winning tolerance
/// pair over its exact time-index range; exhausted segments write nothing.
/// Consecutive segments share their boundary anchor step, so the later
/// segment rewrites that one entry with identical values - assembly order
/// is irrelevant to the result.
pub fn assemble(
    record_len: usize,
    outcomes: &[SegmentOutcome],
    grid: &BathymetryGrid,
) -> Trajectory {
    let mut trajectory = Trajectory {
        path: vec![None; record_len],
        path_length: 0.0,
        costs: 0.0,
        seabed_tolerances: vec![None; record_len],
        benthic_tolerances: vec![None; record_len],
    };

    for outcome in outcomes {
        let result = match outcome {
            SegmentOutcome::Solved(result) => result,
            SegmentOutcome::Exhausted { .. } => continue,
        };
        for state in &result.states {
            let idx = state.time as usize - 1;
            trajectory.path[idx] = Some(grid.world_coordinate_of(state.coord));
            trajectory.seabed_tolerances[idx] = Some(result.tolerance.seabed);
            trajectory.benthic_tolerances[idx] = Some(result.tolerance.benthic);
        }
        // Subtract the fixed temporal component: what remains is the number
        // of steps that actually moved between cells.
        trajectory.path_length += (result.cost - result.time_span()) as f64;
        trajectory.costs += result.cost as f64;
    }

    trajectory
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GridCoord, SearchState};
    use crate::detect::Anchor;
    use crate::grid::ToleranceSetting;
    use crate::planner::SegmentResult;

    fn grid() -> BathymetryGrid {
        BathymetryGrid::from_rows(vec![vec![10.0; 6]; 6])
    }

    fn solved(cells: &[(i32, i32)], start_time: u32, cost: u32, seabed: f64) -> SegmentOutcome {
        let states = cells
            .iter()
            .enumerate()
            .map(|(i, &(r, c))| SearchState::new(GridCoord::new(r, c), start_time + i as u32))
            .collect();
        SegmentOutcome::Solved(SegmentResult {
            states,
            cost,
            tolerance: ToleranceSetting::new(seabed, f64::INFINITY),
            attempt: 0,
        })
    }

    #[test]
    fn test_assemble_single_segment() {
        let grid = grid();
        // 3 steps: one move, one stay => cost 2 + 1 = 3, span 2
        let outcomes = vec![solved(&[(0, 0), (1, 1), (1, 1)], 1, 3, 0.5)];
        let t = assemble(5, &outcomes, &grid);

        assert_eq!(t.len(), 5);
        assert_eq!(t.resolved_steps(), 3);
        assert_eq!(t.path[0], Some(grid.world_coordinate_of(GridCoord::new(0, 0))));
        assert_eq!(t.path[2], Some(grid.world_coordinate_of(GridCoord::new(1, 1))));
        assert_eq!(t.path[3], None);
        assert_eq!(t.seabed_tolerances[1], Some(0.5));
        assert_eq!(t.seabed_tolerances[4], None);
        // Spatial component only: 3 - 2 = 1 move
        assert_eq!(t.path_length, 1.0);
        assert_eq!(t.costs, 3.0);
    }

    #[test]
    fn test_assemble_with_gap() {
        let grid = grid();
        let outcomes = vec![
            solved(&[(0, 0), (0, 1)], 1, 2, 0.0),
            SegmentOutcome::Exhausted {
                start: Anchor::new(GridCoord::new(0, 1), 2),
                goal: Anchor::new(GridCoord::new(4, 4), 5),
                attempts: 1,
            },
            solved(&[(4, 4), (5, 5)], 5, 2, 2.0),
        ];
        let t = assemble(6, &outcomes, &grid);

        assert_eq!(t.resolved_steps(), 4);
        assert!(!t.is_contiguous());
        // Gap over t=3..4
        assert_eq!(t.path[2], None);
        assert_eq!(t.path[3], None);
        assert_eq!(t.benthic_tolerances[2], None);
        // Aggregates skip the exhausted segment
        assert_eq!(t.costs, 4.0);
        assert_eq!(t.path_length, 2.0);
        // Each solved range carries its own winning tolerance
        assert_eq!(t.seabed_tolerances[0], Some(0.0));
        assert_eq!(t.seabed_tolerances[5], Some(2.0));
    }

    #[test]
    fn test_shared_anchor_step_written_once_consistently() {
        let grid = grid();
        let outcomes = vec![
            solved(&[(0, 0), (1, 1)], 1, 2, 0.0),
            solved(&[(1, 1), (2, 2)], 2, 2, 1.0),
        ];
        let t = assemble(3, &outcomes, &grid);

        assert!(t.is_contiguous());
        assert_eq!(t.path[1], Some(grid.world_coordinate_of(GridCoord::new(1, 1))));
        // Later segment's tolerance stands at the shared step
        assert_eq!(t.seabed_tolerances[1], Some(1.0));
    }

    #[test]
    fn test_empty_outcomes_all_unresolved() {
        let grid = grid();
        let t = assemble(4, &[], &grid);
        assert_eq!(t.resolved_steps(), 0);
        assert!(!t.is_contiguous());
        assert_eq!(t.costs, 0.0);
        assert_eq!(t.path_length, 0.0);
    }
}
