//! Search space for one trajectory segment between two anchors.

use crate::core::SearchState;
use crate::grid::{FeasibilityModel, ToleranceSetting};

use super::space::SearchSpace;

/// One anchor-to-anchor search space under a fixed tolerance pair.
///
/// Moves come from the feasibility model (Moore neighborhood plus stay, one
/// time step forward). Cost and heuristic share the Chebyshev-plus-time
/// formula; since every move advances time by one and covers at most one
/// cell, each step costs 1 (stay) or 2 (move), and the heuristic equals the
/// true Chebyshev lower bound on remaining cost - admissible and consistent.
pub struct SegmentSpace<'a> {
    model: FeasibilityModel<'a>,
    tolerance: ToleranceSetting,
    goal: SearchState,
    goal_tolerance: i32,
}

impl<'a> SegmentSpace<'a> {
    /// Create a segment space aiming at `goal` under `tolerance`.
    ///
    /// `goal_tolerance` is the spatial slack in cells modelling detector
    /// range: the goal time must match exactly, the goal cell only within
    /// Chebyshev distance `goal_tolerance`.
    pub fn new(
        model: FeasibilityModel<'a>,
        tolerance: ToleranceSetting,
        goal: SearchState,
        goal_tolerance: i32,
    ) -> Self {
        Self {
            model,
            tolerance,
            goal,
            goal_tolerance,
        }
    }

    /// The tolerance pair this space applies
    #[inline]
    pub fn tolerance(&self) -> ToleranceSetting {
        self.tolerance
    }
}

impl SearchSpace for SegmentSpace<'_> {
    fn neighbors(&self, state: &SearchState, out: &mut Vec<SearchState>) {
        self.model.feasible_moves(state, &self.tolerance, out);
    }

    fn step_cost(&self, from: &SearchState, to: &SearchState) -> u32 {
        from.transition_distance(to)
    }

    fn heuristic(&self, state: &SearchState) -> u32 {
        state.transition_distance(&self.goal)
    }

    fn is_goal(&self, state: &SearchState) -> bool {
        state.time == self.goal.time
            && state.coord.chebyshev_distance(&self.goal.coord) <= self.goal_tolerance
    }
}
