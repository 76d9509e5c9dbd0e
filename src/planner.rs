//! Per-segment search driver with adaptive tolerance relaxation.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::config::TrackerConfig;
use crate::core::SearchState;
use crate::detect::Anchor;
use crate::grid::{FeasibilityModel, ToleranceSetting};
use crate::search::{find_path, SegmentSpace};

/// A solved segment between two consecutive anchors.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SegmentResult {
    /// Ordered states from the start anchor to the goal, one per time step
    pub states: Vec<SearchState>,
    /// Accumulated search cost of the segment
    pub cost: u32,
    /// Tolerance pair of the attempt that succeeded
    pub tolerance: ToleranceSetting,
    /// Index of the successful attempt (0 = base tolerances)
    pub attempt: u32,
}

impl SegmentResult {
    /// Time span of the segment (goal time minus start time)
    #[inline]
    pub fn time_span(&self) -> u32 {
        match (self.states.first(), self.states.last()) {
            (Some(first), Some(last)) => last.time - first.time,
            _ => 0,
        }
    }
}

/// Outcome of driving one anchor pair through the adaptation loop.
#[derive(Clone, Debug)]
pub enum SegmentOutcome {
    /// A path was found; the first successful attempt wins
    Solved(SegmentResult),
    /// Every attempt failed; the segment becomes a gap in the trajectory
    Exhausted {
        /// Start anchor of the unsolved segment
        start: Anchor,
        /// Goal anchor of the unsolved segment
        goal: Anchor,
        /// Number of attempts made (adaptation_steps + 1)
        attempts: u32,
    },
}

impl SegmentOutcome {
    /// Whether this segment was solved
    #[inline]
    pub fn is_solved(&self) -> bool {
        matches!(self, SegmentOutcome::Solved(_))
    }
}

/// Tolerances applied at attempt `k`: each axis grows geometrically from
/// its base by `(1 + rate)^k`, independently (a zero rate freezes the axis).
pub fn tolerance_for_attempt(config: &TrackerConfig, attempt: u32) -> ToleranceSetting {
    let k = attempt as i32;
    ToleranceSetting::new(
        config.seabed_tolerance * (1.0 + config.seabed_adapt_rate).powi(k),
        config.benthic_tolerance * (1.0 + config.benthic_adapt_rate).powi(k),
    )
}

/// Drives the search for one segment at a time, widening tolerances on
/// failure up to `adaptation_steps` retries.
pub struct SegmentPlanner<'a> {
    model: FeasibilityModel<'a>,
    config: &'a TrackerConfig,
}

impl<'a> SegmentPlanner<'a> {
    /// Create a planner over a feasibility model
    pub fn new(model: FeasibilityModel<'a>, config: &'a TrackerConfig) -> Self {
        Self { model, config }
    }

    /// Solve the segment between two consecutive anchors.
    ///
    /// The search budget is `2 x Δtime` - the worst case where every step
    /// is a move. Attempts run with non-decreasing tolerances; the first
    /// success is returned with the tolerances that produced it. All
    /// attempts failing is non-fatal: the caller records a gap and moves on.
    pub fn solve(&self, start: &Anchor, goal: &Anchor) -> SegmentOutcome {
        let dt = goal.time - start.time;
        let max_cost = 2 * dt;
        let start_state = SearchState::new(start.coord, start.time);
        let goal_state = SearchState::new(goal.coord, goal.time);

        trace!(
            "[segment] t={}..{} start=({},{}) goal=({},{}) budget={}",
            start.time, goal.time, start.coord.row, start.coord.col, goal.coord.row,
            goal.coord.col, max_cost
        );

        for attempt in 0..=self.config.adaptation_steps {
            let tolerance = tolerance_for_attempt(self.config, attempt);

            // The start anchor itself must admit a state; a goal-side check
            // would be wrong here since goal_tolerance may accept nearby cells.
            if !self
                .model
                .is_traversable(start.coord, start.time, &tolerance)
            {
                debug!(
                    "[segment] attempt {}: start anchor infeasible at t={} (seabed_tol={:.3}, benthic_tol={:.3})",
                    attempt, start.time, tolerance.seabed, tolerance.benthic
                );
                continue;
            }

            let space = SegmentSpace::new(
                self.model,
                tolerance,
                goal_state,
                self.config.goal_tolerance,
            );
            let outcome = find_path(&space, start_state, max_cost);
            if outcome.success {
                debug!(
                    "[segment] t={}..{} solved at attempt {} (cost={}, expanded={})",
                    start.time, goal.time, attempt, outcome.cost, outcome.nodes_expanded
                );
                return SegmentOutcome::Solved(SegmentResult {
                    states: outcome.path,
                    cost: outcome.cost,
                    tolerance,
                    attempt,
                });
            }
            debug!(
                "[segment] attempt {}: no path within budget {} (expanded={})",
                attempt, max_cost, outcome.nodes_expanded
            );
        }

        SegmentOutcome::Exhausted {
            start: *start,
            goal: *goal,
            attempts: self.config.adaptation_steps + 1,
        }
    }
}
