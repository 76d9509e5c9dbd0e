//! Callback contract between the domain model and the generic search.

use crate::core::SearchState;

/// Narrow interface a search space exposes to the generic best-first search.
///
/// The search itself knows nothing about bathymetry or tolerances; it only
/// asks for legal moves, transition costs, a lower bound on remaining cost,
/// and goal membership. Any routine honoring this contract (embedded or
/// external) can drive a reconstruction segment.
///
/// For the search to return cost-optimal paths without reopening expanded
/// nodes, `heuristic` must be admissible and consistent with `step_cost`.
pub trait SearchSpace {
    /// Append all states reachable from `state` in one step to `out`.
    /// `out` is cleared by the caller before each invocation.
    fn neighbors(&self, state: &SearchState, out: &mut Vec<SearchState>);

    /// Cost of the transition `from -> to`, where `to` was produced by
    /// [`neighbors`](SearchSpace::neighbors) from `from`.
    fn step_cost(&self, from: &SearchState, to: &SearchState) -> u32;

    /// Lower bound on the remaining cost from `state` to any goal state.
    fn heuristic(&self, state: &SearchState) -> u32;

    /// Whether `state` satisfies the goal.
    fn is_goal(&self, state: &SearchState) -> bool;
}
