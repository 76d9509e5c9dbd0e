//! Embedded A* search over a [`SearchSpace`].

use log::trace;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::core::SearchState;

use super::space::SearchSpace;

/// Entry in the open set.
///
/// Ordered for a min-heap on f-cost with ties broken by insertion order, so
/// identical inputs always expand nodes in the same sequence.
#[derive(Clone, Debug)]
struct OpenNode {
    state: SearchState,
    g_cost: u32,
    f_cost: u32,
    seq: u64,
}

impl PartialEq for OpenNode {
    fn eq(&self, other: &Self) -> bool {
        self.f_cost == other.f_cost && self.seq == other.seq
    }
}

impl Eq for OpenNode {}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior; earlier insertion wins ties
        other
            .f_cost
            .cmp(&self.f_cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Result of one search attempt.
#[derive(Clone, Debug)]
pub struct SearchOutcome {
    /// Ordered states from start to goal (empty on failure)
    pub path: Vec<SearchState>,
    /// Accumulated path cost (meaningless on failure)
    pub cost: u32,
    /// Number of nodes expanded
    pub nodes_expanded: usize,
    /// Whether a goal state was reached within budget
    pub success: bool,
}

impl SearchOutcome {
    fn failed(nodes_expanded: usize) -> Self {
        Self {
            path: Vec::new(),
            cost: 0,
            nodes_expanded,
            success: false,
        }
    }
}

/// Best-first search from `start` to the space's goal set, discarding any
/// partial path whose f-cost exceeds `max_cost`.
///
/// With an admissible, consistent heuristic the first goal popped carries
/// the optimal cost. Exhausting the (budget-pruned) frontier is the sole
/// "no path" signal; there is no wall-clock limit.
pub fn find_path<S: SearchSpace>(space: &S, start: SearchState, max_cost: u32) -> SearchOutcome {
    trace!(
        "[search] start=({},{},t={}) budget={}",
        start.coord.row, start.coord.col, start.time, max_cost
    );

    let mut open_set = BinaryHeap::new();
    let mut closed_set: HashSet<SearchState> = HashSet::new();
    let mut came_from: HashMap<SearchState, SearchState> = HashMap::new();
    let mut g_scores: HashMap<SearchState, u32> = HashMap::new();

    let mut seq: u64 = 0;
    let h_start = space.heuristic(&start);
    if h_start > max_cost {
        return SearchOutcome::failed(0);
    }
    open_set.push(OpenNode {
        state: start,
        g_cost: 0,
        f_cost: h_start,
        seq,
    });
    g_scores.insert(start, 0);

    let mut nodes_expanded = 0;
    let mut neighbors = Vec::with_capacity(9);

    while let Some(current) = open_set.pop() {
        if closed_set.contains(&current.state) {
            continue;
        }

        if space.is_goal(&current.state) {
            return reconstruct(&came_from, current.state, current.g_cost, nodes_expanded);
        }

        closed_set.insert(current.state);
        nodes_expanded += 1;

        neighbors.clear();
        space.neighbors(&current.state, &mut neighbors);

        for &neighbor in &neighbors {
            if closed_set.contains(&neighbor) {
                continue;
            }

            let tentative_g = current.g_cost + space.step_cost(&current.state, &neighbor);
            let known_g = g_scores.get(&neighbor).copied().unwrap_or(u32::MAX);
            if tentative_g >= known_g {
                continue;
            }

            let f = tentative_g + space.heuristic(&neighbor);
            if f > max_cost {
                continue;
            }

            came_from.insert(neighbor, current.state);
            g_scores.insert(neighbor, tentative_g);
            seq += 1;
            open_set.push(OpenNode {
                state: neighbor,
                g_cost: tentative_g,
                f_cost: f,
                seq,
            });
        }
    }

    SearchOutcome::failed(nodes_expanded)
}

fn reconstruct(
    came_from: &HashMap<SearchState, SearchState>,
    goal: SearchState,
    cost: u32,
    nodes_expanded: usize,
) -> SearchOutcome {
    let mut path = Vec::new();
    let mut current = goal;
    path.push(current);
    while let Some(&prev) = came_from.get(&current) {
        current = prev;
        path.push(current);
    }
    path.reverse();

    trace!(
        "[search] reached goal: {} states, cost={}, expanded={}",
        path.len(),
        cost,
        nodes_expanded
    );

    SearchOutcome {
        path,
        cost,
        nodes_expanded,
        success: true,
    }
}
