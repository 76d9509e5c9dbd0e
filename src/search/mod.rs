//! Time-extended grid search.
//!
//! - [`SearchSpace`]: the narrow neighbor/cost/heuristic/goal contract
//! - [`find_path`]: embedded deterministic A* honoring a cost budget
//! - [`SegmentSpace`]: the anchor-to-anchor space over the feasibility model
//!
//! ```rust,ignore
//! use matsya_track::search::{find_path, SegmentSpace};
//!
//! let space = SegmentSpace::new(model, tolerance, goal_state, 0);
//! let outcome = find_path(&space, start_state, budget);
//! if outcome.success {
//!     println!("segment solved at cost {}", outcome.cost);
//! }
//! ```

mod astar;
mod segment;
mod space;

pub use astar::{find_path, SearchOutcome};
pub use segment::SegmentSpace;
pub use space::SearchSpace;
