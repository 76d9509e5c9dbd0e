//! # Matsya-Track: Acoustic Telemetry Track Reconstruction
//!
//! Reconstructs the most plausible trajectory of a free-ranging aquatic
//! animal through a bathymetric grid, given sparse acoustic detections
//! (known positions at known times) and a continuous record of depth
//! measurements from an attached sensor.
//!
//! ## Quick Start
//!
//! ```rust
//! use matsya_track::core::GridCoord;
//! use matsya_track::grid::{BathymetryGrid, DepthSeries};
//! use matsya_track::{Anchor, TrackReconstructor, TrackerConfig};
//!
//! // Flat 10 m deep basin, animal swimming at 5 m
//! let grid = BathymetryGrid::from_rows(vec![vec![10.0; 5]; 5]);
//! let depths = DepthSeries::new(vec![5.0; 6]);
//!
//! let anchors = vec![
//!     Anchor::new(GridCoord::new(0, 0), 1),
//!     Anchor::new(GridCoord::new(4, 4), 5),
//! ];
//!
//! let tracker = TrackReconstructor::new(TrackerConfig::default()).unwrap();
//! let result = tracker.reconstruct(&grid, &depths, &anchors).unwrap();
//! println!(
//!     "resolved {}/{} steps, spatial length {}",
//!     result.trajectory.resolved_steps(),
//!     result.trajectory.len(),
//!     result.trajectory.path_length
//! );
//! ```
//!
//! ## Architecture
//!
//! The library is organized into modules:
//!
//! - [`core`]: Fundamental types ([`core::GridCoord`], [`core::WorldPoint`],
//!   [`core::SearchState`])
//! - [`grid`]: Bathymetry raster, depth record, and the 3-D feasibility model
//! - [`detect`]: Anchor derivation from receiver signal matrices
//! - [`search`]: Deterministic A* over the narrow [`search::SearchSpace`] seam
//! - [`planner`]: Per-segment driver with adaptive tolerance relaxation
//! - [`trajectory`]: Assembly of segments into the time-indexed result
//! - [`config`] / [`error`] / [`io`]: settings, error types, file readers
//!
//! ## Data Flow
//!
//! ```text
//!  signal matrix + positions      bathymetry raster + depth record
//!            │                                 │
//!            ▼                                 ▼
//!     ┌─────────────┐                 ┌─────────────────┐
//!     │   Anchors   │                 │ FeasibilityModel │
//!     └──────┬──────┘                 └────────┬────────┘
//!            │      per consecutive pair      │
//!            └──────────────┬─────────────────┘
//!                           ▼
//!                  ┌─────────────────┐   widened tolerances
//!                  │ SegmentPlanner  │◄── on failure, up to
//!                  │  (A* + budget)  │    adaptation_steps
//!                  └────────┬────────┘
//!                           ▼
//!                  ┌─────────────────┐
//!                  │    Trajectory   │  explicit gaps where no
//!                  │   (assembler)   │  segment could be solved
//!                  └─────────────────┘
//! ```
//!
//! ## Semantics
//!
//! Movement is one king-move (or stay) per time step. A cell is traversable
//! at time `t` only if its seabed value is valid and the observed depth at
//! `t` respects the seabed and benthic tolerances; both depth comparisons
//! are strict. When a segment admits no path, tolerances grow geometrically
//! per retry, and a segment that stays unsolved becomes an explicit gap
//! rather than an error.

pub mod config;
pub mod core;
pub mod detect;
pub mod error;
pub mod grid;
pub mod io;
pub mod planner;
pub mod search;
pub mod tracker;
pub mod trajectory;

// Re-export main types at crate root
pub use config::TrackerConfig;
pub use detect::{derive_anchors, validate_anchors, Anchor};
pub use error::{Result, TrackError};
pub use planner::{SegmentOutcome, SegmentPlanner, SegmentResult};
pub use tracker::{Reconstruction, TrackReconstructor};
pub use trajectory::Trajectory;
