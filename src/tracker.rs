//! Top-level track reconstruction driver.

use log::{debug, info, warn};

use crate::config::TrackerConfig;
use crate::detect::{validate_anchors, Anchor};
use crate::error::Result;
use crate::grid::{BathymetryGrid, DepthSeries, FeasibilityModel};
use crate::planner::{SegmentOutcome, SegmentPlanner};
use crate::trajectory::{assemble, Trajectory};

/// A finished reconstruction: the assembled trajectory plus the raw
/// per-segment outcomes for callers that want to inspect which attempt
/// succeeded or why a gap exists.
#[derive(Clone, Debug)]
pub struct Reconstruction {
    /// The assembled, time-indexed trajectory
    pub trajectory: Trajectory,
    /// One outcome per consecutive anchor pair, in time order
    pub segments: Vec<SegmentOutcome>,
}

impl Reconstruction {
    /// Number of anchor pairs that could not be connected
    pub fn gap_count(&self) -> usize {
        self.segments.iter().filter(|s| !s.is_solved()).count()
    }
}

/// Reconstructs the most plausible trajectory between acoustic detections.
///
/// Holds only configuration; the raster, depth record and anchors are
/// supplied per run and stay read-only throughout. Segments are solved
/// strictly in increasing time order and independently of one another, so
/// the whole run is deterministic.
pub struct TrackReconstructor {
    config: TrackerConfig,
}

impl TrackReconstructor {
    /// Create a reconstructor, rejecting invalid configuration up front
    pub fn new(config: TrackerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create with default configuration
    pub fn with_defaults() -> Self {
        Self {
            config: TrackerConfig::default(),
        }
    }

    /// The active configuration
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Reconstruct the trajectory through `anchors` over the given raster
    /// and depth record.
    ///
    /// Precondition failures (fewer than two anchors, anchor time outside
    /// the record, unordered anchors) are reported before any search
    /// begins. Unsolvable segments are not errors: each is surfaced as a
    /// warning and left as a gap in the result.
    pub fn reconstruct(
        &self,
        grid: &BathymetryGrid,
        depths: &DepthSeries,
        anchors: &[Anchor],
    ) -> Result<Reconstruction> {
        validate_anchors(anchors, depths)?;

        let model = FeasibilityModel::new(grid, depths);
        let planner = SegmentPlanner::new(model, &self.config);

        info!(
            "[tracker] reconstructing {} segments over {} time steps",
            anchors.len() - 1,
            depths.len()
        );

        let mut segments = Vec::with_capacity(anchors.len() - 1);
        for pair in anchors.windows(2) {
            let outcome = planner.solve(&pair[0], &pair[1]);
            if let SegmentOutcome::Exhausted { start, goal, attempts } = &outcome {
                warn!(
                    "[tracker] segment t={}..{} unresolved after {} attempts; leaving gap",
                    start.time, goal.time, attempts
                );
            }
            segments.push(outcome);
        }

        let trajectory = assemble(depths.len(), &segments, grid);
        debug!(
            "[tracker] resolved {}/{} time steps, cost={}, spatial length={}",
            trajectory.resolved_steps(),
            trajectory.len(),
            trajectory.costs,
            trajectory.path_length
        );

        Ok(Reconstruction {
            trajectory,
            segments,
        })
    }
}
