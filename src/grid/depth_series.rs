//! Time series of observed animal depths.

use serde::{Deserialize, Serialize};

/// Ordered record of one observed animal depth per time step.
///
/// Time steps are 1-based: `at(1)` is the first sample, `at(len())` the
/// last. The record is immutable after construction; the whole
/// reconstruction runs against a single series.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DepthSeries {
    samples: Vec<f64>,
}

impl DepthSeries {
    /// Create a series from raw samples (index 0 becomes time step 1)
    pub fn new(samples: Vec<f64>) -> Self {
        Self { samples }
    }

    /// Number of time steps
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the series holds no samples
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Last valid time step (equal to `len()`)
    #[inline]
    pub fn last_step(&self) -> u32 {
        self.samples.len() as u32
    }

    /// Observed depth at a 1-based time step, `None` outside [1, len]
    #[inline]
    pub fn at(&self, time: u32) -> Option<f64> {
        if time == 0 {
            return None;
        }
        self.samples.get(time as usize - 1).copied()
    }

    /// Raw sample slice (index 0 is time step 1)
    #[inline]
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }
}
