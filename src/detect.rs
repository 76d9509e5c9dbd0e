//! Anchor derivation from acoustic detection records.

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::core::{GridCoord, WorldPoint};
use crate::error::{Result, TrackError};
use crate::grid::{BathymetryGrid, DepthSeries};

/// Signal matrix entry: a receiver heard the transmitter this time step.
pub const SIGNAL_DETECTED: i8 = 1;
/// Signal matrix entry: the receiver was listening but heard nothing.
pub const SIGNAL_NONE: i8 = 0;
/// Signal matrix entry: the receiver was not deployed / not recording.
pub const SIGNAL_INACTIVE: i8 = -1;

/// A known (position, time) detection event the reconstructed track must
/// pass through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Anchor {
    /// Grid cell of the detecting receiver
    pub coord: GridCoord,
    /// Time step of the detection (1-based)
    pub time: u32,
}

impl Anchor {
    /// Create a new anchor
    #[inline]
    pub fn new(coord: GridCoord, time: u32) -> Self {
        Self { coord, time }
    }
}

/// Derive the anchor list from a signal matrix and receiver positions.
///
/// `signals` holds one row per time step (row index 0 is time step 1), one
/// entry per receiver aligned with `positions`. When several receivers fire
/// in the same time step the first one encountered wins; the set keyed by
/// time index enforces at most one anchor per step. The returned list is
/// time-sorted by construction.
pub fn derive_anchors(
    signals: &[Vec<i8>],
    positions: &[WorldPoint],
    grid: &BathymetryGrid,
) -> Result<Vec<Anchor>> {
    let mut seen_times: HashSet<u32> = HashSet::new();
    let mut anchors = Vec::new();

    for (row_idx, row) in signals.iter().enumerate() {
        if row.len() != positions.len() {
            return Err(TrackError::SignalShape {
                row: row_idx,
                got: row.len(),
                expected: positions.len(),
            });
        }
        let time = row_idx as u32 + 1;
        for (receiver, &signal) in row.iter().enumerate() {
            if signal != SIGNAL_DETECTED {
                continue;
            }
            if !seen_times.insert(time) {
                break;
            }
            let coord = grid
                .grid_index_of(positions[receiver])
                .ok_or(TrackError::AnchorOffGrid { time })?;
            anchors.push(Anchor::new(coord, time));
            break;
        }
    }

    debug!(
        "[detect] derived {} anchors from {} time steps x {} receivers",
        anchors.len(),
        signals.len(),
        positions.len()
    );
    Ok(anchors)
}

/// Check the preconditions every reconstruction run requires.
///
/// Fails before any search begins when fewer than two anchors exist, an
/// anchor time falls outside the depth record, or times are not strictly
/// increasing.
pub fn validate_anchors(anchors: &[Anchor], depths: &DepthSeries) -> Result<()> {
    if anchors.len() < 2 {
        return Err(TrackError::InsufficientAnchors(anchors.len()));
    }
    let mut prev_time = 0u32;
    for anchor in anchors {
        if anchor.time == 0 || anchor.time > depths.last_step() {
            return Err(TrackError::AnchorTimeOutOfRange {
                time: anchor.time,
                record_len: depths.len(),
            });
        }
        if anchor.time <= prev_time {
            return Err(TrackError::UnorderedAnchors(anchor.time));
        }
        prev_time = anchor.time;
    }
    Ok(())
}
