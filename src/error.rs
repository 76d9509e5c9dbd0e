//! Error types for matsya-track

use thiserror::Error;

/// Fatal reconstruction errors.
///
/// Per-segment infeasibility is deliberately not represented here: a
/// segment that stays unsolved after all adaptation attempts becomes a gap
/// in the trajectory and a warning, never an `Err`.
#[derive(Error, Debug)]
pub enum TrackError {
    #[error("need at least 2 anchors to reconstruct a track, got {0}")]
    InsufficientAnchors(usize),

    #[error("anchor time step {time} outside depth record of {record_len} samples")]
    AnchorTimeOutOfRange { time: u32, record_len: usize },

    #[error("anchors must be strictly increasing in time (offending time step {0})")]
    UnorderedAnchors(u32),

    #[error("anchor at time step {time} lies outside the raster")]
    AnchorOffGrid { time: u32 },

    #[error("detection signal matrix row {row} has {got} entries, expected {expected}")]
    SignalShape {
        row: usize,
        got: usize,
        expected: usize,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed {what} (line {line}): {detail}")]
    Parse {
        what: &'static str,
        line: usize,
        detail: String,
    },
}

impl From<toml::de::Error> for TrackError {
    fn from(e: toml::de::Error) -> Self {
        TrackError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TrackError>;
