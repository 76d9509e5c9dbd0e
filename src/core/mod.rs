//! Core types for the matsya-track reconstruction library.
//!
//! This module provides the fundamental types used throughout the library:
//! - [`GridCoord`] and [`WorldPoint`]: Coordinate types
//! - [`SearchState`]: A (row, col, time) node in the time-extended search graph

mod point;
mod state;

pub use point::{GridCoord, WorldPoint};
pub use state::SearchState;
