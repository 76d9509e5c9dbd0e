//! Bathymetry raster and the 3-D feasibility model built on top of it.
//!
//! - [`BathymetryGrid`]: immutable seabed raster with world/grid conversion
//! - [`DepthSeries`]: the observed animal depth record, one sample per time step
//! - [`FeasibilityModel`]: (row, col, time) traversability predicate and
//!   one-step move enumeration

mod bathymetry;
mod depth_series;
mod feasibility;

pub use bathymetry::BathymetryGrid;
pub use depth_series::DepthSeries;
pub use feasibility::{FeasibilityModel, ToleranceSetting};
