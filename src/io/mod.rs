//! File readers for rasters, depth records and detection data.

mod raster;
mod records;

pub use raster::{load_ascii_grid, parse_ascii_grid};
pub use records::{
    load_depth_series, load_positions, load_signal_matrix, parse_depth_series, parse_positions,
    parse_signal_matrix,
};
