//! Esri ASCII grid reader for bathymetry rasters.
//!
//! Format: six header lines (`ncols`, `nrows`, `xllcorner`, `yllcorner`,
//! `cellsize`, optional `NODATA_value`) followed by `nrows` rows of depth
//! values, northernmost row first - the same top-down order the grid
//! stores internally.

use std::path::Path;

use crate::error::{Result, TrackError};
use crate::grid::BathymetryGrid;

const DEFAULT_NODATA: f64 = -9999.0;

/// Load a bathymetry raster from an Esri ASCII grid file
pub fn load_ascii_grid(path: &Path) -> Result<BathymetryGrid> {
    let content = std::fs::read_to_string(path)?;
    parse_ascii_grid(&content)
}

/// Parse Esri ASCII grid text into a raster
pub fn parse_ascii_grid(content: &str) -> Result<BathymetryGrid> {
    let mut rows: Option<usize> = None;
    let mut cols: Option<usize> = None;
    let mut west = 0.0;
    let mut south = 0.0;
    let mut cell_size = 1.0;
    let mut nodata = DEFAULT_NODATA;
    let mut depths: Vec<f64> = Vec::new();

    for (line_idx, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut parts = line.split_whitespace();
        let first = parts.next().unwrap_or_default();

        // Header keys are alphabetic; anything else starts the data block
        if first.chars().next().is_some_and(|c| c.is_ascii_alphabetic()) {
            let value = parts.next().ok_or_else(|| parse_err(line_idx, "missing header value"))?;
            match first.to_ascii_lowercase().as_str() {
                "ncols" => cols = Some(parse_field(value, line_idx)?),
                "nrows" => rows = Some(parse_field(value, line_idx)?),
                "xllcorner" => west = parse_field(value, line_idx)?,
                "yllcorner" => south = parse_field(value, line_idx)?,
                "cellsize" => cell_size = parse_field(value, line_idx)?,
                "nodata_value" => nodata = parse_field(value, line_idx)?,
                key => {
                    return Err(parse_err(line_idx, &format!("unknown header key '{key}'")));
                }
            }
        } else {
            for token in line.split_whitespace() {
                depths.push(parse_field(token, line_idx)?);
            }
        }
    }

    let rows = rows.ok_or_else(|| parse_err(0, "missing nrows header"))?;
    let cols = cols.ok_or_else(|| parse_err(0, "missing ncols header"))?;
    if cell_size <= 0.0 {
        return Err(parse_err(0, "cellsize must be positive"));
    }
    if depths.len() != rows * cols {
        return Err(parse_err(
            0,
            &format!(
                "expected {} depth values ({} x {}), found {}",
                rows * cols,
                rows,
                cols,
                depths.len()
            ),
        ));
    }

    Ok(BathymetryGrid::new(
        depths, rows, cols, west, south, cell_size, nodata,
    ))
}

fn parse_field<T: std::str::FromStr>(token: &str, line_idx: usize) -> Result<T> {
    token
        .parse()
        .map_err(|_| parse_err(line_idx, &format!("invalid number '{token}'")))
}

fn parse_err(line_idx: usize, detail: &str) -> TrackError {
    TrackError::Parse {
        what: "ascii grid",
        line: line_idx + 1,
        detail: detail.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GridCoord;
    use std::io::Write;

    const SAMPLE: &str = "\
ncols 3
nrows 2
xllcorner 10.0
yllcorner 20.0
cellsize 2.0
NODATA_value -9999
5.0 6.0 -9999
7.5 8.0 9.0
";

    #[test]
    fn test_parse_sample() {
        let grid = parse_ascii_grid(SAMPLE).unwrap();
        assert_eq!(grid.dimensions(), (2, 3));
        assert_eq!(grid.cell_size(), 2.0);
        assert_eq!(grid.depth_at(GridCoord::new(0, 0)), Some(5.0));
        assert_eq!(grid.depth_at(GridCoord::new(0, 2)), None); // nodata
        assert_eq!(grid.depth_at(GridCoord::new(1, 0)), Some(7.5));

        // Southwest cell center: llcorner + half a cell
        let sw = grid.world_coordinate_of(GridCoord::new(1, 0));
        assert!((sw.x - 11.0).abs() < 1e-12);
        assert!((sw.y - 21.0).abs() < 1e-12);
    }

    #[test]
    fn test_value_count_mismatch() {
        let bad = "ncols 2\nnrows 2\nxllcorner 0\nyllcorner 0\ncellsize 1\n1 2 3\n";
        assert!(matches!(
            parse_ascii_grid(bad).unwrap_err(),
            TrackError::Parse { what: "ascii grid", .. }
        ));
    }

    #[test]
    fn test_bad_number_reports_line() {
        let bad = "ncols 1\nnrows 1\nxllcorner 0\nyllcorner 0\ncellsize 1\n1x2\n";
        match parse_ascii_grid(bad).unwrap_err() {
            TrackError::Parse { line, .. } => assert_eq!(line, 6),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let grid = load_ascii_grid(file.path()).unwrap();
        assert_eq!(grid.dimensions(), (2, 3));
    }
}
