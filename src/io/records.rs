//! Readers for depth records and acoustic detection files.
//!
//! All three formats are plain text, one record per line, fields separated
//! by commas or whitespace; empty lines and `#` comments are skipped.
//!
//! - depth record: one observed depth per line, line N is time step N
//! - receiver positions: `x,y` world coordinates, one receiver per line
//! - signal matrix: one row per time step, one `1`/`0`/`-1` entry per
//!   receiver in position-file order

use std::path::Path;

use crate::core::WorldPoint;
use crate::error::{Result, TrackError};
use crate::grid::DepthSeries;

/// Load a depth record, one sample per line
pub fn load_depth_series(path: &Path) -> Result<DepthSeries> {
    let content = std::fs::read_to_string(path)?;
    parse_depth_series(&content)
}

/// Parse depth record text
pub fn parse_depth_series(content: &str) -> Result<DepthSeries> {
    let mut samples = Vec::new();
    for (line_idx, line) in data_lines(content) {
        let fields = split_fields(line);
        if fields.len() != 1 {
            return Err(parse_err("depth record", line_idx, "expected one value per line"));
        }
        samples.push(parse_field("depth record", fields[0], line_idx)?);
    }
    Ok(DepthSeries::new(samples))
}

/// Load receiver positions, one `x,y` pair per line
pub fn load_positions(path: &Path) -> Result<Vec<WorldPoint>> {
    let content = std::fs::read_to_string(path)?;
    parse_positions(&content)
}

/// Parse receiver position text
pub fn parse_positions(content: &str) -> Result<Vec<WorldPoint>> {
    let mut positions = Vec::new();
    for (line_idx, line) in data_lines(content) {
        let fields = split_fields(line);
        if fields.len() != 2 {
            return Err(parse_err(
                "position list",
                line_idx,
                "expected two coordinates per line",
            ));
        }
        let x = parse_field("position list", fields[0], line_idx)?;
        let y = parse_field("position list", fields[1], line_idx)?;
        positions.push(WorldPoint::new(x, y));
    }
    Ok(positions)
}

/// Load a detection signal matrix, one row per time step
pub fn load_signal_matrix(path: &Path) -> Result<Vec<Vec<i8>>> {
    let content = std::fs::read_to_string(path)?;
    parse_signal_matrix(&content)
}

/// Parse signal matrix text; entries must be 1, 0 or -1
pub fn parse_signal_matrix(content: &str) -> Result<Vec<Vec<i8>>> {
    let mut matrix = Vec::new();
    for (line_idx, line) in data_lines(content) {
        let mut row = Vec::new();
        for field in split_fields(line) {
            let value: i8 = parse_field("signal matrix", field, line_idx)?;
            if !(-1..=1).contains(&value) {
                return Err(parse_err(
                    "signal matrix",
                    line_idx,
                    &format!("entry must be 1, 0 or -1, got {value}"),
                ));
            }
            row.push(value);
        }
        matrix.push(row);
    }
    Ok(matrix)
}

fn data_lines(content: &str) -> impl Iterator<Item = (usize, &str)> {
    content
        .lines()
        .enumerate()
        .map(|(i, l)| (i, l.trim()))
        .filter(|(_, l)| !l.is_empty() && !l.starts_with('#'))
}

fn split_fields(line: &str) -> Vec<&str> {
    line.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|f| !f.is_empty())
        .collect()
}

fn parse_field<T: std::str::FromStr>(what: &'static str, token: &str, line_idx: usize) -> Result<T> {
    token
        .parse()
        .map_err(|_| parse_err(what, line_idx, &format!("invalid value '{token}'")))
}

fn parse_err(what: &'static str, line_idx: usize, detail: &str) -> TrackError {
    TrackError::Parse {
        what,
        line: line_idx + 1,
        detail: detail.to_string(),
    }
}
