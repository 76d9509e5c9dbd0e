//! Grid and world coordinate types.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// Grid coordinates (integer cell indices into the bathymetry raster)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridCoord {
    /// Row index (northernmost row is 0)
    pub row: i32,
    /// Column index
    pub col: i32,
}

impl GridCoord {
    /// Create a new grid coordinate
    #[inline]
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Chebyshev distance (max of row and column distance) - the natural
    /// metric for 8-connected grids
    #[inline]
    pub fn chebyshev_distance(&self, other: &GridCoord) -> i32 {
        (self.row - other.row).abs().max((self.col - other.col).abs())
    }

    /// Manhattan distance to another coordinate
    #[inline]
    pub fn manhattan_distance(&self, other: &GridCoord) -> i32 {
        (self.row - other.row).abs() + (self.col - other.col).abs()
    }

    /// The Moore neighborhood (8 surrounding cells)
    #[inline]
    pub fn neighbors_8(&self) -> [GridCoord; 8] {
        [
            GridCoord::new(self.row - 1, self.col),     // N
            GridCoord::new(self.row - 1, self.col + 1), // NE
            GridCoord::new(self.row, self.col + 1),     // E
            GridCoord::new(self.row + 1, self.col + 1), // SE
            GridCoord::new(self.row + 1, self.col),     // S
            GridCoord::new(self.row + 1, self.col - 1), // SW
            GridCoord::new(self.row, self.col - 1),     // W
            GridCoord::new(self.row - 1, self.col - 1), // NW
        ]
    }
}

impl Add for GridCoord {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        GridCoord::new(self.row + other.row, self.col + other.col)
    }
}

impl Sub for GridCoord {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        GridCoord::new(self.row - other.row, self.col - other.col)
    }
}

/// World coordinates (projected map units, f64)
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct WorldPoint {
    /// Easting in map units
    pub x: f64,
    /// Northing in map units
    pub y: f64,
}

impl WorldPoint {
    /// Create a new world point
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Origin point
    pub const ZERO: WorldPoint = WorldPoint { x: 0.0, y: 0.0 };

    /// Euclidean distance to another point
    #[inline]
    pub fn distance(&self, other: &WorldPoint) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Squared distance (faster, avoids sqrt)
    #[inline]
    pub fn distance_squared(&self, other: &WorldPoint) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chebyshev_distance() {
        let a = GridCoord::new(2, 3);
        assert_eq!(a.chebyshev_distance(&GridCoord::new(2, 3)), 0);
        assert_eq!(a.chebyshev_distance(&GridCoord::new(3, 4)), 1);
        assert_eq!(a.chebyshev_distance(&GridCoord::new(5, 4)), 3);
        assert_eq!(a.chebyshev_distance(&GridCoord::new(0, 9)), 6);
    }

    #[test]
    fn test_neighbors_8_are_adjacent_and_distinct() {
        let c = GridCoord::new(5, 5);
        let n = c.neighbors_8();
        for neighbor in &n {
            assert_eq!(c.chebyshev_distance(neighbor), 1);
        }
        for i in 0..8 {
            for j in (i + 1)..8 {
                assert_ne!(n[i], n[j]);
            }
        }
    }

    #[test]
    fn test_world_point_distance() {
        let a = WorldPoint::new(0.0, 0.0);
        let b = WorldPoint::new(3.0, 4.0);
        assert!((a.distance(&b) - 5.0).abs() < 1e-12);
    }
}
