//! Bathymetry raster storage with coordinate conversion.

use crate::core::{GridCoord, WorldPoint};

/// Immutable bathymetric raster.
///
/// Seabed depths are stored row-major with row 0 at the northern edge,
/// matching the on-disk order of Esri ASCII grids. Depths are positive
/// metres below the surface; cells holding the no-data sentinel or a
/// non-positive value are land or unsurveyed and never traversable.
///
/// World/grid conversion uses cell centers: cell (row, col) covers a
/// `cell_size` square whose center is returned by [`world_coordinate_of`].
///
/// [`world_coordinate_of`]: BathymetryGrid::world_coordinate_of
#[derive(Clone, Debug)]
pub struct BathymetryGrid {
    /// Seabed depth per cell, row-major, row 0 northernmost
    depths: Vec<f64>,
    rows: usize,
    cols: usize,
    /// World X of the western raster edge
    west: f64,
    /// World Y of the southern raster edge
    south: f64,
    /// Cell edge length in map units
    cell_size: f64,
    /// Sentinel marking land / missing soundings
    nodata: f64,
}

impl BathymetryGrid {
    /// Create a grid from row-major depth values.
    ///
    /// `depths.len()` must equal `rows * cols`; panics otherwise (caller
    /// bug, not a runtime condition).
    pub fn new(
        depths: Vec<f64>,
        rows: usize,
        cols: usize,
        west: f64,
        south: f64,
        cell_size: f64,
        nodata: f64,
    ) -> Self {
        assert_eq!(
            depths.len(),
            rows * cols,
            "depth array length must match raster dimensions"
        );
        Self {
            depths,
            rows,
            cols,
            west,
            south,
            cell_size,
            nodata,
        }
    }

    /// Build a unit-cell grid anchored at the origin, handy for tests and
    /// synthetic scenarios.
    pub fn from_rows(rows_data: Vec<Vec<f64>>) -> Self {
        let rows = rows_data.len();
        let cols = rows_data.first().map_or(0, |r| r.len());
        let depths: Vec<f64> = rows_data.into_iter().flatten().collect();
        Self::new(depths, rows, cols, 0.0, 0.0, 1.0, -9999.0)
    }

    /// Raster dimensions as (rows, cols)
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of rows
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell edge length in map units
    #[inline]
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// No-data sentinel value
    #[inline]
    pub fn nodata(&self) -> f64 {
        self.nodata
    }

    /// Whether a coordinate lies on the raster
    #[inline]
    pub fn contains(&self, coord: GridCoord) -> bool {
        coord.row >= 0
            && coord.col >= 0
            && (coord.row as usize) < self.rows
            && (coord.col as usize) < self.cols
    }

    /// Seabed depth at a cell.
    ///
    /// Returns `None` when the coordinate is off the raster or the cell
    /// holds the no-data sentinel. A returned value may still be
    /// non-positive; the feasibility model treats those as land.
    #[inline]
    pub fn depth_at(&self, coord: GridCoord) -> Option<f64> {
        if !self.contains(coord) {
            return None;
        }
        let idx = coord.row as usize * self.cols + coord.col as usize;
        let depth = self.depths[idx];
        if depth == self.nodata {
            None
        } else {
            Some(depth)
        }
    }

    /// World coordinates of a cell center.
    ///
    /// Row 0 sits at the northern edge, so rows count downward in world Y.
    #[inline]
    pub fn world_coordinate_of(&self, coord: GridCoord) -> WorldPoint {
        let x = self.west + (coord.col as f64 + 0.5) * self.cell_size;
        let y = self.south + (self.rows as f64 - coord.row as f64 - 0.5) * self.cell_size;
        WorldPoint::new(x, y)
    }

    /// Grid cell containing a world point, or `None` outside the raster.
    pub fn grid_index_of(&self, point: WorldPoint) -> Option<GridCoord> {
        let col = ((point.x - self.west) / self.cell_size).floor();
        let row = ((self.south + self.rows as f64 * self.cell_size - point.y) / self.cell_size)
            .floor();
        let coord = GridCoord::new(row as i32, col as i32);
        if row >= 0.0 && col >= 0.0 && self.contains(coord) {
            Some(coord)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_3x4() -> BathymetryGrid {
        // 3 rows x 4 cols, depth = 10 + col, one nodata hole
        let mut rows = Vec::new();
        for _ in 0..3 {
            rows.push(vec![10.0, 11.0, 12.0, 13.0]);
        }
        rows[1][2] = -9999.0;
        BathymetryGrid::from_rows(rows)
    }

    #[test]
    fn test_depth_at_bounds_and_nodata() {
        let g = grid_3x4();
        assert_eq!(g.dimensions(), (3, 4));
        assert_eq!(g.depth_at(GridCoord::new(0, 0)), Some(10.0));
        assert_eq!(g.depth_at(GridCoord::new(2, 3)), Some(13.0));
        assert_eq!(g.depth_at(GridCoord::new(1, 2)), None); // nodata hole
        assert_eq!(g.depth_at(GridCoord::new(-1, 0)), None);
        assert_eq!(g.depth_at(GridCoord::new(3, 0)), None);
        assert_eq!(g.depth_at(GridCoord::new(0, 4)), None);
    }

    #[test]
    fn test_world_grid_round_trip() {
        let g = grid_3x4();
        for row in 0..3 {
            for col in 0..4 {
                let coord = GridCoord::new(row, col);
                let world = g.world_coordinate_of(coord);
                assert_eq!(g.grid_index_of(world), Some(coord));
            }
        }
    }

    #[test]
    fn test_world_coordinates_of_corners() {
        let g = grid_3x4();
        // Top-left cell center: half a cell in from the west/north edges
        let tl = g.world_coordinate_of(GridCoord::new(0, 0));
        assert!((tl.x - 0.5).abs() < 1e-12);
        assert!((tl.y - 2.5).abs() < 1e-12);
        // Bottom-right cell center
        let br = g.world_coordinate_of(GridCoord::new(2, 3));
        assert!((br.x - 3.5).abs() < 1e-12);
        assert!((br.y - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_grid_index_of_outside() {
        let g = grid_3x4();
        assert_eq!(g.grid_index_of(WorldPoint::new(-0.1, 1.0)), None);
        assert_eq!(g.grid_index_of(WorldPoint::new(1.0, 3.1)), None);
    }
}
