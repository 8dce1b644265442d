//! Region System - fixed-size square tiles over the grid.
//!
//! Regions are the unit of dirty tracking and of stage scheduling. The grid
//! does not have to be a multiple of the region size: the last column/row
//! of regions is then partial.

pub mod dirty;
pub mod stages;

pub use dirty::{DirtyRect, DirtyRectTracker, ScanWindow};
pub use stages::{StagePartition, STAGE_COUNT};

/// Default region edge in cells
pub const DEFAULT_REGION_SIZE: u32 = 64;

/// Maps cell coordinates to region indices. Immutable after construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegionMap {
    width: u32,
    height: u32,
    region_size: u32,
    regions_x: u32,
    regions_y: u32,
    region_count: usize,
}

impl RegionMap {
    /// Create region map for given grid dimensions
    pub fn new(width: u32, height: u32, region_size: u32) -> Self {
        contract!(width > 0 && height > 0, "region map over empty grid {}x{}", width, height);
        contract!(region_size > 0, "region size must be positive");

        let regions_x = width.div_ceil(region_size);
        let regions_y = height.div_ceil(region_size);
        let region_count = (regions_x as usize) * (regions_y as usize);

        Self {
            width,
            height,
            region_size,
            regions_x,
            regions_y,
            region_count,
        }
    }

    /// Region columns and rows
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.regions_x, self.regions_y)
    }

    #[inline]
    pub fn region_count(&self) -> usize {
        self.region_count
    }

    #[inline]
    pub fn region_size(&self) -> u32 {
        self.region_size
    }

    #[inline]
    pub fn grid_dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Flattened index `row * columns + col`
    #[inline]
    pub fn index_from_coords(&self, col: u32, row: u32) -> usize {
        (row as usize) * (self.regions_x as usize) + col as usize
    }

    /// (col, row) of a region
    #[inline]
    pub fn coords_from_index(&self, idx: usize) -> (u32, u32) {
        let col = (idx % self.regions_x as usize) as u32;
        let row = (idx / self.regions_x as usize) as u32;
        (col, row)
    }

    /// Owning region of a cell
    #[inline]
    pub fn region_index(&self, x: u32, y: u32) -> usize {
        contract!(
            x < self.width && y < self.height,
            "region lookup for ({}, {}) outside {}x{} grid",
            x,
            y,
            self.width,
            self.height
        );
        self.index_from_coords(x / self.region_size, y / self.region_size)
    }

    /// Cell-space extent `(x0, y0, x1, y1)` of a region, end-exclusive and
    /// clipped to the grid for partial edge regions.
    pub fn region_bounds(&self, idx: usize) -> (u32, u32, u32, u32) {
        let (col, row) = self.coords_from_index(idx);
        let x0 = col * self.region_size;
        let y0 = row * self.region_size;
        let x1 = x0.saturating_add(self.region_size).min(self.width);
        let y1 = y0.saturating_add(self.region_size).min(self.height);
        (x0, y0, x1, y1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_multiple_has_full_regions() {
        let map = RegionMap::new(128, 64, 32);
        assert_eq!(map.dimensions(), (4, 2));
        assert_eq!(map.region_count(), 8);
        assert_eq!(map.region_bounds(7), (96, 32, 128, 64));
    }

    #[test]
    fn partial_edge_regions_round_up() {
        let map = RegionMap::new(100, 10, 32);
        assert_eq!(map.dimensions(), (4, 1));
        assert_eq!(map.region_bounds(3), (96, 0, 100, 10));
    }

    #[test]
    fn oversized_region_covers_whole_grid() {
        let map = RegionMap::new(10, 10, u32::MAX);
        assert_eq!(map.dimensions(), (1, 1));
        assert_eq!(map.region_index(9, 9), 0);
        assert_eq!(map.region_bounds(0), (0, 0, 10, 10));
    }

    #[test]
    fn region_index_is_row_major() {
        let map = RegionMap::new(100, 100, 32);
        assert_eq!(map.region_index(0, 0), 0);
        assert_eq!(map.region_index(31, 31), 0);
        assert_eq!(map.region_index(32, 0), 1);
        assert_eq!(map.region_index(0, 32), 4);
        assert_eq!(map.region_index(99, 99), 15);
        assert_eq!(map.coords_from_index(6), (2, 1));
    }

    #[test]
    #[should_panic(expected = "contract violation")]
    fn zero_region_size_is_fatal() {
        let _ = RegionMap::new(10, 10, 0);
    }

    #[test]
    #[should_panic(expected = "contract violation")]
    fn lookup_outside_grid_is_fatal() {
        let map = RegionMap::new(10, 10, 4);
        let _ = map.region_index(10, 0);
    }
}
