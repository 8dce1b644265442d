//! Per-region dirty rectangles, double buffered.
//!
//! The *read* buffer holds what the previous tick touched and bounds the
//! current tick's scan. Every mutation during the tick widens the matching
//! rect in the *write* buffer. `swap` flips the roles and wipes the new
//! write side, so a rect lives for exactly one consuming tick.

use serde::Serialize;

use super::RegionMap;

/// Cells of margin added around every marked position. A moved pixel
/// changes the neighborhood its neighbors will see, not only its own cell.
pub const DIRTY_MARGIN: i32 = 1;

/// Extra cells around a dirty rect visited by the scan
pub const WINDOW_MARGIN: i32 = 1;

const BUFFER_COUNT: usize = 2;

/// Axis-aligned bounds in grid coordinates (inclusive on both ends).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DirtyRect {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

impl DirtyRect {
    /// "Nothing touched" sentinel
    pub const INVALID: DirtyRect = DirtyRect { min_x: -1, max_x: -1, min_y: -1, max_y: -1 };

    #[inline]
    pub fn is_invalid(&self) -> bool {
        *self == Self::INVALID
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        !self.is_invalid()
    }

    /// Inverted box so the first `include` snaps to the position
    #[inline]
    fn inverted(width: i32, height: i32) -> Self {
        DirtyRect { min_x: width, max_x: 0, min_y: height, max_y: 0 }
    }

    #[inline]
    fn include(&mut self, x: i32, y: i32) {
        self.min_x = self.min_x.min(x - DIRTY_MARGIN);
        self.max_x = self.max_x.max(x + DIRTY_MARGIN);
        self.min_y = self.min_y.min(y - DIRTY_MARGIN);
        self.max_y = self.max_y.max(y + DIRTY_MARGIN);
    }

    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.is_valid() && x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }

    /// Cells the tick driver visits for this rect: the rect grown by
    /// `WINDOW_MARGIN`, clamped to the grid. `None` for the sentinel or
    /// when clamping leaves nothing.
    pub fn scan_window(&self, width: u32, height: u32) -> Option<ScanWindow> {
        if self.is_invalid() {
            return None;
        }
        let w = width as i32;
        let h = height as i32;
        let window = ScanWindow {
            start_x: (self.min_x - WINDOW_MARGIN).clamp(0, w) as u32,
            end_x: (self.max_x + WINDOW_MARGIN).clamp(0, w) as u32,
            start_y: (self.min_y - WINDOW_MARGIN).clamp(0, h) as u32,
            end_y: (self.max_y + WINDOW_MARGIN).clamp(0, h) as u32,
        };
        if window.start_x >= window.end_x || window.start_y >= window.end_y {
            return None;
        }
        Some(window)
    }
}

/// End-exclusive cell range visited by one region's scan
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanWindow {
    pub start_x: u32,
    pub end_x: u32,
    pub start_y: u32,
    pub end_y: u32,
}

impl ScanWindow {
    #[inline]
    pub fn cell_count(&self) -> usize {
        ((self.end_x - self.start_x) as usize) * ((self.end_y - self.start_y) as usize)
    }
}

pub struct DirtyRectTracker {
    map: RegionMap,
    buffers: [Vec<DirtyRect>; BUFFER_COUNT],
    read: usize,
}

impl DirtyRectTracker {
    pub fn new(map: RegionMap) -> Self {
        let count = map.region_count();
        Self {
            map,
            buffers: [vec![DirtyRect::INVALID; count], vec![DirtyRect::INVALID; count]],
            read: 0,
        }
    }

    #[inline]
    fn write(&self) -> usize {
        1 - self.read
    }

    /// Record a mutation at `(x, y)` into the write buffer
    pub fn mark_dirty(&mut self, x: u32, y: u32) {
        let idx = self.map.region_index(x, y);
        let (width, height) = self.map.grid_dimensions();
        let write = self.write();

        let rect = &mut self.buffers[write][idx];
        if rect.is_invalid() {
            *rect = DirtyRect::inverted(width as i32, height as i32);
        }
        rect.include(x as i32, y as i32);
    }

    /// Flip read/write roles and wipe the new write buffer
    pub fn swap(&mut self) {
        self.read = self.write();
        let write = self.write();
        Self::invalidate(&mut self.buffers[write]);
    }

    /// Wipe both buffers
    pub fn clear_all(&mut self) {
        for buffer in self.buffers.iter_mut() {
            Self::invalidate(buffer);
        }
    }

    fn invalidate(buffer: &mut [DirtyRect]) {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            buffer.par_iter_mut().for_each(|r| *r = DirtyRect::INVALID);
        }
        #[cfg(not(feature = "parallel"))]
        {
            buffer.fill(DirtyRect::INVALID);
        }
    }

    // === Read side ===

    #[inline]
    pub fn is_dirty(&self, region: usize) -> bool {
        self.buffers[self.read][region].is_valid()
    }

    #[inline]
    pub fn bounds_of(&self, region: usize) -> DirtyRect {
        self.buffers[self.read][region]
    }

    pub fn read_rects(&self) -> &[DirtyRect] {
        &self.buffers[self.read]
    }

    pub fn dirty_region_count(&self) -> usize {
        self.read_rects().iter().filter(|r| r.is_valid()).count()
    }

    // === Write side (pending for next tick) ===

    #[inline]
    pub fn pending_bounds_of(&self, region: usize) -> DirtyRect {
        self.buffers[self.write()][region]
    }

    #[inline]
    pub fn map(&self) -> &RegionMap {
        &self.map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker(w: u32, h: u32, rs: u32) -> DirtyRectTracker {
        DirtyRectTracker::new(RegionMap::new(w, h, rs))
    }

    #[test]
    fn starts_clean() {
        let t = tracker(64, 64, 16);
        assert!((0..16).all(|i| !t.is_dirty(i)));
        assert_eq!(t.dirty_region_count(), 0);
    }

    #[test]
    fn mark_goes_to_write_side_until_swap() {
        let mut t = tracker(64, 64, 16);
        t.mark_dirty(5, 5);
        assert!(!t.is_dirty(0));
        assert_eq!(
            t.pending_bounds_of(0),
            DirtyRect { min_x: 4, max_x: 6, min_y: 4, max_y: 6 }
        );

        t.swap();
        assert!(t.is_dirty(0));
        assert_eq!(t.bounds_of(0), DirtyRect { min_x: 4, max_x: 6, min_y: 4, max_y: 6 });
        assert!(t.pending_bounds_of(0).is_invalid());
    }

    #[test]
    fn rect_grows_to_cover_all_marks() {
        let mut t = tracker(64, 64, 32);
        t.mark_dirty(10, 3);
        t.mark_dirty(2, 20);
        t.swap();
        let r = t.bounds_of(0);
        assert_eq!(r, DirtyRect { min_x: 1, max_x: 11, min_y: 2, max_y: 21 });
        assert!(r.contains(10, 3) && r.contains(2, 20));
    }

    #[test]
    fn edge_cells_may_extend_past_grid_until_consumed() {
        let mut t = tracker(8, 8, 8);
        t.mark_dirty(0, 7);
        t.swap();
        let r = t.bounds_of(0);
        assert_eq!(r.min_x, -1);
        assert_eq!(r.max_y, 8);

        let w = r.scan_window(8, 8).expect("valid rect has a window");
        assert_eq!(w, ScanWindow { start_x: 0, end_x: 2, start_y: 5, end_y: 8 });
    }

    #[test]
    fn marks_land_in_owning_region_only() {
        let mut t = tracker(64, 32, 32);
        t.mark_dirty(31, 0);
        t.swap();
        assert!(t.is_dirty(0));
        assert!(!t.is_dirty(1));
        // margin reaches into region 1's cells but is recorded on region 0
        assert_eq!(t.bounds_of(0).max_x, 32);
    }

    #[test]
    fn a_rect_survives_exactly_one_swap() {
        let mut t = tracker(16, 16, 8);
        t.mark_dirty(1, 1);
        t.swap();
        assert!(t.is_dirty(0));
        t.swap();
        assert!(!t.is_dirty(0));
    }

    #[test]
    fn clear_all_wipes_both_sides() {
        let mut t = tracker(16, 16, 8);
        t.mark_dirty(1, 1);
        t.swap();
        t.mark_dirty(9, 9);
        t.clear_all();
        assert_eq!(t.dirty_region_count(), 0);
        assert!(t.pending_bounds_of(3).is_invalid());
    }

    #[test]
    fn invalid_rect_has_no_window() {
        assert!(DirtyRect::INVALID.scan_window(10, 10).is_none());
        assert!(!DirtyRect::INVALID.contains(-1, -1));
    }
}
