//! Grid - Structure of Arrays storage for the pixel field
//!
//! Instead of: Vec<Cell { kind, stamp, color }>
//! We have:    types[], last_updated[], colors[]
//!
//! `colors` doubles as the host-visible RGBA buffer, so it is kept as its
//! own contiguous array and updated in place whenever a cell changes type.

use crate::domain::palette::BLANK;
use crate::domain::{Cell, PixelType};

mod indexing;
mod accessors;
mod moves;

pub struct Grid {
    width: u32,
    height: u32,
    size: usize,

    pub types: Vec<PixelType>,
    pub last_updated: Vec<u32>,     // tick of the last rule that moved matter here
    pub colors: Vec<u32>,           // packed RGBA, see domain::palette
}

impl Grid {
    pub fn new(width: u32, height: u32) -> Self {
        contract!(width > 0 && height > 0, "grid must be non-empty, got {}x{}", width, height);
        let size = (width as usize) * (height as usize);
        Self {
            width,
            height,
            size,
            types: vec![PixelType::Empty; size],
            last_updated: vec![0; size],
            colors: vec![BLANK; size],
        }
    }

    /// Reset every cell to Empty with a blank color and a zero stamp
    pub fn clear(&mut self) {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            self.types.par_iter_mut().for_each(|t| *t = PixelType::Empty);
            self.last_updated.par_iter_mut().for_each(|s| *s = 0);
            self.colors.par_iter_mut().for_each(|c| *c = BLANK);
        }
        #[cfg(not(feature = "parallel"))]
        {
            self.types.fill(PixelType::Empty);
            self.last_updated.fill(0);
            self.colors.fill(BLANK);
        }
    }

    /// Number of non-empty cells (full scan)
    pub fn count_non_empty(&self) -> usize {
        self.types.iter().filter(|t| !t.is_empty()).count()
    }

    /// Snapshot of one cell, `None` outside the grid
    pub fn cell_at(&self, x: i32, y: i32) -> Option<Cell> {
        if !self.in_bounds(x, y) {
            return None;
        }
        Some(self.get(x as u32, y as u32))
    }
}
