use super::*;

impl Grid {
    // === Dimensions ===
    #[inline]
    pub fn width(&self) -> u32 { self.width }

    #[inline]
    pub fn height(&self) -> u32 { self.height }

    #[inline]
    pub fn size(&self) -> usize { self.size }

    // === Index conversion ===
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        debug_contract!(
            x < self.width && y < self.height,
            "index: ({}, {}) outside {}x{} grid",
            x,
            y,
            self.width,
            self.height
        );
        (y as usize) * (self.width as usize) + x as usize
    }

    /// Index for a mutation path. Out-of-range is always fatal here.
    #[inline]
    pub fn index_checked(&self, x: u32, y: u32) -> usize {
        contract!(
            x < self.width && y < self.height,
            "write at ({}, {}) outside {}x{} grid",
            x,
            y,
            self.width,
            self.height
        );
        (y as usize) * (self.width as usize) + x as usize
    }

    #[inline]
    pub fn coords(&self, idx: usize) -> (u32, u32) {
        let x = (idx % self.width as usize) as u32;
        let y = (idx / self.width as usize) as u32;
        (x, y)
    }

    // === Bounds checking ===
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32
    }
}
