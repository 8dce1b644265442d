use super::super::*;

impl Grid {
    // === Whole-cell access ===
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Cell {
        let idx = self.index_checked(x, y);
        Cell { kind: self.types[idx], last_updated: self.last_updated[idx] }
    }

    /// Overwrite type and stamp. Color is left alone; see `set_pixel`.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, cell: Cell) {
        let idx = self.index_checked(x, y);
        self.types[idx] = cell.kind;
        self.last_updated[idx] = cell.last_updated;
    }

    /// Write type and color, keeping the stamp. Freshly placed pixels are
    /// not stamped so they may move on the next scan that reaches them.
    pub fn set_pixel(&mut self, x: u32, y: u32, kind: PixelType, color: u32) {
        let idx = self.index_checked(x, y);
        self.types[idx] = kind;
        self.colors[idx] = color;
    }

    // === Clear single cell ===
    pub fn clear_cell(&mut self, x: u32, y: u32) {
        let idx = self.index_checked(x, y);
        self.types[idx] = PixelType::Empty;
        self.colors[idx] = BLANK;
    }
}
