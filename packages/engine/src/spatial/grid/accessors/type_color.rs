use super::super::*;

impl Grid {
    // === Type access ===
    /// Out-of-bounds reads see Empty
    #[inline]
    pub fn get_type(&self, x: i32, y: i32) -> PixelType {
        if !self.in_bounds(x, y) { return PixelType::Empty; }
        self.types[self.index(x as u32, y as u32)]
    }

    #[inline]
    pub fn set_type(&mut self, x: u32, y: u32, kind: PixelType) {
        let idx = self.index_checked(x, y);
        self.types[idx] = kind;
    }

    // === Color access ===
    #[inline]
    pub fn get_color(&self, x: u32, y: u32) -> u32 {
        self.colors[self.index(x, y)]
    }

    #[inline]
    pub fn set_color(&mut self, x: u32, y: u32, c: u32) {
        let idx = self.index_checked(x, y);
        self.colors[idx] = c;
    }
}
