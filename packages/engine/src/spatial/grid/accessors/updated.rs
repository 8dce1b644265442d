use super::super::*;

impl Grid {
    // === Last-updated stamp ===
    #[inline]
    pub fn last_updated(&self, x: u32, y: u32) -> u32 {
        self.last_updated[self.index(x, y)]
    }

    #[inline]
    pub fn is_updated_in(&self, x: u32, y: u32, tick: u32) -> bool {
        self.last_updated(x, y) == tick
    }
}
