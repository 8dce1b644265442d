use super::*;

impl Grid {
    /// Move the pixel at `src` into `dst`, overwriting whatever `dst` held.
    ///
    /// `dst` is stamped with `tick`; `src` becomes Empty/blank.
    #[inline]
    pub fn move_cell(&mut self, src_x: u32, src_y: u32, dst_x: u32, dst_y: u32, tick: u32) {
        let src = self.index_checked(src_x, src_y);
        let dst = self.index_checked(dst_x, dst_y);

        self.last_updated[dst] = tick;
        self.types[dst] = self.types[src];
        self.types[src] = PixelType::Empty;

        self.colors[dst] = self.colors[src];
        self.colors[src] = BLANK;
    }

    /// Exchange two pixels (type and color). Both ends are stamped.
    #[inline]
    pub fn swap_cells(&mut self, x1: u32, y1: u32, x2: u32, y2: u32, tick: u32) {
        let a = self.index_checked(x1, y1);
        let b = self.index_checked(x2, y2);

        self.types.swap(a, b);
        self.colors.swap(a, b);
        self.last_updated[a] = tick;
        self.last_updated[b] = tick;
    }
}
