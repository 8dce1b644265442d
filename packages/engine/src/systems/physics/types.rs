use crate::domain::PixelType;

/// First blocking cell met by a probe
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Collision {
    pub x: i32,
    pub y: i32,
    pub kind: PixelType,
}

/// Outcome of `move_test`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveTestResult {
    /// Advanced at least one cell past the source
    pub can_move: bool,
    /// Furthest non-colliding position reached. May lie outside the grid
    /// when the probe ignores the boundary.
    pub last_valid_x: i32,
    pub last_valid_y: i32,
    pub collision: Option<Collision>,
    pub hit_boundary: bool,
    /// Cells stepped through (perf counter)
    pub steps: u32,
}

impl MoveTestResult {
    #[inline]
    pub fn no_move(x: i32, y: i32) -> Self {
        Self {
            can_move: false,
            last_valid_x: x,
            last_valid_y: y,
            collision: None,
            hit_boundary: false,
            steps: 0,
        }
    }

    #[inline]
    pub fn last_valid(&self) -> (i32, i32) {
        (self.last_valid_x, self.last_valid_y)
    }
}
