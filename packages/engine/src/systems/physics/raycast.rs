use crate::domain::PixelMask;
use crate::grid::Grid;

use super::types::{Collision, MoveTestResult};

/// Ray-marched move test - walk from `src` toward `dst` one cell at a time
///
/// Integer digital-line stepping: each step advances whichever axis has the
/// larger remaining distance (x wins ties), so a diagonal alternates x/y and
/// a straight line walks one axis. The walk stops when
/// - `dst` is reached,
/// - a cell whose type intersects `collides` is met (recorded, not entered),
/// - with `stop_at_boundary`, the next step would leave the grid.
///
/// Without `stop_at_boundary`, steps outside the grid count as free space;
/// callers use that to let matter leave the field.
pub fn move_test(
    grid: &Grid,
    src: (i32, i32),
    dst: (i32, i32),
    collides: PixelMask,
    stop_at_boundary: bool,
) -> MoveTestResult {
    let (src_x, src_y) = src;
    let mut result = MoveTestResult::no_move(src_x, src_y);

    let step_x = if dst.0 < src_x { -1 } else { 1 };
    let step_y = if dst.1 < src_y { -1 } else { 1 };
    let mut x_left = (dst.0 - src_x).abs();
    let mut y_left = (dst.1 - src_y).abs();

    let mut x = src_x;
    let mut y = src_y;

    while (x, y) != dst {
        if x_left >= y_left {
            x_left -= 1;
            x += step_x;
        } else {
            y_left -= 1;
            y += step_y;
        }
        result.steps += 1;

        let in_bounds = grid.in_bounds(x, y);
        if !in_bounds && stop_at_boundary {
            result.hit_boundary = true;
            break;
        }
        if in_bounds {
            let kind = grid.get_type(x, y);
            if collides.intersects(kind.mask()) {
                result.collision = Some(Collision { x, y, kind });
                break;
            }
        }

        result.last_valid_x = x;
        result.last_valid_y = y;
    }

    result.can_move = result.last_valid() != src;
    result
}
