//! SandBehavior - powder that falls straight or rolls down a diagonal.
//!
//! Sand sinks through water by swapping with it. Any other kind outside the
//! collision mask (Empty, Gas) is simply overwritten.

use super::{Behavior, MoveContext};
use crate::domain::{PixelMask, PixelType};

const VELOCITY: i32 = 1;
const COLLIDES: PixelMask = PixelMask::SAND.union(PixelMask::STONE);

#[derive(Default)]
pub struct SandBehavior;

impl SandBehavior {
    pub fn new() -> Self {
        Self
    }
}

impl Behavior for SandBehavior {
    fn update(&self, ctx: &mut MoveContext, x: u32, y: u32) -> bool {
        let xi = x as i32;
        let yi = y as i32;
        let dx = ctx.random_sign(VELOCITY);

        let candidates = [
            (xi, yi + VELOCITY),      // down
            (xi + dx, yi + VELOCITY), // down, random side
            (xi - dx, yi + VELOCITY), // down, other side
        ];

        for (tx, ty) in candidates {
            if !ctx.grid.in_bounds(tx, ty) {
                continue;
            }
            let target = ctx.grid.get_type(tx, ty);
            if COLLIDES.intersects(target.mask()) {
                continue;
            }

            if target == PixelType::Water {
                ctx.swap_pixels(x, y, tx as u32, ty as u32);
            } else {
                ctx.move_pixel(x, y, tx as u32, ty as u32);
            }
            return true;
        }

        false
    }

    fn reach(&self) -> u32 {
        VELOCITY as u32
    }
}
