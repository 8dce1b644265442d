//! GasBehavior - inverted water.
//!
//! Rises one cell at a time and spreads sideways. Gas blocks gas, and a
//! probe that leaves the grid removes the pixel: gas escaping the field is
//! gone.

use super::{Behavior, MoveContext};
use crate::domain::PixelMask;

const VELOCITY: i32 = 1;
const COLLIDES: PixelMask = PixelMask::all();
const STOP_AT_BOUNDARY: bool = false;

#[derive(Default)]
pub struct GasBehavior;

impl GasBehavior {
    pub fn new() -> Self {
        Self
    }
}

impl Behavior for GasBehavior {
    fn update(&self, ctx: &mut MoveContext, x: u32, y: u32) -> bool {
        let xi = x as i32;
        let yi = y as i32;
        let dx = ctx.random_sign(VELOCITY);

        let candidates = [
            (xi, yi - VELOCITY),
            (xi + dx, yi - VELOCITY),
            (xi - dx, yi - VELOCITY),
            (xi + dx, yi),
            (xi - dx, yi),
        ];

        let Some((tx, ty)) = ctx.first_open_ray(x, y, &candidates, COLLIDES, STOP_AT_BOUNDARY) else {
            return false;
        };

        if ctx.grid.in_bounds(tx, ty) {
            ctx.move_pixel(x, y, tx as u32, ty as u32);
        } else {
            ctx.clear_pixel(x, y);
        }
        true
    }

    fn reach(&self) -> u32 {
        VELOCITY as u32
    }
}
