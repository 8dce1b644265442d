//! WaterBehavior - falls fast, then spreads sideways.
//!
//! Every candidate is resolved with a ray-marched probe, so water can cover
//! up to `VELOCITY` cells per tick but never tunnels through sand, stone or
//! other water, and never leaves the grid.

use super::{Behavior, MoveContext};
use crate::domain::PixelMask;

const VELOCITY: i32 = 5;
const COLLIDES: PixelMask = PixelMask::SAND.union(PixelMask::WATER).union(PixelMask::STONE);
const STOP_AT_BOUNDARY: bool = true;

#[derive(Default)]
pub struct WaterBehavior;

impl WaterBehavior {
    pub fn new() -> Self {
        Self
    }
}

impl Behavior for WaterBehavior {
    fn update(&self, ctx: &mut MoveContext, x: u32, y: u32) -> bool {
        let xi = x as i32;
        let yi = y as i32;
        let dx = ctx.random_sign(VELOCITY);

        let candidates = [
            (xi, yi + VELOCITY),
            (xi + dx, yi + VELOCITY),
            (xi - dx, yi + VELOCITY),
            (xi + dx, yi),
            (xi - dx, yi),
        ];

        match ctx.first_open_ray(x, y, &candidates, COLLIDES, STOP_AT_BOUNDARY) {
            Some((tx, ty)) => {
                ctx.move_pixel(x, y, tx as u32, ty as u32);
                true
            }
            None => false,
        }
    }

    fn reach(&self) -> u32 {
        VELOCITY as u32
    }
}
