use crate::core::random::{random_range, xorshift32};
use crate::domain::palette::color_for;
use crate::domain::PixelType;

use super::SimulationCore;

pub(super) fn place_pixel(sim: &mut SimulationCore, x: i32, y: i32, kind: PixelType) -> bool {
    if !sim.grid.in_bounds(x, y) {
        return false;
    }
    let (ux, uy) = (x as u32, y as u32);
    let current = sim.grid.get_type(x, y);

    if current.is_empty() {
        if kind.is_empty() {
            return false;
        }
        let variation = xorshift32(&mut sim.rng_state);
        sim.grid.set_pixel(ux, uy, kind, color_for(kind, variation));
        sim.pixel_count += 1;
        sim.dirty.mark_dirty(ux, uy);
        return true;
    }

    // Occupied: only erase goes through
    if !kind.is_empty() {
        return false;
    }
    sim.grid.clear_cell(ux, uy);
    sim.pixel_count = sim.pixel_count.saturating_sub(1);
    sim.dirty.mark_dirty(ux, uy);
    true
}

pub(super) fn place_pixels_in_circle(sim: &mut SimulationCore, cx: i32, cy: i32, radius: i32, kind: PixelType) -> u32 {
    if radius < 0 {
        return 0;
    }
    let r2 = i64::from(radius) * i64::from(radius);
    let mut placed = 0;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if i64::from(dx) * i64::from(dx) + i64::from(dy) * i64::from(dy) > r2 {
                continue;
            }
            if place_at_offset(sim, cx, cy, dx, dy, kind) {
                placed += 1;
            }
        }
    }
    placed
}

pub(super) fn place_pixels_in_square(sim: &mut SimulationCore, cx: i32, cy: i32, count: u32, kind: PixelType) -> u32 {
    let half = (count / 2) as i32;
    let mut placed = 0;
    for _ in 0..count {
        let dx = random_range(&mut sim.rng_state, -half, half);
        let dy = random_range(&mut sim.rng_state, -half, half);
        if place_at_offset(sim, cx, cy, dx, dy, kind) {
            placed += 1;
        }
    }
    placed
}

/// Brush cells whose coordinates fall outside `i32` are off the grid anyway
fn place_at_offset(sim: &mut SimulationCore, cx: i32, cy: i32, dx: i32, dy: i32, kind: PixelType) -> bool {
    match (cx.checked_add(dx), cy.checked_add(dy)) {
        (Some(x), Some(y)) => place_pixel(sim, x, y, kind),
        _ => false,
    }
}

pub(super) fn clear(sim: &mut SimulationCore) {
    sim.grid.clear();
    sim.dirty.clear_all();
    sim.clock.reset();
    sim.perf_stats.reset();
    sim.pixel_count = 0;
    sim.tick = 0;
}
