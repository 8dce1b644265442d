//! Movement rules - one behavior per dynamic pixel type
//!
//! Each rule looks at a handful of candidate targets in a fixed order and
//! applies the first one that works. Every successful rule goes through
//! `MoveContext`, which keeps grid, colors, pixel count and dirty rects
//! in step.

mod gas;
mod liquid;
mod powder;

pub use gas::GasBehavior;
pub use liquid::WaterBehavior;
pub use powder::SandBehavior;

use crate::core::random::random_sign;
use crate::domain::{PixelMask, PixelType};
use crate::grid::Grid;
use crate::physics::move_test;
use crate::regions::DirtyRectTracker;

/// Side effects of rules applied during one tick
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MoveStats {
    pub moves: u32,
    pub swaps: u32,
    pub cleared: u32,
    pub raycast_steps: u32,
}

/// Everything a rule may touch
pub struct MoveContext<'a> {
    pub grid: &'a mut Grid,
    pub dirty: &'a mut DirtyRectTracker,
    pub pixel_count: &'a mut u32,
    pub stats: &'a mut MoveStats,
    pub rng: &'a mut u32,
    pub tick: u32,
}

impl<'a> MoveContext<'a> {
    /// Move `src` into `dst`. Whatever `dst` held is overwritten.
    pub fn move_pixel(&mut self, src_x: u32, src_y: u32, dst_x: u32, dst_y: u32) {
        if !self.grid.get(dst_x, dst_y).kind.is_empty() {
            *self.pixel_count = self.pixel_count.saturating_sub(1);
        }
        self.grid.move_cell(src_x, src_y, dst_x, dst_y, self.tick);
        self.dirty.mark_dirty(src_x, src_y);
        self.dirty.mark_dirty(dst_x, dst_y);
        self.stats.moves += 1;
    }

    pub fn swap_pixels(&mut self, x1: u32, y1: u32, x2: u32, y2: u32) {
        self.grid.swap_cells(x1, y1, x2, y2, self.tick);
        self.dirty.mark_dirty(x1, y1);
        self.dirty.mark_dirty(x2, y2);
        self.stats.swaps += 1;
    }

    /// Remove whatever is at `(x, y)`
    pub fn clear_pixel(&mut self, x: u32, y: u32) {
        if self.grid.get(x, y).kind.is_empty() {
            return;
        }
        self.grid.clear_cell(x, y);
        *self.pixel_count = self.pixel_count.saturating_sub(1);
        self.dirty.mark_dirty(x, y);
        self.stats.cleared += 1;
    }

    #[inline]
    pub fn random_sign(&mut self, magnitude: i32) -> i32 {
        random_sign(self.rng, magnitude)
    }

    /// Probe candidates in order, return the landing spot of the first one
    /// that advances. The spot may be off-grid when `stop_at_boundary` is
    /// false.
    pub fn first_open_ray(
        &mut self,
        x: u32,
        y: u32,
        candidates: &[(i32, i32)],
        collides: PixelMask,
        stop_at_boundary: bool,
    ) -> Option<(i32, i32)> {
        let src = (x as i32, y as i32);
        for &target in candidates {
            let result = move_test(self.grid, src, target, collides, stop_at_boundary);
            self.stats.raycast_steps += result.steps;
            if result.can_move {
                return Some(result.last_valid());
            }
        }
        None
    }
}

/// Behavior trait - each dynamic pixel type implements this
pub trait Behavior {
    /// Apply the rule to the pixel at `(x, y)`; true if anything moved
    fn update(&self, ctx: &mut MoveContext, x: u32, y: u32) -> bool;

    /// Furthest distance (in cells) a single update can reach
    fn reach(&self) -> u32;
}

/// Behavior registry - dispatch by pixel type
pub struct BehaviorRegistry {
    sand: SandBehavior,
    water: WaterBehavior,
    gas: GasBehavior,
}

impl BehaviorRegistry {
    pub fn new() -> Self {
        Self {
            sand: SandBehavior::new(),
            water: WaterBehavior::new(),
            gas: GasBehavior::new(),
        }
    }

    pub fn get(&self, kind: PixelType) -> Option<&dyn Behavior> {
        match kind {
            PixelType::Sand => Some(&self.sand),
            PixelType::Water => Some(&self.water),
            PixelType::Gas => Some(&self.gas),
            PixelType::Empty | PixelType::Stone => None,
        }
    }

    /// Dispatch update to the type's rule. Types without a rule never move.
    #[inline]
    pub fn update(&self, kind: PixelType, ctx: &mut MoveContext, x: u32, y: u32) -> bool {
        match self.get(kind) {
            Some(behavior) => behavior.update(ctx, x, y),
            None => false,
        }
    }

    /// Largest reach over all rules
    pub fn max_reach(&self) -> u32 {
        PixelType::ALL
            .iter()
            .filter_map(|k| self.get(*k))
            .map(|b| b.reach())
            .max()
            .unwrap_or(0)
    }
}

impl Default for BehaviorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::core::random::DEFAULT_SEED;
    use crate::domain::palette::color_for;
    use crate::regions::RegionMap;

    /// Small standalone world for exercising a single rule
    pub struct Bench {
        pub grid: Grid,
        pub dirty: DirtyRectTracker,
        pub pixel_count: u32,
        pub stats: MoveStats,
        pub rng: u32,
        pub tick: u32,
    }

    impl Bench {
        pub fn new(w: u32, h: u32) -> Self {
            Self {
                grid: Grid::new(w, h),
                dirty: DirtyRectTracker::new(RegionMap::new(w, h, 4)),
                pixel_count: 0,
                stats: MoveStats::default(),
                rng: DEFAULT_SEED,
                tick: 1,
            }
        }

        pub fn put(&mut self, x: u32, y: u32, kind: PixelType) {
            self.grid.set_pixel(x, y, kind, color_for(kind, x + y));
            self.pixel_count += 1;
        }

        pub fn kind(&self, x: i32, y: i32) -> PixelType {
            self.grid.get_type(x, y)
        }

        pub fn run(&mut self, behavior: &dyn Behavior, x: u32, y: u32) -> bool {
            let mut ctx = MoveContext {
                grid: &mut self.grid,
                dirty: &mut self.dirty,
                pixel_count: &mut self.pixel_count,
                stats: &mut self.stats,
                rng: &mut self.rng,
                tick: self.tick,
            };
            behavior.update(&mut ctx, x, y)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::Bench;
    use super::*;

    #[test]
    fn registry_has_no_rule_for_static_types() {
        let reg = BehaviorRegistry::new();
        assert!(reg.get(PixelType::Empty).is_none());
        assert!(reg.get(PixelType::Stone).is_none());
        assert!(reg.get(PixelType::Sand).is_some());
    }

    #[test]
    fn max_reach_is_water_velocity() {
        assert_eq!(BehaviorRegistry::new().max_reach(), 5);
    }

    #[test]
    fn move_over_occupied_cell_drops_pixel_count() {
        let mut bench = Bench::new(4, 4);
        bench.put(1, 1, PixelType::Sand);
        bench.put(1, 2, PixelType::Gas);
        let mut ctx = MoveContext {
            grid: &mut bench.grid,
            dirty: &mut bench.dirty,
            pixel_count: &mut bench.pixel_count,
            stats: &mut bench.stats,
            rng: &mut bench.rng,
            tick: 1,
        };
        ctx.move_pixel(1, 1, 1, 2);
        assert_eq!(bench.pixel_count, 1);
        assert_eq!(bench.kind(1, 2), PixelType::Sand);
        assert_eq!(bench.stats.moves, 1);
    }

    #[test]
    fn clear_marks_dirty_and_ignores_empty() {
        let mut bench = Bench::new(8, 8);
        bench.put(2, 2, PixelType::Gas);
        {
            let mut ctx = MoveContext {
                grid: &mut bench.grid,
                dirty: &mut bench.dirty,
                pixel_count: &mut bench.pixel_count,
                stats: &mut bench.stats,
                rng: &mut bench.rng,
                tick: 1,
            };
            ctx.clear_pixel(2, 2);
            ctx.clear_pixel(5, 5);
        }
        assert_eq!(bench.pixel_count, 0);
        assert_eq!(bench.stats.cleared, 1);
        assert!(bench.dirty.pending_bounds_of(0).contains(2, 2));
        assert!(bench.dirty.pending_bounds_of(3).is_invalid());
    }
}
