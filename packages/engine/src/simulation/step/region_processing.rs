use crate::movement::{BehaviorRegistry, MoveContext, MoveStats};

use super::perf_stats::PerfStats;
use super::SimulationCore;

impl SimulationCore {
    /// Scan one region's window from the read-side dirty rect. Regions whose
    /// rect is the invalid sentinel are skipped outright.
    pub(super) fn process_region(&mut self, region: usize, tick: u32, right_to_left: bool, moves: &mut MoveStats) {
        let rect = self.dirty.bounds_of(region);
        let Some(window) = rect.scan_window(self.grid.width(), self.grid.height()) else {
            self.perf_stats.regions_skipped += 1;
            return;
        };
        self.perf_stats.regions_scanned += 1;
        self.perf_stats.cells_scanned += window.cell_count() as u32;

        let SimulationCore {
            grid,
            dirty,
            behaviors,
            rng_state,
            pixel_count,
            perf_stats,
            ..
        } = self;
        let mut ctx = MoveContext {
            grid,
            dirty,
            pixel_count,
            stats: moves,
            rng: rng_state,
            tick,
        };

        // Bottom row first so vacancies below are resolved before the cells
        // above try to fall into them
        for y in (window.start_y..window.end_y).rev() {
            if right_to_left {
                for x in (window.start_x..window.end_x).rev() {
                    visit_cell(&mut ctx, behaviors, perf_stats, x, y);
                }
            } else {
                for x in window.start_x..window.end_x {
                    visit_cell(&mut ctx, behaviors, perf_stats, x, y);
                }
            }
        }
    }
}

#[inline]
fn visit_cell(ctx: &mut MoveContext, behaviors: &BehaviorRegistry, perf: &mut PerfStats, x: u32, y: u32) {
    if ctx.grid.is_updated_in(x, y, ctx.tick) {
        return;
    }
    let kind = ctx.grid.get_type(x as i32, y as i32);
    let Some(behavior) = behaviors.get(kind) else {
        return;
    };
    perf.rule_invocations += 1;
    if behavior.update(ctx, x, y) {
        perf.pixels_moved += 1;
    }
}
