use crate::movement::MoveStats;
use crate::regions::StagePartition;

use super::{PerfTimer, SimulationCore};

/// One tick: visit every stage in rotated order, scan each dirty region of
/// the stage, then hand this tick's marks over to the next one.
pub(super) fn advance(sim: &mut SimulationCore) {
    let step_start = PerfTimer::start_if(sim.perf_enabled);

    // Stamps are compared against the tick, so 0 (the cleared stamp) is
    // never a live tick
    sim.tick = sim.tick.wrapping_add(1).max(1);
    let tick = sim.tick;
    let right_to_left = tick % 2 == 0;

    sim.perf_stats.reset();
    sim.perf_stats.regions_total = sim.regions.region_count() as u32;
    let mut moves = MoveStats::default();

    for stage in StagePartition::order_for_tick(tick) {
        let region_count = sim.stages.stage(stage).len();
        for slot in 0..region_count {
            let region = sim.stages.stage(stage)[slot];
            sim.process_region(region, tick, right_to_left, &mut moves);
        }
    }

    sim.dirty.swap();

    sim.perf_stats.raycast_steps = moves.raycast_steps;
    sim.perf_stats.pixel_count = sim.pixel_count;
    if let Some(start) = step_start {
        sim.perf_stats.step_ms = start.elapsed_ms();
    }

    log::trace!(
        "tick {}: scanned {}/{} regions, {} cells, {} rule calls, {} moved, {} pixels",
        tick,
        sim.perf_stats.regions_scanned,
        sim.perf_stats.regions_total,
        sim.perf_stats.cells_scanned,
        sim.perf_stats.rule_invocations,
        sim.perf_stats.pixels_moved,
        sim.pixel_count
    );
}

pub(super) fn update(sim: &mut SimulationCore, elapsed_seconds: f64) -> bool {
    if !sim.clock.accumulate(elapsed_seconds) {
        return false;
    }
    advance(sim);
    true
}
