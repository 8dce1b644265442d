use crate::core::random::{sanitize_seed, DEFAULT_SEED};
use crate::grid::Grid;
use crate::movement::BehaviorRegistry;
use crate::regions::{DirtyRectTracker, RegionMap, StagePartition};

use super::clock::StepClock;
use super::perf_stats::PerfStats;
use super::settings::{ConfigError, SimConfig, DEFAULT_SIM_FPS};
use super::SimulationCore;

pub(super) fn create_simulation_core(width: u32, height: u32, region_size: u32) -> SimulationCore {
    build(width, height, region_size, DEFAULT_SEED, DEFAULT_SIM_FPS)
}

pub(super) fn create_from_config(config: &SimConfig) -> Result<SimulationCore, ConfigError> {
    config.validate()?;
    Ok(build(config.width, config.height, config.region_size, config.seed, config.sim_fps))
}

fn build(width: u32, height: u32, region_size: u32, seed: u32, sim_fps: f64) -> SimulationCore {
    contract!(
        width > 0 && height > 0 && region_size > 0,
        "simulation needs non-zero dimensions, got {}x{} with region size {}",
        width,
        height,
        region_size
    );

    let regions = RegionMap::new(width, height, region_size);
    let stages = StagePartition::new(&regions);
    let behaviors = BehaviorRegistry::new();

    let (cols, rows) = regions.dimensions();
    let parallel_ok = StagePartition::supports_parallel(region_size, behaviors.max_reach());
    log::debug!(
        "simulation {}x{}: {}x{} regions of {} cells, stage sizes {:?}, parallel stages {}",
        width,
        height,
        cols,
        rows,
        region_size,
        stages.stages().iter().map(Vec::len).collect::<Vec<_>>(),
        if parallel_ok { "safe" } else { "unsafe (rule reach exceeds halo)" }
    );

    SimulationCore {
        grid: Grid::new(width, height),
        dirty: DirtyRectTracker::new(regions),
        regions,
        stages,
        behaviors,
        tick: 0,
        rng_state: sanitize_seed(seed),
        pixel_count: 0,
        clock: StepClock::new(sim_fps),
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}
