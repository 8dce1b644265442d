//! Simulation - owns the pixel field and drives it tick by tick
//!
//! `SimulationCore` only orchestrates. Storage lives in `spatial::grid`,
//! bookkeeping in `spatial::regions`, the per-type rules in
//! `systems::movement`. The submodules below hold the orchestration steps:
//! - init/      construction and configuration
//! - step/      tick driver, per-region scan, fixed-timestep clock
//! - commands/  pixel placement and erase
//! - debug/     region introspection for overlays
//! - perf/      per-tick counters and timing

use crate::domain::{Cell, PixelType};
use crate::grid::Grid;
use crate::movement::BehaviorRegistry;
use crate::regions::{DirtyRect, DirtyRectTracker, RegionMap, StagePartition};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "step/clock.rs"]
mod clock;
#[path = "step/step.rs"]
mod step;
#[path = "step/region_processing.rs"]
mod region_processing;
#[path = "commands/commands.rs"]
mod commands;
#[path = "debug/regions.rs"]
mod debug;

pub use clock::StepClock;
pub use debug::RegionDebugInfo;
pub use perf_stats::PerfStats;
pub use settings::{ConfigError, SimConfig, DEFAULT_HEIGHT, DEFAULT_SIM_FPS, DEFAULT_WIDTH};

use perf_timer::PerfTimer;

/// The simulation state
pub struct SimulationCore {
    grid: Grid,
    regions: RegionMap,
    dirty: DirtyRectTracker,
    stages: StagePartition,
    behaviors: BehaviorRegistry,

    // State
    tick: u32,
    rng_state: u32,
    pixel_count: u32,
    clock: StepClock,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl SimulationCore {
    /// Create a simulation over a `width` x `height` field split into
    /// `region_size` tiles. Zero for any of them is a contract violation.
    pub fn new(width: u32, height: u32, region_size: u32) -> Self {
        init::create_simulation_core(width, height, region_size)
    }

    /// Create from a validated config
    pub fn from_config(config: &SimConfig) -> Result<Self, ConfigError> {
        init::create_from_config(config)
    }

    /// Parse, validate and build in one go
    pub fn from_config_json(json: &str) -> Result<Self, ConfigError> {
        let config = SimConfig::from_json(json)?;
        Self::from_config(&config)
    }

    pub fn width(&self) -> u32 { self.grid.width() }

    pub fn height(&self) -> u32 { self.grid.height() }

    pub fn region_size(&self) -> u32 { self.regions.region_size() }

    /// Number of ticks run since construction or the last `clear`
    pub fn tick(&self) -> u32 { self.tick }

    /// Non-empty cells currently in the field
    pub fn pixel_count(&self) -> u32 { self.pixel_count }

    pub fn grid(&self) -> &Grid { &self.grid }

    pub fn region_map(&self) -> &RegionMap { &self.regions }

    pub fn dirty_rects(&self) -> &DirtyRectTracker { &self.dirty }

    pub fn stages(&self) -> &StagePartition { &self.stages }

    pub fn clock(&self) -> &StepClock { &self.clock }

    /// Whether same-stage regions are far enough apart for the current rules
    /// to run them concurrently
    pub fn supports_parallel_stages(&self) -> bool {
        StagePartition::supports_parallel(self.regions.region_size(), self.behaviors.max_reach())
    }

    /// Enable or disable wall-clock timing of each tick
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Counters of the last tick
    pub fn perf_stats(&self) -> &PerfStats {
        settings::perf_stats(self)
    }

    /// Run exactly one tick
    pub fn advance(&mut self) {
        step::advance(self);
    }

    /// Feed wall-clock time; runs at most one tick. Returns true if it did.
    pub fn update(&mut self, elapsed_seconds: f64) -> bool {
        step::update(self, elapsed_seconds)
    }

    /// Place one pixel. Out-of-bounds positions and occupied targets are
    /// ignored; `PixelType::Empty` erases.
    pub fn place_pixel(&mut self, x: i32, y: i32, kind: PixelType) -> bool {
        commands::place_pixel(self, x, y, kind)
    }

    /// Filled disc brush; returns how many cells changed
    pub fn place_pixels_in_circle(&mut self, cx: i32, cy: i32, radius: i32, kind: PixelType) -> u32 {
        commands::place_pixels_in_circle(self, cx, cy, radius, kind)
    }

    /// Scatter `count` placements at random offsets within `count / 2` of
    /// the center; returns how many cells changed
    pub fn place_pixels_in_square(&mut self, cx: i32, cy: i32, count: u32, kind: PixelType) -> u32 {
        commands::place_pixels_in_square(self, cx, cy, count, kind)
    }

    /// Reset the whole field
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    pub fn cell_at(&self, x: i32, y: i32) -> Option<Cell> {
        self.grid.cell_at(x, y)
    }

    /// Packed RGBA, one entry per cell, row-major
    pub fn colors(&self) -> &[u32] {
        &self.grid.colors
    }

    /// Get pointer to colors array (for JS rendering)
    pub fn colors_ptr(&self) -> *const u32 {
        self.grid.colors.as_ptr()
    }

    pub fn colors_len(&self) -> usize {
        self.grid.size()
    }

    /// Read-side dirty state of a region; false for unknown indices
    pub fn is_region_dirty(&self, region: usize) -> bool {
        region < self.regions.region_count() && self.dirty.is_dirty(region)
    }

    /// Read-side rect of a dirty region
    pub fn region_dirty_rect(&self, region: usize) -> Option<DirtyRect> {
        if !self.is_region_dirty(region) {
            return None;
        }
        Some(self.dirty.bounds_of(region))
    }

    pub fn region_debug_info(&self) -> Vec<RegionDebugInfo> {
        debug::region_debug_info(self)
    }

    pub fn debug_regions_json(&self) -> Result<String, serde_json::Error> {
        debug::debug_regions_json(self)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
