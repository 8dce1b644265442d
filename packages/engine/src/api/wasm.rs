//! WebAssembly facade over `SimulationCore`
//!
//! Thin: argument conversion, id validation and error mapping only.

use wasm_bindgen::prelude::*;

use crate::domain::pixel::PX_EMPTY;
use crate::domain::PixelType;
use crate::simulation::{PerfStats, SimulationCore};

#[wasm_bindgen]
pub struct Simulation {
    core: SimulationCore,
}

#[wasm_bindgen]
impl Simulation {
    /// Create a simulation with given dimensions
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, region_size: u32) -> Self {
        Self {
            core: SimulationCore::new(width, height, region_size),
        }
    }

    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: &str) -> Result<Simulation, JsValue> {
        match SimulationCore::from_config_json(json) {
            Ok(core) => Ok(Self { core }),
            Err(e) => {
                log::warn!("rejected simulation config: {}", e);
                Err(JsValue::from_str(&e.to_string()))
            }
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn region_size(&self) -> u32 { self.core.region_size() }

    #[wasm_bindgen(getter)]
    pub fn pixel_count(&self) -> u32 { self.core.pixel_count() }

    #[wasm_bindgen(getter)]
    pub fn tick(&self) -> u32 { self.core.tick() }

    /// Run exactly one tick
    pub fn advance(&mut self) {
        self.core.advance();
    }

    /// Feed frame time in seconds; returns whether a tick ran
    pub fn update(&mut self, elapsed_seconds: f64) -> bool {
        self.core.update(elapsed_seconds)
    }

    /// Place one pixel (`pixel_empty()` erases). Unknown ids are ignored.
    pub fn place_pixel(&mut self, x: i32, y: i32, kind: u8) -> bool {
        match PixelType::from_id(kind) {
            Some(kind) => self.core.place_pixel(x, y, kind),
            None => false,
        }
    }

    pub fn place_pixels_in_circle(&mut self, cx: i32, cy: i32, radius: i32, kind: u8) -> u32 {
        match PixelType::from_id(kind) {
            Some(kind) => self.core.place_pixels_in_circle(cx, cy, radius, kind),
            None => 0,
        }
    }

    pub fn place_pixels_in_square(&mut self, cx: i32, cy: i32, count: u32, kind: u8) -> u32 {
        match PixelType::from_id(kind) {
            Some(kind) => self.core.place_pixels_in_square(cx, cy, count, kind),
            None => 0,
        }
    }

    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// Get pointer to colors array (for JS rendering)
    pub fn colors_ptr(&self) -> *const u32 {
        self.core.colors_ptr()
    }

    /// Number of `u32` entries behind `colors_ptr`
    pub fn colors_len(&self) -> usize {
        self.core.colors_len()
    }

    /// Type id at a cell, `pixel_empty()` outside the field
    pub fn cell_type_at(&self, x: i32, y: i32) -> u8 {
        self.core.cell_at(x, y).map(|c| c.kind.id()).unwrap_or(PX_EMPTY)
    }

    pub fn cell_last_updated_at(&self, x: i32, y: i32) -> u32 {
        self.core.cell_at(x, y).map(|c| c.last_updated).unwrap_or(0)
    }

    // === Regions ===

    pub fn region_count(&self) -> usize {
        self.core.region_map().region_count()
    }

    pub fn regions_x(&self) -> u32 {
        self.core.region_map().dimensions().0
    }

    pub fn regions_y(&self) -> u32 {
        self.core.region_map().dimensions().1
    }

    pub fn is_region_dirty(&self, region: usize) -> bool {
        self.core.is_region_dirty(region)
    }

    /// `[min_x, max_x, min_y, max_y]`, empty when the region is clean
    pub fn region_dirty_rect(&self, region: usize) -> Vec<i32> {
        match self.core.region_dirty_rect(region) {
            Some(r) => vec![r.min_x, r.max_x, r.min_y, r.max_y],
            None => Vec::new(),
        }
    }

    pub fn debug_regions_json(&self) -> Result<String, JsValue> {
        self.core
            .debug_regions_json()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn supports_parallel_stages(&self) -> bool {
        self.core.supports_parallel_stages()
    }

    // === Perf ===

    /// Enable or disable per-tick timing (counters are always kept)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Snapshot of the last tick's counters
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.perf_stats().clone()
    }
}

impl Simulation {
    /// Native access to the wrapped core
    pub fn core(&self) -> &SimulationCore {
        &self.core
    }
}
