use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Counters for the most recent tick. Everything but `step_ms` is always
/// collected; `step_ms` stays zero unless perf metrics are enabled.
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) regions_total: u32,
    pub(super) regions_scanned: u32,
    pub(super) regions_skipped: u32,
    pub(super) cells_scanned: u32,
    pub(super) rule_invocations: u32,
    pub(super) pixels_moved: u32,
    pub(super) raycast_steps: u32,
    pub(super) pixel_count: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn regions_total(&self) -> u32 { self.regions_total }
    #[wasm_bindgen(getter)]
    pub fn regions_scanned(&self) -> u32 { self.regions_scanned }
    #[wasm_bindgen(getter)]
    pub fn regions_skipped(&self) -> u32 { self.regions_skipped }
    #[wasm_bindgen(getter)]
    pub fn cells_scanned(&self) -> u32 { self.cells_scanned }
    #[wasm_bindgen(getter)]
    pub fn rule_invocations(&self) -> u32 { self.rule_invocations }
    #[wasm_bindgen(getter)]
    pub fn pixels_moved(&self) -> u32 { self.pixels_moved }
    #[wasm_bindgen(getter)]
    pub fn raycast_steps(&self) -> u32 { self.raycast_steps }
    #[wasm_bindgen(getter)]
    pub fn pixel_count(&self) -> u32 { self.pixel_count }
}
