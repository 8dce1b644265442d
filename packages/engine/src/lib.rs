//! Sandfall Engine - falling-sand cellular automaton in WASM
//!
//! Architecture:
//! - core/        - contracts, randomness and console logging
//! - domain/      - pixel types, masks and palettes
//! - spatial/     - grid storage, regions, dirty rects, stages
//! - systems/     - ray-marched move test and per-type movement rules
//! - simulation/  - tick driver, commands, config, perf
//! - api/         - wasm-bindgen facade

// Contract macros must be first for macro export
#[macro_use]
pub mod core;
pub mod domain;
pub mod spatial;
pub mod systems;
pub mod simulation;
pub mod api;

// Short paths used across the crate
pub use spatial::grid;
pub use spatial::regions;
pub use systems::movement;
pub use systems::physics;

use wasm_bindgen::prelude::*;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();
    crate::core::logging::install();

    web_sys::console::log_1(&"Sandfall engine initialized".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use api::wasm::Simulation;
pub use domain::{Cell, PixelMask, PixelType};
pub use simulation::{ConfigError, PerfStats, RegionDebugInfo, SimConfig, SimulationCore, StepClock};

// Export pixel type ids for JS
#[wasm_bindgen]
pub fn pixel_empty() -> u8 { domain::pixel::PX_EMPTY }
#[wasm_bindgen]
pub fn pixel_sand() -> u8 { domain::pixel::PX_SAND }
#[wasm_bindgen]
pub fn pixel_water() -> u8 { domain::pixel::PX_WATER }
#[wasm_bindgen]
pub fn pixel_gas() -> u8 { domain::pixel::PX_GAS }
#[wasm_bindgen]
pub fn pixel_stone() -> u8 { domain::pixel::PX_STONE }
