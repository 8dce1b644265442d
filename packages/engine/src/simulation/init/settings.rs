use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::random::DEFAULT_SEED;
use crate::regions::DEFAULT_REGION_SIZE;

use super::perf_stats::PerfStats;
use super::SimulationCore;

/// 1600x896 window at 4 screen pixels per cell
pub const DEFAULT_WIDTH: u32 = 400;
pub const DEFAULT_HEIGHT: u32 = 224;
pub const DEFAULT_SIM_FPS: f64 = 120.0;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0} must be greater than zero")]
    ZeroDimension(&'static str),
    #[error("sim_fps must be a positive finite rate, got {0}")]
    InvalidSimRate(f64),
}

/// Construction parameters, usually supplied by the host as JSON
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub width: u32,
    pub height: u32,
    pub region_size: u32,
    pub sim_fps: f64,
    pub seed: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            region_size: DEFAULT_REGION_SIZE,
            sim_fps: DEFAULT_SIM_FPS,
            seed: DEFAULT_SEED,
        }
    }
}

impl SimConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::ZeroDimension("width"));
        }
        if self.height == 0 {
            return Err(ConfigError::ZeroDimension("height"));
        }
        if self.region_size == 0 {
            return Err(ConfigError::ZeroDimension("region_size"));
        }
        if !(self.sim_fps.is_finite() && self.sim_fps > 0.0) {
            return Err(ConfigError::InvalidSimRate(self.sim_fps));
        }
        Ok(())
    }
}

pub(super) fn enable_perf_metrics(sim: &mut SimulationCore, enabled: bool) {
    sim.perf_enabled = enabled;
}

pub(super) fn perf_stats(sim: &SimulationCore) -> &PerfStats {
    &sim.perf_stats
}
