use serde::Serialize;

use crate::regions::DirtyRect;

use super::SimulationCore;

/// One region as an overlay would draw it
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RegionDebugInfo {
    pub index: usize,
    pub column: u32,
    pub row: u32,
    /// Cell-space origin and clipped extent
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    /// Scanned on the next tick
    pub active: bool,
    pub dirty_rect: Option<DirtyRect>,
}

pub(super) fn region_debug_info(sim: &SimulationCore) -> Vec<RegionDebugInfo> {
    let map = &sim.regions;
    (0..map.region_count())
        .map(|index| {
            let (column, row) = map.coords_from_index(index);
            let (x0, y0, x1, y1) = map.region_bounds(index);
            let rect = sim.dirty.bounds_of(index);
            RegionDebugInfo {
                index,
                column,
                row,
                x: x0,
                y: y0,
                width: x1 - x0,
                height: y1 - y0,
                active: rect.is_valid(),
                dirty_rect: rect.is_valid().then_some(rect),
            }
        })
        .collect()
}

pub(super) fn debug_regions_json(sim: &SimulationCore) -> Result<String, serde_json::Error> {
    serde_json::to_string(&region_debug_info(sim))
}
