//! Checkerboard stages.
//!
//! Regions are split into four classes by (row parity, column parity). Two
//! regions of the same class never share an edge, which is what would let
//! one stage's regions run side by side. Stages themselves always run one
//! after another.
//!
//! Within a stage, regions are listed from the bottom region row upward.
//! Gravity rules read the cells below them, so bottom-up enumeration cuts
//! down (but does not remove) same-tick ordering artifacts.

use super::dirty::{DIRTY_MARGIN, WINDOW_MARGIN};
use super::RegionMap;

pub const STAGE_COUNT: usize = 4;

pub struct StagePartition {
    stages: [Vec<usize>; STAGE_COUNT],
}

impl StagePartition {
    pub fn new(map: &RegionMap) -> Self {
        let (cols, rows) = map.dimensions();
        let per_stage = map.region_count() / STAGE_COUNT + 1;
        let mut stages: [Vec<usize>; STAGE_COUNT] = Default::default();
        for stage in stages.iter_mut() {
            stage.reserve(per_stage);
        }

        // Bottom region row first
        for row in (0..rows).rev() {
            for col in 0..cols {
                stages[Self::stage_of(col, row)].push(map.index_from_coords(col, row));
            }
        }

        Self { stages }
    }

    /// Stage class of a region: (even,even)=0, (odd col,even row)=1,
    /// (even col,odd row)=2, (odd,odd)=3
    #[inline]
    pub fn stage_of(col: u32, row: u32) -> usize {
        ((col & 1) | ((row & 1) << 1)) as usize
    }

    #[inline]
    pub fn stage(&self, stage: usize) -> &[usize] {
        &self.stages[stage]
    }

    pub fn stages(&self) -> &[Vec<usize>; STAGE_COUNT] {
        &self.stages
    }

    /// Stage visiting order for a tick. The start rotates by one each tick
    /// so no checkerboard class always goes first.
    pub fn order_for_tick(tick: u32) -> [usize; STAGE_COUNT] {
        let start = (tick as usize) % STAGE_COUNT;
        let mut order = [0; STAGE_COUNT];
        for (i, slot) in order.iter_mut().enumerate() {
            *slot = (start + i) % STAGE_COUNT;
        }
        order
    }

    /// Whether two regions of one stage could be processed concurrently
    /// without their touched cells overlapping.
    ///
    /// A region's scan may visit `DIRTY_MARGIN + WINDOW_MARGIN` cells past
    /// its own edge and a rule may then reach `rule_reach` further. Regions
    /// of one stage are separated by one full region, so the two halos must
    /// fit inside that gap.
    pub fn supports_parallel(region_size: u32, rule_reach: u32) -> bool {
        let halo = (DIRTY_MARGIN + WINDOW_MARGIN) as u32 + rule_reach;
        2 * halo <= region_size
    }
}
