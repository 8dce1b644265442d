//! Spatial storage: the dense cell grid and its region partition.

pub mod grid;
pub mod regions;
