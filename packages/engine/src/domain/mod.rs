//! Domain types: what a cell can be and how it looks.

pub mod palette;
pub mod pixel;

pub use pixel::{Cell, PixelMask, PixelType};
