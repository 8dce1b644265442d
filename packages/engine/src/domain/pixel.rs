//! Pixel types - the five kinds of matter a grid cell can hold.
//!
//! `PixelType` is the per-cell tag, `PixelMask` is the bitflag form used by
//! movement rules to describe which kinds block them.

use std::fmt;

use bitflags::bitflags;

/// Numeric pixel ids shared with the host (stable, do not reorder)
pub const PX_EMPTY: u8 = 0;
pub const PX_SAND: u8 = 1;
pub const PX_WATER: u8 = 2;
pub const PX_GAS: u8 = 3;
pub const PX_STONE: u8 = 4;

pub const PIXEL_TYPE_COUNT: usize = 5;

bitflags! {
    /// Set of pixel kinds, used as a collision mask.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PixelMask: u32 {
        const SAND  = 1 << 0;
        const WATER = 1 << 1;
        const GAS   = 1 << 2;
        const STONE = 1 << 3;
    }
}

/// What occupies a cell. `Empty` is a real state, not an absence.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PixelType {
    #[default]
    Empty = PX_EMPTY,
    Sand = PX_SAND,
    Water = PX_WATER,
    Gas = PX_GAS,
    Stone = PX_STONE,
}

impl PixelType {
    pub const ALL: [PixelType; PIXEL_TYPE_COUNT] = [
        PixelType::Empty,
        PixelType::Sand,
        PixelType::Water,
        PixelType::Gas,
        PixelType::Stone,
    ];

    #[inline]
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            PX_EMPTY => Some(PixelType::Empty),
            PX_SAND => Some(PixelType::Sand),
            PX_WATER => Some(PixelType::Water),
            PX_GAS => Some(PixelType::Gas),
            PX_STONE => Some(PixelType::Stone),
            _ => None,
        }
    }

    #[inline]
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Collision-mask bit for this kind. Empty maps to the empty set so it
    /// never blocks anything.
    #[inline]
    pub fn mask(self) -> PixelMask {
        match self {
            PixelType::Empty => PixelMask::empty(),
            PixelType::Sand => PixelMask::SAND,
            PixelType::Water => PixelMask::WATER,
            PixelType::Gas => PixelMask::GAS,
            PixelType::Stone => PixelMask::STONE,
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == PixelType::Empty
    }

    pub fn name(self) -> &'static str {
        match self {
            PixelType::Empty => "Empty",
            PixelType::Sand => "Sand",
            PixelType::Water => "Water",
            PixelType::Gas => "Gas",
            PixelType::Stone => "Stone",
        }
    }
}

impl fmt::Display for PixelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One grid position's simulation state.
///
/// `last_updated` holds the tick in which a rule last moved matter into this
/// cell; the tick driver skips cells already stamped with the current tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    pub kind: PixelType,
    pub last_updated: u32,
}

impl Cell {
    pub const EMPTY: Cell = Cell { kind: PixelType::Empty, last_updated: 0 };

    #[inline]
    pub fn new(kind: PixelType, last_updated: u32) -> Self {
        Self { kind, last_updated }
    }
}
