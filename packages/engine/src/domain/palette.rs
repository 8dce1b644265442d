//! Display colors per pixel type.
//!
//! Colors are packed as `0xAABBGGRR` so the little-endian byte order in
//! memory is `[R, G, B, A]`, i.e. the buffer can be uploaded as an RGBA8
//! texture without conversion.

use super::pixel::PixelType;

/// Cleared/never-filled cells are transparent black
pub const BLANK: u32 = 0x0000_0000;

#[inline]
pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
    (a as u32) << 24 | (b as u32) << 16 | (g as u32) << 8 | r as u32
}

/// Unpack into `[r, g, b, a]`
#[inline]
pub const fn channels(color: u32) -> [u8; 4] {
    color.to_le_bytes()
}

const SAND_COLORS: [u32; 3] = [
    rgba(0xf9, 0xa3, 0x1b, 0xff),
    rgba(0xff, 0xd5, 0x41, 0xff),
    rgba(0xff, 0xfc, 0x40, 0xff),
];

const WATER_COLORS: [u32; 3] = [
    rgba(0x14, 0x34, 0x64, 0xff),
    rgba(0x28, 0x5c, 0xc4, 0xff),
    rgba(0x24, 0x9f, 0xde, 0xff),
];

const GAS_COLORS: [u32; 1] = [rgba(0xb3, 0xb9, 0xd1, 0xff)];

const STONE_COLORS: [u32; 3] = [
    rgba(0x33, 0x39, 0x41, 0xff),
    rgba(0x4a, 0x54, 0x62, 0xff),
    rgba(0x6d, 0x75, 0x8d, 0xff),
];

pub fn palette(kind: PixelType) -> &'static [u32] {
    match kind {
        PixelType::Empty => &[BLANK],
        PixelType::Sand => &SAND_COLORS,
        PixelType::Water => &WATER_COLORS,
        PixelType::Gas => &GAS_COLORS,
        PixelType::Stone => &STONE_COLORS,
    }
}

/// Pick a palette entry; `variation` is any random word.
#[inline]
pub fn color_for(kind: PixelType, variation: u32) -> u32 {
    let colors = palette(kind);
    colors[(variation as usize) % colors.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packing_is_rgba_in_memory() {
        let c = rgba(0x11, 0x22, 0x33, 0x44);
        assert_eq!(channels(c), [0x11, 0x22, 0x33, 0x44]);
    }

    #[test]
    fn every_variation_stays_in_palette() {
        for kind in PixelType::ALL {
            for v in 0..16u32 {
                assert!(palette(kind).contains(&color_for(kind, v)));
            }
        }
        assert_eq!(color_for(PixelType::Empty, 7), BLANK);
    }

    #[test]
    fn non_empty_colors_are_opaque() {
        for kind in PixelType::ALL.iter().filter(|k| !k.is_empty()) {
            for &c in palette(*kind) {
                assert_eq!(channels(c)[3], 0xff, "{} has a translucent entry", kind);
            }
        }
    }
}
