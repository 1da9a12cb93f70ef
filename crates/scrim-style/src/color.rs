#![forbid(unsafe_code)]

//! Color values for styles.
//!
//! A [`Color`] is either a truecolor RGBA value or an xterm-256 palette
//! index; both resolve to the kernel's [`PackedRgba`] for compositing.
//! Palette resolution uses the nominal xterm values: the 16 base colors,
//! the 6x6x6 cube with channel steps `0, 95, 135, 175, 215, 255`, and the
//! 24-step grayscale ramp starting at 8.

use scrim_render::cell::PackedRgba;

/// Nominal RGB values for the 16 base palette entries.
const BASE_16: [(u8, u8, u8); 16] = [
    (0, 0, 0),
    (128, 0, 0),
    (0, 128, 0),
    (128, 128, 0),
    (0, 0, 128),
    (128, 0, 128),
    (0, 128, 128),
    (192, 192, 192),
    (128, 128, 128),
    (255, 0, 0),
    (0, 255, 0),
    (255, 255, 0),
    (0, 0, 255),
    (255, 0, 255),
    (0, 255, 255),
    (255, 255, 255),
];

/// A style color: truecolor or palette-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    /// Truecolor channels, straight (non-premultiplied) alpha.
    Rgba { r: u8, g: u8, b: u8, a: u8 },
    /// An xterm-256 palette index.
    Indexed(u8),
}

impl Color {
    /// An opaque truecolor value.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgba { r, g, b, a: 255 }
    }

    /// A truecolor value with explicit alpha.
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::Rgba { r, g, b, a }
    }

    /// A palette index.
    #[must_use]
    pub const fn indexed(index: u8) -> Self {
        Self::Indexed(index)
    }

    /// Resolve to a packed RGBA value. Palette entries resolve opaque.
    #[must_use]
    pub const fn resolve(self) -> PackedRgba {
        match self {
            Self::Rgba { r, g, b, a } => PackedRgba::rgba(r, g, b, a),
            Self::Indexed(index) => {
                let (r, g, b) = ansi256_to_rgb(index);
                PackedRgba::rgb(r, g, b)
            }
        }
    }
}

impl From<PackedRgba> for Color {
    fn from(packed: PackedRgba) -> Self {
        Self::Rgba {
            r: packed.r(),
            g: packed.g(),
            b: packed.b(),
            a: packed.a(),
        }
    }
}

/// Nominal RGB for an xterm-256 palette index.
const fn ansi256_to_rgb(index: u8) -> (u8, u8, u8) {
    if index < 16 {
        return BASE_16[index as usize];
    }
    if index < 232 {
        // 6x6x6 color cube.
        let i = index - 16;
        let r = i / 36;
        let g = (i / 6) % 6;
        let b = i % 6;
        (cube_step(r), cube_step(g), cube_step(b))
    } else {
        // Grayscale ramp.
        let level = 8 + 10 * (index - 232);
        (level, level, level)
    }
}

const fn cube_step(v: u8) -> u8 {
    if v == 0 { 0 } else { 55 + 40 * v }
}
