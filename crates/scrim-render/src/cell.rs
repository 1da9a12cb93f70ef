#![forbid(unsafe_code)]

//! Cell primitives: packed RGBA colors, cell content, and attributes.
//!
//! # Invariants
//!
//! 1. **`PackedRgba` is straight (non-premultiplied) alpha**: `over`
//!    composites with the standard source-over equation and rounds each
//!    channel once.
//!
//! 2. **`CellContent` is 4 bytes**: a plain `char` scalar, or a grapheme
//!    pool id when the high bit is set. Ids are 24 bits.

use bitflags::bitflags;

/// A packed 32-bit RGBA color, `0xRRGGBBAA`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PackedRgba(u32);

impl PackedRgba {
    /// Fully transparent black.
    pub const TRANSPARENT: PackedRgba = PackedRgba::rgba(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: PackedRgba = PackedRgba::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: PackedRgba = PackedRgba::rgb(255, 255, 255);

    /// Create a color from channel values.
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | (a as u32))
    }

    /// Create an opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Red channel.
    #[must_use]
    pub const fn r(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Green channel.
    #[must_use]
    pub const fn g(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Blue channel.
    #[must_use]
    pub const fn b(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Alpha channel.
    #[must_use]
    pub const fn a(self) -> u8 {
        self.0 as u8
    }

    /// The raw packed value.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Whether alpha is 255.
    #[must_use]
    pub const fn is_opaque(self) -> bool {
        self.a() == 255
    }

    /// Whether alpha is 0.
    #[must_use]
    pub const fn is_transparent(self) -> bool {
        self.a() == 0
    }

    /// Scale the alpha channel by `opacity`, clamped to `[0.0, 1.0]`.
    #[must_use]
    pub fn with_opacity(self, opacity: f32) -> Self {
        let opacity = opacity.clamp(0.0, 1.0);
        let a = (self.a() as f32 * opacity).round() as u8;
        Self::rgba(self.r(), self.g(), self.b(), a)
    }

    /// Source-over composite `self` onto `dst`.
    #[must_use]
    pub fn over(self, dst: PackedRgba) -> PackedRgba {
        if self.is_opaque() || dst.is_transparent() {
            return self;
        }
        if self.is_transparent() {
            return dst;
        }

        let sa = self.a() as f32 / 255.0;
        let da = dst.a() as f32 / 255.0;
        let out_a = sa + da * (1.0 - sa);
        if out_a <= f32::EPSILON {
            return PackedRgba::TRANSPARENT;
        }

        let blend = |s: u8, d: u8| -> u8 {
            let s = s as f32 / 255.0;
            let d = d as f32 / 255.0;
            let c = (s * sa + d * da * (1.0 - sa)) / out_a;
            (c * 255.0).round() as u8
        };

        PackedRgba::rgba(
            blend(self.r(), dst.r()),
            blend(self.g(), dst.g()),
            blend(self.b(), dst.b()),
            (out_a * 255.0).round() as u8,
        )
    }
}

bitflags! {
    /// Per-cell text attributes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CellFlags: u8 {
        const BOLD = 0b0000_0001;
        const DIM = 0b0000_0010;
        const ITALIC = 0b0000_0100;
        const UNDERLINE = 0b0000_1000;
        const REVERSE = 0b0001_0000;
        const STRIKETHROUGH = 0b0010_0000;
    }
}

const GRAPHEME_BIT: u32 = 1 << 31;
const GRAPHEME_ID_MASK: u32 = 0x00FF_FFFF;

/// Cell content: either a single `char` or a pooled grapheme id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellContent(u32);

impl CellContent {
    /// No content.
    pub const EMPTY: CellContent = CellContent(0);

    /// Content for a single character.
    #[must_use]
    pub const fn from_char(c: char) -> Self {
        Self(c as u32)
    }

    /// Content referencing an interned grapheme cluster.
    #[must_use]
    pub const fn from_grapheme(id: u32) -> Self {
        Self(GRAPHEME_BIT | (id & GRAPHEME_ID_MASK))
    }

    /// The character, if this is plain-char content.
    #[must_use]
    pub fn as_char(self) -> Option<char> {
        if self.0 == 0 || self.0 & GRAPHEME_BIT != 0 {
            return None;
        }
        char::from_u32(self.0)
    }

    /// The grapheme pool id, if this is pooled content.
    #[must_use]
    pub const fn as_grapheme_id(self) -> Option<u32> {
        if self.0 & GRAPHEME_BIT != 0 {
            Some(self.0 & GRAPHEME_ID_MASK)
        } else {
            None
        }
    }

    /// Whether the cell holds no content.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// A single cell of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub content: CellContent,
    pub fg: PackedRgba,
    pub bg: PackedRgba,
    pub attrs: CellFlags,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            content: CellContent::EMPTY,
            fg: PackedRgba::WHITE,
            bg: PackedRgba::TRANSPARENT,
            attrs: CellFlags::empty(),
        }
    }
}

impl Cell {
    /// A cell with the given content and default colors.
    #[must_use]
    pub fn new(content: CellContent) -> Self {
        Self {
            content,
            ..Self::default()
        }
    }

    /// A cell holding a single character.
    #[must_use]
    pub fn from_char(c: char) -> Self {
        Self::new(CellContent::from_char(c))
    }

    /// Whether the cell holds no content.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
