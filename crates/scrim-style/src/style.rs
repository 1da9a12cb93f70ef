#![forbid(unsafe_code)]

//! Styles: optional colors plus text attributes.
//!
//! A [`Style`] is a patch, not a complete description: `None` fields leave
//! the target untouched, which is what lets caller styles cascade over
//! theme defaults with [`Style::merge`].

use scrim_render::cell::CellFlags;

use crate::color::Color;

/// Text attribute flags carried by a style.
///
/// Wider than the kernel's per-cell flags so styles can grow attributes the
/// kernel does not store; the current set converts losslessly via
/// `CellFlags::from`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StyleFlags(u16);

impl StyleFlags {
    pub const NONE: StyleFlags = StyleFlags(0);
    pub const BOLD: StyleFlags = StyleFlags(1 << 0);
    pub const DIM: StyleFlags = StyleFlags(1 << 1);
    pub const ITALIC: StyleFlags = StyleFlags(1 << 2);
    pub const UNDERLINE: StyleFlags = StyleFlags(1 << 3);
    pub const REVERSE: StyleFlags = StyleFlags(1 << 4);
    pub const STRIKETHROUGH: StyleFlags = StyleFlags(1 << 5);

    /// No flags set.
    #[must_use]
    pub const fn empty() -> Self {
        Self::NONE
    }

    /// The raw bit pattern.
    #[must_use]
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Whether no flags are set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Whether every flag in `other` is also set in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// The union of two flag sets.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

impl std::ops::BitOr for StyleFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl std::ops::BitOrAssign for StyleFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl From<StyleFlags> for CellFlags {
    fn from(flags: StyleFlags) -> Self {
        let mut out = CellFlags::empty();
        if flags.contains(StyleFlags::BOLD) {
            out |= CellFlags::BOLD;
        }
        if flags.contains(StyleFlags::DIM) {
            out |= CellFlags::DIM;
        }
        if flags.contains(StyleFlags::ITALIC) {
            out |= CellFlags::ITALIC;
        }
        if flags.contains(StyleFlags::UNDERLINE) {
            out |= CellFlags::UNDERLINE;
        }
        if flags.contains(StyleFlags::REVERSE) {
            out |= CellFlags::REVERSE;
        }
        if flags.contains(StyleFlags::STRIKETHROUGH) {
            out |= CellFlags::STRIKETHROUGH;
        }
        out
    }
}

/// A style patch: unset fields leave the target cell untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub attrs: Option<StyleFlags>,
}

impl Style {
    /// A style that changes nothing.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            attrs: None,
        }
    }

    /// Set the foreground color.
    #[must_use]
    pub fn fg(mut self, color: impl Into<Color>) -> Self {
        self.fg = Some(color.into());
        self
    }

    /// Set the background color.
    #[must_use]
    pub fn bg(mut self, color: impl Into<Color>) -> Self {
        self.bg = Some(color.into());
        self
    }

    /// Replace the attribute set.
    #[must_use]
    pub const fn attrs(mut self, flags: StyleFlags) -> Self {
        self.attrs = Some(flags);
        self
    }

    /// Add `BOLD` to the attribute set.
    #[must_use]
    pub fn bold(self) -> Self {
        self.with_flag(StyleFlags::BOLD)
    }

    /// Add `DIM` to the attribute set.
    #[must_use]
    pub fn dim(self) -> Self {
        self.with_flag(StyleFlags::DIM)
    }

    fn with_flag(mut self, flag: StyleFlags) -> Self {
        self.attrs = Some(self.attrs.unwrap_or_default() | flag);
        self
    }

    /// Whether applying this style would change nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attrs.is_none()
    }

    /// Cascade `over` onto `self`: fields set on `over` win.
    ///
    /// `attrs` replaces as a whole set rather than merging bitwise.
    #[must_use]
    pub fn merge(self, over: Style) -> Style {
        Style {
            fg: over.fg.or(self.fg),
            bg: over.bg.or(self.bg),
            attrs: over.attrs.or(self.attrs),
        }
    }
}
