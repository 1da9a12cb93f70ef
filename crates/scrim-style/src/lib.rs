#![forbid(unsafe_code)]

//! Style, theme, and color primitives for ScrimTUI.
//!
//! - [`color`]: truecolor and palette-indexed [`Color`] values.
//! - [`style`]: the [`Style`] patch type widgets apply to cells.
//! - [`theme`]: named [`Theme`]s, a registry, and the process-wide
//!   current theme behind a lock-free handle.
//!
//! This crate sits above the render kernel: it knows about cells and
//! packed colors, never about widgets.

pub mod color;
pub mod style;
pub mod theme;

pub use color::Color;
pub use style::{Style, StyleFlags};
pub use theme::{
    DEFAULT_OVERLAY_OPACITY, Theme, ThemeRegistry, current_theme, set_current_theme,
};
