#![forbid(unsafe_code)]

//! Overlay widgets for ScrimTUI.

pub mod label;
pub mod modal;

pub use label::Label;
pub use modal::{
    BACKDROP_CURVE, BACKDROP_HIT, Backdrop, BackdropAction, BackdropAnimation, BackdropContent,
    BackdropPhase, BackdropState, CubicBezier, Easing, FADE_IN_DEFAULT, FADE_OUT_DEFAULT,
    FadeConfig, FadeKeyframes, KeyframeCache, NoContent,
};

use scrim_core::geometry::Rect;
use scrim_render::buffer::Buffer;
use scrim_render::cell::{Cell, CellContent, PackedRgba};
use scrim_render::frame::Frame;
use scrim_style::Style;

/// A `Widget` is a renderable component.
///
/// Widgets render themselves into a `Frame` within a given `Rect`.
pub trait Widget {
    /// Render the widget into the frame at the given area.
    fn render(&self, area: Rect, frame: &mut Frame);
}

/// A `StatefulWidget` is a widget that renders based on mutable state.
pub trait StatefulWidget {
    type State;

    /// Render the widget into the frame with mutable state.
    fn render(&self, area: Rect, frame: &mut Frame, state: &mut Self::State);
}

/// Helper to apply style to a cell.
pub(crate) fn apply_style(cell: &mut Cell, style: Style) {
    if let Some(fg) = style.fg {
        cell.fg = fg.resolve();
    }
    if let Some(bg) = style.bg {
        cell.bg = bg.resolve();
    }
    if let Some(attrs) = style.attrs {
        cell.attrs = attrs.into();
    }
}

/// Apply a style to all cells in a rectangular area.
///
/// This modifies existing cells, preserving their content.
pub(crate) fn set_style_area(buf: &mut Buffer, area: Rect, style: Style) {
    if style.is_empty() {
        return;
    }
    for y in area.y..area.bottom() {
        for x in area.x..area.right() {
            if let Some(cell) = buf.get_mut(x, y) {
                apply_style(cell, style);
            }
        }
    }
}

/// Composite a translucent color over the background of every cell in an
/// area. Cell content and foregrounds are preserved, which keeps text under
/// the overlay legible.
pub(crate) fn composite_bg_area(buf: &mut Buffer, area: Rect, color: PackedRgba) {
    if color.is_transparent() {
        return;
    }
    for y in area.y..area.bottom() {
        for x in area.x..area.right() {
            if let Some(cell) = buf.get_mut(x, y) {
                cell.bg = color.over(cell.bg);
            }
        }
    }
}

/// Draw a text span into a frame at the given position.
///
/// Returns the x position after the last drawn character.
/// Stops at `max_x` (exclusive).
pub(crate) fn draw_text_span(
    frame: &mut Frame,
    mut x: u16,
    y: u16,
    content: &str,
    style: Style,
    max_x: u16,
) -> u16 {
    use unicode_segmentation::UnicodeSegmentation;
    use unicode_width::UnicodeWidthStr;

    for grapheme in content.graphemes(true) {
        if x >= max_x {
            break;
        }
        let w = UnicodeWidthStr::width(grapheme);
        if w == 0 {
            continue;
        }
        if x.saturating_add(w as u16) > max_x {
            break;
        }

        // Multi-codepoint or wide clusters go through the pool.
        let cell_content = if w > 1 || grapheme.chars().count() > 1 {
            let id = frame.intern_with_width(grapheme, w as u8);
            CellContent::from_grapheme(id)
        } else if let Some(c) = grapheme.chars().next() {
            CellContent::from_char(c)
        } else {
            continue;
        };

        let mut cell = Cell::new(cell_content);
        apply_style(&mut cell, style);
        frame.buffer.set(x, y, cell);

        x = x.saturating_add(w as u16);
    }
    x
}
