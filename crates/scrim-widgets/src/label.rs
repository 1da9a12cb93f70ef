#![forbid(unsafe_code)]

//! Single-line text label.

use scrim_core::geometry::Rect;
use scrim_render::frame::Frame;
use scrim_style::Style;

use crate::{Widget, draw_text_span};

/// A single line of styled text, clipped to its area.
///
/// Drawn on the area's top row; extra rows are left untouched. Useful as
/// custom backdrop content and for captions inside overlays.
#[derive(Debug, Clone)]
pub struct Label<'a> {
    text: &'a str,
    style: Style,
}

impl<'a> Label<'a> {
    /// Create a label with the default style.
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            style: Style::new(),
        }
    }

    /// Set the text style.
    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl Widget for Label<'_> {
    fn render(&self, area: Rect, frame: &mut Frame) {
        if area.is_empty() {
            return;
        }
        draw_text_span(frame, area.x, area.y, self.text, self.style, area.right());
    }
}
