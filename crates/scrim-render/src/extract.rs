#![forbid(unsafe_code)]

//! Plain-text extraction from a rendered frame.
//!
//! `visible_text` walks the buffer row-major and reconstructs the text a
//! screen scraper would read. Cells inside a scrape-hidden region contribute
//! blank space, never their content. `is_selectable` answers whether drag
//! selection may include a cell, honoring selection-suppression markers.

use unicode_width::UnicodeWidthChar;

use crate::frame::Frame;

/// Extract the scrape-visible text of a frame.
///
/// Pooled grapheme clusters are emitted once at their anchor cell and their
/// continuation cells are skipped. Empty cells become spaces so column
/// positions survive extraction. Trailing blanks are trimmed per row and
/// trailing blank rows are dropped.
#[must_use]
pub fn visible_text(frame: &Frame) -> String {
    #[cfg(feature = "tracing")]
    let _span = tracing::trace_span!(
        "visible_text",
        width = frame.width(),
        height = frame.height()
    )
    .entered();

    let mut rows: Vec<String> = Vec::with_capacity(frame.height() as usize);
    for y in 0..frame.height() {
        let mut line = String::with_capacity(frame.width() as usize);
        let mut x = 0u16;
        while x < frame.width() {
            if frame.is_scrape_hidden(x, y) {
                line.push(' ');
                x += 1;
                continue;
            }
            let Some(cell) = frame.buffer.get(x, y) else {
                break;
            };
            if let Some(id) = cell.content.as_grapheme_id() {
                if let Some(text) = frame.grapheme(id) {
                    line.push_str(text);
                }
                x = x.saturating_add(u16::from(frame.grapheme_width(id).max(1)));
            } else if let Some(c) = cell.content.as_char() {
                line.push(c);
                let advance = UnicodeWidthChar::width(c).unwrap_or(1).max(1);
                x = x.saturating_add(advance as u16);
            } else {
                line.push(' ');
                x += 1;
            }
        }
        rows.push(line.trim_end().to_string());
    }

    while rows.last().is_some_and(|row| row.is_empty()) {
        rows.pop();
    }
    rows.join("\n")
}

/// Whether drag selection may include the cell at `(x, y)`.
///
/// Positions outside the frame are never selectable.
#[must_use]
pub fn is_selectable(frame: &Frame, x: u16, y: u16) -> bool {
    x < frame.width() && y < frame.height() && !frame.is_selection_suppressed(x, y)
}
