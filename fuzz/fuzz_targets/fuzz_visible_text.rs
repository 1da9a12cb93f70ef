#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use scrim_core::geometry::Rect;
use scrim_render::cell::{Cell, CellContent};
use scrim_render::extract::{is_selectable, visible_text};
use scrim_render::frame::Frame;
use scrim_render::grapheme_pool::GraphemePool;

#[derive(Debug, Arbitrary)]
enum Op {
    Put {
        x: u16,
        y: u16,
        c: char,
    },
    Intern {
        x: u16,
        y: u16,
        text: String,
        width: u8,
    },
    HideScrape {
        x: u16,
        y: u16,
        width: u16,
        height: u16,
    },
    SuppressSelection {
        x: u16,
        y: u16,
        width: u16,
        height: u16,
    },
}

#[derive(Debug, Arbitrary)]
struct Plan {
    width: u16,
    height: u16,
    ops: Vec<Op>,
    probes: Vec<(u16, u16)>,
}

fuzz_target!(|plan: Plan| {
    let frame_width = plan.width % 128;
    let frame_height = plan.height % 64;
    let mut pool = GraphemePool::new();
    let mut frame = Frame::new(frame_width, frame_height, &mut pool);

    for op in &plan.ops {
        match op {
            Op::Put { x, y, c } => {
                frame.buffer.set(*x, *y, Cell::from_char(*c));
            }
            Op::Intern { x, y, text, width } => {
                // Clusters written by draw paths never contain control
                // characters, so the extraction walk may assume none.
                let clean: String = text.chars().filter(|c| !c.is_control()).collect();
                if clean.is_empty() {
                    continue;
                }
                let id = frame.intern_with_width(&clean, *width);
                let cell = Cell::new(CellContent::from_grapheme(id));
                frame.buffer.set(*x, *y, cell);
            }
            Op::HideScrape {
                x,
                y,
                width,
                height,
            } => {
                frame.mark_scrape_hidden(Rect::new(*x, *y, *width, *height));
            }
            Op::SuppressSelection {
                x,
                y,
                width,
                height,
            } => {
                frame.mark_selection_suppressed(Rect::new(*x, *y, *width, *height));
            }
        }
    }

    let text = visible_text(&frame);
    assert!(
        text.lines().count() <= frame_height as usize,
        "extraction produced more rows than the frame has"
    );

    for &(x, y) in &plan.probes {
        let selectable = is_selectable(&frame, x, y);
        if x >= frame_width || y >= frame_height {
            assert!(!selectable, "({x},{y}) is outside the frame");
        }
        if selectable {
            assert!(!frame.is_selection_suppressed(x, y));
        }
    }
});
