#![forbid(unsafe_code)]

//! A frame: a buffer plus per-frame metadata.
//!
//! Widgets render into a [`Frame`], which couples the cell [`Buffer`] with
//! the metadata a single render pass produces:
//!
//! - an optional hit grid mapping pointer positions back to widgets,
//! - the grapheme pool used for multi-codepoint cell content,
//! - scrape-hidden regions that the text extraction walk must skip,
//! - selection-suppressed regions that drag-selection must ignore.
//!
//! # Invariants
//!
//! 1. **Later registrations win**: `hit_test` resolves overlapping hit
//!    regions to the most recently registered one, matching paint order.
//!
//! 2. **Empty areas are inert**: registering a hit or marker over an empty
//!    rectangle records nothing.

use scrim_core::geometry::Rect;
use smallvec::SmallVec;

use crate::buffer::Buffer;
use crate::grapheme_pool::GraphemePool;

/// Identifies the widget that registered a hit region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HitId(u32);

impl HitId {
    /// Create a hit id from a raw value chosen by the application.
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// Distinguishes sub-regions within a single widget's hit area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HitRegion {
    /// The widget's main content area.
    Content,
    /// A widget-defined sub-region.
    Custom(u16),
}

/// Widget-defined payload carried with a hit region.
pub type HitData = u32;

#[derive(Debug, Clone, Copy)]
struct HitEntry {
    area: Rect,
    id: HitId,
    region: HitRegion,
    data: HitData,
}

/// A render target for one frame: buffer, hit grid, pool, and markers.
#[derive(Debug)]
pub struct Frame<'a> {
    /// The cell grid widgets draw into.
    pub buffer: Buffer,
    pool: &'a mut GraphemePool,
    hits: Option<SmallVec<[HitEntry; 8]>>,
    scrape_hidden: SmallVec<[Rect; 4]>,
    selection_suppressed: SmallVec<[Rect; 4]>,
}

impl<'a> Frame<'a> {
    /// Create a frame without a hit grid. Hit registrations are ignored.
    #[must_use]
    pub fn new(width: u16, height: u16, pool: &'a mut GraphemePool) -> Self {
        Self {
            buffer: Buffer::new(width, height),
            pool,
            hits: None,
            scrape_hidden: SmallVec::new(),
            selection_suppressed: SmallVec::new(),
        }
    }

    /// Create a frame with hit testing enabled.
    #[must_use]
    pub fn with_hit_grid(width: u16, height: u16, pool: &'a mut GraphemePool) -> Self {
        Self {
            hits: Some(SmallVec::new()),
            ..Self::new(width, height, pool)
        }
    }

    /// Frame width in cells.
    #[must_use]
    pub fn width(&self) -> u16 {
        self.buffer.width()
    }

    /// Frame height in cells.
    #[must_use]
    pub fn height(&self) -> u16 {
        self.buffer.height()
    }

    /// The full frame area.
    #[must_use]
    pub fn area(&self) -> Rect {
        self.buffer.area()
    }

    /// Whether this frame records hit regions.
    #[must_use]
    pub fn has_hit_grid(&self) -> bool {
        self.hits.is_some()
    }

    /// Intern a grapheme cluster with a precomputed display width.
    pub fn intern_with_width(&mut self, text: &str, width: u8) -> u32 {
        self.pool.intern_with_width(text, width)
    }

    /// The cluster text for a pooled grapheme id.
    #[must_use]
    pub fn grapheme(&self, id: u32) -> Option<&str> {
        self.pool.get(id)
    }

    /// The display width recorded for a pooled grapheme id.
    #[must_use]
    pub fn grapheme_width(&self, id: u32) -> u8 {
        self.pool.width(id)
    }

    /// Register a hit region.
    ///
    /// Ignored when the frame has no hit grid or `area` is empty. Regions
    /// registered later shadow earlier ones where they overlap.
    pub fn register_hit(&mut self, area: Rect, id: HitId, region: HitRegion, data: HitData) {
        if area.is_empty() {
            return;
        }
        if let Some(hits) = &mut self.hits {
            hits.push(HitEntry {
                area,
                id,
                region,
                data,
            });
        }
    }

    /// Resolve a position to the topmost hit region covering it.
    #[must_use]
    pub fn hit_test(&self, x: u16, y: u16) -> Option<(HitId, HitRegion, HitData)> {
        let hits = self.hits.as_ref()?;
        hits.iter()
            .rev()
            .find(|entry| entry.area.contains(x, y))
            .map(|entry| (entry.id, entry.region, entry.data))
    }

    /// Number of registered hit regions.
    #[must_use]
    pub fn hit_count(&self) -> usize {
        self.hits.as_ref().map_or(0, SmallVec::len)
    }

    /// Mark an area as hidden from text extraction.
    pub fn mark_scrape_hidden(&mut self, area: Rect) {
        if !area.is_empty() {
            self.scrape_hidden.push(area);
        }
    }

    /// Whether a position is covered by a scrape-hidden marker.
    #[must_use]
    pub fn is_scrape_hidden(&self, x: u16, y: u16) -> bool {
        self.scrape_hidden.iter().any(|r| r.contains(x, y))
    }

    /// All scrape-hidden regions, in registration order.
    #[must_use]
    pub fn scrape_hidden_regions(&self) -> &[Rect] {
        &self.scrape_hidden
    }

    /// Mark an area as excluded from drag selection.
    pub fn mark_selection_suppressed(&mut self, area: Rect) {
        if !area.is_empty() {
            self.selection_suppressed.push(area);
        }
    }

    /// Whether a position is covered by a selection-suppression marker.
    #[must_use]
    pub fn is_selection_suppressed(&self, x: u16, y: u16) -> bool {
        self.selection_suppressed.iter().any(|r| r.contains(x, y))
    }

    /// All selection-suppressed regions, in registration order.
    #[must_use]
    pub fn selection_suppressed_regions(&self) -> &[Rect] {
        &self.selection_suppressed
    }

    /// Reset the frame for reuse: clears cells, hits, and markers.
    ///
    /// The grapheme pool is left intact; interned ids stay valid.
    pub fn clear(&mut self) {
        self.buffer.clear();
        if let Some(hits) = &mut self.hits {
            hits.clear();
        }
        self.scrape_hidden.clear();
        self.selection_suppressed.clear();
    }
}
