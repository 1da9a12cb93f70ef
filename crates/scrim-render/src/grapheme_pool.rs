#![forbid(unsafe_code)]

//! Interning pool for multi-codepoint grapheme clusters.
//!
//! Cells store 4 bytes of content. Clusters that do not fit (emoji, combining
//! sequences, wide CJK handled through the pooled path) are interned here and
//! referenced by a 24-bit id. Interning the same cluster twice returns the
//! same id.

use std::collections::HashMap;

const MAX_IDS: usize = 0x00FF_FFFF;

#[derive(Debug, Clone)]
struct PoolEntry {
    text: String,
    width: u8,
}

/// Deduplicating store for grapheme clusters and their display widths.
#[derive(Debug, Default)]
pub struct GraphemePool {
    entries: Vec<PoolEntry>,
    index: HashMap<String, u32, ahash::RandomState>,
}

impl GraphemePool {
    /// Create an empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a cluster with a precomputed display width.
    ///
    /// Returns the existing id when the cluster is already pooled. Ids are
    /// 24-bit; once the pool is full, the last id is reused rather than
    /// growing past the addressable range.
    pub fn intern_with_width(&mut self, text: &str, width: u8) -> u32 {
        if let Some(&id) = self.index.get(text) {
            return id;
        }
        if self.entries.len() >= MAX_IDS {
            return (self.entries.len() - 1) as u32;
        }
        let id = self.entries.len() as u32;
        self.entries.push(PoolEntry {
            text: text.to_owned(),
            width,
        });
        self.index.insert(text.to_owned(), id);
        id
    }

    /// The cluster text for an id.
    #[must_use]
    pub fn get(&self, id: u32) -> Option<&str> {
        self.entries.get(id as usize).map(|e| e.text.as_str())
    }

    /// The display width recorded for an id. Unknown ids report 0.
    #[must_use]
    pub fn width(&self, id: u32) -> u8 {
        self.entries.get(id as usize).map_or(0, |e| e.width)
    }

    /// Number of pooled clusters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the pool is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intern_returns_stable_ids() {
        let mut pool = GraphemePool::new();
        let a = pool.intern_with_width("🦀", 2);
        let b = pool.intern_with_width("你", 2);
        assert_ne!(a, b);
        assert_eq!(pool.get(a), Some("🦀"));
        assert_eq!(pool.get(b), Some("你"));
    }

    #[test]
    fn intern_deduplicates() {
        let mut pool = GraphemePool::new();
        let first = pool.intern_with_width("é", 1);
        let second = pool.intern_with_width("é", 1);
        assert_eq!(first, second);
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn width_is_recorded() {
        let mut pool = GraphemePool::new();
        let id = pool.intern_with_width("字", 2);
        assert_eq!(pool.width(id), 2);
    }

    #[test]
    fn unknown_id_yields_nothing() {
        let pool = GraphemePool::new();
        assert_eq!(pool.get(99), None);
        assert_eq!(pool.width(99), 0);
        assert!(pool.is_empty());
    }
}
