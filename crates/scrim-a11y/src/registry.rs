#![forbid(unsafe_code)]

//! The per-frame accessibility registry.
//!
//! Widgets that expose semantics register an [`AccessibleProps`] node for
//! the area they rendered into. The registry runs parallel to the frame:
//! the application clears it at the start of a render pass and hands it to
//! whatever assistive bridge it drives.
//!
//! Like the hit grid, overlap resolves to the most recently registered
//! node, matching paint order.

use std::collections::HashMap;

use scrim_core::geometry::Rect;

/// Semantic role of an accessible node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// An activatable control.
    Button,
    /// A modal dialog surface.
    Dialog,
    /// Plain readable text.
    Text,
}

/// Accessibility properties for one rendered node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessibleProps {
    pub role: Role,
    pub label: String,
    /// Hidden nodes stay queryable by id but are skipped by position
    /// lookups and iteration.
    pub hidden: bool,
}

impl AccessibleProps {
    /// Create visible props with a role and label.
    #[must_use]
    pub fn new(role: Role, label: impl Into<String>) -> Self {
        Self {
            role,
            label: label.into(),
            hidden: false,
        }
    }

    /// Mark the node hidden from assistive output.
    #[must_use]
    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }
}

/// Identifies a registered accessibility node within one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct A11yId(u32);

impl A11yId {
    /// The raw id value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// One registered node: id, screen area, and semantics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct A11yNode {
    pub id: A11yId,
    pub area: Rect,
    pub props: AccessibleProps,
}

/// Frame-parallel registry of accessible nodes.
#[derive(Debug, Clone, Default)]
pub struct A11yRegistry {
    next_id: u32,
    nodes: Vec<A11yNode>,
    index: HashMap<u32, usize, ahash::RandomState>,
}

impl A11yRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node and allocate its id.
    ///
    /// Empty areas register fine; they are simply unreachable by position.
    pub fn register(&mut self, area: Rect, props: AccessibleProps) -> A11yId {
        let id = A11yId(self.next_id);
        self.next_id += 1;
        self.index.insert(id.0, self.nodes.len());
        self.nodes.push(A11yNode { id, area, props });
        id
    }

    /// Look up a node by id.
    #[must_use]
    pub fn get(&self, id: A11yId) -> Option<&A11yNode> {
        self.index.get(&id.0).map(|&i| &self.nodes[i])
    }

    /// The topmost visible node covering a position.
    #[must_use]
    pub fn node_at(&self, x: u16, y: u16) -> Option<&A11yNode> {
        self.nodes
            .iter()
            .rev()
            .find(|node| !node.props.hidden && node.area.contains(x, y))
    }

    /// Visible nodes in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &A11yNode> {
        self.nodes.iter().filter(|node| !node.props.hidden)
    }

    /// Drop all nodes. Ids are not reused across clears.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.index.clear();
    }

    /// Number of registered nodes, hidden ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the registry holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
