#![forbid(unsafe_code)]

//! Cell-grid geometry.
//!
//! Coordinates are `u16` cell positions (column, row). All arithmetic
//! saturates at the grid edges; a `Rect` can never describe a region outside
//! the addressable `u16` space.

/// A rectangular region of the cell grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    /// A zero-sized rectangle at the origin.
    pub const ZERO: Rect = Rect::new(0, 0, 0, 0);

    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// First column to the right of the rectangle (exclusive).
    #[must_use]
    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// First row below the rectangle (exclusive).
    #[must_use]
    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    /// Number of cells covered.
    #[must_use]
    pub const fn area(&self) -> u32 {
        self.width as u32 * self.height as u32
    }

    /// Whether the rectangle covers no cells.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Whether the given cell position lies inside the rectangle.
    #[must_use]
    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// The overlapping region of two rectangles, or `Rect::ZERO` if disjoint.
    #[must_use]
    pub fn intersection(&self, other: Rect) -> Rect {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = self.right().min(other.right());
        let y2 = self.bottom().min(other.bottom());
        if x2 <= x1 || y2 <= y1 {
            return Rect::ZERO;
        }
        Rect::new(x1, y1, x2 - x1, y2 - y1)
    }

    /// Whether two rectangles share at least one cell.
    #[must_use]
    pub fn intersects(&self, other: Rect) -> bool {
        !self.intersection(other).is_empty()
    }

    /// Shrink the rectangle by `margin` cells on every side.
    ///
    /// Collapses to an empty rectangle centered on the original when the
    /// margin eats the whole extent.
    #[must_use]
    pub fn inner(&self, margin: u16) -> Rect {
        let shrink = margin.saturating_mul(2);
        if self.width <= shrink || self.height <= shrink {
            return Rect::new(
                self.x.saturating_add(self.width / 2),
                self.y.saturating_add(self.height / 2),
                0,
                0,
            );
        }
        Rect::new(
            self.x + margin,
            self.y + margin,
            self.width - shrink,
            self.height - shrink,
        )
    }
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

impl Size {
    /// Create a new size.
    #[must_use]
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Whether either dimension is zero.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl From<Rect> for Size {
    fn from(rect: Rect) -> Self {
        Size::new(rect.width, rect.height)
    }
}
