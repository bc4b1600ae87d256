//! Visible range

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Characters currently on screen, both ends inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct VisibleRange {
    pub start: usize,
    pub end: usize,
}

impl VisibleRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset <= self.end
    }

    /// Number of characters covered.
    ///
    /// Both ends count, so this is never 0. An empty document also yields
    /// `(0, 0)` and reports 1; check the surface's text length to tell the
    /// two apart.
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    pub fn as_range(&self) -> RangeInclusive<usize> {
        self.start..=self.end
    }
}

impl From<VisibleRange> for (usize, usize) {
    fn from(range: VisibleRange) -> Self {
        (range.start, range.end)
    }
}
