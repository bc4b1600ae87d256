//! Viewport geometry

use serde::{Deserialize, Serialize};

/// Default line height in pixels
pub(crate) const DEFAULT_LINE_HEIGHT: u32 = 20;

/// Pixel geometry of the visible area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewportGeometry {
    /// Current scroll top
    pub scroll_offset_y: u32,
    /// Top of the visible area
    pub viewport_y: u32,
    /// Height of the visible area
    pub viewport_height: u32,
    /// Line height
    pub line_height: u32,
}

impl ViewportGeometry {
    pub fn new(viewport_height: u32, line_height: u32) -> Self {
        Self {
            scroll_offset_y: 0,
            viewport_y: 0,
            viewport_height,
            line_height,
        }
    }

    /// Bottom edge of the visible area
    pub fn viewport_bottom(&self) -> u64 {
        self.viewport_y as u64 + self.viewport_height as u64
    }
}

impl Default for ViewportGeometry {
    fn default() -> Self {
        Self::new(0, DEFAULT_LINE_HEIGHT)
    }
}
