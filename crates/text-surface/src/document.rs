//! In-memory document surface

use crate::config::{SoftWrap, SurfaceConfig};
use crate::error::SurfaceError;
use crate::geometry::ViewportGeometry;
use crate::wrap::WrapLayout;
use crate::TextSurface;

/// A document held in memory together with its viewport
#[derive(Debug, Clone)]
pub struct DocumentSurface {
    /// Document text, one entry per character
    chars: Vec<char>,
    /// Offset of the first character of each line
    line_starts: Vec<usize>,
    /// Viewport geometry
    geometry: ViewportGeometry,
    /// Soft wrap mode
    soft_wrap: SoftWrap,
    /// Visual row layout
    layout: WrapLayout,
}

impl DocumentSurface {
    pub fn new(text: &str, config: SurfaceConfig) -> Result<Self, SurfaceError> {
        config.validate()?;

        let mut surface = Self {
            chars: Vec::new(),
            line_starts: vec![0],
            geometry: ViewportGeometry::new(config.viewport_height, config.line_height),
            soft_wrap: config.soft_wrap,
            layout: WrapLayout::default(),
        };
        surface.set_text(text);
        Ok(surface)
    }

    /// Replace the document text
    pub fn set_text(&mut self, text: &str) {
        self.chars = text.chars().collect();
        self.line_starts = std::iter::once(0)
            .chain(
                self.chars
                    .iter()
                    .enumerate()
                    .filter(|(_, c)| **c == '\n')
                    .map(|(i, _)| i + 1),
            )
            .collect();
        self.relayout();
    }

    /// Change soft wrap mode
    pub fn set_soft_wrap(&mut self, soft_wrap: SoftWrap) -> Result<(), SurfaceError> {
        soft_wrap.validate()?;
        self.soft_wrap = soft_wrap;
        self.relayout();
        Ok(())
    }

    /// Scroll so the visible area starts at `y`
    pub fn scroll_to(&mut self, y: u32) {
        self.geometry.scroll_offset_y = y;
        self.geometry.viewport_y = y;
    }

    /// Update viewport height
    pub fn set_viewport_height(&mut self, height: u32) {
        self.geometry.viewport_height = height;
    }

    /// Get soft wrap mode
    pub fn soft_wrap(&self) -> SoftWrap {
        self.soft_wrap
    }

    /// Get document text
    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    /// First visual row of a logical line
    pub fn logical_to_visual_line(&self, line: usize) -> usize {
        self.layout.line_to_row(line)
    }

    /// Total visual rows
    pub fn visual_line_count(&self) -> usize {
        self.layout.total_rows()
    }

    fn relayout(&mut self) {
        let lengths = (0..self.line_starts.len())
            .map(|line| self.line_end_offset(line) - self.line_start_offset(line));
        let layout = WrapLayout::new(lengths, self.soft_wrap);
        self.layout = layout;

        tracing::debug!(
            lines = self.line_starts.len(),
            rows = self.layout.total_rows(),
            "Rebuilt document layout"
        );
    }
}

impl TextSurface for DocumentSurface {
    fn text_length(&self) -> usize {
        self.chars.len()
    }

    fn char_at(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    fn line_start_offset(&self, line: usize) -> usize {
        self.line_starts
            .get(line)
            .copied()
            .unwrap_or(self.chars.len())
    }

    fn line_end_offset(&self, line: usize) -> usize {
        // The next line starts right after this line's terminator
        match self.line_starts.get(line.saturating_add(1)) {
            Some(next) => next - 1,
            None => self.chars.len(),
        }
    }

    fn scroll_offset_y(&self) -> u32 {
        self.geometry.scroll_offset_y
    }

    fn viewport_y(&self) -> u32 {
        self.geometry.viewport_y
    }

    fn viewport_height(&self) -> u32 {
        self.geometry.viewport_height
    }

    fn line_height(&self) -> u32 {
        self.geometry.line_height
    }

    fn visual_to_logical_line(&self, visual_line: usize) -> usize {
        self.layout.row_to_line(visual_line)
    }

    fn geometry(&self) -> ViewportGeometry {
        self.geometry
    }
}
