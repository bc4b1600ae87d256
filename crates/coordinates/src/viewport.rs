//! Viewport queries

use text_surface::TextSurface;

use crate::{signed, CoordinateNormalizer, VisibleRange};

impl<S: TextSurface + ?Sized> CoordinateNormalizer<'_, S> {
    /// First visual line at least partly below the scroll origin
    pub fn top_visual_line(&self) -> usize {
        self.line_height()
            .map_or(0, |line_height| self.top_row(line_height) as usize)
    }

    /// Number of whole visual lines between the top line and the viewport bottom
    pub fn visible_line_span(&self) -> usize {
        let Some(line_height) = self.line_height() else {
            return 0;
        };
        let geometry = self.surface.geometry();
        let top = self.top_row(line_height) * line_height;
        (geometry.viewport_bottom().saturating_sub(top) / line_height) as usize
    }

    /// First and last visible logical lines
    pub fn visible_lines(&self) -> (usize, usize) {
        let top = self.top_visual_line();
        let first = self.visual_to_logical_line(top);
        let last = self.visual_to_logical_line(top.saturating_add(self.visible_line_span()));
        (first, last)
    }

    /// Characters currently on screen
    pub fn visible_range(&self) -> VisibleRange {
        let Some(max_offset) = self.surface.text_length().checked_sub(1) else {
            return VisibleRange::default();
        };

        let (first_line, last_line) = self.visible_lines();
        let start = self.line_start_offset(signed(first_line));

        let last_line = signed(last_line);
        let end = self.line_end_offset(last_line, true);
        let end = self.normalize_offset(last_line, signed(end), true);
        let end = end.saturating_add(1).min(max_offset);

        tracing::trace!(first_line, last_line, start, end, "Computed visible range");

        VisibleRange::new(start, end)
    }

    fn top_row(&self, line_height: u64) -> u64 {
        let scroll = self.surface.scroll_offset_y() as u64;
        (scroll + line_height - 1) / line_height
    }

    fn line_height(&self) -> Option<u64> {
        match self.surface.line_height() {
            0 => {
                tracing::warn!("Text surface reported a zero line height");
                None
            }
            height => Some(height as u64),
        }
    }
}
