//! Offset clamping

use text_surface::TextSurface;

use crate::CoordinateNormalizer;

impl<S: TextSurface + ?Sized> CoordinateNormalizer<'_, S> {
    /// Force `offset` onto the characters of `line`.
    ///
    /// With `allow_past_end` the position just after the last character (a
    /// caret at the end of the line) is accepted. When the line's end falls
    /// before its start (an empty line) the start wins.
    pub fn normalize_offset(&self, line: isize, offset: isize, allow_past_end: bool) -> usize {
        if self.effective_size(allow_past_end) == 0 {
            return 0;
        }

        let start = self.line_start_offset(line);
        let end = self.line_end_offset(line, allow_past_end);
        let offset = usize::try_from(offset).unwrap_or(0);

        offset.min(end).max(start)
    }
}
