//! Line lookups

use text_surface::TextSurface;

use crate::CoordinateNormalizer;

impl<S: TextSurface + ?Sized> CoordinateNormalizer<'_, S> {
    /// Clamp a line into `[0, effective_line_count - 1]`
    pub fn normalize_line(&self, line: isize) -> usize {
        let last = self.effective_line_count().saturating_sub(1);
        usize::try_from(line).map_or(0, |line| line.min(last))
    }

    /// Logical line of a rendered line, clamped to the document
    pub fn visual_to_logical_line(&self, visual_line: usize) -> usize {
        let logical = self.surface.visual_to_logical_line(visual_line);
        self.normalize_line(crate::signed(logical))
    }

    /// Offset where `line` starts.
    ///
    /// Lines before the document give 0 and lines past it give the effective
    /// size; they are not clamped onto a real line.
    pub fn line_start_offset(&self, line: isize) -> usize {
        let Ok(line) = usize::try_from(line) else {
            return 0;
        };
        if line >= self.effective_line_count() {
            return self.effective_size(false);
        }
        self.surface.line_start_offset(line)
    }

    /// Offset where `line` ends, by default the offset of its last character
    pub fn line_end_offset(&self, line: isize, include_newline: bool) -> usize {
        let Ok(line) = usize::try_from(line) else {
            return 0;
        };
        if line >= self.effective_line_count() {
            return self.effective_size(false);
        }

        let end = self.surface.line_end_offset(line);
        if include_newline {
            end
        } else {
            end.saturating_sub(1)
        }
    }

    /// Logical line containing `offset`
    pub fn line_at_offset(&self, offset: isize) -> usize {
        let count = self.effective_line_count();
        let Ok(offset) = usize::try_from(offset) else {
            return 0;
        };
        if count == 0 {
            return 0;
        }
        if offset >= self.effective_size(false) {
            return count - 1;
        }

        // start(lo) <= offset < start(hi)
        let (mut lo, mut hi) = (0, count);
        while hi - lo > 1 {
            let mid = lo + (hi - lo) / 2;
            if self.surface.line_start_offset(mid) <= offset {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        lo
    }
}

#[cfg(test)]
mod tests {
    use crate::fake::{document, FakeSurface};
    use crate::CoordinateNormalizer;

    const TEXT: &str = "one\ntwo\nthree\n";

    #[test]
    fn test_normalize_line_clamps() {
        let doc = document(TEXT);
        let coords = CoordinateNormalizer::new(&doc);

        assert_eq!(coords.normalize_line(-5), 0);
        assert_eq!(coords.normalize_line(-1), 0);
        assert_eq!(coords.normalize_line(0), 0);
        assert_eq!(coords.normalize_line(2), 2);
        assert_eq!(coords.normalize_line(3), 2);
        assert_eq!(coords.normalize_line(isize::MAX), 2);
    }

    #[test]
    fn test_normalize_line_with_no_lines() {
        let host = FakeSurface::new("").with_reported_lines(0);
        let coords = CoordinateNormalizer::new(&host);
        assert_eq!(coords.normalize_line(4), 0);
    }

    #[test]
    fn test_visual_to_logical_clamps_host_answer() {
        let host = FakeSurface::new("a\nb\n").with_visual_map(|_| 40);
        let coords = CoordinateNormalizer::new(&host);
        assert_eq!(coords.visual_to_logical_line(0), 1);
    }

    #[test]
    fn test_line_start_boundaries() {
        let doc = document(TEXT);
        let coords = CoordinateNormalizer::new(&doc);

        assert_eq!(coords.line_start_offset(-1), 0);
        assert_eq!(coords.line_start_offset(0), 0);
        assert_eq!(coords.line_start_offset(1), 4);
        assert_eq!(coords.line_start_offset(2), 8);
        // past the end: effective size, not the start of the last line
        assert_eq!(coords.line_start_offset(3), 13);
        assert_eq!(coords.line_start_offset(100), 13);
    }

    #[test]
    fn test_line_end_excludes_terminator_by_default() {
        let doc = document(TEXT);
        let coords = CoordinateNormalizer::new(&doc);

        assert_eq!(coords.line_end_offset(0, false), 2);
        assert_eq!(coords.line_end_offset(0, true), 3);
        assert_eq!(coords.line_end_offset(2, false), 12);
        assert_eq!(coords.line_end_offset(2, true), 13);
    }

    #[test]
    fn test_line_end_boundaries() {
        let doc = document(TEXT);
        let coords = CoordinateNormalizer::new(&doc);

        assert_eq!(coords.line_end_offset(-3, true), 0);
        assert_eq!(coords.line_end_offset(3, false), 13);
        assert_eq!(coords.line_end_offset(3, true), 13);
    }

    #[test]
    fn test_line_end_of_leading_empty_line_saturates() {
        let doc = document("\nabc");
        let coords = CoordinateNormalizer::new(&doc);
        assert_eq!(coords.line_end_offset(0, false), 0);
    }

    #[test]
    fn test_line_at_offset() {
        let doc = document(TEXT);
        let coords = CoordinateNormalizer::new(&doc);

        assert_eq!(coords.line_at_offset(-1), 0);
        assert_eq!(coords.line_at_offset(0), 0);
        assert_eq!(coords.line_at_offset(3), 0);
        assert_eq!(coords.line_at_offset(4), 1);
        assert_eq!(coords.line_at_offset(7), 1);
        assert_eq!(coords.line_at_offset(8), 2);
        assert_eq!(coords.line_at_offset(12), 2);
        assert_eq!(coords.line_at_offset(13), 2);
        assert_eq!(coords.line_at_offset(500), 2);
    }

    #[test]
    fn test_line_at_offset_agrees_with_line_start() {
        let doc = document("alpha\n\nbeta\ngamma delta\n\n");
        let coords = CoordinateNormalizer::new(&doc);

        for line in 0..coords.effective_line_count() {
            let start = coords.line_start_offset(line as isize);
            assert_eq!(coords.line_at_offset(start as isize), line);
        }
    }
}
