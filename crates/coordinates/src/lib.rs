//! # Linemap Coordinates
//!
//! Conversions between visual lines, logical lines and character offsets of
//! a [`TextSurface`], plus the character range currently on screen.
//!
//! Nothing here fails: inputs outside the document resolve to a boundary
//! value (0, the last line, or the document size).

mod line;
mod offset;
mod range;
mod viewport;

#[cfg(test)]
mod fake;

pub use range::VisibleRange;
pub use text_surface::TextSurface;

/// Coordinate normalizer over a borrowed text surface
pub struct CoordinateNormalizer<'a, S: ?Sized> {
    surface: &'a S,
}

impl<'a, S: TextSurface + ?Sized> CoordinateNormalizer<'a, S> {
    pub fn new(surface: &'a S) -> Self {
        Self { surface }
    }

    /// Get the underlying surface
    pub fn surface(&self) -> &'a S {
        self.surface
    }

    /// Line count, not counting the empty line after a final newline
    pub fn effective_line_count(&self) -> usize {
        let count = self.surface.line_count();
        if self.surface.ends_with_newline() {
            count.saturating_sub(1)
        } else {
            count
        }
    }

    /// Document length, optionally dropping a final newline
    pub fn effective_size(&self, include_trailing_newline: bool) -> usize {
        let len = self.surface.text_length();
        if len > 0 && !include_trailing_newline && self.surface.ends_with_newline() {
            len - 1
        } else {
            len
        }
    }
}

impl<S: ?Sized> Clone for CoordinateNormalizer<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ?Sized> Copy for CoordinateNormalizer<'_, S> {}

pub(crate) fn signed(value: usize) -> isize {
    isize::try_from(value).unwrap_or(isize::MAX)
}
