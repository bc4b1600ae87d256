//! # Linemap Text Surface
//!
//! The read-only view of an editor that coordinate conversions are computed
//! against, plus an in-memory document that implements it.

mod config;
mod document;
mod error;
mod geometry;
mod wrap;

pub use config::{SoftWrap, SurfaceConfig};
pub use document::DocumentSurface;
pub use error::SurfaceError;
pub use geometry::ViewportGeometry;
pub use wrap::WrapLayout;

/// Text surface - an editor pane as seen by coordinate conversions
///
/// Offsets are character indices into the flattened document. Lines are
/// zero-based. Implementations are borrowed for the duration of a single
/// query and are never mutated through this trait.
pub trait TextSurface {
    /// Total length of the document in characters
    fn text_length(&self) -> usize;

    /// Character at `index`, `None` past the end
    fn char_at(&self, index: usize) -> Option<char>;

    /// Number of logical lines.
    ///
    /// A document ending in a newline reports the empty line after it, and
    /// an empty document reports a single line.
    fn line_count(&self) -> usize;

    /// Offset of the first character of `line`
    fn line_start_offset(&self, line: usize) -> usize;

    /// Offset just past the last character of `line`, excluding its terminator
    fn line_end_offset(&self, line: usize) -> usize;

    /// Vertical scroll position in pixels
    fn scroll_offset_y(&self) -> u32;

    /// Top of the visible area in pixels
    fn viewport_y(&self) -> u32;

    /// Height of the visible area in pixels
    fn viewport_height(&self) -> u32;

    /// Height of a single rendered line in pixels
    fn line_height(&self) -> u32;

    /// Logical line that a rendered (possibly soft-wrapped) line belongs to
    fn visual_to_logical_line(&self, visual_line: usize) -> usize;

    /// Last character of the document
    fn last_char(&self) -> Option<char> {
        self.text_length()
            .checked_sub(1)
            .and_then(|index| self.char_at(index))
    }

    /// Does the document end with a line terminator?
    fn ends_with_newline(&self) -> bool {
        self.last_char() == Some('\n')
    }

    /// Snapshot of the viewport geometry
    fn geometry(&self) -> ViewportGeometry {
        ViewportGeometry {
            scroll_offset_y: self.scroll_offset_y(),
            viewport_y: self.viewport_y(),
            viewport_height: self.viewport_height(),
            line_height: self.line_height(),
        }
    }
}
