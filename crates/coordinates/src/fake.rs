//! Test surfaces

use text_surface::{DocumentSurface, SurfaceConfig, TextSurface, ViewportGeometry};

pub(crate) fn document(text: &str) -> DocumentSurface {
    DocumentSurface::new(text, SurfaceConfig::default()).unwrap()
}

/// Document with a `line_height` by `viewport_height` pixel viewport scrolled to `scroll`
pub(crate) fn scrolled_document(
    text: &str,
    line_height: u32,
    viewport_height: u32,
    scroll: u32,
) -> DocumentSurface {
    let config = SurfaceConfig {
        line_height,
        viewport_height,
        ..Default::default()
    };
    let mut doc = DocumentSurface::new(text, config).unwrap();
    doc.scroll_to(scroll);
    doc
}

/// A host whose answers can be bent to exercise degenerate geometry
pub(crate) struct FakeSurface {
    doc: DocumentSurface,
    reported_lines: Option<usize>,
    geometry: Option<ViewportGeometry>,
    visual_map: Option<fn(usize) -> usize>,
}

impl FakeSurface {
    pub(crate) fn new(text: &str) -> Self {
        Self {
            doc: document(text),
            reported_lines: None,
            geometry: None,
            visual_map: None,
        }
    }

    pub(crate) fn with_reported_lines(mut self, lines: usize) -> Self {
        self.reported_lines = Some(lines);
        self
    }

    pub(crate) fn with_geometry(mut self, geometry: ViewportGeometry) -> Self {
        self.geometry = Some(geometry);
        self
    }

    pub(crate) fn with_visual_map(mut self, map: fn(usize) -> usize) -> Self {
        self.visual_map = Some(map);
        self
    }
}

impl TextSurface for FakeSurface {
    fn text_length(&self) -> usize {
        self.doc.text_length()
    }

    fn char_at(&self, index: usize) -> Option<char> {
        self.doc.char_at(index)
    }

    fn line_count(&self) -> usize {
        self.reported_lines.unwrap_or_else(|| self.doc.line_count())
    }

    fn line_start_offset(&self, line: usize) -> usize {
        self.doc.line_start_offset(line)
    }

    fn line_end_offset(&self, line: usize) -> usize {
        self.doc.line_end_offset(line)
    }

    fn scroll_offset_y(&self) -> u32 {
        self.geometry().scroll_offset_y
    }

    fn viewport_y(&self) -> u32 {
        self.geometry().viewport_y
    }

    fn viewport_height(&self) -> u32 {
        self.geometry().viewport_height
    }

    fn line_height(&self) -> u32 {
        self.geometry().line_height
    }

    fn visual_to_logical_line(&self, visual_line: usize) -> usize {
        match self.visual_map {
            Some(map) => map(visual_line),
            None => self.doc.visual_to_logical_line(visual_line),
        }
    }

    fn geometry(&self) -> ViewportGeometry {
        self.geometry.unwrap_or_else(|| self.doc.geometry())
    }
}
