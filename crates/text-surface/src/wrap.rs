//! Soft wrap layout
//!
//! Maps logical lines onto visual rows without touching the text.

use crate::config::SoftWrap;

/// Visual row layout of a document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WrapLayout {
    /// First visual row of each logical line
    row_starts: Vec<usize>,
    /// Total visual rows
    total_rows: usize,
}

impl WrapLayout {
    /// Lay out lines given their lengths in characters (terminators excluded)
    pub fn new(line_lengths: impl IntoIterator<Item = usize>, wrap: SoftWrap) -> Self {
        let mut row_starts = Vec::new();
        let mut total_rows = 0;

        for len in line_lengths {
            row_starts.push(total_rows);
            total_rows += rows_for_line(len, wrap);
        }

        Self {
            row_starts,
            total_rows,
        }
    }

    /// Number of logical lines
    pub fn line_count(&self) -> usize {
        self.row_starts.len()
    }

    /// Total visual rows
    pub fn total_rows(&self) -> usize {
        self.total_rows
    }

    /// Number of visual rows a logical line takes
    pub fn row_count(&self, line: usize) -> usize {
        let Some(&start) = self.row_starts.get(line) else {
            return 0;
        };
        let end = self
            .row_starts
            .get(line + 1)
            .copied()
            .unwrap_or(self.total_rows);
        end - start
    }

    /// Logical line containing a visual row; rows past the end map to the last line
    pub fn row_to_line(&self, row: usize) -> usize {
        self.row_starts
            .partition_point(|&start| start <= row)
            .saturating_sub(1)
    }

    /// First visual row of a logical line; lines past the end map to the last line
    pub fn line_to_row(&self, line: usize) -> usize {
        let line = line.min(self.row_starts.len().saturating_sub(1));
        self.row_starts.get(line).copied().unwrap_or(0)
    }
}

fn rows_for_line(len: usize, wrap: SoftWrap) -> usize {
    match wrap {
        SoftWrap::Off => 1,
        SoftWrap::Column(column) => len.div_ceil(column.max(1) as usize).max(1),
    }
}
