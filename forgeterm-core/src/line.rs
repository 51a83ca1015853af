//! Buffered line representation.
//!
//! A line is an ordered run of styled cells plus the monotonic line
//! number the scrollback buffer assigned at append time. Lines are
//! immutable once buffered; reflow happens at render time.

use serde::{Deserialize, Serialize};

use crate::cell::StyledCell;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    cells: Vec<StyledCell>,
    line_number: u64,
}

impl Line {
    pub fn new(cells: Vec<StyledCell>, line_number: u64) -> Self {
        Line { cells, line_number }
    }

    /// The monotonic line number assigned at append time
    pub fn number(&self) -> u64 {
        self.line_number
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, col: usize) -> Option<&StyledCell> {
        self.cells.get(col)
    }

    pub fn cells(&self) -> &[StyledCell] {
        &self.cells
    }

    /// Display width of the line in columns
    pub fn width(&self) -> usize {
        self.cells.iter().map(StyledCell::width).sum()
    }

    /// Plain-text content with trailing whitespace trimmed
    pub fn text_content(&self) -> String {
        let s: String = self.cells.iter().map(|cell| cell.ch).collect();
        s.trim_end().to_string()
    }
}
