//! Scrollback buffer implementation
//!
//! The scrollback buffer stores rendered output lines addressed by their
//! monotonic line number. It uses a ring buffer with a fixed capacity:
//! once full, each append evicts exactly the single oldest line. Resident
//! line numbers always form the contiguous trailing window
//! `[total_lines - len, total_lines - 1]`.

use serde::{Deserialize, Serialize};

use crate::cell::StyledCell;
use crate::line::Line;

/// Default scrollback capacity in lines
pub const DEFAULT_SCROLLBACK_LINES: usize = 1000;

/// Fixed-capacity circular scrollback buffer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollBuffer {
    /// Ring storage; a resident line with number `n` lives at `n % capacity`
    slots: Vec<Line>,
    /// Maximum number of resident lines
    capacity: usize,
    /// Lines ever appended (also the next line number to assign)
    total: u64,
}

impl ScrollBuffer {
    /// Create a new scrollback buffer with the given capacity
    pub fn new(capacity: usize) -> Self {
        ScrollBuffer {
            slots: Vec::with_capacity(capacity.min(1024)),
            capacity,
            total: 0,
        }
    }

    /// Number of lines currently resident
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Lines ever appended, including evicted ones
    pub fn total_lines(&self) -> u64 {
        self.total
    }

    /// Append a line, assigning it the next sequential line number.
    ///
    /// Once the buffer is full every append evicts the single oldest
    /// resident line. Returns the assigned line number.
    pub fn append(&mut self, cells: Vec<StyledCell>) -> u64 {
        let number = self.total;
        self.total += 1;

        if self.capacity == 0 {
            return number;
        }

        let line = Line::new(cells, number);
        if self.slots.len() < self.capacity {
            // Line numbers start at zero here, so the slot index equals
            // the current length while the buffer is filling up.
            self.slots.push(line);
        } else {
            let index = (number % self.capacity as u64) as usize;
            log::trace!("scrollback full, evicting line {}", self.slots[index].number());
            self.slots[index] = line;
        }
        number
    }

    /// Get a resident line by its line number.
    /// Returns `None` for evicted or not-yet-appended numbers.
    pub fn get_line(&self, line_number: u64) -> Option<&Line> {
        if line_number >= self.total {
            return None;
        }
        if self.total - line_number > self.slots.len() as u64 {
            return None;
        }
        let index = (line_number % self.capacity as u64) as usize;
        Some(&self.slots[index])
    }

    pub fn has_line(&self, line_number: u64) -> bool {
        self.get_line(line_number).is_some()
    }

    /// Line number of the oldest resident line, if any
    pub fn oldest_line_number(&self) -> Option<u64> {
        if self.slots.is_empty() {
            None
        } else {
            Some(self.total - self.slots.len() as u64)
        }
    }

    /// Line number of the newest resident line, if any
    pub fn newest_line_number(&self) -> Option<u64> {
        if self.slots.is_empty() {
            None
        } else {
            Some(self.total - 1)
        }
    }

    /// Resident lines within `[start, end]` (inclusive), ascending by
    /// line number. Ranges outside the resident window yield an empty
    /// vector, never an error.
    pub fn get_visible_range(&self, start: u64, end: u64) -> Vec<&Line> {
        let (oldest, newest) = match (self.oldest_line_number(), self.newest_line_number()) {
            (Some(o), Some(n)) => (o, n),
            _ => return Vec::new(),
        };
        if start > end || end < oldest || start > newest {
            return Vec::new();
        }
        let from = start.max(oldest);
        let to = end.min(newest);
        (from..=to)
            .map(|n| &self.slots[(n % self.capacity as u64) as usize])
            .collect()
    }

    /// Iterate over resident lines from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &Line> {
        let oldest = self.oldest_line_number().unwrap_or(0);
        (0..self.slots.len() as u64)
            .map(move |offset| &self.slots[((oldest + offset) % self.capacity as u64) as usize])
    }

    /// Discard all resident lines and reset the total-appended counter
    pub fn clear(&mut self) {
        log::trace!("scrollback cleared ({} resident lines)", self.slots.len());
        self.slots.clear();
        self.total = 0;
    }
}

impl Default for ScrollBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLLBACK_LINES)
    }
}
