//! Session-scoped command history.
//!
//! Entries are ordered most-recent-first and bounded; the oldest entry
//! drops on overflow. Submitting a command identical to the most
//! recent entry is a no-op, as is submitting whitespace. Navigation
//! walks from the newest entry toward the oldest and clamps there.

use std::collections::VecDeque;

/// Result of a downward (toward-newest) navigation step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryNext {
    /// Navigation was never started; nothing to do
    NotNavigating,
    /// Walked past the newest entry; the input line returns to blank
    Blank,
    /// The next (newer) entry
    Command(String),
}

/// Circular command history with up/down navigation
#[derive(Debug, Clone)]
pub struct CommandHistory {
    /// Most-recent-first
    entries: VecDeque<String>,
    max_size: usize,
    /// Index of the entry currently shown while navigating
    nav: Option<usize>,
}

impl CommandHistory {
    pub fn new(max_size: usize) -> Self {
        CommandHistory {
            entries: VecDeque::new(),
            max_size,
            nav: None,
        }
    }

    /// Record a submitted command. Whitespace-only commands and
    /// immediate repeats are ignored. Always stops navigation.
    pub fn add(&mut self, command: &str) {
        self.nav = None;
        let command = command.trim();
        if command.is_empty() {
            return;
        }
        if self.entries.front().map(String::as_str) == Some(command) {
            log::trace!("suppressing duplicate history entry");
            return;
        }
        self.entries.push_front(command.to_string());
        if self.entries.len() > self.max_size {
            self.entries.pop_back();
        }
    }

    /// Step toward the oldest entry. Clamps at the oldest entry and
    /// keeps returning it; returns `None` only when history is empty.
    pub fn previous(&mut self) -> Option<String> {
        if self.entries.is_empty() {
            return None;
        }
        let index = match self.nav {
            None => 0,
            Some(i) => (i + 1).min(self.entries.len() - 1),
        };
        self.nav = Some(index);
        Some(self.entries[index].clone())
    }

    /// Step toward the newest entry. Stepping past the newest entry
    /// returns `Blank` and stops navigating; stepping while not
    /// navigating returns `NotNavigating`.
    pub fn next(&mut self) -> HistoryNext {
        match self.nav {
            None => HistoryNext::NotNavigating,
            Some(0) => {
                self.nav = None;
                HistoryNext::Blank
            }
            Some(i) => {
                self.nav = Some(i - 1);
                HistoryNext::Command(self.entries[i - 1].clone())
            }
        }
    }

    /// Stop navigating without touching the entries
    pub fn reset(&mut self) {
        self.nav = None;
    }

    /// Ordered copy of the entries, most-recent-first
    pub fn entries(&self) -> Vec<String> {
        self.entries.iter().cloned().collect()
    }

    /// Index of the entry currently shown, `None` when not navigating
    pub fn current_index(&self) -> Option<usize> {
        self.nav
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.nav = None;
    }
}
