//! Styled cell representation
//!
//! A cell is a single rendered character position. Each cell carries:
//! - A character (one Unicode scalar value; `'\n'` marks a line break)
//! - Foreground and background colors (`None` means terminal default)
//! - Text attributes (bold, dim, italic, underline, inverse, hidden)

use serde::{Deserialize, Serialize};

use crate::color::AnsiColor;

/// Flags for cell text attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StyleFlags {
    bits: u8,
}

impl StyleFlags {
    pub const NONE: u8 = 0;
    pub const BOLD: u8 = 1 << 0;
    pub const DIM: u8 = 1 << 1;
    pub const ITALIC: u8 = 1 << 2;
    pub const UNDERLINE: u8 = 1 << 3;
    pub const INVERSE: u8 = 1 << 4;
    pub const HIDDEN: u8 = 1 << 5;

    pub const fn empty() -> Self {
        StyleFlags { bits: Self::NONE }
    }

    pub const fn new(bits: u8) -> Self {
        StyleFlags { bits }
    }

    pub fn contains(&self, flag: u8) -> bool {
        self.bits & flag != 0
    }

    pub fn set(&mut self, flag: u8, value: bool) {
        if value {
            self.bits |= flag;
        } else {
            self.bits &= !flag;
        }
    }

    pub fn insert(&mut self, flag: u8) {
        self.bits |= flag;
    }

    pub fn remove(&mut self, flag: u8) {
        self.bits &= !flag;
    }

    pub fn bits(&self) -> u8 {
        self.bits
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }
}

/// The full display-attribute set of a cell, minus the character.
///
/// This is also the state the parser persists between chunks: the
/// attributes currently in effect for the next literal character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Style {
    /// Foreground color, `None` for terminal default
    pub fg: Option<AnsiColor>,
    /// Background color, `None` for terminal default
    pub bg: Option<AnsiColor>,
    /// Text attributes
    pub flags: StyleFlags,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all attributes to default (colors unset, flags cleared)
    pub fn reset(&mut self) {
        self.fg = None;
        self.bg = None;
        self.flags = StyleFlags::empty();
    }

    pub fn is_default(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.flags.is_empty()
    }
}

/// A single styled character position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyledCell {
    /// The character stored in this cell
    pub ch: char,
    /// Display attributes in effect when the character was emitted
    pub style: Style,
}

impl StyledCell {
    /// Create a cell with default attributes
    pub fn new(ch: char) -> Self {
        StyledCell {
            ch,
            style: Style::default(),
        }
    }

    /// Create a cell carrying the given attributes
    pub fn with_style(ch: char, style: Style) -> Self {
        StyledCell { ch, style }
    }

    /// Whether this cell marks a line break
    pub fn is_newline(&self) -> bool {
        self.ch == '\n'
    }

    /// Display width of this cell in columns.
    /// Wide characters (CJK, some emoji) have width 2; line breaks have 0.
    pub fn width(&self) -> usize {
        if self.is_newline() {
            return 0;
        }
        use unicode_width::UnicodeWidthChar;
        self.ch.width().unwrap_or(1).max(1)
    }
}
