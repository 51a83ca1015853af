//! Terminal color representation
//!
//! The display palette is the fixed 16-entry ANSI set: eight standard
//! colors and their bright variants. An unset color (terminal default)
//! is represented as `Option::<AnsiColor>::None` by the callers that
//! carry color state.

use serde::{Deserialize, Serialize};

/// Named colors from the standard 16-color ANSI palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum AnsiColor {
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,
    BrightBlack = 8,
    BrightRed = 9,
    BrightGreen = 10,
    BrightYellow = 11,
    BrightBlue = 12,
    BrightMagenta = 13,
    BrightCyan = 14,
    BrightWhite = 15,
}

impl AnsiColor {
    /// Convert from SGR color offset (30-37 for fg, 40-47 for bg, minus the base)
    pub fn from_sgr_normal(code: u8) -> Option<Self> {
        match code {
            0 => Some(AnsiColor::Black),
            1 => Some(AnsiColor::Red),
            2 => Some(AnsiColor::Green),
            3 => Some(AnsiColor::Yellow),
            4 => Some(AnsiColor::Blue),
            5 => Some(AnsiColor::Magenta),
            6 => Some(AnsiColor::Cyan),
            7 => Some(AnsiColor::White),
            _ => None,
        }
    }

    /// Convert from SGR bright color offset (90-97 for fg, 100-107 for bg, minus the base)
    pub fn from_sgr_bright(code: u8) -> Option<Self> {
        match code {
            0 => Some(AnsiColor::BrightBlack),
            1 => Some(AnsiColor::BrightRed),
            2 => Some(AnsiColor::BrightGreen),
            3 => Some(AnsiColor::BrightYellow),
            4 => Some(AnsiColor::BrightBlue),
            5 => Some(AnsiColor::BrightMagenta),
            6 => Some(AnsiColor::BrightCyan),
            7 => Some(AnsiColor::BrightWhite),
            _ => None,
        }
    }

    /// Get the index in the 16-color palette
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Whether this is one of the bright palette entries
    pub fn is_bright(self) -> bool {
        self.index() >= 8
    }
}

/// 24-bit RGB color, used only when resolving palette entries for a renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }
}

/// Default RGB values for the 16-color palette, indexed by `AnsiColor::index`
pub fn default_palette() -> [Rgb; 16] {
    [
        Rgb::new(0, 0, 0),       // Black
        Rgb::new(205, 0, 0),     // Red
        Rgb::new(0, 205, 0),     // Green
        Rgb::new(205, 205, 0),   // Yellow
        Rgb::new(0, 0, 238),     // Blue
        Rgb::new(205, 0, 205),   // Magenta
        Rgb::new(0, 205, 205),   // Cyan
        Rgb::new(229, 229, 229), // White
        Rgb::new(127, 127, 127), // Bright Black
        Rgb::new(255, 0, 0),     // Bright Red
        Rgb::new(0, 255, 0),     // Bright Green
        Rgb::new(255, 255, 0),   // Bright Yellow
        Rgb::new(92, 92, 255),   // Bright Blue
        Rgb::new(255, 0, 255),   // Bright Magenta
        Rgb::new(0, 255, 255),   // Bright Cyan
        Rgb::new(255, 255, 255), // Bright White
    ]
}
