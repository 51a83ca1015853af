//! Forgeterm Core
//!
//! This crate provides the platform-independent terminal emulator core:
//! - Styled cell representation with character and attributes
//! - 16-color ANSI palette
//! - Buffered lines with monotonic line numbers
//! - Fixed-capacity circular scrollback buffer
//!
//! This crate has NO GUI dependencies and can be used headlessly for testing.

pub mod cell;
pub mod color;
pub mod line;
pub mod scrollback;

pub use cell::{Style, StyleFlags, StyledCell};
pub use color::{default_palette, AnsiColor, Rgb};
pub use line::Line;
pub use scrollback::ScrollBuffer;
