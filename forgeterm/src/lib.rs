//! Forgeterm
//!
//! A browser-embeddable terminal emulator core. The facade crate wires
//! the streaming ANSI parser, the circular scrollback buffer, and the
//! keyboard input machinery into a single `TerminalSession`, and
//! provides the viewport/responsive layout math the host renderer
//! consumes.
//!
//! The session never touches a display: it produces styled cells and
//! lines, receives semantic key events, and hands submitted commands to
//! a caller-supplied handler. Rendering, networking, and command
//! dispatch are the host application's responsibility.

pub mod error;
pub mod session;
pub mod viewport;

pub use forgeterm_core::{
    default_palette, AnsiColor, Line, Rgb, ScrollBuffer, Style, StyleFlags, StyledCell,
};
pub use forgeterm_input::{
    masked_display, CommandArgMasker, CommandHistory, HistoryNext, InputBuffer, InputRouter, Key,
    KeyEvent, KeyOutcome, MaskPolicy, Modifiers,
};
pub use forgeterm_parser::AnsiParser;

pub use error::ConfigError;
pub use session::{SessionConfig, TerminalSession};
pub use viewport::{
    is_line_visible, visible_range, Breakpoint, LogoVariant, SafeAreaInsets, ViewportState,
    VisibleRange,
};
