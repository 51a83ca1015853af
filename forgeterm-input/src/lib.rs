//! Forgeterm Input
//!
//! Keyboard-side state machines for the terminal:
//! - `InputBuffer`: the in-progress command line with cursor editing
//! - `CommandHistory`: session-scoped history with up/down navigation
//! - `MaskPolicy`: display-only masking of sensitive input regions
//! - `InputRouter`: the fixed key-event to edit-action dispatch table
//!
//! All operations are synchronous and infallible; boundary violations
//! are no-ops rather than errors.

pub mod buffer;
pub mod history;
pub mod key;
pub mod mask;
pub mod router;

pub use buffer::InputBuffer;
pub use history::{CommandHistory, HistoryNext};
pub use key::{Key, KeyEvent, Modifiers};
pub use mask::{masked_display, CommandArgMasker, MaskPolicy};
pub use router::{InputRouter, KeyOutcome};
