//! Forgeterm Parser
//!
//! This crate implements a streaming ANSI escape sequence parser that
//! converts a character stream into styled cells. The parser is:
//! - Streaming: can handle arbitrary chunk boundaries
//! - Stateful: display attributes persist between chunks
//! - Deterministic: same input always produces same output
//!
//! Sequence handling:
//! - SGR sequences (`CSI ... m`) mutate the persisted style state
//! - All other CSI sequences are consumed but have no effect
//! - Unrecognized SGR codes are silently ignored
//! - Carriage returns are dropped; newlines pass through as cells

pub mod params;
pub mod parser;
mod sgr;

pub use params::Params;
pub use parser::AnsiParser;
