//! Streaming ANSI escape sequence parser.
//!
//! The parser scans a character stream and emits one styled cell per
//! literal character, carrying the display attributes currently in
//! effect. Attribute state persists across `parse` calls, and a chunk
//! may end anywhere inside an escape sequence; the sequence completes
//! on the next call.

use forgeterm_core::{Style, StyledCell};

use crate::params::Params;
use crate::sgr;

const ESC: char = '\u{1b}';

/// Raw parameter bytes are capped; hostile unterminated sequences
/// cannot grow memory without bound.
const MAX_PARAM_BYTES: usize = 64;

/// Parser state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Normal character processing
    Ground,
    /// After ESC
    Escape,
    /// After ESC [
    CsiEntry,
    /// CSI parameter bytes
    CsiParam,
    /// Invalid CSI sequence; consume until the final byte
    CsiIgnore,
}

/// The streaming ANSI/SGR parser
#[derive(Debug)]
pub struct AnsiParser {
    state: State,
    /// Raw parameter bytes for the CSI sequence in progress
    params_bytes: Vec<u8>,
    /// Display attributes currently in effect
    style: Style,
}

impl Default for AnsiParser {
    fn default() -> Self {
        Self::new()
    }
}

impl AnsiParser {
    pub fn new() -> Self {
        AnsiParser {
            state: State::Ground,
            params_bytes: Vec::with_capacity(MAX_PARAM_BYTES),
            style: Style::default(),
        }
    }

    /// Parse a chunk of characters and return the emitted cells.
    ///
    /// A chunk ending mid-sequence emits nothing for the partial
    /// portion; the sequence is completed by the next call.
    pub fn parse(&mut self, chunk: &str) -> Vec<StyledCell> {
        let mut cells = Vec::with_capacity(chunk.len());
        for ch in chunk.chars() {
            self.advance(ch, &mut cells);
        }
        cells
    }

    /// The persisted attribute state, without mutating it
    pub fn style(&self) -> Style {
        self.style
    }

    /// Reset attribute state to defaults and discard any in-progress
    /// partial escape sequence.
    pub fn reset(&mut self) {
        self.state = State::Ground;
        self.params_bytes.clear();
        self.style.reset();
    }

    fn advance(&mut self, ch: char, cells: &mut Vec<StyledCell>) {
        match self.state {
            State::Ground => self.ground(ch, cells),
            State::Escape => self.escape(ch, cells),
            State::CsiEntry => self.csi_entry(ch),
            State::CsiParam => self.csi_param(ch),
            State::CsiIgnore => self.csi_ignore(ch),
        }
    }

    fn ground(&mut self, ch: char, cells: &mut Vec<StyledCell>) {
        match ch {
            ESC => {
                self.params_bytes.clear();
                self.state = State::Escape;
            }
            // Carriage returns are never emitted as cells
            '\r' => {}
            // Newlines pass through; downstream treats them as line breaks
            _ => cells.push(StyledCell::with_style(ch, self.style)),
        }
    }

    fn escape(&mut self, ch: char, cells: &mut Vec<StyledCell>) {
        match ch {
            '[' => self.state = State::CsiEntry,
            // ESC restarts the sequence
            ESC => {}
            // Only CSI sequences are recognized; drop the introducer
            // and reprocess the character as a literal.
            _ => {
                log::trace!("dropping ESC not followed by '['");
                self.state = State::Ground;
                self.advance(ch, cells);
            }
        }
    }

    fn csi_entry(&mut self, ch: char) {
        match ch {
            '0'..='9' | ';' => {
                self.params_bytes.push(ch as u8);
                self.state = State::CsiParam;
            }
            // Private markers and intermediates make the sequence
            // non-SGR; consume it without effect.
            ' '..='?' => self.state = State::CsiIgnore,
            '@'..='~' => {
                self.dispatch(ch);
                self.state = State::Ground;
            }
            ESC => {
                self.params_bytes.clear();
                self.state = State::Escape;
            }
            // Garbage aborts the sequence
            _ => self.state = State::Ground,
        }
    }

    fn csi_param(&mut self, ch: char) {
        match ch {
            '0'..='9' | ';' => {
                if self.params_bytes.len() < MAX_PARAM_BYTES {
                    self.params_bytes.push(ch as u8);
                }
            }
            ' '..='/' | ':' | '<'..='?' => self.state = State::CsiIgnore,
            '@'..='~' => {
                self.dispatch(ch);
                self.state = State::Ground;
            }
            ESC => {
                self.params_bytes.clear();
                self.state = State::Escape;
            }
            _ => self.state = State::Ground,
        }
    }

    fn csi_ignore(&mut self, ch: char) {
        match ch {
            '@'..='~' => self.state = State::Ground,
            ESC => {
                self.params_bytes.clear();
                self.state = State::Escape;
            }
            _ => {}
        }
    }

    /// Dispatch a completed CSI sequence. Only the SGR terminator
    /// mutates state; every other final byte is acknowledged and inert.
    fn dispatch(&mut self, final_byte: char) {
        if final_byte != 'm' {
            log::trace!("ignoring CSI sequence with final byte '{}'", final_byte);
            self.params_bytes.clear();
            return;
        }

        let params = Params::parse(&self.params_bytes);
        self.params_bytes.clear();
        if params.is_empty() {
            // `ESC[m` is shorthand for a full reset
            sgr::apply(&mut self.style, 0);
        } else {
            for code in params.iter() {
                sgr::apply(&mut self.style, code);
            }
        }
    }
}
