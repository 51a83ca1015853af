//! Terminal session wiring.
//!
//! A `TerminalSession` owns one parser, one scrollback buffer, and one
//! input router, and connects them to the host through two seams: a
//! submission handler invoked once per entered command, and the styled
//! lines/cells the host renders. All operations are synchronous; the
//! submission handler is fire-and-forget and its output re-enters
//! through `write` whenever it resolves.

use forgeterm_core::{ScrollBuffer, StyledCell};
use forgeterm_input::{masked_display, InputRouter, KeyEvent, KeyOutcome, MaskPolicy};
use forgeterm_parser::AnsiParser;

use crate::error::ConfigError;
use crate::viewport::{ViewportState, VisibleRange};

/// Receives each submitted command together with the current column
/// count. Completion is the host's concern; the session has already
/// cleared the input line when this runs.
pub type SubmitHandler = Box<dyn FnMut(&str, u16)>;

/// Tunables for a terminal session
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Scrollback capacity in lines
    pub scrollback_capacity: usize,
    /// Maximum input line length in characters
    pub max_input_len: usize,
    /// Maximum command history entries
    pub history_size: usize,
    /// Prompt rendered before echoed commands
    pub prompt: String,
    /// Character shown in place of masked input
    pub mask_char: char,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            scrollback_capacity: 1000,
            max_input_len: 512,
            history_size: 100,
            prompt: "> ".to_string(),
            mask_char: '*',
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scrollback_capacity == 0 {
            return Err(ConfigError::ZeroScrollbackCapacity);
        }
        if self.max_input_len == 0 {
            return Err(ConfigError::ZeroInputLength);
        }
        if self.history_size == 0 {
            return Err(ConfigError::ZeroHistorySize);
        }
        Ok(())
    }
}

/// One terminal instance: exclusive owner of its buffers
pub struct TerminalSession {
    parser: AnsiParser,
    scrollback: ScrollBuffer,
    router: InputRouter,
    mask: Option<Box<dyn MaskPolicy>>,
    on_submit: SubmitHandler,
    /// Output cells accumulated since the last newline
    pending: Vec<StyledCell>,
    prompt: String,
    mask_char: char,
    cols: u16,
}

impl TerminalSession {
    pub fn new(config: SessionConfig, on_submit: SubmitHandler) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(TerminalSession {
            parser: AnsiParser::new(),
            scrollback: ScrollBuffer::new(config.scrollback_capacity),
            router: InputRouter::new(config.max_input_len, config.history_size),
            mask: None,
            on_submit,
            pending: Vec::new(),
            prompt: config.prompt,
            mask_char: config.mask_char,
            cols: 80,
        })
    }

    /// Install a display-masking policy for sensitive input
    pub fn set_mask_policy(&mut self, policy: Box<dyn MaskPolicy>) {
        self.mask = Some(policy);
    }

    /// Register a command name for Tab completion
    pub fn register_command<S: Into<String>>(&mut self, name: S) {
        self.router.register_command(name);
    }

    /// Feed output text (with ANSI styling) into the terminal.
    ///
    /// Chunks may split escape sequences and lines arbitrarily; a
    /// partial trailing line stays pending until its newline arrives.
    pub fn write(&mut self, chunk: &str) {
        for cell in self.parser.parse(chunk) {
            if cell.is_newline() {
                let cells = std::mem::take(&mut self.pending);
                self.scrollback.append(cells);
            } else {
                self.pending.push(cell);
            }
        }
    }

    /// Force the pending partial line into the scrollback
    pub fn flush_pending(&mut self) {
        if !self.pending.is_empty() {
            let cells = std::mem::take(&mut self.pending);
            self.scrollback.append(cells);
        }
    }

    /// Route one key event, applying its scrollback side effects.
    /// Returns the outcome so the host can re-render appropriately.
    pub fn handle_key(&mut self, event: KeyEvent) -> KeyOutcome {
        let outcome = self.router.handle_key(event);
        match &outcome {
            KeyOutcome::Submitted(command) => {
                log::debug!("command submitted ({} chars)", command.len());
                self.echo_line(&self.display_of(command));
                (self.on_submit)(command, self.cols);
            }
            KeyOutcome::Interrupted => {
                self.echo_line("^C");
            }
            KeyOutcome::ScreenCleared => {
                self.scrollback.clear();
                self.pending.clear();
            }
            _ => {}
        }
        outcome
    }

    /// The input line as it should be displayed, masking applied
    pub fn input_display(&self) -> String {
        self.display_of(&self.router.buffer().text())
    }

    /// Cursor position within the input line, in characters
    pub fn input_cursor(&self) -> usize {
        self.router.buffer().cursor()
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Adopt layout-derived parameters; buffer contents are untouched
    pub fn resize(&mut self, viewport: &ViewportState) {
        self.cols = viewport.cols;
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn scrollback(&self) -> &ScrollBuffer {
        &self.scrollback
    }

    pub fn router(&self) -> &InputRouter {
        &self.router
    }

    /// Resident lines for a computed viewport window
    pub fn visible_lines(&self, range: &VisibleRange) -> Vec<&forgeterm_core::Line> {
        self.scrollback
            .get_visible_range(range.start_line as u64, range.end_line as u64)
    }

    fn display_of(&self, text: &str) -> String {
        match &self.mask {
            Some(policy) => masked_display(text, policy.as_ref(), self.mask_char),
            None => text.to_string(),
        }
    }

    /// Echo a finished input line (prompt included) into the scrollback
    fn echo_line(&mut self, text: &str) {
        self.flush_pending();
        let cells: Vec<StyledCell> = self
            .prompt
            .chars()
            .chain(text.chars())
            .map(StyledCell::new)
            .collect();
        self.scrollback.append(cells);
    }
}
