//! Keyboard input routing.
//!
//! Maps each key event to exactly one edit operation on the input
//! buffer or history, or to a submission/interrupt/clear outcome the
//! host acts on. The mapping is fixed and not configurable at runtime.

use crate::buffer::InputBuffer;
use crate::history::{CommandHistory, HistoryNext};
use crate::key::{Key, KeyEvent};

/// What a key event did, for the host to act on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// No state changed
    Ignored,
    /// Buffer or cursor changed; re-render the input line
    Edited,
    /// A non-empty command was submitted; buffer is already cleared
    Submitted(String),
    /// Ctrl+C: buffer cleared, host should show an interrupt marker
    Interrupted,
    /// Ctrl+L: host should clear the scrollback and redraw the line
    ScreenCleared,
    /// Tab: completion was requested
    Completed {
        /// Whether the buffer was replaced with the single match
        applied: bool,
        /// Command names matching the buffer as a prefix
        candidates: Vec<String>,
    },
}

/// The fixed key-event dispatch table
#[derive(Debug, Clone)]
pub struct InputRouter {
    buffer: InputBuffer,
    history: CommandHistory,
    /// Command names known to autocomplete
    commands: Vec<String>,
}

impl InputRouter {
    pub fn new(max_input_len: usize, history_size: usize) -> Self {
        InputRouter {
            buffer: InputBuffer::new(max_input_len),
            history: CommandHistory::new(history_size),
            commands: Vec::new(),
        }
    }

    /// Register a command name for Tab completion
    pub fn register_command<S: Into<String>>(&mut self, name: S) {
        self.commands.push(name.into());
    }

    pub fn buffer(&self) -> &InputBuffer {
        &self.buffer
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut CommandHistory {
        &mut self.history
    }

    /// Route one key event to its edit action
    pub fn handle_key(&mut self, event: KeyEvent) -> KeyOutcome {
        let command_mods = event.mods.has_command();

        match event.key {
            Key::Enter if !command_mods => self.submit(),
            Key::Backspace if !command_mods => {
                self.buffer.delete_backward();
                KeyOutcome::Edited
            }
            Key::Delete if !command_mods => {
                self.buffer.delete_forward();
                KeyOutcome::Edited
            }
            Key::Tab if !command_mods => self.complete(),
            Key::Up if !command_mods => match self.history.previous() {
                Some(entry) => {
                    self.buffer.set_text(&entry);
                    KeyOutcome::Edited
                }
                None => KeyOutcome::Ignored,
            },
            Key::Down if !command_mods => match self.history.next() {
                HistoryNext::Command(entry) => {
                    self.buffer.set_text(&entry);
                    KeyOutcome::Edited
                }
                HistoryNext::Blank => {
                    self.buffer.clear();
                    KeyOutcome::Edited
                }
                HistoryNext::NotNavigating => KeyOutcome::Ignored,
            },
            Key::Left if !command_mods => {
                self.buffer.move_cursor(-1);
                KeyOutcome::Edited
            }
            Key::Right if !command_mods => {
                self.buffer.move_cursor(1);
                KeyOutcome::Edited
            }
            Key::Home if !command_mods => {
                self.buffer.move_to_start();
                KeyOutcome::Edited
            }
            Key::End if !command_mods => {
                self.buffer.move_to_end();
                KeyOutcome::Edited
            }
            Key::Char(ch) if event.mods.ctrl && !event.mods.alt && !event.mods.meta => {
                self.handle_ctrl(ch)
            }
            Key::Char(ch) if !command_mods => {
                if ch.is_control() {
                    KeyOutcome::Ignored
                } else {
                    self.buffer.insert_char(ch);
                    KeyOutcome::Edited
                }
            }
            _ => {
                log::trace!("ignoring unmapped key event {:?}", event);
                KeyOutcome::Ignored
            }
        }
    }

    /// Ctrl-modified single letters
    fn handle_ctrl(&mut self, ch: char) -> KeyOutcome {
        match ch.to_ascii_lowercase() {
            'a' => {
                self.buffer.move_to_start();
                KeyOutcome::Edited
            }
            'e' => {
                self.buffer.move_to_end();
                KeyOutcome::Edited
            }
            'd' => {
                self.buffer.delete_forward();
                KeyOutcome::Edited
            }
            'u' => {
                self.buffer.delete_to_start();
                KeyOutcome::Edited
            }
            'k' => {
                self.buffer.delete_to_end();
                KeyOutcome::Edited
            }
            'w' => {
                self.buffer.delete_word_backward();
                KeyOutcome::Edited
            }
            'c' => {
                self.buffer.clear();
                self.history.reset();
                KeyOutcome::Interrupted
            }
            'l' => KeyOutcome::ScreenCleared,
            _ => KeyOutcome::Ignored,
        }
    }

    /// Submit the current buffer. The buffer is always cleared and
    /// navigation reset; the command is surfaced only when its trimmed
    /// text is non-empty.
    fn submit(&mut self) -> KeyOutcome {
        let command = self.buffer.text().trim().to_string();
        self.buffer.clear();
        self.history.reset();
        if command.is_empty() {
            return KeyOutcome::Edited;
        }
        self.history.add(&command);
        KeyOutcome::Submitted(command)
    }

    /// Tab completion: with exactly one registered command matching
    /// the buffer as a prefix, replace the buffer with that command
    /// plus a trailing space.
    fn complete(&mut self) -> KeyOutcome {
        let text = self.buffer.text();
        let candidates: Vec<String> = self
            .commands
            .iter()
            .filter(|name| name.starts_with(&text))
            .cloned()
            .collect();

        let applied = candidates.len() == 1;
        if applied {
            self.buffer.set_text(&format!("{} ", candidates[0]));
        }
        KeyOutcome::Completed { applied, candidates }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::Modifiers;

    fn type_text(router: &mut InputRouter, text: &str) {
        for ch in text.chars() {
            router.handle_key(KeyEvent::new(Key::Char(ch)));
        }
    }

    fn router() -> InputRouter {
        InputRouter::new(256, 50)
    }

    #[test]
    fn test_printable_characters_insert() {
        let mut r = router();
        type_text(&mut r, "hello");
        assert_eq!(r.buffer().text(), "hello");
    }

    #[test]
    fn test_enter_submits_and_clears() {
        let mut r = router();
        type_text(&mut r, "  /post hi  ");
        let outcome = r.handle_key(KeyEvent::new(Key::Enter));
        assert_eq!(outcome, KeyOutcome::Submitted("/post hi".into()));
        assert!(r.buffer().is_empty());
        assert_eq!(r.history().entries(), vec!["/post hi"]);
    }

    #[test]
    fn test_enter_on_blank_submits_nothing() {
        let mut r = router();
        type_text(&mut r, "   ");
        let outcome = r.handle_key(KeyEvent::new(Key::Enter));
        assert_eq!(outcome, KeyOutcome::Edited);
        assert!(r.history().is_empty());
    }

    #[test]
    fn test_history_navigation_keys() {
        let mut r = router();
        for cmd in ["cmd1", "cmd2", "cmd3"] {
            type_text(&mut r, cmd);
            r.handle_key(KeyEvent::new(Key::Enter));
        }

        r.handle_key(KeyEvent::new(Key::Up));
        assert_eq!(r.buffer().text(), "cmd3");
        r.handle_key(KeyEvent::new(Key::Up));
        assert_eq!(r.buffer().text(), "cmd2");
        r.handle_key(KeyEvent::new(Key::Down));
        assert_eq!(r.buffer().text(), "cmd3");
        // Walking past the newest entry blanks the line
        r.handle_key(KeyEvent::new(Key::Down));
        assert_eq!(r.buffer().text(), "");
        // Not navigating anymore: Down is a no-op
        let outcome = r.handle_key(KeyEvent::new(Key::Down));
        assert_eq!(outcome, KeyOutcome::Ignored);
    }

    #[test]
    fn test_ctrl_shortcuts() {
        let mut r = router();
        type_text(&mut r, "hello world");

        r.handle_key(KeyEvent::ctrl(Key::Char('w')));
        assert_eq!(r.buffer().text(), "hello ");

        r.handle_key(KeyEvent::ctrl(Key::Char('a')));
        assert_eq!(r.buffer().cursor(), 0);

        r.handle_key(KeyEvent::ctrl(Key::Char('k')));
        assert!(r.buffer().is_empty());
    }

    #[test]
    fn test_ctrl_u_deletes_to_start() {
        let mut r = router();
        type_text(&mut r, "abcdef");
        r.handle_key(KeyEvent::new(Key::Left));
        r.handle_key(KeyEvent::new(Key::Left));
        r.handle_key(KeyEvent::ctrl(Key::Char('u')));
        assert_eq!(r.buffer().text(), "ef");
        assert_eq!(r.buffer().cursor(), 0);
    }

    #[test]
    fn test_ctrl_c_interrupts() {
        let mut r = router();
        type_text(&mut r, "half-typed");
        let outcome = r.handle_key(KeyEvent::ctrl(Key::Char('c')));
        assert_eq!(outcome, KeyOutcome::Interrupted);
        assert!(r.buffer().is_empty());
    }

    #[test]
    fn test_ctrl_l_requests_screen_clear() {
        let mut r = router();
        type_text(&mut r, "keep me");
        let outcome = r.handle_key(KeyEvent::ctrl(Key::Char('l')));
        assert_eq!(outcome, KeyOutcome::ScreenCleared);
        // The input line survives a screen clear
        assert_eq!(r.buffer().text(), "keep me");
    }

    #[test]
    fn test_tab_completes_single_match() {
        let mut r = router();
        r.register_command("/login");
        r.register_command("/logout");
        r.register_command("/post");

        type_text(&mut r, "/p");
        let outcome = r.handle_key(KeyEvent::new(Key::Tab));
        assert_eq!(
            outcome,
            KeyOutcome::Completed {
                applied: true,
                candidates: vec!["/post".into()],
            }
        );
        assert_eq!(r.buffer().text(), "/post ");
    }

    #[test]
    fn test_tab_ambiguous_leaves_buffer() {
        let mut r = router();
        r.register_command("/login");
        r.register_command("/logout");

        type_text(&mut r, "/lo");
        let outcome = r.handle_key(KeyEvent::new(Key::Tab));
        match outcome {
            KeyOutcome::Completed { applied, candidates } => {
                assert!(!applied);
                assert_eq!(candidates.len(), 2);
            }
            other => panic!("expected Completed, got {:?}", other),
        }
        assert_eq!(r.buffer().text(), "/lo");
    }

    #[test]
    fn test_modified_characters_ignored() {
        let mut r = router();
        let alt = Modifiers {
            alt: true,
            ..Modifiers::NONE
        };
        let outcome = r.handle_key(KeyEvent::with_mods(Key::Char('x'), alt));
        assert_eq!(outcome, KeyOutcome::Ignored);
        assert!(r.buffer().is_empty());

        let outcome = r.handle_key(KeyEvent::ctrl(Key::Char('z')));
        assert_eq!(outcome, KeyOutcome::Ignored);
    }

    #[test]
    fn test_escape_ignored() {
        let mut r = router();
        let outcome = r.handle_key(KeyEvent::new(Key::Escape));
        assert_eq!(outcome, KeyOutcome::Ignored);
    }
}
