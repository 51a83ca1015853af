//! Key event representation.
//!
//! The host translates browser/OS keyboard events into these semantic
//! events; the router maps them onto edit operations.

/// Keyboard modifiers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        alt: false,
        shift: false,
        meta: false,
    };

    pub const CTRL: Modifiers = Modifiers {
        ctrl: true,
        alt: false,
        shift: false,
        meta: false,
    };

    /// Whether a command-style modifier is held (shift excluded; it
    /// only changes which character the host reports)
    pub fn has_command(&self) -> bool {
        self.ctrl || self.alt || self.meta
    }
}

/// Keys the router understands. Anything else should not be forwarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A printable character as reported by the host
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
}

/// A single keyboard event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub mods: Modifiers,
}

impl KeyEvent {
    pub fn new(key: Key) -> Self {
        KeyEvent {
            key,
            mods: Modifiers::NONE,
        }
    }

    pub fn ctrl(key: Key) -> Self {
        KeyEvent {
            key,
            mods: Modifiers::CTRL,
        }
    }

    pub fn with_mods(key: Key, mods: Modifiers) -> Self {
        KeyEvent { key, mods }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifier_classification() {
        assert!(!Modifiers::NONE.has_command());
        assert!(Modifiers::CTRL.has_command());

        let shift_only = Modifiers {
            shift: true,
            ..Modifiers::NONE
        };
        assert!(!shift_only.has_command());
    }

    #[test]
    fn test_event_constructors() {
        let ev = KeyEvent::ctrl(Key::Char('c'));
        assert_eq!(ev.key, Key::Char('c'));
        assert!(ev.mods.ctrl);
        assert!(!ev.mods.alt);
    }
}
