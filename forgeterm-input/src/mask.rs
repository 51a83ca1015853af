//! Display-only masking of sensitive input regions.
//!
//! The host declares which regions of the command line must be masked
//! by supplying a `MaskPolicy`; the terminal core never hardcodes
//! command vocabulary. Masking affects only what is displayed - the
//! stored and submitted text is always verbatim.

/// Decides where display masking starts for a given command line
pub trait MaskPolicy {
    /// Character index from which every character is displayed as the
    /// mask character, or `None` when nothing is masked.
    fn mask_start(&self, text: &str) -> Option<usize>;
}

/// Masks the arguments after the first two whitespace-delimited tokens
/// of registered sensitive commands (e.g. `/login user <password>`).
#[derive(Debug, Clone, Default)]
pub struct CommandArgMasker {
    commands: Vec<String>,
}

impl CommandArgMasker {
    pub fn new<I, S>(commands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CommandArgMasker {
            commands: commands.into_iter().map(Into::into).collect(),
        }
    }

    pub fn register<S: Into<String>>(&mut self, command: S) {
        self.commands.push(command.into());
    }
}

impl MaskPolicy for CommandArgMasker {
    fn mask_start(&self, text: &str) -> Option<usize> {
        let mut chars = text.chars().enumerate().peekable();

        // First token must match a registered command
        let mut first = String::new();
        while let Some(&(_, ch)) = chars.peek() {
            if ch.is_whitespace() {
                break;
            }
            first.push(ch);
            chars.next();
        }
        if !self.commands.iter().any(|c| c == &first) {
            return None;
        }

        // Separator, then the second token; masking starts at the
        // position immediately following it.
        let mut saw_separator = false;
        while let Some(&(_, ch)) = chars.peek() {
            if !ch.is_whitespace() {
                break;
            }
            saw_separator = true;
            chars.next();
        }
        if !saw_separator {
            return None;
        }

        let mut second_end = None;
        while let Some(&(i, ch)) = chars.peek() {
            if ch.is_whitespace() {
                break;
            }
            second_end = Some(i + 1);
            chars.next();
        }
        second_end
    }
}

/// Render `text` with everything at or beyond the policy's mask start
/// replaced by `mask_char`.
pub fn masked_display(text: &str, policy: &dyn MaskPolicy, mask_char: char) -> String {
    match policy.mask_start(text) {
        None => text.to_string(),
        Some(start) => text
            .chars()
            .enumerate()
            .map(|(i, ch)| if i >= start { mask_char } else { ch })
            .collect(),
    }
}
