//! Edit buffer for the in-progress command line.
//!
//! Positions are measured in characters, not bytes; the cursor is
//! always within `[0, len]`. Every boundary violation is a silent
//! no-op, and inserting past the maximum length drops the character
//! without truncating existing text.

/// The in-progress command line
#[derive(Debug, Clone)]
pub struct InputBuffer {
    chars: Vec<char>,
    cursor: usize,
    max_len: usize,
}

impl InputBuffer {
    pub fn new(max_len: usize) -> Self {
        InputBuffer {
            chars: Vec::new(),
            cursor: 0,
            max_len,
        }
    }

    /// Insert a character at the cursor. Dropped silently at capacity.
    pub fn insert_char(&mut self, ch: char) {
        if self.chars.len() >= self.max_len {
            log::trace!("input buffer at capacity, dropping {:?}", ch);
            return;
        }
        self.chars.insert(self.cursor, ch);
        self.cursor += 1;
    }

    /// Delete the character before the cursor
    pub fn delete_backward(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        self.chars.remove(self.cursor);
    }

    /// Delete the character under the cursor
    pub fn delete_forward(&mut self) {
        if self.cursor < self.chars.len() {
            self.chars.remove(self.cursor);
        }
    }

    /// Move the cursor by a signed offset, clamped to `[0, len]`
    pub fn move_cursor(&mut self, offset: isize) {
        let pos = self.cursor as isize + offset;
        self.cursor = pos.clamp(0, self.chars.len() as isize) as usize;
    }

    /// Place the cursor at an absolute position, clamped to `[0, len]`
    pub fn set_cursor(&mut self, pos: usize) {
        self.cursor = pos.min(self.chars.len());
    }

    pub fn move_to_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_to_end(&mut self) {
        self.cursor = self.chars.len();
    }

    /// Delete everything before the cursor
    pub fn delete_to_start(&mut self) {
        self.chars.drain(..self.cursor);
        self.cursor = 0;
    }

    /// Delete everything from the cursor to the end
    pub fn delete_to_end(&mut self) {
        self.chars.truncate(self.cursor);
    }

    /// Delete the word before the cursor: skip contiguous whitespace,
    /// then contiguous non-whitespace; the cursor lands at the
    /// deletion start.
    pub fn delete_word_backward(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let mut start = self.cursor;
        while start > 0 && self.chars[start - 1].is_whitespace() {
            start -= 1;
        }
        while start > 0 && !self.chars[start - 1].is_whitespace() {
            start -= 1;
        }
        self.chars.drain(start..self.cursor);
        self.cursor = start;
    }

    /// Replace the entire contents, truncating at capacity; the cursor
    /// moves to the end.
    pub fn set_text(&mut self, text: &str) {
        self.chars = text.chars().take(self.max_len).collect();
        self.cursor = self.chars.len();
    }

    pub fn clear(&mut self) {
        self.chars.clear();
        self.cursor = 0;
    }

    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn is_at_start(&self) -> bool {
        self.cursor == 0
    }

    pub fn is_at_end(&self) -> bool {
        self.cursor == self.chars.len()
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_with(text: &str) -> InputBuffer {
        let mut buf = InputBuffer::new(128);
        buf.set_text(text);
        buf
    }

    #[test]
    fn test_insert_and_cursor() {
        let mut buf = InputBuffer::new(10);
        for ch in "abc".chars() {
            buf.insert_char(ch);
        }
        assert_eq!(buf.text(), "abc");
        assert_eq!(buf.cursor(), 3);
        assert!(buf.is_at_end());

        buf.move_cursor(-2);
        buf.insert_char('x');
        assert_eq!(buf.text(), "axbc");
        assert_eq!(buf.cursor(), 2);
    }

    #[test]
    fn test_max_length_drops_silently() {
        let mut buf = InputBuffer::new(3);
        for ch in "abcdef".chars() {
            buf.insert_char(ch);
        }
        assert_eq!(buf.text(), "abc");
        assert_eq!(buf.len(), 3);
    }

    #[test]
    fn test_delete_backward_at_start_is_noop() {
        let mut buf = buffer_with("ab");
        buf.move_to_start();
        buf.delete_backward();
        assert_eq!(buf.text(), "ab");

        buf.move_to_end();
        buf.delete_backward();
        assert_eq!(buf.text(), "a");
    }

    #[test]
    fn test_delete_forward_at_end_is_noop() {
        let mut buf = buffer_with("ab");
        buf.delete_forward();
        assert_eq!(buf.text(), "ab");

        buf.move_to_start();
        buf.delete_forward();
        assert_eq!(buf.text(), "b");
        assert_eq!(buf.cursor(), 0);
    }

    #[test]
    fn test_move_cursor_clamps() {
        let mut buf = buffer_with("abc");
        buf.move_cursor(-100);
        assert_eq!(buf.cursor(), 0);
        buf.move_cursor(100);
        assert_eq!(buf.cursor(), 3);
        buf.set_cursor(999);
        assert_eq!(buf.cursor(), 3);
    }

    #[test]
    fn test_delete_to_start_and_end() {
        let mut buf = buffer_with("hello world");
        buf.set_cursor(6);
        buf.delete_to_start();
        assert_eq!(buf.text(), "world");
        assert_eq!(buf.cursor(), 0);

        let mut buf = buffer_with("hello world");
        buf.set_cursor(5);
        buf.delete_to_end();
        assert_eq!(buf.text(), "hello");
        assert_eq!(buf.cursor(), 5);
    }

    #[test]
    fn test_delete_word_backward() {
        let mut buf = buffer_with("hello world");
        buf.delete_word_backward();
        assert_eq!(buf.text(), "hello ");
        assert_eq!(buf.cursor(), 6);
    }

    #[test]
    fn test_delete_word_backward_skips_trailing_whitespace() {
        let mut buf = buffer_with("hello world   ");
        buf.delete_word_backward();
        assert_eq!(buf.text(), "hello ");
        assert_eq!(buf.cursor(), 6);
    }

    #[test]
    fn test_delete_word_backward_at_start_is_noop() {
        let mut buf = buffer_with("hello");
        buf.move_to_start();
        buf.delete_word_backward();
        assert_eq!(buf.text(), "hello");
    }

    #[test]
    fn test_cursor_counts_characters_not_bytes() {
        let mut buf = InputBuffer::new(10);
        for ch in "日本語".chars() {
            buf.insert_char(ch);
        }
        assert_eq!(buf.len(), 3);
        assert_eq!(buf.cursor(), 3);
        buf.delete_backward();
        assert_eq!(buf.text(), "日本");
    }

    #[test]
    fn test_set_text_truncates_at_capacity() {
        let mut buf = InputBuffer::new(4);
        buf.set_text("abcdef");
        assert_eq!(buf.text(), "abcd");
        assert_eq!(buf.cursor(), 4);
    }
}
