//! UTF-8 safe single-line edit buffer with cursor management.
//!
//! Terminal hosts have no native text field to lean on, so the input
//! element carries its own buffer. The cursor is a byte index into the
//! buffer and always sits on a UTF-8 boundary.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Clone, Debug, Default)]
pub struct LineEditor {
    /// The underlying text buffer
    value: String,
    /// Cursor byte index into `value` (always on a UTF-8 boundary)
    cursor: usize,
}

impl LineEditor {
    pub fn new() -> Self {
        Self {
            value: String::new(),
            cursor: 0,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Replaces the buffer and parks the cursor at the end.
    pub fn set_value<S: Into<String>>(&mut self, value: S) {
        self.value = value.into();
        self.cursor = self.value.len();
    }

    /// Move cursor one Unicode scalar to the left.
    pub fn move_left(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let prev_len = self.value[..self.cursor].chars().last().map(|c| c.len_utf8()).unwrap_or(1);
        self.cursor = self.cursor.saturating_sub(prev_len);
    }

    /// Move cursor one Unicode scalar to the right.
    pub fn move_right(&mut self) {
        if self.cursor >= self.value.len() {
            return;
        }
        let mut iter = self.value[self.cursor..].chars();
        if let Some(next) = iter.next() {
            self.cursor = self.cursor.saturating_add(next.len_utf8());
        }
    }

    /// Jump to the start of the buffer.
    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    /// Jump past the last char of the buffer.
    pub fn move_end(&mut self) {
        self.cursor = self.value.len();
    }

    /// Insert a char at the cursor.
    pub fn insert_char(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Backspace the char immediately before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let prev = self.value[..self.cursor].chars().last().map(|c| c.len_utf8()).unwrap_or(1);
        let start = self.cursor - prev;
        self.value.drain(start..self.cursor);
        self.cursor = start;
    }

    /// Delete the char under the cursor.
    pub fn delete(&mut self) {
        if self.cursor >= self.value.len() {
            return;
        }
        let next = self.value[self.cursor..].chars().next().map(|c| c.len_utf8()).unwrap_or(1);
        self.value.drain(self.cursor..self.cursor + next);
    }

    /// Applies one key event to the buffer.
    ///
    /// Only plain editing keys mutate the buffer. Chords carrying Control or
    /// Alt, and keys with no editing meaning, fall through untouched.
    pub fn apply_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                self.insert_char(c);
            }
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Home => self.move_home(),
            KeyCode::End => self.move_end(),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_stays_on_utf8_boundaries() {
        let mut editor = LineEditor::new();
        editor.set_value("añb"); // ñ is 2 bytes
        assert_eq!(editor.cursor(), 4);

        editor.move_left(); // before b
        editor.move_left(); // before ñ
        assert_eq!(editor.cursor(), 1);
        editor.delete(); // remove ñ
        assert_eq!(editor.value(), "ab");

        editor.insert_char('ü');
        assert_eq!(editor.value(), "aüb");
        editor.backspace();
        assert_eq!(editor.value(), "ab");
        assert_eq!(editor.cursor(), 1);
    }

    #[test]
    fn home_and_end_jump_the_whole_buffer() {
        let mut editor = LineEditor::new();
        editor.set_value("World");
        editor.move_home();
        assert_eq!(editor.cursor(), 0);
        editor.insert_char('@');
        assert_eq!(editor.value(), "@World");
        editor.move_end();
        assert_eq!(editor.cursor(), editor.value().len());
    }

    #[test]
    fn apply_key_maps_editing_keys() {
        let mut editor = LineEditor::new();
        editor.apply_key(KeyEvent::new(KeyCode::Char('h'), KeyModifiers::NONE));
        editor.apply_key(KeyEvent::new(KeyCode::Char('I'), KeyModifiers::SHIFT));
        assert_eq!(editor.value(), "hI");

        editor.apply_key(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE));
        assert_eq!(editor.value(), "h");

        editor.apply_key(KeyEvent::new(KeyCode::Left, KeyModifiers::NONE));
        editor.apply_key(KeyEvent::new(KeyCode::Delete, KeyModifiers::NONE));
        assert_eq!(editor.value(), "");
    }

    #[test]
    fn apply_key_ignores_chords_and_function_keys() {
        let mut editor = LineEditor::new();
        editor.set_value("keep");

        editor.apply_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        editor.apply_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT));
        editor.apply_key(KeyEvent::new(KeyCode::F(5), KeyModifiers::NONE));
        editor.apply_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));

        assert_eq!(editor.value(), "keep");
        assert_eq!(editor.cursor(), 4);
    }
}
