//! Single-line text field: a buffer plus a byte-offset cursor.
//!
//! The path screen delegates ordinary editing here. Every method keeps the
//! cursor on a char boundary, so slicing `buffer[..cursor]` is always valid.

use unicode_width::UnicodeWidthStr;

/// Editing operation on a [`TextField`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    Insert(char),
    DeleteBack,
    DeleteForward,
    DeleteWordBack,
    /// Delete from the start of the line to the cursor.
    ClearToStart,
    /// Delete from the cursor to the end of the line.
    ClearToEnd,
    Left,
    Right,
    Home,
    End,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    buffer: String,
    /// Byte offset in buffer (0..=buffer.len())
    cursor: usize,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.buffer
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Replace the whole buffer; cursor moves to the end.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.buffer = value.into();
        self.cursor = self.buffer.len();
    }

    /// Display width of the text before the cursor, in terminal cells.
    pub fn cursor_column(&self) -> u16 {
        u16::try_from(self.buffer[..self.cursor].width()).unwrap_or(u16::MAX)
    }

    /// Apply an edit. Returns `true` if the buffer content changed.
    pub fn apply(&mut self, edit: Edit) -> bool {
        match edit {
            Edit::Insert(c) => {
                self.buffer.insert(self.cursor, c);
                self.cursor += c.len_utf8();
                true
            }
            Edit::DeleteBack => {
                if self.cursor == 0 {
                    return false;
                }
                let start = prev_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(start..self.cursor);
                self.cursor = start;
                true
            }
            Edit::DeleteForward => {
                if self.cursor == self.buffer.len() {
                    return false;
                }
                let end = next_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(self.cursor..end);
                true
            }
            Edit::DeleteWordBack => {
                let start = prev_word_boundary(&self.buffer, self.cursor);
                if start == self.cursor {
                    return false;
                }
                self.buffer.drain(start..self.cursor);
                self.cursor = start;
                true
            }
            Edit::ClearToStart => {
                if self.cursor == 0 {
                    return false;
                }
                self.buffer.drain(..self.cursor);
                self.cursor = 0;
                true
            }
            Edit::ClearToEnd => {
                if self.cursor == self.buffer.len() {
                    return false;
                }
                self.buffer.truncate(self.cursor);
                true
            }
            Edit::Left => {
                if self.cursor > 0 {
                    self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                }
                false
            }
            Edit::Right => {
                if self.cursor < self.buffer.len() {
                    self.cursor = next_char_boundary(&self.buffer, self.cursor);
                }
                false
            }
            Edit::Home => {
                self.cursor = 0;
                false
            }
            Edit::End => {
                self.cursor = self.buffer.len();
                false
            }
        }
    }
}

/// Byte offset of the character before `pos`.
fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Byte offset of the character after `pos`.
fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

/// Start of the path segment (or word) ending at `pos`.
///
/// Skips separators immediately before the cursor, then everything up to
/// the previous `/` or whitespace.
fn prev_word_boundary(text: &str, pos: usize) -> usize {
    let is_separator = |c: char| c == '/' || c.is_whitespace();
    let before = &text[..pos];
    let trimmed = before.trim_end_matches(is_separator);
    match trimmed.rfind(is_separator) {
        Some(i) => i + 1,
        None => 0,
    }
}
