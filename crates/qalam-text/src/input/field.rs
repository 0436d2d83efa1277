//! The host-side text-field adapter boundary.

use core::ops::Range;

/// Key identity for the events the controller cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Backspace,
    Delete,
    /// A printable character keystroke.
    Char(char),
}

/// A single keystroke delivered by the host UI.
///
/// Events are observed *after* the widget has applied the keystroke:
/// for a character key the char is already in the buffer and the
/// caret sits after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
}

impl KeyEvent {
    pub fn new(key: Key) -> Self {
        Self { key }
    }

    /// The typed character, when this event carries one.
    pub fn ch(&self) -> Option<char> {
        match self.key {
            Key::Char(c) => Some(c),
            _ => None,
        }
    }
}

/// Host text widget adapter consumed by the live-input controller.
///
/// All positions are char indices: the engine operates on Unicode
/// scalar values and performs no grapheme clustering. Implementations
/// must clamp out-of-range indices instead of failing; a text-input
/// path must never interrupt typing.
pub trait TextField {
    /// Current buffer contents.
    fn text(&self) -> String;
    /// Replace the whole buffer. Clears any selection; the caret is
    /// clamped to the new length.
    fn set_text(&mut self, text: &str);
    /// Caret position in chars.
    fn caret(&self) -> usize;
    fn set_caret(&mut self, index: usize);
    /// Active selection as a char range, if any.
    fn selection(&self) -> Option<Range<usize>>;
    fn clear_selection(&mut self);
    /// Insert `text` at char position `index`.
    fn insert(&mut self, index: usize, text: &str);
    /// Delete the chars in `range`, clamped to the buffer.
    fn delete_range(&mut self, range: Range<usize>);
}

/// In-memory [`TextField`] for tests and headless embedders.
#[derive(Debug, Clone, Default)]
pub struct BufferField {
    chars: Vec<char>,
    caret: usize,
    selection: Option<Range<usize>>,
}

impl BufferField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let caret = chars.len();
        Self {
            chars,
            caret,
            selection: None,
        }
    }

    /// Select a char range, clamped to the buffer.
    pub fn select(&mut self, range: Range<usize>) {
        let end = range.end.min(self.chars.len());
        let start = range.start.min(end);
        self.selection = Some(start..end);
    }

    /// Type a character at the caret, the way a real widget applies a
    /// keystroke before the key event reaches the controller.
    pub fn type_char(&mut self, c: char) {
        let at = self.caret.min(self.chars.len());
        self.chars.insert(at, c);
        self.caret = at + 1;
        self.selection = None;
    }
}

impl TextField for BufferField {
    fn text(&self) -> String {
        self.chars.iter().collect()
    }

    fn set_text(&mut self, text: &str) {
        self.chars = text.chars().collect();
        self.caret = self.caret.min(self.chars.len());
        self.selection = None;
    }

    fn caret(&self) -> usize {
        self.caret
    }

    fn set_caret(&mut self, index: usize) {
        self.caret = index.min(self.chars.len());
    }

    fn selection(&self) -> Option<Range<usize>> {
        self.selection.clone()
    }

    fn clear_selection(&mut self) {
        self.selection = None;
    }

    fn insert(&mut self, index: usize, text: &str) {
        let at = index.min(self.chars.len());
        for (offset, c) in text.chars().enumerate() {
            self.chars.insert(at + offset, c);
        }
        if self.caret >= at {
            self.caret += text.chars().count();
        }
    }

    fn delete_range(&mut self, range: Range<usize>) {
        let end = range.end.min(self.chars.len());
        let start = range.start.min(end);
        self.chars.drain(start..end);
        if self.caret > end {
            self.caret -= end - start;
        } else if self.caret > start {
            self.caret = start;
        }
        self.selection = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_inserts_at_caret() {
        let mut field = BufferField::new();
        field.type_char('a');
        field.type_char('b');
        assert_eq!(field.text(), "ab");
        assert_eq!(field.caret(), 2);

        field.set_caret(1);
        field.type_char('x');
        assert_eq!(field.text(), "axb");
        assert_eq!(field.caret(), 2);
    }

    #[test]
    fn delete_range_adjusts_caret() {
        let mut field = BufferField::with_text("hello");
        field.set_caret(4);
        field.delete_range(1..3);
        assert_eq!(field.text(), "hlo");
        assert_eq!(field.caret(), 2);
    }

    #[test]
    fn out_of_range_operations_are_clamped() {
        let mut field = BufferField::with_text("ab");
        field.delete_range(5..9);
        assert_eq!(field.text(), "ab");
        field.insert(10, "c");
        assert_eq!(field.text(), "abc");
        field.set_caret(99);
        assert_eq!(field.caret(), 3);
    }

    #[test]
    fn selection_is_clamped_and_cleared_on_edit() {
        let mut field = BufferField::with_text("abcd");
        field.select(1..99);
        assert_eq!(field.selection(), Some(1..4));
        field.delete_range(0..1);
        assert_eq!(field.selection(), None);
    }
}
