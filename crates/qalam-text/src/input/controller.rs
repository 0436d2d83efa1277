//! Per-field live-input state machine.
//!
//! Reshapes a text-entry buffer incrementally as the user types,
//! decides caret movement direction, and keeps deletion behavior
//! coherent while the underlying buffer is visually reordered. One
//! session per field, confined to the UI event thread; every handler
//! completes synchronously before the triggering event returns.

use hashbrown::HashMap;
use tracing::debug;

use crate::render::{derender_text, render_text};
use crate::shaping::reshape;
use crate::unicode::{is_arabic, is_digit, is_neutral};

use super::clipboard::Clipboard;
use super::field::{Key, KeyEvent, TextField};

/// Text-entry direction mode for a live-input session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

/// Per-field live-input state.
#[derive(Debug, Clone, Default)]
pub struct InputSession {
    direction: Direction,
    /// Snapshot of the buffer after the last reshape pass; lets an
    /// event that left the text unchanged skip reshaping entirely.
    last_text: String,
    /// Treat field contents as a filesystem path (render/derender per
    /// segment on copy/paste).
    is_path: bool,
}

impl InputSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// A session whose copy/paste transform works per path segment.
    pub fn for_path() -> Self {
        Self {
            is_path: true,
            ..Self::default()
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Handle one keystroke event.
    ///
    /// Character events arrive after the widget applied them (the
    /// typed char already in the buffer, caret after it); deletion
    /// events arrive before anything was removed, since which char
    /// goes depends on the direction mode.
    pub fn handle_key(&mut self, field: &mut dyn TextField, event: KeyEvent) {
        // Digits render identically either way; leave them alone.
        if event.ch().is_some_and(is_digit) {
            return;
        }

        let chars: Vec<char> = field.text().chars().collect();
        let caret = field.caret().min(chars.len());
        let left = caret.checked_sub(1).and_then(|i| chars.get(i)).copied();
        let right = chars.get(caret).copied();

        match event.key {
            Key::Backspace | Key::Delete => self.handle_deletion(field, event.key, caret),
            Key::Char(c) => {
                if left.is_some_and(is_arabic) || right.is_some_and(is_arabic) {
                    self.direction = Direction::Rtl;
                } else if !is_neutral(c) {
                    self.direction = Direction::Ltr;
                }
                // Typing right-to-left means the caret must not drift
                // rightward past the char that was just inserted.
                if is_arabic(c) || (is_neutral(c) && self.direction == Direction::Rtl) {
                    move_caret_left(field);
                }
            }
        }

        self.reshape_field(field);
    }

    /// Deletion with the direction-dependent asymmetry: in RTL mode
    /// Backspace removes the char at the caret (visually behind the
    /// insertion point) and Delete the one before it; LTR is the
    /// mirror image. An active selection is deleted outright.
    fn handle_deletion(&mut self, field: &mut dyn TextField, key: Key, caret: usize) {
        if let Some(selection) = field.selection() {
            if !selection.is_empty() {
                field.delete_range(selection);
                return;
            }
        }

        let len = field.text().chars().count();
        let deletes_at_caret = matches!(
            (self.direction, key),
            (Direction::Rtl, Key::Backspace) | (Direction::Ltr, Key::Delete)
        );
        if deletes_at_caret {
            if caret < len {
                field.delete_range(caret..caret + 1);
            }
        } else if caret > 0 {
            field.delete_range(caret - 1..caret);
        }
    }

    /// Re-run the reshape pass over the whole buffer unless it is
    /// unchanged since the last pass, then restore the caret.
    fn reshape_field(&mut self, field: &mut dyn TextField) {
        let text = field.text();
        if text == self.last_text {
            return;
        }
        let caret = field.caret();
        let reshaped = reshape(&text);
        debug!(chars = reshaped.chars().count(), "reshaped input buffer");
        field.set_text(&reshaped);
        field.set_caret(caret.min(reshaped.chars().count()));
        self.last_text = field.text();
    }

    /// Copy the selection, derendered so the clipboard always carries
    /// logical-order, unshaped text.
    pub fn handle_copy(&self, field: &dyn TextField, clipboard: &mut dyn Clipboard) {
        let Some(selection) = field.selection() else {
            return;
        };
        if selection.is_empty() {
            return;
        }
        let selected: String = field
            .text()
            .chars()
            .skip(selection.start)
            .take(selection.end - selection.start)
            .collect();
        let logical = derender_text(&selected, self.is_path);
        if !clipboard.set(&logical) {
            debug!("copy dropped: clipboard rejected text");
        }
    }

    /// Paste clipboard text rendered into visual form, replacing any
    /// active selection. An empty clipboard is a no-op.
    pub fn handle_paste(&mut self, field: &mut dyn TextField, clipboard: &mut dyn Clipboard) {
        if let Some(selection) = field.selection() {
            if !selection.is_empty() {
                field.delete_range(selection);
            }
        }
        let Some(text) = clipboard.get() else {
            return;
        };
        let rendered = render_text(&text, self.is_path);
        let caret = field.caret();
        field.insert(caret, &rendered);
        field.set_caret(caret + rendered.chars().count());
    }

    /// Set logical text on the field, rendered for display, and
    /// record the snapshot.
    pub fn set_text(&mut self, field: &mut dyn TextField, text: &str) {
        let rendered = render_text(text, self.is_path);
        field.set_text(&rendered);
        self.last_text = field.text();
    }

    /// The field's contents derendered back to logical order.
    pub fn text(&self, field: &dyn TextField) -> String {
        derender_text(&field.text(), self.is_path)
    }
}

fn move_caret_left(field: &mut dyn TextField) {
    let caret = field.caret();
    field.set_caret(caret.saturating_sub(1));
}

/// Field-identifier handle for session registration.
pub type FieldId = u64;

/// Registry associating live-input sessions with host field ids.
///
/// Hosts cannot always hang state off their widget objects; this map
/// is the explicit alternative. All access happens on the UI event
/// thread.
#[derive(Debug, Default)]
pub struct SessionMap {
    sessions: HashMap<FieldId, InputSession>,
}

impl SessionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a session to `id`, replacing any existing one.
    pub fn attach(&mut self, id: FieldId, session: InputSession) -> &mut InputSession {
        let slot = self.sessions.entry(id).or_default();
        *slot = session;
        slot
    }

    pub fn get_mut(&mut self, id: FieldId) -> Option<&mut InputSession> {
        self.sessions.get_mut(&id)
    }

    /// Drop the session when its field is destroyed.
    pub fn detach(&mut self, id: FieldId) {
        self.sessions.remove(&id);
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }
}
