//! Clipboard boundary for copy/paste interception.

use thiserror::Error;
use tracing::warn;

/// Clipboard access as seen by the controller.
///
/// Failures surface as empty results or a `false` return, never as
/// errors: an unavailable clipboard degrades to "do nothing this
/// keystroke".
pub trait Clipboard {
    /// Current clipboard text, if any is available.
    fn get(&mut self) -> Option<String>;
    /// Place `text` on the clipboard. Returns `false` when the host
    /// clipboard rejected it.
    fn set(&mut self, text: &str) -> bool;
}

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("system clipboard unavailable: {0}")]
    Unavailable(String),
}

/// System clipboard backed by `arboard`.
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    /// Connect to the system clipboard. Fails on headless hosts with
    /// no display server.
    pub fn new() -> Result<Self, ClipboardError> {
        arboard::Clipboard::new()
            .map(|inner| Self { inner })
            .map_err(|err| ClipboardError::Unavailable(err.to_string()))
    }
}

impl Clipboard for SystemClipboard {
    fn get(&mut self) -> Option<String> {
        match self.inner.get_text() {
            Ok(text) => Some(text),
            Err(err) => {
                warn!("clipboard read failed: {err}");
                None
            }
        }
    }

    fn set(&mut self, text: &str) -> bool {
        match self.inner.set_text(text.to_owned()) {
            Ok(()) => true,
            Err(err) => {
                warn!("clipboard write failed: {err}");
                false
            }
        }
    }
}

/// In-memory clipboard for tests and headless use.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for MemoryClipboard {
    fn get(&mut self) -> Option<String> {
        self.contents.clone()
    }

    fn set(&mut self, text: &str) -> bool {
        self.contents = Some(text.to_owned());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_clipboard_round_trips() {
        let mut clipboard = MemoryClipboard::new();
        assert_eq!(clipboard.get(), None);
        assert!(clipboard.set("hello"));
        assert_eq!(clipboard.get().as_deref(), Some("hello"));
    }
}
